//! DOM query engine over the fetched markup.
//!
//! Wraps `scraper::Html` and exposes the handful of traversal primitives the
//! section extractors share. Every primitive is total: a miss returns `None`
//! or an empty collection, never an error, so extractors treat missing
//! markup as "no data for this sub-feature".
//!
//! Section content on the build page is not always a direct child of its
//! heading, so sections are associated with headings by walking backward
//! through document order ([`nearest_preceding_heading`]) rather than by
//! structural parent/child. If the upstream nesting changes, only that walk
//! needs adjusting.

use ego_tree::NodeRef;
use scraper::node::Node;
use scraper::{ElementRef, Html, Selector};

/// Elements treated as section headings.
const HEADING_TAGS: &[&str] = &["h2", "h3", "h4"];

/// A parsed, read-only document.
pub struct DomDocument {
    html: Html,
}

impl DomDocument {
    pub fn parse(raw: &str) -> Self {
        Self {
            html: Html::parse_document(raw),
        }
    }

    /// All elements matching a CSS selector, in document order.
    ///
    /// An unparseable selector yields no matches.
    pub fn select_all(&self, selector: &str) -> Vec<ElementRef<'_>> {
        match Selector::parse(selector) {
            Ok(sel) => self.html.select(&sel).collect(),
            Err(_) => Vec::new(),
        }
    }

    /// First heading element whose text contains `needle` (case-sensitive),
    /// searching from the document root.
    pub fn find_heading_containing(&self, needle: &str) -> Option<ElementRef<'_>> {
        self.html
            .root_element()
            .descendants()
            .filter_map(ElementRef::wrap)
            .find(|el| is_heading(*el) && text_of(*el).contains(needle))
    }
}

/// Elements under `el` matching a CSS selector, in document order.
pub fn select_within<'a>(el: ElementRef<'a>, selector: &str) -> Vec<ElementRef<'a>> {
    match Selector::parse(selector) {
        Ok(sel) => el.select(&sel).collect(),
        Err(_) => Vec::new(),
    }
}

/// Closest heading element strictly before `el` in document order, walking
/// backward across nesting boundaries.
pub fn nearest_preceding_heading(el: ElementRef<'_>) -> Option<ElementRef<'_>> {
    let mut node: NodeRef<'_, Node> = *el;
    while let Some(prev) = prev_in_document(node) {
        if let Some(candidate) = ElementRef::wrap(prev) {
            if is_heading(candidate) {
                return Some(candidate);
            }
        }
        node = prev;
    }
    None
}

/// First element named `tag` strictly after `el` in document order,
/// descendants included.
pub fn first_following<'a>(el: ElementRef<'a>, tag: &str) -> Option<ElementRef<'a>> {
    let mut node: NodeRef<'a, Node> = *el;
    while let Some(next) = next_in_document(node) {
        if let Some(candidate) = ElementRef::wrap(next) {
            if candidate.value().name() == tag {
                return Some(candidate);
            }
        }
        node = next;
    }
    None
}

/// Attribute value with a default for absent attributes.
pub fn attr_or<'a>(el: ElementRef<'a>, name: &str, default: &'a str) -> &'a str {
    el.value().attr(name).unwrap_or(default)
}

/// Concatenated text content, whitespace-trimmed.
pub fn text_of(el: ElementRef<'_>) -> String {
    el.text().collect::<String>().trim().to_string()
}

/// Opacity declared in the element's inline style; 1.0 when absent or
/// unparseable.
pub fn opacity(el: ElementRef<'_>) -> f32 {
    let style = attr_or(el, "style", "");
    style
        .split("opacity:")
        .nth(1)
        .and_then(|rest| rest.split(';').next())
        .and_then(|value| value.trim().parse::<f32>().ok())
        .unwrap_or(1.0)
}

pub fn is_heading(el: ElementRef<'_>) -> bool {
    HEADING_TAGS.contains(&el.value().name())
}

/// Previous node in document order: the deepest last descendant of the
/// previous sibling, else the parent.
fn prev_in_document<'a>(node: NodeRef<'a, Node>) -> Option<NodeRef<'a, Node>> {
    match node.prev_sibling() {
        Some(sibling) => {
            let mut n = sibling;
            while let Some(child) = n.last_child() {
                n = child;
            }
            Some(n)
        }
        None => node.parent(),
    }
}

/// Next node in document order: first child, else the next sibling of the
/// nearest ancestor that has one.
fn next_in_document<'a>(node: NodeRef<'a, Node>) -> Option<NodeRef<'a, Node>> {
    if let Some(child) = node.first_child() {
        return Some(child);
    }
    let mut n = node;
    loop {
        if let Some(sibling) = n.next_sibling() {
            return Some(sibling);
        }
        n = n.parent()?;
    }
}
