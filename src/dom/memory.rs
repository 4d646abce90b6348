//! In-memory DOM
//!
//! A small element tree implementing [`DomDocument`], [`DomElement`] and
//! [`DomEvent`] without a browser. It records smooth-scroll requests and
//! default-action suppression so the behaviors can be checked natively.
//!
//! Selector support covers compound selectors only: a tag name or `*`,
//! followed by any mix of `#id`, `.class` and `[attr]`, `[attr="v"]`,
//! `[attr^="v"]`. Combinators are rejected with
//! [`NavError::InvalidSelector`].

use std::cell::{Cell, RefCell};
use std::fmt;
use std::rc::Rc;

use super::{DomDocument, DomElement, DomEvent};
use crate::error::{NavError, NavResult};

struct Node {
    tag: String,
    attributes: Vec<(String, String)>,
    classes: Vec<String>,
    children: Vec<MemoryElement>,
    top: f64,
    scroll_log: Rc<RefCell<Vec<MemoryElement>>>,
}

/// Shared handle to an in-memory element
#[derive(Clone)]
pub struct MemoryElement(Rc<RefCell<Node>>);

impl fmt::Debug for MemoryElement {
    // Elements reach each other through the shared scroll log; print only this node.
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let node = self.0.borrow();
        f.debug_struct("MemoryElement")
            .field("tag", &node.tag)
            .field("attributes", &node.attributes)
            .field("classes", &node.classes)
            .field("children", &node.children.len())
            .finish()
    }
}

impl PartialEq for MemoryElement {
    fn eq(&self, other: &Self) -> bool {
        Rc::ptr_eq(&self.0, &other.0)
    }
}

impl Eq for MemoryElement {}

impl MemoryElement {
    pub fn tag(&self) -> String {
        self.0.borrow().tag.clone()
    }

    pub fn id(&self) -> Option<String> {
        self.attribute("id")
    }

    /// Builder form of `set_attribute("id", ..)`
    pub fn with_id(self, id: &str) -> Self {
        self.set_attribute("id", id);
        self
    }

    /// Builder form of `set_attribute`
    pub fn with_attribute(self, name: &str, value: &str) -> Self {
        self.set_attribute(name, value);
        self
    }

    pub fn set_attribute(&self, name: &str, value: &str) {
        if name == "class" {
            self.0.borrow_mut().classes = value.split_whitespace().map(str::to_string).collect();
            return;
        }
        let mut node = self.0.borrow_mut();
        match node.attributes.iter_mut().find(|(n, _)| n == name) {
            Some((_, v)) => *v = value.to_string(),
            None => node.attributes.push((name.to_string(), value.to_string())),
        }
    }

    pub fn classes(&self) -> Vec<String> {
        self.0.borrow().classes.clone()
    }

    /// Position the element relative to the viewport, as layout would after a scroll
    pub fn set_viewport_top(&self, top: f64) {
        self.0.borrow_mut().top = top;
    }

    pub fn append_child(&self, child: &MemoryElement) {
        self.0.borrow_mut().children.push(child.clone());
    }

    pub fn children(&self) -> Vec<MemoryElement> {
        self.0.borrow().children.clone()
    }

    fn descendants(&self, out: &mut Vec<MemoryElement>) {
        for child in self.0.borrow().children.iter() {
            out.push(child.clone());
            child.descendants(out);
        }
    }

    fn matches(&self, selector: &Selector) -> bool {
        let node = self.0.borrow();
        if let Some(tag) = &selector.tag {
            if !node.tag.eq_ignore_ascii_case(tag) {
                return false;
            }
        }
        if !selector.classes.iter().all(|c| node.classes.contains(c)) {
            return false;
        }
        drop(node);

        if let Some(id) = &selector.id {
            if self.id().as_deref() != Some(id.as_str()) {
                return false;
            }
        }
        selector.attributes.iter().all(|(name, op)| {
            let Some(value) = self.attribute(name) else {
                return false;
            };
            match op {
                AttrOp::Exists => true,
                AttrOp::Equals(expected) => value == *expected,
                AttrOp::Prefix(prefix) => !prefix.is_empty() && value.starts_with(prefix.as_str()),
            }
        })
    }
}

impl DomElement for MemoryElement {
    fn has_class(&self, class: &str) -> bool {
        self.0.borrow().classes.iter().any(|c| c == class)
    }

    fn add_class(&self, class: &str) -> NavResult<()> {
        check_token(class)?;
        if !self.has_class(class) {
            self.0.borrow_mut().classes.push(class.to_string());
        }
        Ok(())
    }

    fn remove_class(&self, class: &str) -> NavResult<()> {
        check_token(class)?;
        self.0.borrow_mut().classes.retain(|c| c != class);
        Ok(())
    }

    fn toggle_class(&self, class: &str) -> NavResult<bool> {
        if self.has_class(class) {
            self.remove_class(class)?;
            Ok(false)
        } else {
            self.add_class(class)?;
            Ok(true)
        }
    }

    fn attribute(&self, name: &str) -> Option<String> {
        let node = self.0.borrow();
        if name == "class" {
            return (!node.classes.is_empty()).then(|| node.classes.join(" "));
        }
        node.attributes
            .iter()
            .find(|(n, _)| n == name)
            .map(|(_, v)| v.clone())
    }

    fn query_selector(&self, selector: &str) -> NavResult<Option<Self>> {
        let selector = Selector::parse(selector)?;
        let mut all = Vec::new();
        self.descendants(&mut all);
        Ok(all.into_iter().find(|el| el.matches(&selector)))
    }

    fn viewport_top(&self) -> f64 {
        self.0.borrow().top
    }

    fn scroll_into_view_smooth(&self) {
        let log = Rc::clone(&self.0.borrow().scroll_log);
        log.borrow_mut().push(self.clone());
    }
}

/// A document with a `body` root and a fixed-height viewport
#[derive(Debug, Clone)]
pub struct MemoryDocument {
    body: MemoryElement,
    viewport_height: Rc<Cell<f64>>,
    scroll_log: Rc<RefCell<Vec<MemoryElement>>>,
}

impl MemoryDocument {
    pub fn new(viewport_height: f64) -> Self {
        let scroll_log = Rc::new(RefCell::new(Vec::new()));
        let body = MemoryElement(Rc::new(RefCell::new(Node {
            tag: "body".to_string(),
            attributes: Vec::new(),
            classes: Vec::new(),
            children: Vec::new(),
            top: 0.0,
            scroll_log: Rc::clone(&scroll_log),
        })));
        Self {
            body,
            viewport_height: Rc::new(Cell::new(viewport_height)),
            scroll_log,
        }
    }

    /// Create a detached element owned by this document
    pub fn create_element(&self, tag: &str) -> MemoryElement {
        MemoryElement(Rc::new(RefCell::new(Node {
            tag: tag.to_ascii_lowercase(),
            attributes: Vec::new(),
            classes: Vec::new(),
            children: Vec::new(),
            top: 0.0,
            scroll_log: Rc::clone(&self.scroll_log),
        })))
    }

    pub fn body(&self) -> MemoryElement {
        self.body.clone()
    }

    /// Append to `body`
    pub fn append(&self, element: &MemoryElement) {
        self.body.append_child(element);
    }

    pub fn set_viewport_height(&self, height: f64) {
        self.viewport_height.set(height);
    }

    /// Every element a smooth scroll was requested for, oldest first
    pub fn scroll_requests(&self) -> Vec<MemoryElement> {
        self.scroll_log.borrow().clone()
    }
}

impl DomDocument for MemoryDocument {
    type Element = MemoryElement;

    fn element_by_id(&self, id: &str) -> Option<MemoryElement> {
        let mut all = Vec::new();
        self.body.descendants(&mut all);
        all.into_iter().find(|el| el.id().as_deref() == Some(id))
    }

    fn query_selector_all(&self, selector: &str) -> NavResult<Vec<MemoryElement>> {
        let selector = Selector::parse(selector)?;
        let mut all = Vec::new();
        self.body.descendants(&mut all);
        Ok(all.into_iter().filter(|el| el.matches(&selector)).collect())
    }

    fn viewport_height(&self) -> NavResult<f64> {
        Ok(self.viewport_height.get())
    }
}

/// A synthetic click
#[derive(Debug, Default)]
pub struct MemoryEvent {
    default_prevented: Cell<bool>,
}

impl MemoryEvent {
    pub fn click() -> Self {
        Self::default()
    }

    pub fn default_prevented(&self) -> bool {
        self.default_prevented.get()
    }
}

impl DomEvent for MemoryEvent {
    fn prevent_default(&self) {
        self.default_prevented.set(true);
    }
}

fn check_token(class: &str) -> NavResult<()> {
    if class.is_empty() || class.chars().any(char::is_whitespace) {
        return Err(NavError::Dom(format!("invalid class token '{}'", class)));
    }
    Ok(())
}

#[derive(Debug, Clone, PartialEq)]
enum AttrOp {
    Exists,
    Equals(String),
    Prefix(String),
}

#[derive(Debug, Default, PartialEq)]
struct Selector {
    tag: Option<String>,
    id: Option<String>,
    classes: Vec<String>,
    attributes: Vec<(String, AttrOp)>,
}

impl Selector {
    fn parse(input: &str) -> NavResult<Self> {
        let invalid = || NavError::InvalidSelector(input.to_string());
        let source = input.trim();
        if source.is_empty() {
            return Err(invalid());
        }

        let chars: Vec<char> = source.chars().collect();
        let mut pos = 0;
        let mut selector = Selector::default();

        if chars[0] == '*' {
            pos = 1;
        } else {
            let tag = read_ident(&chars, &mut pos);
            if !tag.is_empty() {
                selector.tag = Some(tag);
            }
        }

        while pos < chars.len() {
            match chars[pos] {
                '#' => {
                    pos += 1;
                    let id = read_ident(&chars, &mut pos);
                    if id.is_empty() {
                        return Err(invalid());
                    }
                    selector.id = Some(id);
                }
                '.' => {
                    pos += 1;
                    let class = read_ident(&chars, &mut pos);
                    if class.is_empty() {
                        return Err(invalid());
                    }
                    selector.classes.push(class);
                }
                '[' => {
                    pos += 1;
                    let name = read_ident(&chars, &mut pos);
                    if name.is_empty() {
                        return Err(invalid());
                    }
                    let op = match chars.get(pos) {
                        Some(']') => AttrOp::Exists,
                        Some('=') => {
                            pos += 1;
                            AttrOp::Equals(read_value(&chars, &mut pos).ok_or_else(invalid)?)
                        }
                        Some('^') if chars.get(pos + 1) == Some(&'=') => {
                            pos += 2;
                            AttrOp::Prefix(read_value(&chars, &mut pos).ok_or_else(invalid)?)
                        }
                        _ => return Err(invalid()),
                    };
                    if chars.get(pos) != Some(&']') {
                        return Err(invalid());
                    }
                    pos += 1;
                    selector.attributes.push((name, op));
                }
                _ => return Err(invalid()),
            }
        }

        Ok(selector)
    }
}

fn read_ident(chars: &[char], pos: &mut usize) -> String {
    let start = *pos;
    while *pos < chars.len() && (chars[*pos].is_alphanumeric() || chars[*pos] == '-' || chars[*pos] == '_') {
        *pos += 1;
    }
    chars[start..*pos].iter().collect()
}

fn read_value(chars: &[char], pos: &mut usize) -> Option<String> {
    match chars.get(*pos) {
        Some(&quote) if quote == '"' || quote == '\'' => {
            let start = *pos + 1;
            let end = start + chars[start..].iter().position(|&c| c == quote)?;
            *pos = end + 1;
            Some(chars[start..end].iter().collect())
        }
        _ => {
            let value = read_ident(chars, pos);
            (!value.is_empty()).then_some(value)
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn sample() -> (MemoryDocument, MemoryElement, MemoryElement) {
        let doc = MemoryDocument::new(800.0);
        let nav = doc.create_element("nav").with_id("navbar");
        let list = doc.create_element("UL").with_attribute("class", "links main");
        let link = doc.create_element("a").with_attribute("href", "#about");
        list.append_child(&link);
        nav.append_child(&list);
        doc.append(&nav);
        doc.append(&doc.create_element("a").with_attribute("href", "https://example.com"));
        (doc, list, link)
    }

    #[test]
    fn test_selector_parse() {
        let sel = Selector::parse("a[href^=\"#\"]").unwrap();
        assert_eq!(sel.tag.as_deref(), Some("a"));
        assert_eq!(sel.attributes, vec![("href".to_string(), AttrOp::Prefix("#".to_string()))]);

        let sel = Selector::parse("ul.links#main[data-x]").unwrap();
        assert_eq!(sel.id.as_deref(), Some("main"));
        assert_eq!(sel.classes, vec!["links".to_string()]);
        assert_eq!(sel.attributes, vec![("data-x".to_string(), AttrOp::Exists)]);
    }

    #[test]
    fn test_selector_rejects_combinators() {
        assert!(matches!(Selector::parse("nav ul"), Err(NavError::InvalidSelector(_))));
        assert!(matches!(Selector::parse("#"), Err(NavError::InvalidSelector(_))));
        assert!(matches!(Selector::parse(""), Err(NavError::InvalidSelector(_))));
        assert!(matches!(Selector::parse("a[href^=\"#]"), Err(NavError::InvalidSelector(_))));
    }

    #[test]
    fn test_query_selector_finds_descendants() {
        let (doc, list, link) = sample();
        let nav = doc.element_by_id("navbar").unwrap();
        assert_eq!(nav.query_selector("ul").unwrap(), Some(list));
        assert_eq!(nav.query_selector("a").unwrap(), Some(link.clone()));
        assert_eq!(link.query_selector("a").unwrap(), None);
    }

    #[test]
    fn test_prefix_attribute_match() {
        let (doc, _, link) = sample();
        let links = doc.query_selector_all("a[href^=\"#\"]").unwrap();
        assert_eq!(links, vec![link]);
        assert_eq!(doc.query_selector_all("a").unwrap().len(), 2);
    }

    #[test]
    fn test_class_set_semantics() {
        let (_, list, _) = sample();
        list.add_class("show").unwrap();
        list.add_class("show").unwrap();
        assert_eq!(list.classes(), vec!["links", "main", "show"]);
        assert!(!list.toggle_class("show").unwrap());
        assert!(!list.has_class("show"));
        list.remove_class("show").unwrap();
        assert_eq!(list.attribute("class").as_deref(), Some("links main"));
        assert!(list.add_class("two words").is_err());
    }

    #[test]
    fn test_scroll_requests_are_recorded() {
        let (doc, _, link) = sample();
        link.scroll_into_view_smooth();
        assert_eq!(doc.scroll_requests(), vec![link]);
    }

    #[test]
    fn test_event_default_prevented() {
        let event = MemoryEvent::click();
        assert!(!event.default_prevented());
        event.prevent_default();
        assert!(event.default_prevented());
    }
}
