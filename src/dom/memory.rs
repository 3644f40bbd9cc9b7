//! In-memory document used off the browser.
//!
//! DESIGN
//! ======
//! A small node tree with just enough behavior for the storefront
//! controllers: a single-selector engine (`#id`, `.class`, `[attr]`,
//! `[attr="value"]`, `tag`), bubbling dispatch that honors
//! `stopPropagation`, a queued ready signal, manual timers, and a reload
//! counter. Event delivery is explicit (`click`, `submit`) so callers decide
//! when handlers run.

#[cfg(test)]
#[path = "memory_test.rs"]
mod memory_test;

use std::cell::{Cell, RefCell};
use std::collections::BTreeMap;
use std::rc::{Rc, Weak};

use super::{Element, EventKind, Handler, Page, UiEvent};

#[derive(Debug, Default)]
struct NodeData {
    tag: String,
    classes: Vec<String>,
    attrs: BTreeMap<String, String>,
    styles: BTreeMap<String, String>,
    text: String,
    value: String,
    disabled: bool,
    parent: Option<Weak<RefCell<NodeData>>>,
    children: Vec<MemoryNode>,
}

/// Shared handle to an in-memory element.
#[derive(Clone, Debug)]
pub struct MemoryNode(Rc<RefCell<NodeData>>);

impl MemoryNode {
    pub fn new(tag: &str) -> Self {
        Self(Rc::new(RefCell::new(NodeData {
            tag: tag.to_ascii_lowercase(),
            ..NodeData::default()
        })))
    }

    #[must_use]
    pub fn with_id(self, id: &str) -> Self {
        self.set_attr("id", id);
        self
    }

    #[must_use]
    pub fn with_class(self, class: &str) -> Self {
        self.set_class(class, true);
        self
    }

    #[must_use]
    pub fn with_attr(self, name: &str, value: &str) -> Self {
        self.set_attr(name, value);
        self
    }

    #[must_use]
    pub fn with_text(self, text: &str) -> Self {
        self.set_text(text);
        self
    }

    /// Append `child` as the last child, detaching it from any previous parent.
    pub fn append_child(&self, child: &MemoryNode) {
        child.detach();
        child.0.borrow_mut().parent = Some(Rc::downgrade(&self.0));
        self.0.borrow_mut().children.push(child.clone());
    }

    /// Builder form of [`Self::append_child`].
    #[must_use]
    pub fn with_child(self, child: &MemoryNode) -> Self {
        self.append_child(child);
        self
    }

    pub fn tag(&self) -> String {
        self.0.borrow().tag.clone()
    }

    pub fn id(&self) -> Option<String> {
        self.attr("id")
    }

    pub fn parent(&self) -> Option<MemoryNode> {
        self.0.borrow().parent.as_ref().and_then(Weak::upgrade).map(MemoryNode)
    }

    pub fn children(&self) -> Vec<MemoryNode> {
        self.0.borrow().children.clone()
    }

    pub fn same_node(&self, other: &MemoryNode) -> bool {
        Rc::ptr_eq(&self.0, &other.0)
    }

    /// Whether `other` is this node or one of its descendants.
    pub fn contains(&self, other: &MemoryNode) -> bool {
        let mut current = Some(other.clone());
        while let Some(node) = current {
            if node.same_node(self) {
                return true;
            }
            current = node.parent();
        }
        false
    }

    /// Whether the node is still attached under `root`.
    pub fn is_attached_to(&self, root: &MemoryNode) -> bool {
        root.contains(self)
    }

    fn detach(&self) {
        let Some(parent) = self.parent() else {
            return;
        };
        parent.0.borrow_mut().children.retain(|c| !c.same_node(self));
        self.0.borrow_mut().parent = None;
    }

    fn matches(&self, selector: &Selector<'_>) -> bool {
        let data = self.0.borrow();
        match selector {
            Selector::Id(id) => data.attrs.get("id").is_some_and(|v| v == id),
            Selector::Class(class) => data.classes.iter().any(|c| c == class),
            Selector::Attr { name, value } => match (data.attrs.get(*name), value) {
                (Some(actual), Some(expected)) => actual.as_str() == *expected,
                (Some(_), None) => true,
                (None, _) => false,
            },
            Selector::Tag(tag) => data.tag.eq_ignore_ascii_case(tag),
        }
    }

    /// Depth-first search of descendants, document order.
    fn find(&self, selector: &Selector<'_>) -> Option<MemoryNode> {
        for child in self.children() {
            if child.matches(selector) {
                return Some(child);
            }
            if let Some(found) = child.find(selector) {
                return Some(found);
            }
        }
        None
    }
}

impl Element for MemoryNode {
    fn has_class(&self, class: &str) -> bool {
        self.0.borrow().classes.iter().any(|c| c == class)
    }

    fn set_class(&self, class: &str, enabled: bool) {
        let mut data = self.0.borrow_mut();
        let present = data.classes.iter().any(|c| c == class);
        if enabled && !present {
            data.classes.push(class.to_owned());
        } else if !enabled && present {
            data.classes.retain(|c| c != class);
        }
    }

    fn style(&self, property: &str) -> Option<String> {
        self.0
            .borrow()
            .styles
            .get(property)
            .filter(|v| !v.is_empty())
            .cloned()
    }

    fn set_style(&self, property: &str, value: Option<&str>) {
        let mut data = self.0.borrow_mut();
        match value {
            Some(v) if !v.is_empty() => {
                data.styles.insert(property.to_owned(), v.to_owned());
            }
            _ => {
                data.styles.remove(property);
            }
        }
    }

    fn text(&self) -> String {
        self.0.borrow().text.clone()
    }

    fn set_text(&self, text: &str) {
        text.clone_into(&mut self.0.borrow_mut().text);
    }

    fn attr(&self, name: &str) -> Option<String> {
        self.0.borrow().attrs.get(name).cloned()
    }

    fn set_attr(&self, name: &str, value: &str) {
        self.0
            .borrow_mut()
            .attrs
            .insert(name.to_owned(), value.to_owned());
    }

    fn value(&self) -> String {
        self.0.borrow().value.clone()
    }

    fn set_value(&self, value: &str) {
        value.clone_into(&mut self.0.borrow_mut().value);
    }

    fn is_disabled(&self) -> bool {
        self.0.borrow().disabled
    }

    fn set_disabled(&self, disabled: bool) {
        self.0.borrow_mut().disabled = disabled;
    }
}

/// Event delivered by [`MemoryPage`] dispatch.
#[derive(Debug)]
pub struct MemoryEvent {
    kind: EventKind,
    target: MemoryNode,
    propagation_stopped: Cell<bool>,
    default_prevented: Cell<bool>,
}

impl MemoryEvent {
    pub fn kind(&self) -> EventKind {
        self.kind
    }

    pub fn target(&self) -> &MemoryNode {
        &self.target
    }

    pub fn is_propagation_stopped(&self) -> bool {
        self.propagation_stopped.get()
    }

    pub fn is_default_prevented(&self) -> bool {
        self.default_prevented.get()
    }
}

impl UiEvent for MemoryEvent {
    fn stop_propagation(&self) {
        self.propagation_stopped.set(true);
    }

    fn prevent_default(&self) {
        self.default_prevented.set(true);
    }
}

struct Listener {
    /// `None` for document-level listeners.
    node: Option<MemoryNode>,
    kind: EventKind,
    handler: Rc<dyn Fn(&MemoryEvent)>,
}

/// In-memory document: `<html><body>...</body></html>`.
pub struct MemoryPage {
    root: MemoryNode,
    body: MemoryNode,
    listeners: RefCell<Vec<Listener>>,
    ready: Cell<bool>,
    ready_callbacks: RefCell<Vec<Box<dyn FnOnce()>>>,
    timers: RefCell<Vec<(u32, Box<dyn FnOnce()>)>>,
    reloads: Cell<u32>,
}

impl Default for MemoryPage {
    fn default() -> Self {
        Self::new()
    }
}

impl MemoryPage {
    /// An empty document that has not yet signaled ready.
    pub fn new() -> Self {
        let body = MemoryNode::new("body");
        let root = MemoryNode::new("html").with_child(&body);
        Self {
            root,
            body,
            listeners: RefCell::new(Vec::new()),
            ready: Cell::new(false),
            ready_callbacks: RefCell::new(Vec::new()),
            timers: RefCell::new(Vec::new()),
            reloads: Cell::new(0),
        }
    }

    /// Append `node` to the body.
    pub fn mount(&self, node: &MemoryNode) {
        self.body.append_child(node);
    }

    pub fn document_element(&self) -> &MemoryNode {
        &self.root
    }

    /// Dispatch a click on `target` and return the event after delivery.
    pub fn click(&self, target: &MemoryNode) -> MemoryEvent {
        self.dispatch(target, EventKind::Click)
    }

    /// Dispatch a submit on `target` and return the event after delivery.
    pub fn submit(&self, target: &MemoryNode) -> MemoryEvent {
        self.dispatch(target, EventKind::Submit)
    }

    /// Deliver `kind` to `target`, bubbling through its ancestors and then the
    /// document until a handler stops propagation.
    pub fn dispatch(&self, target: &MemoryNode, kind: EventKind) -> MemoryEvent {
        let event = MemoryEvent {
            kind,
            target: target.clone(),
            propagation_stopped: Cell::new(false),
            default_prevented: Cell::new(false),
        };

        let mut current = Some(target.clone());
        while let Some(node) = current {
            for handler in self.handlers_for(Some(&node), kind) {
                handler(&event);
            }
            if event.is_propagation_stopped() {
                return event;
            }
            current = node.parent();
        }
        for handler in self.handlers_for(None, kind) {
            handler(&event);
        }
        event
    }

    /// Signal the end of the initial parse and run queued ready callbacks.
    pub fn fire_ready(&self) {
        self.ready.set(true);
        let callbacks = std::mem::take(&mut *self.ready_callbacks.borrow_mut());
        for callback in callbacks {
            callback();
        }
    }

    pub fn is_ready(&self) -> bool {
        self.ready.get()
    }

    /// Run every timer queued so far, in registration order, regardless of
    /// delay. Timers queued by those callbacks stay pending.
    pub fn run_timers(&self) -> usize {
        let timers = std::mem::take(&mut *self.timers.borrow_mut());
        let count = timers.len();
        for (_, callback) in timers {
            callback();
        }
        count
    }

    /// Delays of pending timers.
    pub fn pending_timers(&self) -> Vec<u32> {
        self.timers.borrow().iter().map(|(delay, _)| *delay).collect()
    }

    pub fn reload_count(&self) -> u32 {
        self.reloads.get()
    }

    pub fn listener_count(&self) -> usize {
        self.listeners.borrow().len()
    }

    fn handlers_for(&self, node: Option<&MemoryNode>, kind: EventKind) -> Vec<Rc<dyn Fn(&MemoryEvent)>> {
        self.listeners
            .borrow()
            .iter()
            .filter(|l| l.kind == kind)
            .filter(|l| match (&l.node, node) {
                (Some(a), Some(b)) => a.same_node(b),
                (None, None) => true,
                _ => false,
            })
            .map(|l| Rc::clone(&l.handler))
            .collect()
    }
}

impl Page for MemoryPage {
    type Node = MemoryNode;
    type Event = MemoryEvent;

    fn select(&self, selector: &str) -> Option<MemoryNode> {
        let selector = Selector::parse(selector)?;
        self.root.find(&selector)
    }

    fn select_in(&self, root: &MemoryNode, selector: &str) -> Option<MemoryNode> {
        let selector = Selector::parse(selector)?;
        root.find(&selector)
    }

    fn body(&self) -> Option<MemoryNode> {
        Some(self.body.clone())
    }

    fn create(&self, tag: &str) -> Option<MemoryNode> {
        Some(MemoryNode::new(tag))
    }

    fn append(&self, parent: &MemoryNode, child: &MemoryNode) {
        parent.append_child(child);
    }

    fn remove(&self, node: &MemoryNode) {
        node.detach();
        let released: Vec<Listener> = {
            let mut listeners = self.listeners.borrow_mut();
            let (released, kept) = std::mem::take(&mut *listeners)
                .into_iter()
                .partition(|l| l.node.as_ref().is_some_and(|n| node.contains(n)));
            *listeners = kept;
            released
        };
        // Handlers may own the page; drop them outside the borrow.
        drop(released);
    }

    fn listen(&self, node: &MemoryNode, kind: EventKind, handler: Handler<MemoryEvent>) {
        self.listeners.borrow_mut().push(Listener {
            node: Some(node.clone()),
            kind,
            handler: Rc::from(handler),
        });
    }

    fn listen_document(&self, kind: EventKind, handler: Handler<MemoryEvent>) {
        self.listeners.borrow_mut().push(Listener {
            node: None,
            kind,
            handler: Rc::from(handler),
        });
    }

    fn contains_target(&self, node: &MemoryNode, event: &MemoryEvent) -> bool {
        node.contains(&event.target)
    }

    fn on_ready(&self, callback: Box<dyn FnOnce()>) {
        if self.ready.get() {
            callback();
        } else {
            self.ready_callbacks.borrow_mut().push(callback);
        }
    }

    fn set_timeout(&self, delay_ms: u32, callback: Box<dyn FnOnce()>) {
        self.timers.borrow_mut().push((delay_ms, callback));
    }

    fn reload(&self) {
        self.reloads.set(self.reloads.get() + 1);
    }
}

/// A single simple selector.
#[derive(Debug, PartialEq, Eq)]
enum Selector<'a> {
    Id(&'a str),
    Class(&'a str),
    Attr { name: &'a str, value: Option<&'a str> },
    Tag(&'a str),
}

impl<'a> Selector<'a> {
    fn parse(raw: &'a str) -> Option<Self> {
        let raw = raw.trim();
        if let Some(id) = raw.strip_prefix('#') {
            return (!id.is_empty()).then_some(Self::Id(id));
        }
        if let Some(class) = raw.strip_prefix('.') {
            return (!class.is_empty()).then_some(Self::Class(class));
        }
        if let Some(inner) = raw.strip_prefix('[').and_then(|r| r.strip_suffix(']')) {
            return match inner.split_once('=') {
                Some((name, value)) => {
                    let value = value.trim().trim_matches(|c| c == '"' || c == '\'');
                    Some(Self::Attr {
                        name: name.trim(),
                        value: Some(value),
                    })
                }
                None => Some(Self::Attr {
                    name: inner.trim(),
                    value: None,
                }),
            };
        }
        let is_tag = !raw.is_empty() && raw.chars().all(|c| c.is_ascii_alphanumeric() || c == '-');
        is_tag.then_some(Self::Tag(raw))
    }
}
