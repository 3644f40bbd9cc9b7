//! Live-document backend over `web_sys`.
//!
//! Element listener closures are owned by the page and dropped when their
//! element is removed through [`Page::remove`]. Document listeners are leaked
//! with `Closure::forget` and live as long as the page.

use std::cell::RefCell;

use wasm_bindgen::JsCast;
use wasm_bindgen::closure::Closure;
use web_sys::{Document, Event, HtmlElement, HtmlInputElement, Window};

use super::{Element, EventKind, Handler, Page, UiEvent};

impl UiEvent for Event {
    fn stop_propagation(&self) {
        Event::stop_propagation(self);
    }

    fn prevent_default(&self) {
        Event::prevent_default(self);
    }
}

impl Element for HtmlElement {
    fn has_class(&self, class: &str) -> bool {
        self.class_list().contains(class)
    }

    fn set_class(&self, class: &str, enabled: bool) {
        let _ = self.class_list().toggle_with_force(class, enabled);
    }

    fn style(&self, property: &str) -> Option<String> {
        HtmlElement::style(self)
            .get_property_value(property)
            .ok()
            .filter(|v| !v.is_empty())
    }

    fn set_style(&self, property: &str, value: Option<&str>) {
        let style = HtmlElement::style(self);
        match value {
            Some(v) => {
                let _ = style.set_property(property, v);
            }
            None => {
                let _ = style.remove_property(property);
            }
        }
    }

    fn text(&self) -> String {
        self.text_content().unwrap_or_default()
    }

    fn set_text(&self, text: &str) {
        self.set_text_content(Some(text));
    }

    fn attr(&self, name: &str) -> Option<String> {
        self.get_attribute(name)
    }

    fn set_attr(&self, name: &str, value: &str) {
        let _ = self.set_attribute(name, value);
    }

    fn value(&self) -> String {
        self.dyn_ref::<HtmlInputElement>()
            .map(HtmlInputElement::value)
            .unwrap_or_default()
    }

    fn set_value(&self, value: &str) {
        if let Some(input) = self.dyn_ref::<HtmlInputElement>() {
            input.set_value(value);
        }
    }

    fn is_disabled(&self) -> bool {
        self.has_attribute("disabled")
    }

    fn set_disabled(&self, disabled: bool) {
        if disabled {
            let _ = self.set_attribute("disabled", "");
        } else {
            let _ = self.remove_attribute("disabled");
        }
    }
}

type Callback = Closure<dyn Fn(Event)>;

/// A closure registered on an element, kept so it can be detached.
struct ElementListener {
    node: HtmlElement,
    kind: EventKind,
    closure: Callback,
}

/// The current browser window and document.
pub struct BrowserPage {
    window: Window,
    document: Document,
    listeners: RefCell<Vec<ElementListener>>,
}

impl BrowserPage {
    /// `None` outside a window context (workers, SSR).
    pub fn new() -> Option<Self> {
        let window = web_sys::window()?;
        let document = window.document()?;
        Some(Self {
            window,
            document,
            listeners: RefCell::new(Vec::new()),
        })
    }

    fn add_listener(target: &web_sys::EventTarget, kind: EventKind, handler: Handler<Event>) -> Callback {
        let closure = Callback::new(move |event: Event| handler(&event));
        let _ = target.add_event_listener_with_callback(kind.as_str(), closure.as_ref().unchecked_ref());
        closure
    }
}

impl Page for BrowserPage {
    type Node = HtmlElement;
    type Event = Event;

    fn select(&self, selector: &str) -> Option<HtmlElement> {
        self.document
            .query_selector(selector)
            .ok()
            .flatten()
            .and_then(|el| el.dyn_into::<HtmlElement>().ok())
    }

    fn select_in(&self, root: &HtmlElement, selector: &str) -> Option<HtmlElement> {
        root.query_selector(selector)
            .ok()
            .flatten()
            .and_then(|el| el.dyn_into::<HtmlElement>().ok())
    }

    fn body(&self) -> Option<HtmlElement> {
        self.document.body()
    }

    fn create(&self, tag: &str) -> Option<HtmlElement> {
        self.document
            .create_element(tag)
            .ok()
            .and_then(|el| el.dyn_into::<HtmlElement>().ok())
    }

    fn append(&self, parent: &HtmlElement, child: &HtmlElement) {
        let _ = parent.append_child(child);
    }

    fn remove(&self, node: &HtmlElement) {
        node.remove();
        let released: Vec<ElementListener> = {
            let mut listeners = self.listeners.borrow_mut();
            let (released, kept) = std::mem::take(&mut *listeners)
                .into_iter()
                .partition(|l| {
                    let bound: &web_sys::Node = &l.node;
                    node.contains(Some(bound))
                });
            *listeners = kept;
            released
        };
        for listener in released {
            let _ = listener.node.remove_event_listener_with_callback(
                listener.kind.as_str(),
                listener.closure.as_ref().unchecked_ref(),
            );
        }
    }

    fn listen(&self, node: &HtmlElement, kind: EventKind, handler: Handler<Event>) {
        let closure = Self::add_listener(node, kind, handler);
        self.listeners.borrow_mut().push(ElementListener {
            node: node.clone(),
            kind,
            closure,
        });
    }

    fn listen_document(&self, kind: EventKind, handler: Handler<Event>) {
        Self::add_listener(&self.document, kind, handler).forget();
    }

    fn contains_target(&self, node: &HtmlElement, event: &Event) -> bool {
        event
            .target()
            .and_then(|t| t.dyn_into::<web_sys::Node>().ok())
            .is_some_and(|target| node.contains(Some(&target)))
    }

    fn on_ready(&self, callback: Box<dyn FnOnce()>) {
        if self.document.ready_state() == "loading" {
            let js = Closure::once_into_js(move || callback());
            let _ = self
                .document
                .add_event_listener_with_callback("DOMContentLoaded", js.unchecked_ref());
        } else {
            callback();
        }
    }

    fn set_timeout(&self, delay_ms: u32, callback: Box<dyn FnOnce()>) {
        gloo_timers::callback::Timeout::new(delay_ms, move || callback()).forget();
    }

    fn reload(&self) {
        if let Err(e) = self.window.location().reload() {
            log::warn!("page reload failed: {e:?}");
        }
    }
}
