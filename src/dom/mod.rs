//! Document abstraction the controllers are written against.
//!
//! DESIGN
//! ======
//! Controllers never touch `web_sys` directly. They are generic over a
//! [`Page`] so the same toggle and sync logic runs against the live document
//! under `hydrate` ([`browser::BrowserPage`]) and against the in-memory tree
//! ([`memory::MemoryPage`]) on the server and in tests.
//!
//! Every lookup returns `Option`. A missing node is not an error anywhere in
//! this crate; callers treat `None` as "this page variant has no such
//! fragment" and skip the affected update.

#[cfg(feature = "hydrate")]
pub mod browser;
pub mod memory;


/// Callback registered for a DOM event.
pub type Handler<E> = Box<dyn Fn(&E)>;

/// DOM events the storefront listens for.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum EventKind {
    Click,
    Submit,
}

impl EventKind {
    /// DOM event type name.
    pub fn as_str(self) -> &'static str {
        match self {
            Self::Click => "click",
            Self::Submit => "submit",
        }
    }
}

/// The subset of `Event` the controllers use.
pub trait UiEvent {
    fn stop_propagation(&self);
    fn prevent_default(&self);
}

/// A handle to a single element.
///
/// Handles are cheap to clone and refer to the same underlying node, the way
/// `web_sys::HtmlElement` clones share one JS object.
pub trait Element: Clone + 'static {
    fn has_class(&self, class: &str) -> bool;

    /// Add (`enabled`) or remove a class.
    fn set_class(&self, class: &str, enabled: bool);

    /// Flip a class and return whether it is now present.
    fn toggle_class(&self, class: &str) -> bool {
        let next = !self.has_class(class);
        self.set_class(class, next);
        next
    }

    /// Inline style value, `None` when unset or empty.
    fn style(&self, property: &str) -> Option<String>;

    /// Set an inline style, or clear it with `None`.
    fn set_style(&self, property: &str, value: Option<&str>);

    fn text(&self) -> String;
    fn set_text(&self, text: &str);

    fn attr(&self, name: &str) -> Option<String>;
    fn set_attr(&self, name: &str, value: &str);

    /// Current form value (input elements), empty otherwise.
    fn value(&self) -> String;
    fn set_value(&self, value: &str);

    fn is_disabled(&self) -> bool;
    fn set_disabled(&self, disabled: bool);
}

/// A document plus the page lifecycle around it.
pub trait Page: 'static {
    type Node: Element;
    type Event: UiEvent;

    /// First element in the document matching `selector`.
    fn select(&self, selector: &str) -> Option<Self::Node>;

    /// First descendant of `root` matching `selector`.
    fn select_in(&self, root: &Self::Node, selector: &str) -> Option<Self::Node>;

    fn body(&self) -> Option<Self::Node>;

    /// Create a detached element.
    fn create(&self, tag: &str) -> Option<Self::Node>;
    fn append(&self, parent: &Self::Node, child: &Self::Node);

    /// Detach `node` from its parent and drop every listener bound to it or
    /// its descendants.
    fn remove(&self, node: &Self::Node);

    /// Listen for `kind` on `node` (including events bubbling from descendants).
    /// The handler lives until the node is removed with [`Page::remove`].
    fn listen(&self, node: &Self::Node, kind: EventKind, handler: Handler<Self::Event>);

    /// Listen for `kind` at the document level.
    fn listen_document(&self, kind: EventKind, handler: Handler<Self::Event>);

    /// Whether the event target is `node` or one of its descendants.
    fn contains_target(&self, node: &Self::Node, event: &Self::Event) -> bool;

    /// Run `callback` once the initial document parse has completed.
    ///
    /// Runs immediately when that has already happened.
    fn on_ready(&self, callback: Box<dyn FnOnce()>);

    fn set_timeout(&self, delay_ms: u32, callback: Box<dyn FnOnce()>);

    /// Reload the whole page.
    fn reload(&self);
}
