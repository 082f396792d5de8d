//! Text sources and change notification.
//!
//! The counters only ever read text through [`TextSource::raw_text`]. The
//! subscription half of the trait exists for [`SubscriptionRegistry`], which
//! re-runs the counters whenever a source reports a change.
//!
//! Plain strings are sources that never change. [`TextBuffer`] is an
//! editable, single-threaded surface that notifies its subscribers after
//! every edit.
//!
//! [`SubscriptionRegistry`]: crate::registry::SubscriptionRegistry

use std::borrow::Cow;
use std::cell::{Cell, RefCell};
use std::fmt;
use std::rc::Rc;

/// Callback fired after a source's content changes.
pub type ChangeHandler = Rc<dyn Fn()>;

/// Identifies one subscription on one source.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct SubscriptionHandle(u64);

impl SubscriptionHandle {
    /// Handle returned by sources that never change. Unsubscribing it is a no-op.
    pub const INERT: Self = Self(0);

    pub fn is_inert(self) -> bool {
        self == Self::INERT
    }
}

/// Something whose current text can be counted.
///
/// # Contract
///
/// - `raw_text` returns the full current content, unprocessed.
/// - A handler passed to `subscribe` is called after every content change
///   until it is unsubscribed. It may read the source from inside the call.
/// - `unsubscribe` returns `true` if the handle was live.
pub trait TextSource {
    /// Current content of the source.
    fn raw_text(&self) -> Cow<'_, str>;

    /// Register a change handler. Static sources never fire.
    fn subscribe(&self, _handler: ChangeHandler) -> SubscriptionHandle {
        SubscriptionHandle::INERT
    }

    /// Remove a change handler.
    fn unsubscribe(&self, _handle: SubscriptionHandle) -> bool {
        false
    }
}

impl TextSource for str {
    fn raw_text(&self) -> Cow<'_, str> {
        Cow::Borrowed(self)
    }
}

impl TextSource for String {
    fn raw_text(&self) -> Cow<'_, str> {
        Cow::Borrowed(self.as_str())
    }
}

// ============================================================================
// TextBuffer
// ============================================================================

/// An editable text surface with change notification.
///
/// Handlers run after the edit has been applied and after every internal
/// borrow has been released, so a handler may read the buffer or even edit
/// it again.
#[derive(Default)]
pub struct TextBuffer {
    text: RefCell<String>,
    handlers: RefCell<Vec<(SubscriptionHandle, ChangeHandler)>>,
    next_handle: Cell<u64>,
}

impl TextBuffer {
    /// Create a buffer holding `text`
    pub fn new(text: impl Into<String>) -> Self {
        Self {
            text: RefCell::new(text.into()),
            ..Self::default()
        }
    }

    /// Copy of the current content
    pub fn text(&self) -> String {
        self.text.borrow().clone()
    }

    /// Replace the content and notify subscribers
    pub fn set_text(&self, text: impl Into<String>) {
        *self.text.borrow_mut() = text.into();
        self.notify();
    }

    /// Append to the content and notify subscribers
    pub fn push_str(&self, text: &str) {
        self.text.borrow_mut().push_str(text);
        self.notify();
    }

    /// Empty the content and notify subscribers
    pub fn clear(&self) {
        self.text.borrow_mut().clear();
        self.notify();
    }

    /// Number of live subscriptions
    pub fn subscriber_count(&self) -> usize {
        self.handlers.borrow().len()
    }

    fn notify(&self) {
        // Snapshot so handlers can (un)subscribe while we iterate.
        let handlers: Vec<ChangeHandler> = self
            .handlers
            .borrow()
            .iter()
            .map(|(_, handler)| Rc::clone(handler))
            .collect();
        for handler in handlers {
            handler();
        }
    }
}

impl TextSource for TextBuffer {
    fn raw_text(&self) -> Cow<'_, str> {
        Cow::Owned(self.text())
    }

    fn subscribe(&self, handler: ChangeHandler) -> SubscriptionHandle {
        let id = self.next_handle.get() + 1;
        self.next_handle.set(id);
        let handle = SubscriptionHandle(id);
        self.handlers.borrow_mut().push((handle, handler));
        handle
    }

    fn unsubscribe(&self, handle: SubscriptionHandle) -> bool {
        let mut handlers = self.handlers.borrow_mut();
        let before = handlers.len();
        handlers.retain(|(h, _)| *h != handle);
        handlers.len() != before
    }
}

impl fmt::Debug for TextBuffer {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("TextBuffer")
            .field("text", &self.text.borrow())
            .field("subscribers", &self.subscriber_count())
            .finish()
    }
}
