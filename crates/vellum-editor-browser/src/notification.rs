//! Notification banner.
//!
//! The banner element gets `notification <kind> show` while visible. Hide
//! timers carry the ticket of the notification they belong to, so a timer from
//! an earlier message cannot hide a newer one.

use std::cell::RefCell;
use std::rc::Rc;

use gloo_timers::callback::Timeout;
use web_sys::HtmlElement;

use vellum_editor_core::{NotificationKind, NotificationState};

const SHOW_CLASS: &str = "show";

struct NotifierInner {
    element: HtmlElement,
    state: RefCell<NotificationState>,
    timeout_ms: u32,
}

/// Cheap-to-clone handle on the banner.
#[derive(Clone)]
pub struct Notifier {
    inner: Rc<NotifierInner>,
}

impl Notifier {
    pub fn new(element: HtmlElement, timeout_ms: u32) -> Self {
        Self {
            inner: Rc::new(NotifierInner {
                element,
                state: RefCell::new(NotificationState::new()),
                timeout_ms,
            }),
        }
    }

    /// Show `message` for the default duration.
    pub fn show(&self, message: &str, kind: NotificationKind) {
        self.show_for(message, kind, self.inner.timeout_ms);
    }

    /// Show `message` for `duration_ms`, preempting whatever is on screen.
    pub fn show_for(&self, message: &str, kind: NotificationKind, duration_ms: u32) {
        let ticket = self.inner.state.borrow_mut().show(message, kind);

        let el = &self.inner.element;
        el.set_text_content(Some(message));
        el.set_class_name(&format!("notification {}", kind.css_class()));
        let _ = el.class_list().add_1(SHOW_CLASS);

        let inner = Rc::clone(&self.inner);
        Timeout::new(duration_ms, move || {
            if inner.state.borrow_mut().expire(ticket) {
                let _ = inner.element.class_list().remove_1(SHOW_CLASS);
            }
        })
        .forget();
    }

    pub fn is_visible(&self) -> bool {
        self.inner.state.borrow().is_visible()
    }

    /// Text of the last shown notification.
    pub fn message(&self) -> Option<String> {
        self.inner
            .state
            .borrow()
            .current()
            .map(|n| n.message.clone())
    }

    pub fn element(&self) -> &HtmlElement {
        &self.inner.element
    }
}
