//! Trailing-edge debounce over `gloo_timers`.

use std::cell::RefCell;
use std::rc::Rc;

use gloo_timers::callback::Timeout;

struct DebouncedInner<T> {
    wait_ms: u32,
    callback: RefCell<Box<dyn FnMut(T)>>,
    /// Argument of the most recent `call` still waiting to fire.
    pending_arg: RefCell<Option<T>>,
    timer: RefCell<Option<Timeout>>,
}

/// Coalesces bursts of calls: only the last argument within `wait_ms` of
/// quiet reaches the callback.
pub struct Debounced<T: 'static> {
    inner: Rc<DebouncedInner<T>>,
}

impl<T: 'static> Debounced<T> {
    pub fn new(wait_ms: u32, callback: impl FnMut(T) + 'static) -> Self {
        Self {
            inner: Rc::new(DebouncedInner {
                wait_ms,
                callback: RefCell::new(Box::new(callback)),
                pending_arg: RefCell::new(None),
                timer: RefCell::new(None),
            }),
        }
    }

    /// Replace any pending argument with `arg` and restart the timer.
    pub fn call(&self, arg: T) {
        *self.inner.pending_arg.borrow_mut() = Some(arg);

        let weak = Rc::downgrade(&self.inner);
        let timer = Timeout::new(self.inner.wait_ms, move || {
            let Some(inner) = weak.upgrade() else {
                return;
            };
            let arg = inner.pending_arg.borrow_mut().take();
            if let Some(arg) = arg {
                (inner.callback.borrow_mut())(arg);
            }
        });
        // Dropping the previous timeout clears it.
        *self.inner.timer.borrow_mut() = Some(timer);
    }

    /// Drop the pending call, if any.
    pub fn cancel(&self) {
        self.inner.pending_arg.borrow_mut().take();
        self.inner.timer.borrow_mut().take();
    }

    pub fn is_pending(&self) -> bool {
        self.inner.pending_arg.borrow().is_some()
    }
}
