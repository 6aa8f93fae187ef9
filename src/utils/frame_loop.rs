//! `requestAnimationFrame` loop with guaranteed release.

use std::cell::{Cell, RefCell};
use std::rc::Rc;

use wasm_bindgen::JsCast;
use wasm_bindgen::closure::Closure;

use super::dom;

type FrameClosure = Closure<dyn FnMut(f64)>;

struct FrameInner {
    /// JS closure registered with `requestAnimationFrame`; it re-registers
    /// itself, so it holds an `Rc` back to this struct until released.
    closure: RefCell<Option<FrameClosure>>,
    callback: RefCell<Box<dyn FnMut(f64)>>,
    running: Cell<bool>,
    /// ID of the pending frame request, if any.
    pending: Cell<Option<i32>>,
}

/// A per-frame callback loop.
///
/// The callback receives the frame timestamp in milliseconds. The loop runs
/// from [`start`](Self::start) until [`stop`](Self::stop) or drop; dropping
/// cancels the pending frame and releases the JS closure, so a loop owned by a
/// component cannot outlive it.
pub struct AnimationFrameLoop {
    inner: Rc<FrameInner>,
}

fn request_frame(closure: &FrameClosure) -> Option<i32> {
    dom::window()?
        .request_animation_frame(closure.as_ref().unchecked_ref())
        .ok()
}

impl AnimationFrameLoop {
    /// Create a loop that is not yet running.
    pub fn new(callback: impl FnMut(f64) + 'static) -> Self {
        Self {
            inner: Rc::new(FrameInner {
                closure: RefCell::new(None),
                callback: RefCell::new(Box::new(callback)),
                running: Cell::new(false),
                pending: Cell::new(None),
            }),
        }
    }

    /// Start requesting frames. No-op if already running.
    pub fn start(&self) {
        if self.inner.running.get() {
            return;
        }
        self.inner.running.set(true);

        if self.inner.closure.borrow().is_none() {
            let inner = Rc::clone(&self.inner);
            let closure = Closure::wrap(Box::new(move |timestamp_ms: f64| {
                inner.pending.set(None);
                if !inner.running.get() {
                    return;
                }

                inner.callback.borrow_mut()(timestamp_ms);

                if inner.running.get()
                    && let Some(ref closure) = *inner.closure.borrow()
                {
                    inner.pending.set(request_frame(closure));
                }
            }) as Box<dyn FnMut(f64)>);
            *self.inner.closure.borrow_mut() = Some(closure);
        }

        let id = self.inner.closure.borrow().as_ref().and_then(request_frame);
        if id.is_none() {
            log::warn!("requestAnimationFrame unavailable; frame loop not started");
            self.inner.running.set(false);
        }
        self.inner.pending.set(id);
    }

    /// Stop the loop and cancel the pending frame. Can be restarted.
    pub fn stop(&self) {
        self.inner.running.set(false);
        if let Some(id) = self.inner.pending.take()
            && let Some(window) = dom::window()
        {
            let _ = window.cancel_animation_frame(id);
        }
    }

    pub fn is_running(&self) -> bool {
        self.inner.running.get()
    }
}

impl Drop for AnimationFrameLoop {
    fn drop(&mut self) {
        self.stop();
        // Break the closure -> inner reference cycle.
        self.inner.closure.borrow_mut().take();
    }
}

impl std::fmt::Debug for AnimationFrameLoop {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("AnimationFrameLoop")
            .field("running", &self.inner.running.get())
            .field("pending", &self.inner.pending.get())
            .finish()
    }
}
