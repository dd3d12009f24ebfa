use std::cell::{Cell, RefCell};
use std::future::Future;
use std::rc::{Rc, Weak};

use yew::Callback;

use super::lifecycle::{QuoteLifecycle, QuoteStatus};
use super::model::{QuoteError, QuoteReceipt, QuoteRequest};
use super::submitter::QuoteSubmitter;
use crate::timer::Scheduler;

/// Runs quote submissions for one form: guards against double submits,
/// awaits the submitter, and clears the success banner after a delay.
///
/// Status changes are pushed to `on_change`. After `shutdown` the controller
/// emits nothing and holds no timers.
pub struct QuoteController<S: Scheduler, Q> {
    inner: Rc<Inner<S, Q>>,
}

impl<S: Scheduler, Q> Clone for QuoteController<S, Q> {
    fn clone(&self) -> Self {
        Self {
            inner: self.inner.clone(),
        }
    }
}

struct Inner<S: Scheduler, Q> {
    lifecycle: RefCell<QuoteLifecycle>,
    reset_timer: RefCell<Option<S::Handle>>,
    closed: Cell<bool>,
    scheduler: S,
    submitter: Q,
    reset_after_ms: u32,
    on_change: Callback<QuoteStatus>,
}

impl<S: Scheduler, Q: QuoteSubmitter + 'static> QuoteController<S, Q> {
    pub fn new(scheduler: S, submitter: Q, reset_after_ms: u32, on_change: Callback<QuoteStatus>) -> Self {
        Self {
            inner: Rc::new(Inner {
                lifecycle: RefCell::new(QuoteLifecycle::new()),
                reset_timer: RefCell::new(None),
                closed: Cell::new(false),
                scheduler,
                submitter,
                reset_after_ms,
                on_change,
            }),
        }
    }

    #[cfg(test)]
    pub fn status(&self) -> QuoteStatus {
        self.inner.lifecycle.borrow().status().clone()
    }

    /// Moves to `Submitting` and returns the work that finishes the
    /// submission; the caller spawns it on its executor.
    ///
    /// Rejected with `QuoteError::InFlight` while another submission is
    /// pending. A success banner still on screen is replaced, and its reset
    /// timer cancelled.
    pub fn submit(&self, request: QuoteRequest) -> Result<impl Future<Output = ()> + 'static, QuoteError> {
        if self.inner.closed.get() {
            return Err(QuoteError::Submission("the form is no longer on the page".into()));
        }
        let attempt = self.inner.lifecycle.borrow_mut().begin()?;
        let stale = self.inner.reset_timer.borrow_mut().take();
        drop(stale);
        self.inner.notify();

        let pending = self.inner.submitter.submit(request);
        let weak = Rc::downgrade(&self.inner);
        Ok(async move {
            let outcome = pending.await;
            if let Some(inner) = weak.upgrade() {
                Inner::complete(&inner, attempt, outcome);
            }
        })
    }

    pub fn shutdown(&self) {
        self.inner.closed.set(true);
        let timer = self.inner.reset_timer.borrow_mut().take();
        drop(timer);
    }
}

impl<S: Scheduler, Q: 'static> Inner<S, Q> {
    fn notify(&self) {
        if self.closed.get() {
            return;
        }
        let status = self.lifecycle.borrow().status().clone();
        log::debug!("quote status: {:?}", status);
        self.on_change.emit(status);
    }

    fn complete(this: &Rc<Self>, attempt: u64, outcome: Result<QuoteReceipt, QuoteError>) {
        if this.closed.get() {
            return;
        }
        if let Err(err) = &outcome {
            log::warn!("quote submission failed: {}", err);
        }
        let succeeded = outcome.is_ok();
        if !this.lifecycle.borrow_mut().finish(attempt, outcome) {
            return;
        }
        if succeeded {
            let weak: Weak<Self> = Rc::downgrade(this);
            let timer = this.scheduler.once(this.reset_after_ms, move || {
                if let Some(inner) = weak.upgrade() {
                    let cleared = inner.lifecycle.borrow_mut().reset(attempt);
                    if cleared {
                        inner.notify();
                    }
                }
            });
            let previous = this.reset_timer.borrow_mut().replace(timer);
            drop(previous);
        }
        this.notify();
    }
}
