//! Copy-to-clipboard for the footer's contact details.
//!
//! A successful copy shows a "Copied!" marker next to the copied value. Each
//! marker clears itself after a short delay, on its own timer.

use std::cell::{Cell, RefCell};
use std::rc::Rc;

use thiserror::Error;
use wasm_bindgen_futures::JsFuture;
use yew::Callback;

use crate::config;
use crate::timer::Scheduler;

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum CopyTarget {
    Phone,
    Email,
}

impl CopyTarget {
    pub fn text(self) -> &'static str {
        match self {
            CopyTarget::Phone => config::CONTACT_PHONE,
            CopyTarget::Email => config::CONTACT_EMAIL,
        }
    }

    pub fn aria_label(self) -> &'static str {
        match self {
            CopyTarget::Phone => "Copy phone number to clipboard",
            CopyTarget::Email => "Copy email to clipboard",
        }
    }
}

/// Markers currently on screen.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub struct Copied {
    phone: bool,
    email: bool,
}

impl Copied {
    pub fn shows(&self, target: CopyTarget) -> bool {
        match target {
            CopyTarget::Phone => self.phone,
            CopyTarget::Email => self.email,
        }
    }

    fn set(&mut self, target: CopyTarget, on: bool) {
        match target {
            CopyTarget::Phone => self.phone = on,
            CopyTarget::Email => self.email = on,
        }
    }
}

#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum ClipboardError {
    #[error("no browser window")]
    NoWindow,
    #[error("clipboard write was rejected: {0}")]
    Rejected(String),
}

pub async fn write_text(text: &str) -> Result<(), ClipboardError> {
    let window = web_sys::window().ok_or(ClipboardError::NoWindow)?;
    let promise = window.navigator().clipboard().write_text(text);
    JsFuture::from(promise)
        .await
        .map(|_| ())
        .map_err(|err| ClipboardError::Rejected(format!("{:?}", err)))
}

/// Tracks the "Copied!" markers and their clear timers.
///
/// Copying the same value again restarts its countdown. After `shutdown`
/// nothing is emitted and no timer is held.
pub struct CopyFeedback<S: Scheduler> {
    inner: Rc<FeedbackInner<S>>,
}

impl<S: Scheduler> Clone for CopyFeedback<S> {
    fn clone(&self) -> Self {
        Self {
            inner: self.inner.clone(),
        }
    }
}

struct FeedbackInner<S: Scheduler> {
    copied: Cell<Copied>,
    phone_timer: RefCell<Option<S::Handle>>,
    email_timer: RefCell<Option<S::Handle>>,
    closed: Cell<bool>,
    scheduler: S,
    clear_after_ms: u32,
    on_change: Callback<Copied>,
}

impl<S: Scheduler> CopyFeedback<S> {
    pub fn new(scheduler: S, clear_after_ms: u32, on_change: Callback<Copied>) -> Self {
        Self {
            inner: Rc::new(FeedbackInner {
                copied: Cell::new(Copied::default()),
                phone_timer: RefCell::new(None),
                email_timer: RefCell::new(None),
                closed: Cell::new(false),
                scheduler,
                clear_after_ms,
                on_change,
            }),
        }
    }

    #[cfg(test)]
    pub fn copied(&self) -> Copied {
        self.inner.copied.get()
    }

    pub fn mark_copied(&self, target: CopyTarget) {
        if self.inner.closed.get() {
            return;
        }
        self.inner.update(target, true);

        let weak = Rc::downgrade(&self.inner);
        let timer = self.inner.scheduler.once(self.inner.clear_after_ms, move || {
            if let Some(inner) = weak.upgrade() {
                inner.update(target, false);
            }
        });
        let previous = self.inner.timer(target).borrow_mut().replace(timer);
        drop(previous);
    }

    pub fn shutdown(&self) {
        self.inner.closed.set(true);
        let phone = self.inner.phone_timer.borrow_mut().take();
        let email = self.inner.email_timer.borrow_mut().take();
        drop((phone, email));
    }
}

impl<S: Scheduler> FeedbackInner<S> {
    fn timer(&self, target: CopyTarget) -> &RefCell<Option<S::Handle>> {
        match target {
            CopyTarget::Phone => &self.phone_timer,
            CopyTarget::Email => &self.email_timer,
        }
    }

    fn update(&self, target: CopyTarget, on: bool) {
        if self.closed.get() {
            return;
        }
        let mut copied = self.copied.get();
        copied.set(target, on);
        self.copied.set(copied);
        self.on_change.emit(copied);
    }
}
