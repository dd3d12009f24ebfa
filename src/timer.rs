//! Timers used by the carousel autoplay and the quote form.
//!
//! Every timer is an owned handle: dropping it cancels the pending callback.
//! Components own their handles and drop them on teardown, so nothing fires
//! after a component is gone.

use std::future::Future;

use futures::channel::oneshot;
use gloo_timers::callback::{Interval, Timeout};

pub trait Scheduler: Clone + 'static {
    /// A live timer. Dropping it cancels the timer.
    type Handle: 'static;

    fn repeat<F>(&self, interval_ms: u32, tick: F) -> Self::Handle
    where
        F: FnMut() + 'static;

    fn once<F>(&self, delay_ms: u32, fire: F) -> Self::Handle
    where
        F: FnOnce() + 'static;
}

/// Schedules on the browser event loop through `setInterval`/`setTimeout`.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub struct BrowserScheduler;

// The wrapped timers are only held for their `Drop`, which clears them.
#[allow(dead_code)]
pub enum BrowserTimer {
    Interval(Interval),
    Timeout(Timeout),
}

impl Scheduler for BrowserScheduler {
    type Handle = BrowserTimer;

    fn repeat<F>(&self, interval_ms: u32, tick: F) -> BrowserTimer
    where
        F: FnMut() + 'static,
    {
        BrowserTimer::Interval(Interval::new(interval_ms, tick))
    }

    fn once<F>(&self, delay_ms: u32, fire: F) -> BrowserTimer
    where
        F: FnOnce() + 'static,
    {
        BrowserTimer::Timeout(Timeout::new(delay_ms, fire))
    }
}

/// Resolves once `delay_ms` has elapsed on `scheduler`.
///
/// The timer lives inside the returned future, so dropping the future
/// before it resolves cancels the timer too.
pub fn sleep<S: Scheduler>(scheduler: &S, delay_ms: u32) -> impl Future<Output = ()> + 'static {
    let (tx, rx) = oneshot::channel::<()>();
    let timer = scheduler.once(delay_ms, move || {
        let _ = tx.send(());
    });
    async move {
        let _ = rx.await;
        drop(timer);
    }
}
