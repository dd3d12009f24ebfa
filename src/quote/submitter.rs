use futures::future::{FutureExt, LocalBoxFuture};

use super::model::{QuoteError, QuoteReceipt, QuoteRequest};
use crate::timer::{sleep, Scheduler};

/// Delivers a quote request somewhere and reports whether it was accepted.
pub trait QuoteSubmitter {
    fn submit(&self, request: QuoteRequest) -> LocalBoxFuture<'static, Result<QuoteReceipt, QuoteError>>;
}

/// Stands in for a quote backend: waits a fixed delay, then accepts every
/// request. Nothing leaves the browser.
#[derive(Clone, Debug)]
pub struct SimulatedSubmitter<S: Scheduler> {
    scheduler: S,
    delay_ms: u32,
}

impl<S: Scheduler> SimulatedSubmitter<S> {
    pub fn new(scheduler: S, delay_ms: u32) -> Self {
        Self { scheduler, delay_ms }
    }
}

impl<S: Scheduler> QuoteSubmitter for SimulatedSubmitter<S> {
    fn submit(&self, request: QuoteRequest) -> LocalBoxFuture<'static, Result<QuoteReceipt, QuoteError>> {
        let delay = sleep(&self.scheduler, self.delay_ms);
        async move {
            delay.await;
            log::info!(
                "quote request from {} accepted ({})",
                request.company,
                request.service_type.label()
            );
            Ok(QuoteReceipt::for_request(&request))
        }
        .boxed_local()
    }
}
