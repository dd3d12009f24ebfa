use super::model::{QuoteError, QuoteReceipt};

#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub enum QuoteStatus {
    #[default]
    Idle,
    Submitting,
    Success(QuoteReceipt),
    /// The last submission failed. Accepts a new submission like `Idle`.
    Failed(String),
}

impl QuoteStatus {
    pub fn is_submitting(&self) -> bool {
        matches!(self, QuoteStatus::Submitting)
    }

    pub fn button_label(&self) -> &'static str {
        if self.is_submitting() {
            "Submitting..."
        } else {
            "Request Quote"
        }
    }
}

/// Submission state of one quote form.
///
/// Each accepted submission gets an attempt number; completions and resets
/// carrying an older number are stale and ignored.
#[derive(Debug, Default)]
pub struct QuoteLifecycle {
    status: QuoteStatus,
    attempt: u64,
}

impl QuoteLifecycle {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn status(&self) -> &QuoteStatus {
        &self.status
    }

    /// Moves to `Submitting` unless a submission is already in flight.
    pub fn begin(&mut self) -> Result<u64, QuoteError> {
        if self.status.is_submitting() {
            return Err(QuoteError::InFlight);
        }
        self.attempt += 1;
        self.status = QuoteStatus::Submitting;
        Ok(self.attempt)
    }

    pub fn finish(&mut self, attempt: u64, outcome: Result<QuoteReceipt, QuoteError>) -> bool {
        if attempt != self.attempt || !self.status.is_submitting() {
            return false;
        }
        self.status = match outcome {
            Ok(receipt) => QuoteStatus::Success(receipt),
            Err(err) => QuoteStatus::Failed(err.to_string()),
        };
        true
    }

    /// Clears the success banner of `attempt`.
    pub fn reset(&mut self, attempt: u64) -> bool {
        if attempt != self.attempt || !matches!(self.status, QuoteStatus::Success(_)) {
            return false;
        }
        self.status = QuoteStatus::Idle;
        true
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::quote::model::ServiceType;

    fn receipt() -> QuoteReceipt {
        QuoteReceipt {
            service_type: ServiceType::Hazmat,
            origin: "Houston, TX".into(),
            destination: "Tulsa, OK".into(),
            pickup_date: None,
        }
    }

    #[test]
    fn happy_path_returns_to_idle() {
        let mut lifecycle = QuoteLifecycle::new();
        let attempt = lifecycle.begin().unwrap();
        assert_eq!(lifecycle.status(), &QuoteStatus::Submitting);

        assert!(lifecycle.finish(attempt, Ok(receipt())));
        assert_eq!(lifecycle.status(), &QuoteStatus::Success(receipt()));

        assert!(lifecycle.reset(attempt));
        assert_eq!(lifecycle.status(), &QuoteStatus::Idle);
    }

    #[test]
    fn second_begin_while_submitting_is_rejected() {
        let mut lifecycle = QuoteLifecycle::new();
        let attempt = lifecycle.begin().unwrap();
        assert_eq!(lifecycle.begin(), Err(QuoteError::InFlight));
        assert!(lifecycle.finish(attempt, Ok(receipt())));
    }

    #[test]
    fn failure_is_reported_and_allows_retry() {
        let mut lifecycle = QuoteLifecycle::new();
        let attempt = lifecycle.begin().unwrap();
        lifecycle.finish(attempt, Err(QuoteError::Submission("timed out".into())));
        assert_eq!(
            lifecycle.status(),
            &QuoteStatus::Failed("We couldn't send your request: timed out".into())
        );
        assert!(!lifecycle.reset(attempt));

        assert_eq!(lifecycle.begin(), Ok(attempt + 1));
    }

    #[test]
    fn stale_reset_does_not_clear_a_newer_submission() {
        let mut lifecycle = QuoteLifecycle::new();
        let first = lifecycle.begin().unwrap();
        lifecycle.finish(first, Ok(receipt()));

        let second = lifecycle.begin().unwrap();
        assert!(!lifecycle.reset(first));
        assert!(!lifecycle.finish(first, Ok(receipt())));
        assert!(lifecycle.status().is_submitting());

        assert!(lifecycle.finish(second, Ok(receipt())));
        assert!(!lifecycle.reset(first));
        assert!(lifecycle.reset(second));
    }

    #[test]
    fn button_label_follows_status() {
        assert_eq!(QuoteStatus::Idle.button_label(), "Request Quote");
        assert_eq!(QuoteStatus::Submitting.button_label(), "Submitting...");
        assert_eq!(
            QuoteStatus::Failed("x".into()).button_label(),
            "Request Quote"
        );
    }
}
