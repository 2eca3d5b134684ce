//! Order submission wiring.
//!
//! The shell provides one [`SharedSubmitter`] through context; the order form
//! hands every accepted order to it.

use leptos::prelude::*;
use std::sync::Arc;
use transblue_core::{AcknowledgeOnly, OrderRequest, OrderSubmitter};

/// Context handle to the active order submitter.
#[derive(Clone)]
pub struct SharedSubmitter(Arc<dyn OrderSubmitter + Send + Sync>);

impl SharedSubmitter {
    /// Wraps `submitter` for use as context.
    pub fn new(submitter: impl OrderSubmitter + Send + Sync + 'static) -> Self {
        Self(Arc::new(submitter))
    }

    /// Hands `request` to the submitter, logging the outcome.
    ///
    /// Returns whether delivery succeeded. The form stays submitted either
    /// way.
    pub fn deliver(&self, request: &OrderRequest) -> bool {
        match self.0.submit(request) {
            Ok(()) => {
                tracing::info!(from = %request.from, to = %request.to, "Order handed off");
                true
            }
            Err(e) => {
                tracing::warn!(error = %e, "Order handoff failed");
                false
            }
        }
    }
}

impl Default for SharedSubmitter {
    fn default() -> Self {
        Self::new(AcknowledgeOnly)
    }
}

/// Returns the submitter from context, or the acknowledge-only default.
pub fn use_submitter() -> SharedSubmitter {
    use_context::<SharedSubmitter>().unwrap_or_default()
}

#[cfg(test)]
mod tests {
    use super::*;
    use transblue_core::SubmissionError;

    struct Refusing;

    impl OrderSubmitter for Refusing {
        fn submit(&self, _request: &OrderRequest) -> transblue_core::Result<(), SubmissionError> {
            Err(SubmissionError::Rejected {
                reason: "closed for holidays".to_string(),
            }
            .into())
        }
    }

    #[test]
    fn default_submitter_accepts() {
        assert!(SharedSubmitter::default().deliver(&OrderRequest::default()));
    }

    #[test]
    fn failed_delivery_is_reported() {
        assert!(!SharedSubmitter::new(Refusing).deliver(&OrderRequest::default()));
    }
}
