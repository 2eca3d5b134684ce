//! Order submission boundary.
//!
//! The order form never delivers anything itself. A submitted
//! [`OrderRequest`] is handed to an [`OrderSubmitter`], which is where an
//! API client or mail dispatcher plugs in.

use crate::order::OrderRequest;
use std::fmt;

/// Errors reported by a submitter.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum SubmissionError {
    /// The receiving service refused the order.
    Rejected { reason: String },
    /// The receiving service could not be reached.
    Unavailable { details: String },
}

impl fmt::Display for SubmissionError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Rejected { reason } => write!(f, "order rejected: {reason}"),
            Self::Unavailable { details } => {
                write!(f, "order service unavailable: {details}")
            }
        }
    }
}

impl std::error::Error for SubmissionError {}

/// Receives submitted orders.
pub trait OrderSubmitter {
    /// Delivers `request`.
    ///
    /// # Errors
    ///
    /// Returns a [`SubmissionError`] if the order could not be delivered.
    fn submit(&self, request: &OrderRequest) -> crate::Result<(), SubmissionError>;
}

/// Submitter that accepts every order without sending it anywhere.
#[derive(Debug, Clone, Copy, Default)]
pub struct AcknowledgeOnly;

impl OrderSubmitter for AcknowledgeOnly {
    fn submit(&self, _request: &OrderRequest) -> crate::Result<(), SubmissionError> {
        Ok(())
    }
}
