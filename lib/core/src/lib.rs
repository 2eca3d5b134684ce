//! Core UI state for the TransBlue Logistics site.
//!
//! Everything here is free of browser and network I/O. Time and the location
//! fragment are reached through the [`Scheduler`] and [`Location`] seams so
//! each state machine can be driven deterministically in tests.

pub mod carousel;
pub mod drawer;
pub mod error;
pub mod order;
pub mod route;
pub mod router;
pub mod schedule;
pub mod submit;

pub use carousel::{Carousel, Slide};
pub use drawer::Drawer;
pub use error::Result;
pub use order::{OrderError, OrderField, OrderForm, OrderRequest};
pub use route::{ParseRouteError, Route, fragment_of};
pub use router::{HashRouter, Location};
pub use schedule::Scheduler;
pub use submit::{AcknowledgeOnly, OrderSubmitter, SubmissionError};
