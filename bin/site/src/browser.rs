//! Browser-backed implementations of the core seams.
//!
//! These touch `window`, so they must only be driven from effects and event
//! handlers, never while rendering on the server.

use leptos::prelude::*;
use std::sync::Arc;
use std::time::Duration;
use transblue_core::{Location, Scheduler};

/// The page's `window.location` fragment.
#[derive(Debug, Clone, Copy, Default)]
pub struct BrowserLocation;

impl Location for BrowserLocation {
    fn fragment(&self) -> String {
        match location().hash() {
            Ok(hash) => hash,
            Err(e) => {
                tracing::warn!(error = ?e, "Failed to read location hash");
                String::new()
            }
        }
    }

    fn set_fragment(&mut self, fragment: &str) {
        if let Err(e) = location().set_hash(fragment) {
            tracing::warn!(fragment, error = ?e, "Failed to write location hash");
        }
    }
}

/// Single-shot timers on `window.setTimeout`.
///
/// Every armed timer invokes the same callback when it fires.
#[derive(Clone)]
pub struct BrowserScheduler {
    on_fire: Arc<dyn Fn() + Send + Sync>,
}

impl BrowserScheduler {
    /// Creates a scheduler whose timers run `on_fire`.
    pub fn new(on_fire: impl Fn() + Send + Sync + 'static) -> Self {
        Self {
            on_fire: Arc::new(on_fire),
        }
    }
}

impl Scheduler for BrowserScheduler {
    type Handle = Option<TimeoutHandle>;

    fn schedule(&mut self, delay: Duration) -> Self::Handle {
        let on_fire = Arc::clone(&self.on_fire);
        match set_timeout_with_handle(move || on_fire(), delay) {
            Ok(handle) => Some(handle),
            Err(e) => {
                tracing::warn!(delay_ms = delay.as_millis() as u64, error = ?e, "Failed to arm timer");
                None
            }
        }
    }

    fn cancel(&mut self, handle: Self::Handle) {
        if let Some(handle) = handle {
            handle.clear();
        }
    }
}
