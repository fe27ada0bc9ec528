//! PrintTrigger trait for the host's native print action.

use std::fmt::Debug;
use std::sync::atomic::{AtomicUsize, Ordering};
use thiserror::Error;

/// Error type for print trigger failures.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum PrintError {
    #[error("Print action unavailable: {0}")]
    Unavailable(String),

    #[error("Print action failed: {0}")]
    Failed(String),
}

/// A zero-argument action invoked once a render pass has completed.
pub trait PrintTrigger: Debug {
    fn print(&self) -> Result<(), PrintError>;

    /// Returns a human-readable name for this trigger (for logging/debugging).
    fn name(&self) -> &'static str;
}

/// A trigger that does nothing, for hosts that print on their own.
#[derive(Debug, Default, Clone, Copy)]
pub struct NoopPrintTrigger;

impl PrintTrigger for NoopPrintTrigger {
    fn print(&self) -> Result<(), PrintError> {
        Ok(())
    }

    fn name(&self) -> &'static str {
        "NoopPrintTrigger"
    }
}

/// A trigger that only counts how often it was invoked.
#[derive(Debug, Default)]
pub struct CountingPrintTrigger {
    calls: AtomicUsize,
}

impl CountingPrintTrigger {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn calls(&self) -> usize {
        self.calls.load(Ordering::Relaxed)
    }
}

impl PrintTrigger for CountingPrintTrigger {
    fn print(&self) -> Result<(), PrintError> {
        self.calls.fetch_add(1, Ordering::Relaxed);
        Ok(())
    }

    fn name(&self) -> &'static str {
        "CountingPrintTrigger"
    }
}
