//! Failure containment at the provider-client boundary.
//!
//! Every provider fetch ends in [`settle`]: a success passes through, a
//! failure is logged once at error level and replaced by the result type's
//! [`Degradable::degraded`] value. Nothing propagates to the caller.

use apiagg_core::ProviderKind;
use tracing::error;

use crate::error::{FailureClass, FetchError};

// ============================================================================
// Degraded Values
// ============================================================================

/// A result type with a fixed substitute for failed fetches.
///
/// Single-object results degrade to absence, collections to empty. A
/// collection result is never degraded to absence.
pub trait Degradable: Sized {
    /// The value returned in place of a failed fetch.
    fn degraded() -> Self;
}

impl<T> Degradable for Option<T> {
    fn degraded() -> Self {
        None
    }
}

impl<T> Degradable for Vec<T> {
    fn degraded() -> Self {
        Vec::new()
    }
}

// ============================================================================
// Failure Messages
// ============================================================================

/// The two error-log templates of one provider operation.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct FailureMessages {
    /// Logged for transport-level failures.
    pub transport: String,
    /// Logged for every other failure.
    pub unexpected: String,
}

impl FailureMessages {
    /// Creates the pair of messages.
    pub fn new(transport: impl Into<String>, unexpected: impl Into<String>) -> Self {
        Self {
            transport: transport.into(),
            unexpected: unexpected.into(),
        }
    }

    /// Picks the message for a failure class.
    pub fn for_class(&self, class: FailureClass) -> &str {
        match class {
            FailureClass::Transport => &self.transport,
            FailureClass::Unexpected => &self.unexpected,
        }
    }
}

// ============================================================================
// Settle
// ============================================================================

/// Logs a failed fetch at error level.
pub fn report_failure(provider: ProviderKind, err: &FetchError, messages: &FailureMessages) {
    let message = messages.for_class(err.class());
    error!(provider = %provider, error = %err, "{}", message);
}

/// Resolves a fetch result into the value handed to the caller.
///
/// `messages` is only built when the fetch failed.
pub fn settle<T: Degradable>(
    provider: ProviderKind,
    result: Result<T, FetchError>,
    messages: impl FnOnce() -> FailureMessages,
) -> T {
    match result {
        Ok(value) => value,
        Err(err) => {
            report_failure(provider, &err, &messages());
            T::degraded()
        }
    }
}
