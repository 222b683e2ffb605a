//! JSON output formatting.

use anyhow::Result;
use apiagg_core::ProviderKind;
use apiagg_providers::{AggregateRequest, AggregateView};
use serde::Serialize;

// ============================================================================
// Output Types
// ============================================================================

/// JSON output for an aggregated fetch.
#[derive(Debug, Serialize)]
pub struct AggregateOutput<'a> {
    /// The combined view; degraded slots are `null` or `[]`.
    #[serde(flatten)]
    pub view: &'a AggregateView,
    /// Requested providers that returned no data.
    pub missing: Vec<ProviderKind>,
}

// ============================================================================
// Formatter
// ============================================================================

/// JSON formatter.
pub struct JsonFormatter {
    pretty: bool,
}

impl JsonFormatter {
    /// Creates a new JSON formatter.
    pub fn new(pretty: bool) -> Self {
        Self { pretty }
    }

    /// Formats any serializable value.
    pub fn format<T: Serialize + ?Sized>(&self, data: &T) -> Result<String> {
        let json = if self.pretty {
            serde_json::to_string_pretty(data)?
        } else {
            serde_json::to_string(data)?
        };
        Ok(json)
    }

    /// Formats an aggregated view.
    pub fn format_view(&self, view: &AggregateView, request: &AggregateRequest) -> Result<String> {
        self.format(&AggregateOutput {
            view,
            missing: view.missing(request),
        })
    }
}

// ============================================================================
// Tests
// ============================================================================

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_format_pretty() {
        let formatter = JsonFormatter::new(true);
        let data = serde_json::json!({"key": "value"});
        let output = formatter.format(&data).unwrap();
        assert!(output.contains('\n'));
    }

    #[test]
    fn test_format_compact() {
        let formatter = JsonFormatter::new(false);
        let data = serde_json::json!({"key": "value"});
        let output = formatter.format(&data).unwrap();
        assert!(!output.contains('\n'));
    }

    #[test]
    fn test_degraded_single_object_is_null() {
        let formatter = JsonFormatter::new(false);
        let none: Option<apiagg_core::WeatherReport> = None;
        assert_eq!(formatter.format(&none).unwrap(), "null");
    }
}
