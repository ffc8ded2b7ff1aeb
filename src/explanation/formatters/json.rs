use crate::scorer::{CompatibilityResult, GroupAnalysis};

/// JSON formatter for analysis results
pub struct JsonFormatter;

impl JsonFormatter {
    /// Format a pair result as pretty-printed JSON
    pub fn format(result: &CompatibilityResult) -> Result<String, serde_json::Error> {
        serde_json::to_string_pretty(result)
    }

    /// Format a pair result as compact JSON (no whitespace)
    pub fn format_compact(result: &CompatibilityResult) -> Result<String, serde_json::Error> {
        serde_json::to_string(result)
    }

    pub fn format_group(group: &GroupAnalysis) -> Result<String, serde_json::Error> {
        serde_json::to_string_pretty(group)
    }
}
