//! JSON report. The whole `ProfileReport`, pretty-printed.

use crate::domain::{DomainError, ProfileReport};
use crate::ports::ReportPort;

pub struct JsonReport;

impl ReportPort for JsonReport {
    fn format_name(&self) -> &'static str {
        "json"
    }

    fn render(&self, report: &ProfileReport) -> Result<String, DomainError> {
        serde_json::to_string_pretty(report)
            .map_err(|e| DomainError::Unexpected(format!("json export: {}", e)))
    }
}
