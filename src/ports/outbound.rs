//! Outbound ports. Application calls into infrastructure.
//!
//! Implemented by adapters.

use crate::domain::{DomainError, ProfileReport};
use chrono::NaiveDate;

/// Source of "today". Drives the personal year and the upper bound of birth dates.
pub trait ClockPort: Send + Sync {
    fn today(&self) -> NaiveDate;
}

/// Report renderer. Turns a computed profile into text for one output format.
pub trait ReportPort: Send + Sync {
    /// Short format name (e.g. "json"), used in logs.
    fn format_name(&self) -> &'static str;

    /// Render the report. Serialization failures map to `DomainError::Unexpected`.
    fn render(&self, report: &ProfileReport) -> Result<String, DomainError>;
}
