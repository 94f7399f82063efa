//! Report renderers. Implement ReportPort for each output format.

pub mod csv;
pub mod json;
pub mod text;

pub use self::csv::CsvReport;
pub use json::JsonReport;
pub use text::TextReport;

use crate::ports::ReportPort;
use crate::shared::OutputFormat;

/// Ordinal labels of pinnacles and challenges.
pub(crate) const ORDINALS: [&str; 4] = ["1st", "2nd", "3rd", "4th"];

/// Renderer for `format`.
pub fn reporter_for(format: OutputFormat) -> Box<dyn ReportPort> {
    match format {
        OutputFormat::Text => Box::new(TextReport),
        OutputFormat::Json => Box::new(JsonReport),
        OutputFormat::Csv => Box::new(CsvReport),
    }
}
