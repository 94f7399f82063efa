//! Application configuration. Name limits, output format, clock override.

use crate::domain::NameLimits;
use chrono::NaiveDate;
use serde::Deserialize;
use std::fmt;
use std::str::FromStr;
use tracing::warn;

/// Date format of the `today` override.
pub const TODAY_FORMAT: &str = "%Y-%m-%d";

/// Report output format.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum OutputFormat {
    #[default]
    Text,
    Json,
    Csv,
}

impl FromStr for OutputFormat {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_ascii_lowercase().as_str() {
            "text" | "txt" => Ok(Self::Text),
            "json" => Ok(Self::Json),
            "csv" => Ok(Self::Csv),
            other => Err(format!("unknown output format '{}'", other)),
        }
    }
}

impl fmt::Display for OutputFormat {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(match self {
            Self::Text => "text",
            Self::Json => "json",
            Self::Csv => "csv",
        })
    }
}

#[derive(Debug, Deserialize, Default)]
pub struct AppConfig {
    /// Name limits variant: "full" (8 parts, 25 letters) or "compact" (6 parts, 15 letters).
    /// Read from NUMEROLOGY_NAME_VARIANT.
    #[serde(default)]
    pub name_variant: Option<String>,

    /// Report format: "text", "json" or "csv". Read from NUMEROLOGY_OUTPUT_FORMAT.
    #[serde(default)]
    pub output_format: Option<String>,

    /// Show the welcome banner in interactive mode. Read from NUMEROLOGY_BANNER.
    #[serde(default)]
    pub banner: Option<bool>,

    /// Fixed "today" (YYYY-MM-DD) for reproducible personal years. Read from NUMEROLOGY_TODAY.
    #[serde(default)]
    pub today: Option<String>,
}

impl AppConfig {
    pub fn load() -> Result<Self, config::ConfigError> {
        dotenv::dotenv().ok();
        let mut c = config::Config::builder();
        if let Ok(path) = std::env::var("NUMEROLOGY_CONFIG") {
            c = c.add_source(config::File::with_name(&path));
        }
        // Environment wins over the file.
        c = c.add_source(config::Environment::with_prefix("NUMEROLOGY"));
        c.build()?.try_deserialize()
    }

    /// Returns the name limits. Defaults to `NameLimits::FULL` if unset or invalid.
    pub fn name_limits_or_default(&self) -> NameLimits {
        match self.name_variant.as_deref().map(str::trim) {
            None => NameLimits::FULL,
            Some(v) if v.eq_ignore_ascii_case("full") => NameLimits::FULL,
            Some(v) if v.eq_ignore_ascii_case("compact") => NameLimits::COMPACT,
            Some(other) => {
                warn!(name_variant = other, "unknown name variant, using full");
                NameLimits::FULL
            }
        }
    }

    /// Returns the output format. Defaults to text if unset or invalid.
    pub fn output_format_or_default(&self) -> OutputFormat {
        match self.output_format.as_deref() {
            None => OutputFormat::default(),
            Some(s) => s.parse().unwrap_or_else(|e: String| {
                warn!(error = %e, "using text output");
                OutputFormat::default()
            }),
        }
    }

    /// Returns whether to show the banner. Defaults to true.
    pub fn banner_or_default(&self) -> bool {
        self.banner.unwrap_or(true)
    }

    /// Returns the configured "today", if set and valid.
    pub fn today_override(&self) -> Option<NaiveDate> {
        let raw = self.today.as_deref()?;
        match NaiveDate::parse_from_str(raw.trim(), TODAY_FORMAT) {
            Ok(date) => Some(date),
            Err(e) => {
                warn!(today = raw, error = %e, "ignoring invalid today override");
                None
            }
        }
    }
}
