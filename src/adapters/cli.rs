//! Command-line arguments. Flags override configuration; without a name and a birth
//! date the interactive prompts take over.

use crate::domain::NameLimits;
use crate::shared::{AppConfig, OutputFormat};
use chrono::NaiveDate;
use clap::Parser;

/// Accepted birth date formats, tried in order.
const DATE_FORMATS: [&str; 2] = ["%d/%m/%Y", "%Y-%m-%d"];

#[derive(Parser, Debug)]
#[command(name = "numerology", version, about = "Pythagorean numerology profile")]
pub struct Cli {
    /// Full birth name, exactly as in the birth record
    #[arg(long)]
    pub name: Option<String>,

    /// Birth date (DD/MM/YYYY or YYYY-MM-DD)
    #[arg(long, value_parser = parse_date)]
    pub birth_date: Option<NaiveDate>,

    /// Output format: text, json or csv
    #[arg(long)]
    pub format: Option<OutputFormat>,

    /// Pretend today is this date (YYYY-MM-DD); fixes the personal year
    #[arg(long, value_parser = parse_date)]
    pub today: Option<NaiveDate>,

    /// Use the shorter name limits (6 parts, 15 letters)
    #[arg(long)]
    pub compact: bool,

    /// Do not print the welcome banner
    #[arg(long)]
    pub no_banner: bool,
}

/// Settings after merging flags over configuration.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Settings {
    pub limits: NameLimits,
    pub format: OutputFormat,
    pub today: Option<NaiveDate>,
    pub banner: bool,
}

impl Cli {
    pub fn settings(&self, cfg: &AppConfig) -> Settings {
        Settings {
            limits: if self.compact {
                NameLimits::COMPACT
            } else {
                cfg.name_limits_or_default()
            },
            format: self.format.unwrap_or_else(|| cfg.output_format_or_default()),
            today: self.today.or_else(|| cfg.today_override()),
            banner: !self.no_banner && cfg.banner_or_default(),
        }
    }

    /// Name and birth date when both were given.
    pub fn one_shot(&self) -> Option<(&str, NaiveDate)> {
        Some((self.name.as_deref()?, self.birth_date?))
    }
}

pub fn parse_date(s: &str) -> Result<NaiveDate, String> {
    let s = s.trim();
    DATE_FORMATS
        .iter()
        .find_map(|fmt| NaiveDate::parse_from_str(s, fmt).ok())
        .ok_or_else(|| format!("invalid date '{}': expected DD/MM/YYYY or YYYY-MM-DD", s))
}
