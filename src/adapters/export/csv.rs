//! CSV summary of a profile. Uses the `csv` crate for safe serialization.
//!
//! Format: `Section;Item;Value` (semicolon-delimited, one row per figure).

use crate::adapters::export::ORDINALS;
use crate::domain::{CoreNumberKind, DomainError, LifeCycles, ProfileReport};
use crate::ports::ReportPort;

pub struct CsvReport;

/// All summary rows, in display order.
fn summary_rows(report: &ProfileReport) -> Vec<[String; 3]> {
    let p = &report.profile;
    let row = |section: &str, item: &str, value: String| {
        [section.to_string(), item.to_string(), value]
    };
    let mut rows = vec![
        row("Profile", "Name", p.full_name.clone()),
        row("Profile", "Birth date", p.birth_date_display.clone()),
    ];

    for kind in CoreNumberKind::ALL {
        rows.push(row("Core", kind.label(), p.core.get(kind).to_string()));
    }
    rows.push(row(
        "Core",
        "Personal Year based on",
        p.core.personal_year.year_used.to_string(),
    ));

    for part in &p.expression_parts {
        rows.push(row(
            "Expression",
            &part.text,
            format!("{} -> {}", part.raw, part.reduced),
        ));
    }

    let planes = &p.expression_planes;
    for (plane, count) in [
        ("Mental", planes.mental),
        ("Physical", planes.physical),
        ("Emotional", planes.emotional),
        ("Intuitive", planes.intuitive),
    ] {
        rows.push(row("Planes", plane, count.to_string()));
    }

    for (ordinal, window) in ORDINALS.iter().zip(p.pinnacles.as_array()) {
        rows.push(row(
            "Pinnacles",
            &format!("{} ({})", ordinal, window.ages()),
            window.number.to_string(),
        ));
    }
    for (name, window) in LifeCycles::NAMES.iter().zip(p.life_cycles.as_array()) {
        rows.push(row(
            "Life cycles",
            &format!("{} ({})", name, window.ages()),
            window.number.to_string(),
        ));
    }
    for (ordinal, window) in ORDINALS.iter().zip(p.challenges.as_array()) {
        rows.push(row(
            "Challenges",
            &format!("{} ({})", ordinal, window.ages()),
            window.number.to_string(),
        ));
    }
    rows.push(row("Challenges", "Major", p.challenges.major.to_string()));

    for (label, value) in p.bridges.labelled() {
        rows.push(row("Bridges", label, value.to_string()));
    }

    rows.push(row("Karmic lessons", "Missing", p.karmic_lessons.to_string()));
    for debt in &report.karmic_debts {
        rows.push(row("Karmic debt", debt.stage.label(), debt.value.to_string()));
    }
    rows
}

/// Render the summary as CSV with a header row.
pub fn report_to_csv(report: &ProfileReport) -> Result<String, csv::Error> {
    let mut wtr = csv::WriterBuilder::new()
        .delimiter(b';')
        .has_headers(true)
        .from_writer(Vec::new());

    wtr.write_record(["Section", "Item", "Value"])?;
    for record in summary_rows(report) {
        wtr.write_record(&record)?;
    }

    wtr.flush()?;
    let bytes = wtr
        .into_inner()
        .map_err(|e| csv::Error::from(std::io::Error::other(e.to_string())))?;

    String::from_utf8(bytes).map_err(|e| {
        csv::Error::from(std::io::Error::new(
            std::io::ErrorKind::InvalidData,
            e.to_string(),
        ))
    })
}

impl ReportPort for CsvReport {
    fn format_name(&self) -> &'static str {
        "csv"
    }

    fn render(&self, report: &ProfileReport) -> Result<String, DomainError> {
        report_to_csv(report).map_err(|e| DomainError::Unexpected(format!("csv export: {}", e)))
    }
}
