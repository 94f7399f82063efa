//! Plain-text report for the terminal.

use crate::adapters::export::ORDINALS;
use crate::domain::{CoreNumberKind, DomainError, LifeCycles, PeriodWindow, ProfileReport};
use crate::ports::ReportPort;

pub struct TextReport;

const LABEL_WIDTH: usize = 28;

fn line(label: &str, value: impl std::fmt::Display) -> String {
    format!("  {:<width$}{}", label, value, width = LABEL_WIDTH)
}

fn window_line(label: &str, window: &PeriodWindow) -> String {
    line(label, format!("{}  (ages {})", window.number, window.ages()))
}

pub fn render_text(report: &ProfileReport) -> String {
    let p = &report.profile;
    let mut out = vec![
        "Numerology profile".to_string(),
        line("Name", &p.full_name),
        line("Birth date", &p.birth_date_display),
        String::new(),
        "Core numbers".to_string(),
    ];

    for kind in CoreNumberKind::ALL {
        let value = p.core.get(kind);
        out.push(match kind {
            CoreNumberKind::PersonalYear => line(
                kind.label(),
                format!("{}  (based on year {})", value, p.core.personal_year.year_used),
            ),
            _ => line(kind.label(), value),
        });
    }

    out.push(String::new());
    out.push("Expression breakdown".to_string());
    for part in &p.expression_parts {
        out.push(format!("  {}: {} → {}", part.text, part.raw, part.reduced));
    }

    let planes = &p.expression_planes;
    out.push(String::new());
    out.push("Expression planes".to_string());
    out.push(line("Mental", planes.mental));
    out.push(line("Physical", planes.physical));
    out.push(line("Emotional", planes.emotional));
    out.push(line("Intuitive", planes.intuitive));

    out.push(String::new());
    out.push("Pinnacles".to_string());
    for (ordinal, window) in ORDINALS.iter().zip(p.pinnacles.as_array()) {
        out.push(window_line(&format!("{} pinnacle", ordinal), &window));
    }

    out.push(String::new());
    out.push("Life cycles".to_string());
    for (name, window) in LifeCycles::NAMES.iter().zip(p.life_cycles.as_array()) {
        out.push(window_line(&format!("{} cycle", name), &window));
    }

    out.push(String::new());
    out.push("Challenges".to_string());
    for (ordinal, window) in ORDINALS.iter().zip(p.challenges.as_array()) {
        out.push(window_line(&format!("{} pinnacle challenge", ordinal), &window));
    }
    out.push(line("Major challenge of life", p.challenges.major));

    out.push(String::new());
    out.push("Bridge numbers".to_string());
    for (label, value) in p.bridges.labelled() {
        out.push(line(label, value));
    }

    out.push(String::new());
    out.push("Karmic lessons (missing numbers)".to_string());
    out.push(format!("  {}", p.karmic_lessons));

    out.push(String::new());
    out.push("Karmic debts".to_string());
    if report.karmic_debts.is_empty() {
        out.push("  None found".to_string());
    }
    for debt in &report.karmic_debts {
        out.push(format!("  {}", debt));
    }

    let mut text = out.join("\n");
    text.push('\n');
    text
}

impl ReportPort for TextReport {
    fn format_name(&self) -> &'static str {
        "text"
    }

    fn render(&self, report: &ProfileReport) -> Result<String, DomainError> {
        Ok(render_text(report))
    }
}
