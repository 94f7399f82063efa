//! Implements InputPort. Inquire-based interactive prompts.
//!
//! Asks for the birth name and birth date, shows a spinner while computing,
//! prints the report and offers another round.

use crate::domain::{BIRTH_DATE_FORMAT, DomainError};
use crate::ports::{InputPort, ReportPort};
use crate::usecases::ProfileService;
use chrono::{NaiveDate, Weekday};
use crossterm::ExecutableCommand;
use crossterm::style::{Color, Print, ResetColor, SetForegroundColor};
use indicatif::{ProgressBar, ProgressStyle};
use inquire::error::InquireError;
use inquire::ui::{Color as PromptColor, RenderConfig, Styled};
use inquire::validator::Validation;
use inquire::{Confirm, CustomUserError, DateSelect, Text};
use std::io::{Write, stdout};
use std::sync::Arc;
use std::time::Duration;
use tracing::error;

/// Shown instead of the detail of unexpected failures.
pub const GENERIC_FAILURE: &str =
    "Something went wrong while computing the profile. Please try again.";

/// Applies the prompt theme for all subsequent inquire prompts.
pub fn apply_theme() {
    let config = RenderConfig::default()
        .with_prompt_prefix(Styled::new("✦").with_fg(PromptColor::LightMagenta))
        .with_highlighted_option_prefix(Styled::new("➤").with_fg(PromptColor::LightYellow));
    inquire::set_global_render_config(config);
}

fn require_name(input: &str) -> Result<Validation, CustomUserError> {
    if input.trim().is_empty() {
        Ok(Validation::Invalid("Please enter the full birth name.".into()))
    } else {
        Ok(Validation::Valid)
    }
}

/// `None` when the user cancelled or interrupted the prompt.
fn prompt_result<T>(res: Result<T, InquireError>) -> Result<Option<T>, DomainError> {
    match res {
        Ok(v) => Ok(Some(v)),
        Err(InquireError::OperationCanceled | InquireError::OperationInterrupted) => Ok(None),
        Err(e) => Err(DomainError::Unexpected(format!("prompt failed: {}", e))),
    }
}

/// Prints `msg` in red on stderr.
pub fn print_error(msg: &str) {
    let mut err = std::io::stderr();
    let _ = err.execute(SetForegroundColor(Color::Red));
    let _ = err.execute(Print(format!("{}\r\n", msg)));
    let _ = err.execute(ResetColor);
    let _ = err.flush();
}

/// User-facing message for a failed computation. Unexpected errors are logged in full
/// and replaced by a generic message.
pub fn user_message(err: &DomainError) -> String {
    match err {
        DomainError::Validation(v) => v.to_string(),
        DomainError::Unexpected(detail) => {
            error!(detail = %detail, "unexpected failure");
            GENERIC_FAILURE.to_string()
        }
    }
}

fn spinner() -> ProgressBar {
    let pb = ProgressBar::new_spinner();
    if let Ok(style) = ProgressStyle::with_template("{spinner} {msg}") {
        pb.set_style(style);
    }
    pb.set_message("Computing your numerology profile...");
    pb.enable_steady_tick(Duration::from_millis(80));
    pb
}

/// TUI adapter. Inquire prompts.
pub struct TuiInputPort {
    service: Arc<ProfileService>,
    reporter: Box<dyn ReportPort>,
}

impl TuiInputPort {
    pub fn new(service: Arc<ProfileService>, reporter: Box<dyn ReportPort>) -> Self {
        Self { service, reporter }
    }

    fn ask_name(&self) -> Result<Option<String>, DomainError> {
        prompt_result(
            Text::new("Full birth name:")
                .with_placeholder("e.g. Maria Joaquina de Amaral Pereira Góis")
                .with_help_message("Exactly as in the birth record")
                .with_validator(require_name)
                .prompt(),
        )
    }

    fn ask_birth_date(&self) -> Result<Option<NaiveDate>, DomainError> {
        let (min, max) = self.service.birth_date_range();
        prompt_result(
            DateSelect::new("Birth date:")
                .with_min_date(min)
                .with_max_date(max)
                .with_starting_date(max)
                .with_week_start(Weekday::Mon)
                .with_formatter(&|d: NaiveDate| d.format(BIRTH_DATE_FORMAT).to_string())
                .prompt(),
        )
    }

    /// One name/date round. `false` when the user cancelled.
    fn round(&self) -> Result<bool, DomainError> {
        let Some(name) = self.ask_name()? else {
            return Ok(false);
        };
        let Some(birth_date) = self.ask_birth_date()? else {
            return Ok(false);
        };

        let pb = spinner();
        let result = self
            .service
            .compute(&name, birth_date)
            .and_then(|report| self.reporter.render(&report));
        pb.finish_and_clear();

        match result {
            Ok(rendered) => {
                let mut out = stdout();
                let _ = out.write_all(rendered.as_bytes());
                let _ = out.flush();
            }
            Err(e) => print_error(&user_message(&e)),
        }
        Ok(true)
    }
}

impl InputPort for TuiInputPort {
    fn run(&self) -> Result<(), DomainError> {
        while self.round()? {
            let again = prompt_result(
                Confirm::new("Calculate another profile?")
                    .with_default(false)
                    .prompt(),
            )?;
            if again != Some(true) {
                break;
            }
        }
        Ok(())
    }
}
