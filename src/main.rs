//! Wiring & DI. Entry point: parse flags, load config, bootstrap adapters, inject into
//! the profile service, then run one-shot or interactive.
//! No business logic here.

use clap::Parser;
use dotenv::dotenv;
use numerology::adapters::cli::Cli;
use numerology::adapters::clock::{FixedClock, SystemClock};
use numerology::adapters::export::reporter_for;
use numerology::adapters::ui::tui::{TuiInputPort, print_error, user_message};
use numerology::domain::DomainError;
use numerology::ports::{ClockPort, InputPort};
use numerology::shared::AppConfig;
use numerology::usecases::ProfileService;
use std::io::Write;
use std::process::ExitCode;
use std::sync::Arc;
use tracing::{info, warn};
use tracing_subscriber::{EnvFilter, layer::SubscriberExt, util::SubscriberInitExt};

fn main() -> anyhow::Result<ExitCode> {
    let cli = Cli::parse();
    let env_loaded = dotenv();
    tracing_subscriber::registry()
        .with(EnvFilter::try_from_default_env().unwrap_or_else(|_| "info".into()))
        .with(tracing_subscriber::fmt::layer().with_writer(std::io::stderr))
        .init();

    match &env_loaded {
        Ok(path) => info!(path = %path.display(), "loaded .env"),
        Err(_) => info!("no .env found"),
    }

    let cfg = AppConfig::load().unwrap_or_else(|e| {
        warn!(error = %e, "config load failed, using defaults");
        AppConfig::default()
    });
    let settings = cli.settings(&cfg);
    info!(
        max_parts = settings.limits.max_parts,
        max_part_len = settings.limits.max_part_len,
        "settings resolved"
    );

    // --- Clock: fixed when overridden, host date otherwise ---
    let clock: Arc<dyn ClockPort> = match settings.today {
        Some(today) => {
            info!(%today, "using fixed today");
            Arc::new(FixedClock::new(today))
        }
        None => Arc::new(SystemClock),
    };

    let service = Arc::new(ProfileService::new(clock, settings.limits));
    let reporter = reporter_for(settings.format);
    info!(format = reporter.format_name(), "reporter ready");

    // --- One-shot: both inputs on the command line ---
    if let Some((name, birth_date)) = cli.one_shot() {
        let result = service
            .compute(name, birth_date)
            .and_then(|report| reporter.render(&report));
        return Ok(match result {
            Ok(rendered) => {
                let mut out = std::io::stdout();
                out.write_all(rendered.as_bytes())?;
                out.flush()?;
                ExitCode::SUCCESS
            }
            Err(e) => {
                print_error(&user_message(&e));
                exit_code(&e)
            }
        });
    }

    // --- Interactive ---
    numerology::adapters::ui::init_ui(settings.banner);
    let input_port: Box<dyn InputPort> = Box::new(TuiInputPort::new(service, reporter));
    if let Err(e) = input_port.run() {
        print_error(&user_message(&e));
        return Ok(exit_code(&e));
    }

    Ok(ExitCode::SUCCESS)
}

/// 2 for validation failures, 1 for anything else.
fn exit_code(err: &DomainError) -> ExitCode {
    if err.is_validation() {
        ExitCode::from(2)
    } else {
        ExitCode::FAILURE
    }
}
