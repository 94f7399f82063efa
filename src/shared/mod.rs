//! Cross-cutting configuration shared by wiring and adapters.

pub mod config;

pub use config::{AppConfig, OutputFormat};
