//! Infrastructure adapters. Implement ports.
//!
//! Clock, report renderers, terminal UI and command line. Map errors to DomainError.

pub mod cli;
pub mod clock;
pub mod export;
pub mod ui;
