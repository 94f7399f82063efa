//! Inbound port. UI (adapter) calls into the application.

use crate::domain::DomainError;

/// Input port: UI/CLI collects a name and a birth date and shows the profile.
pub trait InputPort {
    /// Run the interactive flow until the user stops asking for profiles.
    fn run(&self) -> Result<(), DomainError>;
}
