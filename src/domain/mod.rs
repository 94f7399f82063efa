//! Core domain layer. No external I/O dependencies.
//!
//! The numerology engine lives here: digit reduction, letter values, name
//! validation and every profile calculation. Dependencies flow inward.

pub mod bridges;
pub mod core_numbers;
pub mod entities;
pub mod errors;
pub mod karmic;
pub mod letters;
pub mod name;
pub mod periods;
pub mod profile;
pub mod reducer;

pub use bridges::BridgeNumbers;
pub use core_numbers::{CoreNumbers, NamePart, PersonalYear};
pub use entities::{BIRTH_DATE_FORMAT, CoreNumberKind, ProfileReport, ProfileResult};
pub use errors::{DomainError, ValidationError};
pub use karmic::{ExpressionPlanes, KarmicDebtRecord, KarmicDebtStage, KarmicLessons};
pub use letters::{LetterFilter, letter_value};
pub use name::NameLimits;
pub use periods::{Challenges, LifeCycles, PeriodWindow, Pinnacles};
pub use profile::compute_profile;
pub use reducer::reduce;
