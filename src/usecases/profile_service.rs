//! Profile use case: range-check the birth date, pin "today" from the clock,
//! run the engine and log the outcome.

use crate::domain::{DomainError, NameLimits, ProfileReport, ValidationError, compute_profile};
use crate::ports::ClockPort;
use chrono::NaiveDate;
use std::sync::Arc;
use tracing::{debug, info, warn};

/// Earliest accepted birth year.
pub const MIN_BIRTH_YEAR: i32 = 1900;

/// Profile service. Owns the clock and the name limits in force.
pub struct ProfileService {
    clock: Arc<dyn ClockPort>,
    limits: NameLimits,
}

impl ProfileService {
    pub fn new(clock: Arc<dyn ClockPort>, limits: NameLimits) -> Self {
        Self { clock, limits }
    }

    pub fn limits(&self) -> NameLimits {
        self.limits
    }

    pub fn today(&self) -> NaiveDate {
        self.clock.today()
    }

    /// Accepted birth dates: Jan 1 of `MIN_BIRTH_YEAR` through today, inclusive.
    pub fn birth_date_range(&self) -> (NaiveDate, NaiveDate) {
        let min = NaiveDate::from_ymd_opt(MIN_BIRTH_YEAR, 1, 1).unwrap_or(NaiveDate::MIN);
        (min, self.today())
    }

    /// Compute the full profile. Nothing is produced when validation fails.
    pub fn compute(
        &self,
        full_name: &str,
        birth_date: NaiveDate,
    ) -> Result<ProfileReport, DomainError> {
        let (min, max) = self.birth_date_range();
        if birth_date < min || birth_date > max {
            let err = ValidationError::BirthDateOutOfRange {
                date: birth_date,
                min,
                max,
            };
            warn!(%birth_date, "birth date rejected");
            return Err(err.into());
        }

        debug!(
            parts = full_name.split_whitespace().count(),
            %birth_date,
            today = %max,
            max_parts = self.limits.max_parts,
            "computing profile"
        );

        let report = compute_profile(full_name, birth_date, max, self.limits).map_err(|e| {
            warn!(error = %e, "name rejected");
            DomainError::from(e)
        })?;

        let core = &report.profile.core;
        info!(
            life_path = core.life_path,
            expression = core.expression,
            soul_urge = core.soul_urge,
            personality = core.personality,
            personal_year = core.personal_year.number,
            "profile computed"
        );
        for debt in &report.karmic_debts {
            warn!(stage = %debt.stage, value = debt.value, "karmic debt");
        }

        Ok(report)
    }
}
