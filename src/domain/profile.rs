//! Profile assembly: validate the name, then run every calculation in order.

use crate::domain::bridges::BridgeNumbers;
use crate::domain::core_numbers::{ReducedDate, calculate_core_numbers};
use crate::domain::entities::{BIRTH_DATE_FORMAT, ProfileReport, ProfileResult};
use crate::domain::errors::ValidationError;
use crate::domain::karmic::{ExpressionPlanes, KarmicDebtLog, scan_karmic_lessons};
use crate::domain::name::{NameLimits, normalize_name};
use crate::domain::periods::{challenges, life_cycles, pinnacles};
use chrono::NaiveDate;

/// Computes the profile for `full_name` born on `birth_date`, with `today` deciding
/// the personal year. Fails before computing anything when the name is invalid.
///
/// The birth date is assumed to be in range; callers enforce that.
pub fn compute_profile(
    full_name: &str,
    birth_date: NaiveDate,
    today: NaiveDate,
    limits: NameLimits,
) -> Result<ProfileReport, ValidationError> {
    let name = normalize_name(full_name, limits)?;
    let full_name = name.full();

    let mut debts = KarmicDebtLog::new();
    let core = calculate_core_numbers(&name, birth_date, today, &mut debts);
    let life_path = core.numbers.life_path;
    let date = ReducedDate::from_date(birth_date);

    let profile = ProfileResult {
        birth_date,
        birth_date_display: birth_date.format(BIRTH_DATE_FORMAT).to_string(),
        pinnacles: pinnacles(date, life_path),
        life_cycles: life_cycles(date, life_path),
        challenges: challenges(date, life_path),
        bridges: BridgeNumbers::from_core(&core.numbers),
        karmic_lessons: scan_karmic_lessons(&full_name),
        expression_planes: ExpressionPlanes::from_name(&full_name),
        core: core.numbers,
        expression_parts: core.expression_parts,
        full_name,
    };

    Ok(ProfileReport {
        profile,
        karmic_debts: debts.into_records(),
    })
}
