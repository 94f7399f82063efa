//! Core numbers: expression, soul urge, personality, life path, birth day,
//! maturity, equilibrium and personal year.
//!
//! Name numbers reduce every part fully first and only preserve masters when the
//! reduced parts are summed and reduced again. Reducing the raw total instead
//! would turn 24+34+28+17 = 103 into 4 and lose the master 22 that
//! 6+7+1+8 produces.

use crate::domain::karmic::{KarmicDebtLog, KarmicDebtStage};
use crate::domain::letters::{LetterFilter, letter_contributions, letter_weight};
use crate::domain::name::NormalizedName;
use crate::domain::reducer::reduce;
use chrono::{Datelike, NaiveDate};
use serde::Serialize;

/// One name part as it enters a name-number sum.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct NamePart {
    pub text: String,
    /// Weight of each counted letter, in order.
    pub letters: Vec<u32>,
    pub raw: u32,
    /// `raw` reduced to one digit; masters are not kept at part level.
    pub reduced: u32,
}

impl NamePart {
    pub fn new(text: &str, filter: LetterFilter) -> Self {
        let letters = letter_contributions(text, filter);
        let raw = letters.iter().sum();
        Self {
            text: text.to_string(),
            letters,
            raw,
            reduced: reduce(i64::from(raw), false),
        }
    }
}

/// Birth day, month and year each reduced to one digit without master preservation.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ReducedDate {
    pub day: u32,
    pub month: u32,
    pub year: u32,
}

impl ReducedDate {
    pub fn from_date(date: NaiveDate) -> Self {
        Self {
            day: reduce(i64::from(date.day()), false),
            month: reduce(i64::from(date.month()), false),
            year: reduce(i64::from(date.year()), false),
        }
    }

    pub fn sum(&self) -> u32 {
        self.day + self.month + self.year
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct PersonalYear {
    pub number: u32,
    /// Calendar year the number was based on.
    pub year_used: i32,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct CoreNumbers {
    pub life_path: u32,
    pub expression: u32,
    pub soul_urge: u32,
    pub personality: u32,
    pub maturity: u32,
    pub equilibrium: u32,
    pub birth_day: u32,
    pub personal_year: PersonalYear,
}

/// Core numbers together with the per-part expression audit.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CoreCalculation {
    pub numbers: CoreNumbers,
    pub expression_parts: Vec<NamePart>,
}

/// Final value of a name number and its per-part breakdown.
struct NameNumber {
    value: u32,
    parts: Vec<NamePart>,
}

fn name_number(
    parts: &[String],
    filter: LetterFilter,
    raw_stage: KarmicDebtStage,
    reduced_stage: KarmicDebtStage,
    log: &mut KarmicDebtLog,
) -> NameNumber {
    let parts: Vec<NamePart> = parts.iter().map(|p| NamePart::new(p, filter)).collect();
    let raw_total: u32 = parts.iter().map(|p| p.raw).sum();
    let reduced_total: u32 = parts.iter().map(|p| p.reduced).sum();
    log.check(raw_total, raw_stage);
    log.check(reduced_total, reduced_stage);
    NameNumber {
        value: reduce(i64::from(reduced_total), true),
        parts,
    }
}

pub fn life_path(birth_date: NaiveDate, log: &mut KarmicDebtLog) -> u32 {
    log.check(birth_date.day(), KarmicDebtStage::BirthDay);
    let sum = ReducedDate::from_date(birth_date).sum();
    log.check(sum, KarmicDebtStage::LifePathReduced);
    reduce(i64::from(sum), true)
}

/// Birth day on its own, masters preserved (unlike the life path's day component).
pub fn birth_day_number(birth_date: NaiveDate) -> u32 {
    reduce(i64::from(birth_date.day()), true)
}

pub fn maturity(life_path: u32, expression: u32) -> u32 {
    reduce(i64::from(life_path + expression), true)
}

/// Sum of the first-letter values of each part. A part starting with an apostrophe
/// or hyphen contributes nothing.
pub fn equilibrium(parts: &[String]) -> u32 {
    let sum: u32 = parts
        .iter()
        .filter_map(|p| p.chars().next())
        .filter(|c| c.is_alphabetic())
        .map(|c| letter_weight(c).unwrap_or(0))
        .sum();
    reduce(i64::from(sum), true)
}

/// True once this year's anniversary of `birth_date` is on or before `today`.
///
/// A Feb 29 anniversary in a common year has no date of its own; it counts as
/// reached from March 1.
pub fn anniversary_reached(birth_date: NaiveDate, today: NaiveDate) -> bool {
    match NaiveDate::from_ymd_opt(today.year(), birth_date.month(), birth_date.day()) {
        Some(anniversary) => today >= anniversary,
        None => (today.month(), today.day()) >= (birth_date.month(), birth_date.day()),
    }
}

pub fn personal_year(birth_date: NaiveDate, today: NaiveDate) -> PersonalYear {
    let year_used = if anniversary_reached(birth_date, today) {
        today.year()
    } else {
        today.year() - 1
    };
    let sum = reduce(i64::from(birth_date.day()), false)
        + reduce(i64::from(birth_date.month()), false)
        + reduce(i64::from(year_used), false);
    PersonalYear {
        number: reduce(i64::from(sum), true),
        year_used,
    }
}

/// Runs every core calculation. Debt checks are appended to `log` in a fixed order:
/// expression, motivation, impression (raw then reduced each), birth day, life path.
pub fn calculate_core_numbers(
    name: &NormalizedName,
    birth_date: NaiveDate,
    today: NaiveDate,
    log: &mut KarmicDebtLog,
) -> CoreCalculation {
    let parts = name.parts();
    let expression = name_number(
        parts,
        LetterFilter::All,
        KarmicDebtStage::ExpressionRaw,
        KarmicDebtStage::ExpressionReduced,
        log,
    );
    let soul_urge = name_number(
        parts,
        LetterFilter::VowelsOnly,
        KarmicDebtStage::MotivationRaw,
        KarmicDebtStage::MotivationReduced,
        log,
    );
    let personality = name_number(
        parts,
        LetterFilter::ConsonantsOnly,
        KarmicDebtStage::ImpressionRaw,
        KarmicDebtStage::ImpressionReduced,
        log,
    );
    let life_path = life_path(birth_date, log);

    CoreCalculation {
        numbers: CoreNumbers {
            life_path,
            expression: expression.value,
            soul_urge: soul_urge.value,
            personality: personality.value,
            maturity: maturity(life_path, expression.value),
            equilibrium: equilibrium(parts),
            birth_day: birth_day_number(birth_date),
            personal_year: personal_year(birth_date, today),
        },
        expression_parts: expression.parts,
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::karmic::KarmicDebtRecord;
    use crate::domain::name::{NameLimits, normalize_name};

    fn date(y: i32, m: u32, d: u32) -> NaiveDate {
        NaiveDate::from_ymd_opt(y, m, d).unwrap()
    }

    fn parts(s: &str) -> Vec<String> {
        s.split_whitespace().map(str::to_string).collect()
    }

    #[test]
    fn test_expression_keeps_master_from_reduced_parts() {
        let mut log = KarmicDebtLog::new();
        let expr = name_number(
            &parts("MARCOS ANTONIO INOUE ROSA"),
            LetterFilter::All,
            KarmicDebtStage::ExpressionRaw,
            KarmicDebtStage::ExpressionReduced,
            &mut log,
        );
        let summary: Vec<(u32, u32)> = expr.parts.iter().map(|p| (p.raw, p.reduced)).collect();
        assert_eq!(summary, vec![(24, 6), (34, 7), (28, 1), (17, 8)]);
        assert_eq!(expr.value, 22);
        assert!(log.records().is_empty());
    }

    #[test]
    fn test_name_part_never_keeps_master() {
        // K2 + I9 + K2 + I9 = 22, still reduced to 4 at part level
        assert_eq!(NamePart::new("Kiki", LetterFilter::All).reduced, 4);
        assert_eq!(NamePart::new("Kiki", LetterFilter::All).letters, vec![2, 9, 2, 9]);
    }

    #[test]
    fn test_life_path_and_debt_checks() {
        let mut log = KarmicDebtLog::new();
        // 13 -> 4, 7, 1990 -> 1; 4 + 7 + 1 = 12 -> 3
        assert_eq!(life_path(date(1990, 7, 13), &mut log), 3);
        assert_eq!(
            log.records(),
            &[KarmicDebtRecord { stage: KarmicDebtStage::BirthDay, value: 13 }]
        );
    }

    #[test]
    fn test_life_path_reduced_sum_debt() {
        let mut log = KarmicDebtLog::new();
        // 7 + 8 + (1990 -> 1) = 16 -> 7
        assert_eq!(life_path(date(1990, 8, 7), &mut log), 7);
        assert_eq!(
            log.records(),
            &[KarmicDebtRecord { stage: KarmicDebtStage::LifePathReduced, value: 16 }]
        );
    }

    #[test]
    fn test_life_path_master() {
        let mut log = KarmicDebtLog::new();
        // 9 + 9 + (2011 -> 4) = 22
        assert_eq!(life_path(date(2011, 9, 9), &mut log), 22);
    }

    #[test]
    fn test_birth_day_number_keeps_master() {
        assert_eq!(birth_day_number(date(1990, 1, 29)), 11);
        assert_eq!(birth_day_number(date(1990, 1, 22)), 22);
        assert_eq!(birth_day_number(date(1990, 1, 13)), 4);
    }

    #[test]
    fn test_maturity() {
        assert_eq!(maturity(3, 22), 7);
        assert_eq!(maturity(9, 2), 11);
    }

    #[test]
    fn test_equilibrium() {
        // M4 + A1 + I9 + R9 = 23 -> 5
        assert_eq!(equilibrium(&parts("Marcos Antonio Inoue Rosa")), 5);
        // leading apostrophe contributes nothing: A1 + B2 = 3
        assert_eq!(equilibrium(&parts("Ana 'Tom Bia")), 3);
        assert_eq!(equilibrium(&parts("Émile")), 0);
    }

    #[test]
    fn test_personal_year_after_anniversary() {
        // day 13 -> 4, month 7, 2024 -> 8: 19 -> 1
        let py = personal_year(date(1990, 7, 13), date(2024, 10, 19));
        assert_eq!(py, PersonalYear { number: 1, year_used: 2024 });
    }

    #[test]
    fn test_personal_year_on_anniversary() {
        let py = personal_year(date(1990, 7, 13), date(2024, 7, 13));
        assert_eq!(py.year_used, 2024);
    }

    #[test]
    fn test_personal_year_before_anniversary() {
        // 4 + 7 + (2023 -> 7) = 18 -> 9
        let py = personal_year(date(1990, 7, 13), date(2024, 7, 12));
        assert_eq!(py, PersonalYear { number: 9, year_used: 2023 });
    }

    #[test]
    fn test_personal_year_leap_day_in_common_year() {
        let birth = date(2000, 2, 29);
        assert_eq!(personal_year(birth, date(2023, 2, 28)).year_used, 2022);
        assert_eq!(personal_year(birth, date(2023, 3, 1)).year_used, 2023);
        assert_eq!(personal_year(birth, date(2024, 2, 29)).year_used, 2024);
    }

    #[test]
    fn test_calculate_core_numbers_walkthrough() {
        let name = normalize_name("Marcos Antonio Inoue Rosa", NameLimits::FULL).unwrap();
        let mut log = KarmicDebtLog::new();
        let calc = calculate_core_numbers(&name, date(1990, 7, 13), date(2024, 10, 19), &mut log);
        assert_eq!(
            calc.numbers,
            CoreNumbers {
                life_path: 3,
                expression: 22,
                soul_urge: 5,
                personality: 8,
                maturity: 7,
                equilibrium: 5,
                birth_day: 4,
                personal_year: PersonalYear { number: 1, year_used: 2024 },
            }
        );
        assert_eq!(calc.expression_parts.len(), 4);
        assert_eq!(
            log.records(),
            &[KarmicDebtRecord { stage: KarmicDebtStage::BirthDay, value: 13 }]
        );
    }

    fn debt_log(full_name: &str) -> Vec<KarmicDebtRecord> {
        let name = normalize_name(full_name, NameLimits::FULL).unwrap();
        let mut log = KarmicDebtLog::new();
        // 1 + 1 + (2000 -> 2) = 4: no date debts
        calculate_core_numbers(&name, date(2000, 1, 1), date(2024, 1, 1), &mut log);
        log.into_records()
    }

    #[test]
    fn test_debt_stage_vowels_are_motivation() {
        // O6 + O6 + A1 = 13, all vowels
        assert_eq!(
            debt_log("Ooa"),
            vec![
                KarmicDebtRecord { stage: KarmicDebtStage::ExpressionRaw, value: 13 },
                KarmicDebtRecord { stage: KarmicDebtStage::MotivationRaw, value: 13 },
            ]
        );
    }

    #[test]
    fn test_debt_stage_consonants_are_impression() {
        // vowels: Ooa 13; consonants: H8 + D4 + B2 = 14
        // expression: raw 27, reduced 4 + 5 = 9; impression reduced 0 + 5 = 5
        assert_eq!(
            debt_log("Ooa Hdb"),
            vec![
                KarmicDebtRecord { stage: KarmicDebtStage::MotivationRaw, value: 13 },
                KarmicDebtRecord { stage: KarmicDebtStage::ImpressionRaw, value: 14 },
            ]
        );
    }

    #[test]
    fn test_debt_stage_expression_reduced() {
        // I9 + I9 = 18 -> 9, D4: raw 22, reduced 13
        assert_eq!(
            debt_log("Ii D"),
            vec![KarmicDebtRecord { stage: KarmicDebtStage::ExpressionReduced, value: 13 }]
        );
    }

    #[test]
    fn test_debt_order_across_stages() {
        // "Leo": expression raw 14 (L3 E5 O6); motivation 11; impression 3.
        let name = normalize_name("Leo", NameLimits::FULL).unwrap();
        let mut log = KarmicDebtLog::new();
        calculate_core_numbers(&name, date(1990, 8, 16), date(2024, 1, 1), &mut log);
        // day 16 -> 7, 8, 1990 -> 1: 16 again at the life path stage
        assert_eq!(
            log.records(),
            &[
                KarmicDebtRecord { stage: KarmicDebtStage::ExpressionRaw, value: 14 },
                KarmicDebtRecord { stage: KarmicDebtStage::BirthDay, value: 16 },
                KarmicDebtRecord { stage: KarmicDebtStage::LifePathReduced, value: 16 },
            ]
        );
    }
}
