//! Karmic indicators: debt numbers hit by intermediate sums, missing-number lessons
//! and the expression-plane letter counts.

use crate::domain::letters::letter_weights;
use serde::Serialize;
use std::fmt;

/// Raw sums flagged as karmic debt before reduction.
pub const KARMIC_DEBT_NUMBERS: [u32; 4] = [13, 14, 16, 19];

/// Calculation stage that produced a checked sum. Declaration order is the order
/// in which the profile runs its checks.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum KarmicDebtStage {
    ExpressionRaw,
    ExpressionReduced,
    MotivationRaw,
    MotivationReduced,
    ImpressionRaw,
    ImpressionReduced,
    BirthDay,
    LifePathReduced,
}

impl KarmicDebtStage {
    pub const fn label(self) -> &'static str {
        match self {
            Self::ExpressionRaw => "raw expression sum",
            Self::ExpressionReduced => "sum of reduced expression parts",
            Self::MotivationRaw => "raw motivation sum",
            Self::MotivationReduced => "sum of reduced motivation parts",
            Self::ImpressionRaw => "raw impression sum",
            Self::ImpressionReduced => "sum of reduced impression parts",
            Self::BirthDay => "birth day",
            Self::LifePathReduced => "reduced life path sum",
        }
    }
}

impl fmt::Display for KarmicDebtStage {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.label())
    }
}

/// A debt number found at a given stage.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct KarmicDebtRecord {
    pub stage: KarmicDebtStage,
    pub value: u32,
}

impl fmt::Display for KarmicDebtRecord {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self.stage {
            KarmicDebtStage::BirthDay => write!(
                f,
                "Karmic debt {} found in {} ({})",
                self.value, self.stage, self.value
            ),
            _ => write!(f, "Karmic debt {} found in {}", self.value, self.stage),
        }
    }
}

/// Returns a record when `value` is a karmic debt number.
pub fn check_karmic_debt(value: u32, stage: KarmicDebtStage) -> Option<KarmicDebtRecord> {
    KARMIC_DEBT_NUMBERS
        .contains(&value)
        .then_some(KarmicDebtRecord { stage, value })
}

/// Ordered, append-only debt log. Repeated hits are kept.
#[derive(Debug, Default, Clone, PartialEq, Eq)]
pub struct KarmicDebtLog {
    records: Vec<KarmicDebtRecord>,
}

impl KarmicDebtLog {
    pub fn new() -> Self {
        Self::default()
    }

    /// Checks `value` and appends a record on a hit.
    pub fn check(&mut self, value: u32, stage: KarmicDebtStage) {
        if let Some(record) = check_karmic_debt(value, stage) {
            self.records.push(record);
        }
    }

    pub fn records(&self) -> &[KarmicDebtRecord] {
        &self.records
    }

    pub fn into_records(self) -> Vec<KarmicDebtRecord> {
        self.records
    }
}

/// Digits 1..=9 absent from a name.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(tag = "status", content = "digits", rename_all = "snake_case")]
pub enum KarmicLessons {
    /// Every digit 1..=9 appears at least once.
    AllPresent,
    /// Missing digits, ascending.
    Missing(Vec<u8>),
}

impl fmt::Display for KarmicLessons {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::AllPresent => f.write_str("None"),
            Self::Missing(digits) => {
                let parts: Vec<String> = digits.iter().map(u8::to_string).collect();
                f.write_str(&parts.join(", "))
            }
        }
    }
}

/// Occurrences of each digit 1..=9 among the letters of `text` (index 0 = digit 1).
fn digit_counts(text: &str) -> [usize; 9] {
    let mut counts = [0usize; 9];
    for weight in letter_weights(text) {
        if (1..=9).contains(&weight) {
            counts[weight as usize - 1] += 1;
        }
    }
    counts
}

pub fn scan_karmic_lessons(full_name: &str) -> KarmicLessons {
    let missing: Vec<u8> = digit_counts(full_name)
        .iter()
        .zip(1u8..)
        .filter(|(count, _)| **count == 0)
        .map(|(_, digit)| digit)
        .collect();
    if missing.is_empty() {
        KarmicLessons::AllPresent
    } else {
        KarmicLessons::Missing(missing)
    }
}

/// Letter counts per plane of expression.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize)]
pub struct ExpressionPlanes {
    /// Letters worth 1 or 8.
    pub mental: usize,
    /// Letters worth 4 or 5.
    pub physical: usize,
    /// Letters worth 2, 3 or 6.
    pub emotional: usize,
    /// Letters worth 7 or 9.
    pub intuitive: usize,
}

impl ExpressionPlanes {
    pub fn from_name(full_name: &str) -> Self {
        let c = digit_counts(full_name);
        let count = |digits: &[usize]| -> usize { digits.iter().map(|d| c[d - 1]).sum() };
        Self {
            mental: count(&[1, 8]),
            physical: count(&[4, 5]),
            emotional: count(&[2, 3, 6]),
            intuitive: count(&[7, 9]),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_check_karmic_debt_hits() {
        for n in KARMIC_DEBT_NUMBERS {
            let record = check_karmic_debt(n, KarmicDebtStage::ExpressionRaw).unwrap();
            assert_eq!(record.value, n);
            assert_eq!(record.stage, KarmicDebtStage::ExpressionRaw);
        }
    }

    #[test]
    fn test_check_karmic_debt_no_false_positives() {
        for n in [0, 1, 4, 7, 12, 15, 17, 18, 20, 22, 31, 113] {
            assert!(check_karmic_debt(n, KarmicDebtStage::LifePathReduced).is_none(), "n = {n}");
        }
    }

    #[test]
    fn test_log_keeps_order_and_duplicates() {
        let mut log = KarmicDebtLog::new();
        log.check(16, KarmicDebtStage::MotivationRaw);
        log.check(12, KarmicDebtStage::MotivationReduced);
        log.check(16, KarmicDebtStage::ImpressionRaw);
        log.check(13, KarmicDebtStage::BirthDay);
        assert_eq!(
            log.records(),
            &[
                KarmicDebtRecord { stage: KarmicDebtStage::MotivationRaw, value: 16 },
                KarmicDebtRecord { stage: KarmicDebtStage::ImpressionRaw, value: 16 },
                KarmicDebtRecord { stage: KarmicDebtStage::BirthDay, value: 13 },
            ]
        );
    }

    #[test]
    fn test_record_display() {
        let record = KarmicDebtRecord { stage: KarmicDebtStage::ExpressionRaw, value: 14 };
        assert_eq!(record.to_string(), "Karmic debt 14 found in raw expression sum");
        let day = KarmicDebtRecord { stage: KarmicDebtStage::BirthDay, value: 19 };
        assert_eq!(day.to_string(), "Karmic debt 19 found in birth day (19)");
    }

    #[test]
    fn test_lessons_missing_digits() {
        let lessons = scan_karmic_lessons("Marcos Antonio Inoue Rosa");
        assert_eq!(lessons, KarmicLessons::Missing(vec![7, 8]));
        assert_eq!(lessons.to_string(), "7, 8");
    }

    #[test]
    fn test_lessons_pangram_all_present() {
        let lessons = scan_karmic_lessons("Quick brown fox jumps over the lazy dog");
        assert_eq!(lessons, KarmicLessons::AllPresent);
        assert_eq!(lessons.to_string(), "None");
    }

    #[test]
    fn test_expression_planes() {
        let planes = ExpressionPlanes::from_name("Marcos Antonio Inoue Rosa");
        assert_eq!(
            planes,
            ExpressionPlanes { mental: 5, physical: 5, emotional: 8, intuitive: 4 }
        );
    }

    #[test]
    fn test_planes_ignore_accented_letters() {
        assert_eq!(
            ExpressionPlanes::from_name("Góis"),
            ExpressionPlanes { mental: 1, physical: 0, emotional: 0, intuitive: 2 }
        );
    }
}
