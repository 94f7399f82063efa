//! Profile records. Pure data produced by the engine.
//!
//! No formatting or I/O here. Adapters render these.

use crate::domain::bridges::BridgeNumbers;
use crate::domain::core_numbers::{CoreNumbers, NamePart};
use crate::domain::karmic::{ExpressionPlanes, KarmicDebtRecord, KarmicLessons};
use crate::domain::periods::{Challenges, LifeCycles, Pinnacles};
use chrono::NaiveDate;
use serde::Serialize;

/// Display format of birth dates.
pub const BIRTH_DATE_FORMAT: &str = "%d/%m/%Y";

/// Names a core number for display.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum CoreNumberKind {
    LifePath,
    Expression,
    SoulUrge,
    Personality,
    BirthDay,
    Maturity,
    Equilibrium,
    PersonalYear,
}

impl CoreNumberKind {
    pub const ALL: [Self; 8] = [
        Self::LifePath,
        Self::Expression,
        Self::SoulUrge,
        Self::Personality,
        Self::BirthDay,
        Self::Maturity,
        Self::Equilibrium,
        Self::PersonalYear,
    ];

    pub const fn label(self) -> &'static str {
        match self {
            Self::LifePath => "Life Path",
            Self::Expression => "Expression (Destiny)",
            Self::SoulUrge => "Soul Urge (Motivation)",
            Self::Personality => "Personality (Impression)",
            Self::BirthDay => "Birth Day",
            Self::Maturity => "Maturity",
            Self::Equilibrium => "Equilibrium (Initials)",
            Self::PersonalYear => "Personal Year",
        }
    }
}

impl CoreNumbers {
    pub fn get(&self, kind: CoreNumberKind) -> u32 {
        match kind {
            CoreNumberKind::LifePath => self.life_path,
            CoreNumberKind::Expression => self.expression,
            CoreNumberKind::SoulUrge => self.soul_urge,
            CoreNumberKind::Personality => self.personality,
            CoreNumberKind::BirthDay => self.birth_day,
            CoreNumberKind::Maturity => self.maturity,
            CoreNumberKind::Equilibrium => self.equilibrium,
            CoreNumberKind::PersonalYear => self.personal_year.number,
        }
    }
}

/// Full numerology profile for one (name, birth date) pair.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct ProfileResult {
    /// Cleaned name parts joined by single spaces.
    pub full_name: String,
    pub birth_date: NaiveDate,
    /// `DD/MM/YYYY`.
    pub birth_date_display: String,
    pub core: CoreNumbers,
    /// Expression sum per name part, for auditing.
    pub expression_parts: Vec<NamePart>,
    pub pinnacles: Pinnacles,
    pub life_cycles: LifeCycles,
    pub challenges: Challenges,
    pub bridges: BridgeNumbers,
    pub karmic_lessons: KarmicLessons,
    pub expression_planes: ExpressionPlanes,
}

/// A profile and the karmic debts met while computing it, in check order.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct ProfileReport {
    pub profile: ProfileResult,
    pub karmic_debts: Vec<KarmicDebtRecord>,
}
