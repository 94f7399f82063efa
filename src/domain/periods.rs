//! Life periods: pinnacles, life cycles and challenges.
//!
//! All three read the birth date reduced to single digits. Age windows are driven
//! by the life path number; challenge windows are the pinnacle windows.

use crate::domain::core_numbers::ReducedDate;
use crate::domain::reducer::reduce;
use serde::Serialize;
use std::fmt;

/// Length in years of the second and third pinnacles.
pub const PINNACLE_SPAN: u32 = 9;
/// Length in years of the productive cycle, and the floor of the formative one.
pub const CYCLE_SPAN: u32 = 27;

/// A number governing an age range. `end_age` is inclusive; `None` means open-ended.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct PeriodWindow {
    pub number: u32,
    pub start_age: u32,
    pub end_age: Option<u32>,
}

impl PeriodWindow {
    fn new(number: u32, (start_age, end_age): (u32, Option<u32>)) -> Self {
        Self {
            number,
            start_age,
            end_age,
        }
    }

    /// Age range only, e.g. `0-33` or `52+`.
    pub fn ages(&self) -> String {
        match self.end_age {
            Some(end) => format!("{}-{}", self.start_age, end),
            None => format!("{}+", self.start_age),
        }
    }
}

impl fmt::Display for PeriodWindow {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{} (ages {})", self.number, self.ages())
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct Pinnacles {
    pub first: PeriodWindow,
    pub second: PeriodWindow,
    pub third: PeriodWindow,
    pub fourth: PeriodWindow,
}

impl Pinnacles {
    pub fn as_array(&self) -> [PeriodWindow; 4] {
        [self.first, self.second, self.third, self.fourth]
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct LifeCycles {
    pub formative: PeriodWindow,
    pub productive: PeriodWindow,
    pub harvest: PeriodWindow,
}

impl LifeCycles {
    pub const NAMES: [&'static str; 3] = ["Formative", "Productive", "Harvest"];

    pub fn as_array(&self) -> [PeriodWindow; 3] {
        [self.formative, self.productive, self.harvest]
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct Challenges {
    pub first: PeriodWindow,
    pub second: PeriodWindow,
    pub third: PeriodWindow,
    pub fourth: PeriodWindow,
    /// The central challenge of life; always the third challenge's number.
    pub major: u32,
}

impl Challenges {
    pub fn as_array(&self) -> [PeriodWindow; 4] {
        [self.first, self.second, self.third, self.fourth]
    }
}

/// Age windows of the four pinnacles. The first ends at `36 - life_path`.
pub fn pinnacle_windows(life_path: u32) -> [(u32, Option<u32>); 4] {
    let first_end = 36u32.saturating_sub(life_path);
    let second_end = first_end + PINNACLE_SPAN;
    let third_end = second_end + PINNACLE_SPAN;
    [
        (0, Some(first_end)),
        (first_end + 1, Some(second_end)),
        (second_end + 1, Some(third_end)),
        (third_end + 1, None),
    ]
}

pub fn pinnacles(date: ReducedDate, life_path: u32) -> Pinnacles {
    let ReducedDate { day, month, year } = date;
    let first = reduce(i64::from(day + month), true);
    let second = reduce(i64::from(day + year), true);
    let third = reduce(i64::from(first + second), true);
    let fourth = reduce(i64::from(month + year), true);
    let [w1, w2, w3, w4] = pinnacle_windows(life_path);
    Pinnacles {
        first: PeriodWindow::new(first, w1),
        second: PeriodWindow::new(second, w2),
        third: PeriodWindow::new(third, w3),
        fourth: PeriodWindow::new(fourth, w4),
    }
}

/// Formative (month), productive (day) and harvest (year) cycles. The formative cycle
/// ends at `27 + (9 - life_path)`, never before 27.
pub fn life_cycles(date: ReducedDate, life_path: u32) -> LifeCycles {
    let first_end = (CYCLE_SPAN + 9).saturating_sub(life_path).max(CYCLE_SPAN);
    let second_end = first_end + CYCLE_SPAN;
    LifeCycles {
        formative: PeriodWindow::new(date.month, (0, Some(first_end))),
        productive: PeriodWindow::new(date.day, (first_end + 1, Some(second_end))),
        harvest: PeriodWindow::new(date.year, (second_end + 1, None)),
    }
}

pub fn challenges(date: ReducedDate, life_path: u32) -> Challenges {
    let ReducedDate { day, month, year } = date;
    let diff = |a: u32, b: u32| reduce(i64::from(a.abs_diff(b)), false);
    let first = diff(day, month);
    let second = diff(day, year);
    let third = diff(first, second);
    let fourth = diff(month, year);
    let [w1, w2, w3, w4] = pinnacle_windows(life_path);
    Challenges {
        first: PeriodWindow::new(first, w1),
        second: PeriodWindow::new(second, w2),
        third: PeriodWindow::new(third, w3),
        fourth: PeriodWindow::new(fourth, w4),
        major: third,
    }
}
