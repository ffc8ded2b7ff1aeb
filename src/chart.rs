//! Chart adapter: calendar date + hour to an eight-character birth chart.
//!
//! All four pillars are plain modular arithmetic over the 10-stem and
//! 12-branch cycles, anchored at 1900:
//!
//! | pillar | position                                  | stem base | branch base |
//! |--------|-------------------------------------------|-----------|-------------|
//! | year   | `year - 1900`                             | 6 (경)    | 0 (자)      |
//! | month  | `(year - 1900) * 12 + (month - 1)`        | 3 (정)    | 1 (축)      |
//! | day    | days since 1900-01-01, plus one           | 0 (갑)    | 11 (술), minus one |
//! | hour   | double-hour table, stem from the day stem | -         | -           |
//!
//! The day-pillar `+1` on the day count and `-1` on the branch are fixed
//! offsets: 1900-01-01 yields stem 을 (1) and branch 해 (11).
//!
//! No solar-term boundaries or lunar conversion are applied.

use chrono::{Datelike, NaiveDate};
use serde::{Deserialize, Serialize};

use crate::cycles::{Branch, Stem};
use crate::error::ChartError;
use crate::utils::Language;

/// Anchor year for every pillar.
pub const EPOCH_YEAR: i32 = 1900;

pub const MIN_YEAR: i32 = 1900;
pub const MAX_YEAR: i32 = 2100;

const YEAR_STEM_BASE: i64 = 6; // 경
const YEAR_BRANCH_BASE: i64 = 0; // 자

const MONTH_STEM_BASE: i64 = 3; // 정
const MONTH_BRANCH_BASE: i64 = 1; // 축

const DAY_STEM_BASE: i64 = 0; // 갑
const DAY_BRANCH_BASE: i64 = 11; // 술
/// Added to the elapsed-day count before both lookups.
const DAY_COUNT_OFFSET: i64 = 1;
/// Applied to the branch lookup only.
const DAY_BRANCH_CORRECTION: i64 = -1;
/// `NaiveDate::num_days_from_ce` of 1900-01-01.
const EPOCH_DAYS_FROM_CE: i64 = 693_596;

/// Hour of day (0-23) to branch index. 23:00 and 00:00 both fall in 자.
const HOUR_TO_BRANCH: [u8; 24] = [
    0, 1, 1, 2, 2, 3, 3, 4, 4, 5, 5, 6, 6, 7, 7, 8, 8, 9, 9, 10, 10, 11, 11, 0,
];

/// One (stem, branch) pair.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct Pillar {
    pub stem: Stem,
    pub branch: Branch,
}

impl Pillar {
    pub const fn new(stem: Stem, branch: Branch) -> Self {
        Self { stem, branch }
    }

    /// Two-character label, e.g. "경오" or "GyeongO".
    pub fn label(&self, language: Language) -> String {
        format!("{}{}", self.stem.label(language), self.branch.label(language))
    }
}

/// Four pillars: year, month, day, hour.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct BirthChart {
    pub year: Pillar,
    pub month: Pillar,
    pub day: Pillar,
    pub hour: Pillar,
}

impl BirthChart {
    /// Pillars in fixed order (year, month, day, hour).
    pub fn pillars(&self) -> [Pillar; 4] {
        [self.year, self.month, self.day, self.hour]
    }

    pub fn label(&self, language: Language) -> String {
        self.pillars()
            .iter()
            .map(|p| p.label(language))
            .collect::<Vec<_>>()
            .join(" ")
    }
}

fn check_range(field: &'static str, value: i64, min: i64, max: i64) -> Result<(), ChartError> {
    if value < min || value > max {
        return Err(ChartError::InputRange { field, value, min, max });
    }
    Ok(())
}

/// Compute the eight-character chart for a birth date and hour.
///
/// Fails with [`ChartError::InputRange`] when a field is outside
/// year 1900..=2100, month 1..=12, day 1..=31, hour 0..=23, and with
/// [`ChartError::InvalidDate`] when the date does not exist.
pub fn compute_chart(year: i32, month: u32, day: u32, hour: u32) -> Result<BirthChart, ChartError> {
    check_range("year", year as i64, MIN_YEAR as i64, MAX_YEAR as i64)?;
    check_range("month", month as i64, 1, 12)?;
    check_range("day", day as i64, 1, 31)?;
    check_range("hour", hour as i64, 0, 23)?;

    let date = NaiveDate::from_ymd_opt(year, month, day)
        .ok_or(ChartError::InvalidDate { year, month, day })?;

    let day_pillar = day_pillar(date);
    let chart = BirthChart {
        year: year_pillar(year),
        month: month_pillar(year, month),
        day: day_pillar,
        hour: hour_pillar(day_pillar.stem, hour),
    };

    tracing::trace!(
        "chart {:04}-{:02}-{:02} {:02}h -> {}",
        year,
        month,
        day,
        hour,
        chart.label(Language::English)
    );

    Ok(chart)
}

fn year_pillar(year: i32) -> Pillar {
    let year_diff = (year - EPOCH_YEAR) as i64;
    Pillar::new(
        Stem::from_cycle(year_diff + YEAR_STEM_BASE),
        Branch::from_cycle(year_diff + YEAR_BRANCH_BASE),
    )
}

fn month_pillar(year: i32, month: u32) -> Pillar {
    let total_months = (year - EPOCH_YEAR) as i64 * 12 + (month as i64 - 1);
    Pillar::new(
        Stem::from_cycle(total_months + MONTH_STEM_BASE),
        Branch::from_cycle(total_months + MONTH_BRANCH_BASE),
    )
}

fn day_pillar(date: NaiveDate) -> Pillar {
    let total_days = date.num_days_from_ce() as i64 - EPOCH_DAYS_FROM_CE + DAY_COUNT_OFFSET;
    Pillar::new(
        Stem::from_cycle(total_days + DAY_STEM_BASE),
        Branch::from_cycle(total_days + DAY_BRANCH_BASE + DAY_BRANCH_CORRECTION),
    )
}

fn hour_pillar(day_stem: Stem, hour: u32) -> Pillar {
    let branch_index = HOUR_TO_BRANCH[hour as usize];
    let stem_position = day_stem.index() as i64 * 2 + (hour / 2) as i64;
    Pillar::new(
        Stem::from_cycle(stem_position),
        Branch::from_cycle(branch_index as i64),
    )
}
