//! Error types raised by the chart adapter and group analysis.
//!
//! The compatibility engine itself is total over valid charts and has no
//! error type of its own.

use thiserror::Error;

/// Failure to build a birth chart from calendar input.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum ChartError {
    /// The date is within range field by field but does not exist (e.g. Feb 30).
    #[error("invalid calendar date {year:04}-{month:02}-{day:02}")]
    InvalidDate { year: i32, month: u32, day: u32 },

    /// A numeric field lies outside its documented bound.
    #[error("{field} out of range: {value} (expected {min}..={max})")]
    InputRange {
        field: &'static str,
        value: i64,
        min: i64,
        max: i64,
    },
}

/// Failure to run a group analysis.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum GroupError {
    #[error("group analysis needs at least {min} members, got {count}")]
    TooFewMembers { count: usize, min: usize },

    #[error("group analysis supports at most {max} members, got {count}")]
    TooManyMembers { count: usize, max: usize },
}
