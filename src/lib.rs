//! Saju Compatibility Scorer
//!
//! Two birth charts in, one compatibility score out.
//!
//! - `chart`: calendar date + hour to four stem/branch pillars
//! - `metrics/`: element tally and the three pair metrics (M1-M3)
//! - `scorer`: composite score, pair and group analysis
//! - `explanation/`: detail lines, overall label, JSON and markdown output
//!
//! ```
//! use saju_scorer_rust::{analyze, compute_chart};
//!
//! let a = compute_chart(1990, 1, 1, 0)?;
//! let b = compute_chart(1992, 7, 15, 9)?;
//! let result = analyze(&a, &b);
//! assert!(result.score <= 100);
//! # Ok::<(), saju_scorer_rust::ChartError>(())
//! ```

pub mod chart;
pub mod config;
pub mod cycles;
pub mod error;
pub mod explanation;
pub mod metrics;
pub mod scorer;
pub mod utils;

// Re-export commonly used types
pub use chart::{compute_chart, BirthChart, Pillar};
pub use config::ScoringConfig;
pub use cycles::{Branch, Element, Stem};
pub use error::{ChartError, GroupError};
pub use explanation::{CompatibilityLevel, Detail, Details, RelationTag, Tone};
pub use metrics::{element_similarity, ElementPowerProfile};
pub use scorer::{
    analyze, CompatibilityResult, CompatibilityScorer, GroupAnalysis, GroupMember, PairScore,
    WuxingPower,
};
pub use utils::Language;
