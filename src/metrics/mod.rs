//! Metric modules for pair scoring
//!
//! Step 1 (element tally) feeds M1; M2 and M3 read the pillars directly.

pub mod element_power;
pub mod m1_complementarity;
pub mod m2_day_pillar;
pub mod m3_month_branch;
pub mod relations;

// Re-export metric functions
pub use element_power::{element_similarity, ElementPowerProfile};
pub use m1_complementarity::{calculate_m1, ComplementarityFinding, M1Result, Person, Support};
pub use m2_day_pillar::{calculate_m2, DayPillarFinding, M2Result};
pub use m3_month_branch::{calculate_m3, M3Result};
pub use relations::{BranchFinding, BranchRelation};
