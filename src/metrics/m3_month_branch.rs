//! METRIC 3: SOCIAL CHEMISTRY (MONTH BRANCH)
//!
//! The month branch stands for the social environment a person grew up in.
//! The same branch tables as M2 apply with smaller points: six harmony +3,
//! triad +2, clash / 원진 / 귀문 -2 each.
//!
//! The signed result is reported and tagged but never enters the composite.

use serde::{Deserialize, Serialize};

use crate::chart::Pillar;
use crate::config::SocialRules;
use crate::metrics::relations::{score_branches, BranchFinding};

/// Result of M3 calculation
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct M3Result {
    /// Signed sum of every month-branch rule
    pub score: i32,
    pub findings: Vec<BranchFinding>,
}

/// Calculate M3: month-branch social chemistry.
pub fn calculate_m3(a: &Pillar, b: &Pillar, rules: &SocialRules) -> M3Result {
    let findings = score_branches(a.branch, b.branch, &rules.branch_points());
    let score = findings.iter().map(|f| f.points).fold(0i32, i32::saturating_add);

    tracing::debug!(score, "M3 social chemistry");

    M3Result { score, findings }
}
