//! METRIC 2: DAY-PILLAR MATCHING
//!
//! Compares the two day pillars (일주). The day stem is the self and the day
//! branch the spouse palace, so this is the most personal of the checks.
//!
//! Starts at the neutral midpoint (10) and applies every rule that holds:
//!
//! - 천간합 stem harmony: +6
//! - 천간충 stem clash: -3
//! - 육합 six harmony: +5, 삼합 triad: +4
//! - 충 clash, 원진, 귀문: -3 each
//!
//! Identical stems (비견) are recorded without points. The sum is clamped to
//! 0..=20.
//!
//! The stem rules (mental chemistry) and the branch rules (lifestyle
//! chemistry) are also reported as separate signed sub-scores.

use serde::{Deserialize, Serialize};

use crate::chart::Pillar;
use crate::config::{DayPillarRules, DAY_PILLAR_MAX};
use crate::cycles::Stem;
use crate::metrics::relations::{is_stem_clash, is_stem_harmony, score_branches, BranchFinding};

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub enum DayPillarFinding {
    SameStem { stem: Stem },
    StemHarmony { a: Stem, b: Stem, points: i32 },
    StemClash { a: Stem, b: Stem, points: i32 },
    Branch(BranchFinding),
}

impl DayPillarFinding {
    pub fn points(&self) -> i32 {
        match self {
            Self::SameStem { .. } => 0,
            Self::StemHarmony { points, .. } | Self::StemClash { points, .. } => *points,
            Self::Branch(finding) => finding.points,
        }
    }

    /// True for the day-stem rules, false for the day-branch rules.
    pub fn is_stem(&self) -> bool {
        !matches!(self, Self::Branch(_))
    }
}

/// Result of M2 calculation
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct M2Result {
    /// Clamped score (0-20)
    pub score: u32,
    /// Midpoint plus every rule, before clamping
    pub raw: i32,
    /// Signed sum of the day-stem rules
    pub stem_score: i32,
    /// Signed sum of the day-branch rules
    pub branch_score: i32,
    /// Stem findings first, then branch findings in evaluation order
    pub findings: Vec<DayPillarFinding>,
}

/// Calculate M2: day-pillar matching.
pub fn calculate_m2(a: &Pillar, b: &Pillar, neutral_midpoint: u32, rules: &DayPillarRules) -> M2Result {
    let mut findings = Vec::new();

    if a.stem == b.stem {
        findings.push(DayPillarFinding::SameStem { stem: a.stem });
    }
    if is_stem_harmony(a.stem, b.stem) {
        findings.push(DayPillarFinding::StemHarmony {
            a: a.stem,
            b: b.stem,
            points: rules.stem_harmony,
        });
    }
    if is_stem_clash(a.stem, b.stem) {
        findings.push(DayPillarFinding::StemClash {
            a: a.stem,
            b: b.stem,
            points: rules.stem_clash.saturating_neg(),
        });
    }

    findings.extend(
        score_branches(a.branch, b.branch, &rules.branch_points())
            .into_iter()
            .map(DayPillarFinding::Branch),
    );

    for finding in &findings {
        tracing::trace!(?finding, "day pillar rule");
    }

    let sum = |stem: bool| {
        findings
            .iter()
            .filter(|f| f.is_stem() == stem)
            .map(DayPillarFinding::points)
            .fold(0i32, i32::saturating_add)
    };
    let stem_score = sum(true);
    let branch_score = sum(false);

    let midpoint = i32::try_from(neutral_midpoint).unwrap_or(i32::MAX);
    let raw = midpoint.saturating_add(stem_score).saturating_add(branch_score);
    let score = raw.clamp(0, DAY_PILLAR_MAX as i32) as u32;

    tracing::debug!(score, raw, stem_score, branch_score, "M2 day pillar");

    M2Result { score, raw, stem_score, branch_score, findings }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::cycles::Branch;
    use crate::metrics::relations::BranchRelation;

    fn m2(a: Pillar, b: Pillar) -> M2Result {
        calculate_m2(&a, &b, 10, &DayPillarRules::default())
    }

    #[test]
    fn identical_day_pillar() {
        let p = Pillar::new(Stem::Jeong, Branch::Myo);
        let result = m2(p, p);
        assert_eq!(result.score, 14);
        assert_eq!(result.findings.len(), 2);
        assert_eq!(result.findings[0], DayPillarFinding::SameStem { stem: Stem::Jeong });
        assert!(matches!(
            result.findings[1],
            DayPillarFinding::Branch(BranchFinding { relation: BranchRelation::Triad, points: 4, .. })
        ));
    }

    #[test]
    fn harmony_on_both_clamps_to_max() {
        // 갑/기 stem harmony (+6), 자/축 six harmony (+5): 21 -> 20
        let result = m2(Pillar::new(Stem::Gap, Branch::Ja), Pillar::new(Stem::Gi, Branch::Chuk));
        assert_eq!(result.raw, 21);
        assert_eq!(result.score, DAY_PILLAR_MAX);
        assert_eq!(result.stem_score, 6);
        assert_eq!(result.branch_score, 5);
    }

    #[test]
    fn clashes_subtract() {
        // 갑/경 stem clash (-3), 묘/유 clash and guimun (-6)
        let result = m2(Pillar::new(Stem::Gap, Branch::Myo), Pillar::new(Stem::Gyeong, Branch::Yu));
        assert_eq!(result.raw, 1);
        assert_eq!(result.score, 1);
        assert_eq!(result.findings.len(), 3);
        assert_eq!(result.stem_score, -3);
        assert_eq!(result.branch_score, -6);
    }

    #[test]
    fn same_stem_adds_nothing_to_stem_score() {
        let p = Pillar::new(Stem::Jeong, Branch::Myo);
        let result = m2(p, p);
        assert_eq!(result.stem_score, 0);
        assert_eq!(result.branch_score, 4);
    }

    #[test]
    fn oversized_points_saturate() {
        let rules = DayPillarRules { stem_harmony: i32::MAX, six_harmony: i32::MAX, ..Default::default() };
        let result = calculate_m2(
            &Pillar::new(Stem::Gap, Branch::Ja),
            &Pillar::new(Stem::Gi, Branch::Chuk),
            u32::MAX,
            &rules,
        );
        assert_eq!(result.raw, i32::MAX);
        assert_eq!(result.score, DAY_PILLAR_MAX);
    }

    #[test]
    fn unrelated_pair_stays_at_midpoint() {
        // 갑/병: no stem relation; 자/인: no branch relation
        let result = m2(Pillar::new(Stem::Gap, Branch::Ja), Pillar::new(Stem::Byeong, Branch::In));
        assert!(result.findings.is_empty());
        assert_eq!(result.score, 10);
    }

    #[test]
    fn swap_keeps_score() {
        let a = Pillar::new(Stem::Eul, Branch::Sa);
        let b = Pillar::new(Stem::Gyeong, Branch::Hae);
        assert_eq!(m2(a, b).score, m2(b, a).score);
    }

    #[test]
    fn negative_raw_clamps_to_zero() {
        let rules = DayPillarRules { stem_clash: 15, ..Default::default() };
        let result = calculate_m2(
            &Pillar::new(Stem::Gap, Branch::Ja),
            &Pillar::new(Stem::Gyeong, Branch::O),
            10,
            &rules,
        );
        assert_eq!(result.raw, -8);
        assert_eq!(result.score, 0);
    }
}
