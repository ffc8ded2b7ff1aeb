//! Stem and branch relation tables.
//!
//! Pairs are unordered: every check matches (a, b) and (b, a).
//!
//! - 천간합 stem harmony: 갑기, 을경, 병신, 정임, 무계
//! - 천간충 stem clash: 갑경, 을신, 병임, 정계
//! - 육합 six harmony: 자축, 인해, 묘술, 진유, 사신, 오미
//! - 삼합 triads: 인오술, 사유축, 해묘미, 자진신
//! - 충 clash: 자오, 축미, 인신, 묘유, 진술, 사해
//! - 원진 yuanjin: 자묘, 축진, 인사, 오유, 신해, 미술
//! - 귀문 guimun: 자해, 축미, 인신, 묘유, 진술, 사오

use serde::{Deserialize, Serialize};

use crate::config::BranchPoints;
use crate::cycles::{Branch, Stem};
use crate::utils::Language;

const STEM_HARMONY_PAIRS: [(Stem, Stem); 5] = [
    (Stem::Gap, Stem::Gi),
    (Stem::Eul, Stem::Gyeong),
    (Stem::Byeong, Stem::Sin),
    (Stem::Jeong, Stem::Im),
    (Stem::Mu, Stem::Gye),
];

const STEM_CLASH_PAIRS: [(Stem, Stem); 4] = [
    (Stem::Gap, Stem::Gyeong),
    (Stem::Eul, Stem::Sin),
    (Stem::Byeong, Stem::Im),
    (Stem::Jeong, Stem::Gye),
];

const SIX_HARMONY_PAIRS: [(Branch, Branch); 6] = [
    (Branch::Ja, Branch::Chuk),
    (Branch::In, Branch::Hae),
    (Branch::Myo, Branch::Sul),
    (Branch::Jin, Branch::Yu),
    (Branch::Sa, Branch::Sin),
    (Branch::O, Branch::Mi),
];

const TRIADS: [[Branch; 3]; 4] = [
    [Branch::In, Branch::O, Branch::Sul],
    [Branch::Sa, Branch::Yu, Branch::Chuk],
    [Branch::Hae, Branch::Myo, Branch::Mi],
    [Branch::Ja, Branch::Jin, Branch::Sin],
];

const CLASH_PAIRS: [(Branch, Branch); 6] = [
    (Branch::Ja, Branch::O),
    (Branch::Chuk, Branch::Mi),
    (Branch::In, Branch::Sin),
    (Branch::Myo, Branch::Yu),
    (Branch::Jin, Branch::Sul),
    (Branch::Sa, Branch::Hae),
];

const YUANJIN_PAIRS: [(Branch, Branch); 6] = [
    (Branch::Ja, Branch::Myo),
    (Branch::Chuk, Branch::Jin),
    (Branch::In, Branch::Sa),
    (Branch::O, Branch::Yu),
    (Branch::Sin, Branch::Hae),
    (Branch::Mi, Branch::Sul),
];

const GUIMUN_PAIRS: [(Branch, Branch); 6] = [
    (Branch::Ja, Branch::Hae),
    (Branch::Chuk, Branch::Mi),
    (Branch::In, Branch::Sin),
    (Branch::Myo, Branch::Yu),
    (Branch::Jin, Branch::Sul),
    (Branch::Sa, Branch::O),
];

fn contains_pair<T: PartialEq + Copy>(pairs: &[(T, T)], a: T, b: T) -> bool {
    pairs
        .iter()
        .any(|&(x, y)| (x == a && y == b) || (x == b && y == a))
}

/// 천간합
pub fn is_stem_harmony(a: Stem, b: Stem) -> bool {
    contains_pair(&STEM_HARMONY_PAIRS, a, b)
}

/// 천간충
pub fn is_stem_clash(a: Stem, b: Stem) -> bool {
    contains_pair(&STEM_CLASH_PAIRS, a, b)
}

/// 육합
pub fn is_six_harmony(a: Branch, b: Branch) -> bool {
    contains_pair(&SIX_HARMONY_PAIRS, a, b)
}

/// 삼합: both branches belong to the same triad. Identical branches count.
pub fn is_triad(a: Branch, b: Branch) -> bool {
    TRIADS
        .iter()
        .any(|group| group.contains(&a) && group.contains(&b))
}

/// 지지충
pub fn is_branch_clash(a: Branch, b: Branch) -> bool {
    contains_pair(&CLASH_PAIRS, a, b)
}

/// 원진
pub fn is_yuanjin(a: Branch, b: Branch) -> bool {
    contains_pair(&YUANJIN_PAIRS, a, b)
}

/// 귀문
pub fn is_guimun(a: Branch, b: Branch) -> bool {
    contains_pair(&GUIMUN_PAIRS, a, b)
}

/// A branch relation between two people.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum BranchRelation {
    SixHarmony,
    Triad,
    Clash,
    Yuanjin,
    Guimun,
}

/// Evaluation order of branch relations; also the order of detail lines.
pub const BRANCH_RELATIONS: [BranchRelation; 5] = [
    BranchRelation::SixHarmony,
    BranchRelation::Triad,
    BranchRelation::Clash,
    BranchRelation::Yuanjin,
    BranchRelation::Guimun,
];

impl BranchRelation {
    pub fn holds(self, a: Branch, b: Branch) -> bool {
        match self {
            Self::SixHarmony => is_six_harmony(a, b),
            Self::Triad => is_triad(a, b),
            Self::Clash => is_branch_clash(a, b),
            Self::Yuanjin => is_yuanjin(a, b),
            Self::Guimun => is_guimun(a, b),
        }
    }

    pub fn label(self, language: Language) -> &'static str {
        match (self, language) {
            (Self::SixHarmony, Language::Korean) => "육합",
            (Self::Triad, Language::Korean) => "삼합",
            (Self::Clash, Language::Korean) => "충",
            (Self::Yuanjin, Language::Korean) => "원진",
            (Self::Guimun, Language::Korean) => "귀문",
            (Self::SixHarmony, Language::English) => "six harmony",
            (Self::Triad, Language::English) => "triad",
            (Self::Clash, Language::English) => "clash",
            (Self::Yuanjin, Language::English) => "yuanjin",
            (Self::Guimun, Language::English) => "guimun",
        }
    }

    pub fn is_harmony(self) -> bool {
        matches!(self, Self::SixHarmony | Self::Triad)
    }

    /// Signed points for this relation.
    pub fn points(self, points: &BranchPoints) -> i32 {
        match self {
            Self::SixHarmony => points.six_harmony,
            Self::Triad => points.triad,
            Self::Clash => points.clash.saturating_neg(),
            Self::Yuanjin => points.yuanjin.saturating_neg(),
            Self::Guimun => points.guimun.saturating_neg(),
        }
    }
}

/// Every relation that holds between two branches, in evaluation order.
pub fn branch_relations(a: Branch, b: Branch) -> Vec<BranchRelation> {
    BRANCH_RELATIONS
        .iter()
        .copied()
        .filter(|r| r.holds(a, b))
        .collect()
}

/// A branch relation that fired, with its signed points.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct BranchFinding {
    pub relation: BranchRelation,
    pub a: Branch,
    pub b: Branch,
    pub points: i32,
}

/// Score every branch relation between `a` and `b`.
pub fn score_branches(a: Branch, b: Branch, points: &BranchPoints) -> Vec<BranchFinding> {
    branch_relations(a, b)
        .into_iter()
        .map(|relation| BranchFinding {
            relation,
            a,
            b,
            points: relation.points(points),
        })
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::cycles::{ALL_BRANCHES, ALL_STEMS};

    #[test]
    fn relations_are_symmetric() {
        for &a in &ALL_STEMS {
            for &b in &ALL_STEMS {
                assert_eq!(is_stem_harmony(a, b), is_stem_harmony(b, a));
                assert_eq!(is_stem_clash(a, b), is_stem_clash(b, a));
            }
        }
        for &a in &ALL_BRANCHES {
            for &b in &ALL_BRANCHES {
                assert_eq!(branch_relations(a, b), branch_relations(b, a));
            }
        }
    }

    #[test]
    fn every_stem_has_exactly_one_harmony_partner() {
        for &a in &ALL_STEMS {
            let partners = ALL_STEMS.iter().filter(|&&b| is_stem_harmony(a, b)).count();
            assert_eq!(partners, 1, "{:?}", a);
            // partner sits five steps away
            assert!(is_stem_harmony(a, Stem::from_cycle(a.index() as i64 + 5)));
        }
    }

    #[test]
    fn identical_pairs() {
        for &s in &ALL_STEMS {
            assert!(!is_stem_harmony(s, s));
            assert!(!is_stem_clash(s, s));
        }
        for &b in &ALL_BRANCHES {
            assert_eq!(branch_relations(b, b), vec![BranchRelation::Triad]);
        }
    }

    #[test]
    fn six_harmony_and_triad_never_overlap() {
        for &a in &ALL_BRANCHES {
            for &b in &ALL_BRANCHES {
                assert!(!(is_six_harmony(a, b) && is_triad(a, b)));
            }
        }
    }

    #[test]
    fn clash_and_guimun_overlap_on_four_pairs() {
        let rels = branch_relations(Branch::Chuk, Branch::Mi);
        assert_eq!(rels, vec![BranchRelation::Clash, BranchRelation::Guimun]);
        let rels = branch_relations(Branch::Ja, Branch::O);
        assert_eq!(rels, vec![BranchRelation::Clash]);
    }

    #[test]
    fn known_pairs() {
        assert!(is_stem_harmony(Stem::Jeong, Stem::Im));
        assert!(is_stem_clash(Stem::Gye, Stem::Jeong));
        assert!(is_six_harmony(Branch::Hae, Branch::In));
        assert!(is_triad(Branch::Sul, Branch::O));
        assert!(is_yuanjin(Branch::Sul, Branch::Mi));
        assert!(is_guimun(Branch::O, Branch::Sa));
        assert!(!is_branch_clash(Branch::Ja, Branch::Chuk));
    }

    #[test]
    fn signed_points() {
        let points = BranchPoints { six_harmony: 5, triad: 4, clash: 3, yuanjin: 3, guimun: 3 };
        assert_eq!(BranchRelation::SixHarmony.points(&points), 5);
        assert_eq!(BranchRelation::Guimun.points(&points), -3);
        assert!(BranchRelation::Triad.is_harmony());
        assert!(!BranchRelation::Clash.is_harmony());
    }

    #[test]
    fn score_branches_sums_overlapping_rules() {
        let points = BranchPoints { six_harmony: 3, triad: 2, clash: 2, yuanjin: 2, guimun: 2 };
        let findings = score_branches(Branch::Myo, Branch::Yu, &points);
        let total: i32 = findings.iter().map(|f| f.points).sum();
        assert_eq!(findings.len(), 2);
        assert_eq!(total, -4);
        assert!(score_branches(Branch::Ja, Branch::Myo, &points)
            .iter()
            .any(|f| f.relation == BranchRelation::Yuanjin));
    }
}
