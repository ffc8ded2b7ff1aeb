use serde::{Deserialize, Serialize};

use crate::utils::Language;

/// Outcome class of a detail line
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Tone {
    Positive,
    Negative,
    Neutral,
}

impl Tone {
    pub fn from_points(points: i32) -> Self {
        match points {
            p if p > 0 => Tone::Positive,
            p if p < 0 => Tone::Negative,
            _ => Tone::Neutral,
        }
    }
}

/// Relation labels collected across all components
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum RelationTag {
    SameStem,
    StemHarmony,
    StemClash,
    BranchHarmony,
    BranchClash,
    Complementary,
    SocialHarmony,
    SocialClash,
    SimilarElements,
    SameStrongElement,
}

impl RelationTag {
    pub fn label(self, language: Language) -> &'static str {
        match (self, language) {
            (Self::SameStem, Language::Korean) => "비견",
            (Self::SameStem, Language::English) => "Same day stem",
            (Self::StemHarmony, Language::Korean) => "천간합",
            (Self::StemHarmony, Language::English) => "Stem harmony",
            (Self::StemClash, Language::Korean) => "천간충",
            (Self::StemClash, Language::English) => "Stem clash",
            (Self::BranchHarmony, Language::Korean) => "지지합",
            (Self::BranchHarmony, Language::English) => "Branch harmony",
            (Self::BranchClash, Language::Korean) => "지지 갈등",
            (Self::BranchClash, Language::English) => "Branch friction",
            (Self::Complementary, Language::Korean) => "오행 보완",
            (Self::Complementary, Language::English) => "Complementary elements",
            (Self::SocialHarmony, Language::Korean) => "사회적 조화",
            (Self::SocialHarmony, Language::English) => "Social harmony",
            (Self::SocialClash, Language::Korean) => "사회적 갈등",
            (Self::SocialClash, Language::English) => "Social friction",
            (Self::SimilarElements, Language::Korean) => "비슷한 오행",
            (Self::SimilarElements, Language::English) => "Similar elements",
            (Self::SameStrongElement, Language::Korean) => "같은 강한 기운",
            (Self::SameStrongElement, Language::English) => "Shared strong element",
        }
    }
}

/// One rendered rule outcome
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Detail {
    pub text: String,
    pub tone: Tone,
    /// Signed points this rule contributed (0 for informational lines)
    pub points: i32,
    pub tag: Option<RelationTag>,
}

/// Detail lines per component, each in rule order
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct Details {
    pub complementarity: Vec<Detail>,
    pub day_pillar: Vec<Detail>,
    /// Month-branch lines; informational
    pub social: Vec<Detail>,
}

/// Coarse band of the composite score
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
pub enum CompatibilityLevel {
    Adjustment,
    Caution,
    Normal,
    Good,
    Excellent,
}

impl CompatibilityLevel {
    pub fn from_score(score: u32) -> Self {
        match score {
            s if s >= 75 => CompatibilityLevel::Excellent,
            s if s >= 55 => CompatibilityLevel::Good,
            s if s >= 40 => CompatibilityLevel::Normal,
            s if s >= 25 => CompatibilityLevel::Caution,
            _ => CompatibilityLevel::Adjustment,
        }
    }

    pub fn label(self, language: Language) -> &'static str {
        match (self, language) {
            (Self::Excellent, Language::Korean) => "최상",
            (Self::Good, Language::Korean) => "좋음",
            (Self::Normal, Language::Korean) => "보통",
            (Self::Caution, Language::Korean) => "주의",
            (Self::Adjustment, Language::Korean) => "조율",
            (Self::Excellent, Language::English) => "Excellent",
            (Self::Good, Language::English) => "Good",
            (Self::Normal, Language::English) => "Normal",
            (Self::Caution, Language::English) => "Caution",
            (Self::Adjustment, Language::English) => "Needs adjustment",
        }
    }
}

/// Overall score interpretation with stars
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct OverallExplanation {
    pub score: u32,
    pub stars: String, // "★★★★☆"
    pub level: CompatibilityLevel,
    pub label: String,
    pub message: String,
}

/// Detail lines produced from a single metric
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct MetricFragment {
    pub details: Vec<Detail>,
}

impl MetricFragment {
    /// Create an empty fragment
    pub fn empty() -> Self {
        Self::default()
    }

    pub fn push(&mut self, detail: Detail) {
        self.details.push(detail);
    }

    /// Tags of every line, in line order
    pub fn tags(&self) -> impl Iterator<Item = RelationTag> + '_ {
        self.details.iter().filter_map(|d| d.tag)
    }

    pub fn into_details(self) -> Vec<Detail> {
        self.details
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn level_thresholds() {
        assert_eq!(CompatibilityLevel::from_score(100), CompatibilityLevel::Excellent);
        assert_eq!(CompatibilityLevel::from_score(75), CompatibilityLevel::Excellent);
        assert_eq!(CompatibilityLevel::from_score(74), CompatibilityLevel::Good);
        assert_eq!(CompatibilityLevel::from_score(55), CompatibilityLevel::Good);
        assert_eq!(CompatibilityLevel::from_score(40), CompatibilityLevel::Normal);
        assert_eq!(CompatibilityLevel::from_score(25), CompatibilityLevel::Caution);
        assert_eq!(CompatibilityLevel::from_score(24), CompatibilityLevel::Adjustment);
        assert!(CompatibilityLevel::Excellent > CompatibilityLevel::Caution);
    }

    #[test]
    fn tone_from_points() {
        assert_eq!(Tone::from_points(4), Tone::Positive);
        assert_eq!(Tone::from_points(-3), Tone::Negative);
        assert_eq!(Tone::from_points(0), Tone::Neutral);
    }

    #[test]
    fn korean_level_labels() {
        assert_eq!(CompatibilityLevel::Good.label(Language::Korean), "좋음");
        assert_eq!(CompatibilityLevel::Adjustment.label(Language::Korean), "조율");
    }
}
