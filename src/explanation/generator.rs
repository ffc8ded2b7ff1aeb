use crate::explanation::types::{CompatibilityLevel, OverallExplanation};
use crate::utils::Language;

/// Main explanation generator
pub struct ExplanationGenerator;

impl ExplanationGenerator {
    /// Star rating, level label and a one-line message for a composite score.
    pub fn overall(score: u32, language: Language) -> OverallExplanation {
        let stars = match score {
            s if s >= 85 => "★★★★★",
            s if s >= 70 => "★★★★☆",
            s if s >= 55 => "★★★☆☆",
            s if s >= 40 => "★★☆☆☆",
            s if s >= 25 => "★☆☆☆☆",
            _ => "☆☆☆☆☆",
        };
        let level = CompatibilityLevel::from_score(score);

        OverallExplanation {
            score,
            stars: stars.to_string(),
            level,
            label: level.label(language).to_string(),
            message: Self::level_message(level, score, language),
        }
    }

    fn level_message(level: CompatibilityLevel, score: u32, language: Language) -> String {
        let summary = match (level, language) {
            (CompatibilityLevel::Excellent, Language::Korean) => "서로의 기운이 잘 맞아 함께할 때 힘이 커집니다",
            (CompatibilityLevel::Good, Language::Korean) => "대체로 잘 어울리는 조합입니다",
            (CompatibilityLevel::Normal, Language::Korean) => "무난한 조합이며 서로의 차이를 이해하면 좋습니다",
            (CompatibilityLevel::Caution, Language::Korean) => "부딪히는 지점이 있어 배려가 필요합니다",
            (CompatibilityLevel::Adjustment, Language::Korean) => "역할과 기대를 충분히 조율해야 합니다",
            (CompatibilityLevel::Excellent, Language::English) => "Your energies fit well and reinforce each other",
            (CompatibilityLevel::Good, Language::English) => "A generally well matched pair",
            (CompatibilityLevel::Normal, Language::English) => "A workable pair that benefits from understanding differences",
            (CompatibilityLevel::Caution, Language::English) => "Some friction points call for extra care",
            (CompatibilityLevel::Adjustment, Language::English) => "Roles and expectations need careful alignment",
        };
        match language {
            Language::Korean => format!("궁합 점수 {}/100: {}", score, summary),
            Language::English => format!("Compatibility score {}/100: {}", score, summary),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn stars_and_labels() {
        let overall = ExplanationGenerator::overall(90, Language::English);
        assert_eq!(overall.stars, "★★★★★");
        assert_eq!(overall.label, "Excellent");

        let overall = ExplanationGenerator::overall(54, Language::Korean);
        assert_eq!(overall.stars, "★★☆☆☆");
        assert_eq!(overall.level, CompatibilityLevel::Normal);
        assert_eq!(overall.label, "보통");
        assert!(overall.message.starts_with("궁합 점수 54/100"));
    }

    #[test]
    fn zero_score() {
        let overall = ExplanationGenerator::overall(0, Language::English);
        assert_eq!(overall.stars, "☆☆☆☆☆");
        assert_eq!(overall.level, CompatibilityLevel::Adjustment);
    }
}
