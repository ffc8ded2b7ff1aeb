use crate::cycles::ALL_ELEMENTS;
use crate::explanation::types::{Detail, Tone};
use crate::scorer::{CompatibilityResult, GroupAnalysis};
use crate::utils::Language;

/// Markdown formatter for analysis results
pub struct MarkdownFormatter;

struct Headings {
    score: &'static str,
    components: &'static str,
    component: &'static str,
    points: &'static str,
    complementarity: &'static str,
    day_pillar: &'static str,
    day_stem: &'static str,
    day_branch: &'static str,
    social: &'static str,
    elements: &'static str,
    element: &'static str,
    dominant: &'static str,
    tags: &'static str,
    none: &'static str,
    pairs: &'static str,
    average: &'static str,
    best: &'static str,
    worst: &'static str,
    member_a: &'static str,
    member_b: &'static str,
    level: &'static str,
}

const KOREAN: Headings = Headings {
    score: "궁합 점수",
    components: "세부 점수",
    component: "항목",
    points: "점수",
    complementarity: "오행 보완",
    day_pillar: "일주 궁합",
    day_stem: "일간 (정신적 궁합)",
    day_branch: "일지 (생활 궁합)",
    social: "월지 (사회적 궁합, 참고용)",
    elements: "오행 분포",
    element: "오행",
    dominant: "가장 강한 오행",
    tags: "관계",
    none: "해당 없음",
    pairs: "전체 조합",
    average: "평균 점수",
    best: "최고 조합",
    worst: "최저 조합",
    member_a: "구성원 A",
    member_b: "구성원 B",
    level: "등급",
};

const ENGLISH: Headings = Headings {
    score: "Compatibility Score",
    components: "Components",
    component: "Component",
    points: "Score",
    complementarity: "Element Complementarity",
    day_pillar: "Day Pillar",
    day_stem: "Day stem (mental)",
    day_branch: "Day branch (lifestyle)",
    social: "Month Branch (social, informational)",
    elements: "Element Power",
    element: "Element",
    dominant: "Dominant element",
    tags: "Relations",
    none: "No rules applied",
    pairs: "All Pairs",
    average: "Average score",
    best: "Best pair",
    worst: "Weakest pair",
    member_a: "Member A",
    member_b: "Member B",
    level: "Level",
};

impl MarkdownFormatter {
    fn headings(language: Language) -> &'static Headings {
        match language {
            Language::Korean => &KOREAN,
            Language::English => &ENGLISH,
        }
    }

    /// Format a pair result as markdown, in the language it was rendered in
    pub fn format(result: &CompatibilityResult) -> String {
        let language = result.language;
        let h = Self::headings(language);
        let mut md = String::with_capacity(2048);

        // Title with stars and label
        md.push_str(&format!("# {} {}\n\n", result.overall.stars, result.overall.label));
        md.push_str(&format!("**{}:** {}/100\n\n", h.score, result.score));
        md.push_str(&format!("{}\n\n", result.overall.message));

        md.push_str(&format!("## {}\n\n", h.components));
        md.push_str(&format!("| {} | {} |\n", h.component, h.points));
        md.push_str("|------|------|\n");
        md.push_str(&format!("| {} | {}/40 |\n", h.complementarity, result.complementarity_score));
        md.push_str(&format!("| {} | {}/20 |\n", h.day_pillar, result.day_pillar_score));
        md.push_str(&format!("| {} | {:+} |\n", h.day_stem, result.stem_score));
        md.push_str(&format!("| {} | {:+} |\n", h.day_branch, result.branch_score));
        md.push_str(&format!("| {} | {:+} |\n\n", h.social, result.social_score));

        // Element table
        md.push_str(&format!("## {}\n\n", h.elements));
        md.push_str(&format!(
            "| {} | {} | {} |\n",
            h.element,
            language.person(true),
            language.person(false)
        ));
        md.push_str("|------|------|------|\n");
        for element in ALL_ELEMENTS {
            md.push_str(&format!(
                "| {} | {} | {} |\n",
                element.label(language),
                result.wuxing_power.person_a.get(element),
                result.wuxing_power.person_b.get(element)
            ));
        }
        md.push_str(&format!(
            "| **{}** | {} | {} |\n",
            h.dominant,
            result.wuxing_power.person_a.dominant().label(language),
            result.wuxing_power.person_b.dominant().label(language)
        ));
        md.push('\n');

        Self::format_details(&mut md, h.complementarity, &result.details.complementarity, h.none);
        Self::format_details(&mut md, h.day_pillar, &result.details.day_pillar, h.none);
        Self::format_details(&mut md, h.social, &result.details.social, h.none);

        if !result.tags.is_empty() {
            let labels: Vec<&str> = result.tags.iter().map(|t| t.label(language)).collect();
            md.push_str(&format!("**{}:** {}\n", h.tags, labels.join(", ")));
        }

        md
    }

    fn format_details(md: &mut String, title: &str, details: &[Detail], none: &str) {
        md.push_str(&format!("## {}\n\n", title));
        if details.is_empty() {
            md.push_str(&format!("- {}\n\n", none));
            return;
        }
        for detail in details {
            let icon = match detail.tone {
                Tone::Positive => "✅",
                Tone::Negative => "⚠️",
                Tone::Neutral => "•",
            };
            md.push_str(&format!("- {} {}\n", icon, detail.text));
        }
        md.push('\n');
    }

    /// Format a group analysis as markdown
    pub fn format_group(group: &GroupAnalysis) -> String {
        let h = Self::headings(group.language);
        let mut md = String::with_capacity(1024);

        md.push_str(&format!("# {}\n\n", h.pairs));
        md.push_str(&format!("**{}:** {:.1}\n\n", h.average, group.average_score));

        let best = group.best();
        let worst = group.worst();
        md.push_str(&format!(
            "- {}: {} / {} ({})\n",
            h.best, best.name_a, best.name_b, best.result.score
        ));
        md.push_str(&format!(
            "- {}: {} / {} ({})\n\n",
            h.worst, worst.name_a, worst.name_b, worst.result.score
        ));

        md.push_str(&format!(
            "| {} | {} | {} | {} |\n",
            h.member_a, h.member_b, h.points, h.level
        ));
        md.push_str("|---|---|-------|---|\n");
        for pair in &group.pairs {
            md.push_str(&format!(
                "| {} | {} | {} | {} {} |\n",
                pair.name_a, pair.name_b, pair.result.score, pair.result.overall.stars, pair.result.overall.label
            ));
        }

        md
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::chart::{compute_chart, Pillar};
    use crate::config::ScoringConfig;
    use crate::cycles::{Branch, Stem};
    use crate::scorer::{analyze, CompatibilityScorer, GroupMember};

    #[test]
    fn test_format_basic() {
        let chart = compute_chart(1990, 1, 1, 0).unwrap();
        let scorer = CompatibilityScorer::new(ScoringConfig::with_language(Language::English));
        let md = MarkdownFormatter::format(&scorer.analyze(&chart, &chart));

        assert!(md.contains("# ★★☆☆☆ Normal"));
        assert!(md.contains("**Compatibility Score:** 54/100"));
        assert!(md.contains("| Day Pillar | 14/20 |"));
        assert!(md.contains("| Day stem (mental) | +0 |"));
        assert!(md.contains("| Day branch (lifestyle) | +4 |"));
        assert!(md.contains("| Earth | 8 | 8 |"));
        assert!(md.contains("| **Dominant element** | Earth | Earth |"));
        assert!(md.contains("- ✅ +4 Teamwork: day branches in triad (Myo/Myo)"));
    }

    #[test]
    fn test_format_korean_empty_section() {
        // 갑자 vs 병인: no day-pillar rule fires
        let mut a = compute_chart(1990, 1, 1, 0).unwrap();
        let mut b = a;
        a.day = Pillar::new(Stem::Gap, Branch::Ja);
        b.day = Pillar::new(Stem::Byeong, Branch::In);
        let md = MarkdownFormatter::format(&analyze(&a, &b));

        assert!(md.contains("## 일주 궁합\n\n- 해당 없음"));
        assert!(md.contains("| 일간 (정신적 궁합) | +0 |"));
    }

    #[test]
    fn test_format_follows_result_language() {
        let chart = compute_chart(1990, 1, 1, 0).unwrap();
        let english = CompatibilityScorer::new(ScoringConfig::with_language(Language::English));
        let md = MarkdownFormatter::format(&english.analyze(&chart, &chart));
        assert!(md.contains("## Day Pillar"));
        assert!(!md.contains("일주 궁합"));

        let members: Vec<_> = (0..2).map(|i| GroupMember::new(format!("p{i}"), chart)).collect();
        let group = english.analyze_group(&members).unwrap();
        assert!(MarkdownFormatter::format_group(&group).contains("| Member A | Member B | Score | Level |"));
    }

    #[test]
    fn test_format_group() {
        let members: Vec<_> = [(1990, 1, 1), (1992, 5, 17), (1988, 11, 3)]
            .iter()
            .enumerate()
            .map(|(i, &(y, m, d))| GroupMember::new(format!("p{i}"), compute_chart(y, m, d, 12).unwrap()))
            .collect();
        let group = CompatibilityScorer::default().analyze_group(&members).unwrap();
        let md = MarkdownFormatter::format_group(&group);

        assert!(md.starts_with("# 전체 조합"));
        assert!(md.contains("| 구성원 A | 구성원 B | 점수 | 등급 |"));
        assert!(!md.contains("| A | B | Score |"));
        assert!(md.contains("| p0 | p1 |"));
        assert!(md.contains("| p1 | p2 |"));
    }
}
