use crate::explanation::fragments::marked_detail;
use crate::explanation::types::{MetricFragment, RelationTag};
use crate::metrics::{BranchRelation, M3Result};
use crate::utils::Language;

/// What a month-branch relation means for working together.
fn social_meaning(relation: BranchRelation, language: Language) -> &'static str {
    match (relation, language) {
        (BranchRelation::SixHarmony, Language::Korean) => "함께 일할 때 호흡이 잘 맞아 시너지가 납니다",
        (BranchRelation::Triad, Language::Korean) => "조직 안에서 자연스럽게 잘 어울립니다",
        (BranchRelation::Clash, Language::Korean) => "사회적 역할에서 가끔 부딪힐 수 있습니다",
        (BranchRelation::Yuanjin, Language::Korean) => "사회적 관계에서 예민해지기 쉬워 말투 조절이 필요합니다",
        (BranchRelation::Guimun, Language::Korean) => "협업할 때 서로의 의도를 읽기 어려울 수 있습니다",
        (BranchRelation::SixHarmony, Language::English) => "teamwork comes easily and builds synergy",
        (BranchRelation::Triad, Language::English) => "you fit in naturally within the same group",
        (BranchRelation::Clash, Language::English) => "social roles may collide now and then",
        (BranchRelation::Yuanjin, Language::English) => "work relations can turn touchy, so mind the tone",
        (BranchRelation::Guimun, Language::English) => "intentions can be hard to read when collaborating",
    }
}

/// Generate detail lines for M3 (Social Chemistry, month branch)
pub fn generate_m3_fragment(m3: &M3Result, language: Language) -> MetricFragment {
    let mut fragment = MetricFragment::empty();

    for finding in &m3.findings {
        let meaning = social_meaning(finding.relation, language);
        let body = match language {
            Language::Korean => format!(
                "월지 {} ({}/{}): {}",
                finding.relation.label(language),
                finding.a.korean(),
                finding.b.korean(),
                meaning
            ),
            Language::English => format!(
                "month branches in {} ({}/{}): {}",
                finding.relation.label(language),
                finding.a.name(),
                finding.b.name(),
                meaning
            ),
        };
        let tag = if finding.relation.is_harmony() {
            RelationTag::SocialHarmony
        } else {
            RelationTag::SocialClash
        };
        fragment.push(marked_detail(finding.points, body, Some(tag), language));
    }

    fragment
}
