use crate::explanation::fragments::marked_detail;
use crate::explanation::types::{MetricFragment, RelationTag};
use crate::metrics::{BranchRelation, DayPillarFinding, M2Result};
use crate::utils::Language;

/// What a day-branch relation means for daily life together.
fn lifestyle_meaning(relation: BranchRelation, language: Language) -> &'static str {
    match (relation, language) {
        (BranchRelation::SixHarmony, Language::Korean) => "성격이 잘 맞아 함께 있으면 편안합니다",
        (BranchRelation::Triad, Language::Korean) => "생활 호흡이 자연스럽게 맞습니다",
        (BranchRelation::Clash, Language::Korean) => {
            "성격 차이로 마찰이 생길 수 있지만 적당한 거리를 두면 괜찮습니다"
        }
        (BranchRelation::Yuanjin, Language::Korean) => {
            "표현 방식이 달라 작은 말도 예민하게 느껴질 수 있습니다"
        }
        (BranchRelation::Guimun, Language::Korean) => "서로 마음을 읽기 어려워 오해가 생길 수 있습니다",
        (BranchRelation::SixHarmony, Language::English) => "temperaments fit and time together feels easy",
        (BranchRelation::Triad, Language::English) => "daily rhythms fall into step naturally",
        (BranchRelation::Clash, Language::English) => {
            "different temperaments can rub, though some space helps"
        }
        (BranchRelation::Yuanjin, Language::English) => {
            "different ways of speaking can make small words feel sharp"
        }
        (BranchRelation::Guimun, Language::English) => "reading each other is hard and misunderstandings arise",
    }
}

/// Generate detail lines for M2 (Day-Pillar Matching)
///
/// The day stem stands for the self, the day branch for the partner palace.
/// Stem lines come first, then branch lines in rule order.
pub fn generate_m2_fragment(m2: &M2Result, language: Language) -> MetricFragment {
    let mut fragment = MetricFragment::empty();

    for finding in &m2.findings {
        let (body, tag) = match finding {
            DayPillarFinding::SameStem { stem } => {
                let s = stem.label(language);
                let body = match language {
                    Language::Korean => format!("일간 동일 ({}/{}): 비견 관계로 서로를 잘 이해합니다", s, s),
                    Language::English => {
                        format!("Same day stem ({}/{}): peers who understand each other", s, s)
                    }
                };
                (body, RelationTag::SameStem)
            }
            DayPillarFinding::StemHarmony { a, b, .. } => {
                let body = match language {
                    Language::Korean => format!(
                        "일간 천간합 ({}/{}): 가치관이 조화를 이뤄 말 한마디로 통하는 사이입니다",
                        a.korean(),
                        b.korean()
                    ),
                    Language::English => format!(
                        "day stems combine ({}/{}): shared values make you understand each other quickly",
                        a.name(),
                        b.name()
                    ),
                };
                (body, RelationTag::StemHarmony)
            }
            DayPillarFinding::StemClash { a, b, .. } => {
                let body = match language {
                    Language::Korean => format!(
                        "일간 천간충 ({}/{}): 생각하는 방식이 달라 가끔 의견이 엇갈릴 수 있습니다",
                        a.korean(),
                        b.korean()
                    ),
                    Language::English => format!(
                        "day stems clash ({}/{}): different ways of thinking can split opinions",
                        a.name(),
                        b.name()
                    ),
                };
                (body, RelationTag::StemClash)
            }
            DayPillarFinding::Branch(branch) => {
                let meaning = lifestyle_meaning(branch.relation, language);
                let body = match language {
                    Language::Korean => format!(
                        "일지 {} ({}/{}): {}",
                        branch.relation.label(language),
                        branch.a.korean(),
                        branch.b.korean(),
                        meaning
                    ),
                    Language::English => format!(
                        "day branches in {} ({}/{}): {}",
                        branch.relation.label(language),
                        branch.a.name(),
                        branch.b.name(),
                        meaning
                    ),
                };
                let tag = if branch.relation.is_harmony() {
                    RelationTag::BranchHarmony
                } else {
                    RelationTag::BranchClash
                };
                (body, tag)
            }
        };
        fragment.push(marked_detail(finding.points(), body, Some(tag), language));
    }

    fragment
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::chart::Pillar;
    use crate::config::DayPillarRules;
    use crate::cycles::{Branch, Stem};
    use crate::explanation::types::Tone;
    use crate::metrics::calculate_m2;

    #[test]
    fn harmony_lines_in_both_languages() {
        let m2 = calculate_m2(
            &Pillar::new(Stem::Gap, Branch::Ja),
            &Pillar::new(Stem::Gi, Branch::Chuk),
            10,
            &DayPillarRules::default(),
        );
        let ko = generate_m2_fragment(&m2, Language::Korean);
        assert_eq!(
            ko.details[0].text,
            "+6 팀워크: 일간 천간합 (갑/기): 가치관이 조화를 이뤄 말 한마디로 통하는 사이입니다"
        );
        assert_eq!(
            ko.details[1].text,
            "+5 팀워크: 일지 육합 (자/축): 성격이 잘 맞아 함께 있으면 편안합니다"
        );

        let en = generate_m2_fragment(&m2, Language::English);
        assert_eq!(
            en.details[1].text,
            "+5 Teamwork: day branches in six harmony (Ja/Chuk): temperaments fit and time together feels easy"
        );
    }

    #[test]
    fn clash_lines_are_negative() {
        let m2 = calculate_m2(
            &Pillar::new(Stem::Jeong, Branch::Ja),
            &Pillar::new(Stem::Gye, Branch::O),
            10,
            &DayPillarRules::default(),
        );
        let fragment = generate_m2_fragment(&m2, Language::Korean);
        assert!(fragment.details[0].text.starts_with("-3 주의: 일간 천간충 (정/계): "));
        assert!(fragment.details[1].text.starts_with("-3 주의: 일지 충 (자/오): "));
        assert!(fragment.details.iter().all(|d| d.tone == Tone::Negative));
    }

    #[test]
    fn every_relation_has_a_meaning_in_both_languages() {
        use crate::metrics::relations::BRANCH_RELATIONS;
        for relation in BRANCH_RELATIONS {
            for language in [Language::Korean, Language::English] {
                let meaning = lifestyle_meaning(relation, language);
                assert!(!meaning.is_empty());
                assert!(!meaning.contains('-'));
            }
        }
    }

    #[test]
    fn same_stem_is_neutral() {
        let p = Pillar::new(Stem::Jeong, Branch::Myo);
        let m2 = calculate_m2(&p, &p, 10, &DayPillarRules::default());
        let fragment = generate_m2_fragment(&m2, Language::English);
        assert_eq!(fragment.details[0].tone, Tone::Neutral);
        assert!(!fragment.details[0].text.contains("Teamwork"));
        assert!(!fragment.details[0].text.contains("Caution"));
        assert_eq!(
            fragment.details[1].text,
            "+4 Teamwork: day branches in triad (Myo/Myo): daily rhythms fall into step naturally"
        );
    }
}
