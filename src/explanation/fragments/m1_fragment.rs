use crate::explanation::fragments::marked_detail;
use crate::explanation::types::{MetricFragment, RelationTag};
use crate::metrics::{ComplementarityFinding, M1Result, Support};
use crate::utils::Language;

/// Generate detail lines for M1 (Element Complementarity)
///
/// One line per element that fired, in element order. Shared strengths are
/// informational and carry no sign.
pub fn generate_m1_fragment(m1: &M1Result, language: Language) -> MetricFragment {
    let mut fragment = MetricFragment::empty();

    for finding in &m1.findings {
        let detail = match *finding {
            ComplementarityFinding::Fills {
                element,
                supporter,
                support,
                supporter_power,
                deficient_power,
                points,
            } => {
                let giver = supporter.label(language);
                let taker = supporter.other().label(language);
                let name = element.label(language);
                let body = match (language, support) {
                    (Language::Korean, Support::Surplus) => format!(
                        "{}의 넉넉한 {} 기운({})이 {}에게 부족한 {} 기운({})을 채워줍니다",
                        giver, name, supporter_power, taker, name, deficient_power
                    ),
                    (Language::Korean, Support::Partial) => format!(
                        "{}의 {} 기운({})이 {}에게 부족한 {} 기운({})을 일부 보완합니다",
                        giver, name, supporter_power, taker, name, deficient_power
                    ),
                    (Language::English, Support::Surplus) => format!(
                        "{}'s {} surplus ({}) fills {}'s {} deficiency ({})",
                        giver, name, supporter_power, taker, name, deficient_power
                    ),
                    (Language::English, Support::Partial) => format!(
                        "{}'s {} ({}) partly offsets {}'s {} deficiency ({})",
                        giver, name, supporter_power, taker, name, deficient_power
                    ),
                };
                marked_detail(points as i32, body, Some(RelationTag::Complementary), language)
            }
            ComplementarityFinding::SharedStrength { element, power_a, power_b } => {
                let name = element.label(language);
                let body = match language {
                    Language::Korean => {
                        format!("A/B 모두 {} 기운이 강합니다 ({}/{})", name, power_a, power_b)
                    }
                    Language::English => {
                        format!("Both strong in {} ({}/{})", name, power_a, power_b)
                    }
                };
                marked_detail(0, body, Some(RelationTag::SameStrongElement), language)
            }
        };
        fragment.push(detail);
    }

    fragment
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::cycles::Element;
    use crate::explanation::types::Tone;
    use crate::metrics::Person;

    fn sample() -> M1Result {
        M1Result {
            score: 8,
            raw: 8,
            findings: vec![
                ComplementarityFinding::Fills {
                    element: Element::Metal,
                    supporter: Person::B,
                    support: Support::Surplus,
                    supporter_power: 10,
                    deficient_power: 0,
                    points: 8,
                },
                ComplementarityFinding::SharedStrength { element: Element::Earth, power_a: 8, power_b: 9 },
            ],
        }
    }

    #[test]
    fn korean_lines() {
        let fragment = generate_m1_fragment(&sample(), Language::Korean);
        assert_eq!(
            fragment.details[0].text,
            "+8 팀워크: B의 넉넉한 금 기운(10)이 A에게 부족한 금 기운(0)을 채워줍니다"
        );
        assert_eq!(fragment.details[1].text, "A/B 모두 토 기운이 강합니다 (8/9)");
        assert_eq!(fragment.details[1].tone, Tone::Neutral);
    }

    #[test]
    fn english_lines() {
        let fragment = generate_m1_fragment(&sample(), Language::English);
        assert_eq!(
            fragment.details[0].text,
            "+8 Teamwork: Person B's Metal surplus (10) fills Person A's Metal deficiency (0)"
        );
        assert_eq!(
            fragment.tags().collect::<Vec<_>>(),
            vec![RelationTag::Complementary, RelationTag::SameStrongElement]
        );
    }
}
