//! METRIC 1: ELEMENT COMPLEMENTARITY
//!
//! Rewards pairs where one person's missing element is supplied by the other.
//! Each element is checked on its own, in order Wood, Fire, Earth, Metal, Water:
//!
//! - deficient (power <= 0) vs surplus (power >= 8): +8
//! - deficient vs partial support (power >= 4): +4
//! - both at surplus: neutral finding, no points
//!
//! Both directions are checked, so swapping the two people never changes the
//! score. The sum is capped at 40.

use serde::{Deserialize, Serialize};

use crate::config::{ComplementarityRules, COMPLEMENTARITY_MAX};
use crate::cycles::{Element, ALL_ELEMENTS};
use crate::metrics::element_power::ElementPowerProfile;
use crate::utils::Language;

/// One side of the analysed pair.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Person {
    A,
    B,
}

impl Person {
    pub fn other(self) -> Person {
        match self {
            Self::A => Self::B,
            Self::B => Self::A,
        }
    }

    pub fn label(self, language: Language) -> &'static str {
        language.person(self == Self::A)
    }
}

/// How strongly the supporting side covers the deficiency.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum Support {
    Surplus,
    Partial,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub enum ComplementarityFinding {
    /// `supporter` has enough of `element` to cover the other person's lack.
    Fills {
        element: Element,
        supporter: Person,
        support: Support,
        supporter_power: u32,
        deficient_power: u32,
        points: u32,
    },
    /// Both people are at surplus in `element`; informational only.
    SharedStrength {
        element: Element,
        power_a: u32,
        power_b: u32,
    },
}

impl ComplementarityFinding {
    pub fn element(&self) -> Element {
        match self {
            Self::Fills { element, .. } | Self::SharedStrength { element, .. } => *element,
        }
    }

    pub fn points(&self) -> u32 {
        match self {
            Self::Fills { points, .. } => *points,
            Self::SharedStrength { .. } => 0,
        }
    }
}

/// Result of M1 calculation
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct M1Result {
    /// Capped score (0-40)
    pub score: u32,
    /// Sum of awarded points before the cap
    pub raw: u32,
    /// Findings in element order
    pub findings: Vec<ComplementarityFinding>,
}

/// Calculate M1: element complementarity between two power profiles.
pub fn calculate_m1(
    a: &ElementPowerProfile,
    b: &ElementPowerProfile,
    rules: &ComplementarityRules,
) -> M1Result {
    let mut findings = Vec::new();

    for element in ALL_ELEMENTS {
        let power_a = a.get(element);
        let power_b = b.get(element);

        if let Some(finding) = fill(element, Person::B, power_b, power_a, rules)
            .or_else(|| fill(element, Person::A, power_a, power_b, rules))
        {
            tracing::trace!(?element, points = finding.points(), "complementary element");
            findings.push(finding);
        } else if power_a >= rules.surplus_min && power_b >= rules.surplus_min {
            findings.push(ComplementarityFinding::SharedStrength { element, power_a, power_b });
        }
    }

    let raw = findings
        .iter()
        .map(ComplementarityFinding::points)
        .fold(0u32, u32::saturating_add);
    let score = raw.min(COMPLEMENTARITY_MAX);

    tracing::debug!(score, raw, "M1 complementarity");

    M1Result { score, raw, findings }
}

fn fill(
    element: Element,
    supporter: Person,
    supporter_power: u32,
    deficient_power: u32,
    rules: &ComplementarityRules,
) -> Option<ComplementarityFinding> {
    if deficient_power > rules.deficient_max {
        return None;
    }
    let (support, points) = if supporter_power >= rules.surplus_min {
        (Support::Surplus, rules.surplus_points)
    } else if supporter_power >= rules.partial_min {
        (Support::Partial, rules.partial_points)
    } else {
        return None;
    };
    Some(ComplementarityFinding::Fills {
        element,
        supporter,
        support,
        supporter_power,
        deficient_power,
        points,
    })
}
