//! Element tally (step 1 of every analysis)
//!
//! Every stem and branch of the four pillars maps to one element. The tally
//! adds the positional weight of each symbol to its element:
//!
//! | symbol        | weight |
//! |---------------|--------|
//! | any stem      | 2      |
//! | year branch   | 2      |
//! | month branch  | 8      |
//! | day branch    | 4      |
//! | hour branch   | 3      |
//!
//! A chart always tallies to `PowerWeights::total()` (25 with the defaults).

use serde::{Deserialize, Serialize};

use crate::chart::BirthChart;
use crate::config::PowerWeights;
use crate::cycles::{Element, ALL_ELEMENTS};

/// Weighted element power of one chart, indexed by `Element::index()`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
pub struct ElementPowerProfile {
    pub wood: u32,
    pub fire: u32,
    pub earth: u32,
    pub metal: u32,
    pub water: u32,
}

impl ElementPowerProfile {
    pub fn from_chart(chart: &BirthChart, weights: &PowerWeights) -> Self {
        let mut profile = Self::default();

        for pillar in chart.pillars() {
            profile.add(pillar.stem.element(), weights.stem);
        }
        profile.add(chart.year.branch.element(), weights.year_branch);
        profile.add(chart.month.branch.element(), weights.month_branch);
        profile.add(chart.day.branch.element(), weights.day_branch);
        profile.add(chart.hour.branch.element(), weights.hour_branch);

        if let Ok(expected) = weights.total() {
            debug_assert_eq!(profile.total(), expected, "element tally lost weight");
        }

        tracing::debug!(
            wood = profile.wood,
            fire = profile.fire,
            earth = profile.earth,
            metal = profile.metal,
            water = profile.water,
            "element power profile"
        );

        profile
    }

    fn add(&mut self, element: Element, weight: u32) {
        let slot = self.slot(element);
        *slot = slot.saturating_add(weight);
    }

    fn slot(&mut self, element: Element) -> &mut u32 {
        match element {
            Element::Wood => &mut self.wood,
            Element::Fire => &mut self.fire,
            Element::Earth => &mut self.earth,
            Element::Metal => &mut self.metal,
            Element::Water => &mut self.water,
        }
    }

    pub fn get(&self, element: Element) -> u32 {
        match element {
            Element::Wood => self.wood,
            Element::Fire => self.fire,
            Element::Earth => self.earth,
            Element::Metal => self.metal,
            Element::Water => self.water,
        }
    }

    /// Sum over all elements; saturates instead of overflowing.
    pub fn total(&self) -> u32 {
        self.as_array().iter().fold(0, |acc, v| acc.saturating_add(*v))
    }

    /// Values in element order (Wood, Fire, Earth, Metal, Water).
    pub fn as_array(&self) -> [u32; 5] {
        [self.wood, self.fire, self.earth, self.metal, self.water]
    }

    /// Element with the highest power; ties go to the earlier element.
    pub fn dominant(&self) -> Element {
        let mut best = Element::Wood;
        for element in ALL_ELEMENTS {
            if self.get(element) > self.get(best) {
                best = element;
            }
        }
        best
    }

    /// Share of the total per element, in element order.
    pub fn normalized(&self) -> [f64; 5] {
        let total = self.total();
        if total == 0 {
            return [0.0; 5];
        }
        self.as_array().map(|v| v as f64 / total as f64)
    }
}

/// Cosine similarity of two normalized profiles, in `0.0..=1.0`.
///
/// Profiles are non-negative, so the result never goes below zero. An empty
/// profile has similarity 0 with anything.
pub fn element_similarity(a: &ElementPowerProfile, b: &ElementPowerProfile) -> f64 {
    let va = a.normalized();
    let vb = b.normalized();

    let dot: f64 = va.iter().zip(vb.iter()).map(|(x, y)| x * y).sum();
    let norm_a = va.iter().map(|x| x * x).sum::<f64>().sqrt();
    let norm_b = vb.iter().map(|x| x * x).sum::<f64>().sqrt();

    if norm_a == 0.0 || norm_b == 0.0 {
        return 0.0;
    }
    (dot / (norm_a * norm_b)).clamp(0.0, 1.0)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::chart::{compute_chart, Pillar};
    use crate::cycles::{Branch, Stem};
    use approx::assert_relative_eq;

    #[test]
    fn tally_1990_01_01() {
        // 경오 정축 정묘 경자
        let chart = compute_chart(1990, 1, 1, 0).unwrap();
        let profile = ElementPowerProfile::from_chart(&chart, &PowerWeights::default());
        assert_eq!(profile.as_array(), [4, 6, 8, 4, 3]);
        assert_eq!(profile.total(), 25);
        assert_eq!(profile.dominant(), Element::Earth);
    }

    #[test]
    fn single_element_chart() {
        let p = Pillar::new(Stem::Gap, Branch::In);
        let chart = BirthChart { year: p, month: p, day: p, hour: p };
        let profile = ElementPowerProfile::from_chart(&chart, &PowerWeights::default());
        assert_eq!(profile.wood, 25);
        assert_eq!(profile.get(Element::Water), 0);
    }

    #[test]
    fn custom_weights_keep_sum() {
        let weights = PowerWeights { stem: 1, year_branch: 1, month_branch: 1, day_branch: 1, hour_branch: 1 };
        let chart = compute_chart(2024, 6, 15, 13).unwrap();
        let profile = ElementPowerProfile::from_chart(&chart, &weights);
        assert_eq!(profile.total(), 8);
    }

    #[test]
    fn similarity_bounds() {
        let a = ElementPowerProfile { wood: 25, ..Default::default() };
        let b = ElementPowerProfile { water: 25, ..Default::default() };
        assert_relative_eq!(element_similarity(&a, &a), 1.0, epsilon = 1e-12);
        assert_relative_eq!(element_similarity(&a, &b), 0.0, epsilon = 1e-12);
        assert_relative_eq!(
            element_similarity(&a, &ElementPowerProfile::default()),
            0.0
        );
    }

    #[test]
    fn similarity_is_symmetric() {
        let a = ElementPowerProfile { wood: 4, fire: 6, earth: 8, metal: 4, water: 3 };
        let b = ElementPowerProfile { wood: 10, fire: 0, earth: 2, metal: 8, water: 5 };
        assert_relative_eq!(element_similarity(&a, &b), element_similarity(&b, &a));
    }
}
