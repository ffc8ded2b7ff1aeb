//! Scoring configuration
//!
//! Every constant the engine uses lives here. `ScoringConfig::default()` is the
//! documented policy; a JSON file may override any subset of fields.
//!
//! ```json
//! { "language": "en", "weights": { "month_branch": 6 } }
//! ```

use std::fs;
use std::path::Path;

use anyhow::{Context, Result};
use serde::{Deserialize, Serialize};

use crate::utils::Language;

/// Upper bound of the complementarity component.
pub const COMPLEMENTARITY_MAX: u32 = 40;
/// Upper bound of the day-pillar component.
pub const DAY_PILLAR_MAX: u32 = 20;
/// Upper bound of the composite score.
pub const SCORE_MAX: u32 = 100;
/// Largest positional weight `validate` accepts.
pub const MAX_POSITION_WEIGHT: u32 = 100;

/// Positional weights for the element tally.
///
/// The month branch carries the season and dominates; the day branch is the
/// spouse palace; every stem counts the same.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct PowerWeights {
    pub stem: u32,
    pub year_branch: u32,
    pub month_branch: u32,
    pub day_branch: u32,
    pub hour_branch: u32,
}

impl Default for PowerWeights {
    fn default() -> Self {
        Self {
            stem: 2,
            year_branch: 2,
            month_branch: 8,
            day_branch: 4,
            hour_branch: 3,
        }
    }
}

impl PowerWeights {
    /// Total tally weight of one chart (four stems plus four branches).
    pub fn total(&self) -> Result<u32> {
        let mut total = self.stem.checked_mul(4).context("Power weights overflow")?;
        for weight in [self.year_branch, self.month_branch, self.day_branch, self.hour_branch] {
            total = total.checked_add(weight).context("Power weights overflow")?;
        }
        Ok(total)
    }

    fn values(&self) -> [(&'static str, u32); 5] {
        [
            ("stem", self.stem),
            ("year_branch", self.year_branch),
            ("month_branch", self.month_branch),
            ("day_branch", self.day_branch),
            ("hour_branch", self.hour_branch),
        ]
    }
}

/// Element complementarity thresholds and points.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct ComplementarityRules {
    /// Power at or below this counts as a deficiency.
    pub deficient_max: u32,
    /// Power at or above this partially covers a deficiency.
    pub partial_min: u32,
    /// Power at or above this is a surplus.
    pub surplus_min: u32,
    pub surplus_points: u32,
    pub partial_points: u32,
}

impl Default for ComplementarityRules {
    fn default() -> Self {
        Self {
            deficient_max: 0,
            partial_min: 4,
            surplus_min: 8,
            surplus_points: 8,
            partial_points: 4,
        }
    }
}

/// Points for the branch relations, shared by the day-pillar and social
/// components. Penalties are positive magnitudes and get subtracted.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct BranchPoints {
    pub six_harmony: i32,
    pub triad: i32,
    pub clash: i32,
    pub yuanjin: i32,
    pub guimun: i32,
}

/// Day-pillar relation points.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct DayPillarRules {
    pub stem_harmony: i32,
    pub stem_clash: i32,
    pub six_harmony: i32,
    pub triad: i32,
    pub clash: i32,
    pub yuanjin: i32,
    pub guimun: i32,
}

impl Default for DayPillarRules {
    fn default() -> Self {
        Self {
            stem_harmony: 6,
            stem_clash: 3,
            six_harmony: 5,
            triad: 4,
            clash: 3,
            yuanjin: 3,
            guimun: 3,
        }
    }
}

impl DayPillarRules {
    pub fn branch_points(&self) -> BranchPoints {
        BranchPoints {
            six_harmony: self.six_harmony,
            triad: self.triad,
            clash: self.clash,
            yuanjin: self.yuanjin,
            guimun: self.guimun,
        }
    }
}

/// Month-branch (social) relation points.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct SocialRules {
    pub six_harmony: i32,
    pub triad: i32,
    pub clash: i32,
    pub yuanjin: i32,
    pub guimun: i32,
}

impl Default for SocialRules {
    fn default() -> Self {
        Self {
            six_harmony: 3,
            triad: 2,
            clash: 2,
            yuanjin: 2,
            guimun: 2,
        }
    }
}

impl SocialRules {
    pub fn branch_points(&self) -> BranchPoints {
        BranchPoints {
            six_harmony: self.six_harmony,
            triad: self.triad,
            clash: self.clash,
            yuanjin: self.yuanjin,
            guimun: self.guimun,
        }
    }
}

/// Complete engine configuration.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct ScoringConfig {
    pub language: Language,
    pub base_score: u32,
    /// Day-pillar score that contributes nothing to the composite.
    pub neutral_midpoint: u32,
    pub weights: PowerWeights,
    pub complementarity: ComplementarityRules,
    pub day_pillar: DayPillarRules,
    pub social: SocialRules,
    /// Cosine similarity at or above which two profiles count as alike.
    pub similarity_threshold: f64,
}

impl Default for ScoringConfig {
    fn default() -> Self {
        Self {
            language: Language::Korean,
            base_score: 50,
            neutral_midpoint: 10,
            weights: PowerWeights::default(),
            complementarity: ComplementarityRules::default(),
            day_pillar: DayPillarRules::default(),
            social: SocialRules::default(),
            similarity_threshold: 0.75,
        }
    }
}

impl ScoringConfig {
    /// Default policy with a different output language.
    pub fn with_language(language: Language) -> Self {
        Self { language, ..Self::default() }
    }

    /// Load configuration from a JSON file; missing fields keep their defaults.
    pub fn load(path: &Path) -> Result<Self> {
        let contents = fs::read_to_string(path)
            .with_context(|| format!("Failed to read scoring config: {:?}", path))?;

        let config: ScoringConfig = serde_json::from_str(&contents)
            .with_context(|| "Failed to parse scoring config JSON")?;

        config.validate()?;
        Ok(config)
    }

    /// Reject values that would break the documented score ranges.
    pub fn validate(&self) -> Result<()> {
        for (name, weight) in self.weights.values() {
            if weight > MAX_POSITION_WEIGHT {
                anyhow::bail!("weights.{} ({}) exceeds {}", name, weight, MAX_POSITION_WEIGHT);
            }
        }
        if self.weights.total()? == 0 {
            anyhow::bail!("Power weights sum to zero");
        }
        let c = &self.complementarity;
        if c.partial_min > c.surplus_min {
            anyhow::bail!(
                "partial_min ({}) must not exceed surplus_min ({})",
                c.partial_min,
                c.surplus_min
            );
        }
        if c.deficient_max >= c.partial_min {
            anyhow::bail!(
                "deficient_max ({}) must be below partial_min ({})",
                c.deficient_max,
                c.partial_min
            );
        }
        if c.partial_points > c.surplus_points {
            anyhow::bail!("partial_points must not exceed surplus_points");
        }
        if c.surplus_points > COMPLEMENTARITY_MAX {
            anyhow::bail!(
                "surplus_points ({}) exceeds {}",
                c.surplus_points,
                COMPLEMENTARITY_MAX
            );
        }
        if self.neutral_midpoint > DAY_PILLAR_MAX {
            anyhow::bail!(
                "neutral_midpoint {} outside 0..={}",
                self.neutral_midpoint,
                DAY_PILLAR_MAX
            );
        }
        if self.base_score > SCORE_MAX {
            anyhow::bail!("base_score {} outside 0..={}", self.base_score, SCORE_MAX);
        }
        let day = &self.day_pillar;
        let max_points = DAY_PILLAR_MAX as i32;
        let stem_points = [("stem_harmony", day.stem_harmony), ("stem_clash", day.stem_clash)];
        for (section, points) in [
            ("day_pillar", day.branch_points()),
            ("social", self.social.branch_points()),
        ] {
            let rules = [
                ("six_harmony", points.six_harmony),
                ("triad", points.triad),
                ("clash", points.clash),
                ("yuanjin", points.yuanjin),
                ("guimun", points.guimun),
            ];
            let extra: &[(&str, i32)] = if section == "day_pillar" { &stem_points } else { &[] };
            for &(name, value) in extra.iter().chain(rules.iter()) {
                if !(0..=max_points).contains(&value) {
                    anyhow::bail!(
                        "{}.{} ({}) must lie in 0..={}",
                        section,
                        name,
                        value,
                        max_points
                    );
                }
            }
        }
        if !(0.0..=1.0).contains(&self.similarity_threshold) {
            anyhow::bail!("similarity_threshold must lie in 0.0..=1.0");
        }
        Ok(())
    }
}
