//! Compatibility Scorer - main coordinator for pair and group analysis
//!
//! Runs the element tally for both charts, then the three metrics, renders
//! their detail lines and assembles the composite:
//!
//! ```text
//! score = clamp(base_score + complementarity + (day_pillar - neutral_midpoint), 0, 100)
//! ```
//!
//! The month-branch (social) score is reported but stays out of the composite.

use rayon::prelude::*;
use serde::{Deserialize, Serialize};

use crate::chart::BirthChart;
use crate::config::{ScoringConfig, SCORE_MAX};
use crate::error::GroupError;
use crate::explanation::{
    generate_m1_fragment, generate_m2_fragment, generate_m3_fragment, CompatibilityLevel, Details,
    ExplanationGenerator, OverallExplanation, RelationTag,
};
use crate::metrics::*;
use crate::utils::Language;

/// Smallest group `analyze_group` accepts.
pub const MIN_GROUP_SIZE: usize = 2;
/// Largest group `analyze_group` accepts.
pub const MAX_GROUP_SIZE: usize = 8;

/// Element power of both people.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct WuxingPower {
    pub person_a: ElementPowerProfile,
    pub person_b: ElementPowerProfile,
}

/// Everything one pair analysis produces
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct CompatibilityResult {
    /// Composite score (0-100)
    pub score: u32,
    pub base_score: u32,
    /// M1 (0-40)
    pub complementarity_score: u32,
    /// M2 (0-20)
    pub day_pillar_score: u32,
    /// Signed day-stem part of M2 (mental chemistry)
    pub stem_score: i32,
    /// Signed day-branch part of M2 (lifestyle chemistry)
    pub branch_score: i32,
    /// M3, signed and informational
    pub social_score: i32,
    /// Cosine similarity of the two element profiles (0-1)
    pub similarity: f64,
    pub overall: OverallExplanation,
    pub wuxing_power: WuxingPower,
    pub details: Details,
    /// Distinct relation tags in first-seen order
    pub tags: Vec<RelationTag>,
    /// Language every label and detail line was rendered in
    pub language: Language,
}

impl CompatibilityResult {
    pub fn level(&self) -> CompatibilityLevel {
        self.overall.level
    }
}

/// Named chart taking part in a group analysis.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct GroupMember {
    pub name: String,
    pub chart: BirthChart,
}

impl GroupMember {
    pub fn new(name: impl Into<String>, chart: BirthChart) -> Self {
        Self { name: name.into(), chart }
    }
}

/// One unordered pair of a group; `i < j` index into the member list.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct PairScore {
    pub i: usize,
    pub j: usize,
    pub name_a: String,
    pub name_b: String,
    pub result: CompatibilityResult,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct GroupAnalysis {
    /// All pairs in (i, j) order
    pub pairs: Vec<PairScore>,
    pub average_score: f64,
    /// Index into `pairs` of the highest score (first on ties)
    pub best_index: usize,
    /// Index into `pairs` of the lowest score (first on ties)
    pub worst_index: usize,
    pub language: Language,
}

impl GroupAnalysis {
    pub fn best(&self) -> &PairScore {
        &self.pairs[self.best_index]
    }

    pub fn worst(&self) -> &PairScore {
        &self.pairs[self.worst_index]
    }
}

/// Main compatibility scorer
#[derive(Debug, Clone, Default)]
pub struct CompatibilityScorer {
    config: ScoringConfig,
}

impl CompatibilityScorer {
    /// Wrap a config without checking it. Out-of-range values saturate
    /// instead of overflowing; use [`CompatibilityScorer::try_new`] for
    /// configs from outside the program.
    pub fn new(config: ScoringConfig) -> Self {
        Self { config }
    }

    /// Validate the config, then wrap it.
    pub fn try_new(config: ScoringConfig) -> anyhow::Result<Self> {
        config.validate()?;
        Ok(Self { config })
    }

    pub fn config(&self) -> &ScoringConfig {
        &self.config
    }

    /// Analyze one pair. Total over valid charts.
    pub fn analyze(&self, chart_a: &BirthChart, chart_b: &BirthChart) -> CompatibilityResult {
        let config = &self.config;
        let language = config.language;

        // Step 1: element tally
        let power_a = ElementPowerProfile::from_chart(chart_a, &config.weights);
        let power_b = ElementPowerProfile::from_chart(chart_b, &config.weights);

        // Steps 2-3 plus the social check
        let m1 = calculate_m1(&power_a, &power_b, &config.complementarity);
        let m2 = calculate_m2(&chart_a.day, &chart_b.day, config.neutral_midpoint, &config.day_pillar);
        let m3 = calculate_m3(&chart_a.month, &chart_b.month, &config.social);
        let similarity = element_similarity(&power_a, &power_b);

        let fragments = [
            generate_m1_fragment(&m1, language),
            generate_m2_fragment(&m2, language),
            generate_m3_fragment(&m3, language),
        ];

        let mut tags: Vec<RelationTag> = Vec::new();
        for tag in fragments.iter().flat_map(|f| f.tags()) {
            if !tags.contains(&tag) {
                tags.push(tag);
            }
        }
        if m1.score == 0 && similarity >= config.similarity_threshold {
            tags.push(RelationTag::SimilarElements);
        }

        // Step 4: composite
        let score = Self::composite(config, m1.score, m2.score);

        let [complementarity, day_pillar, social] = fragments.map(|f| f.into_details());

        tracing::debug!(
            score,
            complementarity = m1.score,
            day_pillar = m2.score,
            social = m3.score,
            similarity,
            "pair analysed"
        );

        CompatibilityResult {
            score,
            base_score: config.base_score,
            complementarity_score: m1.score,
            day_pillar_score: m2.score,
            stem_score: m2.stem_score,
            branch_score: m2.branch_score,
            social_score: m3.score,
            similarity,
            overall: ExplanationGenerator::overall(score, language),
            wuxing_power: WuxingPower { person_a: power_a, person_b: power_b },
            details: Details { complementarity, day_pillar, social },
            tags,
            language,
        }
    }

    fn composite(config: &ScoringConfig, complementarity: u32, day_pillar: u32) -> u32 {
        let raw = config.base_score as i64 + complementarity as i64 + day_pillar as i64
            - config.neutral_midpoint as i64;
        raw.clamp(0, SCORE_MAX as i64) as u32
    }

    /// Analyze every unordered pair of a group in parallel.
    ///
    /// Pairs come back in (i, j) order regardless of scheduling.
    pub fn analyze_group(&self, members: &[GroupMember]) -> Result<GroupAnalysis, GroupError> {
        let count = members.len();
        if count < MIN_GROUP_SIZE {
            return Err(GroupError::TooFewMembers { count, min: MIN_GROUP_SIZE });
        }
        if count > MAX_GROUP_SIZE {
            return Err(GroupError::TooManyMembers { count, max: MAX_GROUP_SIZE });
        }

        let indices: Vec<(usize, usize)> = (0..count)
            .flat_map(|i| (i + 1..count).map(move |j| (i, j)))
            .collect();

        let mut pairs: Vec<PairScore> = indices
            .into_par_iter()
            .map(|(i, j)| PairScore {
                i,
                j,
                name_a: members[i].name.clone(),
                name_b: members[j].name.clone(),
                result: self.analyze(&members[i].chart, &members[j].chart),
            })
            .collect();
        pairs.sort_by_key(|p| (p.i, p.j));

        let mut best_index = 0;
        let mut worst_index = 0;
        for (idx, pair) in pairs.iter().enumerate() {
            if pair.result.score > pairs[best_index].result.score {
                best_index = idx;
            }
            if pair.result.score < pairs[worst_index].result.score {
                worst_index = idx;
            }
        }

        let total: u32 = pairs.iter().map(|p| p.result.score).sum();
        let average_score = total as f64 / pairs.len() as f64;

        tracing::info!(
            members = count,
            pairs = pairs.len(),
            average = average_score,
            best = pairs[best_index].result.score,
            worst = pairs[worst_index].result.score,
            "group analysis complete"
        );

        Ok(GroupAnalysis {
            pairs,
            average_score,
            best_index,
            worst_index,
            language: self.config.language,
        })
    }
}

/// Analyze a pair with the default configuration.
pub fn analyze(chart_a: &BirthChart, chart_b: &BirthChart) -> CompatibilityResult {
    CompatibilityScorer::default().analyze(chart_a, chart_b)
}
