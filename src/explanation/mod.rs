pub mod types;
pub mod fragments;
pub mod generator;
pub mod formatters;

pub use types::{
    CompatibilityLevel, Detail, Details, MetricFragment, OverallExplanation, RelationTag, Tone,
};

pub use fragments::{generate_m1_fragment, generate_m2_fragment, generate_m3_fragment};

pub use generator::ExplanationGenerator;
pub use formatters::{JsonFormatter, MarkdownFormatter};
