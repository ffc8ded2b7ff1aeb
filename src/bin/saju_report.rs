// Compatibility report CLI
//
// Usage:
//   cargo run --features cli --bin saju_report -- pair 19900101 1992071509
//   cargo run --features cli --bin saju_report -- --lang en group kim=19900101 lee=1988110312 park=19950505

use std::path::PathBuf;

use anyhow::{Context, Result};
use clap::{Parser, Subcommand, ValueEnum};
use saju_scorer_rust::explanation::{JsonFormatter, MarkdownFormatter};
use saju_scorer_rust::{compute_chart, BirthChart, CompatibilityScorer, GroupMember, Language, ScoringConfig};
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

#[derive(Parser)]
#[command(name = "saju_report", about = "Saju compatibility report")]
struct Cli {
    /// JSON scoring config; missing fields keep their defaults
    #[arg(long, env = "SAJU_CONFIG", global = true)]
    config: Option<PathBuf>,
    /// Output language (ko, en); overrides the config file
    #[arg(long, env = "SAJU_LANG", global = true)]
    lang: Option<Language>,
    #[arg(long, value_enum, default_value = "markdown", global = true)]
    format: OutputFormat,
    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Score two people
    Pair {
        /// Birth of person A: YYYYMMDD or YYYYMMDDHH
        person_a: String,
        /// Birth of person B: YYYYMMDD or YYYYMMDDHH
        person_b: String,
    },
    /// Score every pair of a group (2 to 8 members)
    Group {
        /// Members as name=YYYYMMDD or name=YYYYMMDDHH
        #[arg(required = true, num_args = 2..)]
        members: Vec<String>,
    },
}

#[derive(Clone, Copy, ValueEnum)]
enum OutputFormat {
    Markdown,
    Json,
}

fn main() -> Result<()> {
    tracing_subscriber::registry()
        .with(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| "saju_scorer_rust=info,warn".into()),
        )
        .with(tracing_subscriber::fmt::layer().with_writer(std::io::stderr))
        .init();

    let cli = Cli::parse();

    let mut config = match &cli.config {
        Some(path) => ScoringConfig::load(path)?,
        None => ScoringConfig::default(),
    };
    if let Some(lang) = cli.lang {
        config.language = lang;
    }
    let language = config.language;
    let scorer = CompatibilityScorer::try_new(config)?;

    let output = match cli.command {
        Commands::Pair { person_a, person_b } => {
            let chart_a = parse_birth(&person_a)?;
            let chart_b = parse_birth(&person_b)?;
            tracing::info!(
                "A: {}  B: {}",
                chart_a.label(language),
                chart_b.label(language)
            );

            let result = scorer.analyze(&chart_a, &chart_b);
            match cli.format {
                OutputFormat::Markdown => MarkdownFormatter::format(&result),
                OutputFormat::Json => JsonFormatter::format(&result)?,
            }
        }
        Commands::Group { members } => {
            let members = members
                .iter()
                .map(|m| parse_member(m))
                .collect::<Result<Vec<_>>>()?;

            let group = scorer.analyze_group(&members)?;
            match cli.format {
                OutputFormat::Markdown => MarkdownFormatter::format_group(&group),
                OutputFormat::Json => JsonFormatter::format_group(&group)?,
            }
        }
    };

    println!("{}", output);
    Ok(())
}

/// `YYYYMMDD` (hour 0) or `YYYYMMDDHH`.
fn parse_birth(input: &str) -> Result<BirthChart> {
    let s = input.trim();
    if !(s.len() == 8 || s.len() == 10) || !s.bytes().all(|b| b.is_ascii_digit()) {
        anyhow::bail!("Birth '{}' must be YYYYMMDD or YYYYMMDDHH", input);
    }

    let year: i32 = s[0..4].parse()?;
    let month: u32 = s[4..6].parse()?;
    let day: u32 = s[6..8].parse()?;
    let hour: u32 = if s.len() == 10 { s[8..10].parse()? } else { 0 };

    compute_chart(year, month, day, hour).with_context(|| format!("Invalid birth '{}'", input))
}

fn parse_member(input: &str) -> Result<GroupMember> {
    let (name, birth) = input
        .split_once('=')
        .with_context(|| format!("Member '{}' must be name=YYYYMMDD[HH]", input))?;
    Ok(GroupMember::new(name.trim(), parse_birth(birth)?))
}
