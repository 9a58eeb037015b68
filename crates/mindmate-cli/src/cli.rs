use std::path::PathBuf;

use clap::{Args, Parser, Subcommand, ValueEnum};
use mindmate_analysis::Modality;
use mindmate_instruments::ResourceKind;

use crate::config::OutputFormat;

#[derive(Parser)]
#[command(
    name = "mindmate",
    version,
    about = "Mental-health screening questionnaires and mock mood analysis"
)]
pub struct Cli {
    /// Increase log verbosity (-v for info, -vv for debug)
    #[arg(short, long, action = clap::ArgAction::Count, global = true)]
    pub verbose: u8,

    /// Emit logs as JSON lines
    #[arg(long, global = true)]
    pub log_json: bool,

    #[command(subcommand)]
    pub command: Commands,
}

#[derive(Subcommand)]
pub enum Commands {
    /// List the available questionnaires
    List(FormatArgs),
    /// Show a questionnaire's items and scoring guide
    Guide(GuideCommand),
    /// Score a set of answers
    Score(ScoreCommand),
    /// Answer a questionnaire interactively
    Take(TakeCommand),
    /// Run mock mood analysis on a captured frame or recording
    Analyze(AnalyzeCommand),
    /// List free self-help books and videos
    Resources(ResourcesCommand),
    /// List mental health professionals
    Professionals(ProfessionalsCommand),
    /// Show or change saved preferences
    #[command(subcommand)]
    Config(ConfigCommand),
}

#[derive(Args)]
pub struct FormatArgs {
    /// Output format (defaults to the saved preference)
    #[arg(short, long, value_enum)]
    pub format: Option<OutputFormat>,
}

#[derive(Args)]
pub struct GuideCommand {
    /// Questionnaire ID or short name (e.g. phq9, gad7)
    pub questionnaire: Option<String>,
    #[command(flatten)]
    pub output: FormatArgs,
}

#[derive(Args)]
pub struct ScoreCommand {
    /// Questionnaire ID or short name (e.g. phq9, gad7)
    pub questionnaire: Option<String>,

    /// Answers in item order, comma separated (e.g. 0,1,2,3,...)
    #[arg(
        short,
        long,
        value_delimiter = ',',
        allow_hyphen_values = true,
        conflicts_with = "answers_file",
        required_unless_present = "answers_file"
    )]
    pub answers: Vec<i64>,

    /// JSON object mapping item ID to answer (e.g. {"1": 0, "2": 3})
    #[arg(long)]
    pub answers_file: Option<PathBuf>,

    /// Score against a questionnaire definition loaded from a JSON file
    #[arg(long, conflicts_with = "questionnaire")]
    pub definition: Option<PathBuf>,

    #[command(flatten)]
    pub output: FormatArgs,
}

#[derive(Args)]
pub struct TakeCommand {
    /// Questionnaire ID or short name (e.g. phq9, gad7)
    pub questionnaire: Option<String>,
    #[command(flatten)]
    pub output: FormatArgs,
}

#[derive(Clone, Copy, Debug, ValueEnum)]
pub enum SignalKind {
    Facial,
    Voice,
}

impl From<SignalKind> for Modality {
    fn from(kind: SignalKind) -> Self {
        match kind {
            SignalKind::Facial => Modality::Facial,
            SignalKind::Voice => Modality::Voice,
        }
    }
}

#[derive(Args)]
pub struct AnalyzeCommand {
    #[arg(value_enum)]
    pub kind: SignalKind,

    /// Captured image or audio file
    pub file: PathBuf,

    /// Seed the facial mock for reproducible output
    #[arg(long)]
    pub seed: Option<u64>,

    #[command(flatten)]
    pub output: FormatArgs,
}

#[derive(Clone, Copy, Debug, ValueEnum)]
pub enum ResourceType {
    Book,
    Video,
}

impl From<ResourceType> for ResourceKind {
    fn from(kind: ResourceType) -> Self {
        match kind {
            ResourceType::Book => ResourceKind::Book,
            ResourceType::Video => ResourceKind::Video,
        }
    }
}

#[derive(Args)]
pub struct ResourcesCommand {
    /// Only show this kind of resource
    #[arg(short = 't', long = "type", value_enum)]
    pub kind: Option<ResourceType>,
    #[command(flatten)]
    pub output: FormatArgs,
}

#[derive(Args)]
pub struct ProfessionalsCommand {
    /// Only show professionals with this specialty (e.g. Anxiety)
    #[arg(short, long)]
    pub specialty: Option<String>,
    #[command(flatten)]
    pub output: FormatArgs,
}

#[derive(Subcommand)]
pub enum ConfigCommand {
    /// Print the saved preferences
    Show,
    /// Questionnaire used when none is named
    SetDefault { questionnaire: String },
    /// Output format used when --format is not given
    SetFormat {
        #[arg(value_enum)]
        format: OutputFormat,
    },
    /// Delete the saved preferences
    Reset,
}
