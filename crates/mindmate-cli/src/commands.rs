use std::collections::BTreeMap;
use std::fs;
use std::io::{BufRead, Write};
use std::path::Path;

use eyre::{bail, eyre};
use mindmate_analysis::{analyzer_for, CapturedSignal, EmotionAnalyzer, MockFacialAnalyzer};
use mindmate_instruments::instruments::phq9;
use mindmate_instruments::support::{self, referrals_for};
use mindmate_instruments::{
    all_questionnaires, find_questionnaire, AssessmentSession, InstrumentError, Professional,
    Questionnaire, ScoreResult, ScoringError, SCREENING_DISCLAIMER,
};
use serde::Serialize;

use crate::cli::{
    AnalyzeCommand, Cli, Commands, ConfigCommand, FormatArgs, GuideCommand, ProfessionalsCommand,
    ResourcesCommand, ScoreCommand, SignalKind, TakeCommand,
};
use crate::config::{self, MindmateConfig, OutputFormat};
use crate::render;

#[derive(Serialize)]
struct ScoreReport<'a> {
    questionnaire: &'a str,
    result: &'a ScoreResult,
    referrals: Vec<&'static Professional>,
    disclaimer: &'static str,
}

#[derive(Serialize)]
struct ListEntry<'a> {
    id: &'a str,
    name: &'a str,
    title: &'a str,
    items: usize,
    max_score: u32,
}

pub fn run(cli: Cli) -> eyre::Result<()> {
    let config = match &cli.command {
        // Reset must work even when the saved config no longer parses.
        Commands::Config(ConfigCommand::Reset) => MindmateConfig::default(),
        _ => config::load_or_default()?,
    };
    let stdout = std::io::stdout();
    let mut out = stdout.lock();

    match cli.command {
        Commands::List(args) => list(output_format(&args, &config), &mut out),
        Commands::Guide(cmd) => guide(&cmd, &config, &mut out),
        Commands::Score(cmd) => score(&cmd, &config, &mut out),
        Commands::Take(cmd) => {
            let stdin = std::io::stdin();
            take(&cmd, &config, stdin.lock(), &mut out)
        }
        Commands::Analyze(cmd) => analyze(&cmd, &config, &mut out),
        Commands::Resources(cmd) => resources(&cmd, &config, &mut out),
        Commands::Professionals(cmd) => professionals(&cmd, &config, &mut out),
        Commands::Config(cmd) => configure(cmd, config, &mut out),
    }
}

fn output_format(args: &FormatArgs, config: &MindmateConfig) -> OutputFormat {
    args.format.unwrap_or(config.output_format)
}

/// Named questionnaire, else the saved default, else PHQ-9.
fn resolve_questionnaire(
    key: Option<&str>,
    config: &MindmateConfig,
) -> Result<&'static Questionnaire, InstrumentError> {
    let key = key
        .or(config.default_questionnaire.as_deref())
        .unwrap_or(phq9::ID);
    find_questionnaire(key)
}

fn load_definition(path: &Path) -> eyre::Result<Questionnaire> {
    let text = fs::read_to_string(path)
        .map_err(|e| eyre!("failed to read definition at {}: {e}", path.display()))?;
    Ok(Questionnaire::from_json(&text)?)
}

fn list(format: OutputFormat, out: &mut impl Write) -> eyre::Result<()> {
    let questionnaires = all_questionnaires();
    match format {
        OutputFormat::Text => write!(out, "{}", render::questionnaire_list(&questionnaires))?,
        OutputFormat::Json => {
            let entries: Vec<_> = questionnaires
                .iter()
                .map(|q| ListEntry {
                    id: &q.id,
                    name: &q.name,
                    title: &q.title,
                    items: q.items.len(),
                    max_score: q.max_score(),
                })
                .collect();
            writeln!(out, "{}", serde_json::to_string_pretty(&entries)?)?;
        }
    }
    Ok(())
}

fn guide(cmd: &GuideCommand, config: &MindmateConfig, out: &mut impl Write) -> eyre::Result<()> {
    let questionnaire = resolve_questionnaire(cmd.questionnaire.as_deref(), config)?;
    match output_format(&cmd.output, config) {
        OutputFormat::Text => write!(out, "{}", render::guide(questionnaire))?,
        OutputFormat::Json => writeln!(out, "{}", serde_json::to_string_pretty(questionnaire)?)?,
    }
    Ok(())
}

fn score(cmd: &ScoreCommand, config: &MindmateConfig, out: &mut impl Write) -> eyre::Result<()> {
    let loaded;
    let questionnaire = match &cmd.definition {
        Some(path) => {
            loaded = load_definition(path)?;
            &loaded
        }
        None => resolve_questionnaire(cmd.questionnaire.as_deref(), config)?,
    };

    let mut session = AssessmentSession::new(questionnaire);
    match &cmd.answers_file {
        Some(path) => {
            let text = fs::read_to_string(path)
                .map_err(|e| eyre!("failed to read answers at {}: {e}", path.display()))?;
            let answers: BTreeMap<u32, i64> = serde_json::from_str(&text)?;
            for (item_id, value) in answers {
                session.record(item_id, value)?;
            }
        }
        None => {
            if cmd.answers.len() > questionnaire.items.len() {
                bail!(
                    "{} has {} items but {} answers were given",
                    questionnaire.name,
                    questionnaire.items.len(),
                    cmd.answers.len()
                );
            }
            for (item, value) in questionnaire.items.iter().zip(&cmd.answers) {
                session.record(item.id, *value)?;
            }
        }
    }

    let result = checked_score(&mut session)?;
    write_result(questionnaire, &result, output_format(&cmd.output, config), out)
}

fn checked_score(session: &mut AssessmentSession<'_>) -> eyre::Result<ScoreResult> {
    match session.score() {
        Ok(result) => Ok(result.clone()),
        Err(e @ ScoringError::BandTableDefect { .. }) => {
            Err(eyre::Report::new(e).wrap_err("internal error: malformed severity band table"))
        }
        Err(e) => Err(e.into()),
    }
}

fn write_result(
    questionnaire: &Questionnaire,
    result: &ScoreResult,
    format: OutputFormat,
    out: &mut impl Write,
) -> eyre::Result<()> {
    let referrals = referrals_for(result);
    match format {
        OutputFormat::Text => {
            write!(out, "{}", render::result(questionnaire, result))?;
            if !referrals.is_empty() {
                write!(out, "{}", render::referrals(&referrals))?;
            }
        }
        OutputFormat::Json => {
            let report = ScoreReport {
                questionnaire: &questionnaire.name,
                result,
                referrals,
                disclaimer: SCREENING_DISCLAIMER,
            };
            writeln!(out, "{}", serde_json::to_string_pretty(&report)?)?;
        }
    }
    Ok(())
}

fn take(
    cmd: &TakeCommand,
    config: &MindmateConfig,
    mut input: impl BufRead,
    out: &mut impl Write,
) -> eyre::Result<()> {
    let questionnaire = resolve_questionnaire(cmd.questionnaire.as_deref(), config)?;
    let mut session = AssessmentSession::new(questionnaire);

    writeln!(out, "{}\n{}\n", questionnaire.title, questionnaire.preamble)?;
    writeln!(out, "Answer 0-3, r to start over, q to quit.\n")?;

    let mut line = String::new();
    while let Some(item) = session.next_unanswered() {
        write!(
            out,
            "{}> ",
            render::item_prompt(questionnaire, item, session.responses().len())
        )?;
        out.flush()?;

        line.clear();
        if input.read_line(&mut line)? == 0 {
            bail!("input ended before every question was answered");
        }
        match line.trim() {
            "q" => {
                writeln!(out, "Assessment abandoned.")?;
                return Ok(());
            }
            "r" => {
                session.reset();
                writeln!(out, "Responses cleared.\n")?;
            }
            answer => match answer.parse::<i64>() {
                Ok(value) => {
                    if let Err(e) = session.record(item.id, value) {
                        writeln!(out, "{e}\n")?;
                    }
                }
                Err(_) => writeln!(out, "Please enter a number from 0 to 3.\n")?,
            },
        }
    }

    let result = checked_score(&mut session)?;
    writeln!(out)?;
    write_result(questionnaire, &result, output_format(&cmd.output, config), out)
}

fn analyze(cmd: &AnalyzeCommand, config: &MindmateConfig, out: &mut impl Write) -> eyre::Result<()> {
    let data = fs::read(&cmd.file)
        .map_err(|e| eyre!("failed to read capture at {}: {e}", cmd.file.display()))?;

    let mut analyzer: Box<dyn EmotionAnalyzer> = match (cmd.kind, cmd.seed) {
        (SignalKind::Facial, Some(seed)) => Box::new(MockFacialAnalyzer::seeded(seed)),
        (kind, _) => analyzer_for(kind.into()),
    };
    let reading = analyzer.analyze(&CapturedSignal::new(cmd.kind.into(), data))?;

    match output_format(&cmd.output, config) {
        OutputFormat::Text => write!(out, "{}", render::reading(&reading))?,
        OutputFormat::Json => writeln!(out, "{}", serde_json::to_string_pretty(&reading)?)?,
    }
    Ok(())
}

fn resources(
    cmd: &ResourcesCommand,
    config: &MindmateConfig,
    out: &mut impl Write,
) -> eyre::Result<()> {
    let resources = support::resources(cmd.kind.map(Into::into));
    match output_format(&cmd.output, config) {
        OutputFormat::Text => write!(out, "{}", render::resources(&resources))?,
        OutputFormat::Json => writeln!(out, "{}", serde_json::to_string_pretty(&resources)?)?,
    }
    Ok(())
}

fn professionals(
    cmd: &ProfessionalsCommand,
    config: &MindmateConfig,
    out: &mut impl Write,
) -> eyre::Result<()> {
    let professionals = support::professionals(cmd.specialty.as_deref());
    if professionals.is_empty()
        && let Some(specialty) = &cmd.specialty
    {
        bail!("no professionals list the specialty '{specialty}'");
    }
    match output_format(&cmd.output, config) {
        OutputFormat::Text => write!(out, "{}", render::professionals(&professionals))?,
        OutputFormat::Json => writeln!(out, "{}", serde_json::to_string_pretty(&professionals)?)?,
    }
    Ok(())
}

fn configure(
    cmd: ConfigCommand,
    mut config: MindmateConfig,
    out: &mut impl Write,
) -> eyre::Result<()> {
    match cmd {
        ConfigCommand::Show => {
            writeln!(
                out,
                "default questionnaire: {}",
                config.default_questionnaire.as_deref().unwrap_or(phq9::ID)
            )?;
            writeln!(out, "output format: {}", config.output_format)?;
            writeln!(out, "config dir: {}", config::config_dir()?.display())?;
        }
        ConfigCommand::SetDefault { questionnaire } => {
            let questionnaire = find_questionnaire(&questionnaire)?;
            config.default_questionnaire = Some(questionnaire.id.clone());
            config::save_config(&config)?;
            writeln!(out, "default questionnaire set to {}", questionnaire.id)?;
        }
        ConfigCommand::SetFormat { format } => {
            config.output_format = format;
            config::save_config(&config)?;
            writeln!(out, "output format saved")?;
        }
        ConfigCommand::Reset => {
            config::delete_config()?;
            writeln!(out, "preferences cleared")?;
        }
    }
    Ok(())
}
