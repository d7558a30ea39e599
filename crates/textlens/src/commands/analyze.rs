//! Analyze command: character, word, sentence and repeat counts.

use std::io::Write;

use anyhow::Context;
use camino::Utf8PathBuf;
use clap::Args;
use owo_colors::OwoColorize;
use tracing::{debug, instrument};

use textlens_core::analysis::{self, AnalysisReport};

use super::{read_input_file, read_input_stream};

/// Arguments for the `analyze` subcommand.
#[derive(Args, Debug)]
pub struct AnalyzeArgs {
    /// File to analyze (reads stdin when omitted or `-`).
    pub file: Option<Utf8PathBuf>,
}

/// Analyze a file or stdin and print the report.
#[instrument(name = "cmd_analyze", skip_all, fields(file = ?args.file))]
pub fn cmd_analyze(
    args: AnalyzeArgs,
    global_json: bool,
    max_input_bytes: Option<usize>,
) -> anyhow::Result<()> {
    debug!(file = ?args.file, "executing analyze command");

    let (label, content) = match args.file {
        Some(ref path) if path.as_str() != "-" => {
            (path.to_string(), read_input_file(path, max_input_bytes)?)
        }
        _ => (
            "stdin".to_string(),
            read_input_stream(std::io::stdin().lock(), max_input_bytes)?,
        ),
    };

    if !analysis::has_content(&content) {
        eprintln!("{} {label} is blank; nothing to analyze", "note:".yellow());
        return Ok(());
    }

    let report = analysis::analyze(&content);

    let mut out = std::io::stdout().lock();
    if global_json {
        writeln!(out, "{}", serde_json::to_string_pretty(&report)?)?;
    } else {
        write_report(&mut out, &report)
            .with_context(|| format!("failed to print report for {label}"))?;
    }

    Ok(())
}

/// Render a report as the human-readable results block.
pub fn write_report<W: Write>(out: &mut W, report: &AnalysisReport) -> std::io::Result<()> {
    writeln!(out, "{}", "Analysis Results".bold().underline())?;
    let rows = [
        ("Total characters", report.character_count),
        ("Total words", report.word_count),
        ("Total sentences", report.sentence_count),
        ("Words repeated twice", report.single_repeat_count),
        ("Words repeated three times", report.double_repeat_count),
        ("Words repeated four times", report.triple_repeat_count),
    ];
    for (label, value) in rows {
        writeln!(out, "  {:<28}{}", format!("{label}:").cyan(), value)?;
    }
    Ok(())
}
