//! `rolo` — check and explain contact-editor command lines.
//!
//! The binary plays the command layer's role around `rolo_core`: it splits
//! off the command word, dispatches the argument tail to the matching parser,
//! and reports either the parsed request (JSON) or the parse failure
//! (annotated pretty output or a JSON envelope).

mod render;

use std::fs;
use std::process;

use anyhow::{Context, Result, bail};
use clap::{Parser, Subcommand};
use rolo_core::parse::{add, delete, edit, tag};
use rolo_diagnostics::{Diagnostic, explain};
use serde_json::json;

use crate::render::{Format, render_diagnostic_pretty};

// ── CLI definition ──────────────────────────────────────────────────────

#[derive(Parser, Debug)]
#[command(
    name = "rolo",
    version,
    about = "rolo — parse, check, and explain contact-editor command lines"
)]
struct Cli {
    /// Output mode: "pretty" for coloured terminal output, "json" for
    /// machine-readable JSON. Defaults to "pretty" when stdout is a TTY,
    /// "json" otherwise.
    #[arg(long, global = true, value_parser = ["pretty", "json"])]
    output: Option<String>,

    #[command(subcommand)]
    cmd: Cmd,
}

#[derive(Subcommand, Debug)]
enum Cmd {
    /// Check a file of command lines (one per line), reporting each result.
    Check {
        /// File of command lines to check.
        #[arg(required_unless_present = "expr")]
        file: Option<String>,
        /// Check a single inline command line instead of a file.
        #[arg(long, short, conflicts_with = "file")]
        expr: Option<String>,
    },

    /// Explain a diagnostic ID (e.g. RLO1004).
    Explain {
        /// The diagnostic code to look up.
        id: String,
    },
}

// ── Main ────────────────────────────────────────────────────────────────

fn main() -> Result<()> {
    let cli = Cli::parse();
    let format = Format::resolve_or_detect(cli.output.as_deref());

    match cli.cmd {
        Cmd::Check { file, expr } => cmd_check(file.as_deref(), expr.as_deref(), format),
        Cmd::Explain { id } => {
            cmd_explain(&id, format);
            Ok(())
        }
    }
}

// ── check ───────────────────────────────────────────────────────────────

fn cmd_check(file: Option<&str>, expr: Option<&str>, format: Format) -> Result<()> {
    let source = match (expr, file) {
        (Some(line), _) => line.to_string(),
        (None, Some(path)) => {
            fs::read_to_string(path).with_context(|| format!("failed to read {path}"))?
        }
        (None, None) => bail!("provide a FILE or --expr"),
    };

    let mut failures = 0usize;
    for (idx, raw_line) in source.lines().enumerate() {
        let line = raw_line.trim();
        if line.is_empty() {
            continue;
        }
        match check_line(line).with_context(|| format!("line {}", idx + 1))? {
            Ok(value) => match format {
                Format::Pretty => println!("{}", serde_json::to_string_pretty(&value)?),
                Format::Json => println!("{}", serde_json::to_string(&value)?),
            },
            Err(diagnostic) => {
                failures += 1;
                report_failure(line, idx + 1, &diagnostic, format);
            }
        }
    }

    if failures > 0 {
        process::exit(1);
    }
    Ok(())
}

/// Split off the command word, dispatch the tail to its parser, and return
/// the parsed request as JSON or the parse diagnostic (with its span shifted
/// from tail-relative to line-relative offsets).
///
/// An unrecognized command word is a CLI-level error, not a parse
/// diagnostic — the parsers only ever see tails of commands they own.
fn check_line(line: &str) -> Result<std::result::Result<serde_json::Value, Diagnostic>> {
    let (word, args) = match line.split_once(char::is_whitespace) {
        Some((word, rest)) => (word, rest),
        None => (line, ""),
    };
    let offset = line.len() - args.len();

    let parsed = match word {
        "add" => add::parse(args).map(|r| json!({"command": "add", "request": r})),
        "edit" => edit::parse(args).map(|r| json!({"command": "edit", "request": r})),
        "tag" => tag::parse(args).map(|r| json!({"command": "tag", "request": r})),
        "delete" => delete::parse(args).map(|r| json!({"command": "delete", "request": r})),
        other => bail!("unknown command word '{other}' (expected add, edit, tag, or delete)"),
    };

    Ok(parsed.map_err(|e| shift_span(e.into_diagnostic(), offset)))
}

fn shift_span(mut diagnostic: Diagnostic, offset: usize) -> Diagnostic {
    if let Some(span) = diagnostic.span.as_mut() {
        span.start += offset;
        span.end += offset;
    }
    diagnostic
}

fn report_failure(line: &str, lineno: usize, diagnostic: &Diagnostic, format: Format) {
    match format {
        Format::Pretty => {
            render_diagnostic_pretty(line, &format!("line {lineno}"), diagnostic);
        }
        Format::Json => {
            let envelope = json!({
                "line": lineno,
                "input": line,
                "diagnostic": diagnostic,
            });
            println!("{envelope}");
        }
    }
}

// ── explain ─────────────────────────────────────────────────────────────

fn cmd_explain(id: &str, format: Format) {
    let explanation = explain(id);
    match format {
        Format::Json => println!("{}", json!({"id": id, "explanation": explanation})),
        Format::Pretty => match explanation {
            Some(text) => println!("{id}: {text}"),
            None => println!("{id}: no explanation available"),
        },
    }
}
