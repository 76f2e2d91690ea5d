//! Bytes command: measure text the way NEIS does

use anyhow::Result;
use clap::Args;
use serde::Serialize;
use std::path::PathBuf;

use super::utils::read_text_input;
use crate::bytes::{check_limit, estimate_str_bytes, LimitReport};
use crate::config::load_config;

#[derive(Args)]
pub struct BytesArgs {
    /// Text to measure (reads --file or stdin when omitted)
    #[arg(value_name = "TEXT")]
    pub text: Option<String>,

    /// Read the text from this file
    #[arg(short, long, value_name = "FILE", conflicts_with = "text")]
    pub file: Option<PathBuf>,

    /// Fail when the text exceeds this many bytes
    #[arg(short, long, value_name = "BYTES", conflicts_with = "field")]
    pub limit: Option<usize>,

    /// Use the configured limit for this field (e.g. reason, content)
    #[arg(long, value_name = "NAME")]
    pub field: Option<String>,

    /// Path to config file (school-docs.toml or .yml)
    #[arg(short = 'c', long, value_name = "FILE")]
    pub config: Option<PathBuf>,

    /// Print the result as JSON
    #[arg(long)]
    pub json: bool,
}

#[derive(Serialize)]
struct BytesOutput {
    chars: usize,
    bytes: usize,
    #[serde(skip_serializing_if = "Option::is_none")]
    field: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    limit: Option<LimitReport>,
}

pub fn run(args: BytesArgs) -> Result<()> {
    let text = read_text_input(args.text.as_deref(), args.file.as_deref())?;

    let max_bytes = match (&args.field, args.limit) {
        (Some(field), _) => {
            let cwd = std::env::current_dir()?;
            let config = load_config(&cwd, args.config.as_deref())?;
            match config.limits.get(field) {
                Some(max) => Some(*max),
                None => anyhow::bail!("No byte limit configured for field '{}'", field),
            }
        }
        (None, limit) => limit,
    };

    let output = BytesOutput {
        chars: text.chars().count(),
        bytes: estimate_str_bytes(&text),
        field: args.field.clone(),
        limit: max_bytes.map(|max| check_limit(Some(&text), max)),
    };

    if args.json {
        println!("{}", serde_json::to_string_pretty(&output)?);
    } else {
        print_summary(&output);
    }

    if let Some(report) = output.limit.filter(|r| r.exceeded) {
        anyhow::bail!(
            "Text is {} bytes, over the {}-byte limit by {}",
            report.bytes,
            report.max_bytes,
            report.bytes - report.max_bytes
        );
    }
    Ok(())
}

fn print_summary(output: &BytesOutput) {
    println!("Characters: {}", output.chars);
    println!("Bytes: {}", output.bytes);
    if let Some(report) = &output.limit {
        let label = output.field.as_deref().map(|f| format!(" ({})", f)).unwrap_or_default();
        println!("Limit{}: {}", label, report.max_bytes);
        println!("Remaining: {}", report.remaining);
        println!("Status: {}", if report.exceeded { "EXCEEDED" } else { "OK" });
    }
}
