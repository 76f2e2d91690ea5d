//! Check command: validate every text field of a saved document

use anyhow::Result;
use clap::Args;
use std::path::PathBuf;

use super::utils::load_document;
use crate::bytes::{check_fields, FieldReport};
use crate::config::{resolve_config, CliOverrides};
use crate::render::file_name;

#[derive(Args)]
pub struct CheckArgs {
    /// Document file (JSON or YAML)
    #[arg(value_name = "DOC")]
    pub document: PathBuf,

    /// Path to config file (school-docs.toml or .yml)
    #[arg(short = 'c', long, value_name = "FILE")]
    pub config: Option<PathBuf>,

    /// Print the field reports as JSON
    #[arg(long)]
    pub json: bool,
}

pub fn run(args: CheckArgs) -> Result<()> {
    let cwd = std::env::current_dir()?;
    let config = resolve_config(&cwd, args.config.as_deref(), &CliOverrides::default())?;
    let doc = load_document(&args.document)?;

    let reports = check_fields(doc.text_fields(), &config.limits);

    if args.json {
        println!("{}", serde_json::to_string_pretty(&reports)?);
    } else {
        println!("Document: {}", file_name(&doc));
        print_table(&reports);
    }

    let exceeded: Vec<&str> =
        reports.iter().filter(|r| r.exceeded).map(|r| r.field.as_str()).collect();
    if !exceeded.is_empty() {
        anyhow::bail!("Byte limit exceeded: {}", exceeded.join(", "));
    }
    Ok(())
}

pub(crate) fn print_table(reports: &[FieldReport]) {
    let width = reports.iter().map(|r| r.field.len()).max().unwrap_or(5).max(5);
    println!("  {:<width$}  {:>6}  {:>6}  status", "field", "bytes", "limit", width = width);
    for r in reports {
        let limit = r.max_bytes.map(|m| m.to_string()).unwrap_or_else(|| "-".to_string());
        let status = if r.exceeded { "EXCEEDED" } else { "ok" };
        println!("  {:<width$}  {:>6}  {:>6}  {}", r.field, r.bytes, limit, status, width = width);
    }
}
