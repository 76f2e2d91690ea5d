//! Render command: write a print-ready HTML page for a saved document

use anyhow::{Context, Result};
use clap::Args;
use std::fs;
use std::path::PathBuf;

use super::check::print_table;
use super::utils::load_document;
use crate::bytes::check_fields;
use crate::config::{resolve_config, CliOverrides};
use crate::render::{file_name, render_page, safe_file_stem, PageOptions, RenderContext};

#[derive(Args)]
pub struct RenderArgs {
    /// Document file (JSON or YAML)
    #[arg(value_name = "DOC")]
    pub document: PathBuf,

    /// Path to config file (school-docs.toml or .yml)
    #[arg(short = 'c', long, value_name = "FILE")]
    pub config: Option<PathBuf>,

    /// Homeroom teacher name (overrides config)
    #[arg(long, value_name = "NAME")]
    pub teacher: Option<String>,

    /// School name used in the closing line (overrides config)
    #[arg(long, value_name = "NAME")]
    pub school: Option<String>,

    /// Directory for the generated HTML file
    #[arg(short, long, value_name = "DIR", default_value = ".")]
    pub out_dir: PathBuf,

    /// Write the page to stdout instead of a file
    #[arg(long, conflicts_with = "out_dir")]
    pub stdout: bool,

    /// Leave out the script that opens the print dialog
    #[arg(long)]
    pub no_print_script: bool,

    /// Render even when a text field is over its byte limit
    #[arg(long)]
    pub skip_limits: bool,
}

pub fn run(args: RenderArgs) -> Result<()> {
    let cwd = std::env::current_dir()?;
    let overrides = CliOverrides {
        teacher: args.teacher.clone(),
        school_name: args.school.clone(),
        ..CliOverrides::default()
    };
    let config = resolve_config(&cwd, args.config.as_deref(), &overrides)?;
    let doc = load_document(&args.document)?;

    if !args.skip_limits {
        let reports = check_fields(doc.text_fields(), &config.limits);
        if reports.iter().any(|r| r.exceeded) {
            eprintln!("Byte limits exceeded:");
            print_table(&reports);
            anyhow::bail!("Refusing to render; shorten the fields or pass --skip-limits");
        }
    }

    let ctx = RenderContext::for_today(&config);
    let options = PageOptions { auto_print: !args.no_print_script };
    let html = render_page(&doc, &ctx, options);

    if args.stdout {
        print!("{}", html);
        return Ok(());
    }

    fs::create_dir_all(&args.out_dir)
        .with_context(|| format!("Failed creating output dir: {}", args.out_dir.display()))?;
    let out_path = args.out_dir.join(format!("{}.html", safe_file_stem(&file_name(&doc))));
    fs::write(&out_path, html)
        .with_context(|| format!("Failed writing {}", out_path.display()))?;

    tracing::info!("Rendered {} document", doc.kind());
    println!("{}", out_path.display());
    Ok(())
}
