//! Generate command: call Gemini or GPT with a prompt

use anyhow::{Context, Result};
use clap::Args;
use std::path::PathBuf;

use super::utils::read_text_input;
use crate::bytes::estimate_str_bytes;
use crate::config::{resolve_config, CliOverrides};
use crate::generate::{build_generator, generate_text, Provider};

#[derive(Args)]
pub struct GenerateArgs {
    /// Provider to call
    #[arg(short, long, value_enum)]
    pub provider: Provider,

    /// Prompt text (reads --prompt-file or stdin when omitted)
    #[arg(value_name = "PROMPT")]
    pub prompt: Option<String>,

    /// Read the prompt from this file
    #[arg(long, value_name = "FILE", conflicts_with = "prompt")]
    pub prompt_file: Option<PathBuf>,

    /// Model name (overrides config)
    #[arg(short, long, value_name = "MODEL")]
    pub model: Option<String>,

    /// API key (overrides environment and config)
    #[arg(long, value_name = "KEY")]
    pub api_key: Option<String>,

    /// Path to config file (school-docs.toml or .yml)
    #[arg(short = 'c', long, value_name = "FILE")]
    pub config: Option<PathBuf>,
}

pub fn run(args: GenerateArgs) -> Result<()> {
    let prompt = read_text_input(args.prompt.as_deref(), args.prompt_file.as_deref())?;

    let cwd = std::env::current_dir()?;
    let overrides = match args.provider {
        Provider::Gemini => CliOverrides { gemini_model: args.model.clone(), ..CliOverrides::default() },
        Provider::Gpt => CliOverrides { openai_model: args.model.clone(), ..CliOverrides::default() },
    };
    let config = resolve_config(&cwd, args.config.as_deref(), &overrides)?;

    let settings = match args.provider {
        Provider::Gemini => &config.gemini,
        Provider::Gpt => &config.openai,
    };
    // Flag, then SCHOOL_DOCS_*_API_KEY (already merged into config), then config file
    let api_key = args.api_key.as_deref().or(settings.api_key.as_deref()).unwrap_or("");

    let generator = build_generator(args.provider, settings, api_key);
    let text = generate_text(generator.as_ref(), &prompt)
        .with_context(|| format!("{} 응답을 불러오는데 실패했습니다.", args.provider))?;

    println!("{}", text);
    eprintln!("({} bytes)", estimate_str_bytes(&text));
    Ok(())
}
