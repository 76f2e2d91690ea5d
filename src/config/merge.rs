//! Merge CLI flags into the loaded config (CLI > Env > File > Defaults).

use crate::domain::Config;

#[derive(Debug, Default, Clone)]
pub struct CliOverrides {
    pub school_name: Option<String>,
    pub teacher: Option<String>,
    pub gemini_model: Option<String>,
    pub openai_model: Option<String>,
}

pub fn merge_cli_with_config(mut config: Config, cli: &CliOverrides) -> Config {
    if let Some(name) = &cli.school_name {
        config.school_name = name.clone();
    }
    if let Some(teacher) = &cli.teacher {
        config.teacher = Some(teacher.clone());
    }
    if let Some(model) = &cli.gemini_model {
        config.gemini.model = Some(model.clone());
    }
    if let Some(model) = &cli.openai_model {
        config.openai.model = Some(model.clone());
    }
    config
}
