//! Environment overrides layered on top of the file config.

use figment::providers::Env;

use crate::domain::Config;

pub const ENV_PREFIX: &str = "SCHOOL_DOCS_";

/// Keys read from `SCHOOL_DOCS_*` variables.
///
/// Values are taken verbatim, so a digits-only key or a name with a leading
/// zero stays a string. Empty values are ignored.
#[derive(Debug, Default, PartialEq, Eq)]
pub struct EnvOverrides {
    pub school_name: Option<String>,
    pub teacher: Option<String>,
    pub gemini_api_key: Option<String>,
    pub openai_api_key: Option<String>,
}

impl EnvOverrides {
    pub fn from_env() -> Self {
        Self::from_provider(&Env::prefixed(ENV_PREFIX))
    }

    fn from_provider(env: &Env) -> Self {
        let mut overrides = Self::default();
        for (key, value) in env.iter() {
            if value.trim().is_empty() {
                continue;
            }
            let slot = match key.as_str().to_ascii_lowercase().as_str() {
                "school_name" => &mut overrides.school_name,
                "teacher" => &mut overrides.teacher,
                "gemini_api_key" => &mut overrides.gemini_api_key,
                "openai_api_key" => &mut overrides.openai_api_key,
                other => {
                    tracing::debug!("Ignoring unknown environment override {}{}", ENV_PREFIX, other);
                    continue;
                }
            };
            *slot = Some(value);
        }
        overrides
    }

    pub fn apply(self, config: &mut Config) {
        if let Some(name) = self.school_name {
            config.school_name = name;
        }
        if let Some(teacher) = self.teacher {
            config.teacher = Some(teacher);
        }
        if let Some(key) = self.gemini_api_key {
            config.gemini.api_key = Some(key);
        }
        if let Some(key) = self.openai_api_key {
            config.openai.api_key = Some(key);
        }
    }
}

pub fn apply_env_overrides(config: &mut Config) {
    EnvOverrides::from_env().apply(config);
}
