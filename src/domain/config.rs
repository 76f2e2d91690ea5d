//! Tool configuration

use serde::{Deserialize, Deserializer, Serialize};
use std::collections::BTreeMap;

use super::document::ApprovalStep;
use crate::bytes::default_limits;

pub const DEFAULT_SCHOOL_NAME: &str = "상당고등학교";

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct Config {
    pub school_name: String,
    /// Homeroom teacher used when a document does not name one.
    pub teacher: Option<String>,
    pub approval_line: Vec<ApprovalStep>,
    /// Maximum NEIS bytes per text field.
    #[serde(deserialize_with = "merge_limits")]
    pub limits: BTreeMap<String, usize>,
    pub gemini: ProviderSettings,
    pub openai: ProviderSettings,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            school_name: DEFAULT_SCHOOL_NAME.to_string(),
            teacher: None,
            approval_line: Vec::new(),
            limits: default_limits(),
            gemini: ProviderSettings::default(),
            openai: ProviderSettings::default(),
        }
    }
}

/// Per-provider overrides. Unset fields fall back to the provider defaults.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct ProviderSettings {
    pub model: Option<String>,
    pub base_url: Option<String>,
    pub timeout_secs: Option<u64>,
    pub api_key: Option<String>,
}

/// Start from the default limits so a config file only lists what it changes.
fn merge_limits<'de, D>(deserializer: D) -> Result<BTreeMap<String, usize>, D::Error>
where
    D: Deserializer<'de>,
{
    let overrides = BTreeMap::<String, usize>::deserialize(deserializer)?;
    let mut limits = default_limits();
    limits.extend(overrides);
    Ok(limits)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn partial_limits_keep_defaults() {
        let cfg: Config = toml::from_str("[limits]\nreason = 900\nmemo = 10\n").expect("toml");
        assert_eq!(cfg.limits.get("reason"), Some(&900));
        assert_eq!(cfg.limits.get("memo"), Some(&10));
        assert_eq!(cfg.limits.get("parent_opinion"), Some(&500));
    }

    #[test]
    fn empty_config_is_default() {
        let cfg: Config = toml::from_str("").expect("toml");
        assert_eq!(cfg, Config::default());
        assert_eq!(cfg.school_name, DEFAULT_SCHOOL_NAME);
    }
}
