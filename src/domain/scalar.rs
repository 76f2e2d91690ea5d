//! Lenient scalar fields.
//!
//! Form exports store grades, class numbers and day counts either as JSON
//! numbers or as strings; both deserialize into `Option<String>`.

use serde::{Deserialize, Deserializer};

#[derive(Deserialize)]
#[serde(untagged)]
enum Scalar {
    Text(String),
    Int(i64),
    Float(f64),
    Bool(bool),
}

impl Scalar {
    fn into_string(self) -> String {
        match self {
            Scalar::Text(s) => s,
            Scalar::Int(n) => n.to_string(),
            Scalar::Float(f) => f.to_string(),
            Scalar::Bool(b) => b.to_string(),
        }
    }
}

pub fn opt_string<'de, D>(deserializer: D) -> Result<Option<String>, D::Error>
where
    D: Deserializer<'de>,
{
    let value = Option::<Scalar>::deserialize(deserializer)?;
    Ok(value.map(Scalar::into_string))
}

pub fn opt_u32<'de, D>(deserializer: D) -> Result<Option<u32>, D::Error>
where
    D: Deserializer<'de>,
{
    let value = Option::<Scalar>::deserialize(deserializer)?;
    match value {
        None => Ok(None),
        Some(Scalar::Int(n)) => u32::try_from(n).map(Some).map_err(serde::de::Error::custom),
        Some(Scalar::Text(s)) if s.trim().is_empty() => Ok(None),
        Some(Scalar::Text(s)) => s.trim().parse().map(Some).map_err(serde::de::Error::custom),
        Some(other) => Err(serde::de::Error::custom(format!(
            "expected a whole number, got {}",
            other.into_string()
        ))),
    }
}

/// `primary` unless it is missing or empty, otherwise `fallback`.
pub fn first_filled(primary: Option<String>, fallback: Option<String>) -> Option<String> {
    primary.filter(|value| !value.is_empty()).or(fallback)
}
