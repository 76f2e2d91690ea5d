//! Byte-limit checks for form fields

use serde::Serialize;
use std::collections::BTreeMap;

use super::estimator::{char_cost, estimate_bytes};

/// Maximum NEIS byte size of one named field.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct ByteLimit<'a> {
    pub field: &'a str,
    pub max_bytes: usize,
}

impl<'a> ByteLimit<'a> {
    pub const fn new(field: &'a str, max_bytes: usize) -> Self {
        Self { field, max_bytes }
    }

    pub fn check(&self, text: Option<&str>) -> LimitReport {
        check_limit(text, self.max_bytes)
    }
}

/// Field limits used when configuration does not override them.
pub const DEFAULT_LIMITS: &[ByteLimit<'static>] = &[
    ByteLimit::new("reason", 1500),
    ByteLimit::new("parent_opinion", 500),
    ByteLimit::new("plan_detail", 1500),
    ByteLimit::new("content", 1500),
    ByteLimit::new("title", 300),
];

pub fn default_limits() -> BTreeMap<String, usize> {
    DEFAULT_LIMITS.iter().map(|limit| (limit.field.to_string(), limit.max_bytes)).collect()
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct LimitReport {
    pub bytes: usize,
    pub max_bytes: usize,
    pub remaining: usize,
    pub exceeded: bool,
}

/// Measure `text` against `max_bytes`. A text exactly at the limit passes.
pub fn check_limit(text: Option<&str>, max_bytes: usize) -> LimitReport {
    let bytes = estimate_bytes(text);
    LimitReport {
        bytes,
        max_bytes,
        remaining: max_bytes.saturating_sub(bytes),
        exceeded: bytes > max_bytes,
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct FieldReport {
    pub field: String,
    pub bytes: usize,
    pub max_bytes: Option<usize>,
    pub exceeded: bool,
}

/// Check every named field against `limits`. Fields with no configured limit
/// are still measured but never exceed.
pub fn check_fields<'a, 'b, I>(fields: I, limits: &BTreeMap<String, usize>) -> Vec<FieldReport>
where
    I: IntoIterator<Item = (&'a str, Option<&'b str>)>,
{
    fields
        .into_iter()
        .map(|(field, text)| match limits.get(field) {
            Some(&max) => {
                let limit = ByteLimit::new(field, max);
                let report = limit.check(text);
                FieldReport {
                    field: field.to_string(),
                    bytes: report.bytes,
                    max_bytes: Some(limit.max_bytes),
                    exceeded: report.exceeded,
                }
            }
            None => FieldReport {
                field: field.to_string(),
                bytes: estimate_bytes(text),
                max_bytes: None,
                exceeded: false,
            },
        })
        .collect()
}

/// Longest char-aligned prefix of `text` whose estimate fits in `max_bytes`.
pub fn truncate_to_bytes(text: &str, max_bytes: usize) -> &str {
    let mut used = 0;
    for (idx, ch) in text.char_indices() {
        let cost = char_cost(ch);
        if used + cost > max_bytes {
            return &text[..idx];
        }
        used += cost;
    }
    text
}
