//! school-docs: render school administrative documents (absence reports,
//! field-trip applications and reports) as printable HTML, count text the
//! way the NEIS records system does, and call the Gemini and GPT text
//! generators.

pub mod bytes;
pub mod cli;
pub mod config;
pub mod domain;
pub mod generate;
pub mod render;

pub use bytes::{estimate_bytes, estimate_str_bytes};
