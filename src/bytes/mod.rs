//! NEIS byte accounting for text fields

pub mod estimator;
pub mod limits;

pub use estimator::{char_cost, estimate_bytes, estimate_str_bytes};
pub use limits::{
    check_fields, check_limit, default_limits, truncate_to_bytes, ByteLimit, FieldReport,
    LimitReport, DEFAULT_LIMITS,
};
