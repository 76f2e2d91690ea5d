//! Per-document HTML fragments

pub mod absence;
pub mod trip;
pub mod trip_report;

pub use absence::render_absence;
pub use trip::{render_trip_application, render_trip_notification};
pub use trip_report::render_trip_report;
