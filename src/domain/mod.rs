//! Core domain types

pub mod config;
pub mod document;
mod scalar;

pub use config::{Config, ProviderSettings};
pub use document::{
    AbsencePeriod, AbsenceReport, ApprovalStep, Document, DocumentKind, Guardian, Signatures,
    Student, TeacherCheck, TeacherInfo, TripApplication, TripPeriod, TripPlan, TripReport,
};
