//! Printable document rendering (HTML templates, page assembly, file names)

use chrono::{Local, NaiveDate};

use crate::domain::{ApprovalStep, Config, Document, TeacherInfo};

pub mod common;
pub mod file_name;
pub mod page;
pub mod templates;

pub use file_name::{file_name, safe_file_stem};
pub use page::{render_page, PageOptions};

/// Everything a template needs besides the document itself.
#[derive(Debug, Clone)]
pub struct RenderContext {
    pub teacher: TeacherInfo,
    pub approval_line: Vec<ApprovalStep>,
    pub school_name: String,
    /// Date printed where the document has no processing date.
    pub today: NaiveDate,
}

impl RenderContext {
    pub fn from_config(config: &Config, today: NaiveDate) -> Self {
        Self {
            teacher: TeacherInfo { name: config.teacher.clone().unwrap_or_default() },
            approval_line: config.approval_line.clone(),
            school_name: config.school_name.clone(),
            today,
        }
    }

    pub fn for_today(config: &Config) -> Self {
        Self::from_config(config, Local::now().date_naive())
    }
}

/// Body HTML for a document. A trip renders the application followed by the
/// notification page.
pub fn render_document(doc: &Document, ctx: &RenderContext) -> String {
    match doc {
        Document::Absence(report) => templates::render_absence(report, ctx),
        Document::Trip(application) => {
            let mut html = templates::render_trip_application(application, ctx);
            html.push_str(&templates::render_trip_notification(application, ctx));
            html
        }
        Document::TripReport(report) => templates::render_trip_report(report, ctx),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn context_from_config() {
        let config = Config {
            teacher: Some("김담임".to_string()),
            approval_line: vec![ApprovalStep::new("교감", true)],
            ..Config::default()
        };
        let today = NaiveDate::from_ymd_opt(2025, 1, 2).expect("date");
        let ctx = RenderContext::from_config(&config, today);
        assert_eq!(ctx.teacher.name, "김담임");
        assert_eq!(ctx.approval_line.len(), 1);
        assert_eq!(ctx.school_name, config.school_name);
        assert_eq!(ctx.today, today);
    }

    #[test]
    fn absence_uses_configured_approval_line() {
        let config = Config {
            approval_line: vec![ApprovalStep::new("담임", false), ApprovalStep::new("교감", true)],
            ..Config::default()
        };
        let ctx = RenderContext::from_config(&config, NaiveDate::from_ymd_opt(2025, 1, 2).expect("date"));
        let doc: Document = serde_json::from_str(r#"{"type":"absence"}"#).expect("parse");
        let html = render_document(&doc, &ctx);
        assert!(html.contains(r#"<th class="sanction-role">교감</th>"#));
        assert!(!html.contains(r#"<th class="sanction-role">부장</th>"#));
    }
}
