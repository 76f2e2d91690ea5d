//! Shared template helpers: escaping, dates, check marks, the approval table
//! and the print stylesheet.

use chrono::{DateTime, Datelike, Local, NaiveDate, NaiveDateTime};

use crate::domain::ApprovalStep;

pub const CHECKED: &str = "&#9745;";
pub const UNCHECKED: &str = "&#9744;";

/// Escape text for HTML body and attribute context.
pub fn escape_html(text: &str) -> String {
    let mut out = String::with_capacity(text.len());
    for ch in text.chars() {
        match ch {
            '&' => out.push_str("&amp;"),
            '<' => out.push_str("&lt;"),
            '>' => out.push_str("&gt;"),
            '"' => out.push_str("&quot;"),
            '\'' => out.push_str("&#39;"),
            _ => out.push(ch),
        }
    }
    out
}

/// Escape an optional value, rendering absent as empty.
pub fn esc(value: Option<&str>) -> String {
    value.map(escape_html).unwrap_or_default()
}

/// Escape an optional value, substituting `fallback` when absent or empty.
pub fn esc_or(value: Option<&str>, fallback: &str) -> String {
    match value {
        Some(v) if !v.is_empty() => escape_html(v),
        _ => escape_html(fallback),
    }
}

/// Escape and turn line feeds into `<br>`.
pub fn multiline(value: Option<&str>) -> String {
    esc(value).replace("\r\n", "\n").replace('\n', "<br>")
}

pub fn format_korean_date(date: NaiveDate) -> String {
    format!("{}년 {}월 {}일", date.year(), date.month(), date.day())
}

/// Render a stored date as `YYYY년 M월 D일`.
///
/// Accepts RFC 3339 timestamps (shown in local time), `YYYY-MM-DD` and
/// `YYYY-MM-DD HH:MM[:SS]`. Anything else is returned unchanged.
pub fn format_date(raw: Option<&str>) -> String {
    let Some(raw) = raw.map(str::trim).filter(|s| !s.is_empty()) else {
        return String::new();
    };

    if let Ok(ts) = DateTime::parse_from_rfc3339(raw) {
        return format_korean_date(ts.with_timezone(&Local).date_naive());
    }
    if let Ok(date) = NaiveDate::parse_from_str(raw, "%Y-%m-%d") {
        return format_korean_date(date);
    }
    for pattern in ["%Y-%m-%d %H:%M:%S", "%Y-%m-%d %H:%M", "%Y-%m-%dT%H:%M:%S", "%Y-%m-%dT%H:%M"] {
        if let Ok(dt) = NaiveDateTime::parse_from_str(raw, pattern) {
            return format_korean_date(dt.date());
        }
    }

    raw.to_string()
}

pub fn checkbox(checked: bool) -> &'static str {
    if checked {
        CHECKED
    } else {
        UNCHECKED
    }
}

pub fn checkbox_eq(value: Option<&str>, target: &str) -> &'static str {
    checkbox(value == Some(target))
}

/// `<img>` for a signature data URL, or the placeholder text.
pub fn signature_or(src: Option<&str>, placeholder: &str) -> String {
    match src {
        Some(src) if !src.is_empty() => {
            format!(r#"<img src="{}" class="sig-img-sm"/>"#, escape_html(src))
        }
        _ => placeholder.to_string(),
    }
}

pub fn default_approval_line() -> Vec<ApprovalStep> {
    vec![
        ApprovalStep::new("담임", false),
        ApprovalStep::new("부장", false),
        ApprovalStep::new("교감", false),
        ApprovalStep::new("교장", true),
    ]
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SanctionCells {
    pub header: String,
    pub body: String,
}

/// Build the approval-table header and stamp rows.
pub fn sanction_cells(approval_line: &[ApprovalStep]) -> SanctionCells {
    let fallback;
    let steps: &[ApprovalStep] = if approval_line.is_empty() {
        fallback = default_approval_line();
        fallback.as_slice()
    } else {
        approval_line
    };

    let mut header = String::new();
    let mut body = String::new();
    for step in steps {
        header.push_str(&format!(r#"<th class="sanction-role">{}</th>"#, escape_html(&step.label)));
        let mark = if step.is_final { r#"<span class="proxy-mark">전결</span>"# } else { "" };
        body.push_str(&format!(r#"<td class="stamp-box">{}</td>"#, mark));
    }
    SanctionCells { header, body }
}

/// Full approval table as placed in the page header.
pub fn sanction_table(approval_line: &[ApprovalStep]) -> String {
    let cells = sanction_cells(approval_line);
    format!(
        r#"<div class="sanction-wrapper">
          <table class="sanction-table">
            <tbody>
              <tr><th rowspan="2" class="sanction-title">결<br>재</th>{}</tr>
              <tr>{}</tr>
            </tbody>
          </table>
        </div>"#,
        cells.header, cells.body
    )
}

/// Closing line addressed to the head of school.
pub fn school_master_line(school_name: &str) -> String {
    format!("{}장 귀하", escape_html(school_name))
}

pub fn print_styles() -> &'static str {
    PRINT_STYLES
}

const PRINT_STYLES: &str = r#"
    @page { size: A4; margin: 0; }
    body { font-family: "Malgun Gothic", "Apple SD Gothic Neo", sans-serif; margin: 0; padding: 0; background: #52525b; }
    .page { background: white; width: 210mm; min-height: 297mm; padding: 20mm; margin: 0 auto 10px; box-sizing: border-box; position: relative; page-break-after: always; }
    .page:last-child { page-break-after: auto; margin-bottom: 0; }

    .top-header-area { display: flex; justify-content: space-between; align-items: center; margin-bottom: 25px; width: 100%; }
    .main-title-left {
      width: 55%;
      font-family: "바탕", "Batang", serif;
      font-size: 30px; font-weight: bold; text-decoration: underline; margin: 0;
      letter-spacing: 2px; text-underline-offset: 8px; text-align: center;
    }
    .sub-title-left { font-size: 20px; font-weight: bold; margin-bottom: 10px; margin-top: 20px; }

    .sanction-wrapper { width: 45%; display: flex; justify-content: flex-end; }
    .sanction-table { border-collapse: collapse; font-size: 12px; text-align: center; }
    .sanction-table th, .sanction-table td { border: 1px solid black; padding: 0; vertical-align: middle; }
    .sanction-title { width: 25px; background-color: #f3f4f6 !important; -webkit-print-color-adjust: exact; }
    .sanction-role { width: 70px; height: 25px; font-weight: normal; }
    .stamp-box { height: 60px; width: 70px; text-align: center; }
    .proxy-mark { font-weight: bold; font-family: serif; letter-spacing: 2px; }

    .main-table { width: 100%; border-collapse: collapse; font-size: 14px; margin-bottom: 10px; }
    .main-table th, .main-table td { border: 1px solid black; padding: 8px 10px; vertical-align: middle; }
    .main-table th { background-color: #f3f4f6 !important; text-align: center; font-weight: bold; -webkit-print-color-adjust: exact; }

    .sub-header-cell { background-color: #f3f4f6 !important; text-align: center; font-weight: bold; border-right: 1px solid black; -webkit-print-color-adjust: exact; }
    .sub-header-cell-sm { background-color: #f3f4f6 !important; text-align: center; font-size: 12px; border-right: 1px solid black; border-bottom: 1px solid black; -webkit-print-color-adjust: exact; }
    .check-cell-box { text-align: center; font-size: 16px; border-right: 1px solid black; }
    .check-cell-box:last-child { border-right: none; }
    .check-item { margin-right: 16px; }
    .check-grid-2 { display: grid; grid-template-columns: 1fr 1fr; gap: 4px; margin-top: 8px; }

    .signature-section { text-align: center; margin-top: 20px; }
    .declaration { font-size: 16px; margin-bottom: 20px; line-height: 1.6; }
    .date-center { font-size: 16px; margin-bottom: 20px; font-weight: bold; }
    .signatures { display: flex; justify-content: center; gap: 60px; }
    .sig-row { display: flex; align-items: center; font-size: 16px; margin-bottom: 5px; }
    .role { font-weight: bold; margin-right: 10px; }
    .name { font-weight: bold; text-decoration: underline; margin-right: 5px; font-size: 17px; }
    .sig-img-sm { height: 40px; margin-left: 5px; vertical-align: middle; }
    .school-master { font-size: 24px; font-weight: bold; margin-top: 30px; text-align: center; letter-spacing: 3px; }

    .footer-info { text-align: left; font-size: 12px; color: #555; line-height: 1.5; border-top: 2px solid #ddd; padding-top: 10px; margin-top: 20px; }
    hr.divider { border: 0; border-top: 1px dashed #aaa; margin: 30px 0; }

    @media print {
      body { background: none; }
      .page { margin: 0; width: 100%; height: 100%; box-shadow: none; page-break-after: always; }
      .page:last-child { page-break-after: avoid; }
    }
"#;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn escapes_markup() {
        assert_eq!(
            escape_html(r#"<b>"A&B"</b> it's"#),
            "&lt;b&gt;&quot;A&amp;B&quot;&lt;/b&gt; it&#39;s"
        );
        assert_eq!(escape_html("한글 그대로"), "한글 그대로");
    }

    #[test]
    fn multiline_breaks_after_escaping() {
        assert_eq!(multiline(Some("a<b\r\nc\nd")), "a&lt;b<br>c<br>d");
        assert_eq!(multiline(None), "");
    }

    #[test]
    fn format_date_variants() {
        assert_eq!(format_date(None), "");
        assert_eq!(format_date(Some("  ")), "");
        assert_eq!(format_date(Some("2025-03-05")), "2025년 3월 5일");
        assert_eq!(format_date(Some("2025-11-20 09:30")), "2025년 11월 20일");
        assert_eq!(format_date(Some("2025-03-05T03:00:00Z")), "2025년 3월 5일");
        assert_eq!(format_date(Some("3월 첫째 주")), "3월 첫째 주");
    }

    #[test]
    fn checkbox_marks() {
        assert_eq!(checkbox(true), CHECKED);
        assert_eq!(checkbox_eq(Some("통화"), "통화"), CHECKED);
        assert_eq!(checkbox_eq(Some("면담"), "통화"), UNCHECKED);
        assert_eq!(checkbox_eq(None, "통화"), UNCHECKED);
    }

    #[test]
    fn signature_falls_back_to_placeholder() {
        assert_eq!(signature_or(None, "(인)"), "(인)");
        assert_eq!(signature_or(Some(""), "(서명)"), "(서명)");
        assert_eq!(
            signature_or(Some("data:image/png;base64,AAA="), "(인)"),
            r#"<img src="data:image/png;base64,AAA=" class="sig-img-sm"/>"#
        );
    }

    #[test]
    fn default_sanction_line() {
        let cells = sanction_cells(&[]);
        insta::assert_snapshot!(cells.header, @r#"<th class="sanction-role">담임</th><th class="sanction-role">부장</th><th class="sanction-role">교감</th><th class="sanction-role">교장</th>"#);
        assert_eq!(cells.body.matches(r#"<td class="stamp-box">"#).count(), 4);
        assert!(cells.body.ends_with(r#"<td class="stamp-box"><span class="proxy-mark">전결</span></td>"#));
    }

    #[test]
    fn custom_sanction_line() {
        let line = vec![ApprovalStep::new("담임", false), ApprovalStep::new("교감", true)];
        let cells = sanction_cells(&line);
        assert_eq!(
            cells.header,
            r#"<th class="sanction-role">담임</th><th class="sanction-role">교감</th>"#
        );
        assert_eq!(
            cells.body,
            r#"<td class="stamp-box"></td><td class="stamp-box"><span class="proxy-mark">전결</span></td>"#
        );
    }

    #[test]
    fn school_master_line_uses_school_name() {
        assert_eq!(school_master_line("상당고등학교"), "상당고등학교장 귀하");
    }
}
