//! School document records.
//!
//! Field names follow the camelCase keys of the web form exports so that a
//! saved submission can be rendered without conversion.

use serde::{Deserialize, Serialize};
use std::fmt;

use super::scalar::{first_filled, opt_string, opt_u32};

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum DocumentKind {
    Absence,
    Trip,
    TripReport,
}

impl DocumentKind {
    /// Title used for the saved file name.
    pub fn file_title(self) -> &'static str {
        match self {
            DocumentKind::Absence => "결석신고서",
            DocumentKind::Trip => "교외체험학습신청서및통보서",
            DocumentKind::TripReport => "교외체험학습보고서",
        }
    }

    /// Label used by the form system for the `type` field.
    pub fn label(self) -> &'static str {
        match self {
            DocumentKind::Absence => "결석신고서",
            DocumentKind::Trip => "체험학습",
            DocumentKind::TripReport => "결과보고서",
        }
    }
}

impl fmt::Display for DocumentKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let s = match self {
            DocumentKind::Absence => "absence",
            DocumentKind::Trip => "trip",
            DocumentKind::TripReport => "trip_report",
        };
        write!(f, "{}", s)
    }
}

#[derive(Debug, Clone, Deserialize)]
#[serde(tag = "type")]
pub enum Document {
    #[serde(rename = "absence", alias = "결석신고서")]
    Absence(AbsenceReport),
    #[serde(rename = "trip", alias = "체험학습")]
    Trip(TripApplication),
    #[serde(rename = "trip_report", alias = "결과보고서")]
    TripReport(TripReport),
}

impl Document {
    pub fn kind(&self) -> DocumentKind {
        match self {
            Document::Absence(_) => DocumentKind::Absence,
            Document::Trip(_) => DocumentKind::Trip,
            Document::TripReport(_) => DocumentKind::TripReport,
        }
    }

    pub fn student(&self) -> &Student {
        match self {
            Document::Absence(doc) => &doc.student,
            Document::Trip(doc) => &doc.student,
            Document::TripReport(doc) => &doc.student,
        }
    }

    /// Free-text fields subject to NEIS byte limits, keyed by limit name.
    pub fn text_fields(&self) -> Vec<(&'static str, Option<&str>)> {
        match self {
            Document::Absence(doc) => vec![
                ("reason", doc.reason.as_deref()),
                ("parent_opinion", doc.parent_opinion.as_deref()),
                ("absence_detail", doc.absence_detail.as_deref()),
            ],
            Document::Trip(doc) => vec![
                ("location", doc.plan.location.as_deref()),
                ("plan_detail", doc.plan.detail.as_deref()),
            ],
            Document::TripReport(doc) => vec![
                ("title", doc.title.as_deref()),
                ("destination", doc.destination.as_deref()),
                ("content", doc.content.as_deref()),
            ],
        }
    }
}

#[derive(Debug, Clone, Default, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Student {
    #[serde(default, deserialize_with = "opt_string")]
    pub grade: Option<String>,
    #[serde(default, alias = "class", deserialize_with = "opt_string")]
    pub class_num: Option<String>,
    #[serde(default, deserialize_with = "opt_string")]
    pub number: Option<String>,
    #[serde(default, alias = "studentName")]
    pub name: Option<String>,
}

impl Student {
    pub fn grade(&self) -> &str {
        self.grade.as_deref().unwrap_or("")
    }

    pub fn class_num(&self) -> &str {
        self.class_num.as_deref().unwrap_or("")
    }

    pub fn number(&self) -> &str {
        self.number.as_deref().unwrap_or("")
    }

    pub fn name(&self) -> &str {
        self.name.as_deref().unwrap_or("")
    }

    /// Fill each empty field from `fallback`.
    pub fn or(self, fallback: Student) -> Student {
        Student {
            grade: first_filled(self.grade, fallback.grade),
            class_num: first_filled(self.class_num, fallback.class_num),
            number: first_filled(self.number, fallback.number),
            name: first_filled(self.name, fallback.name),
        }
    }
}

#[derive(Debug, Clone, Default, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct AbsencePeriod {
    #[serde(default, alias = "startDate")]
    pub start: Option<String>,
    #[serde(default, alias = "endDate")]
    pub end: Option<String>,
    #[serde(default, deserialize_with = "opt_string")]
    pub days: Option<String>,
    #[serde(default, deserialize_with = "opt_string")]
    pub start_period: Option<String>,
    #[serde(default, deserialize_with = "opt_string")]
    pub end_period: Option<String>,
}

#[derive(Debug, Clone, Default, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Signatures {
    #[serde(default)]
    pub student_sig: Option<String>,
    #[serde(default)]
    pub parent_name: Option<String>,
    #[serde(default)]
    pub parent_sig: Option<String>,
}

#[derive(Debug, Clone, Default, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct TeacherCheck {
    /// 통화, 면담 or 기타
    #[serde(default)]
    pub method: Option<String>,
    #[serde(default)]
    pub method_detail: Option<String>,
    #[serde(default)]
    pub proof_type: Option<String>,
}

#[derive(Debug, Clone, Default, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct AbsenceReport {
    #[serde(flatten)]
    pub student: Student,
    #[serde(default, alias = "createdAt")]
    pub submitted_at: Option<String>,
    #[serde(default)]
    pub processed_at: Option<String>,
    #[serde(default)]
    pub absence_type: Option<String>,
    #[serde(default)]
    pub absence_detail: Option<String>,
    #[serde(default)]
    pub period: AbsencePeriod,
    /// `startDate`, `endDate` and `days` stored next to the student fields.
    #[serde(flatten)]
    pub top_level_period: AbsencePeriod,
    #[serde(default)]
    pub reason: Option<String>,
    #[serde(default)]
    pub parent_opinion: Option<String>,
    #[serde(default)]
    pub signatures: Signatures,
    #[serde(default)]
    pub teacher_check: TeacherCheck,
    #[serde(default)]
    pub teacher_name: Option<String>,
    #[serde(default)]
    pub teacher_signature: Option<String>,
}

impl AbsenceReport {
    /// The nested `period`, with gaps filled from the top-level fields.
    pub fn resolved_period(&self) -> AbsencePeriod {
        let nested = self.period.clone();
        let top = self.top_level_period.clone();
        AbsencePeriod {
            start: first_filled(nested.start, top.start),
            end: first_filled(nested.end, top.end),
            days: first_filled(nested.days, top.days),
            start_period: first_filled(nested.start_period, top.start_period),
            end_period: first_filled(nested.end_period, top.end_period),
        }
    }
}

#[derive(Debug, Clone, Default, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct TripPeriod {
    #[serde(default)]
    pub start_date: Option<String>,
    #[serde(default)]
    pub end_date: Option<String>,
    #[serde(default, deserialize_with = "opt_string")]
    pub total_days: Option<String>,
}

#[derive(Debug, Clone, Default, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct TripPlan {
    #[serde(default)]
    pub location: Option<String>,
    #[serde(default, rename = "type")]
    pub learning_type: Option<String>,
    #[serde(default)]
    pub type_detail: Option<String>,
    #[serde(default)]
    pub detail: Option<String>,
}

#[derive(Debug, Clone, Default, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Guardian {
    #[serde(default)]
    pub parent_name: Option<String>,
    #[serde(default)]
    pub parent_rel: Option<String>,
    #[serde(default)]
    pub parent_phone: Option<String>,
    #[serde(default)]
    pub guide_phone: Option<String>,
}

/// Field-trip application.
///
/// Exports come in two shapes: grouped under `student`, `period`, `plan` and
/// `guardian`, or flat with `name`, `startDate`, `location`, `reason` at the
/// top level. Both are merged here, grouped values first.
#[derive(Debug, Clone, Default, Deserialize)]
#[serde(from = "TripApplicationRecord")]
pub struct TripApplication {
    pub student: Student,
    pub created_at: Option<String>,
    pub period: TripPeriod,
    pub plan: TripPlan,
    pub guardian: Guardian,
    pub chaperone: Option<String>,
    pub student_sign: Option<String>,
    pub parent_sign: Option<String>,
    pub cumulative_domestic: Option<u32>,
    pub cumulative_overseas: Option<u32>,
    pub teacher_name: Option<String>,
    pub teacher_signature: Option<String>,
}

#[derive(Default, Deserialize)]
#[serde(rename_all = "camelCase")]
struct TripStudentRecord {
    #[serde(flatten)]
    student: Student,
    #[serde(default)]
    student_sign_image: Option<String>,
    #[serde(default)]
    student_sign: Option<String>,
}

#[derive(Default, Deserialize)]
#[serde(rename_all = "camelCase")]
struct GuardianRecord {
    #[serde(flatten)]
    guardian: Guardian,
    #[serde(default)]
    parent_sign_image: Option<String>,
    #[serde(default)]
    parent_sign: Option<String>,
}

#[derive(Deserialize)]
#[serde(rename_all = "camelCase")]
struct TripApplicationRecord {
    #[serde(default)]
    student: TripStudentRecord,
    #[serde(flatten)]
    top_level_student: Student,
    #[serde(default)]
    created_at: Option<String>,
    #[serde(default)]
    period: TripPeriod,
    #[serde(default)]
    start_date: Option<String>,
    #[serde(default)]
    end_date: Option<String>,
    #[serde(default, deserialize_with = "opt_string")]
    total_days: Option<String>,
    #[serde(default)]
    plan: TripPlan,
    #[serde(default)]
    location: Option<String>,
    #[serde(default)]
    learning_type: Option<String>,
    #[serde(default)]
    reason: Option<String>,
    #[serde(default)]
    guardian: GuardianRecord,
    #[serde(default)]
    chaperone: Option<String>,
    #[serde(default, alias = "studentSignImage")]
    student_sign: Option<String>,
    #[serde(default, alias = "parentSignImage")]
    parent_sign: Option<String>,
    #[serde(default, deserialize_with = "opt_u32")]
    cumulative_domestic: Option<u32>,
    #[serde(default, deserialize_with = "opt_u32")]
    cumulative_overseas: Option<u32>,
    #[serde(default)]
    teacher_name: Option<String>,
    #[serde(default)]
    teacher_signature: Option<String>,
}

impl From<TripApplicationRecord> for TripApplication {
    fn from(record: TripApplicationRecord) -> Self {
        let TripStudentRecord { student, student_sign_image, student_sign } = record.student;
        let GuardianRecord { guardian, parent_sign_image, parent_sign } = record.guardian;
        let period = TripPeriod {
            start_date: first_filled(record.period.start_date, record.start_date),
            end_date: first_filled(record.period.end_date, record.end_date),
            total_days: first_filled(record.period.total_days, record.total_days),
        };
        let plan = TripPlan {
            location: first_filled(record.plan.location, record.location),
            learning_type: first_filled(record.plan.learning_type, record.learning_type),
            type_detail: record.plan.type_detail,
            detail: first_filled(record.plan.detail, record.reason),
        };

        TripApplication {
            student: student.or(record.top_level_student),
            created_at: record.created_at,
            period,
            plan,
            guardian,
            chaperone: record.chaperone,
            student_sign: first_filled(first_filled(student_sign_image, student_sign), record.student_sign),
            parent_sign: first_filled(first_filled(parent_sign_image, parent_sign), record.parent_sign),
            cumulative_domestic: record.cumulative_domestic,
            cumulative_overseas: record.cumulative_overseas,
            teacher_name: record.teacher_name,
            teacher_signature: record.teacher_signature,
        }
    }
}

#[derive(Debug, Clone, Default, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct TripReport {
    #[serde(flatten)]
    pub student: Student,
    #[serde(default)]
    pub created_at: Option<String>,
    /// Free-form period text as entered on the report.
    #[serde(default)]
    pub period: Option<String>,
    #[serde(default)]
    pub destination: Option<String>,
    #[serde(default)]
    pub learning_type: Option<String>,
    #[serde(default)]
    pub title: Option<String>,
    #[serde(default)]
    pub content: Option<String>,
    #[serde(default)]
    pub photo1: Option<String>,
    #[serde(default)]
    pub photo2: Option<String>,
    #[serde(default)]
    pub ticket: Option<String>,
    #[serde(default)]
    pub chaperone: Option<String>,
    #[serde(default)]
    pub student_sign: Option<String>,
    #[serde(default)]
    pub parent_sign: Option<String>,
}

#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct TeacherInfo {
    #[serde(default)]
    pub name: String,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ApprovalStep {
    pub label: String,
    #[serde(default, alias = "final", alias = "is_final")]
    pub is_final: bool,
}

impl ApprovalStep {
    pub fn new(label: &str, is_final: bool) -> Self {
        Self { label: label.to_string(), is_final }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn parses_absence_with_numeric_fields() {
        let doc: Document = serde_json::from_str(
            r#"{
                "type": "결석신고서",
                "grade": 1, "classNum": 9, "number": 1, "name": "홍길동",
                "absenceType": "질병결석",
                "period": {"start": "2025-03-03", "end": "2025-03-04", "days": 2},
                "reason": "감기",
                "teacherCheck": {"method": "통화", "proofType": "투약봉지"}
            }"#,
        )
        .expect("parse absence");

        assert_eq!(doc.kind(), DocumentKind::Absence);
        assert_eq!(doc.student().grade(), "1");
        assert_eq!(doc.student().class_num(), "9");
        let Document::Absence(report) = doc else { panic!("expected absence") };
        assert_eq!(report.period.days.as_deref(), Some("2"));
        assert_eq!(report.teacher_check.method.as_deref(), Some("통화"));
    }

    #[test]
    fn accepts_legacy_student_aliases() {
        let doc: Document = serde_json::from_str(
            r#"{"type": "absence", "class": "3", "studentName": "김철수"}"#,
        )
        .expect("parse");
        assert_eq!(doc.student().class_num(), "3");
        assert_eq!(doc.student().name(), "김철수");
    }

    #[test]
    fn parses_trip_application_from_yaml() {
        let yaml = r#"
type: trip
student: { grade: 2, classNum: "03", number: 15, name: 이영희 }
period: { startDate: "2025-05-01", endDate: "2025-05-02", totalDays: 2 }
plan: { location: 경주, type: 가족여행, detail: 유적지 탐방 }
guardian: { parentName: 이부모, parentRel: 모 }
cumulativeDomestic: "4"
"#;
        let doc: Document = serde_yaml::from_str(yaml).expect("parse yaml");
        let Document::Trip(trip) = doc else { panic!("expected trip") };
        assert_eq!(trip.student.class_num(), "03");
        assert_eq!(trip.plan.learning_type.as_deref(), Some("가족여행"));
        assert_eq!(trip.cumulative_domestic, Some(4));
        assert_eq!(trip.cumulative_overseas, None);
    }

    #[test]
    fn flat_trip_application_fills_grouped_fields() {
        let doc: Document = serde_json::from_str(
            r#"{
                "type": "체험학습",
                "grade": "2", "classNum": "3", "number": "15", "name": "이영희",
                "startDate": "2025-05-01", "endDate": "2025-05-02", "totalDays": 2,
                "location": "경주", "learningType": "가족여행", "reason": "유적지 탐방",
                "chaperone": "이부모", "studentSign": "data:image/png;base64,AAA"
            }"#,
        )
        .expect("parse flat trip");

        assert_eq!(doc.student().name(), "이영희");
        assert_eq!(doc.student().number(), "15");
        let Document::Trip(trip) = doc else { panic!("expected trip") };
        assert_eq!(trip.period.start_date.as_deref(), Some("2025-05-01"));
        assert_eq!(trip.period.total_days.as_deref(), Some("2"));
        assert_eq!(trip.plan.location.as_deref(), Some("경주"));
        assert_eq!(trip.plan.learning_type.as_deref(), Some("가족여행"));
        assert_eq!(trip.plan.detail.as_deref(), Some("유적지 탐방"));
        assert_eq!(trip.chaperone.as_deref(), Some("이부모"));
        assert_eq!(trip.student_sign.as_deref(), Some("data:image/png;base64,AAA"));
    }

    #[test]
    fn grouped_trip_values_win_over_top_level() {
        let doc: Document = serde_json::from_str(
            r#"{
                "type": "trip",
                "name": "옛이름", "location": "부산",
                "student": {"name": "이영희", "studentSignImage": "data:sig"},
                "plan": {"location": "", "detail": "불국사"},
                "reason": "사용되지 않음"
            }"#,
        )
        .expect("parse");
        let Document::Trip(trip) = doc else { panic!("expected trip") };
        assert_eq!(trip.student.name(), "이영희");
        assert_eq!(trip.plan.location.as_deref(), Some("부산"));
        assert_eq!(trip.plan.detail.as_deref(), Some("불국사"));
        assert_eq!(trip.student_sign.as_deref(), Some("data:sig"));
    }

    #[test]
    fn absence_period_falls_back_to_top_level_dates() {
        let doc: Document = serde_json::from_str(
            r#"{"type": "absence", "startDate": "2025-03-03", "endDate": "2025-03-04", "days": 2}"#,
        )
        .expect("parse");
        let Document::Absence(report) = doc else { panic!("expected absence") };
        let period = report.resolved_period();
        assert_eq!(period.start.as_deref(), Some("2025-03-03"));
        assert_eq!(period.end.as_deref(), Some("2025-03-04"));
        assert_eq!(period.days.as_deref(), Some("2"));
    }

    #[test]
    fn rejects_unknown_type() {
        let result: Result<Document, _> = serde_json::from_str(r#"{"type": "memo"}"#);
        assert!(result.is_err());
    }

    #[test]
    fn text_fields_follow_document_kind() {
        let doc: Document = serde_json::from_str(
            r#"{"type": "trip_report", "title": "제목", "content": "내용\n둘째 줄"}"#,
        )
        .expect("parse");
        let names: Vec<&str> = doc.text_fields().iter().map(|(name, _)| *name).collect();
        assert_eq!(names, vec!["title", "destination", "content"]);
        assert_eq!(doc.text_fields()[2].1, Some("내용\n둘째 줄"));
    }

    #[test]
    fn approval_step_accepts_final_alias() {
        let step: ApprovalStep =
            serde_json::from_str(r#"{"label": "교장", "final": true}"#).expect("parse");
        assert!(step.is_final);
        let step: ApprovalStep = serde_json::from_str(r#"{"label": "담임"}"#).expect("parse");
        assert!(!step.is_final);
    }
}
