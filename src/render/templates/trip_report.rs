//! 교외체험학습 결과보고서 (trip result report).

use crate::domain::TripReport;
use crate::render::common::{
    esc, esc_or, escape_html, format_date, multiline, school_master_line, signature_or,
};
use crate::render::RenderContext;

fn evidence_image(src: Option<&str>, caption: &str) -> String {
    match src.filter(|s| !s.is_empty()) {
        Some(src) => format!(
            r#"<div style="text-align:center;"><img src="{}" style="max-width: 200px; max-height: 150px; border:1px solid #ccc; display:block; margin:0 auto;"><span style="font-size:11px;">{}</span></div>"#,
            escape_html(src),
            caption
        ),
        None => String::new(),
    }
}

pub fn render_trip_report(doc: &TripReport, ctx: &RenderContext) -> String {
    let student = &doc.student;
    let evidence = [
        evidence_image(doc.photo1.as_deref(), "사진1"),
        evidence_image(doc.photo2.as_deref(), "사진2"),
        evidence_image(doc.ticket.as_deref(), "티켓"),
    ]
    .concat();

    format!(
        r#"
    <div class="page">
      <div class="top-header-area" style="justify-content: center; margin-bottom: 40px;">
        <h1 class="main-title-left" style="width: 100%; text-align: center; font-size:32px;">교외체험학습 결과보고서</h1>
      </div>

      <table class="main-table">
        <colgroup><col width="15%"><col width="35%"><col width="15%"><col width="35%"></colgroup>
        <tbody>
          <tr>
            <th>성 명</th><td>{name}</td>
            <th>학년/반/번</th><td>{grade}학년 {class_num}반 {number}번</td>
          </tr>
          <tr>
            <th>기 간</th>
            <td colspan="3">{period}</td>
          </tr>
          <tr>
            <th>장 소</th>
            <td>{destination}</td>
            <th>학습형태</th>
            <td>{learning_type}</td>
          </tr>
          <tr>
            <th>제 목</th>
            <td colspan="3">{title}</td>
          </tr>
          <tr>
            <th style="height: 200px;">내 용</th>
            <td colspan="3" style="vertical-align: top; padding: 10px;">
              {content}
            </td>
          </tr>
          <tr>
            <th>사진자료<br>(증빙)</th>
            <td colspan="3" style="padding: 10px;">
              <div style="display: flex; gap: 10px; justify-content: center; align-items: flex-start; flex-wrap: wrap;">
                {evidence}
              </div>
            </td>
          </tr>
        </tbody>
      </table>

      <div class="signature-section" style="margin-top: 50px;">
        <div class="declaration">
          위와 같이 교외체험학습 결과보고서를 제출합니다.
        </div>
        <div class="date-center" style="margin-top: 40px;">{date_str}</div>
        <div class="signatures" style="flex-direction: column; align-items: center; gap: 15px;">
          <div class="sig-row">
            <span class="role">학 생 :</span><span class="name">{name}</span>
            {student_sig}
          </div>
          <div class="sig-row">
            <span class="role">보호자 :</span><span class="name">{chaperone}</span>
            {parent_sig}
          </div>
        </div>
        <div class="school-master" style="margin-top: 60px;">{school_master}</div>
      </div>
    </div>
"#,
        name = esc(student.name.as_deref()),
        grade = esc(student.grade.as_deref()),
        class_num = esc(student.class_num.as_deref()),
        number = esc(student.number.as_deref()),
        period = esc(doc.period.as_deref()),
        destination = esc(doc.destination.as_deref()),
        learning_type = esc_or(doc.learning_type.as_deref(), "체험학습"),
        title = esc(doc.title.as_deref()),
        content = multiline(doc.content.as_deref()),
        evidence = evidence,
        date_str = format_date(doc.created_at.as_deref()),
        student_sig = signature_or(doc.student_sign.as_deref(), "(인)"),
        chaperone = esc(doc.chaperone.as_deref()),
        parent_sig = signature_or(doc.parent_sign.as_deref(), "(인)"),
        school_master = school_master_line(&ctx.school_name),
    )
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::TeacherInfo;
    use chrono::NaiveDate;

    fn ctx() -> RenderContext {
        RenderContext {
            teacher: TeacherInfo::default(),
            approval_line: Vec::new(),
            school_name: "가람고등학교".to_string(),
            today: NaiveDate::from_ymd_opt(2025, 5, 7).expect("date"),
        }
    }

    #[test]
    fn content_lines_become_breaks() {
        let doc = TripReport {
            title: Some("경주 역사 탐방".to_string()),
            content: Some("첫째 날: 불국사\n둘째 날: 첨성대".to_string()),
            period: Some("2025.05.01 ~ 2025.05.02".to_string()),
            ..TripReport::default()
        };
        let html = render_trip_report(&doc, &ctx());
        assert!(html.contains("첫째 날: 불국사<br>둘째 날: 첨성대"));
        assert!(html.contains("<td colspan=\"3\">2025.05.01 ~ 2025.05.02</td>"));
        assert!(html.contains("<td>체험학습</td>"));
        assert!(html.contains("가람고등학교장 귀하"));
    }

    #[test]
    fn only_present_images_are_rendered() {
        let doc = TripReport {
            photo1: Some("data:image/jpeg;base64,AAA".to_string()),
            ticket: Some("data:image/jpeg;base64,BBB".to_string()),
            ..TripReport::default()
        };
        let html = render_trip_report(&doc, &ctx());
        assert!(html.contains("사진1"));
        assert!(!html.contains("사진2"));
        assert!(html.contains("티켓"));
        assert_eq!(html.matches("<img ").count(), 2);
    }
}
