//! 교외체험학습 신청서 and the 통보서 sent back to the guardian.

use crate::domain::TripApplication;
use crate::render::common::{
    esc, escape_html, format_date, format_korean_date, multiline, school_master_line, signature_or,
};
use crate::render::RenderContext;

const GUARDIAN_NOTICES: [&str; 3] = [
    "결과보고서에 사진(체험학습 장소를 배경으로 보호자와 학생이 함께 있는 사진 포함) 등 증빙자료를 첨부해주십시오.",
    "연속 5일 이상 교외체험학습 시 주 1회 이상 담임교사와 통화하여 학생의 안전 및 건강을 확인해주십시오.",
    "교외체험학습 기간 중 안전사고 등 돌발상황 발생 시 즉시 학교로 연락해 주십시오.",
];

fn student_line(doc: &TripApplication) -> String {
    let s = &doc.student;
    format!(
        "{}학년 {}반 {}번",
        esc(s.grade.as_deref()),
        esc(s.class_num.as_deref()),
        esc(s.number.as_deref())
    )
}

fn period_range(doc: &TripApplication) -> String {
    format!("{} ~ {}", esc(doc.period.start_date.as_deref()), esc(doc.period.end_date.as_deref()))
}

pub fn render_trip_application(doc: &TripApplication, ctx: &RenderContext) -> String {
    let plan = &doc.plan;
    let guardian = &doc.guardian;
    let learning_type = plan.type_detail.as_deref().or(plan.learning_type.as_deref());
    let guide_phone = guardian.guide_phone.as_deref().or(guardian.parent_phone.as_deref());
    let companion = guardian
        .parent_name
        .as_deref()
        .filter(|name| !name.is_empty())
        .or(doc.chaperone.as_deref());

    format!(
        r#"
    <div class="page">
      <div class="top-header-area" style="justify-content: center; margin-bottom: 40px;">
        <h1 class="main-title-left" style="width: 100%; text-align: center; font-size:32px;">교외체험학습 신청서</h1>
      </div>

      <table class="main-table">
        <colgroup><col width="15%"><col width="35%"><col width="15%"><col width="35%"></colgroup>
        <tbody>
          <tr>
            <th>성 명</th><td>{name}</td>
            <th>학년/반/번</th><td>{student_line}</td>
          </tr>
          <tr>
            <th>기 간</th>
            <td colspan="3">{period} (총 {days}일간)</td>
          </tr>
          <tr>
            <th>장 소</th>
            <td colspan="3">{location}</td>
          </tr>
          <tr>
            <th>학습계획</th>
            <td colspan="3" style="height: 250px; vertical-align: top;">
              <div style="margin-bottom:8px;"><strong>[학습 형태]</strong> {learning_type}</div>
              <strong>[상세 내용]</strong><br>
              {detail}
            </td>
          </tr>
          <tr>
            <th>동반자</th>
            <td colspan="3">
              보호자: {companion} ({parent_rel}) <br>
              인솔자 연락처: {guide_phone}
            </td>
          </tr>
        </tbody>
      </table>

      <div class="signature-section" style="margin-top: 50px;">
        <div class="declaration">
          위와 같이 교외체험학습을 신청하오니 허가하여 주시기 바랍니다.
        </div>
        <div class="date-center" style="margin-top: 40px;">{date_str}</div>
        <div class="signatures" style="flex-direction: column; align-items: center; gap: 15px;">
          <div class="sig-row"><span class="role">신청인(학생) :</span><span class="name">{name}</span>{student_sig}</div>
          <div class="sig-row"><span class="role">보호자 :</span><span class="name">{parent_name}</span>{parent_sig}</div>
        </div>
        <div class="school-master" style="margin-top: 60px;">{school_master}</div>
      </div>
    </div>
"#,
        name = esc(doc.student.name.as_deref()),
        student_line = student_line(doc),
        period = period_range(doc),
        days = esc(doc.period.total_days.as_deref()),
        location = esc(plan.location.as_deref()),
        learning_type = esc(learning_type),
        detail = match plan.detail.as_deref().filter(|d| !d.is_empty()) {
            Some(detail) => multiline(Some(detail)),
            None => "(내용 없음)".to_string(),
        },
        companion = esc(companion),
        parent_name = esc(guardian.parent_name.as_deref()),
        parent_rel = esc(guardian.parent_rel.as_deref()),
        guide_phone = esc(guide_phone),
        date_str = format_date(doc.created_at.as_deref()),
        student_sig = signature_or(doc.student_sign.as_deref(), "(서명)"),
        parent_sig = signature_or(doc.parent_sign.as_deref(), "(서명)"),
        school_master = school_master_line(&ctx.school_name),
    )
}

pub fn render_trip_notification(doc: &TripApplication, ctx: &RenderContext) -> String {
    let teacher_name = escape_html(&ctx.teacher.name);
    let notices: String = GUARDIAN_NOTICES
        .iter()
        .enumerate()
        .map(|(i, notice)| format!("{}. {}<br>\n        ", i + 1, notice))
        .collect();

    format!(
        r#"
    <div class="page">
      <div style="height: 50px;"></div>
      <h1 class="main-title-left" style="width:100%; font-size:32px; text-align:center;">학교장허가 교외체험학습 통보서</h1>
      <div style="height: 50px;"></div>

      <table class="main-table">
        <colgroup><col width="20%"><col width="80%"></colgroup>
        <tbody>
          <tr>
            <th>성 명</th><td>{name}</td>
          </tr>
          <tr>
            <th>학년 / 반 / 번</th><td>{student_line}</td>
          </tr>
          <tr>
            <th>허가 기간</th>
            <td>{period} (총 {days}일)</td>
          </tr>
          <tr>
            <th>장 소</th>
            <td>{location}</td>
          </tr>
          <tr>
            <th>누적 사용일</th>
            <td>
              금회 포함 누적: <br>
              국내 <strong>{domestic}</strong>일 /
              국외 <strong>{overseas}</strong>일
            </td>
          </tr>
        </tbody>
      </table>

      <div style="text-align: center; margin: 80px 0; font-size: 20px; font-weight: bold; line-height: 2;">
        위와 같이 허가 처리되었음을 알려 드립니다.
      </div>

      <div class="date-center" style="font-size: 18px;">{today}</div>

      <div class="signature-section" style="text-align: right; margin-right: 40px; margin-top: 50px;">
        <div class="sig-row" style="justify-content: flex-end;">
          <span class="role">{grade}학년 {class_num}반 담임교사 :</span>
          <span class="name">{teacher_name}</span>
          {teacher_sig}
        </div>
      </div>

      <div class="school-master" style="margin-top: 80px; font-size: 24px;">
        보호자님 귀하
      </div>

      <div style="border-top: 2px solid #000; padding-top: 20px; margin-top: 50px; font-size: 14px; line-height: 1.8;">
        <strong>[안내사항]</strong><br>
        {notices}
      </div>
    </div>
"#,
        name = esc(doc.student.name.as_deref()),
        student_line = student_line(doc),
        period = period_range(doc),
        days = esc(doc.period.total_days.as_deref()),
        location = esc(doc.plan.location.as_deref()),
        domestic = doc.cumulative_domestic.unwrap_or(0),
        overseas = doc.cumulative_overseas.unwrap_or(0),
        today = format_korean_date(ctx.today),
        grade = esc(doc.student.grade.as_deref()),
        class_num = esc(doc.student.class_num.as_deref()),
        teacher_name = teacher_name,
        teacher_sig = signature_or(doc.teacher_signature.as_deref(), "(인)"),
        notices = notices.trim_end(),
    )
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::{Document, TeacherInfo};
    use chrono::NaiveDate;

    fn ctx() -> RenderContext {
        RenderContext {
            teacher: TeacherInfo { name: "박담임".to_string() },
            approval_line: Vec::new(),
            school_name: "상당고등학교".to_string(),
            today: NaiveDate::from_ymd_opt(2025, 4, 28).expect("date"),
        }
    }

    fn trip() -> TripApplication {
        let json = r#"{
            "type": "trip",
            "createdAt": "2025-04-25",
            "student": {"grade": 2, "classNum": 3, "number": 15, "name": "이영희"},
            "period": {"startDate": "2025-05-01", "endDate": "2025-05-02", "totalDays": 2},
            "plan": {"location": "경주", "type": "가족여행", "detail": "불국사 탐방\n석굴암 견학"},
            "guardian": {"parentName": "이부모", "parentRel": "모", "parentPhone": "010-1234-5678"},
            "cumulativeDomestic": 4
        }"#;
        match serde_json::from_str::<Document>(json).expect("parse") {
            Document::Trip(doc) => doc,
            other => panic!("unexpected kind {:?}", other.kind()),
        }
    }

    #[test]
    fn application_lists_plan_and_guardian() {
        let html = render_trip_application(&trip(), &ctx());
        assert!(html.contains("교외체험학습 신청서"));
        assert!(html.contains("2학년 3반 15번"));
        assert!(html.contains("2025-05-01 ~ 2025-05-02 (총 2일간)"));
        assert!(html.contains("<strong>[학습 형태]</strong> 가족여행"));
        assert!(html.contains("불국사 탐방<br>석굴암 견학"));
        assert!(html.contains("보호자: 이부모 (모)"));
        assert!(html.contains("인솔자 연락처: 010-1234-5678"));
        assert!(html.contains("2025년 4월 25일"));
        assert_eq!(html.matches("(서명)").count(), 2);
    }

    #[test]
    fn application_without_detail_uses_placeholder() {
        let mut doc = trip();
        doc.plan.detail = None;
        let html = render_trip_application(&doc, &ctx());
        assert!(html.contains("(내용 없음)"));
    }

    #[test]
    fn flat_layout_application_renders_every_field() {
        let json = r#"{
            "type": "체험학습",
            "grade": "2", "classNum": "3", "number": "15", "name": "이영희",
            "startDate": "2025-05-01", "endDate": "2025-05-02", "totalDays": "2",
            "location": "경주", "learningType": "가족여행", "reason": "유적지 탐방",
            "chaperone": "이부모"
        }"#;
        let Document::Trip(doc) = serde_json::from_str::<Document>(json).expect("parse") else {
            panic!("expected trip")
        };
        let html = render_trip_application(&doc, &ctx());
        assert!(html.contains("<th>성 명</th><td>이영희</td>"));
        assert!(html.contains("2학년 3반 15번"));
        assert!(html.contains("2025-05-01 ~ 2025-05-02 (총 2일간)"));
        assert!(html.contains("<td colspan=\"3\">경주</td>"));
        assert!(html.contains("<strong>[학습 형태]</strong> 가족여행"));
        assert!(html.contains("유적지 탐방"));
        assert!(html.contains("보호자: 이부모 ()"));
    }

    #[test]
    fn notification_uses_configured_teacher_only() {
        let mut doc = trip();
        doc.teacher_name = Some("다른교사".to_string());
        let html = render_trip_notification(&doc, &ctx());
        assert!(html.contains(r#"<span class="name">박담임</span>"#));
        assert!(!html.contains("다른교사"));
    }

    #[test]
    fn notification_shows_cumulative_days_and_teacher() {
        let html = render_trip_notification(&trip(), &ctx());
        assert!(html.contains("학교장허가 교외체험학습 통보서"));
        assert!(html.contains("(총 2일)"));
        assert!(html.contains("국내 <strong>4</strong>일"));
        assert!(html.contains("국외 <strong>0</strong>일"));
        assert!(html.contains("2025년 4월 28일"));
        assert!(html.contains("2학년 3반 담임교사 :"));
        assert!(html.contains(r#"<span class="name">박담임</span>"#));
        assert!(html.contains("3. 교외체험학습 기간 중"));
    }
}
