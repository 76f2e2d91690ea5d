//! 결석신고서 (absence report) with the homeroom confirmation section.

use crate::domain::AbsenceReport;
use crate::render::common::{
    checkbox, checkbox_eq, esc, esc_or, format_date, format_korean_date, sanction_table,
    school_master_line, signature_or,
};
use crate::render::RenderContext;

/// Absence categories in check-grid column order.
pub const ABSENCE_TYPES: [&str; 6] =
    ["질병결석", "기타결석", "경조사", "사회봉사", "법정감염병", "인정결석(생리통)"];

const CONTACT_METHODS: [(&str, &str); 2] = [("통화", "보호자와 통화 확인"), ("면담", "보호자 면담")];

const PROOF_TYPES: [(&str, &str); 6] = [
    ("병원진료영수증", "병원진료영수증"),
    ("투약봉지", "투약봉지"),
    ("병원처방전", "병원처방전"),
    ("의료기관 진단서/소견서", "의료기관의 진단서(소견서)"),
    ("PCR 결과 통보서", "PCR 결과 통보서"),
    ("증빙서류 없음", "증빙서류 없음"),
];

pub fn render_absence(doc: &AbsenceReport, ctx: &RenderContext) -> String {
    let date_str = format_date(doc.submitted_at.as_deref());
    let processed_str = match doc.processed_at.as_deref().filter(|s| !s.is_empty()) {
        Some(raw) => format_date(Some(raw)),
        None => format_korean_date(ctx.today),
    };

    let student = &doc.student;
    let name = esc(student.name.as_deref());
    let teacher_name = esc_or(doc.teacher_name.as_deref(), &ctx.teacher.name);
    let teacher_sign = signature_or(doc.teacher_signature.as_deref(), "(인)");
    let detail = esc_or(doc.absence_detail.as_deref(), "결석");

    let absence_type = doc.absence_type.as_deref();
    let type_checks: Vec<&str> =
        ABSENCE_TYPES.iter().map(|t| checkbox(absence_type == Some(*t))).collect();

    let period = doc.resolved_period();
    let class_periods = match period.start_period.as_deref().filter(|s| !s.is_empty()) {
        Some(start) => format!(
            "({}교시 ~ {}교시)",
            esc(Some(start)),
            esc(period.end_period.as_deref())
        ),
        None => String::new(),
    };

    let check = &doc.teacher_check;
    let method = check.method.as_deref();
    let mut method_items: String = CONTACT_METHODS
        .iter()
        .map(|(value, label)| {
            format!(r#"<span class="check-item">{} {}</span>"#, checkbox_eq(method, value), label)
        })
        .collect();
    let method_detail = if method == Some("기타") {
        format!("({})", esc(check.method_detail.as_deref()))
    } else {
        String::new()
    };
    method_items.push_str(&format!(
        r#"<span class="check-item">{} 기타 {}</span>"#,
        checkbox_eq(method, "기타"),
        method_detail
    ));

    let proof_items: String = PROOF_TYPES
        .iter()
        .map(|(value, label)| {
            format!("<span>{} {}</span>", checkbox_eq(check.proof_type.as_deref(), value), label)
        })
        .collect();

    let sigs = &doc.signatures;

    format!(
        r#"
    <div class="page">
      <div class="top-header-area">
        <h1 class="main-title-left">결 석 신 고 서</h1>
        {sanction}
      </div>

      <table class="main-table">
        <colgroup><col width="15%"><col width="35%"><col width="15%"><col width="35%"></colgroup>
        <tbody>
          <tr>
            <th>학년 / 반</th><td>{grade}학년 {class_num}반 {number}번</td>
            <th>성 명</th><td>{name}</td>
          </tr>
          <tr>
            <th>결석 기간</th>
            <td colspan="3">
              {start} ~ {end} (총 {days}일간)<br>
              {class_periods}
            </td>
          </tr>
          <tr>
            <th style="padding:0; vertical-align:middle;">유 형<br><span style="font-size:11px; font-weight:normal;">(해당란 V표)</span></th>
            <td colspan="3" style="padding:0;">
              <table style="width:100%; height:100%; border-collapse:collapse; border:none; margin:0;">
                <tr>
                  <td rowspan="2" class="sub-header-cell">질병</td>
                  <td rowspan="2" class="sub-header-cell">기타</td>
                  <td colspan="4" class="sub-header-cell">출석인정</td>
                </tr>
                <tr>
                  <td class="sub-header-cell-sm">경조사</td>
                  <td class="sub-header-cell-sm">사회봉사<br>특별교육</td>
                  <td class="sub-header-cell-sm">법정<br>감염병</td>
                  <td class="sub-header-cell-sm">기타<br>(생리 등)</td>
                </tr>
                <tr style="height:40px;">
                  <td class="check-cell-box">{c0}</td>
                  <td class="check-cell-box">{c1}</td>
                  <td class="check-cell-box">{c2}</td>
                  <td class="check-cell-box">{c3}</td>
                  <td class="check-cell-box">{c4}</td>
                  <td class="check-cell-box">{c5}</td>
                </tr>
              </table>
            </td>
          </tr>
          <tr>
            <th>사 유 및<br>학부모 의견</th>
            <td colspan="3" style="line-height:1.6;">
              <strong>[사유]</strong> {reason}<br><br>
              <strong>[학부모 의견]</strong> {opinion}
            </td>
          </tr>
        </tbody>
      </table>

      <div class="signature-section">
        <div class="declaration">
          상기 본인은 위와 같은 사유로 ({detail}) 하였기에<br>
          증빙서류와 함께 보호자 연서로 확인서를 제출합니다.
        </div>
        <div class="date-center">{date_str}</div>
        <div class="signatures">
          <div class="sig-row"><span class="role">학 생 :</span><span class="name">{name}</span>{student_sig}</div>
          <div class="sig-row"><span class="role">보호자 :</span><span class="name">{parent_name}</span>{parent_sig}</div>
        </div>
      </div>

      <hr class="divider"/>

      <h1 class="sub-title-left">『담임확인서』</h1>
      <table class="main-table">
        <colgroup><col width="20%"><col width="80%"></colgroup>
        <tbody>
          <tr>
            <th>담임확인 및<br>증빙 서류</th>
            <td>
              <div class="check-row">{method_items}</div>
              <div class="check-grid-2">{proof_items}</div>
            </td>
          </tr>
        </tbody>
      </table>

      <div class="signature-section" style="margin-top:30px;">
        <div class="declaration" style="font-weight:normal;">"해당 학생이 위와 같은 사유로 ({detail}) 하였음을 확인합니다."</div>
        <div class="date-center">{processed_str}</div>
        <div class="signatures" style="justify-content:flex-end;">
          <div class="sig-row"><span class="role">담임교사 :</span><span class="name">{teacher_name}</span>{teacher_sign}</div>
        </div>
        <div class="school-master">{school_master}</div>
      </div>
    </div>
"#,
        sanction = sanction_table(&ctx.approval_line),
        grade = esc(student.grade.as_deref()),
        class_num = esc(student.class_num.as_deref()),
        number = esc(student.number.as_deref()),
        name = name,
        start = esc(period.start.as_deref()),
        end = esc(period.end.as_deref()),
        days = esc(period.days.as_deref()),
        class_periods = class_periods,
        c0 = type_checks[0],
        c1 = type_checks[1],
        c2 = type_checks[2],
        c3 = type_checks[3],
        c4 = type_checks[4],
        c5 = type_checks[5],
        reason = esc(doc.reason.as_deref()),
        opinion = esc_or(doc.parent_opinion.as_deref(), "(없음)"),
        detail = detail,
        date_str = date_str,
        student_sig = signature_or(sigs.student_sig.as_deref(), "(인)"),
        parent_name = esc(sigs.parent_name.as_deref()),
        parent_sig = signature_or(sigs.parent_sig.as_deref(), "(인)"),
        method_items = method_items,
        proof_items = proof_items,
        processed_str = processed_str,
        teacher_name = teacher_name,
        teacher_sign = teacher_sign,
        school_master = school_master_line(&ctx.school_name),
    )
}
