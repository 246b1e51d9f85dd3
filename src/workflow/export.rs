use crate::models::reports::entities::{Report, ReportKind};
use crate::models::reports::responses::GroupedReports;

pub const CSV_HEADERS: [&str; 13] = [
    "Report Type",
    "Course Code",
    "Course Name",
    "Person Name",
    "Week",
    "Date",
    "Attendance",
    "Issues/Challenges",
    "Recommendations/Feedback",
    "Status",
    "Rating",
    "Stream",
    "Program Type",
];

fn text(value: Option<&str>) -> String {
    value.unwrap_or_default().to_string()
}

fn attendance(report: &Report) -> String {
    match (
        report.details.actual_students_present,
        report.details.total_registered_students,
    ) {
        (Some(present), Some(total)) => format!("{present}/{total}"),
        (Some(present), None) => present.to_string(),
        (None, Some(total)) => format!("-/{total}"),
        (None, None) => String::new(),
    }
}

fn score(value: Option<i32>) -> i32 {
    value.unwrap_or_default()
}

/// 单条报告的导出行，列顺序与 [`CSV_HEADERS`] 一致
///
/// 问题列与意见列按报告类型取值：
/// - 讲师、学生报告：challenges / feedback
/// - PRL 报告：issues / recommendations
/// - 评分表：comments / feedback，评分列同时给出课堂与讲师评分
pub fn csv_row(report: &Report) -> [String; 13] {
    let d = &report.details;
    let (issues, recommendations, rating) = match report.kind {
        ReportKind::Lecturer | ReportKind::Student => (
            d.challenges.as_deref(),
            report.feedback.as_deref(),
            d.rating.map(|r| r.to_string()),
        ),
        ReportKind::Prl => (
            d.issues.as_deref().or(d.challenges.as_deref()),
            d.recommendations.as_deref(),
            d.rating.map(|r| r.to_string()),
        ),
        ReportKind::Rating => (
            d.comments.as_deref(),
            report.feedback.as_deref().or(report.prl_feedback.as_deref()),
            Some(format!(
                "Class: {}/5, Lecturer: {}/5",
                score(d.class_rating),
                score(d.lecturer_rating)
            )),
        ),
    };

    [
        report.kind.label().to_string(),
        text(d.course_code.as_deref()),
        text(d.course_name.as_deref()),
        text(d.person_name(report.kind)),
        text(d.week_of_reporting.as_deref()),
        text(d.date_of_lecture.as_deref()),
        attendance(report),
        text(issues),
        text(recommendations),
        report.status.to_string(),
        rating.unwrap_or_default(),
        report.stream.to_string(),
        report.program_type.display_name().to_string(),
    ]
}

/// 按分组顺序生成全部导出行
pub fn csv_rows(grouped: &GroupedReports) -> Vec<[String; 13]> {
    grouped.iter_ordered().map(csv_row).collect()
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::workflow::test_support::report;

    #[test]
    fn test_row_columns() {
        let mut r = report(1, ReportKind::Lecturer);
        r.details.course_code = Some("DB101".to_string());
        r.details.course_name = Some("Databases".to_string());
        r.details.lecturer_name = Some("Dr. Nkosi".to_string());
        r.details.week_of_reporting = Some("Week 3".to_string());
        r.details.actual_students_present = Some(25);
        r.details.total_registered_students = Some(30);
        r.details.challenges = Some("Load shedding".to_string());
        r.details.rating = Some(4);

        let row = csv_row(&r);
        assert_eq!(row[0], "Lecturer Report");
        assert_eq!(row[1], "DB101");
        assert_eq!(row[3], "Dr. Nkosi");
        assert_eq!(row[6], "25/30");
        assert_eq!(row[7], "Load shedding");
        assert_eq!(row[9], "submitted");
        assert_eq!(row[10], "4");
        assert_eq!(row[11], "IT");
        assert_eq!(row[12], "Degree");
    }

    #[test]
    fn test_rows_follow_bucket_order() {
        let grouped = GroupedReports::from_reports(vec![
            report(1, ReportKind::Rating),
            report(2, ReportKind::Lecturer),
        ]);
        let rows = csv_rows(&grouped);
        assert_eq!(rows.len(), 2);
        assert_eq!(rows[0][0], "Lecturer Report");
        assert_eq!(rows[1][0], "Student Rating");
    }

    #[test]
    fn test_lecturer_row_uses_reviewer_feedback() {
        let mut r = report(1, ReportKind::Lecturer);
        r.details.recommendations = Some("More labs".to_string());
        r.feedback = Some("Well delivered".to_string());

        let row = csv_row(&r);
        assert_eq!(row[8], "Well delivered");

        r.feedback = None;
        assert_eq!(csv_row(&r)[8], "");
    }

    #[test]
    fn test_prl_row_uses_issues_and_recommendations() {
        let mut r = report(1, ReportKind::Prl);
        r.details.issues = Some("Venue clashes".to_string());
        r.details.recommendations = Some("Swap rooms".to_string());
        r.feedback = Some("ignored".to_string());

        let row = csv_row(&r);
        assert_eq!(row[7], "Venue clashes");
        assert_eq!(row[8], "Swap rooms");
    }

    #[test]
    fn test_rating_row_lists_both_scores() {
        let mut r = report(1, ReportKind::Rating);
        r.details.class_rating = Some(4);
        r.details.comments = Some("Clear slides".to_string());

        let row = csv_row(&r);
        assert_eq!(row[0], "Student Rating");
        assert_eq!(row[7], "Clear slides");
        assert_eq!(row[10], "Class: 4/5, Lecturer: 0/5");
    }

    #[test]
    fn test_missing_fields_are_blank() {
        let row = csv_row(&report(1, ReportKind::Student));
        assert_eq!(row[1], "");
        assert_eq!(row[6], "");
        assert_eq!(row[10], "");
    }
}
