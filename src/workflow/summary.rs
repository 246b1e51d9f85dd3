use std::collections::BTreeMap;

use chrono::{DateTime, Utc};

use crate::models::common::ScopeQuery;
use crate::models::reports::entities::{Report, ReportKind};
use crate::models::reports::responses::CompileSummary;

impl CompileSummary {
    /// 统计报告集合；空集合得到全零结果
    pub fn from_reports(reports: &[Report], scope: ScopeQuery, now: DateTime<Utc>) -> Self {
        let count_kind = |kind: ReportKind| reports.iter().filter(|r| r.kind == kind).count();

        let mut by_stream: BTreeMap<String, usize> = BTreeMap::new();
        let mut by_status: BTreeMap<String, usize> = BTreeMap::new();
        for report in reports {
            *by_stream.entry(report.stream.to_string()).or_default() += 1;
            *by_status.entry(report.status.to_string()).or_default() += 1;
        }

        let (stream, program_type) = scope.describe();

        Self {
            total_reports: reports.len(),
            student_reports: count_kind(ReportKind::Student),
            lecturer_reports: count_kind(ReportKind::Lecturer),
            ratings: count_kind(ReportKind::Rating),
            prl_reports: count_kind(ReportKind::Prl),
            by_stream,
            by_status,
            program_type,
            stream,
            compiled_at: now,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::common::{ProgramType, Stream};
    use crate::models::reports::entities::ReportStatus;
    use crate::workflow::test_support::report;

    #[test]
    fn test_compile_counts_kinds_streams_and_statuses() {
        let mut cs = report(3, ReportKind::Rating);
        cs.stream = Stream::Cs;
        cs.status = ReportStatus::Reviewed;

        let reports = vec![
            report(1, ReportKind::Lecturer),
            report(2, ReportKind::Student),
            cs,
            report(4, ReportKind::Prl),
        ];
        let summary = CompileSummary::from_reports(
            &reports,
            ScopeQuery::new(None, Some(ProgramType::Degree)),
            Utc::now(),
        );

        assert_eq!(summary.total_reports, 4);
        assert_eq!(summary.student_reports, 1);
        assert_eq!(summary.lecturer_reports, 1);
        assert_eq!(summary.ratings, 1);
        assert_eq!(summary.prl_reports, 1);
        assert_eq!(summary.by_stream.get("IT"), Some(&3));
        assert_eq!(summary.by_stream.get("CS"), Some(&1));
        assert_eq!(summary.by_status.get("submitted"), Some(&3));
        assert_eq!(summary.by_status.get("reviewed"), Some(&1));
        assert_eq!(summary.program_type, "degree");
        assert_eq!(summary.stream, "all");
    }

    #[test]
    fn test_compile_empty_set_is_all_zero() {
        let summary = CompileSummary::from_reports(
            &[],
            ScopeQuery::new(None, Some(ProgramType::Diploma)),
            Utc::now(),
        );
        assert_eq!(summary.total_reports, 0);
        assert_eq!(summary.student_reports, 0);
        assert_eq!(summary.lecturer_reports, 0);
        assert_eq!(summary.ratings, 0);
        assert_eq!(summary.prl_reports, 0);
        assert!(summary.by_stream.is_empty());
        assert!(summary.by_status.is_empty());
    }
}
