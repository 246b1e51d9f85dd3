use serde::{Deserialize, Serialize};
use std::collections::BTreeMap;
use ts_rs::TS;

use super::entities::Report;
use crate::models::courses::entities::Course;

/// 按类型分组的报告
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize, TS)]
#[ts(export, export_to = "../frontend/src/types/generated/report.ts")]
pub struct GroupedReports {
    pub lecturer: Vec<Report>,
    pub student: Vec<Report>,
    pub prl: Vec<Report>,
    pub ratings: Vec<Report>,
}

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize, TS)]
#[ts(export, export_to = "../frontend/src/types/generated/report.ts")]
pub struct BucketCounts {
    pub lecturer: usize,
    pub student: usize,
    pub prl: usize,
    pub ratings: usize,
    pub total: usize,
}

#[derive(Debug, Clone, Serialize, Deserialize, TS)]
#[ts(export, export_to = "../frontend/src/types/generated/report.ts")]
pub struct GroupedReportsResponse {
    // 四个分组直接平铺在 data 下
    #[serde(flatten)]
    #[ts(flatten)]
    pub reports: GroupedReports,
    pub counts: BucketCounts,
}

#[derive(Debug, Clone, Serialize, Deserialize, TS)]
#[ts(export, export_to = "../frontend/src/types/generated/report.ts")]
pub struct AllReportsResponse {
    pub reports: GroupedReports,
    pub total: usize,
}

#[derive(Debug, Clone, Serialize, Deserialize, TS)]
#[ts(export, export_to = "../frontend/src/types/generated/report.ts")]
pub struct ReportsByCoursesResponse {
    pub reports: Vec<Report>,
    pub count: usize,
}

#[derive(Debug, Clone, Serialize, Deserialize, TS)]
#[serde(rename_all = "camelCase")]
#[ts(export, export_to = "../frontend/src/types/generated/report.ts")]
pub struct AssignedCourseReportsResponse {
    pub reports: GroupedReports,
    pub assigned_courses: Vec<Course>,
    pub total_reports: usize,
}

/// 批量上报 PL 结果
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize, TS)]
#[serde(rename_all = "camelCase")]
#[ts(export, export_to = "../frontend/src/types/generated/report.ts")]
pub struct GroupSubmitResponse {
    pub submitted_count: usize,
    pub already_submitted_count: usize,
    pub not_found_count: usize,
    pub failed_count: usize,
    pub total_selected: usize,
    pub errors: Vec<String>,
}

/// 汇总统计
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, TS)]
#[serde(rename_all = "camelCase")]
#[ts(export, export_to = "../frontend/src/types/generated/report.ts")]
pub struct CompileSummary {
    pub total_reports: usize,
    pub student_reports: usize,
    pub lecturer_reports: usize,
    pub ratings: usize,
    pub prl_reports: usize,
    pub by_stream: BTreeMap<String, usize>,
    pub by_status: BTreeMap<String, usize>,
    pub program_type: String,
    pub stream: String,
    pub compiled_at: chrono::DateTime<chrono::Utc>,
}

#[derive(Debug, Clone, Serialize, Deserialize, TS)]
#[serde(rename_all = "camelCase")]
#[ts(export, export_to = "../frontend/src/types/generated/report.ts")]
pub struct DashboardStatistics {
    pub total_assigned_courses: usize,
    pub total_all_reports: usize,
    pub total_assigned_course_reports: usize,
    #[serde(rename = "totalSubmittedToPL")]
    pub total_submitted_to_pl: usize,
}

/// PRL 工作台
#[derive(Debug, Clone, Serialize, Deserialize, TS)]
#[serde(rename_all = "camelCase")]
#[ts(export, export_to = "../frontend/src/types/generated/report.ts")]
pub struct DashboardResponse {
    pub all_reports: GroupedReports,
    pub assigned_course_reports: GroupedReports,
    #[serde(rename = "submittedToPLReports")]
    pub submitted_to_pl_reports: Vec<Report>,
    pub assigned_courses: Vec<Course>,
    pub statistics: DashboardStatistics,
}

#[derive(Debug, Clone, Serialize, Deserialize, TS)]
#[serde(rename_all = "camelCase")]
#[ts(export, export_to = "../frontend/src/types/generated/report.ts")]
pub struct DownloadInfo {
    #[serde(rename = "type")]
    pub download_type: String,
    pub program_type: String,
    pub stream: String,
    pub total_reports: usize,
    pub generated_at: chrono::DateTime<chrono::Utc>,
}

#[derive(Debug, Clone, Serialize, Deserialize, TS)]
#[serde(rename_all = "camelCase")]
#[ts(export, export_to = "../frontend/src/types/generated/report.ts")]
pub struct DownloadResponse {
    pub reports: Vec<Report>,
    pub download_info: DownloadInfo,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_grouped_response_keeps_buckets_at_top_level() {
        let reports = GroupedReports::default();
        let counts = reports.counts();
        let json = serde_json::to_value(GroupedReportsResponse { reports, counts }).unwrap();

        let mut keys: Vec<&str> = json.as_object().unwrap().keys().map(String::as_str).collect();
        keys.sort_unstable();
        assert_eq!(keys, vec!["counts", "lecturer", "prl", "ratings", "student"]);
        assert_eq!(json["counts"]["total"], 0);
    }
}
