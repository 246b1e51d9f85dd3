use serde::{Deserialize, Serialize};
use ts_rs::TS;

use crate::errors::{ReportingError, Result};
use crate::models::common::de::{deserialize_optional_i32, deserialize_optional_text};
use crate::models::common::{ProgramType, Stream};

// 报告类型
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, TS)]
#[serde(rename_all = "snake_case")]
#[ts(export, export_to = "../frontend/src/types/generated/report.ts")]
pub enum ReportKind {
    Student,  // 学生课堂报告
    Lecturer, // 讲师教学报告
    Prl,      // PRL 审阅报告
    Rating,   // 学生评分表
}

impl ReportKind {
    pub const STUDENT: &'static str = "student";
    pub const LECTURER: &'static str = "lecturer";
    pub const PRL: &'static str = "prl";
    pub const RATING: &'static str = "rating";

    /// 从旧版 `type` + `isPRLReport` + `isRating` 组合推断类型
    ///
    /// 判定顺序与分组规则一致，结果唯一。
    pub fn resolve(declared: Option<&str>, is_prl_report: bool, is_rating: bool) -> Result<Self> {
        let declared = declared.map(|d| d.trim().to_ascii_lowercase());
        let declared = declared.as_deref();

        if declared == Some(Self::LECTURER) && !is_prl_report {
            return Ok(ReportKind::Lecturer);
        }
        if declared == Some(Self::STUDENT) && !is_rating {
            return Ok(ReportKind::Student);
        }
        if is_prl_report || declared == Some(Self::PRL) {
            return Ok(ReportKind::Prl);
        }
        if is_rating || declared == Some(Self::RATING) {
            return Ok(ReportKind::Rating);
        }

        Err(ReportingError::validation(match declared {
            Some(other) => format!("Unsupported report type: '{other}'"),
            None => "Report type is required".to_string(),
        }))
    }

    /// 导出表格中的类型名
    pub fn label(&self) -> &'static str {
        match self {
            ReportKind::Student => "Student Report",
            ReportKind::Lecturer => "Lecturer Report",
            ReportKind::Prl => "PRL Report",
            ReportKind::Rating => "Student Rating",
        }
    }
}

impl<'de> Deserialize<'de> for ReportKind {
    fn deserialize<D>(deserializer: D) -> std::result::Result<Self, D::Error>
    where
        D: serde::Deserializer<'de>,
    {
        let s = String::deserialize(deserializer)?;
        s.parse().map_err(serde::de::Error::custom)
    }
}

impl std::fmt::Display for ReportKind {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            ReportKind::Student => write!(f, "{}", ReportKind::STUDENT),
            ReportKind::Lecturer => write!(f, "{}", ReportKind::LECTURER),
            ReportKind::Prl => write!(f, "{}", ReportKind::PRL),
            ReportKind::Rating => write!(f, "{}", ReportKind::RATING),
        }
    }
}

impl std::str::FromStr for ReportKind {
    type Err = String;

    fn from_str(s: &str) -> std::result::Result<Self, Self::Err> {
        match s.trim().to_ascii_lowercase().as_str() {
            ReportKind::STUDENT => Ok(ReportKind::Student),
            ReportKind::LECTURER => Ok(ReportKind::Lecturer),
            ReportKind::PRL => Ok(ReportKind::Prl),
            ReportKind::RATING => Ok(ReportKind::Rating),
            _ => Err(format!(
                "Invalid report type: '{s}'. Supported: student, lecturer, prl, rating"
            )),
        }
    }
}

// 报告状态
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, TS)]
#[serde(rename_all = "snake_case")]
#[ts(export, export_to = "../frontend/src/types/generated/report.ts")]
pub enum ReportStatus {
    Submitted,     // 已提交
    Reviewed,      // 已审阅
    SubmittedToPl, // 已上报 PL
    PlReviewed,    // PL 已审阅
}

impl ReportStatus {
    pub const SUBMITTED: &'static str = "submitted";
    pub const REVIEWED: &'static str = "reviewed";
    pub const SUBMITTED_TO_PL: &'static str = "submitted_to_pl";
    pub const PL_REVIEWED: &'static str = "pl_reviewed";

    pub fn all() -> &'static [ReportStatus] {
        &[
            ReportStatus::Submitted,
            ReportStatus::Reviewed,
            ReportStatus::SubmittedToPl,
            ReportStatus::PlReviewed,
        ]
    }
}

impl<'de> Deserialize<'de> for ReportStatus {
    fn deserialize<D>(deserializer: D) -> std::result::Result<Self, D::Error>
    where
        D: serde::Deserializer<'de>,
    {
        let s = String::deserialize(deserializer)?;
        s.parse().map_err(serde::de::Error::custom)
    }
}

impl std::fmt::Display for ReportStatus {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            ReportStatus::Submitted => write!(f, "{}", ReportStatus::SUBMITTED),
            ReportStatus::Reviewed => write!(f, "{}", ReportStatus::REVIEWED),
            ReportStatus::SubmittedToPl => write!(f, "{}", ReportStatus::SUBMITTED_TO_PL),
            ReportStatus::PlReviewed => write!(f, "{}", ReportStatus::PL_REVIEWED),
        }
    }
}

impl std::str::FromStr for ReportStatus {
    type Err = String;

    // 兼容旧数据中的 pending / approved / completed
    fn from_str(s: &str) -> std::result::Result<Self, Self::Err> {
        match s.trim().to_ascii_lowercase().as_str() {
            ReportStatus::SUBMITTED | "pending" => Ok(ReportStatus::Submitted),
            ReportStatus::REVIEWED => Ok(ReportStatus::Reviewed),
            ReportStatus::SUBMITTED_TO_PL => Ok(ReportStatus::SubmittedToPl),
            ReportStatus::PL_REVIEWED | "approved" | "completed" => Ok(ReportStatus::PlReviewed),
            _ => Err(format!("Invalid report status: '{s}'")),
        }
    }
}

/// 报告正文字段，学生、讲师、PRL 表单共用
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize, TS)]
#[serde(rename_all = "camelCase")]
#[ts(export, export_to = "../frontend/src/types/generated/report.ts")]
pub struct ReportDetails {
    #[serde(default, alias = "faculty", deserialize_with = "deserialize_optional_text")]
    pub faculty_name: Option<String>,
    #[serde(default, deserialize_with = "deserialize_optional_text")]
    pub class_name: Option<String>,
    #[serde(default, alias = "week", deserialize_with = "deserialize_optional_text")]
    pub week_of_reporting: Option<String>,
    #[serde(default, alias = "date", deserialize_with = "deserialize_optional_text")]
    pub date_of_lecture: Option<String>,
    #[serde(default, deserialize_with = "deserialize_optional_text")]
    pub course_name: Option<String>,
    #[serde(default, deserialize_with = "deserialize_optional_text")]
    pub course_code: Option<String>,
    #[serde(default, deserialize_with = "deserialize_optional_text")]
    pub lecturer_name: Option<String>,
    #[serde(default, deserialize_with = "deserialize_optional_text")]
    pub student_name: Option<String>,
    #[serde(default, deserialize_with = "deserialize_optional_text")]
    pub student_number: Option<String>,
    #[serde(default, deserialize_with = "deserialize_optional_text")]
    pub venue: Option<String>,
    #[serde(default, deserialize_with = "deserialize_optional_text")]
    pub scheduled_time: Option<String>,
    #[serde(default, deserialize_with = "deserialize_optional_text")]
    pub actual_time: Option<String>,
    // 实到人数
    #[serde(
        default,
        alias = "numberOfStudentsPresent",
        deserialize_with = "deserialize_optional_i32"
    )]
    pub actual_students_present: Option<i32>,
    // 注册人数
    #[serde(
        default,
        alias = "actualNumberOfStudents",
        deserialize_with = "deserialize_optional_i32"
    )]
    pub total_registered_students: Option<i32>,
    #[serde(default, deserialize_with = "deserialize_optional_text")]
    pub topic_taught: Option<String>,
    #[serde(default, deserialize_with = "deserialize_optional_text")]
    pub learning_outcomes: Option<String>,
    #[serde(default, alias = "challengesFaced", deserialize_with = "deserialize_optional_text")]
    pub challenges: Option<String>,
    #[serde(default, deserialize_with = "deserialize_optional_text")]
    pub recommendations: Option<String>,
    #[serde(default, deserialize_with = "deserialize_optional_text")]
    pub issues: Option<String>,
    #[serde(default, deserialize_with = "deserialize_optional_text")]
    pub comments: Option<String>,
    // 讲师自评 1-5
    #[serde(default, deserialize_with = "deserialize_optional_i32")]
    pub rating: Option<i32>,
    // 学生评分 1-5
    #[serde(default, deserialize_with = "deserialize_optional_i32")]
    pub class_rating: Option<i32>,
    #[serde(default, deserialize_with = "deserialize_optional_i32")]
    pub lecturer_rating: Option<i32>,
}

impl ReportDetails {
    /// 报告所属人：学生报告取学生姓名，其余取讲师姓名
    pub fn person_name(&self, kind: ReportKind) -> Option<&str> {
        match kind {
            ReportKind::Student | ReportKind::Rating => self
                .student_name
                .as_deref()
                .or(self.lecturer_name.as_deref()),
            ReportKind::Lecturer | ReportKind::Prl => self
                .lecturer_name
                .as_deref()
                .or(self.student_name.as_deref()),
        }
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, TS)]
#[serde(rename_all = "camelCase")]
#[ts(export, export_to = "../frontend/src/types/generated/report.ts")]
pub struct Report {
    // 报告ID
    pub id: i64,
    // 报告类型
    #[serde(rename = "type")]
    pub kind: ReportKind,
    // 方向
    pub stream: Stream,
    // 项目类型
    pub program_type: ProgramType,
    // 状态
    pub status: ReportStatus,
    #[serde(flatten)]
    #[ts(flatten)]
    pub details: ReportDetails,
    // 一线审阅意见
    pub feedback: Option<String>,
    pub feedback_date: Option<chrono::DateTime<chrono::Utc>>,
    // PRL 对评分表的意见
    pub prl_feedback: Option<String>,
    pub prl_feedback_date: Option<chrono::DateTime<chrono::Utc>>,
    // PL 意见
    pub pl_feedback: Option<String>,
    pub pl_feedback_date: Option<chrono::DateTime<chrono::Utc>>,
    // 是否已上报 PL
    #[serde(rename = "isSubmittedToPL")]
    pub is_submitted_to_pl: bool,
    #[serde(rename = "submittedToPLDate")]
    pub submitted_to_pl_date: Option<chrono::DateTime<chrono::Utc>>,
    // 创建时间
    pub created_at: chrono::DateTime<chrono::Utc>,
    // 更新时间
    pub updated_at: chrono::DateTime<chrono::Utc>,
}

/// 待写入的新报告（服务层补齐默认值后交给存储层）
#[derive(Debug, Clone)]
pub struct NewReport {
    pub kind: ReportKind,
    pub stream: Stream,
    pub program_type: ProgramType,
    pub details: ReportDetails,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_resolve_follows_grouping_order() {
        assert_eq!(
            ReportKind::resolve(Some("lecturer"), false, false).unwrap(),
            ReportKind::Lecturer
        );
        // lecturer 但带 PRL 标记的归入 prl
        assert_eq!(
            ReportKind::resolve(Some("lecturer"), true, false).unwrap(),
            ReportKind::Prl
        );
        assert_eq!(
            ReportKind::resolve(Some("student"), false, false).unwrap(),
            ReportKind::Student
        );
        assert_eq!(
            ReportKind::resolve(Some("student"), false, true).unwrap(),
            ReportKind::Rating
        );
        assert_eq!(
            ReportKind::resolve(None, true, true).unwrap(),
            ReportKind::Prl
        );
        assert_eq!(
            ReportKind::resolve(Some("RATING"), false, false).unwrap(),
            ReportKind::Rating
        );
    }

    #[test]
    fn test_resolve_rejects_unknown() {
        let err = ReportKind::resolve(Some("dean"), false, false).unwrap_err();
        assert_eq!(err.code(), "E005");
        assert!(ReportKind::resolve(None, false, false).is_err());
    }

    #[test]
    fn test_status_legacy_aliases() {
        assert_eq!("pending".parse::<ReportStatus>(), Ok(ReportStatus::Submitted));
        assert_eq!("approved".parse::<ReportStatus>(), Ok(ReportStatus::PlReviewed));
        assert_eq!("completed".parse::<ReportStatus>(), Ok(ReportStatus::PlReviewed));
        assert_eq!(ReportStatus::SubmittedToPl.to_string(), "submitted_to_pl");
    }

    #[test]
    fn test_details_accept_student_payload_aliases() {
        let details: ReportDetails = serde_json::from_value(serde_json::json!({
            "faculty": "FICT",
            "week": "Week 6",
            "date": "2025-10-01",
            "numberOfStudentsPresent": "31",
            "actualNumberOfStudents": 40,
            "challengesFaced": "Projector broken"
        }))
        .unwrap();

        assert_eq!(details.faculty_name.as_deref(), Some("FICT"));
        assert_eq!(details.week_of_reporting.as_deref(), Some("Week 6"));
        assert_eq!(details.date_of_lecture.as_deref(), Some("2025-10-01"));
        assert_eq!(details.actual_students_present, Some(31));
        assert_eq!(details.total_registered_students, Some(40));
        assert_eq!(details.challenges.as_deref(), Some("Projector broken"));
    }

    #[test]
    fn test_person_name_prefers_owner_field() {
        let details = ReportDetails {
            student_name: Some("Thabo".to_string()),
            lecturer_name: Some("Dr. Mokoena".to_string()),
            ..Default::default()
        };
        assert_eq!(details.person_name(ReportKind::Rating), Some("Thabo"));
        assert_eq!(details.person_name(ReportKind::Lecturer), Some("Dr. Mokoena"));
    }
}
