use serde::Deserialize;
use ts_rs::TS;

use super::entities::{ReportDetails, ReportKind};
use crate::models::common::de::{deserialize_blank_as_none, deserialize_flag, deserialize_optional_text};
use crate::models::common::{ProgramType, Stream};

// 提交报告请求
//
// # 类型判定
// - 学生入口：`type: "rating"` 或 `isRating: true` 为评分表，否则为学生报告
// - 讲师入口、PRL 入口固定类型，忽略 `type`
#[derive(Debug, Clone, Deserialize, TS)]
#[serde(rename_all = "camelCase")]
#[ts(export, export_to = "../frontend/src/types/generated/report.ts")]
pub struct SubmitReportRequest {
    #[serde(default, rename = "type", deserialize_with = "deserialize_optional_text")]
    pub declared_type: Option<String>,
    #[serde(default, rename = "isPRLReport", deserialize_with = "deserialize_flag")]
    pub is_prl_report: bool,
    #[serde(default, deserialize_with = "deserialize_flag")]
    pub is_rating: bool,
    #[serde(default, deserialize_with = "deserialize_blank_as_none")]
    pub stream: Option<Stream>,
    #[serde(default, deserialize_with = "deserialize_blank_as_none")]
    pub program_type: Option<ProgramType>,
    #[serde(flatten)]
    #[ts(flatten)]
    pub details: ReportDetails,
}

/// 提交入口
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SubmissionChannel {
    Student,
    Lecturer,
    Prl,
}

impl SubmitReportRequest {
    /// 按提交入口确定报告类型
    pub fn resolve_kind(&self, channel: SubmissionChannel) -> crate::errors::Result<ReportKind> {
        match channel {
            SubmissionChannel::Lecturer => Ok(ReportKind::Lecturer),
            SubmissionChannel::Prl => Ok(ReportKind::Prl),
            SubmissionChannel::Student => {
                let declared = self.declared_type.as_deref().unwrap_or(ReportKind::STUDENT);
                match ReportKind::resolve(Some(declared), false, self.is_rating)? {
                    kind @ (ReportKind::Student | ReportKind::Rating) => Ok(kind),
                    other => Err(crate::errors::ReportingError::validation(format!(
                        "Report type '{other}' cannot be submitted through the student channel"
                    ))),
                }
            }
        }
    }
}

// 审阅意见请求
#[derive(Debug, Clone, Deserialize, TS)]
#[ts(export, export_to = "../frontend/src/types/generated/report.ts")]
pub struct FeedbackRequest {
    #[serde(default, deserialize_with = "deserialize_optional_text")]
    pub feedback: Option<String>,
}

/// 单个被选中的报告ID，兼容数字与字符串
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub enum ReportRef {
    Id(i64),
    Invalid(String),
}

impl std::fmt::Display for ReportRef {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            ReportRef::Id(id) => write!(f, "{id}"),
            ReportRef::Invalid(raw) => write!(f, "{raw}"),
        }
    }
}

impl<'de> Deserialize<'de> for ReportRef {
    fn deserialize<D>(deserializer: D) -> Result<Self, D::Error>
    where
        D: serde::Deserializer<'de>,
    {
        #[derive(Deserialize)]
        #[serde(untagged)]
        enum Raw {
            Int(i64),
            Text(String),
        }

        Ok(match Raw::deserialize(deserializer)? {
            Raw::Int(id) => ReportRef::Id(id),
            Raw::Text(text) => match text.trim().parse::<i64>() {
                Ok(id) => ReportRef::Id(id),
                Err(_) => ReportRef::Invalid(text),
            },
        })
    }
}

/// 被选中的报告：ID 数组，或按分组给出的 ID 数组
#[derive(Debug, Clone, Deserialize)]
#[serde(untagged)]
pub enum SelectedReports {
    Ids(Vec<ReportRef>),
    Buckets {
        #[serde(default)]
        student: Vec<ReportRef>,
        #[serde(default)]
        lecturer: Vec<ReportRef>,
        #[serde(default)]
        prl: Vec<ReportRef>,
        #[serde(default)]
        ratings: Vec<ReportRef>,
    },
}

impl SelectedReports {
    /// 展开为去重后的ID列表，保留首次出现顺序
    pub fn into_unique_refs(self) -> Vec<ReportRef> {
        let all: Vec<ReportRef> = match self {
            SelectedReports::Ids(ids) => ids,
            SelectedReports::Buckets {
                student,
                lecturer,
                prl,
                ratings,
            } => student
                .into_iter()
                .chain(lecturer)
                .chain(prl)
                .chain(ratings)
                .collect(),
        };

        let mut seen = std::collections::HashSet::new();
        all.into_iter().filter(|r| seen.insert(r.clone())).collect()
    }
}

// 批量上报 PL 请求
#[derive(Debug, Clone, Deserialize, TS)]
#[serde(rename_all = "camelCase")]
#[ts(export, export_to = "../frontend/src/types/generated/report.ts")]
pub struct GroupSubmitRequest {
    #[serde(default, deserialize_with = "deserialize_blank_as_none")]
    pub stream: Option<Stream>,
    #[serde(default, deserialize_with = "deserialize_blank_as_none")]
    pub program_type: Option<ProgramType>,
    #[serde(default)]
    #[ts(type = "Array<number | string> | Record<string, Array<number | string>> | null")]
    pub selected_reports: Option<SelectedReports>,
}

// 汇总请求
#[derive(Debug, Clone, Deserialize, TS)]
#[serde(rename_all = "camelCase")]
#[ts(export, export_to = "../frontend/src/types/generated/report.ts")]
pub struct CompileRequest {
    #[serde(default, deserialize_with = "crate::models::common::de::deserialize_scope")]
    pub program_type: Option<ProgramType>,
    #[serde(default, deserialize_with = "crate::models::common::de::deserialize_scope")]
    pub stream: Option<Stream>,
}

// 按课程代码查询报告请求
#[derive(Debug, Clone, Deserialize, TS)]
#[serde(rename_all = "camelCase")]
#[ts(export, export_to = "../frontend/src/types/generated/report.ts")]
pub struct ByCoursesRequest {
    #[serde(default)]
    pub course_codes: Vec<String>,
}

/// 报告列表查询参数（用于存储层）
#[derive(Debug, Clone, Default)]
pub struct ReportListQuery {
    // 为空表示不限类型
    pub kinds: Vec<ReportKind>,
    pub stream: Option<Stream>,
    pub program_type: Option<ProgramType>,
    pub course_codes: Option<Vec<String>>,
    pub submitted_to_pl: Option<bool>,
}

impl ReportListQuery {
    pub fn scoped(stream: Option<Stream>, program_type: Option<ProgramType>) -> Self {
        Self {
            stream,
            program_type,
            ..Default::default()
        }
    }

    pub fn with_kinds(mut self, kinds: &[ReportKind]) -> Self {
        self.kinds = kinds.to_vec();
        self
    }

    pub fn with_course_codes(mut self, codes: Vec<String>) -> Self {
        self.course_codes = Some(codes);
        self
    }

    pub fn submitted_to_pl(mut self, submitted: bool) -> Self {
        self.submitted_to_pl = Some(submitted);
        self
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_selected_reports_array_dedup() {
        let selected: SelectedReports = serde_json::from_str(r#"[3, "3", 1, "abc", 1]"#).unwrap();
        assert_eq!(
            selected.into_unique_refs(),
            vec![
                ReportRef::Id(3),
                ReportRef::Id(1),
                ReportRef::Invalid("abc".to_string())
            ]
        );
    }

    #[test]
    fn test_selected_reports_buckets() {
        let selected: SelectedReports =
            serde_json::from_str(r#"{"lecturer":[2],"ratings":[5,2],"student":[7]}"#).unwrap();
        assert_eq!(
            selected.into_unique_refs(),
            vec![ReportRef::Id(7), ReportRef::Id(2), ReportRef::Id(5)]
        );
    }

    #[test]
    fn test_student_channel_resolves_rating() {
        let request: SubmitReportRequest =
            serde_json::from_str(r#"{"type":"rating","classRating":4}"#).unwrap();
        assert_eq!(
            request.resolve_kind(SubmissionChannel::Student).unwrap(),
            ReportKind::Rating
        );

        let legacy: SubmitReportRequest = serde_json::from_str(r#"{"isRating":true}"#).unwrap();
        assert_eq!(
            legacy.resolve_kind(SubmissionChannel::Student).unwrap(),
            ReportKind::Rating
        );

        let plain: SubmitReportRequest = serde_json::from_str("{}").unwrap();
        assert_eq!(
            plain.resolve_kind(SubmissionChannel::Student).unwrap(),
            ReportKind::Student
        );
    }

    #[test]
    fn test_student_channel_rejects_other_types() {
        let request: SubmitReportRequest = serde_json::from_str(r#"{"type":"lecturer"}"#).unwrap();
        assert!(request.resolve_kind(SubmissionChannel::Student).is_err());
    }

    #[test]
    fn test_fixed_channels_ignore_declared_type() {
        let request: SubmitReportRequest = serde_json::from_str(r#"{"type":"student"}"#).unwrap();
        assert_eq!(
            request.resolve_kind(SubmissionChannel::Lecturer).unwrap(),
            ReportKind::Lecturer
        );
        assert_eq!(
            request.resolve_kind(SubmissionChannel::Prl).unwrap(),
            ReportKind::Prl
        );
    }
}
