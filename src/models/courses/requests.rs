use serde::Deserialize;
use ts_rs::TS;

use super::entities::{CourseSchedule, NewCourse};
use crate::errors::{ReportingError, Result};
use crate::models::common::de::{deserialize_blank_as_none, deserialize_optional_text};
use crate::models::common::{ProgramType, Stream};

// 创建课程请求
//
// name、code、lecturer、programType 必填，其余缺省时取默认值
#[derive(Debug, Clone, Deserialize, TS)]
#[serde(rename_all = "camelCase")]
#[ts(export, export_to = "../frontend/src/types/generated/course.ts")]
pub struct CreateCourseRequest {
    #[serde(default, deserialize_with = "deserialize_optional_text")]
    pub name: Option<String>,
    #[serde(default, deserialize_with = "deserialize_optional_text")]
    pub code: Option<String>,
    #[serde(default, deserialize_with = "deserialize_optional_text")]
    pub lecturer: Option<String>,
    #[serde(default, deserialize_with = "deserialize_blank_as_none")]
    pub stream: Option<Stream>,
    #[serde(default, deserialize_with = "deserialize_optional_text")]
    pub faculty: Option<String>,
    #[serde(default, deserialize_with = "deserialize_blank_as_none")]
    pub program_type: Option<ProgramType>,
    #[serde(default, deserialize_with = "deserialize_optional_text")]
    pub semester: Option<String>,
    #[serde(default, deserialize_with = "deserialize_optional_text")]
    pub year: Option<String>,
    #[serde(default)]
    pub schedule: Option<CourseSchedule>,
}

impl CreateCourseRequest {
    /// 校验必填字段并补齐默认值
    pub fn into_new_course(self, default_stream: Stream) -> Result<NewCourse> {
        let (Some(name), Some(code), Some(lecturer), Some(program_type)) =
            (self.name, self.code, self.lecturer, self.program_type)
        else {
            return Err(ReportingError::validation(
                "Missing required fields: name, code, lecturer, programType",
            ));
        };

        Ok(NewCourse {
            name,
            code,
            lecturer,
            stream: self.stream.unwrap_or(default_stream),
            faculty: self
                .faculty
                .unwrap_or_else(|| NewCourse::DEFAULT_FACULTY.to_string()),
            program_type,
            semester: self
                .semester
                .unwrap_or_else(|| NewCourse::DEFAULT_SEMESTER.to_string()),
            year: self
                .year
                .unwrap_or_else(|| NewCourse::DEFAULT_YEAR.to_string()),
            schedule: CourseSchedule::or_default(self.schedule),
        })
    }
}

// 更新课程请求
#[derive(Debug, Clone, Default, Deserialize, TS)]
#[serde(rename_all = "camelCase")]
#[ts(export, export_to = "../frontend/src/types/generated/course.ts")]
pub struct UpdateCourseRequest {
    #[serde(default, deserialize_with = "deserialize_optional_text")]
    pub name: Option<String>,
    #[serde(default, deserialize_with = "deserialize_optional_text")]
    pub code: Option<String>,
    #[serde(default, deserialize_with = "deserialize_optional_text")]
    pub lecturer: Option<String>,
    #[serde(default, deserialize_with = "deserialize_blank_as_none")]
    pub stream: Option<Stream>,
    #[serde(default, deserialize_with = "deserialize_optional_text")]
    pub faculty: Option<String>,
    #[serde(default, deserialize_with = "deserialize_blank_as_none")]
    pub program_type: Option<ProgramType>,
    #[serde(default, deserialize_with = "deserialize_optional_text")]
    pub semester: Option<String>,
    #[serde(default, deserialize_with = "deserialize_optional_text")]
    pub year: Option<String>,
    #[serde(default)]
    pub schedule: Option<CourseSchedule>,
}

// 课程列表查询参数（用于存储层）
#[derive(Debug, Clone, Default)]
pub struct CourseListQuery {
    pub stream: Option<Stream>,
    pub program_type: Option<ProgramType>,
    pub lecturer: Option<String>,
}
