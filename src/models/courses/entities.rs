use serde::{Deserialize, Serialize};
use ts_rs::TS;

use crate::models::common::de::deserialize_optional_text;
use crate::models::common::{ProgramType, Stream};

// 课表
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize, TS)]
#[ts(export, export_to = "../frontend/src/types/generated/course.ts")]
pub struct CourseSchedule {
    #[serde(default, deserialize_with = "deserialize_optional_text")]
    pub day: Option<String>,
    #[serde(default, deserialize_with = "deserialize_optional_text")]
    pub time: Option<String>,
    #[serde(default, deserialize_with = "deserialize_optional_text")]
    pub room: Option<String>,
}

impl CourseSchedule {
    pub const DEFAULT_DAY: &'static str = "Monday";
    pub const DEFAULT_TIME: &'static str = "08:00 - 10:00";
    pub const DEFAULT_ROOM: &'static str = "Room 201";

    /// 未提供的字段使用默认课表补齐
    pub fn or_default(schedule: Option<CourseSchedule>) -> CourseSchedule {
        let schedule = schedule.unwrap_or_default();
        CourseSchedule {
            day: schedule.day.or_else(|| Some(Self::DEFAULT_DAY.to_string())),
            time: schedule.time.or_else(|| Some(Self::DEFAULT_TIME.to_string())),
            room: schedule.room.or_else(|| Some(Self::DEFAULT_ROOM.to_string())),
        }
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, TS)]
#[serde(rename_all = "camelCase")]
#[ts(export, export_to = "../frontend/src/types/generated/course.ts")]
pub struct Course {
    // 课程ID
    pub id: i64,
    // 课程名称
    pub name: String,
    // 课程代码
    pub code: String,
    // 任课讲师姓名
    pub lecturer: String,
    // 方向
    pub stream: Stream,
    // 学院
    pub faculty: String,
    // 项目类型
    pub program_type: ProgramType,
    pub semester: String,
    pub year: String,
    pub schedule: CourseSchedule,
    // 创建时间
    pub created_at: chrono::DateTime<chrono::Utc>,
    // 更新时间
    pub updated_at: chrono::DateTime<chrono::Utc>,
}

/// 待写入的新课程（默认值已补齐）
#[derive(Debug, Clone)]
pub struct NewCourse {
    pub name: String,
    pub code: String,
    pub lecturer: String,
    pub stream: Stream,
    pub faculty: String,
    pub program_type: ProgramType,
    pub semester: String,
    pub year: String,
    pub schedule: CourseSchedule,
}

impl NewCourse {
    pub const DEFAULT_FACULTY: &'static str = "FICT";
    pub const DEFAULT_SEMESTER: &'static str = "Semester 1";
    pub const DEFAULT_YEAR: &'static str = "2025";
}
