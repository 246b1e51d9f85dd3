use serde::{Deserialize, Serialize};
use std::collections::BTreeMap;
use ts_rs::TS;

use super::entities::Course;

// 按方向分组的课程，键为方向代码
#[derive(Debug, Clone, Default, Serialize, Deserialize, TS)]
#[ts(export, export_to = "../frontend/src/types/generated/course.ts")]
pub struct CoursesByStream(pub BTreeMap<String, Vec<Course>>);

impl CoursesByStream {
    pub fn from_courses(courses: Vec<Course>) -> Self {
        let mut grouped: BTreeMap<String, Vec<Course>> = BTreeMap::new();
        for course in courses {
            grouped
                .entry(course.stream.to_string())
                .or_default()
                .push(course);
        }
        Self(grouped)
    }
}
