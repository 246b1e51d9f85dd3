//! 课程实体

use sea_orm::entity::prelude::*;

#[derive(Clone, Debug, PartialEq, DeriveEntityModel)]
#[sea_orm(table_name = "courses")]
pub struct Model {
    #[sea_orm(primary_key)]
    pub id: i64,
    pub name: String,
    pub code: String,
    pub lecturer: String,
    pub stream: String,
    pub faculty: String,
    pub program_type: String,
    pub semester: Option<String>,
    pub year: Option<String>,
    pub schedule_day: Option<String>,
    pub schedule_time: Option<String>,
    pub schedule_room: Option<String>,
    pub created_at: i64,
    pub updated_at: i64,
}

#[derive(Copy, Clone, Debug, EnumIter, DeriveRelation)]
pub enum Relation {}

impl ActiveModelBehavior for ActiveModel {}

impl Model {
    pub fn into_course(self) -> crate::models::courses::entities::Course {
        use crate::models::common::{ProgramType, Stream};
        use crate::models::courses::entities::{Course, CourseSchedule};
        use chrono::{DateTime, Utc};

        Course {
            id: self.id,
            name: self.name,
            code: self.code,
            lecturer: self.lecturer,
            stream: self.stream.parse::<Stream>().unwrap_or(Stream::It),
            faculty: self.faculty,
            program_type: self
                .program_type
                .parse::<ProgramType>()
                .unwrap_or(ProgramType::Degree),
            semester: self.semester.unwrap_or_default(),
            year: self.year.unwrap_or_default(),
            schedule: CourseSchedule {
                day: self.schedule_day,
                time: self.schedule_time,
                room: self.schedule_room,
            },
            created_at: DateTime::<Utc>::from_timestamp(self.created_at, 0).unwrap_or_default(),
            updated_at: DateTime::<Utc>::from_timestamp(self.updated_at, 0).unwrap_or_default(),
        }
    }
}
