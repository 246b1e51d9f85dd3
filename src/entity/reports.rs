//! 报告实体

use sea_orm::entity::prelude::*;

#[derive(Clone, Debug, PartialEq, DeriveEntityModel)]
#[sea_orm(table_name = "reports")]
pub struct Model {
    #[sea_orm(primary_key)]
    pub id: i64,
    pub kind: String,
    pub stream: String,
    pub program_type: String,
    pub status: String,
    pub faculty_name: Option<String>,
    pub class_name: Option<String>,
    pub week_of_reporting: Option<String>,
    pub date_of_lecture: Option<String>,
    pub course_name: Option<String>,
    pub course_code: Option<String>,
    pub lecturer_name: Option<String>,
    pub student_name: Option<String>,
    pub student_number: Option<String>,
    pub venue: Option<String>,
    pub scheduled_time: Option<String>,
    pub actual_time: Option<String>,
    pub actual_students_present: Option<i32>,
    pub total_registered_students: Option<i32>,
    #[sea_orm(column_type = "Text", nullable)]
    pub topic_taught: Option<String>,
    #[sea_orm(column_type = "Text", nullable)]
    pub learning_outcomes: Option<String>,
    #[sea_orm(column_type = "Text", nullable)]
    pub challenges: Option<String>,
    #[sea_orm(column_type = "Text", nullable)]
    pub recommendations: Option<String>,
    #[sea_orm(column_type = "Text", nullable)]
    pub issues: Option<String>,
    #[sea_orm(column_type = "Text", nullable)]
    pub comments: Option<String>,
    pub rating: Option<i32>,
    pub class_rating: Option<i32>,
    pub lecturer_rating: Option<i32>,
    #[sea_orm(column_type = "Text", nullable)]
    pub feedback: Option<String>,
    pub feedback_date: Option<i64>,
    #[sea_orm(column_type = "Text", nullable)]
    pub prl_feedback: Option<String>,
    pub prl_feedback_date: Option<i64>,
    #[sea_orm(column_type = "Text", nullable)]
    pub pl_feedback: Option<String>,
    pub pl_feedback_date: Option<i64>,
    pub is_submitted_to_pl: bool,
    pub submitted_to_pl_date: Option<i64>,
    pub created_at: i64,
    pub updated_at: i64,
}

// 课程与讲师均以字符串关联，不声明外键关系
#[derive(Copy, Clone, Debug, EnumIter, DeriveRelation)]
pub enum Relation {}

impl ActiveModelBehavior for ActiveModel {}

// 从数据库模型转换为业务模型
impl Model {
    pub fn into_report(self) -> crate::models::reports::entities::Report {
        use crate::models::common::{ProgramType, Stream};
        use crate::models::reports::entities::{Report, ReportDetails, ReportKind, ReportStatus};
        use chrono::{DateTime, Utc};

        let ts = |t: i64| DateTime::<Utc>::from_timestamp(t, 0).unwrap_or_default();

        Report {
            id: self.id,
            kind: self.kind.parse::<ReportKind>().unwrap_or(ReportKind::Student),
            stream: self.stream.parse::<Stream>().unwrap_or(Stream::It),
            program_type: self
                .program_type
                .parse::<ProgramType>()
                .unwrap_or(ProgramType::Degree),
            status: self
                .status
                .parse::<ReportStatus>()
                .unwrap_or(ReportStatus::Submitted),
            details: ReportDetails {
                faculty_name: self.faculty_name,
                class_name: self.class_name,
                week_of_reporting: self.week_of_reporting,
                date_of_lecture: self.date_of_lecture,
                course_name: self.course_name,
                course_code: self.course_code,
                lecturer_name: self.lecturer_name,
                student_name: self.student_name,
                student_number: self.student_number,
                venue: self.venue,
                scheduled_time: self.scheduled_time,
                actual_time: self.actual_time,
                actual_students_present: self.actual_students_present,
                total_registered_students: self.total_registered_students,
                topic_taught: self.topic_taught,
                learning_outcomes: self.learning_outcomes,
                challenges: self.challenges,
                recommendations: self.recommendations,
                issues: self.issues,
                comments: self.comments,
                rating: self.rating,
                class_rating: self.class_rating,
                lecturer_rating: self.lecturer_rating,
            },
            feedback: self.feedback,
            feedback_date: self.feedback_date.map(ts),
            prl_feedback: self.prl_feedback,
            prl_feedback_date: self.prl_feedback_date.map(ts),
            pl_feedback: self.pl_feedback,
            pl_feedback_date: self.pl_feedback_date.map(ts),
            is_submitted_to_pl: self.is_submitted_to_pl,
            submitted_to_pl_date: self.submitted_to_pl_date.map(ts),
            created_at: ts(self.created_at),
            updated_at: ts(self.updated_at),
        }
    }
}
