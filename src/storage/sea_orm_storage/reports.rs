//! 报告存储操作

use super::SeaOrmStorage;
use crate::entity::reports::{ActiveModel, Column, Entity as Reports};
use crate::errors::{ReportingError, Result};
use crate::models::reports::{
    entities::{NewReport, Report, ReportStatus},
    requests::ReportListQuery,
};
use sea_orm::{
    ActiveModelTrait, ColumnTrait, EntityTrait, PaginatorTrait, QueryFilter, QueryOrder, Set,
};

impl SeaOrmStorage {
    /// 创建报告，状态固定为 submitted
    pub async fn create_report_impl(&self, report: NewReport) -> Result<Report> {
        let now = chrono::Utc::now().timestamp();
        let d = report.details;

        let model = ActiveModel {
            kind: Set(report.kind.to_string()),
            stream: Set(report.stream.to_string()),
            program_type: Set(report.program_type.to_string()),
            status: Set(ReportStatus::Submitted.to_string()),
            faculty_name: Set(d.faculty_name),
            class_name: Set(d.class_name),
            week_of_reporting: Set(d.week_of_reporting),
            date_of_lecture: Set(d.date_of_lecture),
            course_name: Set(d.course_name),
            course_code: Set(d.course_code),
            lecturer_name: Set(d.lecturer_name),
            student_name: Set(d.student_name),
            student_number: Set(d.student_number),
            venue: Set(d.venue),
            scheduled_time: Set(d.scheduled_time),
            actual_time: Set(d.actual_time),
            actual_students_present: Set(d.actual_students_present),
            total_registered_students: Set(d.total_registered_students),
            topic_taught: Set(d.topic_taught),
            learning_outcomes: Set(d.learning_outcomes),
            challenges: Set(d.challenges),
            recommendations: Set(d.recommendations),
            issues: Set(d.issues),
            comments: Set(d.comments),
            rating: Set(d.rating),
            class_rating: Set(d.class_rating),
            lecturer_rating: Set(d.lecturer_rating),
            feedback: Set(None),
            feedback_date: Set(None),
            prl_feedback: Set(None),
            prl_feedback_date: Set(None),
            pl_feedback: Set(None),
            pl_feedback_date: Set(None),
            is_submitted_to_pl: Set(false),
            submitted_to_pl_date: Set(None),
            created_at: Set(now),
            updated_at: Set(now),
            ..Default::default()
        };

        let result = model.insert(&self.db).await.map_err(|e| {
            ReportingError::database_operation(format!("Failed to create report: {e}"))
        })?;

        Ok(result.into_report())
    }

    /// 通过 ID 获取报告
    pub async fn get_report_by_id_impl(&self, id: i64) -> Result<Option<Report>> {
        let result = Reports::find_by_id(id).one(&self.db).await.map_err(|e| {
            ReportingError::database_operation(format!("Failed to query report: {e}"))
        })?;

        Ok(result.map(|m| m.into_report()))
    }

    /// 按条件列出报告
    pub async fn list_reports_impl(&self, query: ReportListQuery) -> Result<Vec<Report>> {
        let mut select = Reports::find();

        // 类型筛选
        if !query.kinds.is_empty() {
            select = select.filter(
                Column::Kind.is_in(query.kinds.iter().map(|k| k.to_string()).collect::<Vec<_>>()),
            );
        }

        if let Some(stream) = query.stream {
            select = select.filter(Column::Stream.eq(stream.to_string()));
        }

        if let Some(program_type) = query.program_type {
            select = select.filter(Column::ProgramType.eq(program_type.to_string()));
        }

        // 课程代码筛选，空列表不匹配任何报告
        if let Some(codes) = query.course_codes {
            if codes.is_empty() {
                return Ok(Vec::new());
            }
            select = select.filter(Column::CourseCode.is_in(codes));
        }

        if let Some(submitted) = query.submitted_to_pl {
            select = select.filter(Column::IsSubmittedToPl.eq(submitted));
        }

        let reports = select
            .order_by_asc(Column::Id)
            .all(&self.db)
            .await
            .map_err(|e| {
                ReportingError::database_operation(format!("Failed to list reports: {e}"))
            })?;

        Ok(reports.into_iter().map(|m| m.into_report()).collect())
    }

    /// 保存审阅意见、状态与上报标记
    pub async fn update_report_impl(&self, report: Report) -> Result<Option<Report>> {
        // 先检查报告是否存在
        let existing = self.get_report_by_id_impl(report.id).await?;
        if existing.is_none() {
            return Ok(None);
        }

        let ts = |t: chrono::DateTime<chrono::Utc>| t.timestamp();

        let model = ActiveModel {
            id: Set(report.id),
            status: Set(report.status.to_string()),
            feedback: Set(report.feedback),
            feedback_date: Set(report.feedback_date.map(ts)),
            prl_feedback: Set(report.prl_feedback),
            prl_feedback_date: Set(report.prl_feedback_date.map(ts)),
            pl_feedback: Set(report.pl_feedback),
            pl_feedback_date: Set(report.pl_feedback_date.map(ts)),
            is_submitted_to_pl: Set(report.is_submitted_to_pl),
            submitted_to_pl_date: Set(report.submitted_to_pl_date.map(ts)),
            updated_at: Set(chrono::Utc::now().timestamp()),
            ..Default::default()
        };

        model.update(&self.db).await.map_err(|e| {
            ReportingError::database_operation(format!("Failed to update report: {e}"))
        })?;

        self.get_report_by_id_impl(report.id).await
    }

    /// 删除报告
    pub async fn delete_report_impl(&self, id: i64) -> Result<bool> {
        let result = Reports::delete_by_id(id).exec(&self.db).await.map_err(|e| {
            ReportingError::database_operation(format!("Failed to delete report: {e}"))
        })?;

        Ok(result.rows_affected > 0)
    }

    /// 报告总数
    pub async fn count_reports_impl(&self) -> Result<u64> {
        Reports::find().count(&self.db).await.map_err(|e| {
            ReportingError::database_operation(format!("Failed to count reports: {e}"))
        })
    }
}
