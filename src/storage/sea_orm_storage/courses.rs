//! 课程存储操作

use super::SeaOrmStorage;
use crate::entity::courses::{ActiveModel, Column, Entity as Courses};
use crate::errors::{ReportingError, Result};
use crate::models::{
    common::ProgramType,
    courses::{
        entities::{Course, NewCourse},
        requests::{CourseListQuery, UpdateCourseRequest},
    },
};
use sea_orm::{
    ActiveModelTrait, ColumnTrait, EntityTrait, PaginatorTrait, QueryFilter, QueryOrder, Set,
};

impl SeaOrmStorage {
    /// 创建课程
    pub async fn create_course_impl(&self, course: NewCourse) -> Result<Course> {
        let now = chrono::Utc::now().timestamp();

        let model = ActiveModel {
            name: Set(course.name),
            code: Set(course.code),
            lecturer: Set(course.lecturer),
            stream: Set(course.stream.to_string()),
            faculty: Set(course.faculty),
            program_type: Set(course.program_type.to_string()),
            semester: Set(Some(course.semester)),
            year: Set(Some(course.year)),
            schedule_day: Set(course.schedule.day),
            schedule_time: Set(course.schedule.time),
            schedule_room: Set(course.schedule.room),
            created_at: Set(now),
            updated_at: Set(now),
            ..Default::default()
        };

        let result = model.insert(&self.db).await.map_err(|e| {
            ReportingError::database_operation(format!("Failed to create course: {e}"))
        })?;

        Ok(result.into_course())
    }

    /// 通过 ID 获取课程
    pub async fn get_course_by_id_impl(&self, id: i64) -> Result<Option<Course>> {
        let result = Courses::find_by_id(id).one(&self.db).await.map_err(|e| {
            ReportingError::database_operation(format!("Failed to query course: {e}"))
        })?;

        Ok(result.map(|m| m.into_course()))
    }

    /// 通过课程代码与项目类型获取课程
    pub async fn get_course_by_code_and_program_impl(
        &self,
        code: &str,
        program_type: ProgramType,
    ) -> Result<Option<Course>> {
        let result = Courses::find()
            .filter(Column::Code.eq(code))
            .filter(Column::ProgramType.eq(program_type.to_string()))
            .one(&self.db)
            .await
            .map_err(|e| {
                ReportingError::database_operation(format!("Failed to query course: {e}"))
            })?;

        Ok(result.map(|m| m.into_course()))
    }

    /// 列出课程
    pub async fn list_courses_impl(&self, query: CourseListQuery) -> Result<Vec<Course>> {
        let mut select = Courses::find();

        if let Some(stream) = query.stream {
            select = select.filter(Column::Stream.eq(stream.to_string()));
        }

        if let Some(program_type) = query.program_type {
            select = select.filter(Column::ProgramType.eq(program_type.to_string()));
        }

        // 讲师以姓名精确匹配
        if let Some(ref lecturer) = query.lecturer {
            select = select.filter(Column::Lecturer.eq(lecturer.as_str()));
        }

        let courses = select
            .order_by_asc(Column::Id)
            .all(&self.db)
            .await
            .map_err(|e| {
                ReportingError::database_operation(format!("Failed to list courses: {e}"))
            })?;

        Ok(courses.into_iter().map(|m| m.into_course()).collect())
    }

    /// 更新课程
    pub async fn update_course_impl(
        &self,
        id: i64,
        update: UpdateCourseRequest,
    ) -> Result<Option<Course>> {
        // 先检查课程是否存在
        let existing = self.get_course_by_id_impl(id).await?;
        if existing.is_none() {
            return Ok(None);
        }

        let now = chrono::Utc::now().timestamp();

        let mut model = ActiveModel {
            id: Set(id),
            updated_at: Set(now),
            ..Default::default()
        };

        if let Some(name) = update.name {
            model.name = Set(name);
        }
        if let Some(code) = update.code {
            model.code = Set(code);
        }
        if let Some(lecturer) = update.lecturer {
            model.lecturer = Set(lecturer);
        }
        if let Some(stream) = update.stream {
            model.stream = Set(stream.to_string());
        }
        if let Some(faculty) = update.faculty {
            model.faculty = Set(faculty);
        }
        if let Some(program_type) = update.program_type {
            model.program_type = Set(program_type.to_string());
        }
        if let Some(semester) = update.semester {
            model.semester = Set(Some(semester));
        }
        if let Some(year) = update.year {
            model.year = Set(Some(year));
        }
        if let Some(schedule) = update.schedule {
            if let Some(day) = schedule.day {
                model.schedule_day = Set(Some(day));
            }
            if let Some(time) = schedule.time {
                model.schedule_time = Set(Some(time));
            }
            if let Some(room) = schedule.room {
                model.schedule_room = Set(Some(room));
            }
        }

        model.update(&self.db).await.map_err(|e| {
            ReportingError::database_operation(format!("Failed to update course: {e}"))
        })?;

        self.get_course_by_id_impl(id).await
    }

    /// 删除课程
    pub async fn delete_course_impl(&self, id: i64) -> Result<bool> {
        let result = Courses::delete_by_id(id).exec(&self.db).await.map_err(|e| {
            ReportingError::database_operation(format!("Failed to delete course: {e}"))
        })?;

        Ok(result.rows_affected > 0)
    }

    /// 课程总数
    pub async fn count_courses_impl(&self) -> Result<u64> {
        Courses::find().count(&self.db).await.map_err(|e| {
            ReportingError::database_operation(format!("Failed to count courses: {e}"))
        })
    }
}
