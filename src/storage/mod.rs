use std::sync::Arc;

use crate::models::{
    courses::{
        entities::{Course, NewCourse},
        requests::{CourseListQuery, UpdateCourseRequest},
    },
    common::ProgramType,
    reports::{
        entities::{NewReport, Report},
        requests::ReportListQuery,
    },
    users::{entities::User, requests::CreateUserRequest},
};

use crate::errors::Result;

pub mod sea_orm_storage;

#[async_trait::async_trait]
pub trait Storage: Send + Sync {
    /// 用户管理方法
    // 创建用户
    async fn create_user(&self, user: CreateUserRequest) -> Result<User>;
    // 通过ID获取用户信息
    async fn get_user_by_id(&self, id: i64) -> Result<Option<User>>;
    // 通过用户名获取用户信息
    async fn get_user_by_username(&self, username: &str) -> Result<Option<User>>;
    // 通过邮箱获取用户信息
    async fn get_user_by_email(&self, email: &str) -> Result<Option<User>>;
    // 通过用户名或邮箱获取用户信息
    async fn get_user_by_username_or_email(&self, identifier: &str) -> Result<Option<User>>;
    // 用户总数
    async fn count_users(&self) -> Result<u64>;

    /// 课程管理方法
    // 创建课程
    async fn create_course(&self, course: NewCourse) -> Result<Course>;
    // 通过ID获取课程
    async fn get_course_by_id(&self, id: i64) -> Result<Option<Course>>;
    // 通过课程代码与项目类型获取课程
    async fn get_course_by_code_and_program(
        &self,
        code: &str,
        program_type: ProgramType,
    ) -> Result<Option<Course>>;
    // 列出课程
    async fn list_courses(&self, query: CourseListQuery) -> Result<Vec<Course>>;
    // 更新课程
    async fn update_course(&self, id: i64, update: UpdateCourseRequest) -> Result<Option<Course>>;
    // 删除课程
    async fn delete_course(&self, id: i64) -> Result<bool>;
    // 课程总数
    async fn count_courses(&self) -> Result<u64>;

    /// 报告管理方法
    // 创建报告
    async fn create_report(&self, report: NewReport) -> Result<Report>;
    // 通过ID获取报告
    async fn get_report_by_id(&self, id: i64) -> Result<Option<Report>>;
    // 按条件列出报告（按ID升序）
    async fn list_reports(&self, query: ReportListQuery) -> Result<Vec<Report>>;
    // 保存报告的审阅与上报字段，报告不存在时返回 None
    async fn update_report(&self, report: Report) -> Result<Option<Report>>;
    // 删除报告
    async fn delete_report(&self, id: i64) -> Result<bool>;
    // 报告总数
    async fn count_reports(&self) -> Result<u64>;
}

pub async fn create_storage() -> Result<Arc<dyn Storage>> {
    let storage = sea_orm_storage::SeaOrmStorage::new_async().await?;
    Ok(Arc::new(storage))
}
