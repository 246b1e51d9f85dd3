pub mod create;
pub mod delete;
pub mod list;
pub mod update;

use actix_web::{HttpRequest, HttpResponse, Result as ActixResult};
use std::sync::Arc;

use crate::config::AppConfig;
use crate::models::common::{ProgramType, ScopeQuery};
use crate::models::courses::requests::{CreateCourseRequest, UpdateCourseRequest};
use crate::storage::Storage;

pub struct CourseService {
    storage: Option<Arc<dyn Storage>>,
}

impl CourseService {
    pub fn new_lazy() -> Self {
        Self { storage: None }
    }

    pub(crate) fn get_storage(&self, request: &HttpRequest) -> ActixResult<Arc<dyn Storage>> {
        if let Some(storage) = &self.storage {
            return Ok(storage.clone());
        }
        request
            .app_data::<actix_web::web::Data<Arc<dyn Storage>>>()
            .map(|data| data.get_ref().clone())
            .ok_or_else(|| {
                actix_web::error::ErrorInternalServerError("Storage not found in app data")
            })
    }

    pub(crate) fn get_config(&self) -> &AppConfig {
        AppConfig::get()
    }

    // 列出课程
    pub async fn list_courses(
        &self,
        request: &HttpRequest,
        scope: ScopeQuery,
    ) -> ActixResult<HttpResponse> {
        list::list_courses(self, request, scope).await
    }

    // 某项目类型下按方向分组的课程
    pub async fn courses_by_stream(
        &self,
        request: &HttpRequest,
        program_type: ProgramType,
        scope: ScopeQuery,
    ) -> ActixResult<HttpResponse> {
        list::courses_by_stream(self, request, program_type, scope).await
    }

    // 讲师的课程
    pub async fn lecturer_courses(
        &self,
        request: &HttpRequest,
        lecturer: String,
        scope: ScopeQuery,
    ) -> ActixResult<HttpResponse> {
        list::lecturer_courses(self, request, lecturer, scope).await
    }

    pub async fn create_course(
        &self,
        request: &HttpRequest,
        course_data: CreateCourseRequest,
    ) -> ActixResult<HttpResponse> {
        create::create_course(self, request, course_data).await
    }

    // 更新课程信息
    pub async fn update_course(
        &self,
        request: &HttpRequest,
        course_id: i64,
        update_data: UpdateCourseRequest,
    ) -> ActixResult<HttpResponse> {
        update::update_course(self, request, course_id, update_data).await
    }

    // 根据课程 ID 删除课程
    pub async fn delete_course(
        &self,
        request: &HttpRequest,
        course_id: i64,
    ) -> ActixResult<HttpResponse> {
        delete::delete_course(self, request, course_id).await
    }
}
