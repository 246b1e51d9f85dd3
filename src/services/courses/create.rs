use actix_web::{HttpRequest, HttpResponse, Result as ActixResult};
use tracing::info;

use super::CourseService;
use crate::errors::ReportingError;
use crate::models::ApiResponse;
use crate::models::courses::requests::CreateCourseRequest;
use crate::services::error_response;

pub async fn create_course(
    service: &CourseService,
    request: &HttpRequest,
    course_data: CreateCourseRequest,
) -> ActixResult<HttpResponse> {
    let storage = service.get_storage(request)?;
    let default_stream = service.get_config().workflow.default_stream();

    // 1. 必填字段校验
    let new_course = match course_data.into_new_course(default_stream) {
        Ok(course) => course,
        Err(e) => return Ok(error_response(&e)),
    };

    // 2. 同一项目类型下课程代码唯一
    match storage
        .get_course_by_code_and_program(&new_course.code, new_course.program_type)
        .await
    {
        Ok(Some(_)) => {
            return Ok(error_response(&ReportingError::validation(format!(
                "Course with code {} already exists in {} program",
                new_course.code, new_course.program_type
            ))));
        }
        Ok(None) => {}
        Err(e) => return Ok(error_response(&e)),
    }

    // 3. 创建课程
    match storage.create_course(new_course).await {
        Ok(course) => {
            info!(
                "Course {} ({}) assigned to {}",
                course.code, course.program_type, course.lecturer
            );
            Ok(HttpResponse::Created()
                .json(ApiResponse::success(course, "Course assigned successfully")))
        }
        Err(e) => Ok(error_response(&e)),
    }
}
