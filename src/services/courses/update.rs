use actix_web::{HttpRequest, HttpResponse, Result as ActixResult};

use super::CourseService;
use crate::errors::ReportingError;
use crate::models::ApiResponse;
use crate::models::courses::requests::UpdateCourseRequest;
use crate::services::error_response;

pub async fn update_course(
    service: &CourseService,
    request: &HttpRequest,
    course_id: i64,
    update_data: UpdateCourseRequest,
) -> ActixResult<HttpResponse> {
    let storage = service.get_storage(request)?;

    let existing = match storage.get_course_by_id(course_id).await {
        Ok(Some(course)) => course,
        Ok(None) => return Ok(error_response(&ReportingError::not_found("Course not found"))),
        Err(e) => return Ok(error_response(&e)),
    };

    // 修改代码或项目类型后仍需保持唯一
    let code = update_data.code.as_deref().unwrap_or(&existing.code);
    let program_type = update_data.program_type.unwrap_or(existing.program_type);
    match storage
        .get_course_by_code_and_program(code, program_type)
        .await
    {
        Ok(Some(other)) if other.id != course_id => {
            return Ok(error_response(&ReportingError::validation(format!(
                "Course with code {code} already exists in {program_type} program"
            ))));
        }
        Ok(_) => {}
        Err(e) => return Ok(error_response(&e)),
    }

    match storage.update_course(course_id, update_data).await {
        Ok(Some(course)) => {
            tracing::info!("Course {} updated", course.id);
            Ok(HttpResponse::Ok().json(ApiResponse::success(
                course,
                "Course updated successfully",
            )))
        }
        Ok(None) => Ok(error_response(&ReportingError::not_found("Course not found"))),
        Err(e) => Ok(error_response(&e)),
    }
}
