use actix_web::{HttpRequest, HttpResponse, Result as ActixResult};

use super::CourseService;
use crate::errors::ReportingError;
use crate::models::ApiResponse;
use crate::services::error_response;

pub async fn delete_course(
    service: &CourseService,
    request: &HttpRequest,
    course_id: i64,
) -> ActixResult<HttpResponse> {
    let storage = service.get_storage(request)?;

    match storage.delete_course(course_id).await {
        Ok(true) => {
            tracing::info!("Course {} deleted", course_id);
            Ok(HttpResponse::Ok().json(ApiResponse::success_empty(
                "Course deleted successfully",
            )))
        }
        Ok(false) => Ok(error_response(&ReportingError::not_found("Course not found"))),
        Err(e) => Ok(error_response(&e)),
    }
}
