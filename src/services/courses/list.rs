use actix_web::{HttpRequest, HttpResponse, Result as ActixResult};
use tracing::debug;

use super::CourseService;
use crate::models::ApiResponse;
use crate::models::common::{ProgramType, ScopeQuery};
use crate::models::courses::requests::CourseListQuery;
use crate::models::courses::responses::CoursesByStream;
use crate::services::error_response;

pub async fn list_courses(
    service: &CourseService,
    request: &HttpRequest,
    scope: ScopeQuery,
) -> ActixResult<HttpResponse> {
    let storage = service.get_storage(request)?;

    let query = CourseListQuery {
        stream: scope.stream,
        program_type: scope.program_type,
        lecturer: None,
    };

    match storage.list_courses(query).await {
        Ok(courses) => {
            debug!("Found {} courses", courses.len());
            Ok(HttpResponse::Ok().json(ApiResponse::success(
                courses,
                "Courses retrieved successfully",
            )))
        }
        Err(e) => Ok(error_response(&e)),
    }
}

pub async fn courses_by_stream(
    service: &CourseService,
    request: &HttpRequest,
    program_type: ProgramType,
    scope: ScopeQuery,
) -> ActixResult<HttpResponse> {
    let storage = service.get_storage(request)?;

    let query = CourseListQuery {
        stream: scope.stream,
        program_type: Some(program_type),
        lecturer: None,
    };

    match storage.list_courses(query).await {
        Ok(courses) => Ok(HttpResponse::Ok().json(ApiResponse::success(
            CoursesByStream::from_courses(courses),
            format!("Courses for {program_type} program retrieved successfully"),
        ))),
        Err(e) => Ok(error_response(&e)),
    }
}

pub async fn lecturer_courses(
    service: &CourseService,
    request: &HttpRequest,
    lecturer: String,
    scope: ScopeQuery,
) -> ActixResult<HttpResponse> {
    let storage = service.get_storage(request)?;

    let query = CourseListQuery {
        stream: None,
        program_type: scope.program_type,
        lecturer: Some(lecturer),
    };

    match storage.list_courses(query).await {
        Ok(courses) => Ok(HttpResponse::Ok().json(ApiResponse::success(
            courses,
            "Lecturer courses retrieved successfully",
        ))),
        Err(e) => Ok(error_response(&e)),
    }
}
