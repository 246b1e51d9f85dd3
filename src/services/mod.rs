pub mod auth;
pub mod courses;
pub mod reports;
pub mod system;

pub use auth::AuthService;
pub use courses::CourseService;
pub use reports::ReportService;
pub use system::SystemService;

use actix_web::{HttpResponse, http::StatusCode};

use crate::errors::ReportingError;
use crate::models::ApiResponse;

/// 业务错误到 HTTP 状态码的映射
pub(crate) fn status_for(err: &ReportingError) -> StatusCode {
    match err {
        ReportingError::Validation(_) => StatusCode::BAD_REQUEST,
        ReportingError::NotFound(_) => StatusCode::NOT_FOUND,
        ReportingError::InvalidTransition(_) => StatusCode::CONFLICT,
        ReportingError::Authentication(_) => StatusCode::UNAUTHORIZED,
        ReportingError::Authorization(_) => StatusCode::FORBIDDEN,
        _ => StatusCode::INTERNAL_SERVER_ERROR,
    }
}

// 统一的错误响应
pub(crate) fn error_response(err: &ReportingError) -> HttpResponse {
    let status = status_for(err);
    if status.is_server_error() {
        tracing::error!("{}", err);
    }
    HttpResponse::build(status).json(ApiResponse::<()>::from(err))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_status_mapping() {
        assert_eq!(
            status_for(&ReportingError::validation("x")),
            StatusCode::BAD_REQUEST
        );
        assert_eq!(
            status_for(&ReportingError::not_found("x")),
            StatusCode::NOT_FOUND
        );
        assert_eq!(
            status_for(&ReportingError::invalid_transition("x")),
            StatusCode::CONFLICT
        );
        assert_eq!(
            status_for(&ReportingError::authentication("x")),
            StatusCode::UNAUTHORIZED
        );
        assert_eq!(
            status_for(&ReportingError::database_operation("x")),
            StatusCode::INTERNAL_SERVER_ERROR
        );
    }
}
