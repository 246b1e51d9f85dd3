use actix_web::{HttpRequest, HttpResponse, Result as ActixResult};

use super::ReportService;
use crate::errors::ReportingError;
use crate::middlewares::RequireJWT;
use crate::models::ApiResponse;
use crate::services::error_response;

pub async fn delete_report(
    service: &ReportService,
    request: &HttpRequest,
    report_id: i64,
) -> ActixResult<HttpResponse> {
    let storage = service.get_storage(request)?;

    match storage.delete_report(report_id).await {
        Ok(true) => {
            let operator = RequireJWT::extract_user_claims(request)
                .map(|u| u.username)
                .unwrap_or_default();
            tracing::info!("Report {} deleted by {}", report_id, operator);
            Ok(HttpResponse::Ok().json(ApiResponse::success_empty(
                "Report deleted successfully",
            )))
        }
        Ok(false) => Ok(error_response(&ReportingError::not_found("Report not found"))),
        Err(e) => Ok(error_response(&e)),
    }
}
