use actix_web::{HttpRequest, HttpResponse, Result as ActixResult};

use super::ReportService;
use crate::models::ApiResponse;
use crate::models::common::ScopeQuery;
use crate::models::reports::requests::{CompileRequest, ReportListQuery};
use crate::models::reports::responses::CompileSummary;
use crate::services::error_response;

pub async fn compile_reports(
    service: &ReportService,
    request: &HttpRequest,
    body: CompileRequest,
) -> ActixResult<HttpResponse> {
    let storage = service.get_storage(request)?;
    let scope = ScopeQuery::new(body.stream, body.program_type);

    match storage
        .list_reports(ReportListQuery::scoped(scope.stream, scope.program_type))
        .await
    {
        Ok(reports) => {
            let summary = CompileSummary::from_reports(&reports, scope, chrono::Utc::now());
            tracing::info!(
                "Compiled {} report(s) for {}/{}",
                summary.total_reports,
                summary.stream,
                summary.program_type
            );
            Ok(HttpResponse::Ok().json(ApiResponse::success(
                summary,
                "Reports compiled successfully",
            )))
        }
        Err(e) => Ok(error_response(&e)),
    }
}
