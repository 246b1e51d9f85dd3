use actix_web::{HttpRequest, HttpResponse, Result as ActixResult};
use tracing::{debug, info};

use super::ReportService;
use crate::models::ApiResponse;
use crate::models::reports::entities::NewReport;
use crate::models::reports::requests::{SubmissionChannel, SubmitReportRequest};
use crate::services::error_response;
use crate::workflow::validate_details;

pub async fn submit_report(
    service: &ReportService,
    request: &HttpRequest,
    channel: SubmissionChannel,
    body: SubmitReportRequest,
) -> ActixResult<HttpResponse> {
    let storage = service.get_storage(request)?;
    let workflow = &service.get_config().workflow;

    // 1. 确定报告类型
    let kind = match body.resolve_kind(channel) {
        Ok(kind) => kind,
        Err(e) => return Ok(error_response(&e)),
    };

    // 2. 字段间校验
    if let Err(e) = validate_details(&body.details) {
        return Ok(error_response(&e));
    }

    let new_report = NewReport {
        kind,
        stream: body.stream.unwrap_or_else(|| workflow.default_stream()),
        program_type: body
            .program_type
            .unwrap_or_else(|| workflow.default_program_type()),
        details: body.details,
    };
    debug!(
        "Submitting {} via {:?} channel ({}/{})",
        kind, channel, new_report.stream, new_report.program_type
    );

    // 3. 写入存储
    match storage.create_report(new_report).await {
        Ok(report) => {
            info!("{} {} submitted", kind.label(), report.id);
            Ok(HttpResponse::Created().json(ApiResponse::success(
                report,
                format!("{} submitted successfully", kind.label()),
            )))
        }
        Err(e) => Ok(error_response(&e)),
    }
}
