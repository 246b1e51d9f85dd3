use actix_web::{HttpRequest, HttpResponse, Result as ActixResult};
use tracing::{info, warn};

use super::ReportService;
use crate::errors::ReportingError;
use crate::models::ApiResponse;
use crate::models::reports::requests::FeedbackRequest;
use crate::services::error_response;
use crate::workflow::FeedbackAction;

pub async fn add_feedback(
    service: &ReportService,
    request: &HttpRequest,
    report_id: i64,
    action: FeedbackAction,
    body: FeedbackRequest,
) -> ActixResult<HttpResponse> {
    let storage = service.get_storage(request)?;
    let enforce = service.get_config().workflow.enforce_transitions;

    // 1. 查找报告
    let mut report = match storage.get_report_by_id(report_id).await {
        Ok(Some(report)) => report,
        Ok(None) => {
            return Ok(error_response(&ReportingError::not_found("Report not found")));
        }
        Err(e) => return Ok(error_response(&e)),
    };

    // 2. 意见不能为空
    let Some(feedback) = body.feedback else {
        return Ok(error_response(&ReportingError::validation(
            "Feedback is required",
        )));
    };

    // 3. 状态流转
    if let Err(e) = action.apply(&mut report, feedback, chrono::Utc::now(), enforce) {
        warn!("Rejected {:?} on report {}: {}", action, report_id, e);
        return Ok(error_response(&e));
    }

    // 4. 保存（后写覆盖）
    match storage.update_report(report).await {
        Ok(Some(updated)) => {
            info!(
                "{:?} recorded on report {} (status {})",
                action, updated.id, updated.status
            );
            Ok(HttpResponse::Ok().json(ApiResponse::success(
                updated,
                "Feedback added successfully",
            )))
        }
        Ok(None) => Ok(error_response(&ReportingError::not_found("Report not found"))),
        Err(e) => Ok(error_response(&e)),
    }
}
