use actix_web::{HttpRequest, HttpResponse, Result as ActixResult};
use tracing::{info, warn};

use super::ReportService;
use crate::errors::ReportingError;
use crate::models::ApiResponse;
use crate::models::reports::requests::{GroupSubmitRequest, ReportRef};
use crate::models::reports::responses::GroupSubmitResponse;
use crate::services::error_response;
use crate::workflow::{EscalationOutcome, escalate};

pub async fn group_submit(
    service: &ReportService,
    request: &HttpRequest,
    body: GroupSubmitRequest,
) -> ActixResult<HttpResponse> {
    let storage = service.get_storage(request)?;
    let enforce = service.get_config().workflow.enforce_transitions;

    let (Some(stream), Some(program_type)) = (body.stream, body.program_type) else {
        return Ok(error_response(&ReportingError::validation(
            "Missing required fields: stream and programType",
        )));
    };

    let refs = body
        .selected_reports
        .map(|selected| selected.into_unique_refs())
        .unwrap_or_default();
    if refs.is_empty() {
        return Ok(error_response(&ReportingError::validation(
            "No reports selected for submission",
        )));
    }

    info!(
        "Submitting {} report(s) to PL for {}/{}",
        refs.len(),
        stream,
        program_type
    );

    let mut tally = GroupSubmitResponse::new(refs.len());
    for report_ref in &refs {
        let ReportRef::Id(id) = report_ref else {
            tally.record_not_found(report_ref);
            continue;
        };

        let mut report = match storage.get_report_by_id(*id).await {
            Ok(Some(report)) => report,
            Ok(None) => {
                tally.record_not_found(report_ref);
                continue;
            }
            Err(e) => {
                tally.record_failure(report_ref, e.message());
                continue;
            }
        };

        let outcome = escalate(&mut report, chrono::Utc::now(), enforce);
        if outcome != EscalationOutcome::Escalated {
            tally.record(report_ref, outcome);
            continue;
        }

        match storage.update_report(report).await {
            Ok(Some(_)) => tally.record(report_ref, EscalationOutcome::Escalated),
            Ok(None) => tally.record_not_found(report_ref),
            Err(e) => tally.record_failure(report_ref, e.message()),
        }
    }

    if !tally.errors.is_empty() {
        warn!("Group submission finished with errors: {:?}", tally.errors);
    }

    let message = tally.summary_message();
    Ok(HttpResponse::Ok().json(ApiResponse::success(tally, message)))
}
