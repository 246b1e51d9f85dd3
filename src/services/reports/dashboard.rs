use actix_web::{HttpRequest, HttpResponse, Result as ActixResult};

use super::ReportService;
use super::list::assigned_courses_and_reports;
use crate::models::ApiResponse;
use crate::models::common::ScopeQuery;
use crate::models::reports::requests::ReportListQuery;
use crate::models::reports::responses::{DashboardResponse, DashboardStatistics, GroupedReports};
use crate::services::error_response;

pub async fn prl_dashboard(
    service: &ReportService,
    request: &HttpRequest,
    scope: ScopeQuery,
) -> ActixResult<HttpResponse> {
    let storage = service.get_storage(request)?;

    let all = match storage
        .list_reports(ReportListQuery::scoped(scope.stream, scope.program_type))
        .await
    {
        Ok(reports) => reports,
        Err(e) => return Ok(error_response(&e)),
    };

    let (assigned_courses, assigned_reports) =
        match assigned_courses_and_reports(&storage, scope).await {
            Ok(result) => result,
            Err(e) => return Ok(error_response(&e)),
        };

    let total_all_reports = all.len();
    let (submitted_to_pl_reports, pending): (Vec<_>, Vec<_>) =
        all.into_iter().partition(|r| r.is_submitted_to_pl);

    let statistics = DashboardStatistics {
        total_assigned_courses: assigned_courses.len(),
        total_all_reports,
        total_assigned_course_reports: assigned_reports.len(),
        total_submitted_to_pl: submitted_to_pl_reports.len(),
    };

    Ok(HttpResponse::Ok().json(ApiResponse::success(
        DashboardResponse {
            all_reports: GroupedReports::from_reports(pending),
            assigned_course_reports: GroupedReports::from_reports(assigned_reports),
            submitted_to_pl_reports,
            assigned_courses,
            statistics,
        },
        "PRL dashboard data retrieved successfully",
    )))
}
