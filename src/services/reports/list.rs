use std::sync::Arc;

use actix_web::{HttpRequest, HttpResponse, Result as ActixResult};

use super::{ReportService, STUDENT_CHANNEL_KINDS};
use crate::errors::Result;
use crate::models::ApiResponse;
use crate::models::common::ScopeQuery;
use crate::models::courses::entities::Course;
use crate::models::courses::requests::CourseListQuery;
use crate::models::reports::entities::{Report, ReportKind};
use crate::models::reports::requests::{ByCoursesRequest, ReportListQuery};
use crate::models::reports::responses::{
    AllReportsResponse, AssignedCourseReportsResponse, GroupedReports, GroupedReportsResponse,
    ReportsByCoursesResponse,
};
use crate::services::error_response;
use crate::storage::Storage;

/// 各查询入口对应的报告切片
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ReportSlice {
    /// 学生报告与评分表
    Student,
    Lecturer,
    /// PRL 视角：全部类型
    Prl,
    /// 已上报 PL 的报告
    Pl,
    /// 仅 PRL 报告
    PrlSpecific,
    Detailed,
}

impl ReportSlice {
    pub fn query(self, scope: ScopeQuery) -> ReportListQuery {
        let base = ReportListQuery::scoped(scope.stream, scope.program_type);
        match self {
            ReportSlice::Student => base.with_kinds(STUDENT_CHANNEL_KINDS),
            ReportSlice::Lecturer => base.with_kinds(&[ReportKind::Lecturer]),
            ReportSlice::PrlSpecific => base.with_kinds(&[ReportKind::Prl]),
            ReportSlice::Pl => base.submitted_to_pl(true),
            ReportSlice::Prl | ReportSlice::Detailed => base,
        }
    }

    fn description(self) -> &'static str {
        match self {
            ReportSlice::Student => "Student reports",
            ReportSlice::Lecturer => "Lecturer reports",
            ReportSlice::Prl => "PRL reports",
            ReportSlice::Pl => "PL reports",
            ReportSlice::PrlSpecific => "PRL specific reports",
            ReportSlice::Detailed => "Detailed reports",
        }
    }
}

pub async fn list_reports(
    service: &ReportService,
    request: &HttpRequest,
    slice: ReportSlice,
    scope: ScopeQuery,
) -> ActixResult<HttpResponse> {
    let storage = service.get_storage(request)?;

    match storage.list_reports(slice.query(scope)).await {
        Ok(reports) => Ok(HttpResponse::Ok().json(ApiResponse::success(
            reports,
            format!("{} retrieved successfully", slice.description()),
        ))),
        Err(e) => Ok(error_response(&e)),
    }
}

pub async fn grouped_reports(
    service: &ReportService,
    request: &HttpRequest,
    scope: ScopeQuery,
) -> ActixResult<HttpResponse> {
    let storage = service.get_storage(request)?;

    match storage
        .list_reports(ReportListQuery::scoped(scope.stream, scope.program_type))
        .await
    {
        Ok(reports) => {
            let grouped = GroupedReports::from_reports(reports);
            let counts = grouped.counts();
            Ok(HttpResponse::Ok().json(ApiResponse::success(
                GroupedReportsResponse {
                    reports: grouped,
                    counts,
                },
                "Grouped reports retrieved successfully",
            )))
        }
        Err(e) => Ok(error_response(&e)),
    }
}

pub async fn all_reports(
    service: &ReportService,
    request: &HttpRequest,
    scope: ScopeQuery,
) -> ActixResult<HttpResponse> {
    let storage = service.get_storage(request)?;

    match storage
        .list_reports(ReportListQuery::scoped(scope.stream, scope.program_type))
        .await
    {
        Ok(reports) => {
            let grouped = GroupedReports::from_reports(reports);
            let total = grouped.total();
            Ok(HttpResponse::Ok().json(ApiResponse::success(
                AllReportsResponse {
                    reports: grouped,
                    total,
                },
                "All reports retrieved successfully",
            )))
        }
        Err(e) => Ok(error_response(&e)),
    }
}

pub async fn reports_by_courses(
    service: &ReportService,
    request: &HttpRequest,
    scope: ScopeQuery,
    body: ByCoursesRequest,
) -> ActixResult<HttpResponse> {
    let storage = service.get_storage(request)?;

    // 未给出课程代码时不按课程筛选
    let mut query = ReportListQuery::scoped(None, scope.program_type);
    if !body.course_codes.is_empty() {
        query = query.with_course_codes(body.course_codes);
    }

    match storage.list_reports(query).await {
        Ok(reports) => {
            let count = reports.len();
            Ok(HttpResponse::Ok().json(ApiResponse::success(
                ReportsByCoursesResponse { reports, count },
                "Reports retrieved successfully",
            )))
        }
        Err(e) => Ok(error_response(&e)),
    }
}

/// 范围内的课程，以及这些课程代码下的报告
///
/// 范围内没有课程时不按课程代码筛选，返回该项目类型下的全部报告。
pub(super) async fn assigned_courses_and_reports(
    storage: &Arc<dyn Storage>,
    scope: ScopeQuery,
) -> Result<(Vec<Course>, Vec<Report>)> {
    let courses = storage
        .list_courses(CourseListQuery {
            stream: scope.stream,
            program_type: scope.program_type,
            lecturer: None,
        })
        .await?;

    let mut query = ReportListQuery::scoped(None, scope.program_type);
    if !courses.is_empty() {
        query = query.with_course_codes(courses.iter().map(|c| c.code.clone()).collect());
    }
    let reports = storage.list_reports(query).await?;

    Ok((courses, reports))
}

pub async fn assigned_course_reports(
    service: &ReportService,
    request: &HttpRequest,
    scope: ScopeQuery,
) -> ActixResult<HttpResponse> {
    let storage = service.get_storage(request)?;

    match assigned_courses_and_reports(&storage, scope).await {
        Ok((assigned_courses, reports)) => {
            let total_reports = reports.len();
            Ok(HttpResponse::Ok().json(ApiResponse::success(
                AssignedCourseReportsResponse {
                    reports: GroupedReports::from_reports(reports),
                    assigned_courses,
                    total_reports,
                },
                "Assigned course reports retrieved successfully",
            )))
        }
        Err(e) => Ok(error_response(&e)),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::common::{ProgramType, Stream};

    #[test]
    fn test_slice_queries() {
        let scope = ScopeQuery::new(Some(Stream::Cs), Some(ProgramType::Diploma));

        let student = ReportSlice::Student.query(scope);
        assert_eq!(student.kinds, vec![ReportKind::Student, ReportKind::Rating]);
        assert_eq!(student.stream, Some(Stream::Cs));

        let pl = ReportSlice::Pl.query(scope);
        assert!(pl.kinds.is_empty());
        assert_eq!(pl.submitted_to_pl, Some(true));

        let prl = ReportSlice::PrlSpecific.query(scope);
        assert_eq!(prl.kinds, vec![ReportKind::Prl]);
        assert_eq!(prl.submitted_to_pl, None);
    }
}
