use actix_web::{HttpRequest, HttpResponse, Result as ActixResult, web};
use once_cell::sync::Lazy;

use crate::middlewares;
use crate::models::common::{ProgramQuery, ScopeQuery};
use crate::models::reports::requests::{
    ByCoursesRequest, CompileRequest, FeedbackRequest, GroupSubmitRequest, SubmissionChannel,
    SubmitReportRequest,
};
use crate::models::users::entities::UserRole;
use crate::services::ReportService;
use crate::services::reports::ReportSlice;
use crate::utils::SafeIDI64;
use crate::workflow::FeedbackAction;

// 懒加载的全局 REPORT_SERVICE 实例
static REPORT_SERVICE: Lazy<ReportService> = Lazy::new(ReportService::new_lazy);

// 提交
pub async fn submit_student_report(
    req: HttpRequest,
    body: web::Json<SubmitReportRequest>,
) -> ActixResult<HttpResponse> {
    REPORT_SERVICE
        .submit_report(&req, SubmissionChannel::Student, body.into_inner())
        .await
}

pub async fn submit_lecturer_report(
    req: HttpRequest,
    body: web::Json<SubmitReportRequest>,
) -> ActixResult<HttpResponse> {
    REPORT_SERVICE
        .submit_report(&req, SubmissionChannel::Lecturer, body.into_inner())
        .await
}

pub async fn submit_prl_report(
    req: HttpRequest,
    body: web::Json<SubmitReportRequest>,
) -> ActixResult<HttpResponse> {
    REPORT_SERVICE
        .submit_report(&req, SubmissionChannel::Prl, body.into_inner())
        .await
}

// 查询
pub async fn list_student_reports(
    req: HttpRequest,
    query: web::Query<ProgramQuery>,
) -> ActixResult<HttpResponse> {
    REPORT_SERVICE
        .list_reports(&req, ReportSlice::Student, query.into_inner().into())
        .await
}

pub async fn list_lecturer_reports(
    req: HttpRequest,
    query: web::Query<ProgramQuery>,
) -> ActixResult<HttpResponse> {
    REPORT_SERVICE
        .list_reports(&req, ReportSlice::Lecturer, query.into_inner().into())
        .await
}

pub async fn list_prl_reports(
    req: HttpRequest,
    query: web::Query<ScopeQuery>,
) -> ActixResult<HttpResponse> {
    REPORT_SERVICE
        .list_reports(&req, ReportSlice::Prl, query.into_inner())
        .await
}

pub async fn list_pl_reports(
    req: HttpRequest,
    query: web::Query<ProgramQuery>,
) -> ActixResult<HttpResponse> {
    REPORT_SERVICE
        .list_reports(&req, ReportSlice::Pl, query.into_inner().into())
        .await
}

pub async fn list_prl_specific_reports(
    req: HttpRequest,
    query: web::Query<ScopeQuery>,
) -> ActixResult<HttpResponse> {
    REPORT_SERVICE
        .list_reports(&req, ReportSlice::PrlSpecific, query.into_inner())
        .await
}

pub async fn list_detailed_reports(
    req: HttpRequest,
    query: web::Query<ProgramQuery>,
) -> ActixResult<HttpResponse> {
    REPORT_SERVICE
        .list_reports(&req, ReportSlice::Detailed, query.into_inner().into())
        .await
}

pub async fn grouped_reports(
    req: HttpRequest,
    query: web::Query<ScopeQuery>,
) -> ActixResult<HttpResponse> {
    REPORT_SERVICE
        .grouped_reports(&req, query.into_inner())
        .await
}

pub async fn all_reports(
    req: HttpRequest,
    query: web::Query<ScopeQuery>,
) -> ActixResult<HttpResponse> {
    REPORT_SERVICE.all_reports(&req, query.into_inner()).await
}

pub async fn reports_by_courses(
    req: HttpRequest,
    query: web::Query<ProgramQuery>,
    body: web::Json<ByCoursesRequest>,
) -> ActixResult<HttpResponse> {
    REPORT_SERVICE
        .reports_by_courses(&req, query.into_inner().into(), body.into_inner())
        .await
}

pub async fn assigned_course_reports(
    req: HttpRequest,
    query: web::Query<ScopeQuery>,
) -> ActixResult<HttpResponse> {
    REPORT_SERVICE
        .assigned_course_reports(&req, query.into_inner())
        .await
}

// 审阅
pub async fn add_feedback(
    req: HttpRequest,
    report_id: SafeIDI64,
    body: web::Json<FeedbackRequest>,
) -> ActixResult<HttpResponse> {
    REPORT_SERVICE
        .add_feedback(&req, report_id.0, FeedbackAction::Review, body.into_inner())
        .await
}

pub async fn add_rating_feedback(
    req: HttpRequest,
    report_id: SafeIDI64,
    body: web::Json<FeedbackRequest>,
) -> ActixResult<HttpResponse> {
    REPORT_SERVICE
        .add_feedback(
            &req,
            report_id.0,
            FeedbackAction::RatingReview,
            body.into_inner(),
        )
        .await
}

pub async fn add_pl_feedback(
    req: HttpRequest,
    report_id: SafeIDI64,
    body: web::Json<FeedbackRequest>,
) -> ActixResult<HttpResponse> {
    REPORT_SERVICE
        .add_feedback(&req, report_id.0, FeedbackAction::PlReview, body.into_inner())
        .await
}

// 上报与汇总
pub async fn group_submit(
    req: HttpRequest,
    body: web::Json<GroupSubmitRequest>,
) -> ActixResult<HttpResponse> {
    REPORT_SERVICE.group_submit(&req, body.into_inner()).await
}

pub async fn compile_reports(
    req: HttpRequest,
    body: web::Json<CompileRequest>,
) -> ActixResult<HttpResponse> {
    REPORT_SERVICE
        .compile_reports(&req, body.into_inner())
        .await
}

// 下载与导出
pub async fn download_reports(req: HttpRequest) -> ActixResult<HttpResponse> {
    let info = req.match_info();
    let download_type = info.get("type").unwrap_or_default().to_ascii_lowercase();
    let params: Vec<String> = ["p1", "p2"]
        .iter()
        .filter_map(|key| info.get(key))
        .map(str::to_string)
        .collect();

    REPORT_SERVICE
        .download_reports(&req, download_type, params)
        .await
}

pub async fn export_csv(
    req: HttpRequest,
    query: web::Query<ScopeQuery>,
) -> ActixResult<HttpResponse> {
    REPORT_SERVICE.export_csv(&req, query.into_inner()).await
}

pub async fn delete_report(req: HttpRequest, report_id: SafeIDI64) -> ActixResult<HttpResponse> {
    REPORT_SERVICE.delete_report(&req, report_id.0).await
}

// 配置路由
pub fn configure_reports_routes(cfg: &mut web::ServiceConfig) {
    cfg.service(
        web::scope("/api/reports")
            .service(
                web::resource("/student")
                    .route(web::get().to(list_student_reports))
                    .route(web::post().to(submit_student_report)),
            )
            .service(
                web::resource("/lecturer")
                    .route(web::get().to(list_lecturer_reports))
                    .route(web::post().to(submit_lecturer_report)),
            )
            .service(
                web::resource("/prl")
                    .route(web::get().to(list_prl_reports))
                    .route(web::post().to(submit_prl_report)),
            )
            .route("/pl", web::get().to(list_pl_reports))
            .route("/grouped", web::get().to(grouped_reports))
            .route("/prl-specific", web::get().to(list_prl_specific_reports))
            .route("/detailed", web::get().to(list_detailed_reports))
            .route("/all", web::get().to(all_reports))
            .route("/by-courses", web::post().to(reports_by_courses))
            .route("/prl/assigned-courses", web::get().to(assigned_course_reports))
            .route("/group/submit", web::post().to(group_submit))
            .route("/compile", web::post().to(compile_reports))
            .route("/export", web::get().to(export_csv))
            .route("/download/{type}", web::get().to(download_reports))
            .route("/download/{type}/{p1}", web::get().to(download_reports))
            .route("/download/{type}/{p1}/{p2}", web::get().to(download_reports))
            .route("/{id}/feedback", web::post().to(add_feedback))
            .route("/{id}/rating-feedback", web::post().to(add_rating_feedback))
            .route("/{id}/pl-feedback", web::post().to(add_pl_feedback))
            // 参数路由放在最后，避免吞掉上面的固定路径
            .service(
                web::resource("/{id}").route(
                    web::delete()
                        .to(delete_report)
                        // 仅管理员可删除报告
                        .wrap(middlewares::RequireRole::new_any(UserRole::admin_roles()))
                        .wrap(middlewares::RequireJWT),
                ),
            ),
    );
}
