pub mod compile;
pub mod dashboard;
pub mod delete;
pub mod download;
pub mod feedback;
pub mod group_submit;
pub mod list;
pub mod submit;

use actix_web::{HttpRequest, HttpResponse, Result as ActixResult};
use std::sync::Arc;

use crate::config::AppConfig;
use crate::models::common::ScopeQuery;
use crate::models::reports::entities::ReportKind;
use crate::models::reports::requests::{
    ByCoursesRequest, CompileRequest, FeedbackRequest, GroupSubmitRequest, SubmissionChannel,
    SubmitReportRequest,
};
use crate::storage::Storage;
use crate::workflow::FeedbackAction;

pub use list::ReportSlice;

pub struct ReportService {
    storage: Option<Arc<dyn Storage>>,
}

impl ReportService {
    pub fn new_lazy() -> Self {
        Self { storage: None }
    }

    pub(crate) fn get_storage(&self, request: &HttpRequest) -> ActixResult<Arc<dyn Storage>> {
        if let Some(storage) = &self.storage {
            return Ok(storage.clone());
        }
        request
            .app_data::<actix_web::web::Data<Arc<dyn Storage>>>()
            .map(|data| data.get_ref().clone())
            .ok_or_else(|| {
                actix_web::error::ErrorInternalServerError("Storage not found in app data")
            })
    }

    pub(crate) fn get_config(&self) -> &AppConfig {
        AppConfig::get()
    }

    // 提交报告
    pub async fn submit_report(
        &self,
        request: &HttpRequest,
        channel: SubmissionChannel,
        body: SubmitReportRequest,
    ) -> ActixResult<HttpResponse> {
        submit::submit_report(self, request, channel, body).await
    }

    // 按类型与范围列出报告
    pub async fn list_reports(
        &self,
        request: &HttpRequest,
        slice: ReportSlice,
        scope: ScopeQuery,
    ) -> ActixResult<HttpResponse> {
        list::list_reports(self, request, slice, scope).await
    }

    // 分组列出报告
    pub async fn grouped_reports(
        &self,
        request: &HttpRequest,
        scope: ScopeQuery,
    ) -> ActixResult<HttpResponse> {
        list::grouped_reports(self, request, scope).await
    }

    // PRL 监控用的全部报告
    pub async fn all_reports(
        &self,
        request: &HttpRequest,
        scope: ScopeQuery,
    ) -> ActixResult<HttpResponse> {
        list::all_reports(self, request, scope).await
    }

    // 按课程代码查询报告
    pub async fn reports_by_courses(
        &self,
        request: &HttpRequest,
        scope: ScopeQuery,
        body: ByCoursesRequest,
    ) -> ActixResult<HttpResponse> {
        list::reports_by_courses(self, request, scope, body).await
    }

    // PRL 负责课程的报告
    pub async fn assigned_course_reports(
        &self,
        request: &HttpRequest,
        scope: ScopeQuery,
    ) -> ActixResult<HttpResponse> {
        list::assigned_course_reports(self, request, scope).await
    }

    // 添加审阅意见
    pub async fn add_feedback(
        &self,
        request: &HttpRequest,
        report_id: i64,
        action: FeedbackAction,
        body: FeedbackRequest,
    ) -> ActixResult<HttpResponse> {
        feedback::add_feedback(self, request, report_id, action, body).await
    }

    // 批量上报 PL
    pub async fn group_submit(
        &self,
        request: &HttpRequest,
        body: GroupSubmitRequest,
    ) -> ActixResult<HttpResponse> {
        group_submit::group_submit(self, request, body).await
    }

    // 汇总统计
    pub async fn compile_reports(
        &self,
        request: &HttpRequest,
        body: CompileRequest,
    ) -> ActixResult<HttpResponse> {
        compile::compile_reports(self, request, body).await
    }

    // 下载报告
    pub async fn download_reports(
        &self,
        request: &HttpRequest,
        download_type: String,
        params: Vec<String>,
    ) -> ActixResult<HttpResponse> {
        download::download_reports(self, request, download_type, params).await
    }

    // 导出 CSV
    pub async fn export_csv(
        &self,
        request: &HttpRequest,
        scope: ScopeQuery,
    ) -> ActixResult<HttpResponse> {
        download::export_csv(self, request, scope).await
    }

    // 删除报告
    pub async fn delete_report(
        &self,
        request: &HttpRequest,
        report_id: i64,
    ) -> ActixResult<HttpResponse> {
        delete::delete_report(self, request, report_id).await
    }

    // PRL 工作台
    pub async fn prl_dashboard(
        &self,
        request: &HttpRequest,
        scope: ScopeQuery,
    ) -> ActixResult<HttpResponse> {
        dashboard::prl_dashboard(self, request, scope).await
    }
}

/// 学生入口查询包含的类型
pub(crate) const STUDENT_CHANNEL_KINDS: &[ReportKind] = &[ReportKind::Student, ReportKind::Rating];
