use actix_web::{HttpRequest, HttpResponse, Result as ActixResult, web};
use once_cell::sync::Lazy;

use crate::models::common::ScopeQuery;
use crate::services::ReportService;

static REPORT_SERVICE: Lazy<ReportService> = Lazy::new(ReportService::new_lazy);

pub async fn prl_dashboard(
    req: HttpRequest,
    query: web::Query<ScopeQuery>,
) -> ActixResult<HttpResponse> {
    REPORT_SERVICE.prl_dashboard(&req, query.into_inner()).await
}

// 配置路由
pub fn configure_prl_routes(cfg: &mut web::ServiceConfig) {
    cfg.service(web::scope("/api/prl").route("/dashboard", web::get().to(prl_dashboard)));
}
