use actix_web::{HttpRequest, HttpResponse, Result as ActixResult, web};

use super::SystemService;
use crate::errors::Result;
use crate::models::system::responses::{EntityCounts, HealthResponse};
use crate::models::{ApiResponse, AppStartTime};
use crate::services::error_response;
use crate::storage::Storage;

async fn entity_counts(storage: &dyn Storage) -> Result<EntityCounts> {
    Ok(EntityCounts {
        reports: storage.count_reports().await?,
        users: storage.count_users().await?,
        courses: storage.count_courses().await?,
    })
}

pub async fn health(service: &SystemService, request: &HttpRequest) -> ActixResult<HttpResponse> {
    let storage = service.get_storage(request)?;
    let config = service.get_config();

    let counts = match entity_counts(storage.as_ref()).await {
        Ok(counts) => counts,
        Err(e) => return Ok(error_response(&e)),
    };

    let uptime_seconds = request
        .app_data::<web::Data<AppStartTime>>()
        .map(|start| (chrono::Utc::now() - start.start_datetime).num_seconds())
        .unwrap_or_default();

    let response = HealthResponse {
        status: "ok".to_string(),
        system_name: config.app.system_name.clone(),
        version: env!("CARGO_PKG_VERSION").to_string(),
        environment: config.app.environment.clone(),
        uptime_seconds,
        counts,
    };

    Ok(HttpResponse::Ok().json(ApiResponse::success(response, "Server is running")))
}
