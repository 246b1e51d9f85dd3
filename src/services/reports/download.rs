use std::str::FromStr;

use actix_web::{HttpRequest, HttpResponse, Result as ActixResult};
use tracing::{error, info};

use super::{ReportService, ReportSlice};
use crate::errors::{ReportingError, Result};
use crate::models::ApiResponse;
use crate::models::common::{ProgramType, ScopeQuery, Stream};
use crate::models::reports::requests::ReportListQuery;
use crate::models::reports::responses::{DownloadInfo, DownloadResponse, GroupedReports};
use crate::services::error_response;
use crate::workflow::export::{CSV_HEADERS, csv_rows};

/// 解析路径中的范围参数：缺省取默认值，`all` 表示不筛选
fn scope_param<T: FromStr<Err = String>>(raw: Option<&str>, default: Option<T>) -> Result<Option<T>> {
    match raw.map(str::trim) {
        None => Ok(default),
        Some(v) if v.is_empty() || v.eq_ignore_ascii_case("all") => Ok(None),
        Some(v) => v.parse().map(Some).map_err(ReportingError::validation),
    }
}

/// 下载类型对应的报告切片与筛选范围
fn download_scope(download_type: &str, params: &[String]) -> Result<(ReportSlice, ScopeQuery)> {
    let p1 = params.first().map(String::as_str);
    let p2 = params.get(1).map(String::as_str);

    match download_type {
        "pl" | "lecturer" | "student" => {
            let slice = match download_type {
                "pl" => ReportSlice::Pl,
                "lecturer" => ReportSlice::Lecturer,
                _ => ReportSlice::Student,
            };
            let program = scope_param(p1, Some(ProgramType::Degree))?;
            Ok((slice, ScopeQuery::new(None, program)))
        }
        "prl" => {
            let stream = scope_param(p1, Some(Stream::It))?;
            let program = scope_param::<ProgramType>(p2, None)?;
            Ok((ReportSlice::PrlSpecific, ScopeQuery::new(stream, program)))
        }
        other => Err(ReportingError::validation(format!(
            "Invalid download type: '{other}'. Supported: pl, prl, lecturer, student"
        ))),
    }
}

pub async fn download_reports(
    service: &ReportService,
    request: &HttpRequest,
    download_type: String,
    params: Vec<String>,
) -> ActixResult<HttpResponse> {
    let storage = service.get_storage(request)?;

    let (slice, scope) = match download_scope(&download_type, &params) {
        Ok(resolved) => resolved,
        Err(e) => return Ok(error_response(&e)),
    };

    match storage.list_reports(slice.query(scope)).await {
        Ok(reports) => {
            let (stream, program_type) = scope.describe();
            let download_info = DownloadInfo {
                download_type,
                program_type,
                stream,
                total_reports: reports.len(),
                generated_at: chrono::Utc::now(),
            };
            Ok(HttpResponse::Ok().json(ApiResponse::success(
                DownloadResponse {
                    reports,
                    download_info,
                },
                "Reports prepared for download",
            )))
        }
        Err(e) => Ok(error_response(&e)),
    }
}

pub async fn export_csv(
    service: &ReportService,
    request: &HttpRequest,
    scope: ScopeQuery,
) -> ActixResult<HttpResponse> {
    let storage = service.get_storage(request)?;

    let reports = match storage
        .list_reports(ReportListQuery::scoped(scope.stream, scope.program_type))
        .await
    {
        Ok(reports) => reports,
        Err(e) => return Ok(error_response(&e)),
    };
    let grouped = GroupedReports::from_reports(reports);

    let mut wtr = csv::Writer::from_writer(vec![]);

    // 写入表头
    wtr.write_record(CSV_HEADERS).map_err(|e| {
        error!("CSV 写入失败: {}", e);
        actix_web::error::ErrorInternalServerError(format!("CSV write failed: {e}"))
    })?;

    // 按分组顺序写入数据
    for row in csv_rows(&grouped) {
        wtr.write_record(&row).map_err(|e| {
            error!("CSV 写入失败: {}", e);
            actix_web::error::ErrorInternalServerError(format!("CSV write failed: {e}"))
        })?;
    }

    let data = wtr.into_inner().map_err(|e| {
        error!("CSV 生成失败: {}", e);
        actix_web::error::ErrorInternalServerError(format!("CSV generation failed: {e}"))
    })?;

    let (stream, program_type) = scope.describe();
    info!(
        "Exported {} report(s) as CSV for {}/{}",
        grouped.total(),
        stream,
        program_type
    );

    Ok(HttpResponse::Ok()
        .content_type("text/csv; charset=utf-8")
        .insert_header((
            "Content-Disposition",
            format!("attachment; filename=\"reports-{stream}-{program_type}.csv\""),
        ))
        .body(data))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_prl_download_defaults() {
        let (slice, scope) = download_scope("prl", &[]).unwrap();
        assert_eq!(slice, ReportSlice::PrlSpecific);
        assert_eq!(scope.stream, Some(Stream::It));
        assert_eq!(scope.program_type, None);
    }

    #[test]
    fn test_program_download_defaults_to_degree() {
        let (slice, scope) = download_scope("student", &[]).unwrap();
        assert_eq!(slice, ReportSlice::Student);
        assert_eq!(scope.program_type, Some(ProgramType::Degree));

        let (_, scope) = download_scope("lecturer", &["all".to_string()]).unwrap();
        assert_eq!(scope.program_type, None);
    }

    #[test]
    fn test_invalid_download_params() {
        assert!(download_scope("grades", &[]).is_err());
        assert!(download_scope("pl", &["masters".to_string()]).is_err());
        assert!(download_scope("prl", &["XX".to_string()]).is_err());
    }
}
