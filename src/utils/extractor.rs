//! 路径参数安全提取器
//!
//! 解析失败时直接返回 400 统一响应，不进入处理函数。

use actix_web::{
    FromRequest, HttpRequest, HttpResponse, dev::Payload, error::InternalError,
};
use futures_util::future::{Ready, ready};

use crate::models::ApiResponse;
use crate::models::common::ProgramType;

fn bad_request(message: String) -> actix_web::Error {
    InternalError::from_response(
        message.clone(),
        HttpResponse::BadRequest().json(ApiResponse::error_empty(message)),
    )
    .into()
}

/// 路径中的 `{id}`，必须是正整数
#[derive(Debug, Clone, Copy)]
pub struct SafeIDI64(pub i64);

impl FromRequest for SafeIDI64 {
    type Error = actix_web::Error;
    type Future = Ready<Result<Self, Self::Error>>;

    fn from_request(req: &HttpRequest, _: &mut Payload) -> Self::Future {
        let raw = req.match_info().get("id").unwrap_or_default();
        ready(match raw.parse::<i64>() {
            Ok(id) if id > 0 => Ok(SafeIDI64(id)),
            _ => Err(bad_request(format!("Invalid id: '{raw}'"))),
        })
    }
}

/// 路径中的 `{program_type}`
#[derive(Debug, Clone, Copy)]
pub struct SafeProgramType(pub ProgramType);

impl FromRequest for SafeProgramType {
    type Error = actix_web::Error;
    type Future = Ready<Result<Self, Self::Error>>;

    fn from_request(req: &HttpRequest, _: &mut Payload) -> Self::Future {
        let raw = req.match_info().get("program_type").unwrap_or_default();
        ready(
            raw.parse::<ProgramType>()
                .map(SafeProgramType)
                .map_err(bad_request),
        )
    }
}
