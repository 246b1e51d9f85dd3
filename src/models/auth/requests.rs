use serde::Deserialize;
use ts_rs::TS;

use crate::models::common::de::{deserialize_blank_as_none, deserialize_optional_text};
use crate::models::common::{ProgramType, Stream};
use crate::models::users::entities::UserRole;

// 用户登录请求（来自HTTP请求）
//
// 用户不存在时按请求中的资料自动开户
#[derive(Debug, Clone, Deserialize, TS)]
#[serde(rename_all = "camelCase")]
#[ts(export, export_to = "../frontend/src/types/generated/auth.ts")]
pub struct LoginRequest {
    /// 用户名或邮箱
    #[serde(default, deserialize_with = "deserialize_optional_text")]
    pub username: Option<String>,
    /// 密码
    #[serde(default, deserialize_with = "deserialize_optional_text")]
    pub password: Option<String>,
    #[serde(default, deserialize_with = "deserialize_blank_as_none")]
    pub role: Option<UserRole>,
    #[serde(default, deserialize_with = "deserialize_optional_text")]
    pub faculty: Option<String>,
    #[serde(default, deserialize_with = "deserialize_blank_as_none")]
    pub stream: Option<Stream>,
    #[serde(default, deserialize_with = "deserialize_blank_as_none")]
    pub program_type: Option<ProgramType>,
}

// 用户注册请求
#[derive(Debug, Clone, Deserialize, TS)]
#[serde(rename_all = "camelCase")]
#[ts(export, export_to = "../frontend/src/types/generated/auth.ts")]
pub struct RegisterRequest {
    #[serde(default, deserialize_with = "deserialize_optional_text")]
    pub username: Option<String>,
    #[serde(default, deserialize_with = "deserialize_optional_text")]
    pub password: Option<String>,
    #[serde(default, deserialize_with = "deserialize_optional_text")]
    pub email: Option<String>,
    #[serde(default, deserialize_with = "deserialize_blank_as_none")]
    pub role: Option<UserRole>,
    #[serde(default, deserialize_with = "deserialize_optional_text")]
    pub faculty: Option<String>,
    #[serde(default, deserialize_with = "deserialize_blank_as_none")]
    pub stream: Option<Stream>,
    #[serde(default, deserialize_with = "deserialize_blank_as_none")]
    pub program_type: Option<ProgramType>,
}
