use std::sync::Arc;

use actix_web::{HttpRequest, HttpResponse, Result as ActixResult};

use crate::errors::{ReportingError, Result};
use crate::models::common::{ProgramType, Stream};
use crate::models::users::entities::{User, UserRole};
use crate::models::users::requests::CreateUserRequest;
use crate::models::{ApiResponse, auth::requests::LoginRequest, auth::responses::LoginResponse};
use crate::services::error_response;
use crate::storage::Storage;
use crate::utils::password::{hash_password, verify_password};

use super::AuthService;

const DEFAULT_PASSWORD: &str = "password";
const DEFAULT_FACULTY: &str = "Computing";
const EMAIL_DOMAIN: &str = "luct.edu";

/// 按登录请求中的资料新建账户
async fn provision_user(
    storage: &Arc<dyn Storage>,
    username: &str,
    login_request: LoginRequest,
) -> Result<User> {
    let password = login_request.password.as_deref().unwrap_or(DEFAULT_PASSWORD);
    let password_hash = hash_password(password)?;

    // 管理员角色不随登录自动开通
    let role = login_request
        .role
        .filter(UserRole::is_self_service)
        .unwrap_or(UserRole::Student);

    storage
        .create_user(CreateUserRequest {
            username: username.to_string(),
            email: format!("{username}@{EMAIL_DOMAIN}"),
            password_hash,
            role,
            faculty: Some(
                login_request
                    .faculty
                    .unwrap_or_else(|| DEFAULT_FACULTY.to_string()),
            ),
            stream: Some(login_request.stream.unwrap_or(Stream::It)),
            program_type: Some(login_request.program_type.unwrap_or(ProgramType::Degree)),
        })
        .await
}

pub async fn handle_login(
    service: &AuthService,
    login_request: LoginRequest,
    request: &HttpRequest,
) -> ActixResult<HttpResponse> {
    let storage = service.get_storage(request)?;
    let config = service.get_config();

    let Some(username) = login_request.username.clone() else {
        return Ok(error_response(&ReportingError::validation(
            "Username is required",
        )));
    };

    // 1. 根据用户名或邮箱获取用户信息
    let (user, provisioned) = match storage.get_user_by_username_or_email(&username).await {
        Ok(Some(user)) => {
            // 2. 验证密码
            let password = login_request.password.as_deref().unwrap_or_default();
            if !verify_password(password, &user.password_hash) {
                tracing::info!("Rejected login for {}: invalid password", username);
                return Ok(error_response(&ReportingError::authentication(
                    "Invalid password",
                )));
            }
            (user, false)
        }
        Ok(None) => match provision_user(&storage, &username, login_request).await {
            Ok(user) => {
                tracing::info!(
                    "Auto-created user {} ({}, {:?})",
                    user.username,
                    user.role,
                    user.program_type
                );
                (user, true)
            }
            Err(e) => return Ok(error_response(&e)),
        },
        Err(e) => return Ok(error_response(&e)),
    };

    // 3. 生成令牌
    match user.generate_access_token() {
        Ok(access_token) => {
            tracing::info!("User {} logged in successfully", user.username);
            let response = LoginResponse {
                user,
                access_token,
                expires_in: config.jwt.access_token_expiry * 60, // 转换为秒
                provisioned,
            };
            Ok(HttpResponse::Ok().json(ApiResponse::success(response, "Login successful")))
        }
        Err(e) => {
            tracing::error!("Failed to generate JWT token: {}", e);
            Ok(error_response(&e))
        }
    }
}
