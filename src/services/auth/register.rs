use actix_web::{HttpRequest, HttpResponse, Result as ActixResult};

use crate::errors::ReportingError;
use crate::models::common::ProgramType;
use crate::models::users::requests::CreateUserRequest;
use crate::models::{
    ApiResponse, auth::requests::RegisterRequest, auth::responses::RegisterResponse,
};
use crate::services::error_response;
use crate::utils::password::hash_password;
use crate::utils::validate::{validate_email, validate_username};

use super::AuthService;

pub async fn handle_register(
    service: &AuthService,
    register_request: RegisterRequest,
    request: &HttpRequest,
) -> ActixResult<HttpResponse> {
    let storage = service.get_storage(request)?;

    let RegisterRequest {
        username: Some(username),
        password: Some(password),
        email: Some(email),
        role: Some(role),
        faculty,
        stream,
        program_type,
    } = register_request
    else {
        return Ok(error_response(&ReportingError::validation(
            "Missing required fields: username, password, email, role",
        )));
    };

    if !role.is_self_service() {
        return Ok(error_response(&ReportingError::authorization(format!(
            "Role '{role}' cannot be self-registered"
        ))));
    }

    // 格式校验
    if let Err(msg) = validate_username(&username).and_then(|_| validate_email(&email)) {
        return Ok(error_response(&ReportingError::validation(msg)));
    }

    // 用户名或邮箱不能重复
    for identifier in [&username, &email] {
        match storage.get_user_by_username_or_email(identifier).await {
            Ok(Some(_)) => {
                return Ok(error_response(&ReportingError::validation(
                    "Username or email already exists",
                )));
            }
            Ok(None) => {}
            Err(e) => return Ok(error_response(&e)),
        }
    }

    let password_hash = match hash_password(&password) {
        Ok(hash) => hash,
        Err(e) => return Ok(error_response(&e)),
    };

    let create = CreateUserRequest {
        username,
        email,
        password_hash,
        role,
        faculty,
        stream,
        program_type: Some(program_type.unwrap_or(ProgramType::Degree)),
    };

    match storage.create_user(create).await {
        Ok(user) => {
            tracing::info!("User {} registered as {}", user.username, user.role);
            Ok(HttpResponse::Created().json(ApiResponse::success(
                RegisterResponse { user },
                "Registration successful",
            )))
        }
        Err(e) => Ok(error_response(&e)),
    }
}
