use super::entities::UserRole;
use crate::models::common::{ProgramType, Stream};

// 用户创建请求（用于存储层，密码已哈希）
#[derive(Debug, Clone)]
pub struct CreateUserRequest {
    pub username: String,
    pub email: String,
    pub password_hash: String,
    pub role: UserRole,
    pub faculty: Option<String>,
    pub stream: Option<Stream>,
    pub program_type: Option<ProgramType>,
}
