use serde::{Deserialize, Serialize};
use ts_rs::TS;

use crate::models::common::{ProgramType, Stream};

// 用户角色
#[derive(Debug, Clone, Copy, Serialize, PartialEq, Eq, TS)]
#[serde(rename_all = "snake_case")]
#[ts(export, export_to = "../frontend/src/types/generated/user.ts")]
pub enum UserRole {
    Student,  // 学生
    Lecturer, // 讲师
    Prl,      // 首席讲师
    Pl,       // 项目负责人
    Admin,    // 管理员
}

impl UserRole {
    pub const STUDENT: &'static str = "student";
    pub const LECTURER: &'static str = "lecturer";
    pub const PRL: &'static str = "prl";
    pub const PL: &'static str = "pl";
    pub const ADMIN: &'static str = "admin";

    pub fn admin_roles() -> &'static [&'static UserRole] {
        &[&Self::Admin]
    }
    pub fn course_admin_roles() -> &'static [&'static UserRole] {
        &[&Self::Pl, &Self::Admin]
    }

    /// 自助开户或注册可获得的角色，管理员只能由启动时种子账户产生
    pub fn is_self_service(&self) -> bool {
        !matches!(self, UserRole::Admin)
    }
}

impl<'de> Deserialize<'de> for UserRole {
    fn deserialize<D>(deserializer: D) -> Result<Self, D::Error>
    where
        D: serde::Deserializer<'de>,
    {
        let s = String::deserialize(deserializer)?;
        s.parse().map_err(serde::de::Error::custom)
    }
}

impl std::fmt::Display for UserRole {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            UserRole::Student => write!(f, "{}", UserRole::STUDENT),
            UserRole::Lecturer => write!(f, "{}", UserRole::LECTURER),
            UserRole::Prl => write!(f, "{}", UserRole::PRL),
            UserRole::Pl => write!(f, "{}", UserRole::PL),
            UserRole::Admin => write!(f, "{}", UserRole::ADMIN),
        }
    }
}

impl std::str::FromStr for UserRole {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_ascii_lowercase().as_str() {
            UserRole::STUDENT => Ok(UserRole::Student),
            UserRole::LECTURER => Ok(UserRole::Lecturer),
            UserRole::PRL => Ok(UserRole::Prl),
            UserRole::PL => Ok(UserRole::Pl),
            UserRole::ADMIN => Ok(UserRole::Admin),
            _ => Err(format!(
                "Invalid user role: '{s}'. Supported: student, lecturer, prl, pl, admin"
            )),
        }
    }
}

// 用户实体
#[derive(Debug, Clone, Serialize, Deserialize, TS)]
#[serde(rename_all = "camelCase")]
#[ts(export, export_to = "../frontend/src/types/generated/user.ts")]
pub struct User {
    pub id: i64,
    pub username: String,
    pub email: String,
    #[serde(skip_serializing, default)] // 不序列化到JSON响应中
    #[ts(skip)]
    pub password_hash: String,
    pub role: UserRole,
    pub faculty: Option<String>,
    pub stream: Option<Stream>,
    pub program_type: Option<ProgramType>,
    pub is_active: bool,
    pub created_at: chrono::DateTime<chrono::Utc>,
    pub updated_at: chrono::DateTime<chrono::Utc>,
}

impl User {
    // 生成访问令牌
    pub fn generate_access_token(&self) -> crate::errors::Result<String> {
        crate::utils::jwt::JwtUtils::generate_access_token(self.id, &self.role.to_string())
            .map_err(|e| crate::errors::ReportingError::authentication(format!(
                "Failed to generate access token: {e}"
            )))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_admin_is_not_self_service() {
        assert!(!UserRole::Admin.is_self_service());
        assert!(UserRole::Pl.is_self_service());
        assert!(UserRole::Student.is_self_service());
    }

    #[test]
    fn test_role_parse_and_display() {
        assert_eq!("PRL".parse::<UserRole>(), Ok(UserRole::Prl));
        assert_eq!(UserRole::Pl.to_string(), "pl");
        assert!("dean".parse::<UserRole>().is_err());
    }

    #[test]
    fn test_password_hash_is_never_serialized() {
        let now = chrono::Utc::now();
        let user = User {
            id: 1,
            username: "thabo".to_string(),
            email: "thabo@luct.edu".to_string(),
            password_hash: "$argon2id$secret".to_string(),
            role: UserRole::Student,
            faculty: Some("Computing".to_string()),
            stream: Some(Stream::It),
            program_type: Some(ProgramType::Degree),
            is_active: true,
            created_at: now,
            updated_at: now,
        };

        let json = serde_json::to_value(&user).unwrap();
        assert!(json.get("passwordHash").is_none());
        assert_eq!(json["programType"], "degree");
        assert_eq!(json["isActive"], true);
    }
}
