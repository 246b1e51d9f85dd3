pub mod auth;
pub mod common;
pub mod courses;
pub mod reports;
pub mod system;
pub mod users;

pub use common::{ApiResponse, ProgramType, Stream};

// 应用启动时间，用于健康检查中的运行时长
#[derive(Debug, Clone)]
pub struct AppStartTime {
    pub start_datetime: chrono::DateTime<chrono::Utc>,
}
