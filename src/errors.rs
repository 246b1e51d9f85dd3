//! 统一错误处理模块
//!
//! 使用宏自动生成错误类型，支持错误代码和类型名称。

use std::fmt;

/// 定义错误类型的宏
///
/// 自动生成：
/// - enum 定义
/// - code() 方法 - 返回错误代码
/// - error_type() 方法 - 返回错误类型名称
/// - message() 方法 - 返回错误详情
/// - 便捷构造函数
macro_rules! define_reporting_errors {
    ($(
        $variant:ident($code:literal, $type_name:literal)
    ),* $(,)?) => {
        #[derive(Debug, Clone)]
        pub enum ReportingError {
            $($variant(String),)*
        }

        impl ReportingError {
            /// 获取错误代码
            pub fn code(&self) -> &'static str {
                match self {
                    $(ReportingError::$variant(_) => $code,)*
                }
            }

            /// 获取错误类型名称
            pub fn error_type(&self) -> &'static str {
                match self {
                    $(ReportingError::$variant(_) => $type_name,)*
                }
            }

            /// 获取错误详情
            pub fn message(&self) -> &str {
                match self {
                    $(ReportingError::$variant(msg) => msg,)*
                }
            }
        }

        // 生成便捷构造函数
        paste::paste! {
            impl ReportingError {
                $(
                    pub fn [<$variant:snake>]<T: Into<String>>(msg: T) -> Self {
                        ReportingError::$variant(msg.into())
                    }
                )*
            }
        }
    };
}

define_reporting_errors! {
    DatabaseConfig("E001", "Database Configuration Error"),
    DatabaseConnection("E002", "Database Connection Error"),
    DatabaseOperation("E003", "Database Operation Error"),
    FileOperation("E004", "File Operation Error"),
    Validation("E005", "Validation Error"),
    NotFound("E006", "Resource Not Found"),
    Serialization("E007", "Serialization Error"),
    DateParse("E008", "Date Parse Error"),
    InvalidTransition("E009", "Invalid Status Transition"),
    Authentication("E010", "Authentication Error"),
    Authorization("E011", "Authorization Error"),
}

impl ReportingError {
    /// 格式化为彩色输出（用于开发环境）
    #[cfg(debug_assertions)]
    pub fn format_colored(&self) -> String {
        format!(
            "\x1b[1;31m[ERROR]\x1b[0m \x1b[33m{}\x1b[0m \x1b[31m{}\x1b[0m\n  {}",
            self.code(),
            self.error_type(),
            self.message()
        )
    }

    /// 格式化为简洁输出
    pub fn format_simple(&self) -> String {
        format!("{}: {}", self.error_type(), self.message())
    }
}

impl fmt::Display for ReportingError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.format_simple())
    }
}

impl std::error::Error for ReportingError {}

// 为常见的错误类型实现 From trait
impl From<sea_orm::DbErr> for ReportingError {
    fn from(err: sea_orm::DbErr) -> Self {
        ReportingError::DatabaseOperation(err.to_string())
    }
}

impl From<std::io::Error> for ReportingError {
    fn from(err: std::io::Error) -> Self {
        ReportingError::FileOperation(err.to_string())
    }
}

impl From<serde_json::Error> for ReportingError {
    fn from(err: serde_json::Error) -> Self {
        ReportingError::Serialization(err.to_string())
    }
}

impl From<chrono::ParseError> for ReportingError {
    fn from(err: chrono::ParseError) -> Self {
        ReportingError::DateParse(err.to_string())
    }
}

pub type Result<T> = std::result::Result<T, ReportingError>;
