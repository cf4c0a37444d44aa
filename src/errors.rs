//! 统一错误处理模块
//!
//! 使用宏自动生成错误类型，支持错误代码和类型名称。
//! 存储层只会返回这里定义的封闭错误集合，由服务层映射为 HTTP 状态码。

use std::fmt;

use sea_orm::{DbErr, SqlErr};

/// 定义错误类型的宏
///
/// 自动生成：
/// - enum 定义
/// - code() 方法 - 返回错误代码
/// - error_type() 方法 - 返回错误类型名称
/// - message() 方法 - 返回错误详情
/// - 便捷构造函数
macro_rules! define_attendance_errors {
    ($(
        $variant:ident($code:literal, $type_name:literal)
    ),* $(,)?) => {
        #[derive(Debug, Clone)]
        pub enum AttendanceError {
            $($variant(String),)*
        }

        impl AttendanceError {
            /// 获取错误代码
            pub fn code(&self) -> &'static str {
                match self {
                    $(AttendanceError::$variant(_) => $code,)*
                }
            }

            /// 获取错误类型名称
            pub fn error_type(&self) -> &'static str {
                match self {
                    $(AttendanceError::$variant(_) => $type_name,)*
                }
            }

            /// 获取错误详情
            pub fn message(&self) -> &str {
                match self {
                    $(AttendanceError::$variant(msg) => msg,)*
                }
            }
        }

        // 生成便捷构造函数
        paste::paste! {
            impl AttendanceError {
                $(
                    pub fn [<$variant:snake>]<T: Into<String>>(msg: T) -> Self {
                        AttendanceError::$variant(msg.into())
                    }
                )*
            }
        }
    };
}

define_attendance_errors! {
    DatabaseConfig("E001", "Database Configuration Error"),
    DatabaseConnection("E002", "Database Connection Error"),
    DatabaseOperation("E003", "Database Operation Error"),
    UniqueViolation("E004", "Unique Constraint Violation"),
    ForeignKeyViolation("E005", "Foreign Key Constraint Violation"),
    Validation("E006", "Validation Error"),
    PasswordHashing("E007", "Password Hashing Error"),
}

impl AttendanceError {
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

    /// 可以安全返回给调用方的原因描述，不包含驱动层原始信息
    pub fn public_reason(&self) -> &str {
        match self {
            AttendanceError::UniqueViolation(_) => "a record with the same unique value already exists",
            AttendanceError::ForeignKeyViolation(_) => "a referenced record does not exist",
            AttendanceError::Validation(msg) => msg,
            _ => "storage error",
        }
    }
}

impl fmt::Display for AttendanceError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.format_simple())
    }
}

impl std::error::Error for AttendanceError {}

// 按约束类型区分数据库错误
impl From<DbErr> for AttendanceError {
    fn from(err: DbErr) -> Self {
        match err.sql_err() {
            Some(SqlErr::UniqueConstraintViolation(msg)) => AttendanceError::UniqueViolation(msg),
            Some(SqlErr::ForeignKeyConstraintViolation(msg)) => {
                AttendanceError::ForeignKeyViolation(msg)
            }
            _ => AttendanceError::DatabaseOperation(err.to_string()),
        }
    }
}

pub type Result<T> = std::result::Result<T, AttendanceError>;
