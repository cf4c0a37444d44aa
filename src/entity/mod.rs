//! SeaORM 实体定义
//!
//! 这些实体用于数据库操作，与 models 模块中的传输结构分离。
//! Storage 层使用这些实体进行 CRUD 操作，然后转换为 models 中的业务实体。
//! 外键在实体中以 `belongs_to` 关系建模，对外只暴露整数 ID。

use chrono::{DateTime, Utc};

pub mod prelude;

pub mod attendance_logs;
pub mod courses;
pub mod departments;
pub mod students;
pub mod users;

/// 当前时间（毫秒时间戳），用于 updated_at
pub(crate) fn now_millis() -> i64 {
    Utc::now().timestamp_millis()
}

pub(crate) fn from_timestamp_millis(ms: i64) -> DateTime<Utc> {
    DateTime::<Utc>::from_timestamp_millis(ms).unwrap_or_default()
}
