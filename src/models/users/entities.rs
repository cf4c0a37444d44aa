use serde::{Deserialize, Serialize};
use ts_rs::TS;

// 用户实体
#[derive(Debug, Clone, Serialize, Deserialize, TS)]
#[ts(export, export_to = "user.ts")]
pub struct User {
    pub id: i64,
    // 用户类型，例如 teacher、admin
    #[serde(rename = "type")]
    pub user_type: String,
    pub full_name: String,
    pub username: String,
    pub email: String,
    #[serde(skip_serializing, default)] // 不序列化到JSON响应中
    #[ts(skip)]
    pub password_hash: String,
    pub submitted_by: String,
    pub updated_at: chrono::DateTime<chrono::Utc>,
}
