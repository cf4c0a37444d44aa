use serde::{Deserialize, Serialize};
use ts_rs::TS;

// 院系
#[derive(Debug, Clone, Serialize, Deserialize, TS)]
#[ts(export, export_to = "department.ts")]
pub struct Department {
    pub id: i64,
    pub department_name: String,
    pub submitted_by: String,
    pub updated_at: chrono::DateTime<chrono::Utc>,
}
