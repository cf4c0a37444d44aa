use serde::{Deserialize, Serialize};
use ts_rs::TS;

// 学生
#[derive(Debug, Clone, Serialize, Deserialize, TS)]
#[ts(export, export_to = "student.ts")]
pub struct Student {
    pub id: i64,
    pub full_name: String,
    // 所属院系ID
    pub department_id: i64,
    pub class_name: String,
    pub submitted_by: String,
    pub updated_at: chrono::DateTime<chrono::Utc>,
}
