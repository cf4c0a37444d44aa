use serde::{Deserialize, Serialize};
use ts_rs::TS;

// 课程
#[derive(Debug, Clone, Serialize, Deserialize, TS)]
#[ts(export, export_to = "course.ts")]
pub struct Course {
    pub id: i64,
    pub course_name: String,
    pub department_id: i64,
    pub semester: String,
    pub class_name: String,
    // 学时
    pub lecture_hours: i32,
    pub submitted_by: String,
    pub updated_at: chrono::DateTime<chrono::Utc>,
}
