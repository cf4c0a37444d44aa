use serde::{Deserialize, Serialize};
use ts_rs::TS;

// 考勤记录
#[derive(Debug, Clone, Serialize, Deserialize, TS)]
#[ts(export, export_to = "attendance.ts")]
pub struct AttendanceLog {
    pub id: i64,
    pub student_id: i64,
    pub course_id: i64,
    pub present: bool,
    // 提交人（用户ID）
    pub submitted_by_id: i64,
    pub updated_at: chrono::DateTime<chrono::Utc>,
}
