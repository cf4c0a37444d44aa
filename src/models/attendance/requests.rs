use serde::Deserialize;
use ts_rs::TS;

// 创建与更新考勤记录共用的请求
//
// 三个外键按声明顺序校验：student_id、course_id、submitted_by_id，
// 第一个不存在的引用决定返回的 404 信息。
#[derive(Debug, Clone, Deserialize, TS)]
#[ts(export, export_to = "attendance.ts")]
pub struct AttendanceLogRequest {
    pub student_id: i64,
    pub course_id: i64,
    pub present: bool,
    pub submitted_by_id: i64,
}
