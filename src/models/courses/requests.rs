use serde::Deserialize;
use ts_rs::TS;

use crate::utils::validate::{NAME_MAX_LEN, SHORT_MAX_LEN, validate_length};

// 创建与更新课程共用的请求
#[derive(Debug, Clone, Deserialize, TS)]
#[ts(export, export_to = "course.ts")]
pub struct CourseRequest {
    pub course_name: String,
    pub department_id: i64,
    pub semester: String,
    pub class_name: String,
    pub lecture_hours: i32,
    pub submitted_by: String,
}

impl CourseRequest {
    pub fn validate(&self) -> Result<(), String> {
        validate_length("course_name", &self.course_name, NAME_MAX_LEN)?;
        validate_length("semester", &self.semester, SHORT_MAX_LEN)?;
        validate_length("class_name", &self.class_name, SHORT_MAX_LEN)?;
        if self.lecture_hours < 0 {
            return Err("lecture_hours must not be negative".to_string());
        }
        validate_length("submitted_by", &self.submitted_by, NAME_MAX_LEN)
    }
}
