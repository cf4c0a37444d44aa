use serde::Deserialize;
use ts_rs::TS;

use crate::utils::validate::{NAME_MAX_LEN, validate_length};

// 创建与更新学生共用的请求
#[derive(Debug, Clone, Deserialize, TS)]
#[ts(export, export_to = "student.ts")]
pub struct StudentRequest {
    pub full_name: String,
    pub department_id: i64,
    pub class_name: String,
    pub submitted_by: String,
}

impl StudentRequest {
    pub fn validate(&self) -> Result<(), String> {
        validate_length("full_name", &self.full_name, NAME_MAX_LEN)?;
        validate_length("class_name", &self.class_name, NAME_MAX_LEN)?;
        validate_length("submitted_by", &self.submitted_by, NAME_MAX_LEN)
    }
}
