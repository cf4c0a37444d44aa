use serde::Deserialize;
use ts_rs::TS;

use crate::utils::validate::{NAME_MAX_LEN, validate_length};

// 创建与更新院系共用的请求，更新时为整体替换
#[derive(Debug, Clone, Deserialize, TS)]
#[ts(export, export_to = "department.ts")]
pub struct DepartmentRequest {
    pub department_name: String,
    pub submitted_by: String,
}

impl DepartmentRequest {
    pub fn validate(&self) -> Result<(), String> {
        validate_length("department_name", &self.department_name, NAME_MAX_LEN)?;
        validate_length("submitted_by", &self.submitted_by, NAME_MAX_LEN)
    }
}
