use serde::Deserialize;
use ts_rs::TS;

use crate::utils::validate::{NAME_MAX_LEN, SHORT_MAX_LEN, validate_length};

// 创建与更新用户共用的请求
//
// password 只写不读：创建时缺省为空凭据，更新时缺省则保留原密码。
#[derive(Debug, Clone, Deserialize, TS)]
#[ts(export, export_to = "user.ts")]
pub struct UserRequest {
    #[serde(rename = "type")]
    pub user_type: String,
    pub full_name: String,
    pub username: String,
    pub email: String,
    #[ts(optional)]
    pub password: Option<String>,
    pub submitted_by: String,
}

impl UserRequest {
    pub fn validate(&self) -> Result<(), String> {
        validate_length("type", &self.user_type, SHORT_MAX_LEN)?;
        validate_length("full_name", &self.full_name, NAME_MAX_LEN)?;
        validate_length("username", &self.username, NAME_MAX_LEN)?;
        validate_length("email", &self.email, NAME_MAX_LEN)?;
        validate_length("submitted_by", &self.submitted_by, NAME_MAX_LEN)
    }
}
