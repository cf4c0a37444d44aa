pub mod create;
pub mod list;
pub mod update;

use actix_web::{HttpRequest, HttpResponse, Result as ActixResult};
use std::sync::Arc;

use crate::config::AppConfig;
use crate::errors::AttendanceError;
use crate::models::{ApiResponse, ErrorCode, users::requests::UserRequest};
use crate::services::common::persistence_error;
use crate::storage::Storage;
use crate::utils::password::hash_password;

pub struct UserService {
    storage: Option<Arc<dyn Storage>>,
}

impl UserService {
    pub fn new_lazy() -> Self {
        Self { storage: None }
    }

    pub(crate) fn get_storage(&self, request: &HttpRequest) -> Arc<dyn Storage> {
        if let Some(storage) = &self.storage {
            storage.clone()
        } else {
            request
                .app_data::<actix_web::web::Data<Arc<dyn Storage>>>()
                .expect("Storage not found in app data")
                .get_ref()
                .clone()
        }
    }

    pub async fn list_users(&self, request: &HttpRequest) -> ActixResult<HttpResponse> {
        list::list_users(self, request).await
    }

    pub async fn create_user(
        &self,
        user_data: UserRequest,
        request: &HttpRequest,
    ) -> ActixResult<HttpResponse> {
        create::create_user(self, user_data, request).await
    }

    pub async fn update_user(
        &self,
        user_id: i64,
        update_data: UserRequest,
        request: &HttpRequest,
    ) -> ActixResult<HttpResponse> {
        update::update_user(self, user_id, update_data, request).await
    }
}

/// 将请求中的明文密码替换为哈希值
pub(crate) fn hash_request_password(user_data: &mut UserRequest) -> Result<(), HttpResponse> {
    if let Some(password) = user_data.password.take() {
        match hash_password(&password, &AppConfig::get().argon2) {
            Ok(hash) => user_data.password = Some(hash),
            Err(e) => {
                tracing::error!("Password hashing failed: {}", e);
                return Err(
                    HttpResponse::InternalServerError().json(ApiResponse::error_empty(
                        ErrorCode::InternalServerError,
                        "Password hashing failed",
                    )),
                );
            }
        }
    }
    Ok(())
}

/// 用户名与邮箱是仅有的唯一约束，单独给出错误码
pub(crate) fn user_storage_error(
    code: ErrorCode,
    action: &str,
    err: &AttendanceError,
) -> HttpResponse {
    if let AttendanceError::UniqueViolation(detail) = err {
        tracing::warn!("Error {}: {}", action, detail);
        return HttpResponse::BadRequest().json(ApiResponse::error_empty(
            ErrorCode::UserAlreadyExists,
            format!("Error {action}: username or email already exists"),
        ));
    }
    persistence_error(code, action, err)
}
