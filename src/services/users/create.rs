use actix_web::{HttpRequest, HttpResponse, Result as ActixResult};
use tracing::info;

use super::{UserService, hash_request_password, user_storage_error};
use crate::models::{ApiResponse, ErrorCode, users::requests::UserRequest};
use crate::services::common::validation_error;

pub async fn create_user(
    service: &UserService,
    mut user_data: UserRequest,
    request: &HttpRequest,
) -> ActixResult<HttpResponse> {
    if let Err(msg) = user_data.validate() {
        return Ok(validation_error(msg));
    }

    if let Err(resp) = hash_request_password(&mut user_data) {
        return Ok(resp);
    }

    let storage = service.get_storage(request);

    match storage.create_user(user_data).await {
        Ok(user) => {
            info!("User {} ({}) created", user.id, user.username);
            Ok(HttpResponse::Created().json(ApiResponse::success(user, "User created successfully")))
        }
        Err(e) => Ok(user_storage_error(
            ErrorCode::UserCreationFailed,
            "creating user",
            &e,
        )),
    }
}
