use actix_web::{HttpRequest, HttpResponse, Result as ActixResult};
use tracing::info;

use super::{UserService, hash_request_password, user_storage_error};
use crate::models::{ApiResponse, ErrorCode, users::requests::UserRequest};
use crate::services::common::{Resource, not_found, validation_error};

pub async fn update_user(
    service: &UserService,
    user_id: i64,
    mut update_data: UserRequest,
    request: &HttpRequest,
) -> ActixResult<HttpResponse> {
    if let Err(msg) = update_data.validate() {
        return Ok(validation_error(msg));
    }

    if let Err(resp) = hash_request_password(&mut update_data) {
        return Ok(resp);
    }

    let storage = service.get_storage(request);

    match storage.update_user(user_id, update_data).await {
        Ok(Some(user)) => {
            info!("User {} updated", user.id);
            Ok(HttpResponse::Ok().json(ApiResponse::success(
                user,
                "User information updated successfully",
            )))
        }
        Ok(None) => Ok(not_found(Resource::User)),
        Err(e) => Ok(user_storage_error(
            ErrorCode::UserUpdateFailed,
            "updating user",
            &e,
        )),
    }
}
