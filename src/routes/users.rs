use actix_web::{HttpRequest, HttpResponse, Result as ActixResult, web};
use once_cell::sync::Lazy;

use super::API_PREFIX;
use crate::models::users::requests::UserRequest;
use crate::services::UserService;
use crate::utils::SafeIDI64;

// 懒加载的全局 UserService 实例
static USER_SERVICE: Lazy<UserService> = Lazy::new(UserService::new_lazy);

// HTTP处理程序
pub async fn list_users(req: HttpRequest) -> ActixResult<HttpResponse> {
    USER_SERVICE.list_users(&req).await
}

pub async fn create_user(
    req: HttpRequest,
    user_data: web::Json<UserRequest>,
) -> ActixResult<HttpResponse> {
    USER_SERVICE.create_user(user_data.into_inner(), &req).await
}

pub async fn update_user(
    req: HttpRequest,
    user_id: SafeIDI64,
    update_data: web::Json<UserRequest>,
) -> ActixResult<HttpResponse> {
    USER_SERVICE
        .update_user(user_id.0, update_data.into_inner(), &req)
        .await
}

// 配置路由
pub fn configure_user_routes(cfg: &mut web::ServiceConfig) {
    cfg.service(
        web::scope(&format!("{API_PREFIX}/users"))
            .route("", web::get().to(list_users))
            .route("", web::post().to(create_user))
            .route("/{id}", web::put().to(update_user)),
    );
}

#[cfg(test)]
mod tests {
    use std::sync::Arc;

    use actix_web::http::StatusCode;
    use serde_json::json;

    use crate::models::ErrorCode;
    use crate::models::users::entities::User;
    use crate::routes::test_support::*;
    use crate::storage::{Storage, sea_orm_storage::SeaOrmStorage};
    use crate::utils::password::verify_password;

    #[actix_web::test]
    async fn test_duplicate_username_is_rejected() {
        let app = init_app().await;

        let (status, _) = create_user(&app, "ghopper", "grace@example.edu").await;
        assert_eq!(status, StatusCode::CREATED);

        let (status, body) = create_user(&app, "ghopper", "another@example.edu").await;
        assert_eq!(status, StatusCode::BAD_REQUEST);
        assert_eq!(body.code, ErrorCode::UserAlreadyExists as i64);
        assert!(body.message.starts_with("Error creating user"));

        let (status, _) = create_user(&app, "someone_else", "grace@example.edu").await;
        assert_eq!(status, StatusCode::BAD_REQUEST);

        let (_, body) = call::<Vec<User>>(&app, get("/users")).await;
        assert_eq!(body.data.unwrap().len(), 1);
    }

    #[actix_web::test]
    async fn test_password_is_hashed_and_never_returned() {
        let storage: Arc<dyn Storage> = Arc::new(SeaOrmStorage::in_memory().await);
        let app = init_app_with(storage.clone()).await;

        let (status, body) = create_user(&app, "ghopper", "grace@example.edu").await;
        assert_eq!(status, StatusCode::CREATED);
        let data = &body.raw["data"];
        assert_eq!(data["type"], "teacher");
        assert!(data.get("password").is_none());
        assert!(data.get("password_hash").is_none());

        let id = data["id"].as_i64().unwrap();
        let stored = storage.get_user_by_id(id).await.unwrap().unwrap();
        assert_ne!(stored.password_hash, "correct horse battery staple");
        assert!(verify_password("correct horse battery staple", &stored.password_hash));

        // 更新时不带密码则保留原哈希
        let (status, _) = call_empty(
            &app,
            put(&format!("/users/{id}"), json!({
                "type": "admin",
                "full_name": "Grace Brewster Hopper",
                "username": "ghopper",
                "email": "grace@example.edu",
                "submitted_by": "admin"
            })),
        )
        .await;
        assert_eq!(status, StatusCode::OK);
        let after = storage.get_user_by_id(id).await.unwrap().unwrap();
        assert_eq!(after.user_type, "admin");
        assert_eq!(after.password_hash, stored.password_hash);
    }

    #[actix_web::test]
    async fn test_update_missing_user_and_over_long_email() {
        let app = init_app().await;

        let (status, body) = call_empty(
            &app,
            put("/users/31337", json!({
                "type": "teacher",
                "full_name": "Nobody",
                "username": "nobody",
                "email": "nobody@example.edu",
                "submitted_by": "admin"
            })),
        )
        .await;
        assert_eq!(status, StatusCode::NOT_FOUND);
        assert_eq!(body.message, "User not found");

        let email = format!("{}@example.edu", "g".repeat(250));
        let (status, body) = create_user(&app, "ghopper", &email).await;
        assert_eq!(status, StatusCode::BAD_REQUEST);
        assert_eq!(body.code, ErrorCode::ValidationFailed as i64);
        assert_eq!(body.message, "email must be at most 255 characters");
    }

    #[actix_web::test]
    async fn test_free_form_username_and_email_round_trip() {
        let app = init_app().await;

        let (status, _) = create_user(&app, "grace hopper", "x@localhost").await;
        assert_eq!(status, StatusCode::CREATED);

        let (status, _) = call_empty(
            &app,
            post("/users", json!({
                "type": "",
                "full_name": "",
                "username": "",
                "email": "",
                "password": "",
                "submitted_by": ""
            })),
        )
        .await;
        assert_eq!(status, StatusCode::CREATED);

        let (_, body) = call::<Vec<User>>(&app, get("/users")).await;
        let all = body.data.unwrap();
        assert_eq!(all.len(), 2);
        assert_eq!(all[0].username, "grace hopper");
        assert_eq!(all[0].email, "x@localhost");
        assert_eq!(all[0].user_type, "teacher");
        assert_eq!(all[1].username, "");
        assert_eq!(all[1].email, "");
        assert_eq!(all[1].submitted_by, "");
    }
}
