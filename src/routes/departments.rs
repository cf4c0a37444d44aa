use actix_web::{HttpRequest, HttpResponse, Result as ActixResult, web};
use once_cell::sync::Lazy;

use super::API_PREFIX;
use crate::models::departments::requests::DepartmentRequest;
use crate::services::DepartmentService;
use crate::utils::SafeIDI64;

// 懒加载的全局 DepartmentService 实例
static DEPARTMENT_SERVICE: Lazy<DepartmentService> = Lazy::new(DepartmentService::new_lazy);

// HTTP处理程序
pub async fn list_departments(req: HttpRequest) -> ActixResult<HttpResponse> {
    DEPARTMENT_SERVICE.list_departments(&req).await
}

pub async fn create_department(
    req: HttpRequest,
    department_data: web::Json<DepartmentRequest>,
) -> ActixResult<HttpResponse> {
    DEPARTMENT_SERVICE
        .create_department(department_data.into_inner(), &req)
        .await
}

pub async fn update_department(
    req: HttpRequest,
    department_id: SafeIDI64,
    update_data: web::Json<DepartmentRequest>,
) -> ActixResult<HttpResponse> {
    DEPARTMENT_SERVICE
        .update_department(department_id.0, update_data.into_inner(), &req)
        .await
}

// 配置路由
pub fn configure_department_routes(cfg: &mut web::ServiceConfig) {
    cfg.service(
        web::scope(&format!("{API_PREFIX}/departments"))
            .route("", web::get().to(list_departments))
            .route("", web::post().to(create_department))
            .route("/{id}", web::put().to(update_department)),
    );
}

#[cfg(test)]
mod tests {
    use actix_web::http::StatusCode;
    use actix_web::test;
    use serde_json::json;

    use crate::models::ErrorCode;
    use crate::models::departments::entities::Department;
    use crate::routes::test_support::*;

    #[actix_web::test]
    async fn test_create_then_list() {
        let app = init_app().await;

        let (status, body) = call::<Department>(
            &app,
            post("/departments", json!({
                "department_name": "Mathematics",
                "submitted_by": "registrar"
            })),
        )
        .await;
        assert_eq!(status, StatusCode::CREATED);
        let created = body.data.unwrap();
        assert!(created.id > 0);
        assert_eq!(created.department_name, "Mathematics");

        let (status, body) = call::<Vec<Department>>(&app, get("/departments")).await;
        assert_eq!(status, StatusCode::OK);
        let all = body.data.unwrap();
        assert_eq!(all.len(), 1);
        assert_eq!(all[0].id, created.id);
        assert_eq!(all[0].submitted_by, "registrar");
        assert_eq!(all[0].updated_at, created.updated_at);
    }

    #[actix_web::test]
    async fn test_list_empty_is_ok() {
        let app = init_app().await;
        let (status, body) = call::<Vec<Department>>(&app, get("/departments")).await;
        assert_eq!(status, StatusCode::OK);
        assert!(body.data.unwrap().is_empty());
    }

    #[actix_web::test]
    async fn test_update_missing_department_is_404() {
        let app = init_app().await;
        let existing = create_department(&app, "Physics").await;

        let (status, body) = call_empty(
            &app,
            put("/departments/4242", json!({
                "department_name": "Renamed",
                "submitted_by": "dean"
            })),
        )
        .await;
        assert_eq!(status, StatusCode::NOT_FOUND);
        assert_eq!(body.message, "Department not found");

        // 已有数据不受影响
        let (_, body) = call::<Vec<Department>>(&app, get("/departments")).await;
        let all = body.data.unwrap();
        assert_eq!(all.len(), 1);
        assert_eq!(all[0].department_name, "Physics");
        assert_eq!(all[0].updated_at, existing.updated_at);
    }

    #[actix_web::test]
    async fn test_update_replaces_fields() {
        let app = init_app().await;
        let existing = create_department(&app, "Physics").await;

        let (status, body) = call::<Department>(
            &app,
            put(&format!("/departments/{}", existing.id), json!({
                "department_name": "Applied Physics",
                "submitted_by": "dean"
            })),
        )
        .await;
        assert_eq!(status, StatusCode::OK);
        let updated = body.data.unwrap();
        assert_eq!(updated.id, existing.id);
        assert_eq!(updated.department_name, "Applied Physics");
        assert_eq!(updated.submitted_by, "dean");
    }

    #[actix_web::test]
    async fn test_blank_fields_are_stored_as_given() {
        let app = init_app().await;
        let (status, body) = call::<Department>(
            &app,
            post("/departments", json!({
                "department_name": "",
                "submitted_by": "  "
            })),
        )
        .await;
        assert_eq!(status, StatusCode::CREATED);
        let created = body.data.unwrap();

        let (_, body) = call::<Vec<Department>>(&app, get("/departments")).await;
        let all = body.data.unwrap();
        assert_eq!(all.len(), 1);
        assert_eq!(all[0].id, created.id);
        assert_eq!(all[0].department_name, "");
        assert_eq!(all[0].submitted_by, "  ");
    }

    #[actix_web::test]
    async fn test_over_long_name_is_rejected() {
        let app = init_app().await;
        let (status, body) = call_empty(
            &app,
            post("/departments", json!({
                "department_name": "d".repeat(256),
                "submitted_by": "registrar"
            })),
        )
        .await;
        assert_eq!(status, StatusCode::BAD_REQUEST);
        assert_eq!(body.message, "department_name must be at most 255 characters");

        let (_, body) = call::<Vec<Department>>(&app, get("/departments")).await;
        assert!(body.data.unwrap().is_empty());
    }

    #[actix_web::test]
    async fn test_body_over_payload_limit_is_rejected() {
        let app = init_app().await;
        let limit = crate::config::AppConfig::get().server.limits.max_payload_size;

        let (status, body) = call_empty(
            &app,
            post("/departments", json!({
                "department_name": "d".repeat(limit),
                "submitted_by": "registrar"
            })),
        )
        .await;
        assert_eq!(status, StatusCode::BAD_REQUEST);
        assert_eq!(body.code, ErrorCode::InvalidRequestBody as i64);
        assert!(body.message.starts_with("Request body exceeds"));

        let (_, body) = call::<Vec<Department>>(&app, get("/departments")).await;
        assert!(body.data.unwrap().is_empty());
    }

    #[actix_web::test]
    async fn test_non_integer_id_and_bad_json() {
        let app = init_app().await;

        let (status, _) = call_empty(
            &app,
            put("/departments/abc", json!({
                "department_name": "X",
                "submitted_by": "Y"
            })),
        )
        .await;
        assert_eq!(status, StatusCode::BAD_REQUEST);

        let (status, _) = call_empty(&app, post("/departments", json!({ "submitted_by": "Y" }))).await;
        assert_eq!(status, StatusCode::BAD_REQUEST);

        // 不存在 DELETE 路由
        let req = test::TestRequest::delete()
            .uri("/api/v1/departments/1")
            .to_request();
        let resp = test::call_service(&app, req).await;
        assert!(resp.status().is_client_error());
    }
}
