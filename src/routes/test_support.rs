//! 路由测试共用的应用构造与请求辅助函数

use std::sync::Arc;

use actix_web::body::MessageBody;
use actix_web::dev::{Service, ServiceResponse};
use actix_web::http::StatusCode;
use actix_web::{App, Error, test, web};
use serde::de::DeserializeOwned;
use serde_json::{Value, json};
use ts_rs::TS;

use super::{API_PREFIX, configure_api_routes};
use crate::config::AppConfig;
use crate::models::ApiResponse;
use crate::models::departments::entities::Department;
use crate::storage::{Storage, sea_orm_storage::SeaOrmStorage};
use crate::utils::json_error_handler;

/// 基于内存数据库构造完整的 API 应用
pub async fn init_app()
-> impl Service<actix_http::Request, Response = ServiceResponse<impl MessageBody>, Error = Error> {
    init_app_with(Arc::new(SeaOrmStorage::in_memory().await)).await
}

/// 使用给定的存储构造应用，便于测试直接检查数据库中的内容
pub async fn init_app_with(
    storage: Arc<dyn Storage>,
) -> impl Service<actix_http::Request, Response = ServiceResponse<impl MessageBody>, Error = Error> {
    test::init_service(
        App::new()
            .app_data(web::Data::new(storage))
            .app_data(
                web::JsonConfig::default()
                    .limit(AppConfig::get().server.limits.max_payload_size)
                    .error_handler(json_error_handler),
            )
            .configure(configure_api_routes),
    )
    .await
}

pub fn get(path: &str) -> actix_http::Request {
    test::TestRequest::get()
        .uri(&format!("{API_PREFIX}{path}"))
        .to_request()
}

pub fn post(path: &str, body: Value) -> actix_http::Request {
    test::TestRequest::post()
        .uri(&format!("{API_PREFIX}{path}"))
        .set_json(body)
        .to_request()
}

pub fn put(path: &str, body: Value) -> actix_http::Request {
    test::TestRequest::put()
        .uri(&format!("{API_PREFIX}{path}"))
        .set_json(body)
        .to_request()
}

/// 发送请求并按具体数据类型解析响应
pub async fn call<T>(
    app: &impl Service<actix_http::Request, Response = ServiceResponse<impl MessageBody>, Error = Error>,
    req: actix_http::Request,
) -> (StatusCode, ApiResponse<T>)
where
    T: TS + DeserializeOwned,
{
    let resp = test::call_service(app, req).await;
    let status = resp.status();
    let body: ApiResponse<T> = test::read_body_json(resp).await;
    (status, body)
}

/// 发送请求，响应按原始 JSON 返回（错误响应没有 data）
pub async fn call_empty(
    app: &impl Service<actix_http::Request, Response = ServiceResponse<impl MessageBody>, Error = Error>,
    req: actix_http::Request,
) -> (StatusCode, ErrorBody) {
    let resp = test::call_service(app, req).await;
    let status = resp.status();
    let body: Value = test::read_body_json(resp).await;
    (
        status,
        ErrorBody {
            code: body["code"].as_i64().unwrap_or_default(),
            message: body["message"].as_str().unwrap_or_default().to_string(),
            raw: body,
        },
    )
}

#[derive(Debug)]
pub struct ErrorBody {
    pub code: i64,
    pub message: String,
    pub raw: Value,
}

pub async fn create_department(
    app: &impl Service<actix_http::Request, Response = ServiceResponse<impl MessageBody>, Error = Error>,
    name: &str,
) -> Department {
    let (status, body) = call::<Department>(
        app,
        post("/departments", json!({
            "department_name": name,
            "submitted_by": "registrar"
        })),
    )
    .await;
    assert_eq!(status, StatusCode::CREATED);
    body.data.unwrap()
}

/// 创建院系和挂在其下的一名学生、一门课程，返回 (院系ID, 学生ID, 课程ID)
pub async fn seed_roster(
    app: &impl Service<actix_http::Request, Response = ServiceResponse<impl MessageBody>, Error = Error>,
) -> (i64, i64, i64) {
    let department = create_department(app, "Computer Science").await;

    let resp = test::call_service(
        app,
        post("/students", json!({
            "full_name": "Ada Lovelace",
            "department_id": department.id,
            "class_name": "CS-1",
            "submitted_by": "registrar"
        })),
    )
    .await;
    assert_eq!(resp.status(), StatusCode::CREATED);
    let student: Value = test::read_body_json(resp).await;

    let resp = test::call_service(
        app,
        post("/courses", json!({
            "course_name": "Algorithms",
            "department_id": department.id,
            "semester": "2024-Fall",
            "class_name": "CS-1",
            "lecture_hours": 48,
            "submitted_by": "registrar"
        })),
    )
    .await;
    assert_eq!(resp.status(), StatusCode::CREATED);
    let course: Value = test::read_body_json(resp).await;

    (
        department.id,
        student["data"]["id"].as_i64().unwrap(),
        course["data"]["id"].as_i64().unwrap(),
    )
}

pub async fn create_user(
    app: &impl Service<actix_http::Request, Response = ServiceResponse<impl MessageBody>, Error = Error>,
    username: &str,
    email: &str,
) -> (StatusCode, ErrorBody) {
    call_empty(
        app,
        post("/users", json!({
            "type": "teacher",
            "full_name": "Grace Hopper",
            "username": username,
            "email": email,
            "password": "correct horse battery staple",
            "submitted_by": "admin"
        })),
    )
    .await
}
