use actix_web::{HttpRequest, HttpResponse, error::InternalError, error::JsonPayloadError};
use tracing::debug;

use crate::models::{ApiResponse, ErrorCode};

/// JSON 请求体解析失败时返回 400 和统一响应结构
pub fn json_error_handler(err: JsonPayloadError, req: &HttpRequest) -> actix_web::Error {
    debug!("Rejected JSON body for {} {}: {}", req.method(), req.path(), err);

    let message = match &err {
        JsonPayloadError::ContentType => "Content-Type must be application/json".to_string(),
        JsonPayloadError::Deserialize(e) => format!("Invalid request body: {e}"),
        JsonPayloadError::Overflow { limit } | JsonPayloadError::OverflowKnownLength { limit, .. } => {
            format!("Request body exceeds the {limit} byte limit")
        }
        _ => "Invalid request body".to_string(),
    };

    let response = HttpResponse::BadRequest().json(ApiResponse::error_empty(
        ErrorCode::InvalidRequestBody,
        message,
    ));
    InternalError::from_response(err, response).into()
}

#[cfg(test)]
mod tests {
    use super::*;
    use actix_web::{App, http::StatusCode, test, web};
    use serde::Deserialize;

    #[derive(Deserialize)]
    struct Payload {
        #[allow(dead_code)]
        name: String,
    }

    async fn accept(_: web::Json<Payload>) -> HttpResponse {
        HttpResponse::Ok().finish()
    }

    #[actix_web::test]
    async fn test_missing_field_is_bad_request() {
        let app = test::init_service(
            App::new()
                .app_data(web::JsonConfig::default().error_handler(json_error_handler))
                .route("/", web::post().to(accept)),
        )
        .await;

        let req = test::TestRequest::post()
            .uri("/")
            .set_json(serde_json::json!({ "other": 1 }))
            .to_request();
        let resp = test::call_service(&app, req).await;
        assert_eq!(resp.status(), StatusCode::BAD_REQUEST);

        let body: serde_json::Value = test::read_body_json(resp).await;
        assert_eq!(body["code"], ErrorCode::InvalidRequestBody as i32);
        assert!(body["message"].as_str().unwrap().contains("name"));
    }
}
