use actix_web::{HttpRequest, HttpResponse, Result as ActixResult};

use super::StudentService;
use crate::models::ApiResponse;
use crate::services::common::list_error;

pub async fn list_students(
    service: &StudentService,
    request: &HttpRequest,
) -> ActixResult<HttpResponse> {
    let storage = service.get_storage(request);

    match storage.list_students().await {
        Ok(students) => Ok(HttpResponse::Ok().json(ApiResponse::success(
            students,
            "Student list retrieved successfully",
        ))),
        Err(e) => Ok(list_error("students", &e)),
    }
}
