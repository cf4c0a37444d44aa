use actix_web::{HttpRequest, HttpResponse, Result as ActixResult};

use super::DepartmentService;
use crate::models::ApiResponse;
use crate::services::common::list_error;

pub async fn list_departments(
    service: &DepartmentService,
    request: &HttpRequest,
) -> ActixResult<HttpResponse> {
    let storage = service.get_storage(request);

    match storage.list_departments().await {
        Ok(departments) => Ok(HttpResponse::Ok().json(ApiResponse::success(
            departments,
            "Department list retrieved successfully",
        ))),
        Err(e) => Ok(list_error("departments", &e)),
    }
}
