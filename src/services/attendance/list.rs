use actix_web::{HttpRequest, HttpResponse, Result as ActixResult};

use super::AttendanceService;
use crate::models::ApiResponse;
use crate::services::common::list_error;

pub async fn list_attendance_logs(
    service: &AttendanceService,
    request: &HttpRequest,
) -> ActixResult<HttpResponse> {
    let storage = service.get_storage(request);

    match storage.list_attendance_logs().await {
        Ok(logs) => Ok(HttpResponse::Ok().json(ApiResponse::success(
            logs,
            "Attendance log list retrieved successfully",
        ))),
        Err(e) => Ok(list_error("attendance logs", &e)),
    }
}
