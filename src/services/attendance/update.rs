use actix_web::{HttpRequest, HttpResponse, Result as ActixResult};
use tracing::info;

use super::{AttendanceService, check_references};
use crate::models::{ApiResponse, ErrorCode, attendance::requests::AttendanceLogRequest};
use crate::services::common::{Resource, not_found, persistence_error, require_found};

const ACTION: &str = "updating attendance log";

pub async fn update_attendance_log(
    service: &AttendanceService,
    attendance_id: i64,
    update_data: AttendanceLogRequest,
    request: &HttpRequest,
) -> ActixResult<HttpResponse> {
    let storage = service.get_storage(request);

    // 目标记录优先于外键检查
    if let Err(resp) = require_found(
        storage.get_attendance_log_by_id(attendance_id).await,
        Resource::AttendanceLog,
        ErrorCode::AttendanceLogUpdateFailed,
        ACTION,
    ) {
        return Ok(resp);
    }

    if let Err(resp) = check_references(
        &storage,
        &update_data,
        ErrorCode::AttendanceLogUpdateFailed,
        ACTION,
    )
    .await
    {
        return Ok(resp);
    }

    match storage.update_attendance_log(attendance_id, update_data).await {
        Ok(Some(log)) => {
            info!("Attendance log {} updated", log.id);
            Ok(HttpResponse::Ok().json(ApiResponse::success(
                log,
                "Attendance log updated successfully",
            )))
        }
        Ok(None) => Ok(not_found(Resource::AttendanceLog)),
        Err(e) => Ok(persistence_error(
            ErrorCode::AttendanceLogUpdateFailed,
            ACTION,
            &e,
        )),
    }
}
