use actix_web::{HttpRequest, HttpResponse, Result as ActixResult};
use tracing::info;

use super::{AttendanceService, check_references};
use crate::models::{ApiResponse, ErrorCode, attendance::requests::AttendanceLogRequest};
use crate::services::common::persistence_error;

const ACTION: &str = "creating attendance log";

pub async fn create_attendance_log(
    service: &AttendanceService,
    attendance_data: AttendanceLogRequest,
    request: &HttpRequest,
) -> ActixResult<HttpResponse> {
    let storage = service.get_storage(request);

    // 不校验学生与课程是否属于同一院系
    if let Err(resp) = check_references(
        &storage,
        &attendance_data,
        ErrorCode::AttendanceLogCreationFailed,
        ACTION,
    )
    .await
    {
        return Ok(resp);
    }

    match storage.create_attendance_log(attendance_data).await {
        Ok(log) => {
            info!(
                "Attendance log {} recorded for student {} in course {} by user {}",
                log.id, log.student_id, log.course_id, log.submitted_by_id
            );
            Ok(HttpResponse::Created().json(ApiResponse::success(
                log,
                "Attendance log created successfully",
            )))
        }
        Err(e) => Ok(persistence_error(
            ErrorCode::AttendanceLogCreationFailed,
            ACTION,
            &e,
        )),
    }
}
