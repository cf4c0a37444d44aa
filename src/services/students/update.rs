use actix_web::{HttpRequest, HttpResponse, Result as ActixResult};
use tracing::info;

use super::StudentService;
use crate::models::{ApiResponse, ErrorCode, students::requests::StudentRequest};
use crate::services::common::{
    Resource, not_found, persistence_error, require_found, validation_error,
};

const ACTION: &str = "updating student";

pub async fn update_student(
    service: &StudentService,
    student_id: i64,
    update_data: StudentRequest,
    request: &HttpRequest,
) -> ActixResult<HttpResponse> {
    if let Err(msg) = update_data.validate() {
        return Ok(validation_error(msg));
    }

    let storage = service.get_storage(request);

    // 先检查目标学生，再检查院系
    if let Err(resp) = require_found(
        storage.get_student_by_id(student_id).await,
        Resource::Student,
        ErrorCode::StudentUpdateFailed,
        ACTION,
    ) {
        return Ok(resp);
    }

    if let Err(resp) = require_found(
        storage.get_department_by_id(update_data.department_id).await,
        Resource::Department,
        ErrorCode::StudentUpdateFailed,
        ACTION,
    ) {
        return Ok(resp);
    }

    match storage.update_student(student_id, update_data).await {
        Ok(Some(student)) => {
            info!("Student {} updated", student.id);
            Ok(HttpResponse::Ok().json(ApiResponse::success(
                student,
                "Student updated successfully",
            )))
        }
        Ok(None) => Ok(not_found(Resource::Student)),
        Err(e) => Ok(persistence_error(ErrorCode::StudentUpdateFailed, ACTION, &e)),
    }
}
