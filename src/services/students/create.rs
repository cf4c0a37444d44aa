use actix_web::{HttpRequest, HttpResponse, Result as ActixResult};
use tracing::info;

use super::StudentService;
use crate::models::{ApiResponse, ErrorCode, students::requests::StudentRequest};
use crate::services::common::{Resource, persistence_error, require_found, validation_error};

const ACTION: &str = "creating student";

pub async fn create_student(
    service: &StudentService,
    student_data: StudentRequest,
    request: &HttpRequest,
) -> ActixResult<HttpResponse> {
    if let Err(msg) = student_data.validate() {
        return Ok(validation_error(msg));
    }

    let storage = service.get_storage(request);

    // 所属院系必须存在
    if let Err(resp) = require_found(
        storage.get_department_by_id(student_data.department_id).await,
        Resource::Department,
        ErrorCode::StudentCreationFailed,
        ACTION,
    ) {
        return Ok(resp);
    }

    match storage.create_student(student_data).await {
        Ok(student) => {
            info!(
                "Student {} created in department {}",
                student.id, student.department_id
            );
            Ok(HttpResponse::Created()
                .json(ApiResponse::success(student, "Student created successfully")))
        }
        Err(e) => Ok(persistence_error(ErrorCode::StudentCreationFailed, ACTION, &e)),
    }
}
