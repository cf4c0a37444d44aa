use actix_web::{HttpRequest, HttpResponse, Result as ActixResult};
use tracing::info;

use super::DepartmentService;
use crate::models::{ApiResponse, ErrorCode, departments::requests::DepartmentRequest};
use crate::services::common::{persistence_error, validation_error};

pub async fn create_department(
    service: &DepartmentService,
    department_data: DepartmentRequest,
    request: &HttpRequest,
) -> ActixResult<HttpResponse> {
    if let Err(msg) = department_data.validate() {
        return Ok(validation_error(msg));
    }

    let storage = service.get_storage(request);

    match storage.create_department(department_data).await {
        Ok(department) => {
            info!(
                "Department {} ({}) created by {}",
                department.id, department.department_name, department.submitted_by
            );
            Ok(HttpResponse::Created().json(ApiResponse::success(
                department,
                "Department created successfully",
            )))
        }
        Err(e) => Ok(persistence_error(
            ErrorCode::DepartmentCreationFailed,
            "creating department",
            &e,
        )),
    }
}
