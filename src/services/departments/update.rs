use actix_web::{HttpRequest, HttpResponse, Result as ActixResult};
use tracing::info;

use super::DepartmentService;
use crate::models::{ApiResponse, ErrorCode, departments::requests::DepartmentRequest};
use crate::services::common::{Resource, not_found, persistence_error, validation_error};

pub async fn update_department(
    service: &DepartmentService,
    department_id: i64,
    update_data: DepartmentRequest,
    request: &HttpRequest,
) -> ActixResult<HttpResponse> {
    if let Err(msg) = update_data.validate() {
        return Ok(validation_error(msg));
    }

    let storage = service.get_storage(request);

    // 院系没有外键，存储层返回 None 即表示目标不存在
    match storage.update_department(department_id, update_data).await {
        Ok(Some(department)) => {
            info!("Department {} updated", department.id);
            Ok(HttpResponse::Ok().json(ApiResponse::success(
                department,
                "Department updated successfully",
            )))
        }
        Ok(None) => Ok(not_found(Resource::Department)),
        Err(e) => Ok(persistence_error(
            ErrorCode::DepartmentUpdateFailed,
            "updating department",
            &e,
        )),
    }
}
