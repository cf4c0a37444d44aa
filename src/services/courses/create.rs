use actix_web::{HttpRequest, HttpResponse, Result as ActixResult};
use tracing::info;

use super::CourseService;
use crate::models::{ApiResponse, ErrorCode, courses::requests::CourseRequest};
use crate::services::common::{Resource, persistence_error, require_found, validation_error};

const ACTION: &str = "creating course";

pub async fn create_course(
    service: &CourseService,
    course_data: CourseRequest,
    request: &HttpRequest,
) -> ActixResult<HttpResponse> {
    if let Err(msg) = course_data.validate() {
        return Ok(validation_error(msg));
    }

    let storage = service.get_storage(request);

    if let Err(resp) = require_found(
        storage.get_department_by_id(course_data.department_id).await,
        Resource::Department,
        ErrorCode::CourseCreationFailed,
        ACTION,
    ) {
        return Ok(resp);
    }

    match storage.create_course(course_data).await {
        Ok(course) => {
            info!(
                "Course {} ({}) created in department {}",
                course.id, course.course_name, course.department_id
            );
            Ok(HttpResponse::Created()
                .json(ApiResponse::success(course, "Course created successfully")))
        }
        Err(e) => Ok(persistence_error(ErrorCode::CourseCreationFailed, ACTION, &e)),
    }
}
