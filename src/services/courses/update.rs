use actix_web::{HttpRequest, HttpResponse, Result as ActixResult};
use tracing::info;

use super::CourseService;
use crate::models::{ApiResponse, ErrorCode, courses::requests::CourseRequest};
use crate::services::common::{
    Resource, not_found, persistence_error, require_found, validation_error,
};

const ACTION: &str = "updating course";

pub async fn update_course(
    service: &CourseService,
    course_id: i64,
    update_data: CourseRequest,
    request: &HttpRequest,
) -> ActixResult<HttpResponse> {
    if let Err(msg) = update_data.validate() {
        return Ok(validation_error(msg));
    }

    let storage = service.get_storage(request);

    // 先检查目标课程，再检查院系
    if let Err(resp) = require_found(
        storage.get_course_by_id(course_id).await,
        Resource::Course,
        ErrorCode::CourseUpdateFailed,
        ACTION,
    ) {
        return Ok(resp);
    }

    if let Err(resp) = require_found(
        storage.get_department_by_id(update_data.department_id).await,
        Resource::Department,
        ErrorCode::CourseUpdateFailed,
        ACTION,
    ) {
        return Ok(resp);
    }

    match storage.update_course(course_id, update_data).await {
        Ok(Some(course)) => {
            info!("Course {} updated", course.id);
            Ok(HttpResponse::Ok().json(ApiResponse::success(course, "Course updated successfully")))
        }
        Ok(None) => Ok(not_found(Resource::Course)),
        Err(e) => Ok(persistence_error(ErrorCode::CourseUpdateFailed, ACTION, &e)),
    }
}
