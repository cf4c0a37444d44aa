use actix_web::{HttpRequest, HttpResponse, Result as ActixResult};

use super::CourseService;
use crate::models::ApiResponse;
use crate::services::common::list_error;

pub async fn list_courses(
    service: &CourseService,
    request: &HttpRequest,
) -> ActixResult<HttpResponse> {
    let storage = service.get_storage(request);

    match storage.list_courses().await {
        Ok(courses) => Ok(HttpResponse::Ok().json(ApiResponse::success(
            courses,
            "Course list retrieved successfully",
        ))),
        Err(e) => Ok(list_error("courses", &e)),
    }
}
