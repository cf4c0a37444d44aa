use actix_web::{HttpRequest, HttpResponse, Result as ActixResult, web};
use once_cell::sync::Lazy;

use super::API_PREFIX;
use crate::models::courses::requests::CourseRequest;
use crate::services::CourseService;
use crate::utils::SafeIDI64;

// 懒加载的全局 CourseService 实例
static COURSE_SERVICE: Lazy<CourseService> = Lazy::new(CourseService::new_lazy);

// HTTP处理程序
pub async fn list_courses(req: HttpRequest) -> ActixResult<HttpResponse> {
    COURSE_SERVICE.list_courses(&req).await
}

pub async fn create_course(
    req: HttpRequest,
    course_data: web::Json<CourseRequest>,
) -> ActixResult<HttpResponse> {
    COURSE_SERVICE
        .create_course(course_data.into_inner(), &req)
        .await
}

pub async fn update_course(
    req: HttpRequest,
    course_id: SafeIDI64,
    update_data: web::Json<CourseRequest>,
) -> ActixResult<HttpResponse> {
    COURSE_SERVICE
        .update_course(course_id.0, update_data.into_inner(), &req)
        .await
}

// 配置路由
pub fn configure_course_routes(cfg: &mut web::ServiceConfig) {
    cfg.service(
        web::scope(&format!("{API_PREFIX}/courses"))
            .route("", web::get().to(list_courses))
            .route("", web::post().to(create_course))
            .route("/{id}", web::put().to(update_course)),
    );
}
