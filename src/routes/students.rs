use actix_web::{HttpRequest, HttpResponse, Result as ActixResult, web};
use once_cell::sync::Lazy;

use super::API_PREFIX;
use crate::models::students::requests::StudentRequest;
use crate::services::StudentService;
use crate::utils::SafeIDI64;

// 懒加载的全局 StudentService 实例
static STUDENT_SERVICE: Lazy<StudentService> = Lazy::new(StudentService::new_lazy);

// HTTP处理程序
pub async fn list_students(req: HttpRequest) -> ActixResult<HttpResponse> {
    STUDENT_SERVICE.list_students(&req).await
}

pub async fn create_student(
    req: HttpRequest,
    student_data: web::Json<StudentRequest>,
) -> ActixResult<HttpResponse> {
    STUDENT_SERVICE
        .create_student(student_data.into_inner(), &req)
        .await
}

pub async fn update_student(
    req: HttpRequest,
    student_id: SafeIDI64,
    update_data: web::Json<StudentRequest>,
) -> ActixResult<HttpResponse> {
    STUDENT_SERVICE
        .update_student(student_id.0, update_data.into_inner(), &req)
        .await
}

// 配置路由
pub fn configure_student_routes(cfg: &mut web::ServiceConfig) {
    cfg.service(
        web::scope(&format!("{API_PREFIX}/students"))
            .route("", web::get().to(list_students))
            .route("", web::post().to(create_student))
            .route("/{id}", web::put().to(update_student)),
    );
}
