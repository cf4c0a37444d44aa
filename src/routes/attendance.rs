use actix_web::{HttpRequest, HttpResponse, Result as ActixResult, web};
use once_cell::sync::Lazy;

use super::API_PREFIX;
use crate::models::attendance::requests::AttendanceLogRequest;
use crate::services::AttendanceService;
use crate::utils::SafeIDI64;

// 懒加载的全局 AttendanceService 实例
static ATTENDANCE_SERVICE: Lazy<AttendanceService> = Lazy::new(AttendanceService::new_lazy);

// HTTP处理程序
pub async fn list_attendance_logs(req: HttpRequest) -> ActixResult<HttpResponse> {
    ATTENDANCE_SERVICE.list_attendance_logs(&req).await
}

pub async fn create_attendance_log(
    req: HttpRequest,
    attendance_data: web::Json<AttendanceLogRequest>,
) -> ActixResult<HttpResponse> {
    ATTENDANCE_SERVICE
        .create_attendance_log(attendance_data.into_inner(), &req)
        .await
}

pub async fn update_attendance_log(
    req: HttpRequest,
    log_id: SafeIDI64,
    update_data: web::Json<AttendanceLogRequest>,
) -> ActixResult<HttpResponse> {
    ATTENDANCE_SERVICE
        .update_attendance_log(log_id.0, update_data.into_inner(), &req)
        .await
}

// 配置路由
pub fn configure_attendance_routes(cfg: &mut web::ServiceConfig) {
    cfg.service(
        web::scope(&format!("{API_PREFIX}/attendance"))
            .route("", web::get().to(list_attendance_logs))
            .route("", web::post().to(create_attendance_log))
            .route("/{id}", web::put().to(update_attendance_log)),
    );
}

#[cfg(test)]
mod tests {
    use actix_web::http::StatusCode;
    use serde_json::json;

    use crate::models::ErrorCode;
    use crate::models::attendance::entities::AttendanceLog;
    use crate::routes::test_support::*;

    async fn seed_teacher(
        app: &impl actix_web::dev::Service<
            actix_http::Request,
            Response = actix_web::dev::ServiceResponse<impl actix_web::body::MessageBody>,
            Error = actix_web::Error,
        >,
    ) -> i64 {
        let (status, body) = create_user(app, "ghopper", "grace@example.edu").await;
        assert_eq!(status, StatusCode::CREATED);
        body.raw["data"]["id"].as_i64().unwrap()
    }

    #[actix_web::test]
    async fn test_record_and_list_attendance() {
        let app = init_app().await;
        let (_, student_id, course_id) = seed_roster(&app).await;
        let teacher_id = seed_teacher(&app).await;

        let (status, body) = call::<AttendanceLog>(
            &app,
            post("/attendance", json!({
                "student_id": student_id,
                "course_id": course_id,
                "present": true,
                "submitted_by_id": teacher_id
            })),
        )
        .await;
        assert_eq!(status, StatusCode::CREATED);
        let log = body.data.unwrap();
        assert!(log.present);

        let (status, body) = call::<AttendanceLog>(
            &app,
            put(&format!("/attendance/{}", log.id), json!({
                "student_id": student_id,
                "course_id": course_id,
                "present": false,
                "submitted_by_id": teacher_id
            })),
        )
        .await;
        assert_eq!(status, StatusCode::OK);
        assert!(!body.data.unwrap().present);

        let (_, body) = call::<Vec<AttendanceLog>>(&app, get("/attendance")).await;
        let all = body.data.unwrap();
        assert_eq!(all.len(), 1);
        assert_eq!(all[0].id, log.id);
        assert!(!all[0].present);
    }

    #[actix_web::test]
    async fn test_unknown_course_is_named() {
        let app = init_app().await;
        let (_, student_id, _) = seed_roster(&app).await;
        let teacher_id = seed_teacher(&app).await;

        let (status, body) = call_empty(
            &app,
            post("/attendance", json!({
                "student_id": student_id,
                "course_id": 9999,
                "present": true,
                "submitted_by_id": teacher_id
            })),
        )
        .await;
        assert_eq!(status, StatusCode::NOT_FOUND);
        assert_eq!(body.message, "Course not found");
        assert_eq!(body.code, ErrorCode::CourseNotFound as i64);

        let (_, body) = call::<Vec<AttendanceLog>>(&app, get("/attendance")).await;
        assert!(body.data.unwrap().is_empty());
    }

    #[actix_web::test]
    async fn test_references_checked_in_order() {
        let app = init_app().await;

        // 三个引用全部缺失时先报告学生
        let (status, body) = call_empty(
            &app,
            post("/attendance", json!({
                "student_id": 1,
                "course_id": 1,
                "present": true,
                "submitted_by_id": 1
            })),
        )
        .await;
        assert_eq!(status, StatusCode::NOT_FOUND);
        assert_eq!(body.message, "Student not found");

        let (_, student_id, course_id) = seed_roster(&app).await;
        let (status, body) = call_empty(
            &app,
            post("/attendance", json!({
                "student_id": student_id,
                "course_id": course_id,
                "present": true,
                "submitted_by_id": 9999
            })),
        )
        .await;
        assert_eq!(status, StatusCode::NOT_FOUND);
        assert_eq!(body.message, "User not found");
    }

    #[actix_web::test]
    async fn test_update_missing_log_is_404() {
        let app = init_app().await;
        let (_, student_id, course_id) = seed_roster(&app).await;
        let teacher_id = seed_teacher(&app).await;

        let (status, body) = call_empty(
            &app,
            put("/attendance/404", json!({
                "student_id": student_id,
                "course_id": course_id,
                "present": true,
                "submitted_by_id": teacher_id
            })),
        )
        .await;
        assert_eq!(status, StatusCode::NOT_FOUND);
        assert_eq!(body.message, "Attendance log not found");
    }
}
