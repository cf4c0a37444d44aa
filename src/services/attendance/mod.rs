pub mod create;
pub mod list;
pub mod update;

use actix_web::{HttpRequest, HttpResponse, Result as ActixResult};
use std::sync::Arc;

use crate::models::{ErrorCode, attendance::requests::AttendanceLogRequest};
use crate::services::common::{Resource, require_found};
use crate::storage::Storage;

pub struct AttendanceService {
    storage: Option<Arc<dyn Storage>>,
}

impl AttendanceService {
    pub fn new_lazy() -> Self {
        Self { storage: None }
    }

    pub(crate) fn get_storage(&self, request: &HttpRequest) -> Arc<dyn Storage> {
        if let Some(storage) = &self.storage {
            storage.clone()
        } else {
            request
                .app_data::<actix_web::web::Data<Arc<dyn Storage>>>()
                .expect("Storage not found in app data")
                .get_ref()
                .clone()
        }
    }

    pub async fn list_attendance_logs(&self, request: &HttpRequest) -> ActixResult<HttpResponse> {
        list::list_attendance_logs(self, request).await
    }

    pub async fn create_attendance_log(
        &self,
        attendance_data: AttendanceLogRequest,
        request: &HttpRequest,
    ) -> ActixResult<HttpResponse> {
        create::create_attendance_log(self, attendance_data, request).await
    }

    pub async fn update_attendance_log(
        &self,
        attendance_id: i64,
        update_data: AttendanceLogRequest,
        request: &HttpRequest,
    ) -> ActixResult<HttpResponse> {
        update::update_attendance_log(self, attendance_id, update_data, request).await
    }
}

/// 按声明顺序检查三个外键：学生、课程、提交人
pub(crate) async fn check_references(
    storage: &Arc<dyn Storage>,
    data: &AttendanceLogRequest,
    failure_code: ErrorCode,
    action: &str,
) -> Result<(), HttpResponse> {
    require_found(
        storage.get_student_by_id(data.student_id).await,
        Resource::Student,
        failure_code,
        action,
    )?;
    require_found(
        storage.get_course_by_id(data.course_id).await,
        Resource::Course,
        failure_code,
        action,
    )?;
    require_found(
        storage.get_user_by_id(data.submitted_by_id).await,
        Resource::User,
        failure_code,
        action,
    )?;
    Ok(())
}
