pub mod create;
pub mod list;
pub mod update;

use actix_web::{HttpRequest, HttpResponse, Result as ActixResult};
use std::sync::Arc;

use crate::models::courses::requests::CourseRequest;
use crate::storage::Storage;

pub struct CourseService {
    storage: Option<Arc<dyn Storage>>,
}

impl CourseService {
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

    pub async fn list_courses(&self, request: &HttpRequest) -> ActixResult<HttpResponse> {
        list::list_courses(self, request).await
    }

    pub async fn create_course(
        &self,
        course_data: CourseRequest,
        request: &HttpRequest,
    ) -> ActixResult<HttpResponse> {
        create::create_course(self, course_data, request).await
    }

    pub async fn update_course(
        &self,
        course_id: i64,
        update_data: CourseRequest,
        request: &HttpRequest,
    ) -> ActixResult<HttpResponse> {
        update::update_course(self, course_id, update_data, request).await
    }
}
