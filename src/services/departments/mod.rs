pub mod create;
pub mod list;
pub mod update;

use actix_web::{HttpRequest, HttpResponse, Result as ActixResult};
use std::sync::Arc;

use crate::models::departments::requests::DepartmentRequest;
use crate::storage::Storage;

pub struct DepartmentService {
    storage: Option<Arc<dyn Storage>>,
}

impl DepartmentService {
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

    // 获取院系列表
    pub async fn list_departments(&self, request: &HttpRequest) -> ActixResult<HttpResponse> {
        list::list_departments(self, request).await
    }

    // 创建院系
    pub async fn create_department(
        &self,
        department_data: DepartmentRequest,
        request: &HttpRequest,
    ) -> ActixResult<HttpResponse> {
        create::create_department(self, department_data, request).await
    }

    // 更新院系
    pub async fn update_department(
        &self,
        department_id: i64,
        update_data: DepartmentRequest,
        request: &HttpRequest,
    ) -> ActixResult<HttpResponse> {
        update::update_department(self, department_id, update_data, request).await
    }
}
