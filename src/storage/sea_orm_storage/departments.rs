//! 院系存储操作

use super::SeaOrmStorage;
use crate::entity::departments::{ActiveModel, Column, Entity as Departments};
use crate::entity::now_millis;
use crate::errors::{AttendanceError, Result};
use crate::models::departments::{entities::Department, requests::DepartmentRequest};
use sea_orm::{ActiveModelTrait, DbErr, EntityTrait, QueryOrder, Set};

impl SeaOrmStorage {
    /// 列出全部院系
    pub async fn list_departments_impl(&self) -> Result<Vec<Department>> {
        let departments = Departments::find()
            .order_by_asc(Column::Id)
            .all(&self.db)
            .await
            .map_err(|e| AttendanceError::database_operation(format!("查询院系列表失败: {e}")))?;

        Ok(departments.into_iter().map(|m| m.into_department()).collect())
    }

    /// 通过 ID 获取院系
    pub async fn get_department_by_id_impl(&self, id: i64) -> Result<Option<Department>> {
        let result = Departments::find_by_id(id)
            .one(&self.db)
            .await
            .map_err(|e| AttendanceError::database_operation(format!("查询院系失败: {e}")))?;

        Ok(result.map(|m| m.into_department()))
    }

    /// 创建院系
    pub async fn create_department_impl(&self, req: DepartmentRequest) -> Result<Department> {
        let model = ActiveModel {
            department_name: Set(req.department_name),
            submitted_by: Set(req.submitted_by),
            updated_at: Set(now_millis()),
            ..Default::default()
        };

        let result = model.insert(&self.db).await?;

        Ok(result.into_department())
    }

    /// 整体更新院系
    pub async fn update_department_impl(
        &self,
        id: i64,
        req: DepartmentRequest,
    ) -> Result<Option<Department>> {
        let Some(existing) = Departments::find_by_id(id)
            .one(&self.db)
            .await
            .map_err(|e| AttendanceError::database_operation(format!("查询院系失败: {e}")))?
        else {
            return Ok(None);
        };

        let mut model: ActiveModel = existing.into();
        model.department_name = Set(req.department_name);
        model.submitted_by = Set(req.submitted_by);
        model.updated_at = Set(now_millis());

        match model.update(&self.db).await {
            Ok(updated) => Ok(Some(updated.into_department())),
            // 查询与写入之间记录被删除
            Err(DbErr::RecordNotUpdated) => Ok(None),
            Err(e) => Err(e.into()),
        }
    }
}
