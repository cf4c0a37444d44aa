//! 学生存储操作

use super::SeaOrmStorage;
use crate::entity::now_millis;
use crate::entity::students::{ActiveModel, Column, Entity as Students};
use crate::errors::{AttendanceError, Result};
use crate::models::students::{entities::Student, requests::StudentRequest};
use sea_orm::{ActiveModelTrait, DbErr, EntityTrait, QueryOrder, Set};

impl SeaOrmStorage {
    /// 列出全部学生
    pub async fn list_students_impl(&self) -> Result<Vec<Student>> {
        let students = Students::find()
            .order_by_asc(Column::Id)
            .all(&self.db)
            .await
            .map_err(|e| AttendanceError::database_operation(format!("查询学生列表失败: {e}")))?;

        Ok(students.into_iter().map(|m| m.into_student()).collect())
    }

    /// 通过 ID 获取学生
    pub async fn get_student_by_id_impl(&self, id: i64) -> Result<Option<Student>> {
        let result = Students::find_by_id(id)
            .one(&self.db)
            .await
            .map_err(|e| AttendanceError::database_operation(format!("查询学生失败: {e}")))?;

        Ok(result.map(|m| m.into_student()))
    }

    /// 创建学生，院系是否存在由服务层预先检查
    pub async fn create_student_impl(&self, req: StudentRequest) -> Result<Student> {
        let model = ActiveModel {
            full_name: Set(req.full_name),
            department_id: Set(req.department_id),
            class_name: Set(req.class_name),
            submitted_by: Set(req.submitted_by),
            updated_at: Set(now_millis()),
            ..Default::default()
        };

        let result = model.insert(&self.db).await?;

        Ok(result.into_student())
    }

    /// 整体更新学生
    pub async fn update_student_impl(
        &self,
        id: i64,
        req: StudentRequest,
    ) -> Result<Option<Student>> {
        let Some(existing) = Students::find_by_id(id)
            .one(&self.db)
            .await
            .map_err(|e| AttendanceError::database_operation(format!("查询学生失败: {e}")))?
        else {
            return Ok(None);
        };

        let mut model: ActiveModel = existing.into();
        model.full_name = Set(req.full_name);
        model.department_id = Set(req.department_id);
        model.class_name = Set(req.class_name);
        model.submitted_by = Set(req.submitted_by);
        model.updated_at = Set(now_millis());

        match model.update(&self.db).await {
            Ok(updated) => Ok(Some(updated.into_student())),
            Err(DbErr::RecordNotUpdated) => Ok(None),
            Err(e) => Err(e.into()),
        }
    }
}
