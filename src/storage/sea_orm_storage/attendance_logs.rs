//! 考勤记录存储操作

use super::SeaOrmStorage;
use crate::entity::attendance_logs::{ActiveModel, Column, Entity as AttendanceLogs};
use crate::entity::now_millis;
use crate::errors::{AttendanceError, Result};
use crate::models::attendance::{entities::AttendanceLog, requests::AttendanceLogRequest};
use sea_orm::{ActiveModelTrait, DbErr, EntityTrait, QueryOrder, Set};

impl SeaOrmStorage {
    /// 列出全部考勤记录
    pub async fn list_attendance_logs_impl(&self) -> Result<Vec<AttendanceLog>> {
        let logs = AttendanceLogs::find()
            .order_by_asc(Column::Id)
            .all(&self.db)
            .await
            .map_err(|e| {
                AttendanceError::database_operation(format!("查询考勤记录列表失败: {e}"))
            })?;

        Ok(logs.into_iter().map(|m| m.into_attendance_log()).collect())
    }

    /// 通过 ID 获取考勤记录
    pub async fn get_attendance_log_by_id_impl(&self, id: i64) -> Result<Option<AttendanceLog>> {
        let result = AttendanceLogs::find_by_id(id)
            .one(&self.db)
            .await
            .map_err(|e| AttendanceError::database_operation(format!("查询考勤记录失败: {e}")))?;

        Ok(result.map(|m| m.into_attendance_log()))
    }

    /// 创建考勤记录
    pub async fn create_attendance_log_impl(
        &self,
        req: AttendanceLogRequest,
    ) -> Result<AttendanceLog> {
        let model = ActiveModel {
            student_id: Set(req.student_id),
            course_id: Set(req.course_id),
            present: Set(req.present),
            submitted_by_id: Set(req.submitted_by_id),
            updated_at: Set(now_millis()),
            ..Default::default()
        };

        let result = model.insert(&self.db).await?;

        Ok(result.into_attendance_log())
    }

    /// 整体更新考勤记录
    pub async fn update_attendance_log_impl(
        &self,
        id: i64,
        req: AttendanceLogRequest,
    ) -> Result<Option<AttendanceLog>> {
        let Some(existing) = AttendanceLogs::find_by_id(id)
            .one(&self.db)
            .await
            .map_err(|e| AttendanceError::database_operation(format!("查询考勤记录失败: {e}")))?
        else {
            return Ok(None);
        };

        let mut model: ActiveModel = existing.into();
        model.student_id = Set(req.student_id);
        model.course_id = Set(req.course_id);
        model.present = Set(req.present);
        model.submitted_by_id = Set(req.submitted_by_id);
        model.updated_at = Set(now_millis());

        match model.update(&self.db).await {
            Ok(updated) => Ok(Some(updated.into_attendance_log())),
            Err(DbErr::RecordNotUpdated) => Ok(None),
            Err(e) => Err(e.into()),
        }
    }
}
