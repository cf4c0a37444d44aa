//! 课程存储操作

use super::SeaOrmStorage;
use crate::entity::courses::{ActiveModel, Column, Entity as Courses};
use crate::entity::now_millis;
use crate::errors::{AttendanceError, Result};
use crate::models::courses::{entities::Course, requests::CourseRequest};
use sea_orm::{ActiveModelTrait, DbErr, EntityTrait, QueryOrder, Set};

impl SeaOrmStorage {
    /// 列出全部课程
    pub async fn list_courses_impl(&self) -> Result<Vec<Course>> {
        let courses = Courses::find()
            .order_by_asc(Column::Id)
            .all(&self.db)
            .await
            .map_err(|e| AttendanceError::database_operation(format!("查询课程列表失败: {e}")))?;

        Ok(courses.into_iter().map(|m| m.into_course()).collect())
    }

    /// 通过 ID 获取课程
    pub async fn get_course_by_id_impl(&self, id: i64) -> Result<Option<Course>> {
        let result = Courses::find_by_id(id)
            .one(&self.db)
            .await
            .map_err(|e| AttendanceError::database_operation(format!("查询课程失败: {e}")))?;

        Ok(result.map(|m| m.into_course()))
    }

    /// 创建课程
    pub async fn create_course_impl(&self, req: CourseRequest) -> Result<Course> {
        let model = ActiveModel {
            course_name: Set(req.course_name),
            department_id: Set(req.department_id),
            semester: Set(req.semester),
            class_name: Set(req.class_name),
            lecture_hours: Set(req.lecture_hours),
            submitted_by: Set(req.submitted_by),
            updated_at: Set(now_millis()),
            ..Default::default()
        };

        let result = model.insert(&self.db).await?;

        Ok(result.into_course())
    }

    /// 整体更新课程
    pub async fn update_course_impl(&self, id: i64, req: CourseRequest) -> Result<Option<Course>> {
        let Some(existing) = Courses::find_by_id(id)
            .one(&self.db)
            .await
            .map_err(|e| AttendanceError::database_operation(format!("查询课程失败: {e}")))?
        else {
            return Ok(None);
        };

        let mut model: ActiveModel = existing.into();
        model.course_name = Set(req.course_name);
        model.department_id = Set(req.department_id);
        model.semester = Set(req.semester);
        model.class_name = Set(req.class_name);
        model.lecture_hours = Set(req.lecture_hours);
        model.submitted_by = Set(req.submitted_by);
        model.updated_at = Set(now_millis());

        match model.update(&self.db).await {
            Ok(updated) => Ok(Some(updated.into_course())),
            Err(DbErr::RecordNotUpdated) => Ok(None),
            Err(e) => Err(e.into()),
        }
    }
}
