//! 用户存储操作

use super::SeaOrmStorage;
use crate::entity::now_millis;
use crate::entity::users::{ActiveModel, Column, Entity as Users};
use crate::errors::{AttendanceError, Result};
use crate::models::users::{entities::User, requests::UserRequest};
use sea_orm::{ActiveModelTrait, DbErr, EntityTrait, QueryOrder, Set};

impl SeaOrmStorage {
    /// 列出全部用户
    pub async fn list_users_impl(&self) -> Result<Vec<User>> {
        let users = Users::find()
            .order_by_asc(Column::Id)
            .all(&self.db)
            .await
            .map_err(|e| AttendanceError::database_operation(format!("查询用户列表失败: {e}")))?;

        Ok(users.into_iter().map(|m| m.into_user()).collect())
    }

    /// 通过 ID 获取用户
    pub async fn get_user_by_id_impl(&self, id: i64) -> Result<Option<User>> {
        let result = Users::find_by_id(id)
            .one(&self.db)
            .await
            .map_err(|e| AttendanceError::database_operation(format!("查询用户失败: {e}")))?;

        Ok(result.map(|m| m.into_user()))
    }

    /// 创建用户，password 应已是哈希值，缺省时存为空凭据
    pub async fn create_user_impl(&self, req: UserRequest) -> Result<User> {
        let model = ActiveModel {
            user_type: Set(req.user_type),
            full_name: Set(req.full_name),
            username: Set(req.username),
            email: Set(req.email),
            password_hash: Set(req.password.unwrap_or_default()),
            submitted_by: Set(req.submitted_by),
            updated_at: Set(now_millis()),
            ..Default::default()
        };

        let result = model.insert(&self.db).await?;

        Ok(result.into_user())
    }

    /// 整体更新用户，未提供 password 时保留原哈希
    pub async fn update_user_impl(&self, id: i64, req: UserRequest) -> Result<Option<User>> {
        let Some(existing) = Users::find_by_id(id)
            .one(&self.db)
            .await
            .map_err(|e| AttendanceError::database_operation(format!("查询用户失败: {e}")))?
        else {
            return Ok(None);
        };

        let mut model: ActiveModel = existing.into();
        model.user_type = Set(req.user_type);
        model.full_name = Set(req.full_name);
        model.username = Set(req.username);
        model.email = Set(req.email);
        if let Some(password_hash) = req.password {
            model.password_hash = Set(password_hash);
        }
        model.submitted_by = Set(req.submitted_by);
        model.updated_at = Set(now_millis());

        match model.update(&self.db).await {
            Ok(updated) => Ok(Some(updated.into_user())),
            Err(DbErr::RecordNotUpdated) => Ok(None),
            Err(e) => Err(e.into()),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn request(username: &str, email: &str, password: Option<&str>) -> UserRequest {
        UserRequest {
            user_type: "teacher".to_string(),
            full_name: "Grace Hopper".to_string(),
            username: username.to_string(),
            email: email.to_string(),
            password: password.map(str::to_string),
            submitted_by: "admin".to_string(),
        }
    }

    #[actix_web::test]
    async fn test_duplicate_username_is_unique_violation() {
        let storage = SeaOrmStorage::in_memory().await;
        storage
            .create_user_impl(request("ghopper", "grace@navy.mil", None))
            .await
            .unwrap();

        let err = storage
            .create_user_impl(request("ghopper", "other@navy.mil", None))
            .await
            .unwrap_err();
        assert!(matches!(err, AttendanceError::UniqueViolation(_)));
        assert_eq!(storage.list_users_impl().await.unwrap().len(), 1);
    }

    #[actix_web::test]
    async fn test_duplicate_email_on_update_is_unique_violation() {
        let storage = SeaOrmStorage::in_memory().await;
        storage
            .create_user_impl(request("first", "first@uni.edu", None))
            .await
            .unwrap();
        let second = storage
            .create_user_impl(request("second", "second@uni.edu", None))
            .await
            .unwrap();

        let err = storage
            .update_user_impl(second.id, request("second", "first@uni.edu", None))
            .await
            .unwrap_err();
        assert!(matches!(err, AttendanceError::UniqueViolation(_)));
    }

    #[actix_web::test]
    async fn test_update_without_password_keeps_hash() {
        let storage = SeaOrmStorage::in_memory().await;
        let user = storage
            .create_user_impl(request("keeper", "keeper@uni.edu", Some("stored-hash")))
            .await
            .unwrap();

        let updated = storage
            .update_user_impl(user.id, request("keeper2", "keeper@uni.edu", None))
            .await
            .unwrap()
            .unwrap();
        assert_eq!(updated.username, "keeper2");
        assert_eq!(updated.password_hash, "stored-hash");

        let replaced = storage
            .update_user_impl(user.id, request("keeper2", "keeper@uni.edu", Some("new-hash")))
            .await
            .unwrap()
            .unwrap();
        assert_eq!(replaced.password_hash, "new-hash");
    }
}
