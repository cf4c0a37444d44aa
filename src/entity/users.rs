//! 用户实体

use sea_orm::entity::prelude::*;

#[derive(Clone, Debug, PartialEq, DeriveEntityModel)]
#[sea_orm(table_name = "users")]
pub struct Model {
    #[sea_orm(primary_key)]
    pub id: i64,
    #[sea_orm(column_name = "type")]
    pub user_type: String,
    pub full_name: String,
    #[sea_orm(unique)]
    pub username: String,
    #[sea_orm(unique)]
    pub email: String,
    pub password_hash: String,
    pub submitted_by: String,
    pub updated_at: i64,
}

#[derive(Copy, Clone, Debug, EnumIter, DeriveRelation)]
pub enum Relation {
    #[sea_orm(has_many = "super::attendance_logs::Entity")]
    AttendanceLogs,
}

impl Related<super::attendance_logs::Entity> for Entity {
    fn to() -> RelationDef {
        Relation::AttendanceLogs.def()
    }
}

impl ActiveModelBehavior for ActiveModel {}

// 从数据库模型转换为业务模型
impl Model {
    pub fn into_user(self) -> crate::models::users::entities::User {
        use crate::models::users::entities::User;

        User {
            id: self.id,
            user_type: self.user_type,
            full_name: self.full_name,
            username: self.username,
            email: self.email,
            password_hash: self.password_hash,
            submitted_by: self.submitted_by,
            updated_at: super::from_timestamp_millis(self.updated_at),
        }
    }
}
