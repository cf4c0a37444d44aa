//! 学生实体

use sea_orm::entity::prelude::*;

#[derive(Clone, Debug, PartialEq, DeriveEntityModel)]
#[sea_orm(table_name = "students")]
pub struct Model {
    #[sea_orm(primary_key)]
    pub id: i64,
    pub full_name: String,
    pub department_id: i64,
    pub class_name: String,
    pub submitted_by: String,
    pub updated_at: i64,
}

#[derive(Copy, Clone, Debug, EnumIter, DeriveRelation)]
pub enum Relation {
    #[sea_orm(
        belongs_to = "super::departments::Entity",
        from = "Column::DepartmentId",
        to = "super::departments::Column::Id",
        on_delete = "Cascade"
    )]
    Department,
    #[sea_orm(has_many = "super::attendance_logs::Entity")]
    AttendanceLogs,
}

impl Related<super::departments::Entity> for Entity {
    fn to() -> RelationDef {
        Relation::Department.def()
    }
}

impl Related<super::attendance_logs::Entity> for Entity {
    fn to() -> RelationDef {
        Relation::AttendanceLogs.def()
    }
}

impl ActiveModelBehavior for ActiveModel {}

impl Model {
    pub fn into_student(self) -> crate::models::students::entities::Student {
        use crate::models::students::entities::Student;

        Student {
            id: self.id,
            full_name: self.full_name,
            department_id: self.department_id,
            class_name: self.class_name,
            submitted_by: self.submitted_by,
            updated_at: super::from_timestamp_millis(self.updated_at),
        }
    }
}
