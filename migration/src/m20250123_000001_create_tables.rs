use sea_orm_migration::prelude::*;

#[derive(DeriveMigrationName)]
pub struct Migration;

#[async_trait::async_trait]
impl MigrationTrait for Migration {
    async fn up(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        // 创建院系表
        manager
            .create_table(
                Table::create()
                    .table(Departments::Table)
                    .if_not_exists()
                    .col(
                        ColumnDef::new(Departments::Id)
                            .big_integer()
                            .not_null()
                            .auto_increment()
                            .primary_key(),
                    )
                    .col(
                        ColumnDef::new(Departments::DepartmentName)
                            .string_len(255)
                            .not_null(),
                    )
                    .col(
                        ColumnDef::new(Departments::SubmittedBy)
                            .string_len(255)
                            .not_null(),
                    )
                    .col(
                        ColumnDef::new(Departments::UpdatedAt)
                            .big_integer()
                            .not_null(),
                    )
                    .to_owned(),
            )
            .await?;

        // 创建学生表
        manager
            .create_table(
                Table::create()
                    .table(Students::Table)
                    .if_not_exists()
                    .col(
                        ColumnDef::new(Students::Id)
                            .big_integer()
                            .not_null()
                            .auto_increment()
                            .primary_key(),
                    )
                    .col(ColumnDef::new(Students::FullName).string_len(255).not_null())
                    .col(
                        ColumnDef::new(Students::DepartmentId)
                            .big_integer()
                            .not_null(),
                    )
                    .col(ColumnDef::new(Students::ClassName).string_len(255).not_null())
                    .col(
                        ColumnDef::new(Students::SubmittedBy)
                            .string_len(255)
                            .not_null(),
                    )
                    .col(ColumnDef::new(Students::UpdatedAt).big_integer().not_null())
                    .foreign_key(
                        ForeignKey::create()
                            .from(Students::Table, Students::DepartmentId)
                            .to(Departments::Table, Departments::Id)
                            .on_delete(ForeignKeyAction::Cascade),
                    )
                    .to_owned(),
            )
            .await?;

        // 创建课程表
        manager
            .create_table(
                Table::create()
                    .table(Courses::Table)
                    .if_not_exists()
                    .col(
                        ColumnDef::new(Courses::Id)
                            .big_integer()
                            .not_null()
                            .auto_increment()
                            .primary_key(),
                    )
                    .col(ColumnDef::new(Courses::CourseName).string_len(255).not_null())
                    .col(
                        ColumnDef::new(Courses::DepartmentId)
                            .big_integer()
                            .not_null(),
                    )
                    .col(ColumnDef::new(Courses::Semester).string_len(50).not_null())
                    .col(ColumnDef::new(Courses::ClassName).string_len(50).not_null())
                    .col(ColumnDef::new(Courses::LectureHours).integer().not_null())
                    .col(
                        ColumnDef::new(Courses::SubmittedBy)
                            .string_len(255)
                            .not_null(),
                    )
                    .col(ColumnDef::new(Courses::UpdatedAt).big_integer().not_null())
                    .foreign_key(
                        ForeignKey::create()
                            .from(Courses::Table, Courses::DepartmentId)
                            .to(Departments::Table, Departments::Id)
                            .on_delete(ForeignKeyAction::Cascade),
                    )
                    .to_owned(),
            )
            .await?;

        // 创建用户表
        manager
            .create_table(
                Table::create()
                    .table(Users::Table)
                    .if_not_exists()
                    .col(
                        ColumnDef::new(Users::Id)
                            .big_integer()
                            .not_null()
                            .auto_increment()
                            .primary_key(),
                    )
                    .col(ColumnDef::new(Users::Type).string_len(50).not_null())
                    .col(ColumnDef::new(Users::FullName).string_len(255).not_null())
                    .col(
                        ColumnDef::new(Users::Username)
                            .string_len(255)
                            .not_null()
                            .unique_key(),
                    )
                    .col(
                        ColumnDef::new(Users::Email)
                            .string_len(255)
                            .not_null()
                            .unique_key(),
                    )
                    .col(ColumnDef::new(Users::PasswordHash).string().not_null())
                    .col(ColumnDef::new(Users::SubmittedBy).string_len(255).not_null())
                    .col(ColumnDef::new(Users::UpdatedAt).big_integer().not_null())
                    .to_owned(),
            )
            .await?;

        // 创建考勤记录表
        manager
            .create_table(
                Table::create()
                    .table(AttendanceLogs::Table)
                    .if_not_exists()
                    .col(
                        ColumnDef::new(AttendanceLogs::Id)
                            .big_integer()
                            .not_null()
                            .auto_increment()
                            .primary_key(),
                    )
                    .col(
                        ColumnDef::new(AttendanceLogs::StudentId)
                            .big_integer()
                            .not_null(),
                    )
                    .col(
                        ColumnDef::new(AttendanceLogs::CourseId)
                            .big_integer()
                            .not_null(),
                    )
                    .col(ColumnDef::new(AttendanceLogs::Present).boolean().not_null())
                    .col(
                        ColumnDef::new(AttendanceLogs::SubmittedById)
                            .big_integer()
                            .not_null(),
                    )
                    .col(
                        ColumnDef::new(AttendanceLogs::UpdatedAt)
                            .big_integer()
                            .not_null(),
                    )
                    .foreign_key(
                        ForeignKey::create()
                            .from(AttendanceLogs::Table, AttendanceLogs::StudentId)
                            .to(Students::Table, Students::Id)
                            .on_delete(ForeignKeyAction::Cascade),
                    )
                    .foreign_key(
                        ForeignKey::create()
                            .from(AttendanceLogs::Table, AttendanceLogs::CourseId)
                            .to(Courses::Table, Courses::Id)
                            .on_delete(ForeignKeyAction::Cascade),
                    )
                    .foreign_key(
                        ForeignKey::create()
                            .from(AttendanceLogs::Table, AttendanceLogs::SubmittedById)
                            .to(Users::Table, Users::Id)
                            .on_delete(ForeignKeyAction::Cascade),
                    )
                    .to_owned(),
            )
            .await?;

        // 创建索引
        manager
            .create_index(
                Index::create()
                    .if_not_exists()
                    .name("idx_students_department_id")
                    .table(Students::Table)
                    .col(Students::DepartmentId)
                    .to_owned(),
            )
            .await?;

        manager
            .create_index(
                Index::create()
                    .if_not_exists()
                    .name("idx_courses_department_id")
                    .table(Courses::Table)
                    .col(Courses::DepartmentId)
                    .to_owned(),
            )
            .await?;

        // 考勤记录表索引
        manager
            .create_index(
                Index::create()
                    .if_not_exists()
                    .name("idx_attendance_logs_student_id")
                    .table(AttendanceLogs::Table)
                    .col(AttendanceLogs::StudentId)
                    .to_owned(),
            )
            .await?;

        manager
            .create_index(
                Index::create()
                    .if_not_exists()
                    .name("idx_attendance_logs_course_id")
                    .table(AttendanceLogs::Table)
                    .col(AttendanceLogs::CourseId)
                    .to_owned(),
            )
            .await?;

        manager
            .create_index(
                Index::create()
                    .if_not_exists()
                    .name("idx_attendance_logs_submitted_by_id")
                    .table(AttendanceLogs::Table)
                    .col(AttendanceLogs::SubmittedById)
                    .to_owned(),
            )
            .await?;

        Ok(())
    }

    async fn down(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        // 按照创建的相反顺序删除
        manager
            .drop_table(Table::drop().table(AttendanceLogs::Table).to_owned())
            .await?;
        manager
            .drop_table(Table::drop().table(Users::Table).to_owned())
            .await?;
        manager
            .drop_table(Table::drop().table(Courses::Table).to_owned())
            .await?;
        manager
            .drop_table(Table::drop().table(Students::Table).to_owned())
            .await?;
        manager
            .drop_table(Table::drop().table(Departments::Table).to_owned())
            .await?;
        Ok(())
    }
}

#[derive(DeriveIden)]
enum Departments {
    #[sea_orm(iden = "departments")]
    Table,
    Id,
    DepartmentName,
    SubmittedBy,
    UpdatedAt,
}

#[derive(DeriveIden)]
enum Students {
    #[sea_orm(iden = "students")]
    Table,
    Id,
    FullName,
    DepartmentId,
    ClassName,
    SubmittedBy,
    UpdatedAt,
}

#[derive(DeriveIden)]
enum Courses {
    #[sea_orm(iden = "courses")]
    Table,
    Id,
    CourseName,
    DepartmentId,
    Semester,
    ClassName,
    LectureHours,
    SubmittedBy,
    UpdatedAt,
}

#[derive(DeriveIden)]
enum Users {
    #[sea_orm(iden = "users")]
    Table,
    Id,
    Type,
    FullName,
    Username,
    Email,
    PasswordHash,
    SubmittedBy,
    UpdatedAt,
}

#[derive(DeriveIden)]
enum AttendanceLogs {
    #[sea_orm(iden = "attendance_logs")]
    Table,
    Id,
    StudentId,
    CourseId,
    Present,
    SubmittedById,
    UpdatedAt,
}
