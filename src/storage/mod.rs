use std::sync::Arc;

use crate::models::{
    attendance::{entities::AttendanceLog, requests::AttendanceLogRequest},
    courses::{entities::Course, requests::CourseRequest},
    departments::{entities::Department, requests::DepartmentRequest},
    students::{entities::Student, requests::StudentRequest},
    users::{entities::User, requests::UserRequest},
};

use crate::errors::Result;

pub mod sea_orm_storage;

/// 数据访问接口
///
/// 每个实体提供相同的四个操作：列出全部、按 ID 查询、创建、整体更新。
/// 查询与更新用 `Ok(None)` 表示记录不存在，其余失败统一为 `AttendanceError`。
#[async_trait::async_trait]
pub trait Storage: Send + Sync {
    /// 院系管理方法
    // 列出全部院系
    async fn list_departments(&self) -> Result<Vec<Department>>;
    // 通过ID获取院系
    async fn get_department_by_id(&self, id: i64) -> Result<Option<Department>>;
    // 创建院系
    async fn create_department(&self, department: DepartmentRequest) -> Result<Department>;
    // 更新院系
    async fn update_department(
        &self,
        id: i64,
        update: DepartmentRequest,
    ) -> Result<Option<Department>>;

    /// 学生管理方法
    async fn list_students(&self) -> Result<Vec<Student>>;
    async fn get_student_by_id(&self, id: i64) -> Result<Option<Student>>;
    async fn create_student(&self, student: StudentRequest) -> Result<Student>;
    async fn update_student(&self, id: i64, update: StudentRequest) -> Result<Option<Student>>;

    /// 课程管理方法
    async fn list_courses(&self) -> Result<Vec<Course>>;
    async fn get_course_by_id(&self, id: i64) -> Result<Option<Course>>;
    async fn create_course(&self, course: CourseRequest) -> Result<Course>;
    async fn update_course(&self, id: i64, update: CourseRequest) -> Result<Option<Course>>;

    /// 用户管理方法
    // 调用方需先将 password 替换为哈希值
    async fn list_users(&self) -> Result<Vec<User>>;
    async fn get_user_by_id(&self, id: i64) -> Result<Option<User>>;
    async fn create_user(&self, user: UserRequest) -> Result<User>;
    async fn update_user(&self, id: i64, update: UserRequest) -> Result<Option<User>>;

    /// 考勤记录管理方法
    async fn list_attendance_logs(&self) -> Result<Vec<AttendanceLog>>;
    async fn get_attendance_log_by_id(&self, id: i64) -> Result<Option<AttendanceLog>>;
    async fn create_attendance_log(&self, log: AttendanceLogRequest) -> Result<AttendanceLog>;
    async fn update_attendance_log(
        &self,
        id: i64,
        update: AttendanceLogRequest,
    ) -> Result<Option<AttendanceLog>>;
}

pub async fn create_storage() -> Result<Arc<dyn Storage>> {
    let storage = sea_orm_storage::SeaOrmStorage::new_async().await?;
    Ok(Arc::new(storage))
}
