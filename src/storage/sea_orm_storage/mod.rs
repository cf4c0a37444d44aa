//! SeaORM 存储实现
//!
//! 统一的数据库存储层，支持 SQLite、PostgreSQL 和 MySQL。
//! 查询-写入之间不加事务，并发请求只依赖数据库默认隔离级别。

mod attendance_logs;
mod courses;
mod departments;
mod students;
mod users;

use crate::config::{AppConfig, DatabaseConfig};
use crate::errors::{AttendanceError, Result};
use migration::{Migrator, MigratorTrait};
use sea_orm::{ConnectOptions, Database, DatabaseConnection};
use std::time::Duration;
use tracing::info;

/// SeaORM 存储实现
#[derive(Clone)]
pub struct SeaOrmStorage {
    pub(crate) db: DatabaseConnection,
}

impl SeaOrmStorage {
    /// 使用全局配置创建存储实例
    pub async fn new_async() -> Result<Self> {
        Self::connect(&AppConfig::get().database).await
    }

    /// 连接数据库并运行迁移
    pub async fn connect(config: &DatabaseConfig) -> Result<Self> {
        let db_url = Self::build_database_url(&config.url)?;

        // 根据数据库类型选择连接方式
        let db = if db_url.starts_with("sqlite:") {
            Self::connect_sqlite(&db_url, config).await?
        } else {
            Self::connect_generic(&db_url, config).await?
        };

        // 运行迁移
        Migrator::up(&db, None)
            .await
            .map_err(|e| AttendanceError::database_operation(format!("数据库迁移失败: {e}")))?;

        info!("SeaORM 存储初始化完成，数据库: {}", db_url);

        Ok(Self { db })
    }

    /// 测试用的内存数据库（单连接，否则每个连接各自是一个空库）
    #[cfg(test)]
    pub(crate) async fn in_memory() -> Self {
        let config = DatabaseConfig {
            url: ":memory:".to_string(),
            pool_size: 1,
            timeout: 5,
        };
        Self::connect(&config)
            .await
            .expect("Failed to create in-memory storage")
    }

    /// SQLite 专用连接（WAL + 外键约束）
    async fn connect_sqlite(url: &str, config: &DatabaseConfig) -> Result<DatabaseConnection> {
        use sea_orm::SqlxSqliteConnector;
        use sea_orm::sqlx::sqlite::{
            SqliteConnectOptions, SqliteJournalMode, SqlitePoolOptions, SqliteSynchronous,
        };
        use std::str::FromStr;

        let opt = SqliteConnectOptions::from_str(url)
            .map_err(|e| AttendanceError::database_config(format!("SQLite URL 解析失败: {e}")))?
            .create_if_missing(true)
            // 级联删除依赖外键约束
            .foreign_keys(true)
            .journal_mode(SqliteJournalMode::Wal)
            .synchronous(SqliteSynchronous::Normal)
            .busy_timeout(Duration::from_secs(5))
            .pragma("cache_size", "-64000")
            .pragma("temp_store", "memory");

        let pool = SqlitePoolOptions::new()
            .max_connections(config.pool_size.max(1))
            .min_connections(1)
            .test_before_acquire(true)
            .acquire_timeout(Duration::from_secs(config.timeout))
            .idle_timeout(None)
            .connect_with(opt)
            .await
            .map_err(|e| AttendanceError::database_connection(format!("SQLite 连接失败: {e}")))?;

        Ok(SqlxSqliteConnector::from_sqlx_sqlite_pool(pool))
    }

    /// 通用连接（PostgreSQL、MySQL 等）
    async fn connect_generic(url: &str, config: &DatabaseConfig) -> Result<DatabaseConnection> {
        let mut opt = ConnectOptions::new(url);
        opt.max_connections(config.pool_size)
            .min_connections(1)
            .connect_timeout(Duration::from_secs(config.timeout))
            .acquire_timeout(Duration::from_secs(config.timeout))
            .idle_timeout(Duration::from_secs(600))
            .max_lifetime(Duration::from_secs(1800))
            .sqlx_logging(false)
            .sqlx_logging_level(tracing::log::LevelFilter::Debug);

        Database::connect(opt)
            .await
            .map_err(|e| AttendanceError::database_connection(format!("无法连接到数据库: {e}")))
    }

    /// 从 URL 自动推断数据库类型并构建连接 URL
    fn build_database_url(url: &str) -> Result<String> {
        if url == ":memory:" {
            Ok("sqlite::memory:".to_string())
        } else if url.starts_with("sqlite:") {
            Ok(url.to_string())
        } else if url.ends_with(".db") || url.ends_with(".sqlite") {
            Ok(format!("sqlite://{url}?mode=rwc"))
        } else if url.starts_with("postgres://")
            || url.starts_with("postgresql://")
            || url.starts_with("mysql://")
            || url.starts_with("mariadb://")
        {
            Ok(url.to_string())
        } else {
            Err(AttendanceError::database_config(format!(
                "无法从 URL 推断数据库类型: {url}. 支持: sqlite://, postgres://, mysql://, 或 .db/.sqlite 文件路径"
            )))
        }
    }
}

// Storage trait 实现
use crate::models::{
    attendance::{entities::AttendanceLog, requests::AttendanceLogRequest},
    courses::{entities::Course, requests::CourseRequest},
    departments::{entities::Department, requests::DepartmentRequest},
    students::{entities::Student, requests::StudentRequest},
    users::{entities::User, requests::UserRequest},
};
use crate::storage::Storage;
use async_trait::async_trait;

#[async_trait]
impl Storage for SeaOrmStorage {
    // 院系模块
    async fn list_departments(&self) -> Result<Vec<Department>> {
        self.list_departments_impl().await
    }

    async fn get_department_by_id(&self, id: i64) -> Result<Option<Department>> {
        self.get_department_by_id_impl(id).await
    }

    async fn create_department(&self, department: DepartmentRequest) -> Result<Department> {
        self.create_department_impl(department).await
    }

    async fn update_department(
        &self,
        id: i64,
        update: DepartmentRequest,
    ) -> Result<Option<Department>> {
        self.update_department_impl(id, update).await
    }

    // 学生模块
    async fn list_students(&self) -> Result<Vec<Student>> {
        self.list_students_impl().await
    }

    async fn get_student_by_id(&self, id: i64) -> Result<Option<Student>> {
        self.get_student_by_id_impl(id).await
    }

    async fn create_student(&self, student: StudentRequest) -> Result<Student> {
        self.create_student_impl(student).await
    }

    async fn update_student(&self, id: i64, update: StudentRequest) -> Result<Option<Student>> {
        self.update_student_impl(id, update).await
    }

    // 课程模块
    async fn list_courses(&self) -> Result<Vec<Course>> {
        self.list_courses_impl().await
    }

    async fn get_course_by_id(&self, id: i64) -> Result<Option<Course>> {
        self.get_course_by_id_impl(id).await
    }

    async fn create_course(&self, course: CourseRequest) -> Result<Course> {
        self.create_course_impl(course).await
    }

    async fn update_course(&self, id: i64, update: CourseRequest) -> Result<Option<Course>> {
        self.update_course_impl(id, update).await
    }

    // 用户模块
    async fn list_users(&self) -> Result<Vec<User>> {
        self.list_users_impl().await
    }

    async fn get_user_by_id(&self, id: i64) -> Result<Option<User>> {
        self.get_user_by_id_impl(id).await
    }

    async fn create_user(&self, user: UserRequest) -> Result<User> {
        self.create_user_impl(user).await
    }

    async fn update_user(&self, id: i64, update: UserRequest) -> Result<Option<User>> {
        self.update_user_impl(id, update).await
    }

    // 考勤记录模块
    async fn list_attendance_logs(&self) -> Result<Vec<AttendanceLog>> {
        self.list_attendance_logs_impl().await
    }

    async fn get_attendance_log_by_id(&self, id: i64) -> Result<Option<AttendanceLog>> {
        self.get_attendance_log_by_id_impl(id).await
    }

    async fn create_attendance_log(&self, log: AttendanceLogRequest) -> Result<AttendanceLog> {
        self.create_attendance_log_impl(log).await
    }

    async fn update_attendance_log(
        &self,
        id: i64,
        update: AttendanceLogRequest,
    ) -> Result<Option<AttendanceLog>> {
        self.update_attendance_log_impl(id, update).await
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_build_database_url() {
        assert_eq!(
            SeaOrmStorage::build_database_url(":memory:").unwrap(),
            "sqlite::memory:"
        );
        assert_eq!(
            SeaOrmStorage::build_database_url("attendance.db").unwrap(),
            "sqlite://attendance.db?mode=rwc"
        );
        assert_eq!(
            SeaOrmStorage::build_database_url("postgres://u:p@localhost/att").unwrap(),
            "postgres://u:p@localhost/att"
        );
        let err = SeaOrmStorage::build_database_url("redis://localhost").unwrap_err();
        assert_eq!(err.code(), "E001");
    }
}
