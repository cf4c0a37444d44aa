//! 处理器共用的响应构造
//!
//! 错误只有两类对外可见：记录不存在（404）和持久化失败（400）。
//! 持久化失败的原始数据库信息只写日志，响应里只给出归类后的原因。

use actix_web::HttpResponse;
use tracing::error;

use crate::errors::{AttendanceError, Result};
use crate::models::{ApiResponse, ErrorCode};

/// 可被引用或更新的资源类型
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Resource {
    Department,
    Student,
    Course,
    User,
    AttendanceLog,
}

impl Resource {
    pub fn display_name(self) -> &'static str {
        match self {
            Resource::Department => "Department",
            Resource::Student => "Student",
            Resource::Course => "Course",
            Resource::User => "User",
            Resource::AttendanceLog => "Attendance log",
        }
    }

    pub fn not_found_code(self) -> ErrorCode {
        match self {
            Resource::Department => ErrorCode::DepartmentNotFound,
            Resource::Student => ErrorCode::StudentNotFound,
            Resource::Course => ErrorCode::CourseNotFound,
            Resource::User => ErrorCode::UserNotFound,
            Resource::AttendanceLog => ErrorCode::AttendanceLogNotFound,
        }
    }
}

/// 404 响应，消息中注明缺失的资源类型
pub fn not_found(resource: Resource) -> HttpResponse {
    HttpResponse::NotFound().json(ApiResponse::error_empty(
        resource.not_found_code(),
        format!("{} not found", resource.display_name()),
    ))
}

/// 请求体字段校验失败
pub fn validation_error(message: impl Into<String>) -> HttpResponse {
    HttpResponse::BadRequest().json(ApiResponse::error_empty(
        ErrorCode::ValidationFailed,
        message,
    ))
}

/// 持久化失败，action 形如 "creating student"
pub fn persistence_error(code: ErrorCode, action: &str, err: &AttendanceError) -> HttpResponse {
    error!("Error {}: {}", action, err);
    HttpResponse::BadRequest().json(ApiResponse::error_empty(
        code,
        format!("Error {action}: {}", err.public_reason()),
    ))
}

/// 检查查询结果：不存在返回 404，查询本身失败按持久化错误处理
pub fn require_found<T>(
    lookup: Result<Option<T>>,
    resource: Resource,
    failure_code: ErrorCode,
    action: &str,
) -> std::result::Result<T, HttpResponse> {
    match lookup {
        Ok(Some(value)) => Ok(value),
        Ok(None) => Err(not_found(resource)),
        Err(e) => Err(persistence_error(failure_code, action, &e)),
    }
}

/// 列表查询失败（数据库不可用等）
pub fn list_error(resource_plural: &str, err: &AttendanceError) -> HttpResponse {
    error!("Failed to list {}: {}", resource_plural, err);
    HttpResponse::InternalServerError().json(ApiResponse::error_empty(
        ErrorCode::InternalServerError,
        format!("Failed to retrieve {resource_plural}"),
    ))
}
