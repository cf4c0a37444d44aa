use serde::Serialize;

// 业务错误码，随 ApiResponse 一起返回
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[repr(i32)]
pub enum ErrorCode {
    Success = 0,

    // 通用错误
    BadRequest = 1000,
    ValidationFailed = 1001,
    InvalidPathParameter = 1002,
    InvalidRequestBody = 1003,
    InternalServerError = 1999,

    // 院系
    DepartmentNotFound = 2000,
    DepartmentCreationFailed = 2001,
    DepartmentUpdateFailed = 2002,

    // 学生
    StudentNotFound = 3000,
    StudentCreationFailed = 3001,
    StudentUpdateFailed = 3002,

    // 课程
    CourseNotFound = 4000,
    CourseCreationFailed = 4001,
    CourseUpdateFailed = 4002,

    // 用户
    UserNotFound = 5000,
    UserCreationFailed = 5001,
    UserUpdateFailed = 5002,
    UserAlreadyExists = 5003,

    // 考勤记录
    AttendanceLogNotFound = 6000,
    AttendanceLogCreationFailed = 6001,
    AttendanceLogUpdateFailed = 6002,
}
