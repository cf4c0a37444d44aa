//! API 路由层
//!
//! 只负责把 (方法, 路径) 映射到服务方法，提取路径参数与请求体，不包含业务逻辑。

use actix_web::web;

pub mod attendance;

pub mod courses;

pub mod departments;

pub mod students;

pub mod users;

#[cfg(test)]
pub(crate) mod test_support;

pub use attendance::configure_attendance_routes;
pub use courses::configure_course_routes;
pub use departments::configure_department_routes;
pub use students::configure_student_routes;
pub use users::configure_user_routes;

/// 所有路由共用的挂载前缀
pub const API_PREFIX: &str = "/api/v1";

/// 一次性配置全部 API 路由
pub fn configure_api_routes(cfg: &mut web::ServiceConfig) {
    cfg.configure(configure_department_routes) // 配置院系相关路由
        .configure(configure_student_routes) // 配置学生相关路由
        .configure(configure_course_routes) // 配置课程相关路由
        .configure(configure_user_routes) // 配置用户相关路由
        .configure(configure_attendance_routes); // 配置考勤相关路由
}
