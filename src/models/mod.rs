//! 传输结构定义
//!
//! 每个实体包含 `entities`（响应结构，含 id 与 updated_at）和
//! `requests`（创建与更新共用的请求结构，外键以整数 ID 表示）。

pub mod attendance;
pub mod common;
pub mod courses;
pub mod departments;
pub mod students;
pub mod users;

pub use common::{ApiResponse, ErrorCode};
