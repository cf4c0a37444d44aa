//! Attendance Tracker - 考勤管理后端服务
//!
//! 基于 Actix Web 与 SeaORM 构建，管理院系、学生、课程、用户与考勤记录。
//!
//! # 架构
//! - `config`: 配置管理
//! - `entity`: SeaORM 数据库实体
//! - `errors`: 统一错误处理
//! - `models`: 传输结构与统一响应
//! - `routes`: API 路由层
//! - `runtime`: 运行时生命周期管理
//! - `services`: 请求处理逻辑
//! - `storage`: 数据存储层（SeaORM）
//! - `utils`: 校验、密码哈希与参数提取

pub mod config;
pub mod entity;
pub mod errors;
pub mod models;
pub mod routes;
pub mod runtime;
pub mod services;
pub mod storage;
pub mod utils;
