//! 路径参数提取器
//!
//! 解析失败时直接返回 400 和统一的 ApiResponse，而不是 actix 默认的纯文本 404。

use std::future::{Ready, ready};

use actix_web::{FromRequest, HttpRequest, HttpResponse, dev::Payload, error::InternalError};

use crate::models::{ApiResponse, ErrorCode};

/// 从 `{id}` 路径段解析出的 i64 主键
#[derive(Debug, Clone, Copy)]
pub struct SafeIDI64(pub i64);

impl FromRequest for SafeIDI64 {
    type Error = actix_web::Error;
    type Future = Ready<Result<Self, Self::Error>>;

    fn from_request(req: &HttpRequest, _: &mut Payload) -> Self::Future {
        ready(parse_path_i64(req, "id").map(SafeIDI64))
    }
}

fn parse_path_i64(req: &HttpRequest, name: &str) -> Result<i64, actix_web::Error> {
    let raw = req.match_info().get(name).unwrap_or_default();
    raw.parse::<i64>().map_err(|_| {
        let response = HttpResponse::BadRequest().json(ApiResponse::error_empty(
            ErrorCode::InvalidPathParameter,
            format!("Invalid path parameter '{name}': expected an integer, got '{raw}'"),
        ));
        InternalError::from_response(format!("invalid path parameter {name}"), response).into()
    })
}
