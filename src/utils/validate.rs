//! 请求字段校验
//!
//! 只检查数据库列宽，内容本身（包括空串）原样保存。

/// 普通文本字段最大长度
pub const NAME_MAX_LEN: usize = 255;
/// 学期、课程班级、用户类型等短字段最大长度
pub const SHORT_MAX_LEN: usize = 50;

/// 文本字段字符数不得超过列宽
pub fn validate_length(field: &str, value: &str, max_len: usize) -> Result<(), String> {
    if value.chars().count() > max_len {
        return Err(format!("{field} must be at most {max_len} characters"));
    }
    Ok(())
}
