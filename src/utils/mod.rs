pub mod extractor;
pub mod parameter_error_handler;
pub mod password;
pub mod validate;

pub use extractor::SafeIDI64;
pub use parameter_error_handler::json_error_handler;
