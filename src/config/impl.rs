use config::{Config, ConfigError, Environment, File};
use std::sync::OnceLock;

use super::AppConfig;

static APP_CONFIG: OnceLock<AppConfig> = OnceLock::new();

impl AppConfig {
    /// 加载配置
    pub fn load() -> Result<Self, ConfigError> {
        let mut builder = Config::builder()
            // 首先加载默认配置文件
            .add_source(File::with_name("config").required(false))
            // 然后根据环境加载特定配置文件
            .add_source(
                File::with_name(&format!(
                    "config.{}",
                    std::env::var("APP_ENV").unwrap_or_else(|_| "development".into())
                ))
                .required(false),
            )
            // 最后加载环境变量覆盖
            .add_source(
                Environment::with_prefix("ATTENDANCE")
                    .separator("_")
                    .try_parsing(true),
            );

        // 支持从环境变量加载
        builder = builder
            .set_override_option("app.environment", std::env::var("APP_ENV").ok())?
            .set_override_option("app.log_level", std::env::var("RUST_LOG").ok())?
            .set_override_option("server.host", std::env::var("SERVER_HOST").ok())?
            .set_override_option("server.port", std::env::var("SERVER_PORT").ok())?
            .set_override_option("server.unix_socket_path", std::env::var("UNIX_SOCKET").ok())?
            .set_override_option("server.workers", std::env::var("CPU_COUNT").ok())?
            .set_override_option("database.url", std::env::var("DATABASE_URL").ok())?;

        let config = builder.build()?;
        let app_config: AppConfig = config.try_deserialize()?;

        Ok(app_config.resolve_workers())
    }

    /// 处理工作线程数，0 表示按 CPU 核数自动选择
    fn resolve_workers(mut self) -> Self {
        if self.server.workers == 0 {
            self.server.workers = num_cpus::get().min(self.server.max_workers).max(1);
        }
        self
    }

    /// 获取全局配置实例
    pub fn get() -> &'static AppConfig {
        APP_CONFIG.get_or_init(|| {
            Self::load().unwrap_or_else(|e| {
                eprintln!("Failed to load configuration: {e}");
                std::process::exit(1);
            })
        })
    }

    /// 初始化配置 (在应用启动时调用)
    pub fn init() -> Result<(), ConfigError> {
        let config = Self::load()?;
        APP_CONFIG
            .set(config)
            .map_err(|_| ConfigError::Message("Configuration already initialized".to_string()))?;
        Ok(())
    }

    /// 检查是否为生产环境
    pub fn is_production(&self) -> bool {
        self.app.environment == "production"
    }

    /// 检查是否为开发环境
    pub fn is_development(&self) -> bool {
        self.app.environment == "development"
    }

    /// 获取服务器绑定地址
    pub fn server_bind_address(&self) -> String {
        format!("{}:{}", self.server.host, self.server.port)
    }

    /// 获取 Unix 套接字路径 (如果配置了)
    #[cfg(unix)]
    pub fn unix_socket_path(&self) -> Option<&str> {
        if self.server.unix_socket_path.is_empty() {
            None
        } else {
            Some(&self.server.unix_socket_path)
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use config::FileFormat;

    fn shipped_config() -> AppConfig {
        Config::builder()
            .add_source(File::from_str(
                include_str!("../../config.toml"),
                FileFormat::Toml,
            ))
            .build()
            .unwrap()
            .try_deserialize::<AppConfig>()
            .unwrap()
    }

    #[test]
    fn test_shipped_config_parses() {
        let config = shipped_config();
        assert!(config.is_development());
        assert!(!config.is_production());
        assert_eq!(config.server_bind_address(), "127.0.0.1:8080");
        assert!(config.database.url.starts_with("sqlite://"));
    }

    #[test]
    fn test_zero_workers_resolved_from_cpus() {
        let mut config = shipped_config();
        config.server.workers = 0;
        config.server.max_workers = 4;
        let config = config.resolve_workers();
        assert!(config.server.workers >= 1);
        assert!(config.server.workers <= 4);
    }

    #[cfg(unix)]
    #[test]
    fn test_empty_unix_socket_is_disabled() {
        let mut config = shipped_config();
        config.server.unix_socket_path = String::new();
        assert!(config.unix_socket_path().is_none());
        config.server.unix_socket_path = "/tmp/attendance.sock".into();
        assert_eq!(config.unix_socket_path(), Some("/tmp/attendance.sock"));
    }
}
