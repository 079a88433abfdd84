use serde::Deserialize;
use std::net::SocketAddr;

pub use persistence::db::DatabaseConfig;

#[derive(Debug, Clone, Deserialize)]
pub struct Config {
    pub server: ServerConfig,
    pub database: DatabaseConfig,
    pub logging: LoggingConfig,
    pub security: SecurityConfig,
    /// Verification of tokens issued by the hosted auth provider
    pub auth: AuthConfig,
    pub limits: LimitsConfig,
}

#[derive(Debug, Clone, Deserialize)]
pub struct ServerConfig {
    #[serde(default = "default_host")]
    pub host: String,

    #[serde(default = "default_port")]
    pub port: u16,

    #[serde(default = "default_request_timeout")]
    pub request_timeout_secs: u64,

    #[serde(default = "default_max_body_size")]
    pub max_body_size: usize,
}

#[derive(Debug, Clone, Deserialize)]
pub struct LoggingConfig {
    #[serde(default = "default_log_level")]
    pub level: String,

    /// `json` or `pretty`
    #[serde(default = "default_log_format")]
    pub format: String,
}

#[derive(Debug, Clone, Deserialize)]
pub struct SecurityConfig {
    /// Allowed browser origins; empty allows any origin
    #[serde(default)]
    pub cors_origins: Vec<String>,

    /// Public requests per minute per client IP (0 disables limiting)
    #[serde(default = "default_rate_limit")]
    pub rate_limit_per_minute: u32,

    /// Emit Strict-Transport-Security (enable only behind TLS)
    #[serde(default)]
    pub hsts_enabled: bool,

    /// Take the client address from `X-Forwarded-For`/`X-Real-IP`. Only
    /// enable behind a proxy that overwrites these headers.
    #[serde(default)]
    pub trust_proxy_headers: bool,
}

#[derive(Debug, Clone, Deserialize)]
pub struct AuthConfig {
    /// HS256 signing secret shared with the auth provider
    pub jwt_secret: String,

    /// Clock skew tolerance for `exp`
    #[serde(default = "default_jwt_leeway")]
    pub leeway_secs: u64,

    /// Required `aud` claim, if any
    #[serde(default)]
    pub audience: Option<String>,
}

#[derive(Debug, Clone, Deserialize)]
pub struct LimitsConfig {
    #[serde(default = "default_search_max_limit")]
    pub search_max_limit: i64,

    #[serde(default = "default_autocomplete_max_limit")]
    pub autocomplete_max_limit: i64,

    #[serde(default = "default_admin_page_size")]
    pub admin_page_size: i64,

    #[serde(default = "default_admin_max_page_size")]
    pub admin_max_page_size: i64,
}

// Default value functions
fn default_host() -> String {
    "0.0.0.0".to_string()
}

fn default_port() -> u16 {
    8080
}

fn default_request_timeout() -> u64 {
    30
}

fn default_max_body_size() -> usize {
    1_048_576
}

fn default_log_level() -> String {
    "info".to_string()
}

fn default_log_format() -> String {
    "json".to_string()
}

fn default_rate_limit() -> u32 {
    120
}

fn default_jwt_leeway() -> u64 {
    shared::jwt::DEFAULT_LEEWAY_SECS
}

fn default_search_max_limit() -> i64 {
    100
}

fn default_autocomplete_max_limit() -> i64 {
    50
}

fn default_admin_page_size() -> i64 {
    25
}

fn default_admin_max_page_size() -> i64 {
    100
}

/// Configuration validation error
#[derive(Debug, thiserror::Error)]
pub enum ConfigValidationError {
    #[error("Missing required configuration: {0}")]
    MissingRequired(String),

    #[error("Invalid configuration value: {0}")]
    InvalidValue(String),
}

impl Config {
    /// Load configuration from files and environment variables.
    ///
    /// Loading order (later sources override earlier):
    /// 1. config/default.toml - base configuration with defaults
    /// 2. config/local.toml - local overrides (optional, not in git)
    /// 3. Environment variables with DHIVYUGA__ prefix
    pub fn load() -> Result<Self, config::ConfigError> {
        let config = config::Config::builder()
            .add_source(config::File::with_name("config/default"))
            .add_source(config::File::with_name("config/local").required(false))
            .add_source(config::Environment::with_prefix("DHIVYUGA").separator("__"))
            .build()?;

        let cfg: Self = config.try_deserialize()?;
        cfg.validate()
            .map_err(|e| config::ConfigError::Message(e.to_string()))?;
        Ok(cfg)
    }

    /// Builds a config from embedded defaults plus overrides, without
    /// touching the file system.
    #[cfg(test)]
    pub fn load_for_test(overrides: &[(&str, &str)]) -> Result<Self, config::ConfigError> {
        let defaults = r#"
            [server]
            host = "0.0.0.0"
            port = 8080
            request_timeout_secs = 30
            max_body_size = 1048576

            [database]
            url = ""
            max_connections = 10
            min_connections = 1
            connect_timeout_secs = 10
            idle_timeout_secs = 600

            [logging]
            level = "info"
            format = "json"

            [security]
            cors_origins = []
            rate_limit_per_minute = 120
            hsts_enabled = false
            trust_proxy_headers = false

            [auth]
            jwt_secret = ""
            leeway_secs = 30

            [limits]
            search_max_limit = 100
            autocomplete_max_limit = 50
            admin_page_size = 25
            admin_max_page_size = 100
        "#;

        let mut builder = config::Config::builder()
            .add_source(config::File::from_str(defaults, config::FileFormat::Toml));

        for (key, value) in overrides {
            builder = builder.set_override(*key, *value)?;
        }

        builder.build()?.try_deserialize()
    }

    fn validate(&self) -> Result<(), ConfigValidationError> {
        if self.database.url.is_empty() {
            return Err(ConfigValidationError::MissingRequired(
                "DHIVYUGA__DATABASE__URL environment variable must be set".to_string(),
            ));
        }

        if self.auth.jwt_secret.is_empty() {
            return Err(ConfigValidationError::MissingRequired(
                "DHIVYUGA__AUTH__JWT_SECRET environment variable must be set".to_string(),
            ));
        }

        if self.server.port == 0 {
            return Err(ConfigValidationError::InvalidValue(
                "Server port cannot be 0".to_string(),
            ));
        }

        if self.database.min_connections > self.database.max_connections {
            return Err(ConfigValidationError::InvalidValue(
                "min_connections cannot exceed max_connections".to_string(),
            ));
        }

        if self.limits.search_max_limit < 1 || self.limits.autocomplete_max_limit < 1 {
            return Err(ConfigValidationError::InvalidValue(
                "search_max_limit and autocomplete_max_limit must be at least 1".to_string(),
            ));
        }

        if self.limits.admin_page_size < 1
            || self.limits.admin_page_size > self.limits.admin_max_page_size
        {
            return Err(ConfigValidationError::InvalidValue(
                "admin_page_size must be between 1 and admin_max_page_size".to_string(),
            ));
        }

        Ok(())
    }

    pub fn socket_addr(&self) -> Result<SocketAddr, std::net::AddrParseError> {
        format!("{}:{}", self.server.host, self.server.port).parse()
    }
}
