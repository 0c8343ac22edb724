use std::env;

use config::Config as ConfigBuilder;
use config::ConfigError;
use config::Environment;
use config::File;
use serde::Deserialize;

#[derive(Debug, Deserialize, Clone)]
pub struct Config {
    pub server: ServerConfig,
    pub identity: IdentityConfig,
    pub jwt: JwtConfig,
    pub authorization: AuthorizationConfig,
}

#[derive(Debug, Deserialize, Clone)]
pub struct ServerConfig {
    pub http_port: u16,
}

#[derive(Debug, Deserialize, Clone)]
pub struct IdentityConfig {
    /// Identity service origin, no trailing slash.
    pub base_url: String,
}

#[derive(Debug, Deserialize, Clone)]
pub struct JwtConfig {
    /// Must match the identity service's signing secret.
    pub secret: String,
}

#[derive(Debug, Deserialize, Clone)]
pub struct AuthorizationConfig {
    /// The single fully-privileged role.
    pub admin_role: String,
    /// Roles accepted on management routes.
    pub elevated_roles: Vec<String>,
}

impl Config {
    /// Load configuration from files with environment variable overrides
    ///
    /// Priority (highest to lowest):
    /// 1. Environment variables (IDENTITY__BASE_URL, SERVER__HTTP_PORT, etc.)
    /// 2. Environment-specific config file (config/{environment}.toml)
    /// 3. Default config file (config/default.toml)
    pub fn load() -> Result<Self, ConfigError> {
        let run_mode = env::var("RUN_MODE").unwrap_or_else(|_| "development".to_string());

        let configuration = ConfigBuilder::builder()
            .add_source(File::with_name("config/default").required(false))
            .add_source(File::with_name(&format!("config/{}", run_mode)).required(false))
            // Example: IDENTITY__BASE_URL=http://identity:5246 overrides identity.base_url
            .add_source(Environment::with_prefix("").separator("__"))
            .build()?;

        let config: Config = configuration.try_deserialize()?;

        Ok(config)
    }
}
