use anyhow::{Context, bail};
use serde::{Deserialize, Serialize};
use std::fs;

#[derive(Debug, Serialize, Deserialize, Clone)]
pub struct AppConfig {
    #[serde(default = "default_log_level")]
    pub log_level: String,
    #[serde(default = "default_log_dir")]
    pub log_dir: String,
    #[serde(default = "default_log_file")]
    pub log_file: String,
    #[serde(default)]
    pub use_json: bool,
    #[serde(default = "default_rotation")]
    pub rotation: String,
    pub gateway: GatewayConfig,
    pub auth: AuthConfig,
    /// PostgreSQL connection URL. Mandatory: startup fails without it.
    pub postgres_url: String,
    #[serde(default)]
    pub cors: CorsConfig,
}

#[derive(Debug, Serialize, Deserialize, Clone)]
pub struct GatewayConfig {
    pub host: String,
    pub port: u16,
}

#[derive(Debug, Serialize, Deserialize, Clone)]
pub struct AuthConfig {
    /// JWT signing secret. Mandatory, no fallback value.
    pub jwt_secret: String,
    /// Token lifetime from issuance, in seconds.
    #[serde(default = "default_token_ttl_secs")]
    pub token_ttl_secs: i64,
}

#[derive(Debug, Serialize, Deserialize, Clone, Default)]
pub struct CorsConfig {
    /// Origins that receive a reflected Access-Control-Allow-Origin.
    /// Everything else is a CORS denial.
    #[serde(default)]
    pub allowed_origins: Vec<String>,
}

fn default_log_level() -> String {
    "info".to_string()
}

fn default_log_dir() -> String {
    "./logs".to_string()
}

fn default_log_file() -> String {
    "notebox.log".to_string()
}

fn default_rotation() -> String {
    "daily".to_string()
}

fn default_token_ttl_secs() -> i64 {
    900 // 15 minutes
}

impl AppConfig {
    pub fn load(env: &str) -> anyhow::Result<Self> {
        let config_path = format!("config/{}.yaml", env);
        let content = fs::read_to_string(&config_path)
            .with_context(|| format!("Failed to read config file: {}", config_path))?;
        Self::from_yaml(&content).with_context(|| format!("Invalid config file: {}", config_path))
    }

    pub fn from_yaml(content: &str) -> anyhow::Result<Self> {
        let config: AppConfig = serde_yaml::from_str(content).context("Failed to parse yaml")?;
        config.validate()?;
        Ok(config)
    }

    /// Reject configurations that must never fall back to defaults.
    fn validate(&self) -> anyhow::Result<()> {
        if self.auth.jwt_secret.trim().is_empty() {
            bail!("auth.jwt_secret must not be empty");
        }
        if self.postgres_url.trim().is_empty() {
            bail!("postgres_url must not be empty");
        }
        if self.auth.token_ttl_secs <= 0 {
            bail!("auth.token_ttl_secs must be positive");
        }
        Ok(())
    }
}
