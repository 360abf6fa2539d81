use config::{Config, ConfigError, Environment, File};
use derive_more::Display;
use serde::Deserialize;
use dotenv::dotenv;
use std::{env, fmt, str::FromStr};

#[derive(Debug, Deserialize, Clone, PartialEq, Display)]
#[serde(rename_all = "lowercase")]
pub enum AppEnvironment {
    #[display("development")]
    Development,
    #[display("production")]
    Production,
    #[display("testing")]
    Testing,
}

impl FromStr for AppEnvironment {
    type Err = ConfigError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_lowercase().as_str() {
            "development" => Ok(AppEnvironment::Development),
            "production" => Ok(AppEnvironment::Production),
            "testing" => Ok(AppEnvironment::Testing),
            _ => Err(ConfigError::Message(format!("Invalid environment: {}", s))),
        }
    }
}

/// Which store adapter backs the repositories.
#[derive(Debug, Deserialize, Clone, Copy, PartialEq, Display)]
#[serde(rename_all = "lowercase")]
pub enum StoreBackend {
    /// Hosted PostgREST endpoint (Supabase), reached over HTTPS.
    #[display("supabase")]
    Supabase,
    /// Direct Postgres connection through a sqlx pool.
    #[display("postgres")]
    Postgres,
}

#[derive(Deserialize, Clone)]
#[serde(rename_all = "snake_case")]
pub struct AppConfig {
    #[serde(default = "default_env")]
    pub env: AppEnvironment,

    #[serde(default = "default_name")]
    pub name: String,

    #[serde(default = "default_port")]
    pub port: u16,

    #[serde(default = "default_host")]
    pub host: String,

    #[serde(default = "default_worker_count")]
    pub worker_count: usize,

    #[serde(default = "default_store_backend")]
    pub store_backend: StoreBackend,

    #[serde(default)]
    pub supabase_url: String,

    #[serde(default)]
    pub supabase_key: String,

    #[serde(default)]
    pub database_url: String,

    #[serde(default = "default_cors_origins")]
    pub cors_allowed_origins: Vec<String>,
}

fn default_env() -> AppEnvironment {
    AppEnvironment::Development
}
fn default_name() -> String {
    "Portfolio-API".to_string()
}
fn default_port() -> u16 {
    8001
}
fn default_host() -> String {
    "0.0.0.0".to_string()
}
fn default_worker_count() -> usize {
    num_cpus::get()
}
fn default_store_backend() -> StoreBackend {
    StoreBackend::Supabase
}
fn default_cors_origins() -> Vec<String> {
    vec!["*".to_string()]
}

impl AppConfig {
    pub fn new() -> Result<Self, ConfigError> {
        dotenv().ok();

        let raw_env = env::var("APP_ENV").unwrap_or_else(|_| "development".into());
        let env_name = AppEnvironment::from_str(&raw_env)
            .map_err(|_| ConfigError::Message(format!("Invalid APP_ENV value: {}", raw_env)))?;

        let builder = Config::builder()
            .add_source(File::with_name("config/default").required(false))
            .add_source(File::with_name(&format!("config/{}", env_name)).required(false))
            .add_source(
                Environment::with_prefix("APP")
                    .prefix_separator("_")
                    .ignore_empty(true)
                    .try_parsing(true)
                    .list_separator(",")
                    .with_list_parse_key("cors_allowed_origins"),
            );

        let mut config: Self = builder.build()?.try_deserialize()?;

        config.env = env_name;

        // Hosted store credentials are commonly exported without the APP_ prefix
        config.supabase_url = fill_or_env(config.supabase_url, &["APP_SUPABASE_URL", "SUPABASE_URL"]);
        config.supabase_key = fill_or_env(config.supabase_key, &["APP_SUPABASE_KEY", "SUPABASE_ANON_KEY"]);
        config.database_url = fill_or_env(config.database_url, &["APP_DATABASE_URL", "DATABASE_URL"]);

        config.validate()?;
        Ok(config)
    }

    pub fn validate(&self) -> Result<(), ConfigError> {
        let mut errors = Vec::new();

        match self.store_backend {
            StoreBackend::Supabase => {
                if self.supabase_url.trim().is_empty() {
                    errors.push("SUPABASE_URL must be set".to_string());
                } else if let Err(e) = parse_store_url(&self.supabase_url) {
                    errors.push(e);
                }
                if self.supabase_key.trim().is_empty() {
                    errors.push("SUPABASE_ANON_KEY must be set".to_string());
                }
            }
            StoreBackend::Postgres => {
                if self.database_url.trim().is_empty() {
                    errors.push("DATABASE_URL must be set".to_string());
                }
            }
        }
        if self.cors_origins().is_empty() {
            errors.push("CORS_ALLOWED_ORIGINS cannot be empty".to_string());
        }

        if errors.is_empty() {
            Ok(())
        } else {
            Err(ConfigError::Message(errors.join(", ")))
        }
    }

    pub fn is_production(&self) -> bool {
        self.env == AppEnvironment::Production
    }

    pub fn cors_origins(&self) -> Vec<String> {
        self.cors_allowed_origins
            .iter()
            .flat_map(|origin| origin.split(','))
            .map(|s| s.trim().to_string())
            .filter(|s| !s.is_empty())
            .collect()
    }

    pub fn allows_any_origin(&self) -> bool {
        self.cors_origins().iter().any(|o| o == "*")
    }
}

/// Parses the hosted store base URL, accepting only http(s).
pub fn parse_store_url(raw: &str) -> Result<url::Url, String> {
    match url::Url::parse(raw.trim()) {
        Ok(parsed) if parsed.scheme() == "http" || parsed.scheme() == "https" => Ok(parsed),
        Ok(_) => Err("SUPABASE_URL must start with http:// or https://".to_string()),
        Err(e) => Err(format!("SUPABASE_URL is not a valid URL: {}", e)),
    }
}

fn fill_or_env(current: String, env_keys: &[&str]) -> String {
    if !current.trim().is_empty() {
        return current;
    }
    env_keys
        .iter()
        .find_map(|key| env::var(key).ok().filter(|v| !v.trim().is_empty()))
        .unwrap_or_default()
}

trait Redact {
    fn redact(&self) -> &str;
}

impl Redact for str {
    fn redact(&self) -> &str {
        if self.is_empty() {
            "[MISSING]"
        } else {
            "[REDACTED]"
        }
    }
}

impl Redact for String {
    fn redact(&self) -> &str {
        self.as_str().redact()
    }
}

impl fmt::Debug for AppConfig {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("AppConfig")
            .field("env", &self.env)
            .field("name", &self.name)
            .field("port", &self.port)
            .field("host", &self.host)
            .field("worker_count", &self.worker_count)
            .field("store_backend", &self.store_backend)
            .field("supabase_url", &self.supabase_url)
            .field("supabase_key", &self.supabase_key.redact())
            .field("database_url", &self.database_url.redact())
            .field("cors_allowed_origins", &self.cors_allowed_origins)
            .finish()
    }
}
