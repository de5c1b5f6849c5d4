//! Application configuration structs
//!
//! Loads configuration from environment variables (and a `.env` file when present).

use std::env;
use std::str::FromStr;

use nest_core::MAX_WORKER_ID;

use crate::auth::SESSION_TOKEN_TTL_SECS;

/// Main application configuration
#[derive(Debug, Clone)]
pub struct AppConfig {
    pub app: AppSettings,
    pub api: ServerConfig,
    pub store: StoreConfig,
    pub jwt: JwtConfig,
    pub auth: AuthConfig,
    /// Absent unless `RATE_LIMIT_REQUESTS_PER_SECOND` is set
    pub rate_limit: Option<RateLimitConfig>,
    pub cors: CorsConfig,
}

/// General application settings
#[derive(Debug, Clone)]
pub struct AppSettings {
    pub name: String,
    pub env: Environment,
}

/// Environment type
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum Environment {
    #[default]
    Development,
    Staging,
    Production,
}

impl Environment {
    #[must_use]
    pub fn is_production(&self) -> bool {
        matches!(self, Self::Production)
    }

    #[must_use]
    pub fn is_development(&self) -> bool {
        matches!(self, Self::Development)
    }
}

/// HTTP listener configuration
#[derive(Debug, Clone)]
pub struct ServerConfig {
    pub host: String,
    pub port: u16,
}

impl ServerConfig {
    #[must_use]
    pub fn address(&self) -> String {
        format!("{}:{}", self.host, self.port)
    }
}

/// Which document store adapter backs the service
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum StoreBackend {
    #[default]
    Postgres,
    Memory,
}

impl FromStr for StoreBackend {
    type Err = ConfigError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_lowercase().as_str() {
            "postgres" | "postgresql" => Ok(Self::Postgres),
            "memory" => Ok(Self::Memory),
            other => Err(ConfigError::InvalidValue("STORE_BACKEND", other.to_string())),
        }
    }
}

/// Document store configuration
#[derive(Debug, Clone)]
pub struct StoreConfig {
    pub backend: StoreBackend,
    /// Present whenever `backend` is `Postgres`
    pub database: Option<DatabaseConfig>,
    /// Worker id fed to the document id generator, at most `MAX_WORKER_ID`
    pub worker_id: u16,
}

/// Database configuration
#[derive(Debug, Clone)]
pub struct DatabaseConfig {
    pub url: String,
    pub max_connections: u32,
    pub min_connections: u32,
}

/// JWT configuration
#[derive(Debug, Clone)]
pub struct JwtConfig {
    pub secret: String,
    pub session_expiry: i64,
}

/// Route groups the session guard can be attached to
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum RouteGroup {
    QueryRead,
    QueryWrite,
    RecommendationRead,
    RecommendationWrite,
}

impl RouteGroup {
    pub const ALL: [Self; 4] = [
        Self::QueryRead,
        Self::QueryWrite,
        Self::RecommendationRead,
        Self::RecommendationWrite,
    ];

    #[must_use]
    pub fn as_str(&self) -> &'static str {
        match self {
            Self::QueryRead => "query_read",
            Self::QueryWrite => "query_write",
            Self::RecommendationRead => "recommendation_read",
            Self::RecommendationWrite => "recommendation_write",
        }
    }
}

impl FromStr for RouteGroup {
    type Err = ConfigError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::ALL
            .into_iter()
            .find(|group| group.as_str().eq_ignore_ascii_case(s.trim()))
            .ok_or_else(|| ConfigError::InvalidValue("AUTH_GUARDED_ROUTES", s.to_string()))
    }
}

/// Session guard configuration
///
/// Nothing is guarded unless the deployment asks for it.
#[derive(Debug, Clone, Default)]
pub struct AuthConfig {
    pub guarded: Vec<RouteGroup>,
}

impl AuthConfig {
    /// Guard every route group
    #[must_use]
    pub fn all_guarded() -> Self {
        Self {
            guarded: RouteGroup::ALL.to_vec(),
        }
    }

    #[must_use]
    pub fn is_guarded(&self, group: RouteGroup) -> bool {
        self.guarded.contains(&group)
    }

    /// Parse a comma separated list of route group names; `all` selects every group
    ///
    /// # Errors
    /// Returns an error naming the first unknown group
    pub fn parse_list(list: &str) -> Result<Self, ConfigError> {
        let mut guarded = Vec::new();
        for item in list.split(',').map(str::trim).filter(|s| !s.is_empty()) {
            if item.eq_ignore_ascii_case("all") {
                return Ok(Self::all_guarded());
            }
            let group = item.parse()?;
            if !guarded.contains(&group) {
                guarded.push(group);
            }
        }
        Ok(Self { guarded })
    }
}

/// Rate limiting configuration
///
/// One bucket shared by every client of the API routes.
#[derive(Debug, Clone)]
pub struct RateLimitConfig {
    pub requests_per_second: u32,
    pub burst: u32,
}

/// CORS configuration
#[derive(Debug, Clone, Default)]
pub struct CorsConfig {
    pub allowed_origins: Vec<String>,
}

// Default value functions
fn default_app_name() -> String {
    "query-nest".to_string()
}

fn default_host() -> String {
    "127.0.0.1".to_string()
}

fn default_port() -> u16 {
    4000
}

fn default_max_connections() -> u32 {
    20
}

fn default_min_connections() -> u32 {
    5
}

fn default_session_expiry() -> i64 {
    SESSION_TOKEN_TTL_SECS
}

fn default_burst(requests_per_second: u32) -> u32 {
    requests_per_second.saturating_mul(5)
}

/// Read and parse one variable; absent is `None`, unparsable is an error
fn parse_var<T, F>(lookup: &F, key: &'static str) -> Result<Option<T>, ConfigError>
where
    T: FromStr,
    F: Fn(&str) -> Option<String>,
{
    lookup(key)
        .map(|raw| raw.trim().parse().map_err(|_| ConfigError::InvalidValue(key, raw)))
        .transpose()
}

impl AppConfig {
    /// Load configuration from environment variables
    ///
    /// # Errors
    /// Returns an error if required environment variables are missing
    pub fn from_env() -> Result<Self, ConfigError> {
        // Load .env file if present (ignore errors if not found)
        let _ = dotenvy::dotenv();

        Self::from_lookup(|key| env::var(key).ok())
    }

    /// Build configuration from an arbitrary variable source
    ///
    /// # Errors
    /// Returns an error if a required variable is missing or a value cannot be parsed
    pub fn from_lookup<F>(lookup: F) -> Result<Self, ConfigError>
    where
        F: Fn(&str) -> Option<String>,
    {
        let env = lookup("APP_ENV")
            .and_then(|s| match s.to_lowercase().as_str() {
                "production" => Some(Environment::Production),
                "staging" => Some(Environment::Staging),
                "development" => Some(Environment::Development),
                _ => None,
            })
            .unwrap_or_default();

        let port = match parse_var(&lookup, "API_PORT")? {
            Some(port) => port,
            None => parse_var(&lookup, "PORT")?.unwrap_or_else(default_port),
        };

        let backend = match lookup("STORE_BACKEND") {
            Some(raw) => raw.parse()?,
            None => StoreBackend::default(),
        };

        let database = match (backend, lookup("DATABASE_URL")) {
            (_, Some(url)) => Some(DatabaseConfig {
                url,
                max_connections: parse_var(&lookup, "DATABASE_MAX_CONNECTIONS")?
                    .unwrap_or_else(default_max_connections),
                min_connections: parse_var(&lookup, "DATABASE_MIN_CONNECTIONS")?
                    .unwrap_or_else(default_min_connections),
            }),
            (StoreBackend::Postgres, None) => return Err(ConfigError::MissingVar("DATABASE_URL")),
            (StoreBackend::Memory, None) => None,
        };

        let worker_id: u16 = parse_var(&lookup, "WORKER_ID")?.unwrap_or(0);
        if worker_id > MAX_WORKER_ID {
            return Err(ConfigError::InvalidValue("WORKER_ID", worker_id.to_string()));
        }

        let auth = match lookup("AUTH_GUARDED_ROUTES") {
            Some(list) => AuthConfig::parse_list(&list)?,
            None => AuthConfig::default(),
        };

        let rate_limit = match parse_var::<u32, _>(&lookup, "RATE_LIMIT_REQUESTS_PER_SECOND")? {
            Some(0) => {
                return Err(ConfigError::InvalidValue("RATE_LIMIT_REQUESTS_PER_SECOND", "0".to_string()))
            }
            Some(requests_per_second) => Some(RateLimitConfig {
                requests_per_second,
                burst: parse_var(&lookup, "RATE_LIMIT_BURST")?
                    .unwrap_or_else(|| default_burst(requests_per_second)),
            }),
            None => None,
        };

        Ok(Self {
            app: AppSettings {
                name: lookup("APP_NAME").unwrap_or_else(default_app_name),
                env,
            },
            api: ServerConfig {
                host: lookup("API_HOST").unwrap_or_else(default_host),
                port,
            },
            store: StoreConfig {
                backend,
                database,
                worker_id,
            },
            jwt: JwtConfig {
                secret: lookup("JWT_SECRET").ok_or(ConfigError::MissingVar("JWT_SECRET"))?,
                session_expiry: parse_var(&lookup, "JWT_SESSION_EXPIRY")?
                    .unwrap_or_else(default_session_expiry),
            },
            auth,
            rate_limit,
            cors: CorsConfig {
                allowed_origins: lookup("CORS_ALLOWED_ORIGINS")
                    .map(|s| {
                        s.split(',')
                            .map(str::trim)
                            .filter(|s| !s.is_empty())
                            .map(String::from)
                            .collect()
                    })
                    .unwrap_or_default(),
            },
        })
    }
}

/// Configuration errors
#[derive(Debug, thiserror::Error)]
pub enum ConfigError {
    #[error("Missing required environment variable: {0}")]
    MissingVar(&'static str),

    #[error("Invalid value for {0}: {1}")]
    InvalidValue(&'static str, String),
}
