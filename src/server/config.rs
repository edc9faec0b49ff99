use crate::server::error::config::ConfigError;

/// Pool size used when `DATABASE_MAX_CONNECTIONS` is not set
pub static DEFAULT_MAX_CONNECTIONS: u32 = 10;

/// Runtime configuration, read from the environment.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Config {
    /// Connection URL of the catalog database, e.g. `postgres://...` or `sqlite://catalog.db`
    pub database_url: String,
    /// Maximum number of pooled database connections
    pub database_max_connections: u32,
    /// Whether sqlx logs every executed statement
    pub database_log_statements: bool,
}

impl Config {
    /// Reads configuration from process environment variables.
    ///
    /// # Returns
    /// - `Ok(Config)` - All required variables present and valid
    /// - `Err(ConfigError::MissingEnvVar)` - `DATABASE_URL` is not set
    /// - `Err(ConfigError::InvalidEnvValue)` - An optional variable could not be parsed
    pub fn from_env() -> Result<Self, ConfigError> {
        Self::from_vars(|key| std::env::var(key).ok())
    }

    /// Reads configuration through the provided variable lookup.
    pub fn from_vars<F>(lookup: F) -> Result<Self, ConfigError>
    where
        F: Fn(&str) -> Option<String>,
    {
        let database_url = lookup("DATABASE_URL")
            .ok_or_else(|| ConfigError::MissingEnvVar("DATABASE_URL".to_string()))?;

        let database_max_connections = match lookup("DATABASE_MAX_CONNECTIONS") {
            None => DEFAULT_MAX_CONNECTIONS,
            Some(value) => match value.parse::<u32>() {
                Ok(0) => {
                    return Err(ConfigError::InvalidEnvValue {
                        var: "DATABASE_MAX_CONNECTIONS".to_string(),
                        reason: "must be greater than 0".to_string(),
                    })
                }
                Ok(max) => max,
                Err(e) => {
                    return Err(ConfigError::InvalidEnvValue {
                        var: "DATABASE_MAX_CONNECTIONS".to_string(),
                        reason: e.to_string(),
                    })
                }
            },
        };

        let database_log_statements = match lookup("DATABASE_LOG_STATEMENTS") {
            None => false,
            Some(value) => {
                value
                    .parse::<bool>()
                    .map_err(|e| ConfigError::InvalidEnvValue {
                        var: "DATABASE_LOG_STATEMENTS".to_string(),
                        reason: e.to_string(),
                    })?
            }
        };

        Ok(Self {
            database_url,
            database_max_connections,
            database_log_statements,
        })
    }
}
