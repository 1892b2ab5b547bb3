use std::env;
use std::fmt;
use std::net::{IpAddr, SocketAddr};
use std::path::PathBuf;

use crate::assembly::catalog::{CatalogError, PartCatalog};
use crate::assembly::store::{
    BuildSettings, DEFAULT_ERROR_DISPLAY_MS, DEFAULT_RANDOM_BUILD_MIN_PSU_WATTS,
};

/// Distinguishes runtime behavior for different stages of the service.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum AppEnvironment {
    Development,
    Test,
    Production,
}

impl AppEnvironment {
    fn from_str(value: &str) -> Self {
        match value.trim().to_ascii_lowercase().as_str() {
            "prod" | "production" => Self::Production,
            "test" | "ci" => Self::Test,
            _ => Self::Development,
        }
    }
}

/// Top-level configuration for the application.
#[derive(Debug, Clone)]
pub struct AppConfig {
    pub environment: AppEnvironment,
    pub server: ServerConfig,
    pub telemetry: TelemetryConfig,
    pub builder: BuilderConfig,
}

impl AppConfig {
    pub fn load() -> Result<Self, ConfigError> {
        dotenvy::dotenv().ok();

        let environment = AppEnvironment::from_str(
            &env::var("APP_ENV").unwrap_or_else(|_| "development".to_string()),
        );

        let host = env::var("APP_HOST").unwrap_or_else(|_| "127.0.0.1".to_string());
        let port = env::var("APP_PORT")
            .unwrap_or_else(|_| "3000".to_string())
            .parse::<u16>()
            .map_err(|_| ConfigError::InvalidPort)?;

        let log_level = env::var("APP_LOG_LEVEL").unwrap_or_else(|_| "info".to_string());

        let catalog_path = env::var("APP_CATALOG_PATH")
            .ok()
            .filter(|value| !value.trim().is_empty())
            .map(PathBuf::from);
        let error_display_ms = parse_var(
            "APP_ERROR_DISPLAY_MS",
            DEFAULT_ERROR_DISPLAY_MS,
            ConfigError::InvalidErrorDisplay,
        )?;
        let random_build_min_psu_watts = parse_var(
            "APP_RANDOM_BUILD_MIN_PSU_WATTS",
            DEFAULT_RANDOM_BUILD_MIN_PSU_WATTS,
            ConfigError::InvalidPsuFloor,
        )?;

        Ok(Self {
            environment,
            server: ServerConfig { host, port },
            telemetry: TelemetryConfig { log_level },
            builder: BuilderConfig {
                catalog_path,
                settings: BuildSettings {
                    error_display_ms,
                    random_build_min_psu_watts,
                },
            },
        })
    }
}

fn parse_var<T: std::str::FromStr>(
    key: &str,
    default: T,
    error: ConfigError,
) -> Result<T, ConfigError> {
    match env::var(key) {
        Ok(raw) => raw.trim().parse::<T>().map_err(|_| error),
        Err(_) => Ok(default),
    }
}

/// Settings controlling the HTTP server binding.
#[derive(Debug, Clone)]
pub struct ServerConfig {
    pub host: String,
    pub port: u16,
}

impl ServerConfig {
    pub fn socket_addr(&self) -> Result<SocketAddr, ConfigError> {
        if self.host.eq_ignore_ascii_case("localhost") {
            return Ok(SocketAddr::new(IpAddr::from([127, 0, 0, 1]), self.port));
        }

        let ip: IpAddr = self
            .host
            .parse()
            .map_err(|source| ConfigError::InvalidHost { source })?;

        Ok(SocketAddr::new(ip, self.port))
    }
}

/// Tracing controls.
#[derive(Debug, Clone)]
pub struct TelemetryConfig {
    pub log_level: String,
}

/// Where the part catalog comes from and how build sessions behave.
#[derive(Debug, Clone, Default)]
pub struct BuilderConfig {
    /// CSV catalog to load instead of the built-in one.
    pub catalog_path: Option<PathBuf>,
    pub settings: BuildSettings,
}

impl BuilderConfig {
    pub fn load_catalog(&self) -> Result<PartCatalog, CatalogError> {
        match &self.catalog_path {
            Some(path) => PartCatalog::from_path(path),
            None => Ok(PartCatalog::standard()),
        }
    }
}

#[derive(Debug)]
pub enum ConfigError {
    InvalidPort,
    InvalidHost { source: std::net::AddrParseError },
    InvalidErrorDisplay,
    InvalidPsuFloor,
}

impl fmt::Display for ConfigError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            ConfigError::InvalidPort => write!(f, "APP_PORT must be a valid u16"),
            ConfigError::InvalidHost { .. } => {
                write!(f, "APP_HOST must parse to an IPv4 or IPv6 address")
            }
            ConfigError::InvalidErrorDisplay => {
                write!(f, "APP_ERROR_DISPLAY_MS must be a whole number of milliseconds")
            }
            ConfigError::InvalidPsuFloor => {
                write!(f, "APP_RANDOM_BUILD_MIN_PSU_WATTS must be a whole number of watts")
            }
        }
    }
}

impl std::error::Error for ConfigError {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        match self {
            ConfigError::InvalidHost { source } => Some(source),
            ConfigError::InvalidPort
            | ConfigError::InvalidErrorDisplay
            | ConfigError::InvalidPsuFloor => None,
        }
    }
}
