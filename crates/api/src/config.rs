use std::path::PathBuf;

use folio_core::config::{
    parse_flag, DataSourceMode, SiteConfig, SourceEndpoints, DEFAULT_CONTENTS_API_URL,
    DEFAULT_PUBLIC_URL,
};

/// Server configuration loaded from environment variables.
///
/// All fields have sensible defaults suitable for local development.
/// In production, override via environment variables.
#[derive(Debug, Clone)]
pub struct ServerConfig {
    /// Bind address (default: `0.0.0.0`).
    pub host: String,
    /// Bind port (default: `3000`).
    pub port: u16,
    /// Allowed CORS origins, parsed from comma-separated `CORS_ORIGINS` env var.
    pub cors_origins: Vec<String>,
    /// HTTP request timeout in seconds (default: `30`).
    pub request_timeout_secs: u64,
    /// Include panic messages in error responses (`APP_ENV=development`).
    pub expose_error_detail: bool,
    /// Directory holding the built page and its `/images` (default: `dist`).
    pub static_dir: PathBuf,
    /// Data provider configuration.
    pub site: SiteConfig,
}

impl ServerConfig {
    /// Load configuration from environment variables with defaults.
    ///
    /// | Env Var                | Default                    |
    /// |------------------------|----------------------------|
    /// | `HOST`                 | `0.0.0.0`                  |
    /// | `PORT`                 | `3000`                     |
    /// | `CORS_ORIGINS`         | `http://localhost:5174`    |
    /// | `REQUEST_TIMEOUT_SECS` | `30`                       |
    /// | `APP_ENV`              | `production`               |
    /// | `STATIC_DIR`           | `dist`                     |
    /// | `DATA_SOURCE_MODE`     | `bundled`                  |
    /// | `GITHUB_TOKEN`         | unset                      |
    /// | `UNDER_CONSTRUCTION`   | `false`                    |
    /// | `PORTFOLIO_API_URL`    | GitHub contents URL        |
    /// | `PORTFOLIO_PUBLIC_URL` | raw.githubusercontent URL  |
    /// | `BUNDLED_DATA_PATH`    | unset (embedded document)  |
    pub fn from_env() -> Self {
        let host = std::env::var("HOST").unwrap_or_else(|_| "0.0.0.0".into());

        let port: u16 = std::env::var("PORT")
            .unwrap_or_else(|_| "3000".into())
            .parse()
            .expect("PORT must be a valid u16");

        let cors_origins: Vec<String> = std::env::var("CORS_ORIGINS")
            .unwrap_or_else(|_| "http://localhost:5174".into())
            .split(',')
            .map(|s| s.trim().to_string())
            .filter(|s| !s.is_empty())
            .collect();

        let request_timeout_secs: u64 = std::env::var("REQUEST_TIMEOUT_SECS")
            .unwrap_or_else(|_| "30".into())
            .parse()
            .expect("REQUEST_TIMEOUT_SECS must be a valid u64");

        let expose_error_detail = std::env::var("APP_ENV")
            .map(|v| v.trim().eq_ignore_ascii_case("development"))
            .unwrap_or(false);

        let static_dir = PathBuf::from(std::env::var("STATIC_DIR").unwrap_or_else(|_| "dist".into()));

        let site = site_config_from_env();
        site.validate().expect("Invalid data source configuration");

        Self {
            host,
            port,
            cors_origins,
            request_timeout_secs,
            expose_error_detail,
            static_dir,
            site,
        }
    }
}

fn site_config_from_env() -> SiteConfig {
    let data_source_mode: DataSourceMode = std::env::var("DATA_SOURCE_MODE")
        .unwrap_or_else(|_| DataSourceMode::default().name().into())
        .parse()
        .expect("DATA_SOURCE_MODE must be remote-authenticated, remote-public or bundled");

    let credential = std::env::var("GITHUB_TOKEN").ok();

    let under_construction = std::env::var("UNDER_CONSTRUCTION")
        .map(|v| parse_flag(&v))
        .unwrap_or(false);

    let endpoints = SourceEndpoints {
        contents_api_url: std::env::var("PORTFOLIO_API_URL")
            .unwrap_or_else(|_| DEFAULT_CONTENTS_API_URL.into()),
        public_url: std::env::var("PORTFOLIO_PUBLIC_URL")
            .unwrap_or_else(|_| DEFAULT_PUBLIC_URL.into()),
        bundled_path: std::env::var("BUNDLED_DATA_PATH").ok().map(PathBuf::from),
    };

    SiteConfig {
        data_source_mode,
        credential,
        under_construction,
        endpoints,
    }
}
