//! Site configuration passed to the data provider at construction.
//!
//! Replaces build-time globals: the binary reads the environment once and
//! hands an explicit [`SiteConfig`] to everything downstream.

use std::fmt;
use std::path::PathBuf;
use std::str::FromStr;

use serde::{Deserialize, Serialize};

use crate::error::CoreError;

/// Default authenticated contents-API URL for the portfolio document.
pub const DEFAULT_CONTENTS_API_URL: &str = "https://api.github.com/repos/Yugabharathi21/portfolio-data/contents/data/projects.json?ref=master";

/// Default public raw-content URL for the portfolio document.
pub const DEFAULT_PUBLIC_URL: &str =
    "https://raw.githubusercontent.com/Yugabharathi21/portfolio-data/master/data/projects.json";

/// Which source the provider retrieves the document from.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum DataSourceMode {
    /// Versioned-content API requiring a bearer credential.
    RemoteAuthenticated,
    /// Unauthenticated raw JSON endpoint.
    RemotePublic,
    /// Document shipped with the application.
    #[default]
    Bundled,
}

impl DataSourceMode {
    pub fn name(self) -> &'static str {
        match self {
            Self::RemoteAuthenticated => "remote-authenticated",
            Self::RemotePublic => "remote-public",
            Self::Bundled => "bundled",
        }
    }
}

impl fmt::Display for DataSourceMode {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

impl FromStr for DataSourceMode {
    type Err = CoreError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim() {
            "remote-authenticated" => Ok(Self::RemoteAuthenticated),
            "remote-public" => Ok(Self::RemotePublic),
            "bundled" => Ok(Self::Bundled),
            other => Err(CoreError::Validation(format!(
                "Unknown data source mode '{other}'. Must be one of: \
                 remote-authenticated, remote-public, bundled"
            ))),
        }
    }
}

/// Endpoints and paths for each source variant.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SourceEndpoints {
    /// Contents-API URL used in [`DataSourceMode::RemoteAuthenticated`].
    pub contents_api_url: String,
    /// Raw JSON URL used in [`DataSourceMode::RemotePublic`].
    pub public_url: String,
    /// JSON file read in [`DataSourceMode::Bundled`]. `None` uses the
    /// document embedded in the binary.
    pub bundled_path: Option<PathBuf>,
}

impl Default for SourceEndpoints {
    fn default() -> Self {
        Self {
            contents_api_url: DEFAULT_CONTENTS_API_URL.to_string(),
            public_url: DEFAULT_PUBLIC_URL.to_string(),
            bundled_path: None,
        }
    }
}

/// Configuration object for the data provider.
#[derive(Clone, PartialEq, Eq, Default)]
pub struct SiteConfig {
    pub data_source_mode: DataSourceMode,
    /// Bearer credential for authenticated document and image retrieval.
    pub credential: Option<String>,
    /// Show the "site under construction" placeholder instead of the page.
    pub under_construction: bool,
    pub endpoints: SourceEndpoints,
}

// Hand-written so the credential never reaches logs.
impl fmt::Debug for SiteConfig {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("SiteConfig")
            .field("data_source_mode", &self.data_source_mode)
            .field("credential", &self.credential.as_ref().map(|_| "<redacted>"))
            .field("under_construction", &self.under_construction)
            .field("endpoints", &self.endpoints)
            .finish()
    }
}

impl SiteConfig {
    /// The credential, if set and not blank.
    pub fn credential(&self) -> Option<&str> {
        self.credential
            .as_deref()
            .map(str::trim)
            .filter(|c| !c.is_empty())
    }

    /// Check that the endpoint for the selected mode looks usable.
    ///
    /// A missing credential is deliberately NOT an error here: it is a
    /// retrieval failure that settles to the fallback document.
    pub fn validate(&self) -> Result<(), CoreError> {
        match self.data_source_mode {
            DataSourceMode::RemoteAuthenticated => {
                require_http_url("contents_api_url", &self.endpoints.contents_api_url)
            }
            DataSourceMode::RemotePublic => {
                require_http_url("public_url", &self.endpoints.public_url)
            }
            DataSourceMode::Bundled => Ok(()),
        }
    }
}

/// Parse a boolean feature flag. Only `true` (any case) enables it.
pub fn parse_flag(value: &str) -> bool {
    value.trim().eq_ignore_ascii_case("true")
}

fn require_http_url(field: &str, value: &str) -> Result<(), CoreError> {
    if value.starts_with("http://") || value.starts_with("https://") {
        Ok(())
    } else {
        Err(CoreError::Validation(format!(
            "'{field}' must be an http(s) URL, got '{value}'"
        )))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn parses_every_mode_name() {
        for mode in [
            DataSourceMode::RemoteAuthenticated,
            DataSourceMode::RemotePublic,
            DataSourceMode::Bundled,
        ] {
            assert_eq!(mode.name().parse::<DataSourceMode>().unwrap(), mode);
        }
    }

    #[test]
    fn unknown_mode_is_validation_error() {
        let err = "github".parse::<DataSourceMode>().unwrap_err();
        assert!(matches!(err, CoreError::Validation(_)));
    }

    #[test]
    fn mode_serializes_kebab_case() {
        let json = serde_json::to_string(&DataSourceMode::RemotePublic).unwrap();
        assert_eq!(json, "\"remote-public\"");
    }

    #[test]
    fn default_mode_is_bundled() {
        assert_eq!(SiteConfig::default().data_source_mode, DataSourceMode::Bundled);
    }

    #[test]
    fn blank_credential_is_treated_as_missing() {
        let config = SiteConfig {
            credential: Some("   ".into()),
            ..Default::default()
        };
        assert_eq!(config.credential(), None);
    }

    #[test]
    fn debug_output_redacts_credential() {
        let config = SiteConfig {
            credential: Some("ghp_secret".into()),
            ..Default::default()
        };
        let debug = format!("{config:?}");
        assert!(!debug.contains("ghp_secret"));
        assert!(debug.contains("<redacted>"));
    }

    #[test]
    fn validate_rejects_non_http_public_url() {
        let config = SiteConfig {
            data_source_mode: DataSourceMode::RemotePublic,
            endpoints: SourceEndpoints {
                public_url: "file:///etc/passwd".into(),
                ..Default::default()
            },
            ..Default::default()
        };
        assert!(config.validate().is_err());
    }

    #[test]
    fn validate_accepts_defaults_for_every_mode() {
        for mode in [
            DataSourceMode::RemoteAuthenticated,
            DataSourceMode::RemotePublic,
            DataSourceMode::Bundled,
        ] {
            let config = SiteConfig {
                data_source_mode: mode,
                ..Default::default()
            };
            assert!(config.validate().is_ok());
        }
    }

    #[test]
    fn only_true_enables_flag() {
        assert!(parse_flag("true"));
        assert!(parse_flag(" TRUE "));
        assert!(!parse_flag("1"));
        assert!(!parse_flag("yes"));
        assert!(!parse_flag(""));
    }
}
