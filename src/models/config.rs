//! Application configuration structures.

use std::fs;
use std::path::Path;

use serde::{Deserialize, Serialize};
use url::Url;

use crate::error::{AppError, Result};
use crate::models::AcademicTerm;

/// Root application configuration.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct Config {
    /// Catalog API access settings
    #[serde(default)]
    pub api: ApiConfig,

    /// Planning behavior settings
    #[serde(default)]
    pub planner: PlannerConfig,
}

impl Config {
    /// Load configuration from a TOML file.
    pub fn load(path: impl AsRef<Path>) -> Result<Self> {
        let content = fs::read_to_string(path)?;
        Ok(toml::from_str(&content)?)
    }

    /// Load configuration or return default if loading fails.
    pub fn load_or_default(path: impl AsRef<Path>) -> Self {
        Self::load(&path).unwrap_or_else(|e| {
            log::warn!(
                "Config load failed from {:?}: {}. Using defaults.",
                path.as_ref(),
                e
            );
            Self::default()
        })
    }

    /// Validate configuration values for basic sanity.
    pub fn validate(&self) -> Result<()> {
        Url::parse(&self.api.base_url)
            .map_err(|e| AppError::validation(format!("api.base_url is invalid: {e}")))?;
        if self.api.user_agent.trim().is_empty() {
            return Err(AppError::validation("api.user_agent is empty"));
        }
        if self.api.timeout_secs == 0 {
            return Err(AppError::validation("api.timeout_secs must be > 0"));
        }
        if self.planner.max_selected_courses == 0 {
            return Err(AppError::validation(
                "planner.max_selected_courses must be > 0",
            ));
        }
        self.planner.academic_term()?;
        Url::parse(&self.planner.share_base_url)
            .map_err(|e| AppError::validation(format!("planner.share_base_url is invalid: {e}")))?;
        Ok(())
    }
}

/// Catalog API settings.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ApiConfig {
    /// Root of the catalog API; endpoints are resolved against it
    #[serde(default = "defaults::base_url")]
    pub base_url: String,

    /// User-Agent header for HTTP requests
    #[serde(default = "defaults::user_agent")]
    pub user_agent: String,

    /// Request timeout in seconds
    #[serde(default = "defaults::timeout")]
    pub timeout_secs: u64,

    /// Language of names returned by the catalog
    #[serde(default = "defaults::language")]
    pub language: String,
}

impl ApiConfig {
    pub fn base_url(&self) -> Result<Url> {
        Url::parse(&self.base_url).map_err(|e| AppError::config(format!("api.base_url: {e}")))
    }
}

impl Default for ApiConfig {
    fn default() -> Self {
        Self {
            base_url: defaults::base_url(),
            user_agent: defaults::user_agent(),
            timeout_secs: defaults::timeout(),
            language: defaults::language(),
        }
    }
}

/// Planning behavior settings.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct PlannerConfig {
    /// Term to query, as `"<year>:<semester>"` (e.g., "2020/2021:2")
    #[serde(default = "defaults::academic_term")]
    pub academic_term: String,

    /// Upper bound on simultaneously selected courses
    #[serde(default = "defaults::max_selected_courses")]
    pub max_selected_courses: usize,

    /// Page that shared schedule links point to
    #[serde(default = "defaults::share_base_url")]
    pub share_base_url: String,
}

impl PlannerConfig {
    pub fn academic_term(&self) -> Result<AcademicTerm> {
        self.academic_term.parse()
    }

    pub fn share_base_url(&self) -> Result<Url> {
        Url::parse(&self.share_base_url)
            .map_err(|e| AppError::config(format!("planner.share_base_url: {e}")))
    }
}

impl Default for PlannerConfig {
    fn default() -> Self {
        Self {
            academic_term: defaults::academic_term(),
            max_selected_courses: defaults::max_selected_courses(),
            share_base_url: defaults::share_base_url(),
        }
    }
}

mod defaults {
    // Api defaults
    pub fn base_url() -> String {
        "https://fenix.tecnico.ulisboa.pt/api/fenix/v1/".into()
    }
    pub fn user_agent() -> String {
        "Mozilla/5.0 (compatible; planner/0.1)".into()
    }
    pub fn timeout() -> u64 {
        30
    }
    pub fn language() -> String {
        "pt-PT".into()
    }

    // Planner defaults
    pub fn academic_term() -> String {
        "2020/2021:2".into()
    }
    pub fn max_selected_courses() -> usize {
        10
    }
    pub fn share_base_url() -> String {
        "https://example.org/schedule".into()
    }
}
