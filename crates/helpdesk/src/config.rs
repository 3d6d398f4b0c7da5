//! Endpoint configuration for the support-desk API
//!
//! Supports loading the API base URLs from (in order of priority):
//! 1. Compile-time embedded values (for production builds)
//! 2. JSON file (~/.config/helpdesk/api-endpoints.json)
//! 3. Runtime environment variables (fallback)

use anyhow::{Context, Result};
use serde::Deserialize;
use std::path::Path;
use url::Url;

/// Endpoints filename in the helpdesk config directory
const ENDPOINTS_FILE: &str = "api-endpoints.json";

/// Base URLs for the user and admin route families
///
/// Bases are validated on construction and stored without a trailing
/// slash so path joining is uniform.
#[derive(Debug, Clone)]
pub struct ApiEndpoints {
    user_base: String,
    admin_base: String,
}

/// Endpoint config file format
#[derive(Deserialize)]
#[serde(rename_all = "camelCase")]
struct EndpointsFile {
    user_api_url: String,
    admin_api_url: String,
}

impl ApiEndpoints {
    /// Create endpoints from explicit base URLs
    pub fn new(user_base: impl Into<String>, admin_base: impl Into<String>) -> Result<Self> {
        Ok(Self {
            user_base: normalize_base(user_base.into())?,
            admin_base: normalize_base(admin_base.into())?,
        })
    }

    /// Load endpoints using the following priority:
    /// 1. Compile-time embedded values (for production builds)
    /// 2. JSON file (~/.config/helpdesk/api-endpoints.json)
    /// 3. Runtime environment variables
    pub fn load() -> Result<Self> {
        // Try compile-time embedded values first (production builds)
        if let Some((user, admin)) = Self::compile_time_urls() {
            return Self::new(user, admin);
        }

        // Try default config file
        if config::config_exists(ENDPOINTS_FILE) {
            let file: EndpointsFile = config::load_json(ENDPOINTS_FILE)?;
            return Self::new(file.user_api_url, file.admin_api_url);
        }

        // Fall back to runtime environment variables
        Self::from_env()
    }

    /// URLs embedded at compile time via environment variables.
    /// Build with: HELPDESK_USER_API_URL=xxx HELPDESK_ADMIN_API_URL=yyy cargo build --release
    fn compile_time_urls() -> Option<(&'static str, &'static str)> {
        let user = option_env!("HELPDESK_USER_API_URL")?;
        let admin = option_env!("HELPDESK_ADMIN_API_URL")?;

        // Only use them if both are non-empty
        if user.is_empty() || admin.is_empty() {
            return None;
        }

        Some((user, admin))
    }

    /// Load endpoints from a specific JSON file
    pub fn from_file(path: &Path) -> Result<Self> {
        let file: EndpointsFile = config::load_json_file(path)?;
        Self::new(file.user_api_url, file.admin_api_url)
    }

    /// Load endpoints from environment variables
    pub fn from_env() -> Result<Self> {
        let user = std::env::var("HELPDESK_USER_API_URL")
            .context("HELPDESK_USER_API_URL environment variable not set")?;
        let admin = std::env::var("HELPDESK_ADMIN_API_URL")
            .context("HELPDESK_ADMIN_API_URL environment variable not set")?;
        Self::new(user, admin)
    }

    /// Check if endpoints are available (compile-time, file, or env vars)
    pub fn is_available() -> bool {
        if Self::compile_time_urls().is_some() {
            return true;
        }
        if config::config_exists(ENDPOINTS_FILE) {
            return true;
        }
        std::env::var("HELPDESK_USER_API_URL").is_ok()
            && std::env::var("HELPDESK_ADMIN_API_URL").is_ok()
    }

    /// Base URL for the user route family
    pub fn user_base(&self) -> &str {
        &self.user_base
    }

    /// Base URL for the admin route family
    pub fn admin_base(&self) -> &str {
        &self.admin_base
    }
}

/// Validate a base URL and trim the trailing slash
fn normalize_base(base: String) -> Result<String> {
    Url::parse(&base).with_context(|| format!("Invalid API base URL: {}", base))?;
    Ok(base.trim_end_matches('/').to_string())
}
