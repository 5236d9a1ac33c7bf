// =============================================================================
// TTM Painting Web - Global Application State
// =============================================================================
// Table of Contents:
// 1. Imports
// 2. Environment
// 3. Site Config
// 4. App State
// =============================================================================

use serde::Deserialize;
use thiserror::Error;

/// Site configuration compiled into the bundle.
const SITE_CONFIG_JSON: &str = include_str!("../site.json");

/// Jobber client hub work-request form.
pub const DEFAULT_BOOKING_URL: &str = "https://clienthub.getjobber.com/client_hubs/3f2be4ce-f6a2-414c-95b4-8211aaed3546/public/work_request/embedded_work_request_form";

// -----------------------------------------------------------------------------
// 2. Environment
// -----------------------------------------------------------------------------

/// Build environment, taken from `ENVIRONMENT` at compile time.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub enum Environment {
    Development,
    #[default]
    Production,
}

impl Environment {
    /// Resolve from the compile-time `ENVIRONMENT` variable.
    pub fn current() -> Self {
        Self::from_name(option_env!("ENVIRONMENT").unwrap_or("production"))
    }

    pub fn from_name(name: &str) -> Self {
        if name.eq_ignore_ascii_case("development") {
            Environment::Development
        } else {
            Environment::Production
        }
    }

    /// Console log level for this environment.
    pub fn log_level(&self) -> log::Level {
        match self {
            Environment::Development => log::Level::Debug,
            Environment::Production => log::Level::Info,
        }
    }
}

// -----------------------------------------------------------------------------
// 3. Site Config
// -----------------------------------------------------------------------------

/// Configuration errors.
#[derive(Error, Debug, Clone, PartialEq)]
pub enum ConfigError {
    #[error("Invalid site config: {0}")]
    Parse(String),

    #[error("Missing site config value: {0}")]
    Missing(&'static str),
}

/// Business details shown across the site and the booking target.
#[derive(Clone, Debug, PartialEq, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct SiteConfig {
    pub business_name: String,
    pub tagline: String,
    pub phone: String,
    pub email: String,
    pub service_area: String,
    #[serde(default = "default_booking_url")]
    pub booking_url: String,
}

fn default_booking_url() -> String {
    DEFAULT_BOOKING_URL.to_string()
}

impl Default for SiteConfig {
    fn default() -> Self {
        Self {
            business_name: "TTM Painting".to_string(),
            tagline: "Professional interior and exterior painting".to_string(),
            phone: "(815) 441-2517".to_string(),
            email: "tate@ttmpainting.com".to_string(),
            service_area: "Sterling, IL & Surrounding Areas".to_string(),
            booking_url: default_booking_url(),
        }
    }
}

impl SiteConfig {
    /// Parse a JSON site config.
    pub fn from_json(json: &str) -> Result<Self, ConfigError> {
        let config: SiteConfig =
            serde_json::from_str(json).map_err(|e| ConfigError::Parse(e.to_string()))?;
        config.validate()?;
        Ok(config)
    }

    fn validate(&self) -> Result<(), ConfigError> {
        if self.business_name.trim().is_empty() {
            return Err(ConfigError::Missing("businessName"));
        }
        if !self.booking_url.starts_with("https://") {
            return Err(ConfigError::Missing("bookingUrl"));
        }
        Ok(())
    }

    /// Load the bundled config, falling back to built-in defaults.
    pub fn load() -> Self {
        match Self::from_json(SITE_CONFIG_JSON) {
            Ok(config) => config,
            Err(e) => {
                log::error!("{}; using built-in site config", e);
                Self::default()
            }
        }
    }

    /// `tel:` link for the business phone number.
    pub fn phone_href(&self) -> String {
        let digits: String = self
            .phone
            .chars()
            .filter(|c| c.is_ascii_digit() || *c == '+')
            .collect();
        format!("tel:{}", digits)
    }

    pub fn email_href(&self) -> String {
        format!("mailto:{}", self.email)
    }
}

// -----------------------------------------------------------------------------
// 4. App State
// -----------------------------------------------------------------------------

/// Global application state provided via Leptos context.
#[derive(Clone, Debug)]
pub struct AppState {
    pub config: SiteConfig,
    pub environment: Environment,
}

impl AppState {
    /// Create a new app state instance.
    pub fn new() -> Self {
        Self {
            config: SiteConfig::load(),
            environment: Environment::current(),
        }
    }

    /// Page title with the business name appended.
    pub fn page_title(&self, page: &str) -> String {
        format!("{} | {}", page, self.config.business_name)
    }
}

impl Default for AppState {
    fn default() -> Self {
        Self::new()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_bundled_config_parses() {
        let config = SiteConfig::from_json(SITE_CONFIG_JSON).unwrap();
        assert_eq!(config.business_name, "TTM Painting");
        assert_eq!(config.booking_url, DEFAULT_BOOKING_URL);
    }

    #[test]
    fn test_booking_url_defaults_when_absent() {
        let json = r#"{
            "businessName": "TTM Painting",
            "tagline": "t",
            "phone": "1",
            "email": "e@example.com",
            "serviceArea": "Sterling"
        }"#;

        let config = SiteConfig::from_json(json).unwrap();

        assert_eq!(config.booking_url, DEFAULT_BOOKING_URL);
    }

    #[test]
    fn test_invalid_config_is_error() {
        assert!(matches!(SiteConfig::from_json("{"), Err(ConfigError::Parse(_))));

        let json = r#"{
            "businessName": "",
            "tagline": "t",
            "phone": "1",
            "email": "e@example.com",
            "serviceArea": "Sterling"
        }"#;
        assert_eq!(
            SiteConfig::from_json(json),
            Err(ConfigError::Missing("businessName"))
        );
    }

    #[test]
    fn test_phone_href_strips_formatting() {
        assert_eq!(SiteConfig::default().phone_href(), "tel:8154412517");
    }

    #[test]
    fn test_environment_from_name() {
        assert_eq!(Environment::from_name("Development"), Environment::Development);
        assert_eq!(Environment::from_name("staging"), Environment::Production);
        assert_eq!(Environment::Development.log_level(), log::Level::Debug);
    }
}
