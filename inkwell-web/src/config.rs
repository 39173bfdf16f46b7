//! Frontend configuration module
//!
//! Provides the API base URL and other frontend-specific settings.

#[cfg(test)]
#[path = "config_test.rs"]
mod config_test;

/// Frontend configuration for URLs and external settings.
#[derive(Debug, Clone)]
pub struct FrontendConfig {
    /// Base URL of the backend REST API.
    pub api_base_url: String,
}

impl Default for FrontendConfig {
    fn default() -> Self {
        Self {
            api_base_url: option_env!("INKWELL_API_BASE_URL")
                .unwrap_or("/api/v1")
                .to_string(),
        }
    }
}

impl FrontendConfig {
    /// Create a new frontend configuration instance
    pub fn new() -> Self {
        Self::default()
    }

    /// Get the API base URL
    pub fn api_base_url(&self) -> &str {
        &self.api_base_url
    }
}
