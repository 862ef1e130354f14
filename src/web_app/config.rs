// web_app/config.rs - Store configuration
//
// Defaults match the public FakeStore demo. The WASM client cannot read the
// process environment, so both renderings use the values compiled in via
// `option_env!`. The host reads the same variables at startup and warns when
// they no longer match the built client.

use std::env;
use std::time::Duration;

pub const DEFAULT_API_BASE_URL: &str = "https://fakestoreapi.com";
pub const DEFAULT_CATEGORY: &str = "electronics";

/// Delay between a successful save and the redirect to the listing
pub const REDIRECT_DELAY: Duration = Duration::from_secs(2);

/// Seconds shown by the not-found view before it redirects home
pub const NOT_FOUND_COUNTDOWN_SECS: u32 = 5;

#[derive(Clone, Debug, PartialEq, Eq)]
pub struct StoreConfig {
    /// Base URL of the remote product API
    pub api_base_url: String,
    /// Category fetched by the listing page
    pub category: String,
    pub redirect_delay: Duration,
    pub countdown_secs: u32,
}

impl Default for StoreConfig {
    fn default() -> Self {
        Self {
            api_base_url: option_env!("STORE_API_BASE_URL")
                .unwrap_or(DEFAULT_API_BASE_URL)
                .to_string(),
            category: option_env!("STORE_CATEGORY")
                .unwrap_or(DEFAULT_CATEGORY)
                .to_string(),
            redirect_delay: REDIRECT_DELAY,
            countdown_secs: NOT_FOUND_COUNTDOWN_SECS,
        }
    }
}

impl StoreConfig {
    /// Defaults overlaid with `STORE_API_BASE_URL` / `STORE_CATEGORY`
    pub fn from_env() -> Self {
        Self::default().with_overrides(
            env::var("STORE_API_BASE_URL").ok(),
            env::var("STORE_CATEGORY").ok(),
        )
    }

    fn with_overrides(mut self, api_base_url: Option<String>, category: Option<String>) -> Self {
        if let Some(url) = api_base_url.filter(|u| !u.trim().is_empty()) {
            self.api_base_url = url.trim().trim_end_matches('/').to_string();
        }
        if let Some(category) = category.filter(|c| !c.trim().is_empty()) {
            self.category = category.trim().to_string();
        }
        self
    }
}
