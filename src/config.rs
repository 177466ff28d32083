// Static configuration for the news provider.
// Loaded once at startup from an optional JSON file plus environment overrides.

use std::fs;
use std::path::{Path, PathBuf};
use std::time::Duration;

use directories::ProjectDirs;
use serde::{Deserialize, Serialize};

use crate::error::{NewsError, Result};

pub const DEFAULT_BASE_URL: &str = "https://newsapi.org/v2";
pub const DEFAULT_COUNTRY: &str = "us";
pub const DEFAULT_CATEGORY: &str = "technology";
pub const DEFAULT_PAGE_SIZE: u32 = 20;
pub const DEFAULT_CACHE_TTL_SECS: u64 = 10 * 60;

/// Provider credential and request defaults.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct NewsConfig {
    pub api_key: String,
    pub base_url: String,
    pub default_country: String,
    pub default_category: String,
    pub default_page_size: u32,
    pub cache_ttl_secs: u64,
}

impl Default for NewsConfig {
    fn default() -> Self {
        Self {
            api_key: String::new(),
            base_url: DEFAULT_BASE_URL.to_string(),
            default_country: DEFAULT_COUNTRY.to_string(),
            default_category: DEFAULT_CATEGORY.to_string(),
            default_page_size: DEFAULT_PAGE_SIZE,
            cache_ttl_secs: DEFAULT_CACHE_TTL_SECS,
        }
    }
}

impl NewsConfig {
    /// Defaults with the given API key.
    pub fn new(api_key: impl Into<String>) -> Self {
        Self {
            api_key: api_key.into(),
            ..Self::default()
        }
    }

    /// Path to the config file (~/.config/newsdesk/config.json on Linux).
    pub fn default_path() -> Option<PathBuf> {
        ProjectDirs::from("", "", "newsdesk").map(|dirs| dirs.config_dir().join("config.json"))
    }

    /// Read a JSON config file. Missing fields take their defaults.
    pub fn from_file(path: &Path) -> Result<Self> {
        let contents = fs::read_to_string(path)?;
        let config: NewsConfig = serde_json::from_str(&contents)?;
        Ok(config)
    }

    /// Defaults plus environment overrides.
    pub fn from_env() -> Result<Self> {
        let config = Self::default().with_overrides(|key| std::env::var(key).ok())?;
        config.validate()?;
        Ok(config)
    }

    /// Config file (if present), then environment overrides, then validation.
    pub fn load() -> Result<Self> {
        let base = match Self::default_path() {
            Some(path) if path.exists() => Self::from_file(&path)?,
            _ => Self::default(),
        };

        let config = base.with_overrides(|key| std::env::var(key).ok())?;
        config.validate()?;
        Ok(config)
    }

    /// Apply `NEWS_*` overrides from `lookup`. Empty values are ignored.
    pub fn with_overrides<F>(mut self, lookup: F) -> Result<Self>
    where
        F: Fn(&str) -> Option<String>,
    {
        let get = |key: &str| lookup(key).filter(|v| !v.trim().is_empty());

        if let Some(key) = get("NEWS_API_KEY") {
            self.api_key = key;
        }
        if let Some(url) = get("NEWS_API_BASE_URL") {
            self.base_url = url;
        }
        if let Some(country) = get("NEWS_DEFAULT_COUNTRY") {
            self.default_country = country;
        }
        if let Some(category) = get("NEWS_DEFAULT_CATEGORY") {
            self.default_category = category;
        }
        if let Some(size) = get("NEWS_PAGE_SIZE") {
            self.default_page_size = size
                .trim()
                .parse()
                .map_err(|_| NewsError::Config(format!("NEWS_PAGE_SIZE is not a number: {size}")))?;
        }
        if let Some(ttl) = get("NEWS_CACHE_TTL_SECS") {
            self.cache_ttl_secs = ttl.trim().parse().map_err(|_| {
                NewsError::Config(format!("NEWS_CACHE_TTL_SECS is not a number: {ttl}"))
            })?;
        }

        Ok(self)
    }

    pub fn validate(&self) -> Result<()> {
        if self.api_key.trim().is_empty() {
            return Err(NewsError::MissingApiKey);
        }
        if self.base_url.trim().is_empty() {
            return Err(NewsError::Config("base_url is empty".to_string()));
        }
        if self.default_page_size == 0 {
            return Err(NewsError::Config(
                "default_page_size must be at least 1".to_string(),
            ));
        }
        Ok(())
    }

    pub fn cache_ttl(&self) -> Duration {
        Duration::from_secs(self.cache_ttl_secs)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::collections::HashMap;
    use tempfile::TempDir;

    #[test]
    fn test_defaults() {
        let config = NewsConfig::new("key");
        assert_eq!(config.base_url, "https://newsapi.org/v2");
        assert_eq!(config.default_country, "us");
        assert_eq!(config.default_category, "technology");
        assert_eq!(config.default_page_size, 20);
        assert_eq!(config.cache_ttl(), Duration::from_secs(600));
        assert!(config.validate().is_ok());
    }

    #[test]
    fn test_missing_key_fails_validation() {
        let err = NewsConfig::default().validate().unwrap_err();
        assert!(matches!(err, NewsError::MissingApiKey));
    }

    #[test]
    fn test_from_file_fills_defaults() {
        let temp_dir = TempDir::new().unwrap();
        let path = temp_dir.path().join("config.json");
        fs::write(&path, r#"{"api_key": "abc", "default_country": "gb"}"#).unwrap();

        let config = NewsConfig::from_file(&path).unwrap();
        assert_eq!(config.api_key, "abc");
        assert_eq!(config.default_country, "gb");
        assert_eq!(config.default_page_size, DEFAULT_PAGE_SIZE);
    }

    #[test]
    fn test_from_file_missing() {
        let temp_dir = TempDir::new().unwrap();
        let err = NewsConfig::from_file(&temp_dir.path().join("nope.json")).unwrap_err();
        assert!(matches!(err, NewsError::Io(_)));
    }

    #[test]
    fn test_overrides() {
        let env: HashMap<&str, &str> = [
            ("NEWS_API_KEY", "from-env"),
            ("NEWS_API_BASE_URL", "http://localhost:1234"),
            ("NEWS_DEFAULT_COUNTRY", ""),
            ("NEWS_PAGE_SIZE", "7"),
        ]
        .into_iter()
        .collect();

        let config = NewsConfig::default()
            .with_overrides(|key| env.get(key).map(|v| v.to_string()))
            .unwrap();

        assert_eq!(config.api_key, "from-env");
        assert_eq!(config.base_url, "http://localhost:1234");
        // Empty override leaves the default in place
        assert_eq!(config.default_country, "us");
        assert_eq!(config.default_page_size, 7);
    }

    #[test]
    fn test_bad_numeric_override() {
        let err = NewsConfig::default()
            .with_overrides(|key| (key == "NEWS_PAGE_SIZE").then(|| "many".to_string()))
            .unwrap_err();
        assert!(matches!(err, NewsError::Config(_)));
    }
}
