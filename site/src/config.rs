//! Site configuration.
//!
//! Loaded from an optional TOML file (`site.toml`):
//!
//! ```toml
//! cms_base_url = "https://cms.example.org"
//! stylesheet_href = "/styles.css"
//!
//! [header]
//! scroll_threshold = 20
//! scroll_lock_class = "!overflow-y-hidden"
//!
//! [social]
//! github_url = "https://github.com/strapi-community/"
//! discord_url = "https://discord.com/invite/strapi"
//! ```

use serde::Deserialize;
use std::path::Path;
use tracing::warn;

use crate::chrome::{DEFAULT_SCROLL_THRESHOLD, HeaderChrome};

/// Root configuration structure
#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
#[serde(default)]
pub struct SiteConfig {
    /// Base URL that relative CMS asset paths are resolved against.
    pub cms_base_url: String,
    /// Stylesheet linked from the pre-rendered document, if any.
    pub stylesheet_href: Option<String>,
    /// Header behaviour
    pub header: HeaderConfig,
    /// Social links
    pub social: SocialConfig,
}

/// Header behaviour
#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
#[serde(default)]
pub struct HeaderConfig {
    /// Scroll offset (px) at which the header turns opaque.
    pub scroll_threshold: i32,
    /// Class toggled on `<body>` while the mobile menu is open.
    ///
    /// Must be a single class token: non-empty, without whitespace.
    pub scroll_lock_class: String,
}

/// Outbound community links shown next to the menu toggle.
#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
#[serde(default)]
pub struct SocialConfig {
    /// GitHub organisation page
    pub github_url: String,
    /// Discord invite
    pub discord_url: String,
}

impl Default for SiteConfig {
    fn default() -> Self {
        Self {
            cms_base_url: "http://localhost:1337".to_string(),
            stylesheet_href: None,
            header: HeaderConfig::default(),
            social: SocialConfig::default(),
        }
    }
}

impl Default for HeaderConfig {
    fn default() -> Self {
        Self {
            scroll_threshold: DEFAULT_SCROLL_THRESHOLD,
            scroll_lock_class: "!overflow-y-hidden".to_string(),
        }
    }
}

impl HeaderConfig {
    /// Whether `class` can be added to a class list as one token.
    pub fn is_valid_lock_class(class: &str) -> bool {
        !class.is_empty() && !class.chars().any(char::is_whitespace)
    }

    /// Replace an unusable lock class with the default.
    fn sanitize(&mut self) {
        if !Self::is_valid_lock_class(&self.scroll_lock_class) {
            let fallback = Self::default().scroll_lock_class;
            warn!(
                "scroll_lock_class {:?} is not a single class token, using {:?}",
                self.scroll_lock_class, fallback
            );
            self.scroll_lock_class = fallback;
        }
    }
}

impl Default for SocialConfig {
    fn default() -> Self {
        Self {
            github_url: "https://github.com/strapi-community/".to_string(),
            discord_url: "https://discord.com/invite/strapi".to_string(),
        }
    }
}

impl SiteConfig {
    /// Load config from a specific path.
    /// Returns default config if file doesn't exist or is invalid.
    pub fn load_from_path(path: &Path) -> Self {
        if !path.exists() {
            return Self::default();
        }

        match std::fs::read_to_string(path) {
            Ok(content) => match Self::from_toml_str(&content) {
                Ok(config) => config,
                Err(e) => {
                    warn!("failed to parse {}: {}", path.display(), e);
                    Self::default()
                }
            },
            Err(e) => {
                warn!("failed to read {}: {}", path.display(), e);
                Self::default()
            }
        }
    }

    /// Parse config embedded at build time.
    ///
    /// An empty or multi-token `scroll_lock_class` falls back to the default.
    pub fn from_toml_str(content: &str) -> Result<Self, toml::de::Error> {
        let mut config: Self = toml::from_str(content)?;
        config.header.sanitize();
        Ok(config)
    }

    /// Scroll-threshold rule for the header.
    pub fn chrome(&self) -> HeaderChrome {
        HeaderChrome::new(self.header.scroll_threshold)
    }

    /// Resolve a CMS asset path against `cms_base_url`.
    ///
    /// Absolute `http(s)` URLs are returned unchanged.
    pub fn asset_url(&self, path: &str) -> String {
        if path.starts_with("http://") || path.starts_with("https://") {
            return path.to_string();
        }
        format!(
            "{}/{}",
            self.cms_base_url.trim_end_matches('/'),
            path.trim_start_matches('/')
        )
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;
    use std::io::Write;
    use tempfile::TempDir;

    #[test]
    fn test_default_config() {
        let config = SiteConfig::default();
        assert_eq!(config.header.scroll_threshold, 20);
        assert_eq!(config.header.scroll_lock_class, "!overflow-y-hidden");
        assert!(config.stylesheet_href.is_none());
    }

    #[test]
    fn test_load_missing_file() {
        let temp = TempDir::new().expect("temp dir");
        let config = SiteConfig::load_from_path(&temp.path().join("site.toml"));
        assert_eq!(config, SiteConfig::default());
    }

    #[test]
    fn test_load_valid_config() {
        let temp = TempDir::new().expect("temp dir");
        let config_path = temp.path().join("site.toml");
        let mut file = std::fs::File::create(&config_path).expect("create config");
        writeln!(
            file,
            r#"
cms_base_url = "https://cms.example.org/"
stylesheet_href = "/assets/site.css"

[header]
scroll_threshold = 48
"#
        )
        .expect("write config");

        let config = SiteConfig::load_from_path(&config_path);
        assert_eq!(config.cms_base_url, "https://cms.example.org/");
        assert_eq!(config.stylesheet_href.as_deref(), Some("/assets/site.css"));
        assert_eq!(config.header.scroll_threshold, 48);
        // Unset keys keep their defaults.
        assert_eq!(config.header.scroll_lock_class, "!overflow-y-hidden");
        assert_eq!(config.social, SocialConfig::default());
    }

    #[test]
    fn test_load_invalid_config_falls_back() {
        let temp = TempDir::new().expect("temp dir");
        let config_path = temp.path().join("site.toml");
        std::fs::write(&config_path, "header = [not valid").expect("write config");

        let config = SiteConfig::load_from_path(&config_path);
        assert_eq!(config, SiteConfig::default());
    }

    #[test]
    fn test_empty_lock_class_falls_back() {
        let config = SiteConfig::from_toml_str("[header]\nscroll_lock_class = \"\"\n")
            .expect("valid toml");
        assert_eq!(config.header.scroll_lock_class, "!overflow-y-hidden");
    }

    #[test]
    fn test_multi_token_lock_class_falls_back() {
        for class in ["overflow-hidden touch-none", " overflow-hidden", "overflow-hidden\t"] {
            let toml = format!("[header]\nscroll_lock_class = {class:?}\n");
            let config = SiteConfig::from_toml_str(&toml).expect("valid toml");
            assert_eq!(config.header.scroll_lock_class, "!overflow-y-hidden", "{class:?}");
        }
    }

    #[test]
    fn test_load_rejects_bad_lock_class_but_keeps_other_keys() {
        let temp = TempDir::new().expect("temp dir");
        let config_path = temp.path().join("site.toml");
        std::fs::write(
            &config_path,
            "[header]\nscroll_threshold = 32\nscroll_lock_class = \"overflow-hidden touch-none\"\n",
        )
        .expect("write config");

        let config = SiteConfig::load_from_path(&config_path);
        assert_eq!(config.header.scroll_threshold, 32);
        assert_eq!(config.header.scroll_lock_class, "!overflow-y-hidden");
    }

    #[test]
    fn test_custom_lock_class_is_kept() {
        let config = SiteConfig::from_toml_str("[header]\nscroll_lock_class = \"overflow-hidden\"\n")
            .expect("valid toml");
        assert_eq!(config.header.scroll_lock_class, "overflow-hidden");
    }

    #[test]
    fn test_asset_url_resolution() {
        let config = SiteConfig {
            cms_base_url: "https://cms.example.org/".into(),
            ..Default::default()
        };
        assert_eq!(
            config.asset_url("/uploads/logo.svg"),
            "https://cms.example.org/uploads/logo.svg"
        );
        assert_eq!(
            config.asset_url("https://cdn.example.org/logo.svg"),
            "https://cdn.example.org/logo.svg"
        );
    }
}
