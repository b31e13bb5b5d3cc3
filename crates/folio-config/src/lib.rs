//! Configuration management for Folio.
//!
//! Parses `folio.toml` configuration files with serde and provides
//! auto-discovery of config files in parent directories.
//!
//! CLI settings can be applied during load via [`CliSettings`].
//!
//! ## Environment Variable Expansion
//!
//! String configuration values support environment variable expansion:
//!
//! - `${VAR}` - expands to the value of VAR, errors if unset
//! - `${VAR:-default}` - expands to VAR if set, otherwise uses default
//!
//! Expanded fields:
//! - `site.root`
//! - `site.base_url`
//! - `news.sheet_id`
//! - `news.endpoint`

mod expand;

use std::collections::BTreeMap;
use std::path::{Path, PathBuf};
use std::time::Duration;

use serde::Deserialize;

/// CLI settings that override configuration file values.
///
/// All fields are optional. Only non-None values override the loaded config.
#[derive(Debug, Default)]
pub struct CliSettings {
    /// Override site root (directory containing `content/`).
    pub root: Option<PathBuf>,
    /// Override default locale.
    pub locale: Option<String>,
    /// Override remote base URL for content.
    pub base_url: Option<String>,
    /// Override news spreadsheet id.
    pub sheet_id: Option<String>,
}

/// Configuration filename to search for.
const CONFIG_FILENAME: &str = "folio.toml";

/// Default spreadsheet publishing endpoint.
const DEFAULT_NEWS_ENDPOINT: &str = "https://docs.google.com/spreadsheets/d";

/// Application configuration.
#[derive(Debug, Deserialize)]
#[serde(default)]
pub struct Config {
    /// Site configuration (paths are relative strings from TOML).
    site: SiteConfigRaw,
    /// News feed configuration.
    pub news: NewsConfig,
    /// Contact form configuration.
    pub contact: ContactConfig,
    /// Navigation display configuration.
    pub navigation: NavigationConfig,

    /// Resolved site configuration (set after loading).
    #[serde(skip)]
    pub site_resolved: SiteConfig,
    /// Path to the config file (set after loading).
    #[serde(skip)]
    pub config_path: Option<PathBuf>,
}

impl Default for Config {
    fn default() -> Self {
        Self::default_with_base(Path::new("."))
    }
}

/// Raw site configuration as parsed from TOML.
#[derive(Debug, Deserialize, Default)]
#[serde(default)]
struct SiteConfigRaw {
    root: Option<String>,
    default_locale: Option<String>,
    base_url: Option<String>,
}

/// Resolved site configuration with absolute paths.
#[derive(Debug, Default)]
pub struct SiteConfig {
    /// Directory containing the `content/` tree.
    pub root: PathBuf,
    /// Locale used when the URL carries no `lang` parameter.
    pub default_locale: String,
    /// When set, content is read over HTTP from this URL instead of `root`.
    pub base_url: Option<String>,
}

/// News feed configuration.
#[derive(Debug, Deserialize)]
#[serde(default)]
pub struct NewsConfig {
    /// Spreadsheet id or full spreadsheet URL. Empty disables the feed.
    pub sheet_id: String,
    /// Sheet tab id.
    pub gid: String,
    /// Spreadsheet publishing endpoint.
    pub endpoint: String,
    /// HTTP timeout in seconds.
    pub timeout_secs: u64,
}

impl NewsConfig {
    /// HTTP timeout as a [`Duration`].
    #[must_use]
    pub fn timeout(&self) -> Duration {
        Duration::from_secs(self.timeout_secs)
    }
}

impl Default for NewsConfig {
    fn default() -> Self {
        Self {
            sheet_id: String::new(),
            gid: "0".to_owned(),
            endpoint: DEFAULT_NEWS_ENDPOINT.to_owned(),
            timeout_secs: 30,
        }
    }
}

/// Contact form configuration.
#[derive(Debug, Deserialize)]
#[serde(default)]
pub struct ContactConfig {
    /// Minimum seconds between form load and submit.
    pub min_submit_secs: u64,
}

impl ContactConfig {
    /// Minimum time between form load and submit.
    #[must_use]
    pub fn min_submit(&self) -> Duration {
        Duration::from_secs(self.min_submit_secs)
    }
}

impl Default for ContactConfig {
    fn default() -> Self {
        Self { min_submit_secs: 2 }
    }
}

/// Navigation display configuration.
///
/// Both fields are optional; when absent the built-in tables apply.
#[derive(Debug, Deserialize, Default)]
#[serde(default)]
pub struct NavigationConfig {
    /// Ids hidden from the primary menu.
    pub hidden: Option<Vec<String>>,
    /// Sidebar groups: root id to ordered member ids.
    pub subnav: Option<BTreeMap<String, Vec<String>>>,
}

/// Configuration error.
#[derive(Debug, thiserror::Error)]
pub enum ConfigError {
    /// File not found.
    #[error("Configuration file not found: {}", .0.display())]
    NotFound(PathBuf),
    /// I/O error.
    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),
    /// TOML parsing error.
    #[error("TOML parse error: {0}")]
    Parse(#[from] toml::de::Error),
    /// Validation error.
    #[error("Configuration error: {0}")]
    Validation(String),
    /// Environment variable error during expansion.
    #[error("Environment variable error in {field}: {message}")]
    EnvVar {
        /// Config field path (e.g., "`news.sheet_id`").
        field: String,
        /// Error message (e.g., "${`NEWS_SHEET_ID`} not set").
        message: String,
    },
}

/// Require a string field to be non-empty.
fn require_non_empty(value: &str, field: &str) -> Result<(), ConfigError> {
    if value.trim().is_empty() {
        return Err(ConfigError::Validation(format!("{field} cannot be empty")));
    }
    Ok(())
}

/// Require a URL field to use http:// or https:// scheme.
fn require_http_url(url: &str, field: &str) -> Result<(), ConfigError> {
    if !url.starts_with("http://") && !url.starts_with("https://") {
        return Err(ConfigError::Validation(format!(
            "{field} must start with http:// or https://"
        )));
    }
    Ok(())
}

impl Config {
    /// Load configuration from file with optional CLI settings.
    ///
    /// If `config_path` is provided, loads from that file.
    /// Otherwise, searches for `folio.toml` in current directory and parents.
    ///
    /// CLI settings are applied after loading and path resolution, allowing CLI
    /// arguments to take precedence over config file values. The merged result
    /// is validated.
    ///
    /// # Errors
    ///
    /// Returns error if explicit `config_path` doesn't exist, parsing fails, or
    /// the merged configuration is invalid.
    pub fn load(
        config_path: Option<&Path>,
        cli_settings: Option<&CliSettings>,
    ) -> Result<Self, ConfigError> {
        let mut config = if let Some(path) = config_path {
            if !path.exists() {
                return Err(ConfigError::NotFound(path.to_path_buf()));
            }
            Self::load_from_file(path)?
        } else if let Some(discovered) = Self::discover_config() {
            Self::load_from_file(&discovered)?
        } else {
            Self::default_with_cwd()
        };

        if let Some(settings) = cli_settings {
            config.apply_cli_settings(settings);
        }

        config.validate()?;
        Ok(config)
    }

    /// Apply CLI settings to the configuration.
    fn apply_cli_settings(&mut self, settings: &CliSettings) {
        if let Some(root) = &settings.root {
            self.site_resolved.root.clone_from(root);
        }
        if let Some(locale) = &settings.locale {
            self.site_resolved.default_locale.clone_from(locale);
        }
        if let Some(base_url) = &settings.base_url {
            self.site_resolved.base_url = Some(base_url.clone());
        }
        if let Some(sheet_id) = &settings.sheet_id {
            self.news.sheet_id.clone_from(sheet_id);
        }
    }

    /// Search for config file in current directory and parents.
    fn discover_config() -> Option<PathBuf> {
        let mut current = std::env::current_dir().ok()?;
        loop {
            let candidate = current.join(CONFIG_FILENAME);
            if candidate.exists() {
                return Some(candidate);
            }
            if !current.pop() {
                return None;
            }
        }
    }

    /// Create default config with paths relative to current working directory.
    fn default_with_cwd() -> Self {
        let cwd = std::env::current_dir().unwrap_or_default();
        Self::default_with_base(&cwd)
    }

    /// Create default config with paths relative to given base directory.
    fn default_with_base(base: &Path) -> Self {
        Self {
            site: SiteConfigRaw::default(),
            news: NewsConfig::default(),
            contact: ContactConfig::default(),
            navigation: NavigationConfig::default(),
            site_resolved: SiteConfig {
                root: base.to_path_buf(),
                default_locale: "bg".to_owned(),
                base_url: None,
            },
            config_path: None,
        }
    }

    /// Load configuration from a specific file.
    fn load_from_file(path: &Path) -> Result<Self, ConfigError> {
        let content = std::fs::read_to_string(path)?;
        let mut config: Self = toml::from_str(&content)?;

        config.expand_env_vars()?;

        let config_dir = path.parent().unwrap_or(Path::new("."));
        config.resolve_paths(config_dir);
        config.config_path = Some(path.to_path_buf());

        Ok(config)
    }

    /// Validate configuration values.
    ///
    /// # Errors
    ///
    /// Returns `ConfigError::Validation` if any validation fails.
    pub fn validate(&self) -> Result<(), ConfigError> {
        self.validate_site()?;
        self.validate_news()?;
        Ok(())
    }

    /// Validate site configuration.
    fn validate_site(&self) -> Result<(), ConfigError> {
        require_non_empty(&self.site_resolved.default_locale, "site.default_locale")?;
        if let Some(ref base_url) = self.site_resolved.base_url {
            require_http_url(base_url, "site.base_url")?;
        }
        Ok(())
    }

    /// Validate news configuration.
    fn validate_news(&self) -> Result<(), ConfigError> {
        require_non_empty(&self.news.gid, "news.gid")?;
        require_http_url(&self.news.endpoint, "news.endpoint")?;
        if self.news.timeout_secs == 0 {
            return Err(ConfigError::Validation(
                "news.timeout_secs must be greater than 0".to_owned(),
            ));
        }
        Ok(())
    }

    /// Expand environment variable references in configuration strings.
    fn expand_env_vars(&mut self) -> Result<(), ConfigError> {
        expand::expand_opt(&mut self.site.root, "site.root")?;
        expand::expand_opt(&mut self.site.base_url, "site.base_url")?;
        self.news.sheet_id = expand::expand_env(&self.news.sheet_id, "news.sheet_id")?;
        self.news.endpoint = expand::expand_env(&self.news.endpoint, "news.endpoint")?;
        Ok(())
    }

    /// Resolve relative paths to absolute paths based on config directory.
    fn resolve_paths(&mut self, config_dir: &Path) {
        self.site_resolved = SiteConfig {
            root: config_dir.join(self.site.root.as_deref().unwrap_or(".")),
            default_locale: self
                .site
                .default_locale
                .clone()
                .unwrap_or_else(|| "bg".to_owned()),
            base_url: self
                .site
                .base_url
                .as_deref()
                .map(|url| url.trim_end_matches('/').to_owned()),
        };
    }
}
