// run  := cargo run --
// dir  := .
// kid  :=

use std::fs;
use std::path::{Path, PathBuf};
use std::time::Duration;

use serde::Deserialize;

use crate::error::{Result, SpshowError};

pub const DEFAULT_CONFIG: &str = "~/.spshow";
pub const DEFAULT_API_URL: &str = "https://api.statuspage.io/v1";

fn default_limit() -> i64 { 5 }

fn default_api_url() -> String { DEFAULT_API_URL.to_string() }

fn default_timeout() -> String { "10s".to_string() }

fn default_open_icon() -> String { ":fire:".to_string() }

fn default_clear_icon() -> String { ":white_check_mark:".to_string() }

#[derive(Deserialize, Debug, Clone)]
#[serde(deny_unknown_fields)]
pub struct MainSection {
    #[serde(default)]
    pub page:    String,
    #[serde(default)]
    pub token:   String,
    #[serde(default)]
    pub title:   String,
    #[serde(default)]
    pub baricon: String,
    #[serde(default = "default_api_url")]
    pub api_url: String,
    #[serde(default = "default_timeout")]
    pub timeout: String
}

impl Default for MainSection {
    fn default() -> Self {
        MainSection {
            page:    String::new(),
            token:   String::new(),
            title:   String::new(),
            baricon: String::new(),
            api_url: default_api_url(),
            timeout: default_timeout()
        }
    }
}

#[derive(Deserialize, Debug, Clone, Copy)]
#[serde(deny_unknown_fields)]
pub struct SectionToggle {
    #[serde(default)]
    pub enabled: bool,
    #[serde(default = "default_limit")]
    pub limit:   i64
}

impl Default for SectionToggle {
    fn default() -> Self { SectionToggle { enabled: false, limit: default_limit() } }
}

impl SectionToggle {
    /// Number of detail blocks a section may render; non-positive limits render none.
    pub fn cap(&self) -> usize { self.limit.max(0) as usize }
}

#[derive(Deserialize, Debug, Clone)]
#[serde(deny_unknown_fields)]
pub struct Icons {
    #[serde(default = "default_open_icon")]
    pub openincident: String,
    #[serde(default = "default_clear_icon")]
    pub allclear:     String
}

impl Default for Icons {
    fn default() -> Self { Icons { openincident: default_open_icon(), allclear: default_clear_icon() } }
}

#[derive(Deserialize, Debug, Clone, Default)]
#[serde(deny_unknown_fields)]
pub struct Config {
    #[serde(default)]
    pub main:      MainSection,

    #[serde(default)]
    pub scheduled: SectionToggle,

    #[serde(default)]
    pub resolved:  SectionToggle,

    #[serde(default)]
    pub icons:     Icons
}

impl Config {
    pub fn timeout(&self) -> Result<Duration> {
        humantime::parse_duration(self.main.timeout.trim()).map_err(|source| SpshowError::InvalidTimeout {
            value: self.main.timeout.clone(),
            source
        })
    }
}

/// Values given on the command line or through the environment; they win over the file.
#[derive(Debug, Default)]
pub struct Overrides {
    pub token: Option<String>,
    pub page:  Option<String>
}

pub struct LoadConfig {
    config: Config
}

impl LoadConfig {
    pub fn new(config_path: Option<PathBuf>, overrides: Overrides) -> Result<Self> {
        let raw = config_path.unwrap_or_else(|| PathBuf::from(DEFAULT_CONFIG));
        let path = expand_home(&raw);
        tracing::debug!(path = %path.display(), "loading config");

        if !path.exists() {
            return Err(SpshowError::ConfigNotFound { path });
        }
        let content = fs::read_to_string(&path).map_err(|source| SpshowError::ConfigRead {
            path: path.clone(),
            source
        })?;

        let mut config: Config =
            toml::from_str(&content).map_err(|source| SpshowError::ConfigParse { path: path.clone(), source })?;

        if let Some(token) = overrides.token.filter(|t| !t.is_empty()) {
            config.main.token = token;
        }
        if let Some(page) = overrides.page.filter(|p| !p.is_empty()) {
            config.main.page = page;
        }
        // Surface a bad timeout at load time rather than at the first request.
        config.timeout()?;

        Ok(LoadConfig { config })
    }

    pub fn into_config(self) -> Config { self.config }
}

pub fn expand_home(path: &Path) -> PathBuf {
    match path.strip_prefix("~") {
        Ok(rest) => {
            match dirs::home_dir() {
                Some(home) => home.join(rest),
                None => path.to_path_buf()
            }
        }
        Err(_) => path.to_path_buf()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::io::Write;
    use tempfile::NamedTempFile;

    fn write_config(content: &str) -> NamedTempFile {
        let mut file = NamedTempFile::new().unwrap();
        file.write_all(content.as_bytes()).unwrap();
        file
    }

    #[test]
    fn test_full_config_is_loaded() {
        let file = write_config(
            r#"
[main]
page = "abc123"
token = "secret"
title = "SP"
baricon = "iVBORw0KGgo="

[scheduled]
enabled = true
limit = 3

[resolved]
enabled = true
limit = 2

[icons]
openincident = ":rotating_light:"
allclear = ":ok:"
"#
        );
        let config = LoadConfig::new(Some(file.path().to_path_buf()), Overrides::default())
            .unwrap()
            .into_config();

        assert_eq!(config.main.page, "abc123");
        assert_eq!(config.main.token, "secret");
        assert_eq!(config.main.title, "SP");
        assert_eq!(config.main.api_url, DEFAULT_API_URL);
        assert!(config.scheduled.enabled);
        assert_eq!(config.scheduled.limit, 3);
        assert!(config.resolved.enabled);
        assert_eq!(config.resolved.limit, 2);
        assert_eq!(config.icons.openincident, ":rotating_light:");
        assert_eq!(config.icons.allclear, ":ok:");
        assert_eq!(config.timeout().unwrap(), Duration::from_secs(10));
    }

    #[test]
    fn test_missing_sections_take_defaults() {
        let file = write_config("[main]\npage = \"p\"\ntoken = \"t\"\n");
        let config = LoadConfig::new(Some(file.path().to_path_buf()), Overrides::default())
            .unwrap()
            .into_config();

        assert!(!config.scheduled.enabled);
        assert!(!config.resolved.enabled);
        assert_eq!(config.resolved.limit, 5);
        assert_eq!(config.icons.openincident, ":fire:");
    }

    #[test]
    fn test_overrides_replace_file_values() {
        let file = write_config("[main]\npage = \"file-page\"\ntoken = \"file-token\"\n");
        let overrides = Overrides { token: Some("cli-token".into()), page: Some(String::new()) };
        let config = LoadConfig::new(Some(file.path().to_path_buf()), overrides).unwrap().into_config();

        assert_eq!(config.main.token, "cli-token");
        // empty override leaves the file value alone
        assert_eq!(config.main.page, "file-page");
    }

    #[test]
    fn test_missing_file_is_not_found() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("nope.toml");
        let err = LoadConfig::new(Some(path.clone()), Overrides::default()).err().unwrap();
        assert!(matches!(err, SpshowError::ConfigNotFound { path: p } if p == path));
    }

    #[test]
    fn test_malformed_file_is_parse_error() {
        let file = write_config("[main\npage = ");
        let err = LoadConfig::new(Some(file.path().to_path_buf()), Overrides::default()).err().unwrap();
        assert!(matches!(err, SpshowError::ConfigParse { .. }));
    }

    #[test]
    fn test_unknown_key_is_parse_error() {
        let file = write_config("[resolved]\nenable = true\n");
        let err = LoadConfig::new(Some(file.path().to_path_buf()), Overrides::default()).err().unwrap();
        assert!(matches!(err, SpshowError::ConfigParse { .. }));
    }

    #[test]
    fn test_bad_timeout_is_rejected() {
        let file = write_config("[main]\ntimeout = \"soon\"\n");
        let err = LoadConfig::new(Some(file.path().to_path_buf()), Overrides::default()).err().unwrap();
        assert!(matches!(err, SpshowError::InvalidTimeout { .. }));
    }

    #[test]
    fn test_negative_limit_caps_at_zero() {
        let toggle = SectionToggle { enabled: true, limit: -4 };
        assert_eq!(toggle.cap(), 0);
        assert_eq!(SectionToggle { enabled: true, limit: 7 }.cap(), 7);
    }

    #[test]
    fn test_expand_home() {
        let plain = PathBuf::from("/etc/spshow");
        assert_eq!(expand_home(&plain), plain);

        if let Some(home) = dirs::home_dir() {
            assert_eq!(expand_home(Path::new("~/.spshow")), home.join(".spshow"));
        }
    }
}
