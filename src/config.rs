//! Configuration loaded from a TOML file.
//!
//! The file lives at `<config dir>/contrastkit/config.toml`
//! (`~/.config/contrastkit/config.toml` on Linux). Every key is optional:
//!
//! ```toml
//! store_path = "/home/me/palettes.json"
//! default_table = "design-system"
//! log_level = "info"
//! page_size = 20
//! ```

use std::fs;
use std::io;
use std::path::{Path, PathBuf};

use anyhow::{Context, Result};
use ck_names::Table;
use serde::Deserialize;

const APP_NAME: &str = "contrastkit";
const CONFIG_FILE_NAME: &str = "config.toml";
const STORE_FILE_NAME: &str = "palettes.json";
pub const DEFAULT_PAGE_SIZE: usize = 10;

#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
#[serde(default)]
pub struct Config {
    /// Palette record file. Defaults to `<data dir>/contrastkit/palettes.json`.
    pub store_path: Option<PathBuf>,
    /// Table used by `name` when `--table` is not given.
    pub default_table: Table,
    pub log_level: Option<String>,
    /// Palettes per page in `list`.
    pub page_size: usize,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            store_path: None,
            default_table: Table::Named,
            log_level: None,
            page_size: DEFAULT_PAGE_SIZE,
        }
    }
}

impl Config {
    /// Load from an explicit path. The file must exist.
    pub fn load(path: &Path) -> Result<Self> {
        let text = fs::read_to_string(path)
            .with_context(|| format!("failed to read config file {}", path.display()))?;
        Self::parse(&text).with_context(|| format!("invalid config file {}", path.display()))
    }

    /// Load from `explicit`, or from the standard location if it exists.
    ///
    /// A missing file at the standard location yields the defaults.
    pub fn locate(explicit: Option<&Path>) -> Result<Self> {
        if let Some(path) = explicit {
            return Self::load(path);
        }
        let Some(path) = default_config_path() else {
            return Ok(Self::default());
        };
        match Self::load(&path) {
            Err(e) if is_not_found(&e) => Ok(Self::default()),
            other => other,
        }
    }

    pub fn parse(text: &str) -> Result<Self> {
        let mut config: Self = toml::from_str(text)?;
        if config.page_size == 0 {
            config.page_size = DEFAULT_PAGE_SIZE;
        }
        Ok(config)
    }

    /// The record file to use: configured, else the platform data dir,
    /// else `palettes.json` in the working directory.
    #[must_use]
    pub fn store_path(&self) -> PathBuf {
        self.store_path.clone().unwrap_or_else(|| {
            dirs::data_dir().map_or_else(
                || PathBuf::from(STORE_FILE_NAME),
                |dir| dir.join(APP_NAME).join(STORE_FILE_NAME),
            )
        })
    }
}

/// `<config dir>/contrastkit/config.toml`, if the platform has a config dir.
#[must_use]
pub fn default_config_path() -> Option<PathBuf> {
    dirs::config_dir().map(|dir| dir.join(APP_NAME).join(CONFIG_FILE_NAME))
}

fn is_not_found(err: &anyhow::Error) -> bool {
    err.chain()
        .filter_map(|cause| cause.downcast_ref::<io::Error>())
        .any(|e| e.kind() == io::ErrorKind::NotFound)
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;

    #[test]
    fn empty_file_is_default() {
        assert_eq!(Config::parse("").unwrap(), Config::default());
    }

    #[test]
    fn all_keys() {
        let config = Config::parse(
            r#"
            store_path = "/var/lib/palettes.json"
            default_table = "design-system"
            log_level = "debug"
            page_size = 25
            "#,
        )
        .unwrap();
        assert_eq!(config.store_path(), PathBuf::from("/var/lib/palettes.json"));
        assert_eq!(config.default_table, Table::DesignSystem);
        assert_eq!(config.log_level.as_deref(), Some("debug"));
        assert_eq!(config.page_size, 25);
    }

    #[test]
    fn unknown_keys_are_ignored() {
        let config = Config::parse("theme = \"dark\"\npage_size = 5").unwrap();
        assert_eq!(config.page_size, 5);
        assert_eq!(config.default_table, Table::Named);
    }

    #[test]
    fn zero_page_size_falls_back() {
        assert_eq!(Config::parse("page_size = 0").unwrap().page_size, DEFAULT_PAGE_SIZE);
    }

    #[test]
    fn malformed_is_an_error() {
        assert!(Config::parse("page_size = \"many\"").is_err());
        assert!(Config::parse("default_table = \"pantone\"").is_err());
        assert!(Config::parse("this is not toml").is_err());
    }

    #[test]
    fn explicit_missing_file_is_an_error() {
        let dir = tempfile::tempdir().unwrap();
        let err = Config::locate(Some(&dir.path().join("nope.toml"))).unwrap_err();
        assert!(is_not_found(&err));
    }

    #[test]
    fn explicit_file_is_loaded() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("config.toml");
        fs::write(&path, "default_table = \"tailwind\"\n").unwrap();
        let config = Config::locate(Some(&path)).unwrap();
        assert_eq!(config.default_table, Table::DesignSystem);
        assert_eq!(config.page_size, DEFAULT_PAGE_SIZE);
    }

    #[test]
    fn store_path_defaults_to_palettes_json() {
        let path = Config::default().store_path();
        assert_eq!(path.file_name().and_then(|n| n.to_str()), Some(STORE_FILE_NAME));
    }
}
