//! Configuration types for factsheet.
//!
//! [`Config::load`] reads `~/.config/factsheet/config.toml`, creating it with
//! hardcoded defaults if it does not yet exist. [`Config::defaults`] returns
//! the same defaults without touching the filesystem (useful in tests).

use serde::Deserialize;
use std::path::PathBuf;

// ---------------------------------------------------------------------------
// Embedded defaults
// ---------------------------------------------------------------------------

const DEFAULT_CONFIG: &str = r#"
[storage]
device_prefixes = ["sd", "nvme"]
mount_prefixes  = ["/dev/sd", "/dev/nvme"]

[users]
nologin_shells = ["/usr/sbin/nologin", "/bin/false", "nologin"]

[report]
ports_preview = 5
"#;

// ---------------------------------------------------------------------------
// Public config types
// ---------------------------------------------------------------------------

/// Top-level application configuration, loaded from
/// `~/.config/factsheet/config.toml`.
#[derive(Debug, Clone, Deserialize)]
pub struct Config {
    #[serde(default)]
    pub storage: StorageConfig,
    #[serde(default)]
    pub users: UsersConfig,
    #[serde(default)]
    pub report: ReportConfig,
}

/// `[storage]` section of `config.toml`.
///
/// Device names (and mount device paths) not matching one of these prefixes
/// are excluded from the disk aggregates entirely — "sr0", "loop0" and
/// friends never count.
#[derive(Debug, Clone, Deserialize)]
pub struct StorageConfig {
    #[serde(default = "default_device_prefixes")]
    pub device_prefixes: Vec<String>,
    #[serde(default = "default_mount_prefixes")]
    pub mount_prefixes: Vec<String>,
}

fn default_device_prefixes() -> Vec<String> {
    vec!["sd".to_string(), "nvme".to_string()]
}
fn default_mount_prefixes() -> Vec<String> {
    vec!["/dev/sd".to_string(), "/dev/nvme".to_string()]
}

impl Default for StorageConfig {
    fn default() -> Self {
        Self {
            device_prefixes: default_device_prefixes(),
            mount_prefixes: default_mount_prefixes(),
        }
    }
}

/// `[users]` section of `config.toml`.
#[derive(Debug, Clone, Deserialize)]
pub struct UsersConfig {
    /// Shells that mark an account as login-disabled.
    #[serde(default = "default_nologin_shells")]
    pub nologin_shells: Vec<String>,
}

fn default_nologin_shells() -> Vec<String> {
    vec![
        "/usr/sbin/nologin".to_string(),
        "/bin/false".to_string(),
        "nologin".to_string(),
    ]
}

impl Default for UsersConfig {
    fn default() -> Self {
        Self { nologin_shells: default_nologin_shells() }
    }
}

/// `[report]` section of `config.toml`.
#[derive(Debug, Clone, Deserialize)]
pub struct ReportConfig {
    /// How many ports the text table shows before truncating with "+N more".
    #[serde(default = "default_ports_preview")]
    pub ports_preview: usize,
}

fn default_ports_preview() -> usize {
    5
}

impl Default for ReportConfig {
    fn default() -> Self {
        Self { ports_preview: default_ports_preview() }
    }
}

impl Default for Config {
    fn default() -> Self {
        Self::defaults()
    }
}

impl Config {
    /// Load from `~/.config/factsheet/config.toml`, layered on top of the
    /// built-in defaults. Creates the file with defaults if it does not exist.
    pub fn load() -> anyhow::Result<Self> {
        let path = config_path();

        if !path.exists() {
            if let Some(parent) = path.parent() {
                std::fs::create_dir_all(parent)?;
            }
            std::fs::write(&path, DEFAULT_CONFIG.trim_start())?;
        }

        config::Config::builder()
            .add_source(config::File::from_str(DEFAULT_CONFIG, config::FileFormat::Toml))
            .add_source(config::File::from(path.as_path()).required(false))
            .build()?
            .try_deserialize()
            .map_err(Into::into)
    }

    /// Return the built-in defaults without touching the filesystem.
    pub fn defaults() -> Self {
        config::Config::builder()
            .add_source(config::File::from_str(DEFAULT_CONFIG, config::FileFormat::Toml))
            .build()
            .expect("built-in default config must be valid TOML")
            .try_deserialize()
            .expect("built-in default config must deserialize correctly")
    }
}

// ---------------------------------------------------------------------------
// Path helpers
// ---------------------------------------------------------------------------

fn config_path() -> PathBuf {
    std::env::var("XDG_CONFIG_HOME")
        .map(PathBuf::from)
        .unwrap_or_else(|_| {
            PathBuf::from(std::env::var("HOME").unwrap_or_else(|_| ".".to_string()))
                .join(".config")
        })
        .join("factsheet")
        .join("config.toml")
}

// ---------------------------------------------------------------------------
// Tests
// ---------------------------------------------------------------------------
