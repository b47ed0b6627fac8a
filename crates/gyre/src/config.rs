use directories::ProjectDirs;
use notify::{EventKind, RecommendedWatcher, RecursiveMode, Watcher};
use serde::{Deserialize, Serialize};
use serde_with::DeserializeFromStr;
use slingshot::IndicatorSizes;
use std::path::Path;
use strum::{Display as StrumDisplay, EnumString};
use thiserror::Error;

#[derive(
    Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, DeserializeFromStr, EnumString, StrumDisplay,
)]
#[strum(ascii_case_insensitive)]
#[serde(rename_all = "lowercase")]
pub enum SizePreset {
    #[strum(serialize = "default", serialize = "normal")]
    Default,
    #[strum(serialize = "large", serialize = "big")]
    Large,
}

impl SizePreset {
    pub fn sizes(&self) -> IndicatorSizes {
        match self {
            Self::Default => IndicatorSizes::DEFAULT,
            Self::Large => IndicatorSizes::LARGE,
        }
    }
}

fn default_preset() -> SizePreset {
    SizePreset::Default
}

fn default_trigger_distance() -> f64 {
    80.0
}

fn default_refresh_hold_ms() -> u64 {
    1500
}

#[derive(Debug, Clone, Deserialize, Serialize)]
pub struct Config {
    #[serde(default = "default_preset")]
    pub preset: SizePreset,
    /// Overrides the preset when present.
    #[serde(default)]
    pub sizes: Option<IndicatorSizes>,
    /// Drag distance in pixels at which a release commits a refresh.
    #[serde(default = "default_trigger_distance")]
    pub trigger_distance: f64,
    /// How long the demo's fake refresh holds before completing.
    #[serde(default = "default_refresh_hold_ms")]
    pub refresh_hold_ms: u64,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            preset: default_preset(),
            sizes: None,
            trigger_distance: default_trigger_distance(),
            refresh_hold_ms: default_refresh_hold_ms(),
        }
    }
}

impl Config {
    pub fn indicator_sizes(&self) -> IndicatorSizes {
        self.sizes.unwrap_or_else(|| self.preset.sizes())
    }
}

#[derive(Error, Debug)]
pub enum ConfigError {
    #[error("Failed to determine config directory")]
    ConfigDirNotFound,
    #[error("Config error: {0}")]
    Config(#[from] config::ConfigError),
    #[error("Notify error: {0}")]
    Notify(#[from] notify::Error),
}

pub fn get_config_path() -> Result<std::path::PathBuf, ConfigError> {
    let proj_dirs =
        ProjectDirs::from("io", "gyre", "gyre").ok_or(ConfigError::ConfigDirNotFound)?;
    Ok(proj_dirs.config_dir().join("config.toml"))
}

pub fn load_config() -> Result<Config, ConfigError> {
    let config_path = get_config_path()?;

    let s = config::Config::builder()
        .add_source(config::File::from(config_path).required(false))
        .add_source(config::Environment::with_prefix("GYRE"))
        .build()?;

    Ok(s.try_deserialize()?)
}

pub fn load_or_setup() -> Config {
    if let Ok(path) = get_config_path()
        && !path.exists()
        && let Err(e) = write_default_config()
    {
        log::warn!("Failed to write default config: {}", e);
    }

    match load_config() {
        Ok(c) => c,
        Err(e) => {
            log::error!("Failed to load config, using defaults: {}", e);
            Config::default()
        }
    }
}

pub fn write_default_config() -> std::io::Result<std::path::PathBuf> {
    let path =
        get_config_path().map_err(|e| std::io::Error::new(std::io::ErrorKind::NotFound, e))?;
    if let Some(parent) = path.parent() {
        fs_err::create_dir_all(parent)?;
    }
    if !path.exists() {
        fs_err::write(&path, DEFAULT_CONFIG)?;
    }
    Ok(path)
}

const DEFAULT_CONFIG: &str = include_str!("default_config.toml");

use crate::events::AppEvent;
use async_channel::Sender;

pub async fn run_async_watcher(tx: Sender<AppEvent>) {
    let config_path = match get_config_path() {
        Ok(p) => p,
        Err(e) => {
            log::error!("Config watcher error: {}", e);
            return;
        }
    };
    let Some(config_dir) = config_path.parent().map(Path::to_path_buf) else {
        return;
    };

    if let Err(e) = fs_err::create_dir_all(&config_dir) {
        log::error!("Failed to create config directory for watching: {}", e);
        return;
    }

    let (bridge_tx, bridge_rx) = async_channel::unbounded();

    let mut watcher = match RecommendedWatcher::new(
        move |res| {
            let _ = bridge_tx.send_blocking(res);
        },
        notify::Config::default(),
    ) {
        Ok(w) => w,
        Err(e) => {
            log::error!("Failed to create watcher: {}", e);
            return;
        }
    };

    if let Err(e) = watcher.watch(&config_dir, RecursiveMode::NonRecursive) {
        log::error!("Failed to watch config directory: {}", e);
        return;
    }

    while let Ok(res) = bridge_rx.recv().await {
        match res {
            Ok(event) => {
                let relevant = matches!(
                    event.kind,
                    EventKind::Modify(_) | EventKind::Create(_) | EventKind::Remove(_)
                ) && event.paths.iter().any(|p| p == &config_path);

                if relevant && tx.send(AppEvent::ConfigReload).await.is_err() {
                    break;
                }
            }
            Err(e) => log::error!("Watch error: {}", e),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_preset_deserialization() {
        let cases = vec![
            ("\"default\"", SizePreset::Default),
            ("\"Default\"", SizePreset::Default),
            ("\"DEFAULT\"", SizePreset::Default),
            ("\"normal\"", SizePreset::Default),
            ("\"large\"", SizePreset::Large),
            ("\"Large\"", SizePreset::Large),
            ("\"big\"", SizePreset::Large),
        ];

        for (json, expected) in cases {
            let deserialized: SizePreset = serde_json::from_str(json).unwrap();
            assert_eq!(deserialized, expected);
        }
    }

    #[test]
    fn test_default_config_parses() {
        let cfg: Config = config::Config::builder()
            .add_source(config::File::from_str(
                DEFAULT_CONFIG,
                config::FileFormat::Toml,
            ))
            .build()
            .unwrap()
            .try_deserialize()
            .unwrap();

        assert_eq!(cfg.preset, SizePreset::Default);
        assert_eq!(cfg.sizes, None);
        assert_eq!(cfg.trigger_distance, 80.0);
        assert_eq!(cfg.refresh_hold_ms, 1500);
    }

    #[test]
    fn test_sizes_table_overrides_preset() {
        let toml = r#"
            preset = "large"

            [sizes]
            size = 48.0
            arc_radius = 9.0
            stroke_width = 2.5
            arrow_width = 12.0
            arrow_height = 6.0
        "#;

        let cfg: Config = config::Config::builder()
            .add_source(config::File::from_str(toml, config::FileFormat::Toml))
            .build()
            .unwrap()
            .try_deserialize()
            .unwrap();

        assert_eq!(cfg.indicator_sizes().size, 48.0);
    }

    #[test]
    fn test_empty_config_falls_back_to_defaults() {
        let cfg: Config = config::Config::builder()
            .add_source(config::File::from_str("", config::FileFormat::Toml))
            .build()
            .unwrap()
            .try_deserialize()
            .unwrap();

        assert_eq!(cfg.indicator_sizes(), IndicatorSizes::DEFAULT);
        assert_eq!(cfg.trigger_distance, 80.0);
    }
}
