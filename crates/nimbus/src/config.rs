use crate::events::AppEvent;
use async_channel::Sender;
use config::builder::DefaultState;
use config::{ConfigBuilder, Environment, File, FileFormat};
use directories::ProjectDirs;
use nimbus_engine::CursorConfig;
use notify::{EventKind, RecommendedWatcher, RecursiveMode, Watcher};
use std::path::{Path, PathBuf};
use thiserror::Error;

#[derive(Error, Debug)]
pub enum LoadError {
    #[error("Failed to determine config directory")]
    ConfigDirNotFound,
    #[error("Config error: {0}")]
    Config(#[from] config::ConfigError),
    #[error("Invalid cursor config: {0}")]
    Invalid(#[from] nimbus_engine::ConfigError),
    #[error("Notify error: {0}")]
    Notify(#[from] notify::Error),
}

const DEFAULT_CONFIG: &str = include_str!("default_config.toml");

pub fn get_config_path() -> Result<PathBuf, LoadError> {
    let proj_dirs =
        ProjectDirs::from("org", "nimbus", "nimbus").ok_or(LoadError::ConfigDirNotFound)?;
    Ok(proj_dirs.config_dir().join("config.toml"))
}

pub fn resolve_path(explicit: Option<PathBuf>) -> Result<PathBuf, LoadError> {
    explicit.map_or_else(get_config_path, Ok)
}

fn finish(builder: ConfigBuilder<DefaultState>) -> Result<CursorConfig, LoadError> {
    let config: CursorConfig = builder.build()?.try_deserialize()?;
    config.validate()?;
    Ok(config)
}

pub fn load_config(path: &Path) -> Result<CursorConfig, LoadError> {
    finish(
        config::Config::builder()
            .add_source(File::from(path).required(false))
            .add_source(Environment::with_prefix("NIMBUS").try_parsing(true)),
    )
}

pub fn load_or_default(path: &Path) -> CursorConfig {
    load_config(path).unwrap_or_else(|e| {
        log::error!("Failed to load config from {}: {}", path.display(), e);
        CursorConfig::default()
    })
}

pub fn parse_config(toml: &str) -> Result<CursorConfig, LoadError> {
    finish(config::Config::builder().add_source(File::from_str(toml, FileFormat::Toml)))
}

pub fn write_default_config(path: &Path) -> std::io::Result<PathBuf> {
    if let Some(parent) = path.parent() {
        fs_err::create_dir_all(parent)?;
    }
    if !path.exists() {
        fs_err::write(path, DEFAULT_CONFIG)?;
    }
    Ok(path.to_path_buf())
}

pub async fn run_async_watcher(config_path: PathBuf, tx: Sender<AppEvent>) {
    let config_dir = match config_path.parent() {
        Some(p) => p.to_path_buf(),
        None => return,
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
            log::error!("Failed to create watcher: {}", LoadError::from(e));
            return;
        }
    };

    if let Err(e) = watcher.watch(&config_dir, RecursiveMode::NonRecursive) {
        log::error!("Failed to watch config directory: {}", e);
        return;
    }
    log::debug!("Watching {} for changes", config_path.display());

    while let Ok(res) = bridge_rx.recv().await {
        match res {
            Ok(event) => {
                let meaningful_event = matches!(
                    event.kind,
                    EventKind::Modify(_) | EventKind::Create(_) | EventKind::Remove(_)
                );

                if meaningful_event
                    && event.paths.iter().any(|p| p == &config_path)
                    && tx.send(AppEvent::ConfigReload).await.is_err()
                {
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
    use nimbus_engine::{Channels, Paint};

    #[test]
    fn test_bundled_default_config_matches_defaults() {
        let parsed = parse_config(DEFAULT_CONFIG).unwrap();
        assert_eq!(parsed, CursorConfig::default());
    }

    #[test]
    fn test_partial_file_keeps_remaining_defaults() {
        let parsed = parse_config(
            r#"
            trailing_speed = 3.5
            outer_border_color = "rgba(10, 20, 30, 0.5)"
            show_system_cursor = true
            "#,
        )
        .unwrap();

        assert_eq!(parsed.trailing_speed, 3.5);
        assert_eq!(
            parsed.outer_border_color,
            Paint::from(Channels::new(10, 20, 30).with_alpha(0.5))
        );
        assert!(parsed.show_system_cursor);
        assert_eq!(parsed.outer_size, 25.0);
    }

    #[test]
    fn test_invalid_values_surface_as_errors() {
        let err = parse_config("trailing_speed = 0").unwrap_err();
        assert!(matches!(
            err,
            LoadError::Invalid(nimbus_engine::ConfigError::TrailingSpeed(_))
        ));

        let err = parse_config(r#"color = "not a color""#).unwrap_err();
        assert!(matches!(err, LoadError::Config(_)));
    }

    #[test]
    fn test_missing_file_yields_defaults() {
        let path = std::env::temp_dir().join("nimbus-test-does-not-exist/config.toml");
        assert_eq!(load_or_default(&path), CursorConfig::default());
    }

    #[test]
    fn test_explicit_path_takes_precedence() {
        let explicit = PathBuf::from("/tmp/custom-nimbus.toml");
        assert_eq!(resolve_path(Some(explicit.clone())).unwrap(), explicit);
    }
}
