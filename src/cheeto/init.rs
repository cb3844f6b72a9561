use crate::api::{CheetoApi, CheetoPaths};
use crate::config::CheetoConfig;
use crate::error::{CheetoError, Result};
use crate::paths::{expand_home, user_config_path, user_data_path, APP_NAME};
use std::env;
use std::ffi::OsString;
use std::path::{Path, PathBuf};
use tracing::debug;

/// Environment variable overriding the configured data path.
pub const DATA_PATH_ENV: &str = "CHEETO_DATA_PATH";

pub struct CheetoContext {
    pub api: CheetoApi,
    pub config: CheetoConfig,
}

/// Picks the sheet root: explicit flag, then environment, then config file,
/// then the per-user data directory. The result is `~`-expanded.
pub fn resolve_data_path(
    flag: Option<&Path>,
    env_value: Option<OsString>,
    config: &CheetoConfig,
    default: Option<PathBuf>,
) -> Option<PathBuf> {
    let chosen = flag
        .map(Path::to_path_buf)
        .or_else(|| env_value.filter(|v| !v.is_empty()).map(PathBuf::from))
        .or_else(|| config.data_path.as_ref().map(PathBuf::from))
        .or(default)?;
    Some(expand_home(&chosen))
}

pub fn initialize(data_path_flag: Option<&Path>) -> Result<CheetoContext> {
    let config_dir = user_config_path(APP_NAME)
        .ok_or_else(|| CheetoError::Config("Could not determine config dir".to_string()))?;
    let config = CheetoConfig::load(&config_dir)?;

    let data = resolve_data_path(
        data_path_flag,
        env::var_os(DATA_PATH_ENV),
        &config,
        user_data_path(APP_NAME),
    )
    .ok_or_else(|| CheetoError::Config("Could not determine data dir".to_string()))?;
    debug!(data = %data.display(), config = %config_dir.display(), "resolved paths");

    let paths = CheetoPaths {
        data,
        config: config_dir,
    };
    let api = CheetoApi::new(paths, config.clone());

    Ok(CheetoContext { api, config })
}

#[cfg(test)]
mod tests {
    use super::*;

    fn config_with(data_path: Option<&str>) -> CheetoConfig {
        CheetoConfig {
            data_path: data_path.map(String::from),
            ..CheetoConfig::default()
        }
    }

    #[test]
    fn test_flag_wins() {
        let path = resolve_data_path(
            Some(Path::new("/flag")),
            Some(OsString::from("/env")),
            &config_with(Some("/config")),
            Some(PathBuf::from("/default")),
        );
        assert_eq!(path, Some(PathBuf::from("/flag")));
    }

    #[test]
    fn test_env_beats_config() {
        let path = resolve_data_path(
            None,
            Some(OsString::from("/env")),
            &config_with(Some("/config")),
            Some(PathBuf::from("/default")),
        );
        assert_eq!(path, Some(PathBuf::from("/env")));
    }

    #[test]
    fn test_empty_env_is_ignored() {
        let path = resolve_data_path(
            None,
            Some(OsString::new()),
            &config_with(Some("/config")),
            Some(PathBuf::from("/default")),
        );
        assert_eq!(path, Some(PathBuf::from("/config")));
    }

    #[test]
    fn test_default_used_last() {
        let path = resolve_data_path(None, None, &config_with(None), Some(PathBuf::from("/default")));
        assert_eq!(path, Some(PathBuf::from("/default")));
        assert_eq!(resolve_data_path(None, None, &config_with(None), None), None);
    }

    #[test]
    fn test_config_path_is_expanded() {
        let path = resolve_data_path(None, None, &config_with(Some("~/sheets")), None).unwrap();
        assert_eq!(path, expand_home(Path::new("~/sheets")));
    }
}
