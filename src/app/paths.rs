// SPDX-License-Identifier: MPL-2.0
//! Resolution of the application data and config directories.
//!
//! Autosave, settings and persisted UI state all go through this module so
//! they never disagree about where StepDoc keeps its files. Each directory
//! resolves in priority order: explicit override (tests), CLI flag, the
//! `STEPDOC_DATA_DIR`/`STEPDOC_CONFIG_DIR` environment variable, then the
//! platform default from the `dirs` crate.

use std::path::PathBuf;
use std::sync::OnceLock;

const APP_NAME: &str = "StepDoc";

/// Environment override for the data directory (autosaves, UI state).
pub const ENV_DATA_DIR: &str = "STEPDOC_DATA_DIR";

/// Environment override for the config directory (settings.toml).
pub const ENV_CONFIG_DIR: &str = "STEPDOC_CONFIG_DIR";

static CLI_DATA_DIR: OnceLock<Option<PathBuf>> = OnceLock::new();
static CLI_CONFIG_DIR: OnceLock<Option<PathBuf>> = OnceLock::new();

/// Records the `--data-dir` and `--config-dir` CLI flags.
///
/// # Panics
///
/// Panics when called a second time; the overrides are set once at startup
/// before any path is resolved.
pub fn init_cli_overrides(data_dir: Option<String>, config_dir: Option<String>) {
    CLI_DATA_DIR
        .set(data_dir.map(PathBuf::from))
        .expect("CLI data dir override already initialized");
    CLI_CONFIG_DIR
        .set(config_dir.map(PathBuf::from))
        .expect("CLI config dir override already initialized");
}

fn resolve(
    override_path: Option<PathBuf>,
    cli: &OnceLock<Option<PathBuf>>,
    env_var: &str,
    platform_dir: Option<PathBuf>,
) -> Option<PathBuf> {
    if override_path.is_some() {
        return override_path;
    }
    if let Some(path) = cli.get().and_then(Clone::clone) {
        return Some(path);
    }
    match std::env::var(env_var) {
        Ok(value) if !value.is_empty() => Some(PathBuf::from(value)),
        _ => platform_dir.map(|dir| dir.join(APP_NAME)),
    }
}

/// Directory for application state (autosaves, persisted UI state).
///
/// `None` only when the platform reports no data directory at all.
pub fn get_app_data_dir() -> Option<PathBuf> {
    get_app_data_dir_with_override(None)
}

/// Like [`get_app_data_dir`], with a highest-priority override so tests can
/// point the application at a temporary directory.
pub fn get_app_data_dir_with_override(override_path: Option<PathBuf>) -> Option<PathBuf> {
    resolve(override_path, &CLI_DATA_DIR, ENV_DATA_DIR, dirs::data_dir())
}

/// Like the data-dir variant, but for user preferences (settings.toml).
pub fn get_app_config_dir_with_override(override_path: Option<PathBuf>) -> Option<PathBuf> {
    resolve(
        override_path,
        &CLI_CONFIG_DIR,
        ENV_CONFIG_DIR,
        dirs::config_dir(),
    )
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::sync::Mutex;

    // Serializes env-var mutation across tests.
    static ENV_MUTEX: Mutex<()> = Mutex::new(());

    #[test]
    fn platform_dirs_end_with_the_app_name() {
        let _lock = ENV_MUTEX.lock().unwrap();
        std::env::remove_var(ENV_DATA_DIR);
        std::env::remove_var(ENV_CONFIG_DIR);

        for dir in [
            get_app_data_dir(),
            get_app_config_dir_with_override(None),
        ]
        .into_iter()
        .flatten()
        {
            assert!(dir.is_absolute());
            assert!(dir.to_string_lossy().contains(APP_NAME));
        }
    }

    #[test]
    fn explicit_override_wins_over_everything() {
        let _lock = ENV_MUTEX.lock().unwrap();
        std::env::set_var(ENV_DATA_DIR, "/from/env");

        let wanted = PathBuf::from("/from/override");
        assert_eq!(
            get_app_data_dir_with_override(Some(wanted.clone())),
            Some(wanted)
        );

        std::env::remove_var(ENV_DATA_DIR);
    }

    #[test]
    fn env_var_redirects_the_data_dir() {
        let _lock = ENV_MUTEX.lock().unwrap();
        std::env::set_var(ENV_DATA_DIR, "/env/data");

        assert_eq!(get_app_data_dir(), Some(PathBuf::from("/env/data")));

        std::env::remove_var(ENV_DATA_DIR);
    }

    #[test]
    fn env_var_redirects_the_config_dir() {
        let _lock = ENV_MUTEX.lock().unwrap();
        std::env::set_var(ENV_CONFIG_DIR, "/env/config");

        assert_eq!(
            get_app_config_dir_with_override(None),
            Some(PathBuf::from("/env/config"))
        );

        std::env::remove_var(ENV_CONFIG_DIR);
    }

    #[test]
    fn empty_env_var_counts_as_unset() {
        let _lock = ENV_MUTEX.lock().unwrap();
        std::env::set_var(ENV_DATA_DIR, "");

        if let Some(dir) = get_app_data_dir() {
            assert!(dir.to_string_lossy().contains(APP_NAME));
        }

        std::env::remove_var(ENV_DATA_DIR);
    }
}
