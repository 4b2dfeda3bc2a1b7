// SPDX-License-Identifier: MPL-2.0
//! Configuration and state persistence logic.
//!
//! This module handles saving user preferences and window state to disk,
//! including theme, language, document defaults and last-used directories.

use crate::app::config::{self, Config};
use crate::app::persisted_state::AppState;
use crate::i18n::fluent::I18n;
use crate::ui::notifications::{Manager, Notification};
use unic_langid::LanguageIdentifier;

/// Persists the current configuration to disk.
///
/// Guarded during tests to keep isolation: unit tests exercise the logic by
/// mutating the in-memory [`Config`] and asserting on it directly.
pub fn persist_config(cfg: &Config, notifications: &mut Manager) {
    if cfg!(test) {
        return;
    }

    if let Err(error) = config::save(cfg) {
        eprintln!("Failed to save config: {:?}", error);
        notifications.push(Notification::warning("notification-config-save-error"));
    }
}

/// Applies the newly selected locale and persists it to config.
pub fn apply_language_change(
    i18n: &mut I18n,
    cfg: &mut Config,
    locale: LanguageIdentifier,
    notifications: &mut Manager,
) {
    i18n.set_locale(locale.clone());
    cfg.general.language = Some(locale.to_string());
    persist_config(cfg, notifications);
}

/// Persists the application state (last-used directories) to disk.
pub fn persist_app_state(state: &AppState, notifications: &mut Manager) {
    if cfg!(test) {
        return;
    }

    if let Some(warning_key) = state.save() {
        notifications.push(Notification::warning(warning_key));
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::i18n::fluent::I18n;

    #[test]
    fn language_change_updates_locale_and_config() {
        let mut i18n = I18n::default();
        let mut cfg = Config::default();
        let mut notifications = Manager::new();
        let locale: LanguageIdentifier = "pl".parse().unwrap();

        apply_language_change(&mut i18n, &mut cfg, locale, &mut notifications);

        assert_eq!(cfg.general.language.as_deref(), Some("pl"));
        assert_eq!(i18n.current_locale().to_string(), "pl");
    }

    #[test]
    fn persist_config_is_noop_in_tests() {
        let cfg = Config::default();
        let mut notifications = Manager::new();
        persist_config(&cfg, &mut notifications);
        assert!(!notifications.has_notifications());
    }
}
