// SPDX-License-Identifier: MPL-2.0
//! User preferences, stored as `settings.toml` in the config directory.
//!
//! The file is split into sections: `[general]` holds the UI language and
//! theme, `[document]` the defaults applied to newly created documents and
//! `[editor]` the autosave switch. Flat files written by releases before
//! 0.2.0 are migrated on load and rewritten in the sectioned format on the
//! next save.

pub mod defaults;

pub use defaults::*;

use crate::app::paths;
use crate::error::Result;
use crate::project::{DocumentLanguage, DocumentSettings, Layout};
use crate::ui::theming::ThemeMode;
use serde::{Deserialize, Serialize};
use std::fs;
use std::path::{Path, PathBuf};

const CONFIG_FILE: &str = "settings.toml";

/// `[general]`: interface language and theme.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct GeneralConfig {
    /// UI locale code such as "pl" or "en-US"; `None` follows the system.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub language: Option<String>,

    #[serde(
        default = "default_theme_mode",
        deserialize_with = "deserialize_theme_mode"
    )]
    pub theme_mode: ThemeMode,
}

impl Default for GeneralConfig {
    fn default() -> Self {
        Self {
            language: None,
            theme_mode: default_theme_mode(),
        }
    }
}

/// `[document]`: defaults for newly created documents.
///
/// Mirrors [`DocumentSettings`] field by field. A project carries its own
/// copy once created, so editing these affects new documents only.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct DocumentConfig {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub layout: Option<Layout>,

    /// Embedded image width in centimeters.
    #[serde(
        default = "default_image_width_cm",
        skip_serializing_if = "Option::is_none"
    )]
    pub image_width_cm: Option<f32>,

    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub font_family: Option<String>,

    /// Body font size in points.
    #[serde(default = "default_font_size", skip_serializing_if = "Option::is_none")]
    pub font_size: Option<u16>,

    /// Language the generated document is written in.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub language: Option<DocumentLanguage>,
}

impl Default for DocumentConfig {
    fn default() -> Self {
        Self {
            layout: Some(Layout::default()),
            image_width_cm: default_image_width_cm(),
            font_family: Some(DEFAULT_FONT_FAMILY.to_string()),
            font_size: default_font_size(),
            language: Some(DocumentLanguage::default()),
        }
    }
}

impl DocumentConfig {
    /// Materializes the configured defaults as document settings, filling
    /// gaps from [`DocumentSettings::default`].
    #[must_use]
    pub fn document_settings(&self) -> DocumentSettings {
        let base = DocumentSettings::default();
        DocumentSettings {
            layout: self.layout.unwrap_or(base.layout),
            image_width_cm: self.image_width_cm.unwrap_or(base.image_width_cm),
            font_family: self
                .font_family
                .clone()
                .unwrap_or_else(|| base.font_family.clone()),
            font_size: self.font_size.unwrap_or(base.font_size),
            language: self.language.unwrap_or(base.language),
        }
    }
}

/// `[editor]`: editor behavior.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct EditorConfig {
    /// Whether the working project is autosaved periodically.
    #[serde(
        default = "default_autosave_enabled",
        skip_serializing_if = "Option::is_none"
    )]
    pub autosave_enabled: Option<bool>,
}

impl Default for EditorConfig {
    fn default() -> Self {
        Self {
            autosave_enabled: default_autosave_enabled(),
        }
    }
}

/// The whole settings file.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Default)]
pub struct Config {
    #[serde(default)]
    pub general: GeneralConfig,

    #[serde(default)]
    pub document: DocumentConfig,

    #[serde(default)]
    pub editor: EditorConfig,
}

/// Flat file layout written before 0.2.0, kept for migration.
#[derive(Debug, Deserialize)]
struct LegacyConfig {
    language: Option<String>,
    #[serde(
        default = "default_theme_mode",
        deserialize_with = "deserialize_theme_mode"
    )]
    theme_mode: ThemeMode,
    #[serde(default)]
    layout: Option<Layout>,
    #[serde(default)]
    image_width_cm: Option<f32>,
    #[serde(default)]
    font_family: Option<String>,
    #[serde(default)]
    font_size: Option<u16>,
    #[serde(default)]
    document_language: Option<DocumentLanguage>,
    #[serde(default = "default_autosave_enabled")]
    autosave_enabled: Option<bool>,
}

impl From<LegacyConfig> for Config {
    fn from(flat: LegacyConfig) -> Self {
        Config {
            general: GeneralConfig {
                language: flat.language,
                theme_mode: flat.theme_mode,
            },
            document: DocumentConfig {
                layout: flat.layout,
                image_width_cm: flat.image_width_cm,
                font_family: flat.font_family,
                font_size: flat.font_size,
                language: flat.document_language,
            },
            editor: EditorConfig {
                autosave_enabled: flat.autosave_enabled,
            },
        }
    }
}

fn default_theme_mode() -> ThemeMode {
    ThemeMode::System
}

fn default_image_width_cm() -> Option<f32> {
    Some(DEFAULT_IMAGE_WIDTH_CM)
}

fn default_font_size() -> Option<u16> {
    Some(DEFAULT_FONT_SIZE_PT)
}

fn default_autosave_enabled() -> Option<bool> {
    Some(DEFAULT_AUTOSAVE_ENABLED)
}

/// Case-insensitive so hand-edited files with "Dark" or "LIGHT" still load.
fn deserialize_theme_mode<'de, D>(deserializer: D) -> std::result::Result<ThemeMode, D::Error>
where
    D: serde::Deserializer<'de>,
{
    let raw = String::deserialize(deserializer)?.to_ascii_lowercase();
    match raw.as_str() {
        "light" => Ok(ThemeMode::Light),
        "dark" => Ok(ThemeMode::Dark),
        "system" => Ok(ThemeMode::System),
        other => Err(serde::de::Error::custom(format!(
            "invalid theme_mode: {other}"
        ))),
    }
}

fn config_file_path(base_dir: Option<PathBuf>) -> Option<PathBuf> {
    paths::get_app_config_dir_with_override(base_dir).map(|dir| dir.join(CONFIG_FILE))
}

/// Loads from the default config directory.
///
/// The warning half of the tuple is a Fluent key; a broken file yields
/// defaults plus the warning rather than aborting startup.
pub fn load() -> (Config, Option<String>) {
    load_with_override(None)
}

/// Loads from `base_dir` when given, otherwise from the resolved config
/// directory. A missing file silently yields defaults.
pub fn load_with_override(base_dir: Option<PathBuf>) -> (Config, Option<String>) {
    let Some(path) = config_file_path(base_dir) else {
        return (Config::default(), None);
    };
    if !path.exists() {
        return (Config::default(), None);
    }
    match load_from_path(&path) {
        Ok(config) => (config, None),
        Err(_) => (
            Config::default(),
            Some("notification-config-load-error".to_string()),
        ),
    }
}

/// Reads and parses a settings file, migrating the pre-0.2.0 flat layout
/// when the file carries no section tables.
pub fn load_from_path(path: &Path) -> Result<Config> {
    let content = fs::read_to_string(path)?;

    if has_section_tables(&content) {
        return Ok(toml::from_str(&content)?);
    }
    match toml::from_str::<LegacyConfig>(&content) {
        Ok(flat) => Ok(flat.into()),
        Err(_) => Ok(toml::from_str(&content)?),
    }
}

fn has_section_tables(content: &str) -> bool {
    ["[general]", "[document]", "[editor]"]
        .iter()
        .any(|table| content.contains(table))
}

/// Saves to the default config directory.
pub fn save(config: &Config) -> Result<()> {
    save_with_override(config, None)
}

/// Saves to `base_dir` when given. A missing config directory is not an
/// error; the preferences are simply not persisted.
pub fn save_with_override(config: &Config, base_dir: Option<PathBuf>) -> Result<()> {
    match config_file_path(base_dir) {
        Some(path) => save_to_path(config, &path),
        None => Ok(()),
    }
}

/// Writes the sectioned TOML to `path`, creating parent directories.
pub fn save_to_path(config: &Config, path: &Path) -> Result<()> {
    if let Some(parent) = path.parent() {
        fs::create_dir_all(parent)?;
    }
    fs::write(path, toml::to_string_pretty(config)?)?;
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::error::Error;
    use tempfile::{tempdir, TempDir};

    fn dir_with_settings(content: &str) -> (TempDir, PathBuf) {
        let dir = tempdir().expect("create temp dir");
        let path = dir.path().join(CONFIG_FILE);
        fs::write(&path, content).expect("write settings file");
        (dir, path)
    }

    fn custom_config() -> Config {
        Config {
            general: GeneralConfig {
                language: Some("pl".to_string()),
                theme_mode: ThemeMode::Light,
            },
            document: DocumentConfig {
                layout: Some(Layout::ImageTop),
                image_width_cm: Some(6.5),
                font_family: Some("Arial".to_string()),
                font_size: Some(12),
                language: Some(DocumentLanguage::En),
            },
            editor: EditorConfig {
                autosave_enabled: Some(false),
            },
        }
    }

    #[test]
    fn round_trip_keeps_every_section() {
        let dir = tempdir().expect("create temp dir");
        let path = dir.path().join("nested").join(CONFIG_FILE);

        let config = custom_config();
        save_to_path(&config, &path).expect("save config");
        let loaded = load_from_path(&path).expect("load config");

        assert_eq!(loaded, config);
        assert!(path.exists());
    }

    #[test]
    fn syntax_errors_surface_as_config_errors() {
        let (_dir, path) = dir_with_settings("theme_mode = = \"dark\"");

        match load_from_path(&path) {
            Err(Error::Config(message)) => assert!(!message.is_empty()),
            other => panic!("expected Config error, got {other:?}"),
        }
    }

    #[test]
    fn defaults_favor_polish_manuals() {
        let config = Config::default();
        assert_eq!(config.general.theme_mode, ThemeMode::System);
        assert_eq!(config.document.layout, Some(Layout::ImageLeft));
        assert_eq!(config.document.image_width_cm, Some(DEFAULT_IMAGE_WIDTH_CM));
        assert_eq!(
            config.document.font_family.as_deref(),
            Some(DEFAULT_FONT_FAMILY)
        );
        assert_eq!(config.document.font_size, Some(DEFAULT_FONT_SIZE_PT));
        assert_eq!(config.document.language, Some(DocumentLanguage::Pl));
        assert_eq!(config.editor.autosave_enabled, Some(true));
    }

    #[test]
    fn document_settings_fill_gaps_from_defaults() {
        let partial = DocumentConfig {
            layout: Some(Layout::ImageBottom),
            image_width_cm: Some(5.0),
            font_family: None,
            font_size: Some(14),
            language: None,
        };

        let settings = partial.document_settings();
        assert_eq!(settings.layout, Layout::ImageBottom);
        assert_eq!(settings.image_width_cm, 5.0);
        assert_eq!(settings.font_family, DEFAULT_FONT_FAMILY);
        assert_eq!(settings.font_size, 14);
        assert_eq!(settings.language, DocumentLanguage::Pl);
    }

    #[test]
    fn font_presets_include_the_default() {
        assert!(MIN_FONT_SIZE_PT < MAX_FONT_SIZE_PT);
        assert!(FONT_FAMILY_PRESETS.contains(&DEFAULT_FONT_FAMILY));
    }

    #[test]
    fn override_round_trip_uses_the_given_directory() {
        let dir = tempdir().expect("create temp dir");
        let base = dir.path().to_path_buf();

        save_with_override(&custom_config(), Some(base.clone())).expect("save config");
        assert!(base.join(CONFIG_FILE).exists());

        let (loaded, warning) = load_with_override(Some(base));
        assert!(warning.is_none());
        assert_eq!(loaded, custom_config());
    }

    #[test]
    fn missing_file_yields_defaults_silently() {
        let dir = tempdir().expect("create temp dir");
        let (config, warning) = load_with_override(Some(dir.path().to_path_buf()));
        assert!(warning.is_none());
        assert_eq!(config, Config::default());
    }

    #[test]
    fn broken_file_yields_defaults_with_a_warning() {
        let (dir, _path) = dir_with_settings("font_size = = 12");

        let (config, warning) = load_with_override(Some(dir.path().to_path_buf()));
        assert_eq!(warning.as_deref(), Some("notification-config-load-error"));
        assert_eq!(config, Config::default());
    }

    #[test]
    fn theme_mode_parsing_ignores_case() {
        let (_dir, path) = dir_with_settings("[general]\ntheme_mode = \"Dark\"\n");
        let loaded = load_from_path(&path).expect("load config");
        assert_eq!(loaded.general.theme_mode, ThemeMode::Dark);
    }

    #[test]
    fn flat_pre_sectioned_files_migrate_on_load() {
        let (_dir, path) = dir_with_settings(
            r#"
language = "pl"
theme_mode = "dark"
layout = "image_top"
image_width_cm = 7.5
font_family = "Arial"
font_size = 12
document_language = "en"
autosave_enabled = false
"#,
        );

        let migrated = load_from_path(&path).expect("load flat config");

        assert_eq!(migrated.general.language.as_deref(), Some("pl"));
        assert_eq!(migrated.general.theme_mode, ThemeMode::Dark);
        assert_eq!(migrated.document.layout, Some(Layout::ImageTop));
        assert_eq!(migrated.document.image_width_cm, Some(7.5));
        assert_eq!(migrated.document.font_family.as_deref(), Some("Arial"));
        assert_eq!(migrated.document.font_size, Some(12));
        assert_eq!(migrated.document.language, Some(DocumentLanguage::En));
        assert_eq!(migrated.editor.autosave_enabled, Some(false));
    }

    #[test]
    fn sectioned_files_load_without_migration() {
        let (_dir, path) = dir_with_settings(
            r#"
[general]
language = "en-US"
theme_mode = "light"

[document]
layout = "image_bottom"
font_family = "Verdana"

[editor]
autosave_enabled = true
"#,
        );

        let loaded = load_from_path(&path).expect("load sectioned config");

        assert_eq!(loaded.general.language.as_deref(), Some("en-US"));
        assert_eq!(loaded.general.theme_mode, ThemeMode::Light);
        assert_eq!(loaded.document.layout, Some(Layout::ImageBottom));
        assert_eq!(loaded.document.font_family.as_deref(), Some("Verdana"));
        assert_eq!(loaded.editor.autosave_enabled, Some(true));
    }

    #[test]
    fn resaving_a_flat_file_upgrades_it() {
        let (_dir, path) = dir_with_settings("language = \"pl\"\nfont_size = 13\n");

        let migrated = load_from_path(&path).expect("load flat config");
        assert_eq!(migrated.document.font_size, Some(13));

        save_to_path(&migrated, &path).expect("resave config");

        let written = fs::read_to_string(&path).expect("read settings file");
        for table in ["[general]", "[document]", "[editor]"] {
            assert!(written.contains(table), "missing {table}");
        }
        assert!(written.contains("language = \"pl\""));
    }
}
