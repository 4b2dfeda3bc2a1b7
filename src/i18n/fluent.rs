use crate::app::config::Config;
use fluent_bundle::{FluentArgs, FluentBundle, FluentResource};
use rust_embed::RustEmbed;
use std::collections::HashMap;
use unic_langid::LanguageIdentifier;

#[derive(RustEmbed)]
#[folder = "assets/i18n/"]
struct Locales;

/// Message catalog backed by the embedded `.ftl` files, one bundle per
/// locale. The active locale can change at runtime via [`I18n::set_locale`].
pub struct I18n {
    bundles: HashMap<LanguageIdentifier, FluentBundle<FluentResource>>,
    /// Locales with an embedded catalog, sorted, for the settings picker.
    pub available_locales: Vec<LanguageIdentifier>,
    current_locale: LanguageIdentifier,
}

impl Default for I18n {
    fn default() -> Self {
        Self::new(None, &Config::default())
    }
}

impl I18n {
    /// Loads every embedded catalog and picks the startup locale: CLI flag
    /// first, then the configured language, then the OS locale, then en-US.
    pub fn new(cli_lang: Option<String>, config: &Config) -> Self {
        let mut bundles = HashMap::new();
        for file in Locales::iter() {
            let Some(stem) = file.strip_suffix(".ftl") else {
                continue;
            };
            let Ok(locale) = stem.parse::<LanguageIdentifier>() else {
                continue;
            };
            let Some(embedded) = Locales::get(&file) else {
                continue;
            };

            let source = String::from_utf8_lossy(&embedded.data).into_owned();
            let resource = FluentResource::try_new(source).expect("embedded FTL must parse");
            let mut bundle = FluentBundle::new(vec![locale.clone()]);
            // Isolation marks garble plain-text UI labels
            bundle.set_use_isolating(false);
            bundle
                .add_resource(resource)
                .expect("embedded FTL has conflicting messages");
            bundles.insert(locale, bundle);
        }

        let mut available_locales: Vec<_> = bundles.keys().cloned().collect();
        available_locales.sort();

        let current_locale = pick_locale(cli_lang, config, &available_locales)
            .unwrap_or_else(|| "en-US".parse().expect("static locale"));

        Self {
            bundles,
            available_locales,
            current_locale,
        }
    }

    /// Switches the active locale. Locales without a catalog are ignored.
    pub fn set_locale(&mut self, locale: LanguageIdentifier) {
        if self.bundles.contains_key(&locale) {
            self.current_locale = locale;
        }
    }

    pub fn current_locale(&self) -> &LanguageIdentifier {
        &self.current_locale
    }

    pub fn tr(&self, key: &str) -> String {
        self.lookup(key, None)
            .unwrap_or_else(|| format!("MISSING: {key}"))
    }

    /// Translates a message with arguments, e.g. `tr_args("step-progress",
    /// &[("current", "2"), ("total", "5")])`.
    pub fn tr_args(&self, key: &str, args: &[(&str, String)]) -> String {
        let mut fluent_args = FluentArgs::new();
        for (name, value) in args {
            fluent_args.set(*name, value.as_str());
        }
        self.lookup(key, Some(&fluent_args))
            .unwrap_or_else(|| format!("MISSING: {key}"))
    }

    fn lookup(&self, key: &str, args: Option<&FluentArgs>) -> Option<String> {
        let bundle = self.bundles.get(&self.current_locale)?;
        let pattern = bundle.get_message(key)?.value()?;
        let mut errors = Vec::new();
        let text = bundle.format_pattern(pattern, args, &mut errors);
        if errors.is_empty() {
            Some(text.into_owned())
        } else {
            None
        }
    }
}

/// First requested language that actually has a catalog, trying the CLI
/// flag, the config file and the OS locale in that order.
fn pick_locale(
    cli_lang: Option<String>,
    config: &Config,
    available: &[LanguageIdentifier],
) -> Option<LanguageIdentifier> {
    cli_lang
        .into_iter()
        .chain(config.general.language.clone())
        .chain(sys_locale::get_locale())
        .filter_map(|tag| tag.parse::<LanguageIdentifier>().ok())
        .find(|locale| available.contains(locale))
}
