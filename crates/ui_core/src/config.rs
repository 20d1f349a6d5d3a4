//! Application-level UI configuration and the translation hook.
//!
//! The configuration is assembled once at startup and handed to the rendering layer, which
//! provides it to components through context. Nothing here is process-global.

use std::borrow::Cow;
use std::collections::BTreeMap;

use serde::{Deserialize, Serialize};

use crate::ConfigError;

/// Source strings the components render when no translation overrides them.
pub mod messages {
    /// Accessible label for the mobile sidebar open button.
    pub const OPEN_SIDEBAR: &str = "Open sidebar";
    /// Accessible label for the mobile sidebar close button.
    pub const CLOSE_SIDEBAR: &str = "Close sidebar";
    /// Accessible label for the sidebar navigation landmark.
    pub const SIDEBAR_NAVIGATION: &str = "Sidebar navigation";
    /// Accessible label for the navbar navigation landmark.
    pub const MAIN_NAVIGATION: &str = "Main navigation";
    /// Accessible label for the breadcrumb landmark.
    pub const BREADCRUMB: &str = "Breadcrumb";
    /// Accessible label for a dropdown trigger without visible text.
    pub const OPEN_MENU: &str = "Open menu";
    /// Loading indicator text for busy buttons.
    pub const LOADING: &str = "Loading";
}

/// Translation backend for user-facing static text.
pub trait Translator {
    /// Returns the display text for `source`, falling back to `source` itself.
    fn translate<'a>(&'a self, source: &'a str) -> Cow<'a, str>;
}

#[derive(Debug, Clone, Copy, Default)]
/// Backend that renders every source string untouched.
pub struct SourceText;

impl Translator for SourceText {
    fn translate<'a>(&'a self, source: &'a str) -> Cow<'a, str> {
        Cow::Borrowed(source)
    }
}

const DEFAULT_LOCALE: &str = "en";

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
/// Startup configuration shared by every component.
pub struct UiConfig {
    /// BCP 47 tag of the active locale, written to the document `lang` attribute.
    pub locale: String,
    /// Collapse every transition to zero duration.
    pub reduced_motion: bool,
    /// Translation overrides keyed by source string.
    pub messages: BTreeMap<String, String>,
}

impl Default for UiConfig {
    fn default() -> Self {
        Self {
            locale: DEFAULT_LOCALE.to_string(),
            reduced_motion: false,
            messages: BTreeMap::new(),
        }
    }
}

impl UiConfig {
    /// Parses a JSON configuration document. Missing fields take their defaults.
    ///
    /// # Errors
    ///
    /// Returns [`ConfigError::InvalidConfig`] when the document is not valid configuration JSON.
    pub fn from_json(raw: &str) -> Result<Self, ConfigError> {
        serde_json::from_str(raw).map_err(|err| ConfigError::InvalidConfig(err.to_string()))
    }

    /// Value for the document `lang` attribute. A blank locale falls back to `en`.
    pub fn lang(&self) -> &str {
        match self.locale.trim() {
            "" => DEFAULT_LOCALE,
            locale => locale,
        }
    }

    /// Adds or replaces one translation override.
    pub fn with_message(mut self, source: impl Into<String>, text: impl Into<String>) -> Self {
        self.messages.insert(source.into(), text.into());
        self
    }

    /// Enables or disables reduced motion.
    pub fn with_reduced_motion(mut self, enabled: bool) -> Self {
        self.reduced_motion = enabled;
        self
    }
}

impl Translator for UiConfig {
    fn translate<'a>(&'a self, source: &'a str) -> Cow<'a, str> {
        match self.messages.get(source) {
            Some(text) => Cow::Borrowed(text.as_str()),
            None => Cow::Borrowed(source),
        }
    }
}

#[cfg(test)]
mod tests {
    use pretty_assertions::assert_eq;

    use super::*;

    #[test]
    fn partial_json_keeps_defaults() {
        let config = UiConfig::from_json(r#"{ "reduced_motion": true }"#).expect("parse");
        assert!(config.reduced_motion);
        assert_eq!(config.locale, "en");
        assert!(config.messages.is_empty());
    }

    #[test]
    fn lang_uses_the_configured_locale_and_falls_back_when_blank() {
        let config = UiConfig::from_json(r#"{ "locale": " fr-CA " }"#).expect("parse");
        assert_eq!(config.lang(), "fr-CA");
        let blank = UiConfig::from_json(r#"{ "locale": "" }"#).expect("parse");
        assert_eq!(blank.lang(), "en");
    }

    #[test]
    fn malformed_json_is_a_config_error() {
        let err = UiConfig::from_json("{ reduced_motion: yes").unwrap_err();
        assert!(matches!(err, ConfigError::InvalidConfig(_)));
    }

    #[test]
    fn overrides_replace_source_text_and_unknown_strings_fall_back() {
        let config = UiConfig::default().with_message(messages::CLOSE_SIDEBAR, "Fermer");
        assert_eq!(config.translate(messages::CLOSE_SIDEBAR), "Fermer");
        assert_eq!(config.translate(messages::BREADCRUMB), "Breadcrumb");
        assert_eq!(SourceText.translate("Anything"), "Anything");
    }
}
