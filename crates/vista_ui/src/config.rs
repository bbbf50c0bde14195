//! Library-wide defaults shared through Leptos context.

use leptos::*;
use serde::{Deserialize, Serialize};

use crate::{ConfigError, Density, DEFAULT_THEME};

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
/// Defaults applied to components that leave the corresponding prop unset.
pub struct UiConfig {
    /// Theme name used when no prop or [`crate::ThemeProvider`] supplies one.
    pub theme: String,
    /// Density used when a component's `density` prop is unset.
    pub density: Density,
    /// Enables ripple effects on clickable components.
    pub ripple: bool,
}

impl Default for UiConfig {
    fn default() -> Self {
        Self {
            theme: DEFAULT_THEME.to_string(),
            density: Density::Default,
            ripple: true,
        }
    }
}

impl UiConfig {
    /// Parses a JSON document; missing fields keep their defaults.
    ///
    /// # Errors
    ///
    /// Returns [`ConfigError::Parse`] for malformed JSON or rejected field values.
    pub fn from_json(raw: &str) -> Result<Self, ConfigError> {
        Ok(serde_json::from_str(raw)?)
    }

    /// Like [`UiConfig::from_json`], but warns and returns defaults on failure.
    pub fn from_json_or_default(raw: &str) -> Self {
        Self::from_json(raw).unwrap_or_else(|err| {
            logging::warn!("{err}");
            Self::default()
        })
    }
}

#[component]
/// Provides a [`UiConfig`] to every descendant component.
pub fn UiProvider(#[prop(optional)] config: Option<UiConfig>, children: Children) -> impl IntoView {
    provide_context(config.unwrap_or_default());
    children()
}

/// Returns the nearest provided [`UiConfig`], or defaults.
pub fn use_ui_config() -> UiConfig {
    use_context::<UiConfig>().unwrap_or_default()
}
