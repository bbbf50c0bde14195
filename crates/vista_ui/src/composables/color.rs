use leptos::*;

use super::{present, ClassList, StyleMap};

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
/// Which part of an element a color is applied to.
pub enum ColorTarget {
    /// Element background.
    Background,
    /// Foreground text.
    Text,
}

impl ColorTarget {
    /// Stable token used in logs and data attributes.
    pub fn token(self) -> &'static str {
        match self {
            Self::Background => "background",
            Self::Text => "text",
        }
    }
}

#[derive(Debug, Clone, Default, PartialEq, Eq)]
/// Background and text colors requested by a component.
pub struct ColorInput {
    /// Background color, either a theme color name or a CSS color.
    pub background: Option<String>,
    /// Text color, either a theme color name or a CSS color.
    pub text: Option<String>,
}

impl ColorInput {
    /// Builds an input that assigns `color` to a single `target`.
    pub fn for_target(target: ColorTarget, color: Option<String>) -> Self {
        match target {
            ColorTarget::Background => Self {
                background: color,
                text: None,
            },
            ColorTarget::Text => Self {
                background: None,
                text: color,
            },
        }
    }
}

/// Returns `true` for literal CSS colors (hex, `rgb()`, `hsl()`, or custom properties).
///
/// Anything else is treated as a theme color name and turned into a class.
pub fn is_css_color(value: &str) -> bool {
    ["#", "var(--", "rgb(", "rgba(", "hsl(", "hsla("]
        .iter()
        .any(|prefix| value.starts_with(prefix))
}

#[derive(Debug, Clone, Default, PartialEq, Eq)]
/// Classes and inline styles derived from a [`ColorInput`].
pub struct ColorState {
    /// `bg-*`/`text-*` classes for theme color names.
    pub classes: ClassList,
    /// Inline declarations for literal CSS colors.
    pub styles: StyleMap,
}

impl ColorState {
    /// Splits the requested colors into classes and inline styles.
    pub fn resolve(input: &ColorInput) -> Self {
        let mut state = Self::default();
        if let Some(background) = present(&input.background) {
            if is_css_color(background) {
                state.styles.set("background-color", background);
            } else {
                state.classes.push(format!("bg-{background}"));
            }
        }
        if let Some(text) = present(&input.text) {
            if is_css_color(text) {
                state.styles.set("color", text);
                state.styles.set("caret-color", text);
            } else {
                state.classes.push(format!("text-{text}"));
            }
        }
        state
    }
}

#[derive(Debug, Clone, Copy)]
/// Reactive color classes and styles.
pub struct ColorSignals {
    /// Derived color classes.
    pub classes: Signal<ClassList>,
    /// Derived inline color styles.
    pub styles: Signal<StyleMap>,
}

/// Tracks `input` and re-resolves colors whenever the signals it reads change.
pub fn use_color(input: impl Fn() -> ColorInput + 'static) -> ColorSignals {
    let state = create_memo(move |_| ColorState::resolve(&input()));
    ColorSignals {
        classes: Signal::derive(move || state.with(|state| state.classes.clone())),
        styles: Signal::derive(move || state.with(|state| state.styles.clone())),
    }
}
