use std::{fmt, str::FromStr};

use leptos::*;
use serde::{Deserialize, Serialize};

use super::{ClassList, ColorInput, ColorState, ColorTarget, StyleMap};
use crate::PropError;

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
/// Closed set of visual treatments controlling where a component's color is applied.
pub enum Variant {
    /// Standard treatment; color tints the text.
    #[default]
    Default,
    /// Filled treatment; color fills the background.
    Contained,
    /// Outlined treatment; color tints the text and outline.
    Outlined,
    /// Text-only treatment.
    Text,
}

impl Variant {
    /// Every accepted variant, in declaration order.
    pub const ALL: [Variant; 4] = [
        Variant::Default,
        Variant::Contained,
        Variant::Outlined,
        Variant::Text,
    ];

    /// Stable token used in class names.
    pub fn token(self) -> &'static str {
        match self {
            Self::Default => "default",
            Self::Contained => "contained",
            Self::Outlined => "outlined",
            Self::Text => "text",
        }
    }

    /// Only `contained` paints the background; every other variant tints text.
    pub fn color_target(self) -> ColorTarget {
        match self {
            Self::Contained => ColorTarget::Background,
            Self::Default | Self::Outlined | Self::Text => ColorTarget::Text,
        }
    }

    /// Parses `raw`, warning and falling back to [`Variant::Default`] when it is rejected.
    pub fn parse_or_default(raw: &str) -> Self {
        raw.parse().unwrap_or_else(|err: PropError| {
            logging::warn!("{err}");
            Self::default()
        })
    }
}

impl fmt::Display for Variant {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.token())
    }
}

impl FromStr for Variant {
    type Err = PropError;

    fn from_str(raw: &str) -> Result<Self, Self::Err> {
        Self::ALL
            .into_iter()
            .find(|variant| variant.token() == raw)
            .ok_or_else(|| PropError::InvalidVariant(raw.to_string()))
    }
}

impl TryFrom<&str> for Variant {
    type Error = PropError;

    fn try_from(raw: &str) -> Result<Self, Self::Error> {
        raw.parse()
    }
}

#[derive(Debug, Clone, Default, PartialEq, Eq)]
/// Props shared by every component that supports variants.
pub struct VariantProps {
    /// Theme color name or CSS color.
    pub color: Option<String>,
    /// Visual treatment.
    pub variant: Variant,
}

/// Builds the `<name>--variant-<variant>` class.
pub fn variant_classes(variant: Variant, name: &str) -> String {
    format!("{name}--variant-{}", variant.token())
}

#[derive(Debug, Clone, Default, PartialEq, Eq)]
/// Snapshot of everything derived from [`VariantProps`].
pub struct VariantState {
    /// The variant class.
    pub variant_classes: String,
    /// Color classes and styles, targeted according to the variant.
    pub color: ColorState,
}

impl VariantState {
    /// Derives variant and color output for the component named `name`.
    pub fn derive(props: &VariantProps, name: &str) -> Self {
        Self {
            variant_classes: variant_classes(props.variant, name),
            color: ColorState::resolve(&ColorInput::for_target(
                props.variant.color_target(),
                props.color.clone(),
            )),
        }
    }
}

#[derive(Debug, Clone, Copy)]
/// Reactive outputs of [`use_variant`].
pub struct UseVariant {
    /// Color classes.
    pub color_classes: Signal<ClassList>,
    /// Inline color styles.
    pub color_styles: Signal<StyleMap>,
    /// The variant class.
    pub variant_classes: Signal<String>,
}

/// Derives variant and color output that tracks `props`.
pub fn use_variant(props: impl Into<MaybeSignal<VariantProps>>, name: &'static str) -> UseVariant {
    let props = props.into();
    let state = create_memo(move |_| props.with(|props| VariantState::derive(props, name)));
    UseVariant {
        color_classes: Signal::derive(move || state.with(|state| state.color.classes.clone())),
        color_styles: Signal::derive(move || state.with(|state| state.color.styles.clone())),
        variant_classes: Signal::derive(move || state.with(|state| state.variant_classes.clone())),
    }
}
