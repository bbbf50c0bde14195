//! Leptos list and avatar components built from reusable visual-concern composables.
//!
//! Each concern (theme, color, variant, border, density, dimension, elevation, rounding, tag,
//! and routing links) is a small props type plus a pure derivation into class names and inline
//! styles. Components such as [`ListItem`] combine those derivations behind reactive signals and
//! expose named slots for custom content. Library-wide defaults come from [`UiConfig`].

#![warn(missing_docs, rustdoc::broken_intra_doc_links)]

mod composables;
mod config;
mod error;
mod primitives;
pub mod ripple;

pub use composables::{
    border_classes, density_classes, dimension_styles, elevation_classes, is_css_color,
    rounded_classes, theme_classes, use_color, use_link, use_theme, use_variant, variant_classes,
    Border, ClassList, ColorInput, ColorSignals, ColorState, ColorTarget, Density, DimensionProps,
    ElevationLevel, Length, LinkState, Rounded, RouterProps, StyleMap, Tag, ThemeContext,
    ThemeProvider, UseLink, UseVariant, Variant, VariantProps, VariantState, DEFAULT_THEME,
    MAX_ELEVATION,
};
pub use config::{use_ui_config, UiConfig, UiProvider};
pub use error::{ConfigError, PropError};
pub use primitives::{
    avatar_content, icon_classes, AppendSlot, Avatar, AvatarContent, AvatarOptions, AvatarState,
    Icon, ListItem, ListItemAvatar, ListItemHeader, ListItemLayout, ListItemInput, ListItemSlots,
    ListItemState, ListItemSubtitle, ListItemTitle, PrependSlot, SubtitleSlot, TitleSlot,
    LIST_ITEM_CLASS,
};

/// Convenience imports for application crates consuming the component set.
pub mod prelude {
    pub use crate::{
        AppendSlot, Avatar, Border, Density, ElevationLevel, Icon, Length, ListItem,
        ListItemAvatar, ListItemHeader, ListItemSubtitle, ListItemTitle, PrependSlot, Rounded,
        SubtitleSlot, Tag, ThemeProvider, TitleSlot, UiConfig, UiProvider, Variant,
    };
}
