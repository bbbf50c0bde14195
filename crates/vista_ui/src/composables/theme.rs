use leptos::*;

use super::ClassList;
use crate::{config::use_ui_config, primitives::merge_layout_class};

/// Theme used when neither a prop, a provider, nor [`crate::UiConfig`] names one.
pub const DEFAULT_THEME: &str = "light";

#[derive(Debug, Clone, Copy)]
/// Theme name inherited by descendants of a [`ThemeProvider`].
pub struct ThemeContext {
    /// Active theme name.
    pub name: Signal<String>,
}

/// Builds the `ui-theme--<name>` class.
pub fn theme_classes(name: &str) -> ClassList {
    ClassList::from_iter([format!("ui-theme--{name}")])
}

/// Picks the component's own theme, then the inherited one, then `fallback`.
pub(crate) fn resolve_theme(own: Option<&str>, inherited: Option<String>, fallback: &str) -> String {
    own.filter(|name| !name.is_empty())
        .map(str::to_string)
        .or(inherited.filter(|name| !name.is_empty()))
        .unwrap_or_else(|| fallback.to_string())
}

/// Resolves the theme name for a component, tracking both `theme` and the nearest provider.
pub fn use_theme(theme: impl Into<MaybeSignal<Option<String>>>) -> Signal<String> {
    let theme = theme.into();
    let inherited = use_context::<ThemeContext>();
    let fallback = use_ui_config().theme;
    Signal::derive(move || {
        theme.with(|own| {
            resolve_theme(
                own.as_deref(),
                inherited.map(|context| context.name.get()),
                &fallback,
            )
        })
    })
}

#[component]
/// Scopes a theme to its descendants and applies the matching theme class.
pub fn ThemeProvider(
    #[prop(into)] theme: MaybeSignal<String>,
    #[prop(optional)] layout_class: Option<&'static str>,
    children: Children,
) -> impl IntoView {
    let name = Signal::derive(move || theme.get());
    provide_context(ThemeContext { name });
    let base = merge_layout_class("ui-theme-provider", layout_class);

    view! {
        <div
            class=move || format!("{base} {}", theme_classes(&name.get()))
            data-ui-primitive="true"
            data-ui-kind="theme-provider"
        >
            {children()}
        </div>
    }
}
