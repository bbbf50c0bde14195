use leptos::{ev::MouseEvent, *};
use leptos_router::{use_location, use_navigate, NavigateOptions, RouterContext};

use super::present;

#[derive(Debug, Clone, Default, PartialEq, Eq)]
/// Navigation target props shared by linkable components.
pub struct RouterProps {
    /// Plain URL followed by the browser.
    pub href: Option<String>,
    /// In-app route path handled by the router.
    pub to: Option<String>,
    /// Replace the current history entry instead of pushing a new one.
    pub replace: bool,
}

#[derive(Debug, Clone, Default, PartialEq, Eq)]
/// Link facts derived from [`RouterProps`] and the current route.
pub struct LinkState {
    /// `href` or `to` is set.
    pub is_link: bool,
    /// Value for the rendered `href` attribute.
    pub href: Option<String>,
    /// `to` matches the current route path exactly.
    pub is_exact_active: bool,
}

impl LinkState {
    /// Resolves link facts. `current_path` is `None` when no router is mounted, in which case
    /// `to` cannot be resolved and only `href` is rendered.
    pub fn resolve(props: &RouterProps, current_path: Option<&str>) -> Self {
        let href = present(&props.href);
        let to = present(&props.to);
        let is_link = href.is_some() || to.is_some();
        match current_path {
            Some(path) => Self {
                is_link,
                href: to.or(href).map(str::to_string),
                is_exact_active: to.is_some_and(|to| route_path(to) == route_path(path)),
            },
            None => Self {
                is_link,
                href: href.map(str::to_string),
                is_exact_active: false,
            },
        }
    }
}

fn route_path(raw: &str) -> &str {
    let path = raw.split(['?', '#']).next().unwrap_or_default();
    match path.trim_end_matches('/') {
        "" => "/",
        trimmed => trimmed,
    }
}

#[derive(Clone, Copy)]
/// Reactive link state plus a click handler that performs in-app navigation.
pub struct UseLink {
    /// Current link facts.
    pub state: Signal<LinkState>,
    /// Navigates to `to` through the router; a no-op without a router or `to`.
    pub navigate: Callback<MouseEvent>,
}

/// Binds `props` to the surrounding `<Router/>`, if any, tracking changes to `props`.
pub fn use_link(props: impl Into<MaybeSignal<RouterProps>>) -> UseLink {
    let props = props.into();
    if use_context::<RouterContext>().is_none() {
        return UseLink {
            state: Signal::derive(move || props.with(|props| LinkState::resolve(props, None))),
            navigate: Callback::new(|_| {}),
        };
    }

    let location = use_location();
    let navigate_to = use_navigate();
    let state = {
        let props = props.clone();
        Signal::derive(move || {
            props.with(|props| {
                location
                    .pathname
                    .with(|path| LinkState::resolve(props, Some(path.as_str())))
            })
        })
    };
    let navigate = Callback::new(move |ev: MouseEvent| {
        let (target, replace) = props.with_untracked(|props| {
            (present(&props.to).map(str::to_string), props.replace)
        });
        let Some(target) = target else {
            return;
        };
        // Leave modified and non-primary clicks to the browser.
        if ev.default_prevented()
            || ev.button() != 0
            || ev.meta_key()
            || ev.ctrl_key()
            || ev.shift_key()
            || ev.alt_key()
        {
            return;
        }
        ev.prevent_default();
        navigate_to(
            target.as_str(),
            NavigateOptions {
                replace,
                ..NavigateOptions::default()
            },
        );
    });

    UseLink { state, navigate }
}
