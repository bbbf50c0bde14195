use leptos::ev::{KeyboardEvent, MouseEvent};
use leptos::html::{self, Custom};
use wasm_bindgen::{JsCast, JsValue};

use super::avatar::{avatar_content, render_avatar, AvatarOptions};
use super::*;
use crate::composables::{
    border_classes, density_classes, dimension_styles, elevation_classes, present,
    rounded_classes, theme_classes, use_link, use_theme, Border, ColorInput, ColorState,
    ColorTarget, Density, DimensionProps, ElevationLevel, Length, LinkState, Rounded,
    RouterProps, StyleMap, Tag,
};
use crate::config::use_ui_config;
use crate::ripple::{self, RippleOptions};

/// Base class of every list item root element.
pub const LIST_ITEM_CLASS: &str = "ui-list-item";

#[slot]
/// Replaces the title text of a [`ListItem`].
pub struct TitleSlot {
    children: ChildrenFn,
}

#[slot]
/// Replaces the subtitle text of a [`ListItem`].
pub struct SubtitleSlot {
    children: ChildrenFn,
}

#[slot]
/// Replaces the leading avatar of a [`ListItem`].
pub struct PrependSlot {
    children: ChildrenFn,
}

#[slot]
/// Replaces the trailing avatar of a [`ListItem`].
pub struct AppendSlot {
    children: ChildrenFn,
}

#[derive(Debug, Clone, Default, PartialEq)]
/// Everything a [`ListItem`] derives its presentation from.
pub struct ListItemInput {
    /// Forces the active state.
    pub active: bool,
    /// Color used instead of `color` while active.
    pub active_color: Option<String>,
    /// Extra classes applied while active.
    pub active_class: Option<String>,
    /// Trailing avatar image.
    pub append_avatar: Option<String>,
    /// Trailing icon.
    pub append_icon: Option<String>,
    /// Theme color name or CSS color.
    pub color: Option<String>,
    /// Suppresses interaction.
    pub disabled: bool,
    /// Forces link styling and interaction.
    pub link: bool,
    /// Leading avatar image.
    pub prepend_avatar: Option<String>,
    /// Leading icon.
    pub prepend_icon: Option<String>,
    /// Subtitle text.
    pub subtitle: Option<String>,
    /// Fills the background with the color while active.
    pub contained: bool,
    /// Title text.
    pub title: Option<String>,
    /// Border option.
    pub border: Border,
    /// Spacing density.
    pub density: Density,
    /// Size constraints.
    pub dimension: DimensionProps,
    /// Shadow depth.
    pub elevation: Option<ElevationLevel>,
    /// Corner rounding.
    pub rounded: Rounded,
    /// Square corners when no rounding is set.
    pub tile: bool,
    /// A click listener is bound.
    pub has_click_listener: bool,
}

impl ListItemInput {
    /// `contained` items paint the background while active; everything else tints text.
    /// The active color only applies while active.
    pub fn color_input(&self) -> ColorInput {
        let target = if self.contained && self.active {
            ColorTarget::Background
        } else {
            ColorTarget::Text
        };
        let color = self
            .active
            .then(|| present(&self.active_color))
            .flatten()
            .or_else(|| present(&self.color))
            .map(str::to_string);
        ColorInput::for_target(target, color)
    }
}

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
/// Which named slots the caller supplied.
pub struct ListItemSlots {
    /// Default content.
    pub default: bool,
    /// Title slot.
    pub title: bool,
    /// Subtitle slot.
    pub subtitle: bool,
    /// Prepend slot.
    pub prepend: bool,
    /// Append slot.
    pub append: bool,
}

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
/// Regions a [`ListItem`] renders.
pub struct ListItemLayout {
    /// Title row inside the header.
    pub has_title: bool,
    /// Subtitle row inside the header.
    pub has_subtitle: bool,
    /// Header region.
    pub has_header: bool,
    /// Leading region.
    pub has_prepend: bool,
    /// Trailing region.
    pub has_append: bool,
    /// Default slot content.
    pub has_default: bool,
}

impl ListItemLayout {
    /// A region renders when its slot or one of its props is present.
    pub fn derive(props: &ListItemInput, slots: ListItemSlots) -> Self {
        let has_title = slots.title || present(&props.title).is_some();
        let has_subtitle = slots.subtitle || present(&props.subtitle).is_some();
        Self {
            has_title,
            has_subtitle,
            has_header: has_title || has_subtitle,
            has_prepend: slots.prepend
                || present(&props.prepend_avatar).is_some()
                || present(&props.prepend_icon).is_some(),
            has_append: slots.append
                || present(&props.append_avatar).is_some()
                || present(&props.append_icon).is_some(),
            has_default: slots.default,
        }
    }
}

#[derive(Debug, Clone, PartialEq)]
/// Presentation of a [`ListItem`] for one set of props.
pub struct ListItemState {
    /// Rendered regions.
    pub layout: ListItemLayout,
    /// Forced link, router link, or bound click listener.
    pub is_link: bool,
    /// A link that is not disabled.
    pub is_clickable: bool,
    /// Forced active or exact router match.
    pub is_active: bool,
    /// Disabled flag.
    pub is_disabled: bool,
    /// Interaction overlay is rendered.
    pub show_overlay: bool,
    /// Color request passed to the color concern.
    pub color: ColorInput,
    /// Root classes.
    pub classes: ClassList,
    /// Root inline styles.
    pub styles: StyleMap,
    /// Root `href`.
    pub href: Option<String>,
    /// Root `tabindex`; only clickable items are focusable.
    pub tabindex: Option<i32>,
}

impl ListItemState {
    /// Derives the full presentation; a pure function of its inputs.
    pub fn derive(
        props: &ListItemInput,
        slots: ListItemSlots,
        link: &LinkState,
        theme: &str,
    ) -> Self {
        let is_link = props.link || link.is_link || props.has_click_listener;
        let is_clickable = is_link && !props.disabled;
        let is_active = props.active || link.is_exact_active;
        let color = props.color_input();
        let color_state = ColorState::resolve(&color);

        let mut classes = ClassList::from_iter([LIST_ITEM_CLASS]);
        classes.push_if(is_active, format!("{LIST_ITEM_CLASS}--active"));
        classes.push_if(props.disabled, format!("{LIST_ITEM_CLASS}--disabled"));
        classes.push_if(is_link, format!("{LIST_ITEM_CLASS}--link"));
        classes.push_if(props.contained, format!("{LIST_ITEM_CLASS}--contained"));
        if is_active {
            if let Some(active_class) = present(&props.active_class) {
                classes.push(active_class);
            }
        }
        classes.merge(&theme_classes(theme));
        classes.merge(&color_state.classes);
        classes.merge(&border_classes(&props.border, LIST_ITEM_CLASS));
        classes.merge(&density_classes(props.density, LIST_ITEM_CLASS));
        classes.merge(&elevation_classes(props.elevation));
        classes.merge(&rounded_classes(&props.rounded, props.tile, LIST_ITEM_CLASS));

        let mut styles = color_state.styles;
        styles.merge(&dimension_styles(&props.dimension));

        Self {
            layout: ListItemLayout::derive(props, slots),
            is_link,
            is_clickable,
            is_active,
            is_disabled: props.disabled,
            show_overlay: is_clickable || props.active,
            color,
            classes,
            styles,
            href: link.href.clone(),
            tabindex: is_clickable.then_some(0),
        }
    }
}

#[component]
/// Positions an avatar at the leading or trailing edge of a list item.
pub fn ListItemAvatar(
    #[prop(optional)] left: bool,
    #[prop(optional)] right: bool,
    #[prop(optional)] layout_class: Option<&'static str>,
    children: Children,
) -> impl IntoView {
    let mut classes = ClassList::from_iter(["ui-list-item-avatar"]);
    classes.push_if(left, "ui-list-item-avatar--left");
    classes.push_if(right, "ui-list-item-avatar--right");

    view! {
        <div
            class=with_layout_class(classes, layout_class)
            data-ui-primitive="true"
            data-ui-kind="list-item-avatar"
        >
            {children()}
        </div>
    }
}

#[component]
/// Stacks a list item's title and subtitle.
pub fn ListItemHeader(
    #[prop(optional)] layout_class: Option<&'static str>,
    children: Children,
) -> impl IntoView {
    view! {
        <div
            class=merge_layout_class("ui-list-item-header", layout_class)
            data-ui-primitive="true"
            data-ui-kind="list-item-header"
        >
            {children()}
        </div>
    }
}

#[component]
/// Primary line of a list item.
pub fn ListItemTitle(
    #[prop(optional)] layout_class: Option<&'static str>,
    children: Children,
) -> impl IntoView {
    view! {
        <div
            class=merge_layout_class("ui-list-item-title", layout_class)
            data-ui-primitive="true"
            data-ui-kind="list-item-title"
        >
            {children()}
        </div>
    }
}

#[component]
/// Secondary line of a list item.
pub fn ListItemSubtitle(
    #[prop(optional)] layout_class: Option<&'static str>,
    children: Children,
) -> impl IntoView {
    view! {
        <div
            class=merge_layout_class("ui-list-item-subtitle", layout_class)
            data-ui-primitive="true"
            data-ui-kind="list-item-subtitle"
        >
            {children()}
        </div>
    }
}

fn edge_avatar(
    slot: Option<ChildrenFn>,
    density: Density,
    image: &Option<String>,
    icon: &Option<String>,
    right: bool,
) -> View {
    if let Some(children) = slot {
        return children().into_view();
    }
    let avatar = render_avatar(
        &AvatarOptions {
            density,
            ..AvatarOptions::default()
        },
        avatar_content(image, icon),
        None,
        None,
    );
    view! { <ListItemAvatar left={!right} right>{avatar}</ListItemAvatar> }.into_view()
}

fn slot_or_text(slot: Option<ChildrenFn>, text: Memo<String>) -> View {
    match slot {
        Some(children) => children().into_view(),
        None => (move || text.get()).into_view(),
    }
}

fn non_empty(value: &str) -> Option<String> {
    (!value.is_empty()).then(|| value.to_string())
}

/// Recomputes a list item's presentation whenever its input, link, or theme changes.
pub(crate) fn use_list_item(
    input: Signal<ListItemInput>,
    slots: ListItemSlots,
    link: Signal<LinkState>,
    theme: Signal<String>,
) -> Memo<ListItemState> {
    create_memo(move |_| {
        input.with(|input| {
            link.with(|link| theme.with(|theme| ListItemState::derive(input, slots, link, theme)))
        })
    })
}

/// Router navigation runs first and only while the item is clickable; the caller's handler
/// runs on every click, disabled or not.
fn dispatch_click<E: Clone>(
    ev: E,
    clickable: bool,
    navigate: impl FnOnce(E),
    on_click: Option<impl FnOnce(E)>,
) {
    if clickable {
        navigate(ev.clone());
    }
    if let Some(on_click) = on_click {
        on_click(ev);
    }
}

/// Enter and Space activate a clickable item, but only when the key event started on the item
/// itself. `a` and `button` roots are activated by the browser.
fn activates_on_key(key: &str, from_root: bool, clickable: bool, native_activation: bool) -> bool {
    from_root && clickable && !native_activation && matches!(key, "Enter" | " ")
}

#[component]
/// Single list row with optional avatars, a title/subtitle header, and link behaviour.
///
/// The row is interactive when `link` is set, when `href`/`to` make it a link, or when
/// `on_click` is bound; `disabled` keeps it a link but removes focus, navigation, and ripples.
/// Every prop except `tag`, the slots, and `on_click` may be a signal.
pub fn ListItem(
    #[prop(optional, into)] active: MaybeSignal<bool>,
    #[prop(optional, into)] active_color: MaybeSignal<String>,
    #[prop(optional, into)] active_class: MaybeSignal<String>,
    #[prop(optional, into)] append_avatar: MaybeSignal<String>,
    #[prop(optional, into)] append_icon: MaybeSignal<String>,
    #[prop(optional, into)] color: MaybeSignal<String>,
    #[prop(optional, into)] disabled: MaybeSignal<bool>,
    #[prop(optional, into)] link: MaybeSignal<bool>,
    #[prop(optional, into)] prepend_avatar: MaybeSignal<String>,
    #[prop(optional, into)] prepend_icon: MaybeSignal<String>,
    #[prop(optional, into)] subtitle: MaybeSignal<String>,
    #[prop(optional, into)] contained: MaybeSignal<bool>,
    #[prop(optional, into)] title: MaybeSignal<String>,
    #[prop(optional, into)] border: MaybeSignal<Border>,
    #[prop(optional, into)] density: MaybeProp<Density>,
    #[prop(optional, into)] height: MaybeProp<Length>,
    #[prop(optional, into)] max_height: MaybeProp<Length>,
    #[prop(optional, into)] max_width: MaybeProp<Length>,
    #[prop(optional, into)] min_height: MaybeProp<Length>,
    #[prop(optional, into)] min_width: MaybeProp<Length>,
    #[prop(optional, into)] width: MaybeProp<Length>,
    #[prop(optional, into)] elevation: MaybeProp<ElevationLevel>,
    #[prop(optional, into)] rounded: MaybeSignal<Rounded>,
    #[prop(optional, into)] tile: MaybeSignal<bool>,
    #[prop(optional)] tag: Option<Tag>,
    #[prop(optional, into)] theme: MaybeSignal<String>,
    #[prop(optional, into)] href: MaybeSignal<String>,
    #[prop(optional, into)] to: MaybeSignal<String>,
    #[prop(optional, into)] replace: MaybeSignal<bool>,
    #[prop(optional)] layout_class: Option<&'static str>,
    #[prop(optional)] on_click: Option<Callback<MouseEvent>>,
    #[prop(optional)] title_slot: Option<TitleSlot>,
    #[prop(optional)] subtitle_slot: Option<SubtitleSlot>,
    #[prop(optional)] prepend_slot: Option<PrependSlot>,
    #[prop(optional)] append_slot: Option<AppendSlot>,
    #[prop(optional)] children: Option<Children>,
) -> impl IntoView {
    let config = use_ui_config();
    let default_density = config.density;
    let ripple_enabled = config.ripple;
    let tag = tag.unwrap_or_default();
    let native_activation = matches!(tag.as_str(), "a" | "button");
    let theme = use_theme(Signal::derive(move || Some(theme.get())));
    let link_state = use_link(Signal::derive(move || RouterProps {
        href: href.with(|href| non_empty(href)),
        to: to.with(|to| non_empty(to)),
        replace: replace.get(),
    }));

    let slots = ListItemSlots {
        default: children.is_some(),
        title: title_slot.is_some(),
        subtitle: subtitle_slot.is_some(),
        prepend: prepend_slot.is_some(),
        append: append_slot.is_some(),
    };
    let has_click_listener = on_click.is_some();
    let input = Signal::derive(move || ListItemInput {
        active: active.get(),
        active_color: active_color.with(|value| non_empty(value)),
        active_class: active_class.with(|value| non_empty(value)),
        append_avatar: append_avatar.with(|value| non_empty(value)),
        append_icon: append_icon.with(|value| non_empty(value)),
        color: color.with(|value| non_empty(value)),
        disabled: disabled.get(),
        link: link.get(),
        prepend_avatar: prepend_avatar.with(|value| non_empty(value)),
        prepend_icon: prepend_icon.with(|value| non_empty(value)),
        subtitle: subtitle.with(|value| non_empty(value)),
        contained: contained.get(),
        title: title.with(|value| non_empty(value)),
        border: border.get(),
        density: density.get().unwrap_or(default_density),
        dimension: DimensionProps {
            height: height.get(),
            max_height: max_height.get(),
            max_width: max_width.get(),
            min_height: min_height.get(),
            min_width: min_width.get(),
            width: width.get(),
        },
        elevation: elevation.get(),
        rounded: rounded.get(),
        tile: tile.get(),
        has_click_listener,
    });
    let state = use_list_item(input, slots, link_state.state, theme);
    let layout = create_memo(move |_| state.with(|state| state.layout));
    let clickable = Signal::derive(move || state.with(|state| state.is_clickable));

    let overlay = move || {
        state
            .with(|state| state.show_overlay)
            .then(|| view! { <div class="ui-list-item__overlay"></div> })
    };

    let prepend_media = create_memo(move |_| {
        input.with(|input| {
            (
                input.density,
                input.prepend_avatar.clone(),
                input.prepend_icon.clone(),
            )
        })
    });
    let prepend_children = prepend_slot.map(|slot| slot.children);
    let prepend = move || {
        layout.get().has_prepend.then(|| {
            let (density, image, icon) = prepend_media.get();
            edge_avatar(prepend_children.clone(), density, &image, &icon, false)
        })
    };

    let append_media = create_memo(move |_| {
        input.with(|input| {
            (
                input.density,
                input.append_avatar.clone(),
                input.append_icon.clone(),
            )
        })
    });
    let append_children = append_slot.map(|slot| slot.children);
    let append = move || {
        layout.get().has_append.then(|| {
            let (density, image, icon) = append_media.get();
            edge_avatar(append_children.clone(), density, &image, &icon, true)
        })
    };

    let title_text =
        create_memo(move |_| input.with(|input| input.title.clone().unwrap_or_default()));
    let subtitle_text =
        create_memo(move |_| input.with(|input| input.subtitle.clone().unwrap_or_default()));
    let title_children = title_slot.map(|slot| slot.children);
    let subtitle_children = subtitle_slot.map(|slot| slot.children);
    let header = move || {
        let layout = layout.get();
        layout.has_header.then(|| {
            let title = layout.has_title.then(|| {
                let text = slot_or_text(title_children.clone(), title_text);
                view! { <ListItemTitle>{text}</ListItemTitle> }
            });
            let subtitle = layout.has_subtitle.then(|| {
                let text = slot_or_text(subtitle_children.clone(), subtitle_text);
                view! { <ListItemSubtitle>{text}</ListItemSubtitle> }
            });
            view! { <ListItemHeader>{title}{subtitle}</ListItemHeader> }
        })
    };
    let content = children.map(|children| children());

    let root = html::custom(Custom::new(tag.to_string()))
        .attr("class", move || {
            state.with(|state| with_layout_class(state.classes.clone(), layout_class))
        })
        .attr("style", move || state.with(|state| state.styles.to_attribute()))
        .attr("href", move || state.with(|state| state.href.clone()))
        .attr("tabindex", move || state.with(|state| state.tabindex))
        .attr("aria-disabled", move || {
            state.with(|state| state.is_disabled.then_some("true"))
        })
        .attr("data-ui-primitive", "true")
        .attr("data-ui-kind", "list-item")
        .attr("data-ui-active", move || {
            bool_token(state.with(|state| state.is_active))
        })
        .attr("data-ui-disabled", move || {
            bool_token(state.with(|state| state.is_disabled))
        })
        .on(ev::click, move |ev: MouseEvent| {
            dispatch_click(
                ev,
                clickable.get_untracked(),
                |ev| link_state.navigate.call(ev),
                on_click.as_ref().map(|on_click| move |ev| on_click.call(ev)),
            );
        })
        .on(ev::keydown, move |ev: KeyboardEvent| {
            let from_root = match (ev.target(), ev.current_target()) {
                (Some(target), Some(current)) => JsValue::from(target) == JsValue::from(current),
                _ => false,
            };
            if !activates_on_key(
                &ev.key(),
                from_root,
                clickable.get_untracked(),
                native_activation,
            ) {
                return;
            }
            ev.prevent_default();
            if let Some(root) = ev
                .current_target()
                .and_then(|root| root.dyn_into::<web_sys::HtmlElement>().ok())
            {
                root.click();
            }
        });
    let root = ripple::bind(
        root,
        Signal::derive(move || ripple_enabled && clickable.get()),
        RippleOptions::default(),
    );

    root.child(overlay)
        .child(prepend)
        .child(header)
        .child(content)
        .child(append)
}

#[cfg(test)]
mod tests {
    use std::cell::RefCell;

    use pretty_assertions::assert_eq;

    use super::*;

    fn derive(props: &ListItemInput) -> ListItemState {
        ListItemState::derive(
            props,
            ListItemSlots::default(),
            &LinkState::default(),
            "light",
        )
    }

    #[test]
    fn contained_active_item_paints_background_with_active_color() {
        let props = ListItemInput {
            contained: true,
            active: true,
            active_color: Some("red".to_string()),
            color: Some("blue".to_string()),
            ..ListItemInput::default()
        };

        assert_eq!(
            props.color_input(),
            ColorInput::for_target(ColorTarget::Background, Some("red".to_string()))
        );
        assert!(derive(&props).classes.contains("bg-red"));
    }

    #[test]
    fn inactive_item_tints_text_and_ignores_active_color() {
        let props = ListItemInput {
            active: false,
            contained: true,
            active_color: Some("red".to_string()),
            color: Some("blue".to_string()),
            ..ListItemInput::default()
        };

        assert_eq!(
            props.color_input(),
            ColorInput::for_target(ColorTarget::Text, Some("blue".to_string()))
        );
    }

    #[test]
    fn empty_active_color_falls_back_to_color() {
        let props = ListItemInput {
            active: true,
            active_color: Some(String::new()),
            color: Some("blue".to_string()),
            ..ListItemInput::default()
        };

        assert_eq!(props.color_input().text.as_deref(), Some("blue"));
    }

    #[test]
    fn title_only_renders_header_with_title() {
        let props = ListItemInput {
            title: Some("Hello".to_string()),
            ..ListItemInput::default()
        };

        assert_eq!(
            ListItemLayout::derive(&props, ListItemSlots::default()),
            ListItemLayout {
                has_title: true,
                has_header: true,
                ..ListItemLayout::default()
            }
        );
    }

    #[test]
    fn no_title_or_subtitle_skips_header() {
        let layout = ListItemLayout::derive(&ListItemInput::default(), ListItemSlots::default());
        assert!(!layout.has_header);

        let layout = ListItemLayout::derive(
            &ListItemInput::default(),
            ListItemSlots {
                subtitle: true,
                ..ListItemSlots::default()
            },
        );
        assert!(layout.has_header);
        assert!(!layout.has_title);
    }

    #[test]
    fn edge_regions_follow_props_or_slots() {
        let props = ListItemInput {
            prepend_icon: Some("mdi-inbox".to_string()),
            ..ListItemInput::default()
        };
        let layout = ListItemLayout::derive(
            &props,
            ListItemSlots {
                append: true,
                ..ListItemSlots::default()
            },
        );

        assert!(layout.has_prepend);
        assert!(layout.has_append);
    }

    #[test]
    fn static_item_is_not_clickable() {
        let state = derive(&ListItemInput::default());

        assert!(!state.is_link);
        assert!(!state.is_clickable);
        assert_eq!(state.tabindex, None);
        assert!(!state.show_overlay);
        assert_eq!(
            state.classes.to_string(),
            "ui-list-item ui-theme--light ui-list-item--density-default"
        );
    }

    #[test]
    fn active_static_item_shows_overlay_without_focus() {
        let state = derive(&ListItemInput {
            active: true,
            active_class: Some("is-current".to_string()),
            ..ListItemInput::default()
        });

        assert!(state.show_overlay);
        assert_eq!(state.tabindex, None);
        assert!(state.classes.contains("ui-list-item--active"));
        assert!(state.classes.contains("is-current"));
    }

    #[test]
    fn active_class_only_applies_while_active() {
        let state = derive(&ListItemInput {
            active_class: Some("is-current".to_string()),
            ..ListItemInput::default()
        });

        assert!(!state.classes.contains("is-current"));
    }

    #[test]
    fn disabled_link_is_not_clickable() {
        let state = derive(&ListItemInput {
            link: true,
            disabled: true,
            ..ListItemInput::default()
        });

        assert!(state.is_link);
        assert!(!state.is_clickable);
        assert_eq!(state.tabindex, None);
        assert!(!state.show_overlay);
        assert!(state.classes.contains("ui-list-item--link"));
        assert!(state.classes.contains("ui-list-item--disabled"));
    }

    #[test]
    fn click_listener_makes_item_clickable() {
        let state = derive(&ListItemInput {
            has_click_listener: true,
            ..ListItemInput::default()
        });

        assert!(state.is_clickable);
        assert_eq!(state.tabindex, Some(0));
        assert!(state.show_overlay);
    }

    #[test]
    fn router_link_supplies_href_and_active_state() {
        let link = LinkState {
            is_link: true,
            href: Some("/inbox".to_string()),
            is_exact_active: true,
        };
        let state = ListItemState::derive(
            &ListItemInput::default(),
            ListItemSlots::default(),
            &link,
            "dark",
        );

        assert!(state.is_clickable);
        assert!(state.is_active);
        assert_eq!(state.href.as_deref(), Some("/inbox"));
        assert!(state.classes.contains("ui-theme--dark"));
    }

    #[test]
    fn visual_concerns_merge_into_root_classes_and_styles() {
        let state = derive(&ListItemInput {
            color: Some("#00ff00".to_string()),
            border: Border::from("b-sm"),
            density: Density::Compact,
            elevation: ElevationLevel::new(2).ok(),
            rounded: Rounded::from(true),
            dimension: DimensionProps {
                min_height: Some(Length::from(48)),
                ..DimensionProps::default()
            },
            ..ListItemInput::default()
        });

        assert_eq!(
            state.classes.to_string(),
            "ui-list-item ui-theme--light ui-list-item--border border-b-sm \
             ui-list-item--density-compact elevation-2 ui-list-item--rounded"
        );
        assert_eq!(
            state.styles.to_string(),
            "color: #00ff00; caret-color: #00ff00; min-height: 48px"
        );
    }

    #[test]
    fn derivation_is_idempotent() {
        let props = ListItemInput {
            title: Some("Inbox".to_string()),
            link: true,
            color: Some("primary".to_string()),
            ..ListItemInput::default()
        };

        assert_eq!(derive(&props), derive(&props));
    }

    #[test]
    fn click_navigates_before_caller_handler() {
        let calls = RefCell::new(Vec::new());
        dispatch_click(
            (),
            true,
            |_| calls.borrow_mut().push("navigate"),
            Some(|_| calls.borrow_mut().push("on_click")),
        );

        assert_eq!(calls.into_inner(), vec!["navigate", "on_click"]);
    }

    #[test]
    fn disabled_item_still_reaches_caller_handler() {
        let calls = RefCell::new(Vec::new());
        dispatch_click(
            (),
            false,
            |_| calls.borrow_mut().push("navigate"),
            Some(|_| calls.borrow_mut().push("on_click")),
        );
        assert_eq!(*calls.borrow(), vec!["on_click"]);

        dispatch_click(
            (),
            false,
            |_| calls.borrow_mut().push("navigate"),
            None::<fn(())>,
        );
        assert_eq!(calls.into_inner(), vec!["on_click"]);
    }

    #[test]
    fn keys_bubbling_from_descendants_do_not_activate() {
        assert!(activates_on_key("Enter", true, true, false));
        assert!(activates_on_key(" ", true, true, false));
        assert!(!activates_on_key(" ", false, true, false));
        assert!(!activates_on_key("Enter", false, true, false));
    }

    #[test]
    fn keys_only_activate_clickable_non_native_roots() {
        assert!(!activates_on_key("Enter", true, false, false));
        assert!(!activates_on_key("Enter", true, true, true));
        assert!(!activates_on_key("Tab", true, true, false));
    }

    #[test]
    fn item_state_follows_input_changes() {
        let runtime = create_runtime();
        let input = create_rw_signal(ListItemInput {
            color: Some("blue".to_string()),
            ..ListItemInput::default()
        });
        let link = create_rw_signal(LinkState::default());
        let theme = create_rw_signal("light".to_string());
        let state = use_list_item(
            input.into(),
            ListItemSlots::default(),
            link.into(),
            theme.into(),
        );

        assert!(state.with(|state| state.classes.contains("text-blue")));
        assert!(!state.with(|state| state.layout.has_header));
        assert_eq!(state.with(|state| state.tabindex), None);

        input.update(|input| {
            input.color = Some("red".to_string());
            input.title = Some("Inbox".to_string());
            input.link = true;
        });
        state.with(|state| {
            assert!(state.classes.contains("text-red"));
            assert!(!state.classes.contains("text-blue"));
            assert!(state.layout.has_header);
            assert_eq!(state.tabindex, Some(0));
        });

        input.update(|input| {
            input.active = true;
            input.contained = true;
            input.active_color = Some("green".to_string());
        });
        assert!(state.with(|state| state.classes.contains("bg-green")));

        link.set(LinkState {
            is_link: true,
            href: Some("/inbox".to_string()),
            is_exact_active: false,
        });
        theme.set("dark".to_string());
        state.with(|state| {
            assert_eq!(state.href.as_deref(), Some("/inbox"));
            assert!(state.classes.contains("ui-theme--dark"));
        });

        runtime.dispose();
    }
}

#[cfg(all(test, feature = "ssr"))]
mod render_tests {
    use leptos::ssr::render_to_string;

    use super::*;

    fn position(html: &str, needle: &str) -> usize {
        html.find(needle)
            .unwrap_or_else(|| panic!("`{needle}` missing from {html}"))
    }

    #[test]
    fn clickable_item_renders_regions_in_order() {
        let html = render_to_string(|| {
            view! {
                <ListItem
                    title="Inbox"
                    prepend_icon="mdi-inbox"
                    append_icon="mdi-chevron-right"
                    link=true
                >
                    <span class="item-body">"Body"</span>
                </ListItem>
            }
        })
        .to_string();

        let order = [
            "ui-list-item__overlay",
            "ui-list-item-avatar--left",
            "ui-list-item-header",
            "item-body",
            "ui-list-item-avatar--right",
        ]
        .map(|needle| position(&html, needle));
        assert!(order.windows(2).all(|pair| pair[0] < pair[1]), "{html}");
        assert!(html.contains("tabindex=\"0\""), "{html}");
        assert!(html.contains("data-ui-kind=\"list-item\""), "{html}");
        assert!(!html.contains("aria-disabled"), "{html}");
    }

    #[test]
    fn disabled_link_is_not_focusable() {
        let html = render_to_string(|| {
            view! { <ListItem title="Archive" link=true disabled=true /> }
        })
        .to_string();

        assert!(html.contains("aria-disabled=\"true\""), "{html}");
        assert!(html.contains("ui-list-item--disabled"), "{html}");
        assert!(!html.contains("tabindex"), "{html}");
        assert!(!html.contains("ui-list-item__overlay"), "{html}");
    }

    #[test]
    fn href_renders_on_the_root() {
        let html = render_to_string(|| {
            view! { <ListItem href="/docs" title="Docs" tag=Tag::A /> }
        })
        .to_string();

        assert!(html.contains("<a "), "{html}");
        assert!(html.contains("href=\"/docs\""), "{html}");
        assert!(html.contains("ui-list-item--link"), "{html}");
        assert!(html.contains("tabindex=\"0\""), "{html}");
    }

    #[test]
    fn static_item_renders_plain_root() {
        let html = render_to_string(|| {
            view! {
                <ListItem>
                    <span class="item-body">"Body"</span>
                </ListItem>
            }
        })
        .to_string();

        assert!(html.contains("item-body"), "{html}");
        assert!(!html.contains("ui-list-item-header"), "{html}");
        assert!(!html.contains("ui-list-item__overlay"), "{html}");
        assert!(!html.contains("tabindex"), "{html}");
        assert!(!html.contains("href="), "{html}");
        assert!(!html.contains("style="), "{html}");
    }

    #[test]
    fn slots_replace_title_and_prepend() {
        let html = render_to_string(|| {
            view! {
                <ListItem prepend_icon="mdi-inbox" title="Ignored">
                    <TitleSlot slot><strong>"Custom title"</strong></TitleSlot>
                    <PrependSlot slot><span class="custom-prepend"></span></PrependSlot>
                </ListItem>
            }
        })
        .to_string();

        assert!(html.contains("Custom title"), "{html}");
        assert!(!html.contains("Ignored"), "{html}");
        assert!(html.contains("custom-prepend"), "{html}");
        assert!(!html.contains("mdi-inbox"), "{html}");
    }
}
