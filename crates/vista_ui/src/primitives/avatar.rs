use leptos::html;

use super::*;
use crate::composables::{
    density_classes, present, rounded_classes, ColorInput, ColorState, ColorTarget, Density,
    Length, Rounded, StyleMap,
};
use crate::config::use_ui_config;

const AVATAR_CLASS: &str = "ui-avatar";

#[derive(Debug, Clone, PartialEq, Eq)]
/// What an avatar shows.
pub enum AvatarContent {
    /// An image URL.
    Image(String),
    /// An icon class name.
    Icon(String),
    /// Caller-supplied children, or nothing.
    Children,
}

/// An image wins over an icon; with neither, the avatar renders its children.
pub fn avatar_content(image: &Option<String>, icon: &Option<String>) -> AvatarContent {
    match (present(image), present(icon)) {
        (Some(image), _) => AvatarContent::Image(image.to_string()),
        (None, Some(icon)) => AvatarContent::Icon(icon.to_string()),
        (None, None) => AvatarContent::Children,
    }
}

#[derive(Debug, Clone, Default, PartialEq)]
/// Presentation props of an [`Avatar`].
pub struct AvatarOptions {
    /// Spacing density.
    pub density: Density,
    /// Background color name or CSS color.
    pub color: Option<String>,
    /// Corner rounding.
    pub rounded: Rounded,
    /// Square corners when no rounding is set.
    pub tile: bool,
    /// Width and height.
    pub size: Option<Length>,
}

#[derive(Debug, Clone, PartialEq)]
/// Classes and styles derived from [`AvatarOptions`].
pub struct AvatarState {
    /// Root classes.
    pub classes: ClassList,
    /// Root inline styles.
    pub styles: StyleMap,
}

impl AvatarState {
    /// Derives the avatar's root classes and styles.
    pub fn derive(props: &AvatarOptions) -> Self {
        let color = ColorState::resolve(&ColorInput::for_target(
            ColorTarget::Background,
            props.color.clone(),
        ));
        let mut classes = ClassList::from_iter([AVATAR_CLASS]);
        classes.merge(&density_classes(props.density, AVATAR_CLASS));
        classes.merge(&rounded_classes(&props.rounded, props.tile, AVATAR_CLASS));
        classes.merge(&color.classes);

        let mut styles = color.styles;
        if let Some(size) = props.size.as_ref().and_then(Length::to_css) {
            styles.set("width", size.clone());
            styles.set("height", size);
        }
        Self { classes, styles }
    }
}

pub(crate) fn render_avatar(
    props: &AvatarOptions,
    content: AvatarContent,
    layout_class: Option<&'static str>,
    children: Option<Children>,
) -> View {
    let state = AvatarState::derive(props);
    let content = match content {
        AvatarContent::Image(image) => {
            view! { <img class="ui-avatar__image" src=image alt="" /> }.into_view()
        }
        AvatarContent::Icon(icon) => view! { <Icon icon /> }.into_view(),
        AvatarContent::Children => children.map(|children| children().into_view()).into_view(),
    };

    html::div()
        .attr("class", with_layout_class(state.classes, layout_class))
        .attr("style", state.styles.to_attribute())
        .attr("data-ui-primitive", "true")
        .attr("data-ui-kind", "avatar")
        .child(content)
        .into_view()
}

#[component]
/// Round media holder showing an image, an icon, or custom children.
pub fn Avatar(
    #[prop(optional)] density: Option<Density>,
    #[prop(optional, into)] icon: Option<String>,
    #[prop(optional, into)] image: Option<String>,
    #[prop(optional, into)] color: Option<String>,
    #[prop(optional, into)] rounded: Rounded,
    #[prop(optional)] tile: bool,
    #[prop(optional, into)] size: Option<Length>,
    #[prop(optional)] layout_class: Option<&'static str>,
    #[prop(optional)] children: Option<Children>,
) -> impl IntoView {
    let props = AvatarOptions {
        density: density.unwrap_or_else(|| use_ui_config().density),
        color,
        rounded,
        tile,
        size,
    };
    render_avatar(&props, avatar_content(&image, &icon), layout_class, children)
}


#[cfg(all(test, feature = "ssr"))]
mod render_tests {
    use leptos::ssr::render_to_string;

    use super::*;

    #[test]
    fn plain_avatar_has_no_style_attribute() {
        let html = render_to_string(|| view! { <Avatar icon="mdi-account" /> }).to_string();

        assert!(html.contains("data-ui-kind=\"avatar\""), "{html}");
        assert!(html.contains("mdi-account"), "{html}");
        assert!(!html.contains("style="), "{html}");
    }

    #[test]
    fn sized_avatar_renders_image_and_size() {
        let html = render_to_string(|| {
            view! { <Avatar image="me.png" icon="mdi-account" size=Length::from(40) /> }
        })
        .to_string();

        assert!(html.contains("style=\"width: 40px; height: 40px\""), "{html}");
        assert!(html.contains("src=\"me.png\""), "{html}");
        assert!(!html.contains("mdi-account"), "{html}");
    }
}
