use super::*;

/// Builds icon classes; `mdi-*` names also get the `mdi` font class.
pub fn icon_classes(icon: &str) -> ClassList {
    let mut classes = ClassList::from_iter(["ui-icon"]);
    classes.push_if(icon.starts_with("mdi-"), "mdi");
    classes.push(icon);
    classes
}

#[component]
/// Font icon rendered from an icon class name.
pub fn Icon(
    #[prop(into)] icon: String,
    #[prop(optional)] layout_class: Option<&'static str>,
) -> impl IntoView {
    view! {
        <i
            class=with_layout_class(icon_classes(&icon), layout_class)
            aria-hidden="true"
            data-ui-primitive="true"
            data-ui-kind="icon"
        ></i>
    }
}

#[cfg(test)]
mod tests {
    use pretty_assertions::assert_eq;

    use super::*;

    #[test]
    fn mdi_icons_get_font_class() {
        assert_eq!(icon_classes("mdi-home").to_string(), "ui-icon mdi mdi-home");
        assert_eq!(icon_classes("custom-star").to_string(), "ui-icon custom-star");
    }
}
