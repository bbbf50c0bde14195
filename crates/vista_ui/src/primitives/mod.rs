//! List, avatar, and icon primitives.

use leptos::*;

use crate::composables::ClassList;

mod avatar;
mod icon;
mod list;

pub use avatar::{avatar_content, Avatar, AvatarContent, AvatarOptions, AvatarState};
pub use icon::{icon_classes, Icon};
pub use list::{
    AppendSlot, ListItem, ListItemAvatar, ListItemHeader, ListItemLayout, ListItemInput,
    ListItemSlots, ListItemState, ListItemSubtitle, ListItemTitle, PrependSlot, SubtitleSlot,
    TitleSlot, LIST_ITEM_CLASS,
};

pub(crate) fn merge_layout_class(base: &'static str, layout_class: Option<&'static str>) -> String {
    match layout_class {
        Some(layout_class) if !layout_class.is_empty() => format!("{base} {layout_class}"),
        _ => base.to_string(),
    }
}

pub(crate) fn bool_token(value: bool) -> &'static str {
    if value {
        "true"
    } else {
        "false"
    }
}

/// Appends the optional layout class to a derived class list.
pub(crate) fn with_layout_class(mut classes: ClassList, layout_class: Option<&'static str>) -> String {
    if let Some(layout_class) = layout_class {
        classes.push(layout_class);
    }
    classes.to_string()
}

#[cfg(test)]
mod tests {
    use pretty_assertions::assert_eq;

    use super::*;

    #[test]
    fn layout_class_merging() {
        assert_eq!(merge_layout_class("ui-x", None), "ui-x");
        assert_eq!(merge_layout_class("ui-x", Some("")), "ui-x");
        assert_eq!(merge_layout_class("ui-x", Some("wide")), "ui-x wide");
        assert_eq!(
            with_layout_class(ClassList::from_iter(["a", "b"]), Some("wide")),
            "a b wide"
        );
        assert_eq!(bool_token(true), "true");
    }
}
