use super::ClassList;

#[derive(Debug, Clone, Default, PartialEq, Eq)]
/// Border option accepted by bordered components.
pub enum Border {
    /// No border.
    #[default]
    None,
    /// The component's default border.
    Default,
    /// Default border plus utility tokens such as `t-0` or `lg`.
    Values(String),
}

impl From<bool> for Border {
    fn from(enabled: bool) -> Self {
        if enabled {
            Self::Default
        } else {
            Self::None
        }
    }
}

impl From<&str> for Border {
    fn from(values: &str) -> Self {
        if values.trim().is_empty() {
            Self::Default
        } else {
            Self::Values(values.to_string())
        }
    }
}

impl From<String> for Border {
    fn from(values: String) -> Self {
        Self::from(values.as_str())
    }
}

impl From<u32> for Border {
    fn from(width: u32) -> Self {
        Self::Values(width.to_string())
    }
}

/// Builds `<name>--border` plus one `border-<token>` class per value token.
pub fn border_classes(border: &Border, name: &str) -> ClassList {
    let mut classes = ClassList::new();
    match border {
        Border::None => {}
        Border::Default => classes.push(format!("{name}--border")),
        Border::Values(values) => {
            classes.push(format!("{name}--border"));
            for value in values.split_whitespace() {
                classes.push(format!("border-{value}"));
            }
        }
    }
    classes
}
