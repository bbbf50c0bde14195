use super::ClassList;

#[derive(Debug, Clone, Default, PartialEq, Eq)]
/// Corner rounding option.
pub enum Rounded {
    /// No explicit rounding.
    #[default]
    None,
    /// The component's default rounding.
    Default,
    /// Rounding utility tokens such as `lg` or `t-xl`.
    Values(String),
}

impl From<bool> for Rounded {
    fn from(enabled: bool) -> Self {
        if enabled {
            Self::Default
        } else {
            Self::None
        }
    }
}

impl From<&str> for Rounded {
    fn from(values: &str) -> Self {
        if values.trim().is_empty() {
            Self::Default
        } else {
            Self::Values(values.to_string())
        }
    }
}

impl From<String> for Rounded {
    fn from(values: String) -> Self {
        Self::from(values.as_str())
    }
}

impl From<u32> for Rounded {
    fn from(radius: u32) -> Self {
        Self::Values(radius.to_string())
    }
}

/// Builds rounding classes; `tile` squares the corners only when no rounding is requested.
pub fn rounded_classes(rounded: &Rounded, tile: bool, name: &str) -> ClassList {
    let mut classes = ClassList::new();
    match rounded {
        Rounded::Default => classes.push(format!("{name}--rounded")),
        Rounded::Values(values) => {
            for value in values.split_whitespace() {
                classes.push(format!("rounded-{value}"));
            }
        }
        Rounded::None => classes.push_if(tile, "rounded-0"),
    }
    classes
}
