use std::fmt;

use super::StyleMap;

#[derive(Debug, Clone, PartialEq)]
/// A CSS length; bare numbers are pixels.
pub enum Length {
    /// Pixel length.
    Px(f64),
    /// Any CSS length expression, e.g. `50%` or `calc(100% - 8px)`.
    Css(String),
}

impl Length {
    /// Renders the CSS value. Numeric strings gain a `px` unit; empty or non-finite values yield
    /// `None`.
    pub fn to_css(&self) -> Option<String> {
        match self {
            Self::Px(value) => value.is_finite().then(|| format!("{value}px")),
            Self::Css(raw) => {
                let raw = raw.trim();
                if raw.is_empty() {
                    return None;
                }
                match raw.parse::<f64>() {
                    Ok(value) if value.is_finite() => Some(format!("{value}px")),
                    Ok(_) => None,
                    Err(_) => Some(raw.to_string()),
                }
            }
        }
    }
}

impl fmt::Display for Length {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.to_css().unwrap_or_default())
    }
}

impl From<f64> for Length {
    fn from(value: f64) -> Self {
        Self::Px(value)
    }
}

impl From<i32> for Length {
    fn from(value: i32) -> Self {
        Self::Px(f64::from(value))
    }
}

impl From<u32> for Length {
    fn from(value: u32) -> Self {
        Self::Px(f64::from(value))
    }
}

impl From<&str> for Length {
    fn from(value: &str) -> Self {
        Self::Css(value.to_string())
    }
}

impl From<String> for Length {
    fn from(value: String) -> Self {
        Self::Css(value)
    }
}

#[derive(Debug, Clone, Default, PartialEq)]
/// Size constraints applied as inline styles.
pub struct DimensionProps {
    /// `height`.
    pub height: Option<Length>,
    /// `max-height`.
    pub max_height: Option<Length>,
    /// `max-width`.
    pub max_width: Option<Length>,
    /// `min-height`.
    pub min_height: Option<Length>,
    /// `min-width`.
    pub min_width: Option<Length>,
    /// `width`.
    pub width: Option<Length>,
}

/// Converts every set dimension into an inline declaration.
pub fn dimension_styles(props: &DimensionProps) -> StyleMap {
    let mut styles = StyleMap::new();
    let entries = [
        ("height", &props.height),
        ("max-height", &props.max_height),
        ("max-width", &props.max_width),
        ("min-height", &props.min_height),
        ("min-width", &props.min_width),
        ("width", &props.width),
    ];
    for (property, length) in entries {
        if let Some(value) = length.as_ref().and_then(Length::to_css) {
            styles.set(property, value);
        }
    }
    styles
}
