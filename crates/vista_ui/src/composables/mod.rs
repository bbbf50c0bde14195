//! Shared visual-concern derivations (theme, color, variant, border, density, dimension,
//! elevation, rounding, tag, and routing links).
//!
//! Every concern is a small props type with explicit defaults plus a pure function that turns it
//! into class names or inline styles. Components feed those results into `Signal::derive` so the
//! output follows prop changes without manual invalidation.

use std::fmt;

mod border;
mod color;
mod density;
mod dimension;
mod elevation;
mod rounded;
mod router;
mod tag;
mod theme;
mod variant;

pub use border::{border_classes, Border};
pub use color::{is_css_color, use_color, ColorInput, ColorSignals, ColorState, ColorTarget};
pub use density::{density_classes, Density};
pub use dimension::{dimension_styles, DimensionProps, Length};
pub use elevation::{elevation_classes, ElevationLevel, MAX_ELEVATION};
pub use rounded::{rounded_classes, Rounded};
pub use router::{use_link, LinkState, RouterProps, UseLink};
pub use tag::Tag;
pub use theme::{theme_classes, use_theme, ThemeContext, ThemeProvider, DEFAULT_THEME};
pub use variant::{use_variant, variant_classes, UseVariant, Variant, VariantProps, VariantState};

#[derive(Debug, Clone, Default, PartialEq, Eq)]
/// Ordered, de-duplicated list of CSS class names.
pub struct ClassList(Vec<String>);

impl ClassList {
    /// Creates an empty class list.
    pub fn new() -> Self {
        Self::default()
    }

    /// Appends every whitespace-separated class in `classes`, skipping blanks and duplicates.
    pub fn push(&mut self, classes: impl AsRef<str>) {
        for class in classes.as_ref().split_whitespace() {
            if !self.contains(class) {
                self.0.push(class.to_string());
            }
        }
    }

    /// Appends `classes` only when `condition` holds.
    pub fn push_if(&mut self, condition: bool, classes: impl AsRef<str>) {
        if condition {
            self.push(classes);
        }
    }

    /// Appends all classes from another list.
    pub fn merge(&mut self, other: &ClassList) {
        for class in &other.0 {
            self.push(class);
        }
    }

    /// Returns `true` when `class` is present.
    pub fn contains(&self, class: &str) -> bool {
        self.0.iter().any(|existing| existing == class)
    }

    /// Returns `true` when the list holds no classes.
    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }

    /// Iterates classes in insertion order.
    pub fn iter(&self) -> impl Iterator<Item = &str> {
        self.0.iter().map(String::as_str)
    }
}

impl fmt::Display for ClassList {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0.join(" "))
    }
}

impl<S: AsRef<str>> FromIterator<S> for ClassList {
    fn from_iter<I: IntoIterator<Item = S>>(iter: I) -> Self {
        let mut list = Self::new();
        for class in iter {
            list.push(class);
        }
        list
    }
}

#[derive(Debug, Clone, Default, PartialEq, Eq)]
/// Ordered inline style declarations keyed by CSS property name.
pub struct StyleMap(Vec<(&'static str, String)>);

impl StyleMap {
    /// Creates an empty style map.
    pub fn new() -> Self {
        Self::default()
    }

    /// Sets `property`, replacing an earlier value in place.
    pub fn set(&mut self, property: &'static str, value: impl Into<String>) {
        let value = value.into();
        match self.0.iter_mut().find(|(name, _)| *name == property) {
            Some(entry) => entry.1 = value,
            None => self.0.push((property, value)),
        }
    }

    /// Returns the value of `property`, if set.
    pub fn get(&self, property: &str) -> Option<&str> {
        self.0
            .iter()
            .find(|(name, _)| *name == property)
            .map(|(_, value)| value.as_str())
    }

    /// Copies every declaration of `other` into this map; later values win.
    pub fn merge(&mut self, other: &StyleMap) {
        for (property, value) in &other.0 {
            self.set(property, value.clone());
        }
    }

    /// Returns `true` when no declaration is set.
    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }

    /// Renders the `style` attribute value, or `None` when empty.
    pub fn to_attribute(&self) -> Option<String> {
        (!self.is_empty()).then(|| self.to_string())
    }
}

impl fmt::Display for StyleMap {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let declarations = self
            .0
            .iter()
            .map(|(property, value)| format!("{property}: {value}"))
            .collect::<Vec<_>>();
        f.write_str(&declarations.join("; "))
    }
}

/// Treats `None` and empty strings as absent, matching how optional string props are read.
pub(crate) fn present(value: &Option<String>) -> Option<&str> {
    value.as_deref().filter(|value| !value.is_empty())
}

#[cfg(test)]
mod tests {
    use pretty_assertions::assert_eq;

    use super::*;

    #[test]
    fn class_list_splits_and_dedupes() {
        let mut classes = ClassList::new();
        classes.push("a  b");
        classes.push("b c");
        classes.push_if(false, "d");
        classes.push("");

        assert_eq!(classes.to_string(), "a b c");
        assert!(classes.contains("c"));
        assert!(!classes.contains("d"));
    }

    #[test]
    fn style_map_replaces_in_place_and_renders() {
        let mut styles = StyleMap::new();
        styles.set("color", "red");
        styles.set("width", "10px");
        styles.set("color", "blue");

        assert_eq!(styles.to_string(), "color: blue; width: 10px");
        assert_eq!(StyleMap::new().to_attribute(), None);
    }

    #[test]
    fn present_treats_empty_as_absent() {
        assert_eq!(present(&Some(String::new())), None);
        assert_eq!(present(&Some("x".to_string())), Some("x"));
        assert_eq!(present(&None), None);
    }
}
