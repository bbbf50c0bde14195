use std::{borrow::Cow, fmt, str::FromStr};

use crate::PropError;

#[derive(Debug, Clone, PartialEq, Eq, Hash)]
/// Validated element name used for a component's root element.
pub struct Tag(Cow<'static, str>);

impl Tag {
    /// `<div>`.
    pub const DIV: Tag = Tag(Cow::Borrowed("div"));
    /// `<li>`.
    pub const LI: Tag = Tag(Cow::Borrowed("li"));
    /// `<a>`.
    pub const A: Tag = Tag(Cow::Borrowed("a"));
    /// `<span>`.
    pub const SPAN: Tag = Tag(Cow::Borrowed("span"));
    /// `<button>`.
    pub const BUTTON: Tag = Tag(Cow::Borrowed("button"));
    /// `<nav>`.
    pub const NAV: Tag = Tag(Cow::Borrowed("nav"));

    /// Validates an element name: ASCII alphanumerics and `-`, starting with a letter.
    ///
    /// # Errors
    ///
    /// Returns [`PropError::InvalidTag`] for empty or malformed names.
    pub fn new(name: impl Into<Cow<'static, str>>) -> Result<Self, PropError> {
        let name = name.into();
        let mut chars = name.chars();
        let valid = chars.next().is_some_and(|first| first.is_ascii_alphabetic())
            && chars.all(|ch| ch.is_ascii_alphanumeric() || ch == '-');
        if !valid {
            return Err(PropError::InvalidTag(name.into_owned()));
        }
        Ok(Self(name))
    }

    /// The element name.
    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl Default for Tag {
    fn default() -> Self {
        Self::DIV
    }
}

impl fmt::Display for Tag {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

impl FromStr for Tag {
    type Err = PropError;

    fn from_str(raw: &str) -> Result<Self, Self::Err> {
        Self::new(raw.to_string())
    }
}
