use std::{fmt, str::FromStr};

use serde::{Deserialize, Serialize};

use super::ClassList;
use crate::PropError;

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
/// Vertical spacing density.
pub enum Density {
    /// Standard spacing.
    #[default]
    Default,
    /// Slightly reduced spacing.
    Comfortable,
    /// Tight spacing.
    Compact,
}

impl Density {
    /// Stable token used in class names.
    pub fn token(self) -> &'static str {
        match self {
            Self::Default => "default",
            Self::Comfortable => "comfortable",
            Self::Compact => "compact",
        }
    }
}

impl fmt::Display for Density {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.token())
    }
}

impl FromStr for Density {
    type Err = PropError;

    fn from_str(raw: &str) -> Result<Self, Self::Err> {
        match raw {
            "default" => Ok(Self::Default),
            "comfortable" => Ok(Self::Comfortable),
            "compact" => Ok(Self::Compact),
            _ => Err(PropError::InvalidDensity(raw.to_string())),
        }
    }
}

/// Builds the `<name>--density-<density>` class.
pub fn density_classes(density: Density, name: &str) -> ClassList {
    ClassList::from_iter([format!("{name}--density-{}", density.token())])
}
