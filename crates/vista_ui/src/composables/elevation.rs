use std::str::FromStr;

use super::ClassList;
use crate::PropError;

/// Highest supported elevation level.
pub const MAX_ELEVATION: u8 = 24;

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, PartialOrd, Ord, Hash)]
/// Shadow depth between 0 and [`MAX_ELEVATION`].
pub struct ElevationLevel(u8);

impl ElevationLevel {
    /// Validates `level`.
    ///
    /// # Errors
    ///
    /// Returns [`PropError::InvalidElevation`] when `level` exceeds [`MAX_ELEVATION`].
    pub fn new(level: u8) -> Result<Self, PropError> {
        if level > MAX_ELEVATION {
            return Err(PropError::InvalidElevation(level.to_string()));
        }
        Ok(Self(level))
    }

    /// The raw level.
    pub fn get(self) -> u8 {
        self.0
    }
}

impl TryFrom<u8> for ElevationLevel {
    type Error = PropError;

    fn try_from(level: u8) -> Result<Self, Self::Error> {
        Self::new(level)
    }
}

impl FromStr for ElevationLevel {
    type Err = PropError;

    fn from_str(raw: &str) -> Result<Self, Self::Err> {
        raw.trim()
            .parse::<u8>()
            .map_err(|_| PropError::InvalidElevation(raw.to_string()))
            .and_then(Self::new)
    }
}

/// Builds the `elevation-<level>` class when a level is set.
pub fn elevation_classes(elevation: Option<ElevationLevel>) -> ClassList {
    elevation
        .map(|level| format!("elevation-{}", level.get()))
        .into_iter()
        .collect()
}
