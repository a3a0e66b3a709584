//! Stable target identifiers

use serde::{Deserialize, Serialize};
use std::fmt;

/// Identifier of a pickable target.
///
/// Targets are created once when the grid is built and live for the whole
/// session, so ids are dense and assigned in creation order starting at 0.
#[derive(Clone, Copy, Hash, Eq, PartialEq, Ord, PartialOrd, Serialize, Deserialize)]
#[serde(transparent)]
pub struct TargetId(pub u32);

impl TargetId {
    /// Create a TargetId from a raw value
    pub fn from_raw(id: u32) -> Self {
        Self(id)
    }

    /// Get the raw u32 value
    pub fn raw(&self) -> u32 {
        self.0
    }

    /// Index into a dense target table
    pub fn index(&self) -> usize {
        self.0 as usize
    }
}

impl fmt::Debug for TargetId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "TargetId({})", self.0)
    }
}

impl fmt::Display for TargetId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "#{}", self.0)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_from_raw() {
        let id = TargetId::from_raw(42);
        assert_eq!(id.raw(), 42);
        assert_eq!(id.index(), 42);
    }

    #[test]
    fn test_display_and_debug() {
        let id = TargetId::from_raw(5);
        assert_eq!(id.to_string(), "#5");
        assert_eq!(format!("{:?}", id), "TargetId(5)");
    }

    #[test]
    fn test_ordering() {
        assert!(TargetId(1) < TargetId(2));
    }
}
