use std::fmt;

use serde::{Deserialize, Serialize};

/// The bank the boat is currently moored at.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum BoatSide {
    /// The bank everybody starts on.
    Start,
    /// The bank everybody has to reach.
    Far,
}

impl BoatSide {
    #[inline]
    pub const fn opposite(self) -> BoatSide {
        match self {
            BoatSide::Start => BoatSide::Far,
            BoatSide::Far => BoatSide::Start,
        }
    }

    /// Human-facing name of the bank ("left" for the starting bank).
    #[inline]
    pub const fn label(self) -> &'static str {
        match self {
            BoatSide::Start => "left",
            BoatSide::Far => "right",
        }
    }
}

impl fmt::Display for BoatSide {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.label())
    }
}
