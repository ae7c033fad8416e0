//! How a day came to be marked present.

use crate::PresenceError;
use serde::{Deserialize, Serialize};
use std::fmt::{self, Display};
use std::str::FromStr;

/// Origin of a presence entry.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize, Default)]
#[serde(rename_all = "lowercase")]
pub enum PresenceKind {
    /// Marked by the user or an administrator.
    #[default]
    Manual,
    /// Inferred from joining a dated event.
    Activity,
}

impl PresenceKind {
    /// Returns the stored reason code.
    #[must_use]
    pub const fn as_str(&self) -> &'static str {
        match self {
            Self::Manual => "manual",
            Self::Activity => "activity",
        }
    }
}

impl Display for PresenceKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for PresenceKind {
    type Err = PresenceError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_lowercase().as_str() {
            "manual" => Ok(Self::Manual),
            "activity" => Ok(Self::Activity),
            other => Err(PresenceError::validation(format!(
                "unknown presence kind '{}'",
                other
            ))),
        }
    }
}
