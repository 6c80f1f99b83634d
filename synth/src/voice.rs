use std::fmt;

use serde::{Deserialize, Serialize};

/// Identifies a synthesis voice on a playback request.
///
/// Which voices actually exist is the backend's business; this type only
/// names one.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct Voice {
    id: String,
}

impl Voice {
    /// Create a voice identified by `id`.
    pub fn new(id: impl Into<String>) -> Self {
        Self { id: id.into() }
    }

    pub fn id(&self) -> &str {
        &self.id
    }
}

impl Default for Voice {
    fn default() -> Self {
        Self::new("default")
    }
}

impl fmt::Display for Voice {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.id)
    }
}
