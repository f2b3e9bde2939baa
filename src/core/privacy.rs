//! Privacy classification for platform sink redaction

use serde::{Deserialize, Serialize};
use std::fmt;

/// How the platform sink should treat a message's content.
///
/// Only the platform sink reads this. Filtering and the broadcast record
/// ignore it.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Privacy {
    /// Defer to the sink's own default.
    #[default]
    Auto,
    Public,
    Private,
}

impl Privacy {
    /// Resolve `Auto` against a sink's default redaction setting.
    ///
    /// Returns `true` when the message must be redacted.
    #[inline]
    pub fn redacts(&self, auto_redacts: bool) -> bool {
        match self {
            Privacy::Auto => auto_redacts,
            Privacy::Public => false,
            Privacy::Private => true,
        }
    }
}

impl fmt::Display for Privacy {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Privacy::Auto => f.write_str("auto"),
            Privacy::Public => f.write_str("public"),
            Privacy::Private => f.write_str("private"),
        }
    }
}
