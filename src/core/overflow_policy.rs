//! Overflow policies for queue subscribers
//!
//! A queue subscriber owns a bounded channel. When it is full, the policy
//! decides what `publish` does with the record for that subscriber.

use serde::{Deserialize, Serialize};
use std::fmt;
use std::time::Duration;

/// Policy for a full queue subscriber
///
/// Neither policy can block a publishing thread indefinitely.
///
/// # Example
///
/// ```
/// use pretty_logger::OverflowPolicy;
/// use std::time::Duration;
///
/// let policy = OverflowPolicy::default();
/// assert_eq!(policy, OverflowPolicy::DropNewest);
///
/// let policy = OverflowPolicy::BlockWithTimeout(Duration::from_millis(5));
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
pub enum OverflowPolicy {
    /// Drop the record being published
    #[default]
    DropNewest,

    /// Wait up to the timeout for room, then drop
    BlockWithTimeout(Duration),
}

impl fmt::Display for OverflowPolicy {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            OverflowPolicy::DropNewest => write!(f, "DropNewest"),
            OverflowPolicy::BlockWithTimeout(d) => write!(f, "BlockWithTimeout({:?})", d),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_overflow_policy_display() {
        assert_eq!(OverflowPolicy::DropNewest.to_string(), "DropNewest");
        assert_eq!(
            OverflowPolicy::BlockWithTimeout(Duration::from_millis(100)).to_string(),
            "BlockWithTimeout(100ms)"
        );
    }
}
