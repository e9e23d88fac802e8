//! # Badges
//!
//! A small overlay on an item: either a count or a dot, never both.

use serde::Serialize;

use crate::core::error::NavError;

/// Largest count a badge may carry. Larger values are rejected at
/// construction instead of being truncated to some display form.
pub const MAX_BADGE_COUNT: u32 = 99;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum Badge {
    Count(u32),
    Dot,
}

impl Badge {
    /// Build a badge from raw parts as they appear in config files.
    ///
    /// Returns `Ok(None)` for "no badge" (no dot and a missing or zero count).
    pub fn from_parts(count: Option<u32>, dot: bool) -> Result<Option<Badge>, NavError> {
        match (count, dot) {
            (Some(n), true) if n > 0 => Err(NavError::InvalidConfig(format!(
                "badge cannot carry both a count ({n}) and a dot"
            ))),
            (Some(n), _) if n > MAX_BADGE_COUNT => Err(NavError::InvalidConfig(format!(
                "badge count {n} exceeds {MAX_BADGE_COUNT}"
            ))),
            (_, true) => Ok(Some(Badge::Dot)),
            (Some(0) | None, false) => Ok(None),
            (Some(n), false) => Ok(Some(Badge::Count(n))),
        }
    }

    /// Convenience constructor for a count badge. Zero means no badge.
    pub fn count(n: u32) -> Result<Option<Badge>, NavError> {
        Self::from_parts(Some(n), false)
    }

    /// Short text the renderer draws on top of the icon.
    pub fn label(&self) -> String {
        match self {
            Badge::Count(n) => n.to_string(),
            Badge::Dot => "•".to_string(),
        }
    }
}
