//! Run configuration.

use std::time::Duration;

/// Pause between two consecutive leave calls.
pub const LEAVE_DELAY: Duration = Duration::from_millis(500);

/// Safety switches for one cleanup run.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct CleanupConfig {
    /// Log what would be left instead of leaving.
    pub dry_run: bool,
    /// Ask the operator before processing.
    pub require_confirmation: bool,
    /// Pause between consecutive leave calls.
    pub delay: Duration,
}

impl CleanupConfig {
    pub fn new(dry_run: bool, require_confirmation: bool) -> Self {
        Self {
            dry_run,
            require_confirmation,
            delay: LEAVE_DELAY,
        }
    }
}

impl Default for CleanupConfig {
    /// Simulate and ask first.
    fn default() -> Self {
        Self::new(true, true)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn defaults_are_safe() {
        let config = CleanupConfig::default();
        assert!(config.dry_run);
        assert!(config.require_confirmation);
        assert_eq!(config.delay, Duration::from_millis(500));
    }
}
