//! Factory functions for the replay-protection behaviour a [`Context`] uses
//! per SSRC. Passed through [`crate::config::Config`] and defaulted by
//! [`crate::session::Session::new`] when the caller doesn't override them.
//!
//! [`Context`]: crate::context::Context

use crate::replay_detector::{NoOpReplayDetector, ReplayDetector, SlidingWindowDetector};

pub type ContextOption = Box<dyn Fn() -> Box<dyn ReplayDetector + Send + 'static> + Send + Sync>;

/// Enables SRTP replay protection with a `window_size`-entry sliding window.
pub fn srtp_replay_protection(window_size: usize) -> ContextOption {
    Box::new(move || -> Box<dyn ReplayDetector + Send + 'static> {
        Box::new(SlidingWindowDetector::new(window_size as u64))
    })
}

/// Enables SRTCP replay protection with a `window_size`-entry sliding window.
pub fn srtcp_replay_protection(window_size: usize) -> ContextOption {
    Box::new(move || -> Box<dyn ReplayDetector + Send + 'static> {
        Box::new(SlidingWindowDetector::new(window_size as u64))
    })
}

/// Disables SRTP replay protection; every packet index is accepted.
pub fn srtp_no_replay_protection() -> ContextOption {
    Box::new(|| -> Box<dyn ReplayDetector + Send + 'static> { Box::new(NoOpReplayDetector) })
}

/// Disables SRTCP replay protection; every packet index is accepted.
pub fn srtcp_no_replay_protection() -> ContextOption {
    Box::new(|| -> Box<dyn ReplayDetector + Send + 'static> { Box::new(NoOpReplayDetector) })
}
