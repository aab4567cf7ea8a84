//! Shared integration test harness.

pub mod recording_notifier;
