//! Pluggable observability for match lookups.
//!
//! Install a [`MatchMetrics`] implementation once during startup via
//! [`set_match_metrics`]; every lookup through the engine then reports one
//! observation to it. The default is no recorder, and the engine pays only a
//! read-lock probe per lookup in that case.

use std::sync::{Arc, RwLock};
use std::time::Duration;

use once_cell::sync::Lazy;

/// Observer for match lookups.
pub trait MatchMetrics: Send + Sync {
    /// Called once per lookup with the device name, wall-clock latency,
    /// whether any record matched, and the candidate count scanned.
    fn record_lookup(&self, device: &str, latency: Duration, matched: bool, candidates: usize);
}

static METRICS: Lazy<RwLock<Option<Arc<dyn MatchMetrics>>>> = Lazy::new(|| RwLock::new(None));

/// Install or clear the global match metrics recorder.
pub fn set_match_metrics(recorder: Option<Arc<dyn MatchMetrics>>) {
    let mut guard = METRICS.write().expect("match metrics lock poisoned");
    *guard = recorder;
}

pub(crate) fn metrics_recorder() -> Option<Arc<dyn MatchMetrics>> {
    let guard = METRICS
        .read()
        .unwrap_or_else(|poisoned| poisoned.into_inner());
    guard.clone()
}
