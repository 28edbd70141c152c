use std::time::Instant;

use tracing::{debug, trace};

use crate::metrics::metrics_recorder;
use crate::table::MatchTable;
use crate::types::{DeviceDescriptor, MatchHit};


/// Resolve `device` against `table` and return the winning record, if any.
///
/// Precedence is two-level: the device's advertised keys are tried in the
/// device's declared priority order (outer loop), and for each key the table
/// is scanned in entry order (inner loop). The first candidate whose
/// `compatible` key exactly equals the current device key wins; lower
/// priority device keys are only consulted once every candidate has been
/// tried against the higher-priority key. Comparison is exact and
/// case-sensitive.
///
/// Absence of a match is a normal outcome, not an error: an empty table, a
/// device advertising no keys, and records with empty keys all resolve to
/// `None` without aborting the scan.
///
/// The lookup is pure over its inputs: no I/O, no blocking, no allocation of
/// long-lived resources, and repeated calls with unchanged inputs return the
/// identical hit. Both borrows guarantee the table cannot be mutated
/// mid-scan; callers that interleave registration with matching should go
/// through [`Registry`](crate::Registry) snapshots.
pub fn match_device<'a, T>(
    table: &'a MatchTable<T>,
    device: &DeviceDescriptor,
) -> Option<MatchHit<'a, T>> {
    let start = Instant::now();
    let hit = lookup(table, device);

    match &hit {
        Some(hit) => debug!(
            device = %device.name,
            key = hit.matched_key(),
            candidate_index = hit.candidate_index,
            key_index = hit.key_index,
            "device matched"
        ),
        None => debug!(
            device = %device.name,
            candidates = table.len(),
            keys = device.compatible.len(),
            "no compatible record"
        ),
    }

    if let Some(recorder) = metrics_recorder() {
        recorder.record_lookup(&device.name, start.elapsed(), hit.is_some(), table.len());
    }

    hit
}

fn lookup<'a, T>(table: &'a MatchTable<T>, device: &DeviceDescriptor) -> Option<MatchHit<'a, T>> {
    for (key_index, key) in device.keys().enumerate() {
        for (candidate_index, record) in table.iter().enumerate() {
            trace!(
                device = %device.name,
                key,
                candidate = record.compatible.as_str(),
                "probing candidate"
            );
            if record.matches_key(key) {
                return Some(MatchHit {
                    record,
                    candidate_index,
                    key_index,
                });
            }
        }
    }
    None
}
