//! # Device compatibility matching (`devmatch`)
//!
//! ## Purpose
//!
//! `devmatch` resolves a device against an ordered table of candidate match
//! records. Each record names one recognized compatible identity (an exact,
//! case-sensitive key such as `"vendor,chip-a"`) and may carry a typed
//! driver-data payload; each device advertises the keys it answers to in its
//! own declared priority order. The engine returns a borrowed view of the
//! winning record, or `None` when nothing is compatible. No match is a
//! normal outcome, never an error.
//!
//! The table is populated by whatever enumerates drivers or boards in the
//! surrounding system, and the descriptor by whatever enumerates devices;
//! this crate only reads both for the duration of one lookup.
//!
//! ## Core Types
//!
//! - [`MatchRecord`]: one compatible identity plus an optional payload.
//! - [`MatchTable`]: the ordered, explicitly owned candidate table.
//! - [`DeviceDescriptor`]: the keys a device advertises, most preferred
//!   first, plus identifying metadata.
//! - [`MatchHit`]: a non-owning view of the winning record, valid as long as
//!   the table it points into.
//! - [`Registry`]: snapshot-based wrapper for tables that grow while lookups
//!   are running.
//! - [`TableFile`]: versioned YAML table files (`yaml-tables` feature).
//!
//! ## Example Usage
//!
//! ```
//! use devmatch::{DeviceDescriptor, MatchRecord, MatchTable};
//!
//! let table: MatchTable<&str> = MatchTable::new()
//!     .with_record(MatchRecord::with_data("vendor,chip-a", "chip-a-core"))
//!     .with_record(MatchRecord::with_data("vendor,chip-b", "chip-b-core"));
//!
//! // The device prefers chip-b compatibility and falls back to chip-a.
//! let dev = DeviceDescriptor::new("uart0", ["vendor,chip-b", "vendor,chip-a"]);
//!
//! let hit = table.match_device(&dev).expect("uart0 is compatible");
//! assert_eq!(hit.matched_key(), "vendor,chip-b");
//! assert_eq!(hit.data(), Some(&"chip-b-core"));
//! ```
//!
//! ## Observability
//!
//! Install a [`MatchMetrics`] implementation via [`set_match_metrics`] to
//! record per-lookup latency and outcomes. This is typically done once during
//! service startup so all lookups share the same metrics backend. The engine
//! also emits `tracing` events at debug level for every resolution.

#[cfg(feature = "yaml-tables")]
pub mod config;
pub mod engine;
pub mod metrics;
pub mod registry;
pub mod table;
pub mod types;

#[cfg(feature = "yaml-tables")]
pub use crate::config::{RecordSpec, TABLE_FORMAT_VERSION, TableError, TableFile};
pub use crate::engine::match_device;
pub use crate::metrics::{MatchMetrics, set_match_metrics};
pub use crate::registry::Registry;
pub use crate::table::MatchTable;
pub use crate::types::{DeviceDescriptor, MatchHit, MatchRecord};
