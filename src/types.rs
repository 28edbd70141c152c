use serde::{Deserialize, Serialize};
use serde_json::Value as JsonValue;

/// One recognized compatible identity in a candidate table.
///
/// The `compatible` key is an exact, case-sensitive token such as
/// `"vendor,chip-a"`. `data` is an optional typed driver-data payload handed
/// back to the caller through [`MatchHit`] when this record wins a lookup.
///
/// Records are immutable once constructed and owned by the
/// [`MatchTable`](crate::MatchTable) listing them. A record with an empty
/// `compatible` key is constructible and valid; it simply never matches.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
#[serde(bound(
    serialize = "T: serde::Serialize",
    deserialize = "T: serde::Deserialize<'de>"
))]
pub struct MatchRecord<T> {
    /// Compatibility key compared against the device's advertised keys.
    pub compatible: String,
    /// Optional driver-data payload associated with this record.
    #[serde(default)]
    pub data: Option<T>,
}

impl<T> MatchRecord<T> {
    /// Record with a compatibility key and no payload.
    pub fn new(compatible: impl Into<String>) -> Self {
        Self {
            compatible: compatible.into(),
            data: None,
        }
    }

    /// Record with a compatibility key and a driver-data payload.
    pub fn with_data(compatible: impl Into<String>, data: T) -> Self {
        Self {
            compatible: compatible.into(),
            data: Some(data),
        }
    }

    /// Exact, case-sensitive comparison against one device key.
    ///
    /// An empty record key never matches anything, including an empty device
    /// key, so degenerate table entries are skipped rather than spuriously
    /// matched.
    pub fn matches_key(&self, key: &str) -> bool {
        !self.compatible.is_empty() && self.compatible == key
    }
}

/// The device being resolved against a candidate table.
///
/// `compatible` lists the keys the device advertises in the device's own
/// declared priority order: index 0 is the most preferred identity. `name`
/// and `attributes` are identifying metadata only and are never consulted by
/// the match predicate.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct DeviceDescriptor {
    /// Device name, used for logging and metrics.
    pub name: String,
    /// Advertised compatibility keys, most preferred first.
    pub compatible: Vec<String>,
    /// Optional opaque attributes; can be used for logging or caller-side
    /// bookkeeping.
    #[serde(default)]
    pub attributes: Option<JsonValue>,
}

impl DeviceDescriptor {
    /// Descriptor with a name and a priority-ordered key list.
    pub fn new<I, S>(name: impl Into<String>, compatible: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        Self {
            name: name.into(),
            compatible: compatible.into_iter().map(Into::into).collect(),
            attributes: None,
        }
    }

    /// Attach an opaque attribute blob.
    pub fn with_attributes(mut self, attributes: JsonValue) -> Self {
        self.attributes = Some(attributes);
        self
    }

    /// Advertised keys in priority order.
    pub fn keys(&self) -> impl Iterator<Item = &str> {
        self.compatible.iter().map(String::as_str)
    }
}

/// A successful lookup: a borrowed view into the winning record.
///
/// The hit never owns data; it is valid only as long as the table it points
/// into. `key_index` records which of the device's advertised keys carried
/// the match, so callers can see how preferred the resolution was.
#[derive(Debug)]
pub struct MatchHit<'a, T> {
    /// The winning record.
    pub record: &'a MatchRecord<T>,
    /// Position of the winning record in the candidate table.
    pub candidate_index: usize,
    /// Priority index of the device key that matched (0 = most preferred).
    pub key_index: usize,
}

impl<'a, T> MatchHit<'a, T> {
    /// The compatibility key the match was decided on.
    ///
    /// Matching is exact equality, so this is both the record's key and the
    /// device key at `key_index`.
    pub fn matched_key(&self) -> &'a str {
        &self.record.compatible
    }

    /// Driver-data payload of the winning record, if any.
    pub fn data(&self) -> Option<&'a T> {
        self.record.data.as_ref()
    }
}

impl<T> Clone for MatchHit<'_, T> {
    fn clone(&self) -> Self {
        *self
    }
}

impl<T> Copy for MatchHit<'_, T> {}

impl<T: PartialEq> PartialEq for MatchHit<'_, T> {
    fn eq(&self, other: &Self) -> bool {
        self.record == other.record
            && self.candidate_index == other.candidate_index
            && self.key_index == other.key_index
    }
}
