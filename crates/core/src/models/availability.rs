use std::fmt;

use serde::{Deserialize, Deserializer, Serialize};
use serde_json::Value;
use tracing::{debug, warn};

/// Identifier of an upstream availability row. The backend sends either a
/// numeric or a string id depending on the store it was read from.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(untagged)]
pub enum RecordId {
    Number(i64),
    Text(String),
}

impl fmt::Display for RecordId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            RecordId::Number(id) => write!(f, "{}", id),
            RecordId::Text(id) => f.write_str(id),
        }
    }
}

impl From<i64> for RecordId {
    fn from(id: i64) -> Self {
        RecordId::Number(id)
    }
}

/// Bare integer literals default to `i32`, so this keeps
/// `RawAvailabilityRecord::new(1, ..)` working without a suffix.
impl From<i32> for RecordId {
    fn from(id: i32) -> Self {
        RecordId::Number(id.into())
    }
}

impl From<&str> for RecordId {
    fn from(id: &str) -> Self {
        RecordId::Text(id.to_string())
    }
}

/// One row of the `/date-time` payload: a date and the slots bookable on it.
///
/// `id` is opaque metadata. A row whose id is missing or of an unexpected
/// type still carries its slots.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct RawAvailabilityRecord {
    #[serde(default, deserialize_with = "lenient_id")]
    pub id: Option<RecordId>,
    pub date: String,
    #[serde(default, deserialize_with = "null_as_empty")]
    pub time: Vec<String>,
}

impl RawAvailabilityRecord {
    pub fn new(id: impl Into<RecordId>, date: &str, time: &[&str]) -> Self {
        Self {
            id: Some(id.into()),
            date: date.to_string(),
            time: time.iter().map(|slot| slot.to_string()).collect(),
        }
    }
}

fn null_as_empty<'de, D>(deserializer: D) -> Result<Vec<String>, D::Error>
where
    D: Deserializer<'de>,
{
    Ok(Option::<Vec<String>>::deserialize(deserializer)?.unwrap_or_default())
}

fn lenient_id<'de, D>(deserializer: D) -> Result<Option<RecordId>, D::Error>
where
    D: Deserializer<'de>,
{
    let id = match Option::<Value>::deserialize(deserializer)? {
        None | Some(Value::Null) => None,
        Some(Value::Number(n)) => Some(match n.as_i64() {
            Some(n) => RecordId::Number(n),
            None => RecordId::Text(n.to_string()),
        }),
        Some(Value::String(s)) => Some(RecordId::Text(s)),
        Some(other) => Some(RecordId::Text(other.to_string())),
    };
    Ok(id)
}

/// Upstream envelope `{ "Data": ... }` for the availability endpoint.
///
/// `Data` is kept as an untyped JSON value; [`AvailabilityResponse::records`]
/// is the only place that decides what counts as usable input.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct AvailabilityResponse {
    #[serde(rename = "Data", default)]
    pub data: Option<Value>,
}

impl AvailabilityResponse {
    /// Wraps an arbitrary JSON payload. Anything that is not an object with a
    /// `Data` key becomes an empty response.
    pub fn from_value(payload: &Value) -> Self {
        Self {
            data: payload.get("Data").cloned(),
        }
    }

    /// Converts the payload into strict records.
    ///
    /// A missing, null or non-array `Data` yields no records. Array entries
    /// that do not match the record shape are skipped.
    pub fn records(&self) -> Vec<RawAvailabilityRecord> {
        match &self.data {
            Some(Value::Array(items)) => items
                .iter()
                .enumerate()
                .filter_map(|(index, item)| match RawAvailabilityRecord::deserialize(item) {
                    Ok(record) => Some(record),
                    Err(e) => {
                        warn!(index, error = %e, "Skipping malformed availability record");
                        None
                    }
                })
                .collect(),
            Some(Value::Null) | None => {
                debug!("Availability payload has no Data");
                Vec::new()
            }
            Some(_) => {
                warn!("Availability payload Data is not an array");
                Vec::new()
            }
        }
    }
}

/// A single calendar day in the reschedule picker, merged from every raw
/// record that shares its `date`.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct NormalizedDay {
    /// Id of the first record seen for this date
    pub id: Option<RecordId>,
    pub date: String,
    pub display_short: String,
    pub display_full: String,
    pub time_slots: Vec<String>,
}

impl NormalizedDay {
    /// Chip caption under the day label, e.g. `"1 slot"` or `"3 slots"`.
    pub fn slot_count_label(&self) -> String {
        match self.time_slots.len() {
            1 => "1 slot".to_string(),
            n => format!("{} slots", n),
        }
    }
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct AvailableDaysResponse {
    pub days: Vec<NormalizedDay>,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct AvailableSlotsResponse {
    pub date: Option<String>,
    pub slots: Vec<String>,
}
