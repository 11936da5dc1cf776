//! # Availability normalization
//!
//! The `/date-time` endpoint returns one row per stored availability entry,
//! so a single date may appear several times with overlapping slot lists.
//! This module merges those rows into one [`NormalizedDay`] per date and
//! answers slot lookups for the day the user picked.
//!
//! Both operations are pure and never fail: malformed input degrades to an
//! empty result.

use std::collections::HashMap;

use serde_json::Value;
use tracing::debug;

use crate::{
    dates,
    models::availability::{AvailabilityResponse, NormalizedDay, RawAvailabilityRecord},
};

/// Merges raw records into days sorted chronologically.
///
/// Records are grouped by exact `date` string. The first record seen for a
/// date provides the day's `id`; slots from later records are appended when
/// not already present and each day's slots end up sorted by string order.
///
/// Days whose date cannot be parsed are placed after every dated day, in
/// the order they were first encountered.
pub fn normalize(records: &[RawAvailabilityRecord]) -> Vec<NormalizedDay> {
    let mut index_by_date: HashMap<&str, usize> = HashMap::new();
    let mut days: Vec<NormalizedDay> = Vec::new();

    for record in records {
        match index_by_date.get(record.date.as_str()) {
            Some(&index) => {
                let day = &mut days[index];
                for slot in &record.time {
                    if !day.time_slots.contains(slot) {
                        day.time_slots.push(slot.clone());
                    }
                }
            }
            None => {
                index_by_date.insert(&record.date, days.len());
                let mut time_slots: Vec<String> = Vec::with_capacity(record.time.len());
                for slot in &record.time {
                    if !time_slots.contains(slot) {
                        time_slots.push(slot.clone());
                    }
                }
                days.push(NormalizedDay {
                    id: record.id.clone(),
                    date: record.date.clone(),
                    display_short: dates::short_label(&record.date),
                    display_full: dates::full_label(&record.date),
                    time_slots,
                });
            }
        }
    }

    for day in &mut days {
        day.time_slots.sort();
    }
    days.sort_by_cached_key(|day| {
        let parsed = dates::parse_calendar_date(&day.date);
        (parsed.is_none(), parsed)
    });

    debug!(records = records.len(), days = days.len(), "Normalized availability");
    days
}

/// Normalizes a raw `/date-time` payload of any shape.
///
/// `null`, a payload without `Data`, or a non-array `Data` all produce an
/// empty list.
pub fn normalize_response(payload: &Value) -> Vec<NormalizedDay> {
    normalize(&AvailabilityResponse::from_value(payload).records())
}

/// Sorted slots for the selected day, or nothing when no day is selected
/// or the date is not offered.
pub fn slots_for(days: &[NormalizedDay], selected_date: Option<&str>) -> Vec<String> {
    let Some(selected_date) = selected_date else {
        return Vec::new();
    };

    match days.iter().find(|day| day.date == selected_date) {
        Some(day) => {
            let mut slots = day.time_slots.clone();
            slots.sort();
            slots
        }
        None => Vec::new(),
    }
}

/// Looks up the normalized day for a date key.
pub fn find_day<'a>(days: &'a [NormalizedDay], date: &str) -> Option<&'a NormalizedDay> {
    days.iter().find(|day| day.date == date)
}
