use serde::{Deserialize, Serialize};

use crate::{
    availability::slots_for,
    errors::{BookingError, BookingResult},
    models::availability::NormalizedDay,
};

/// Progress of the reschedule picker.
///
/// The selection only stores keys. Slot lists are always recomputed from
/// the caller's current day list through [`slots_for`].
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(tag = "state", rename_all = "camelCase")]
pub enum RescheduleSelection {
    #[default]
    NoDaySelected,
    DaySelected { date: String },
    TimeSelected { date: String, slot: String },
}

impl RescheduleSelection {
    pub fn selected_date(&self) -> Option<&str> {
        match self {
            RescheduleSelection::NoDaySelected => None,
            RescheduleSelection::DaySelected { date }
            | RescheduleSelection::TimeSelected { date, .. } => Some(date.as_str()),
        }
    }

    pub fn selected_slot(&self) -> Option<&str> {
        match self {
            RescheduleSelection::TimeSelected { slot, .. } => Some(slot.as_str()),
            _ => None,
        }
    }

    /// Picks a day. Any earlier time pick is dropped.
    pub fn select_day(&mut self, date: impl Into<String>) {
        *self = RescheduleSelection::DaySelected { date: date.into() };
    }

    /// Picks a time slot on the selected day.
    ///
    /// # Errors
    ///
    /// * `BookingError::Validation` - no day is selected, or `slot` is not
    ///   offered for it. The selection is left unchanged.
    pub fn select_time(&mut self, days: &[NormalizedDay], slot: &str) -> BookingResult<()> {
        let date = self
            .selected_date()
            .ok_or_else(|| BookingError::Validation("Select a day before picking a time".to_string()))?
            .to_string();

        if !slots_for(days, Some(date.as_str())).iter().any(|s| s == slot) {
            return Err(BookingError::Validation(format!(
                "Time slot {} is not available on {}",
                slot, date
            )));
        }

        *self = RescheduleSelection::TimeSelected {
            date,
            slot: slot.to_string(),
        };
        Ok(())
    }

    /// Slots to offer for the current day.
    pub fn available_times(&self, days: &[NormalizedDay]) -> Vec<String> {
        slots_for(days, self.selected_date())
    }

    /// Returns the chosen `(date, slot)` once both have been picked.
    pub fn confirm(&self) -> BookingResult<(String, String)> {
        match self {
            RescheduleSelection::TimeSelected { date, slot } => Ok((date.clone(), slot.clone())),
            RescheduleSelection::DaySelected { .. } => Err(BookingError::Validation(
                "Select a time slot to reschedule".to_string(),
            )),
            RescheduleSelection::NoDaySelected => Err(BookingError::Validation(
                "Select a day and time slot to reschedule".to_string(),
            )),
        }
    }
}
