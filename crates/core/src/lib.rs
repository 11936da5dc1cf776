//! # Bookdesk Core
//!
//! Pure logic behind the booking-details screen: parsing the delimited
//! address string, normalizing raw availability records into a day/time
//! picker, and the reschedule selection state machine.
//!
//! Nothing in this crate performs I/O. Every operation is a function of its
//! arguments, so callers own fetching, retries and discarding stale payloads.

/// Splitting of `" - "` delimited address strings
pub mod address;
/// Merging and sorting of raw availability records
pub mod availability;
/// Calendar date parsing and display labels
pub mod dates;
/// Error taxonomy shared with the API layer
pub mod errors;
/// Data types exchanged with the backend and the UI
pub mod models;
/// Day/time selection for rescheduling a booking
pub mod reschedule;
