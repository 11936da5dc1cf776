/// Availability day and slot lookups
pub mod availability;
/// Booking details, address, price breakdown and instructions
pub mod booking;
/// Validation of a reschedule pick
pub mod reschedule;
