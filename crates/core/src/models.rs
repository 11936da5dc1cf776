pub mod address;
pub mod availability;
pub mod booking;
