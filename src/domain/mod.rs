pub mod booking;
pub mod catalog;
pub mod language;
pub mod ports;
pub mod transaction;
