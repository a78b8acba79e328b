//! Reservation Model

use serde::{Deserialize, Serialize};

use crate::types::Timestamp;

/// Accepted table reservation (append-only log entry)
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Reservation {
    /// Creation time in Unix milliseconds, doubles as the id
    pub id: Timestamp,
    pub name: String,
    /// `YYYY-MM-DD` as typed into the date input
    pub date: String,
    /// `HH:MM` as typed into the time input
    pub time: String,
    pub people: u32,
    #[serde(default)]
    pub phone: String,
}

/// Raw reservation form fields (untrimmed, as read from the page)
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct ReservationForm {
    pub name: String,
    pub date: String,
    pub time: String,
    pub people: String,
    pub phone: String,
}

/// Raw contact form fields
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct ContactForm {
    pub name: String,
    pub email: String,
    pub message: String,
}
