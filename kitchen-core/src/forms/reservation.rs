//! Table reservation form

use chrono::{NaiveDate, NaiveDateTime, NaiveTime};
use shared::error::{AppError, AppResult, ErrorCode};
use shared::models::{Reservation, ReservationForm};
use shared::types::Timestamp;

use super::FormOutcome;
use crate::history::ReservationLog;
use crate::utils::validation::{
    MAX_NAME_LEN, MAX_SHORT_TEXT_LEN, is_present, parse_positive, validate_max_len,
};

pub const MSG_RESERVATION_INCOMPLETE: &str = "Please complete all required fields.";
pub const MSG_DATETIME_PAST: &str = "Please choose a future date/time.";
pub const MSG_DATETIME_INVALID: &str = "Please choose a valid date/time.";
pub const MSG_SAVE_FAILED: &str = "Could not save your reservation. Please try again.";

/// Reservation that passed every check, ready to be logged
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ValidReservation {
    pub name: String,
    pub date: String,
    pub time: String,
    pub people: u32,
    pub phone: String,
    /// Local wall-clock time of the booking
    pub at: NaiveDateTime,
}

impl ValidReservation {
    pub fn into_record(self, id: Timestamp) -> Reservation {
        Reservation {
            id,
            name: self.name,
            date: self.date,
            time: self.time,
            people: self.people,
            phone: self.phone,
        }
    }
}

/// `YYYY-MM-DD` plus `HH:MM` (or `HH:MM:SS`, which some browsers send)
pub fn parse_date_time(date: &str, time: &str) -> Option<NaiveDateTime> {
    let date = NaiveDate::parse_from_str(date, "%Y-%m-%d").ok()?;
    let time = NaiveTime::parse_from_str(time, "%H:%M")
        .or_else(|_| NaiveTime::parse_from_str(time, "%H:%M:%S"))
        .ok()?;
    Some(date.and_time(time))
}

/// Check the raw fields against `now` (local time)
///
/// Order of checks: required fields, field lengths, date/time syntax, past.
/// The error message is the text to show under the form.
pub fn validate_reservation(
    form: &ReservationForm,
    now: NaiveDateTime,
) -> AppResult<ValidReservation> {
    let name = form.name.trim();
    let date = form.date.trim();
    let time = form.time.trim();
    let phone = form.phone.trim();

    let people = parse_positive(&form.people);
    let Some(people) = people.filter(|_| is_present(name) && is_present(date) && is_present(time))
    else {
        return Err(AppError::with_message(
            ErrorCode::RequiredField,
            MSG_RESERVATION_INCOMPLETE,
        ));
    };

    validate_max_len(name, "name", MAX_NAME_LEN)?;
    validate_max_len(phone, "phone", MAX_SHORT_TEXT_LEN)?;

    let at = parse_date_time(date, time).ok_or_else(|| {
        AppError::with_message(ErrorCode::ReservationInvalidDateTime, MSG_DATETIME_INVALID)
            .with_detail("date", date)
            .with_detail("time", time)
    })?;
    if at < now {
        return Err(AppError::with_message(
            ErrorCode::ReservationInPast,
            MSG_DATETIME_PAST,
        ));
    }

    Ok(ValidReservation {
        name: name.to_string(),
        date: date.to_string(),
        time: time.to_string(),
        people,
        phone: phone.to_string(),
        at,
    })
}

pub fn confirmation_message(name: &str, date: &str, time: &str) -> String {
    format!("Reservation received for {name} on {date} at {time}. We'll contact you to confirm.")
}

/// Validate, then append to the log; nothing is written on rejection
pub fn submit_reservation(
    log: &ReservationLog,
    form: &ReservationForm,
    now: NaiveDateTime,
    id: Timestamp,
) -> FormOutcome {
    let valid = match validate_reservation(form, now) {
        Ok(valid) => valid,
        Err(e) => {
            tracing::debug!(code = %e.code, "Reservation rejected: {}", e.message);
            return FormOutcome::rejected(e.message);
        }
    };

    let message = confirmation_message(&valid.name, &valid.date, &valid.time);
    match log.append(valid.into_record(id)) {
        Ok(_) => FormOutcome::accepted(message),
        Err(e) => {
            tracing::warn!(error = %e, "Failed to store reservation");
            FormOutcome::rejected(MSG_SAVE_FAILED)
        }
    }
}
