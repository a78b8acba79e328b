//! Reservation and contact form handling
//!
//! Each submit returns a [`FormOutcome`]; the page shows its message and
//! resets the form only when told to.

mod contact;
mod reservation;

pub use contact::{MSG_CONTACT_INCOMPLETE, MSG_CONTACT_THANKS, submit_contact, validate_contact};
pub use reservation::{
    MSG_DATETIME_INVALID, MSG_DATETIME_PAST, MSG_RESERVATION_INCOMPLETE, MSG_SAVE_FAILED,
    ValidReservation, confirmation_message, parse_date_time, submit_reservation,
    validate_reservation,
};

use serde::Serialize;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum FormStatus {
    Accepted,
    Rejected,
}

/// Result of a form submission, as shown under the form
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct FormOutcome {
    pub status: FormStatus,
    pub message: String,
    /// Clear the inputs (success only)
    pub reset_form: bool,
}

impl FormOutcome {
    pub fn accepted(message: impl Into<String>) -> Self {
        Self {
            status: FormStatus::Accepted,
            message: message.into(),
            reset_form: true,
        }
    }

    /// Rejections keep what the user typed
    pub fn rejected(message: impl Into<String>) -> Self {
        Self {
            status: FormStatus::Rejected,
            message: message.into(),
            reset_form: false,
        }
    }

    pub fn is_accepted(&self) -> bool {
        self.status == FormStatus::Accepted
    }
}
