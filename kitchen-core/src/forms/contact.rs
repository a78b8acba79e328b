//! Contact form (acknowledged only, nothing is stored)

use shared::error::{AppError, AppResult, ErrorCode};
use shared::models::ContactForm;

use super::FormOutcome;
use crate::utils::validation::{
    MAX_EMAIL_LEN, MAX_MESSAGE_LEN, MAX_NAME_LEN, is_present, validate_max_len,
};

pub const MSG_CONTACT_INCOMPLETE: &str = "Please fill all fields.";
pub const MSG_CONTACT_THANKS: &str = "Thanks — we received your message and will reply soon!";

pub fn validate_contact(form: &ContactForm) -> AppResult<()> {
    if ![&form.name, &form.email, &form.message]
        .iter()
        .all(|f| is_present(f))
    {
        return Err(AppError::with_message(
            ErrorCode::RequiredField,
            MSG_CONTACT_INCOMPLETE,
        ));
    }
    validate_max_len(&form.name, "name", MAX_NAME_LEN)?;
    validate_max_len(&form.email, "email", MAX_EMAIL_LEN)?;
    validate_max_len(&form.message, "message", MAX_MESSAGE_LEN)?;
    Ok(())
}

pub fn submit_contact(form: &ContactForm) -> FormOutcome {
    match validate_contact(form) {
        Ok(()) => {
            tracing::info!(email = form.email.trim(), "Contact message received");
            FormOutcome::accepted(MSG_CONTACT_THANKS)
        }
        Err(e) => FormOutcome::rejected(e.message),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::forms::FormStatus;

    fn form(name: &str, email: &str, message: &str) -> ContactForm {
        ContactForm {
            name: name.to_string(),
            email: email.to_string(),
            message: message.to_string(),
        }
    }

    #[test]
    fn test_contact_accepted() {
        let outcome = submit_contact(&form("Asha", "asha@example.com", "Do you cater?"));
        assert_eq!(outcome.status, FormStatus::Accepted);
        assert_eq!(outcome.message, MSG_CONTACT_THANKS);
        assert!(outcome.reset_form);
    }

    #[test]
    fn test_contact_requires_every_field() {
        for f in [
            form(" ", "asha@example.com", "Hi"),
            form("Asha", "", "Hi"),
            form("Asha", "asha@example.com", "\n"),
        ] {
            assert_eq!(submit_contact(&f), FormOutcome::rejected(MSG_CONTACT_INCOMPLETE));
        }
    }

    #[test]
    fn test_contact_message_length() {
        let long = "m".repeat(MAX_MESSAGE_LEN + 1);
        let err = validate_contact(&form("Asha", "asha@example.com", &long)).unwrap_err();
        assert_eq!(err.code, ErrorCode::ValueOutOfRange);
        assert_eq!(err.detail("field").and_then(|v| v.as_str()), Some("message"));
    }
}
