//! Server-side contact validation, shared by the public and admin
//! surfaces. Rejections happen before any slot transition is attempted and
//! never touch catalog state.

use once_cell::sync::Lazy;
use regex::Regex;

use crate::errors::{BookingError, BookingResult};

/// Minimum digit count for a phone number, counted after stripping
/// every non-digit character.
pub const PHONE_DIGITS_MIN: usize = 9;

static EMAIL_RE: Lazy<Regex> =
    Lazy::new(|| Regex::new(r"^[^\s@]+@[^\s@]+\.[^\s@]+$").expect("email regex is valid"));

/// A phone number is accepted if at least [`PHONE_DIGITS_MIN`] digits
/// remain once formatting characters are stripped, so `+36 30 123 4567`
/// and `06301234567` both pass.
pub fn is_valid_phone(s: &str) -> bool {
    s.chars().filter(|c| c.is_ascii_digit()).count() >= PHONE_DIGITS_MIN
}

/// Accepts the usual `local@domain.tld` shape.
pub fn is_valid_email(s: &str) -> bool {
    EMAIL_RE.is_match(s.trim())
}

pub fn validate_contact(booking_name: &str, phone: &str, email: &str) -> BookingResult<()> {
    if booking_name.trim().is_empty() {
        return Err(BookingError::Validation(
            "Booking name must not be empty".to_string(),
        ));
    }
    if !is_valid_phone(phone) {
        return Err(BookingError::Validation(format!(
            "Phone number must contain at least {} digits",
            PHONE_DIGITS_MIN
        )));
    }
    if !is_valid_email(email) {
        return Err(BookingError::Validation(
            "Email address must look like name@example.com".to_string(),
        ));
    }
    Ok(())
}
