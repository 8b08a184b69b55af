//! Contact form record and client-side validation.

use std::fmt;

#[cfg(feature = "serde")]
use serde::Serialize;

use crate::notify::NotificationKind;

pub const FORM_ID: &str = "contactForm";
pub const NAME_FIELD_ID: &str = "name";
pub const EMAIL_FIELD_ID: &str = "email";
pub const PHONE_FIELD_ID: &str = "phone";
pub const DATE_FIELD_ID: &str = "date";
pub const MESSAGE_FIELD_ID: &str = "message";

pub const SUCCESS_MESSAGE: &str =
    "Thank you! We've received your inquiry and will be in touch within 24 hours.";

/// Field values exactly as read from the form controls.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct RawContactFields {
    pub name: String,
    pub email: String,
    pub phone: String,
    pub date: String,
    pub message: String,
}

#[derive(Debug, Clone, Default, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(Serialize))]
pub struct ContactSubmission {
    pub name: String,
    pub email: String,
    pub phone: String,
    pub date: String,
    pub message: String,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ValidationError {
    MissingRequired,
    InvalidEmail,
}

impl fmt::Display for ValidationError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            ValidationError::MissingRequired => f.write_str("Please fill in all required fields."),
            ValidationError::InvalidEmail => f.write_str("Please enter a valid email address."),
        }
    }
}

impl std::error::Error for ValidationError {}

/// Whitespace as browsers define it for `String.prototype.trim` and regex `\s`:
/// WhiteSpace plus LineTerminator. Unlike `char::is_whitespace` this includes
/// U+FEFF and excludes U+0085.
pub fn is_js_whitespace(c: char) -> bool {
    matches!(
        c,
        '\u{0009}'
            | '\u{000A}'
            | '\u{000B}'
            | '\u{000C}'
            | '\u{000D}'
            | '\u{0020}'
            | '\u{00A0}'
            | '\u{1680}'
            | '\u{2000}'..='\u{200A}'
            | '\u{2028}'
            | '\u{2029}'
            | '\u{202F}'
            | '\u{205F}'
            | '\u{3000}'
            | '\u{FEFF}'
    )
}

fn js_trim(s: &str) -> String {
    s.trim_matches(is_js_whitespace).to_string()
}

impl From<RawContactFields> for ContactSubmission {
    fn from(raw: RawContactFields) -> Self {
        // The date picker value is used untrimmed.
        Self {
            name: js_trim(&raw.name),
            email: js_trim(&raw.email),
            phone: js_trim(&raw.phone),
            date: raw.date,
            message: js_trim(&raw.message),
        }
    }
}

/// What a submit should do to the page.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SubmitOutcome {
    pub kind: NotificationKind,
    pub message: String,
    /// Clear the form controls.
    pub reset: bool,
    /// The accepted record, for logging. `None` when validation failed.
    pub record: Option<ContactSubmission>,
}

/// Validate a submission and decide the toast, form reset, and log record.
pub fn submit(raw: RawContactFields) -> SubmitOutcome {
    let submission = ContactSubmission::from(raw);
    match submission.validate() {
        Ok(()) => SubmitOutcome {
            kind: NotificationKind::Success,
            message: SUCCESS_MESSAGE.to_string(),
            reset: true,
            record: Some(submission),
        },
        Err(e) => SubmitOutcome {
            kind: NotificationKind::Error,
            message: e.to_string(),
            reset: false,
            record: None,
        },
    }
}

impl ContactSubmission {
    /// Required fields first, then email format.
    pub fn validate(&self) -> Result<(), ValidationError> {
        if self.name.is_empty() || self.email.is_empty() || self.message.is_empty() {
            return Err(ValidationError::MissingRequired);
        }
        if !is_valid_email(&self.email) {
            return Err(ValidationError::InvalidEmail);
        }
        Ok(())
    }
}

/// `local@domain.tld` with no whitespace and exactly one `@`.
///
/// Equivalent to `^[^\s@]+@[^\s@]+\.[^\s@]+$`: the domain needs a `.` with at least
/// one character on each side, and any such dot will do.
pub fn is_valid_email(email: &str) -> bool {
    if email.chars().any(is_js_whitespace) {
        return false;
    }
    let Some((local, domain)) = email.split_once('@') else {
        return false;
    };
    if local.is_empty() || domain.contains('@') {
        return false;
    }
    domain
        .char_indices()
        .any(|(i, c)| c == '.' && i > 0 && i + 1 < domain.len())
}
