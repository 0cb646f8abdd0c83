//! Contact form model: fields, validation and the submit status lifecycle.

use std::sync::OnceLock;
use std::time::Duration;

use regex::Regex;
use serde::Serialize;
use thiserror::Error;

/// How long a success/error banner stays before returning to idle.
pub const STATUS_RESET: Duration = Duration::from_secs(5);
/// Minimum trimmed message length.
pub const MIN_MESSAGE_LEN: usize = 10;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub enum Field {
    #[default]
    Name,
    Email,
    Message,
}

impl Field {
    pub fn label(self) -> &'static str {
        match self {
            Field::Name => "Name",
            Field::Email => "Email",
            Field::Message => "Message",
        }
    }

    pub fn next(self) -> Self {
        match self {
            Field::Name => Field::Email,
            Field::Email => Field::Message,
            Field::Message => Field::Name,
        }
    }

    pub fn prev(self) -> Self {
        match self {
            Field::Name => Field::Message,
            Field::Email => Field::Name,
            Field::Message => Field::Email,
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Error)]
pub enum FieldError {
    #[error("Name is required")]
    NameRequired,
    #[error("Email is required")]
    EmailRequired,
    #[error("Please enter a valid email")]
    EmailInvalid,
    #[error("Message is required")]
    MessageRequired,
    #[error("Message must be at least 10 characters")]
    MessageTooShort,
}

/// What gets handed to the relay.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct ContactPayload {
    pub name: String,
    pub email: String,
    pub message: String,
}

/// Where the last submission stands.  `Success` and `Error` carry the clock
/// time they were entered so they can expire.
#[derive(Debug, Clone, PartialEq, Default)]
pub enum SubmitStatus {
    #[default]
    Idle,
    Sending,
    Success { at: Duration },
    Error { at: Duration, reason: String },
}

fn email_pattern() -> &'static Regex {
    static EMAIL: OnceLock<Regex> = OnceLock::new();
    EMAIL.get_or_init(|| {
        // local@domain.tld, no whitespace
        Regex::new(r"^[^\s@]+@[^\s@]+\.[^\s@]+$").expect("email pattern compiles")
    })
}

pub fn is_valid_email(email: &str) -> bool {
    email_pattern().is_match(email)
}

#[derive(Debug, Clone, Default)]
pub struct ContactForm {
    pub name: String,
    pub email: String,
    pub message: String,
    pub focus: Field,
    errors: [Option<FieldError>; 3],
    pub status: SubmitStatus,
}

impl ContactForm {
    pub fn value(&self, field: Field) -> &str {
        match field {
            Field::Name => &self.name,
            Field::Email => &self.email,
            Field::Message => &self.message,
        }
    }

    fn value_mut(&mut self, field: Field) -> &mut String {
        match field {
            Field::Name => &mut self.name,
            Field::Email => &mut self.email,
            Field::Message => &mut self.message,
        }
    }

    pub fn error(&self, field: Field) -> Option<FieldError> {
        self.errors[field as usize]
    }

    /// Typing into a field clears that field's error.
    pub fn insert_char(&mut self, c: char) {
        let field = self.focus;
        self.value_mut(field).push(c);
        self.errors[field as usize] = None;
    }

    pub fn backspace(&mut self) {
        let field = self.focus;
        self.value_mut(field).pop();
        self.errors[field as usize] = None;
    }

    pub fn is_sending(&self) -> bool {
        self.status == SubmitStatus::Sending
    }

    /// Check every field, recording errors.  On success returns the
    /// payload to send, exactly as typed.
    ///
    /// Blank checks and the message length ignore surrounding whitespace;
    /// the email pattern does not, so `" ada@x.io"` is rejected.
    pub fn validate(&mut self) -> Option<ContactPayload> {
        let message = self.message.trim();

        self.errors[Field::Name as usize] =
            self.name.trim().is_empty().then_some(FieldError::NameRequired);
        self.errors[Field::Email as usize] = if self.email.trim().is_empty() {
            Some(FieldError::EmailRequired)
        } else if !is_valid_email(&self.email) {
            Some(FieldError::EmailInvalid)
        } else {
            None
        };
        self.errors[Field::Message as usize] = if message.is_empty() {
            Some(FieldError::MessageRequired)
        } else if message.chars().count() < MIN_MESSAGE_LEN {
            Some(FieldError::MessageTooShort)
        } else {
            None
        };

        if self.errors.iter().any(Option::is_some) {
            return None;
        }
        Some(ContactPayload {
            name: self.name.clone(),
            email: self.email.clone(),
            message: self.message.clone(),
        })
    }

    /// Validate and move into `Sending`.  Returns `None` (and leaves the
    /// status alone) when validation fails or a send is in flight.
    pub fn begin_submit(&mut self) -> Option<ContactPayload> {
        if self.is_sending() {
            return None;
        }
        let payload = self.validate()?;
        self.status = SubmitStatus::Sending;
        Some(payload)
    }

    /// Apply the relay outcome at clock time `now`.
    pub fn finish_submit(&mut self, outcome: Result<(), String>, now: Duration) {
        match outcome {
            Ok(()) => {
                self.name.clear();
                self.email.clear();
                self.message.clear();
                self.focus = Field::Name;
                self.status = SubmitStatus::Success { at: now };
            }
            Err(reason) => {
                self.status = SubmitStatus::Error { at: now, reason };
            }
        }
    }

    /// Drop an expired success/error banner.
    pub fn expire_status(&mut self, now: Duration) {
        let at = match &self.status {
            SubmitStatus::Success { at } | SubmitStatus::Error { at, .. } => *at,
            SubmitStatus::Idle | SubmitStatus::Sending => return,
        };
        if now.saturating_sub(at) >= STATUS_RESET {
            self.status = SubmitStatus::Idle;
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn filled() -> ContactForm {
        ContactForm {
            name: "Ada".into(),
            email: "ada@example.com".into(),
            message: "Hello there, let's build something.".into(),
            ..Default::default()
        }
    }

    #[test]
    fn email_shape() {
        assert!(is_valid_email("a@b.co"));
        assert!(!is_valid_email("a@b"));
        assert!(!is_valid_email("a b@c.d"));
        assert!(!is_valid_email("@c.d"));
    }

    #[test]
    fn email_is_checked_as_typed() {
        let mut form = filled();
        form.email = " ada@example.com".into();
        assert!(form.validate().is_none());
        assert_eq!(form.error(Field::Email), Some(FieldError::EmailInvalid));

        form.email = "ada@example.com".into();
        form.name = "  Ada ".into();
        let payload = form.validate().expect("valid form");
        assert_eq!(payload.name, "  Ada ");
        assert_eq!(payload.email, "ada@example.com");
    }

    #[test]
    fn empty_form_reports_every_field() {
        let mut form = ContactForm::default();
        assert!(form.validate().is_none());
        assert_eq!(form.error(Field::Name), Some(FieldError::NameRequired));
        assert_eq!(form.error(Field::Email), Some(FieldError::EmailRequired));
        assert_eq!(form.error(Field::Message), Some(FieldError::MessageRequired));
    }

    #[test]
    fn short_message_and_bad_email() {
        let mut form = filled();
        form.email = "nope".into();
        form.message = "  exactly ten  ".into();
        assert!(form.validate().is_none());
        assert_eq!(form.error(Field::Email), Some(FieldError::EmailInvalid));
        assert_eq!(form.error(Field::Message), None);

        form.message = "   short   ".into();
        form.validate();
        assert_eq!(form.error(Field::Message), Some(FieldError::MessageTooShort));
        assert_eq!(
            FieldError::MessageTooShort.to_string(),
            "Message must be at least 10 characters"
        );
    }

    #[test]
    fn typing_clears_the_focused_error() {
        let mut form = ContactForm::default();
        form.validate();
        form.focus = Field::Email;
        form.insert_char('x');
        assert_eq!(form.error(Field::Email), None);
        assert_eq!(form.error(Field::Name), Some(FieldError::NameRequired));
    }

    #[test]
    fn submit_lifecycle() {
        let mut form = filled();
        let payload = form.begin_submit().expect("valid form");
        assert_eq!(payload.name, "Ada");
        assert!(form.is_sending());
        assert!(form.begin_submit().is_none());

        form.finish_submit(Ok(()), Duration::from_secs(10));
        assert!(form.name.is_empty());
        assert_eq!(form.status, SubmitStatus::Success { at: Duration::from_secs(10) });

        form.expire_status(Duration::from_secs(14));
        assert!(matches!(form.status, SubmitStatus::Success { .. }));
        form.expire_status(Duration::from_secs(15));
        assert_eq!(form.status, SubmitStatus::Idle);
    }

    #[test]
    fn failure_keeps_fields() {
        let mut form = filled();
        form.begin_submit();
        form.finish_submit(Err("HTTP 500".into()), Duration::ZERO);
        assert_eq!(form.name, "Ada");
        assert!(matches!(form.status, SubmitStatus::Error { .. }));
    }
}
