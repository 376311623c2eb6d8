use std::sync::LazyLock;
use std::time::Duration;

use regex::Regex;
use serde::Deserialize;
use thiserror::Error;

static EMAIL_RE: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r"^[^\s@]+@[^\s@]+\.[^\s@]+$").expect("email pattern should compile")
});

const NAME_MIN_LEN: usize = 2;
const MESSAGE_MIN_LEN: usize = 5;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Field {
    Name,
    Email,
    Message,
}

impl Field {
    pub const ALL: [Field; 3] = [Field::Name, Field::Email, Field::Message];

    /// DOM id of the input element.
    pub fn as_str(&self) -> &'static str {
        match self {
            Field::Name => "name",
            Field::Email => "email",
            Field::Message => "message",
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ValidationKind {
    MissingField,
    TooShort { min: usize },
    InvalidFormat,
}

/// A single field failing validation. Displays as the message shown under
/// the input.
#[derive(Error, Debug, Clone, Copy, PartialEq, Eq)]
pub enum ValidationError {
    #[error("Name must be at least {min} characters")]
    NameTooShort { min: usize },
    #[error("Email is required")]
    EmailMissing,
    #[error("Please enter a valid email address")]
    EmailInvalid,
    #[error("Message must be at least {min} characters")]
    MessageTooShort { min: usize },
}

impl ValidationError {
    pub fn field(&self) -> Field {
        match self {
            ValidationError::NameTooShort { .. } => Field::Name,
            ValidationError::EmailMissing | ValidationError::EmailInvalid => Field::Email,
            ValidationError::MessageTooShort { .. } => Field::Message,
        }
    }

    pub fn kind(&self) -> ValidationKind {
        match *self {
            ValidationError::NameTooShort { min } | ValidationError::MessageTooShort { min } => {
                ValidationKind::TooShort { min }
            }
            ValidationError::EmailMissing => ValidationKind::MissingField,
            ValidationError::EmailInvalid => ValidationKind::InvalidFormat,
        }
    }
}

#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ContactFields {
    pub name: String,
    pub email: String,
    pub message: String,
}

impl ContactFields {
    pub fn new(name: impl Into<String>, email: impl Into<String>, message: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            email: email.into(),
            message: message.into(),
        }
    }

    pub fn get(&self, field: Field) -> &str {
        match field {
            Field::Name => &self.name,
            Field::Email => &self.email,
            Field::Message => &self.message,
        }
    }

    fn get_mut(&mut self, field: Field) -> &mut String {
        match field {
            Field::Name => &mut self.name,
            Field::Email => &mut self.email,
            Field::Message => &mut self.message,
        }
    }

    pub fn is_empty(&self) -> bool {
        Field::ALL.into_iter().all(|f| self.get(f).is_empty())
    }
}

/// Per-field validation result.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct FieldErrors {
    name: Option<ValidationError>,
    email: Option<ValidationError>,
    message: Option<ValidationError>,
}

impl FieldErrors {
    pub fn get(&self, field: Field) -> Option<&ValidationError> {
        match field {
            Field::Name => self.name.as_ref(),
            Field::Email => self.email.as_ref(),
            Field::Message => self.message.as_ref(),
        }
    }

    /// The message for `field`, empty when the field passed.
    pub fn message(&self, field: Field) -> String {
        self.get(field).map(ToString::to_string).unwrap_or_default()
    }

    pub fn has(&self, field: Field) -> bool {
        self.get(field).is_some()
    }

    pub fn is_empty(&self) -> bool {
        Field::ALL.into_iter().all(|f| !self.has(f))
    }

    fn slot(&mut self, field: Field) -> &mut Option<ValidationError> {
        match field {
            Field::Name => &mut self.name,
            Field::Email => &mut self.email,
            Field::Message => &mut self.message,
        }
    }

    fn set(&mut self, error: ValidationError) {
        *self.slot(error.field()) = Some(error);
    }

    /// Returns whether an error was removed.
    fn clear(&mut self, field: Field) -> bool {
        self.slot(field).take().is_some()
    }
}

pub fn is_valid_email(email: &str) -> bool {
    EMAIL_RE.is_match(email)
}

/// Whitespace as browsers trim it: Unicode `White_Space` minus U+0085, plus
/// the byte order mark.
fn is_form_whitespace(c: char) -> bool {
    c == '\u{FEFF}' || (c.is_whitespace() && c != '\u{85}')
}

/// Length of the trimmed input in UTF-16 code units, the unit the input
/// element reports.
fn trimmed_len(value: &str) -> usize {
    value.trim_matches(is_form_whitespace).encode_utf16().count()
}

/// Validates all three fields. Every call starts from an empty result.
pub fn validate(fields: &ContactFields) -> FieldErrors {
    let mut errors = FieldErrors::default();

    if trimmed_len(&fields.name) < NAME_MIN_LEN {
        errors.set(ValidationError::NameTooShort { min: NAME_MIN_LEN });
    }

    if trimmed_len(&fields.email) == 0 {
        errors.set(ValidationError::EmailMissing);
    } else if !is_valid_email(&fields.email) {
        errors.set(ValidationError::EmailInvalid);
    }

    if trimmed_len(&fields.message) < MESSAGE_MIN_LEN {
        errors.set(ValidationError::MessageTooShort {
            min: MESSAGE_MIN_LEN,
        });
    }

    errors
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum TimerKind {
    /// Simulated network latency of a submission.
    SubmitDelay,
    ErrorDismiss,
    SuccessDismiss,
}

/// Single-shot timers, one per kind. Starting a kind that is already pending
/// replaces it.
pub trait Timers {
    fn start(&mut self, kind: TimerKind, delay: Duration);
    fn cancel(&mut self, kind: TimerKind);
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Deserialize)]
#[serde(default)]
pub struct ContactTimings {
    #[serde(rename = "submit_delay_ms", with = "millis")]
    pub submit_delay: Duration,
    #[serde(rename = "error_dismiss_ms", with = "millis")]
    pub error_dismiss: Duration,
    #[serde(rename = "success_dismiss_ms", with = "millis")]
    pub success_dismiss: Duration,
}

mod millis {
    use std::time::Duration;

    use serde::{Deserialize, Deserializer};

    pub fn deserialize<'de, D: Deserializer<'de>>(d: D) -> Result<Duration, D::Error> {
        u64::deserialize(d).map(Duration::from_millis)
    }
}

impl ContactTimings {
    pub fn delay(&self, kind: TimerKind) -> Duration {
        match kind {
            TimerKind::SubmitDelay => self.submit_delay,
            TimerKind::ErrorDismiss => self.error_dismiss,
            TimerKind::SuccessDismiss => self.success_dismiss,
        }
    }
}

impl Default for ContactTimings {
    fn default() -> Self {
        Self {
            submit_delay: Duration::from_millis(1500),
            error_dismiss: Duration::from_millis(4000),
            success_dismiss: Duration::from_millis(5000),
        }
    }
}

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub enum SubmissionStatus {
    #[default]
    Idle,
    Submitting,
    Success,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SubmitOutcome {
    /// Validation passed; the simulated send is in flight.
    Accepted,
    /// At least one field failed; errors are shown.
    Rejected,
    /// A send is already in flight.
    Busy,
}

/// State of the contact form for one page session.
#[derive(Debug, Clone, Default)]
pub struct ContactForm {
    timings: ContactTimings,
    fields: ContactFields,
    errors: FieldErrors,
    status: SubmissionStatus,
}

impl ContactForm {
    pub fn new(timings: ContactTimings) -> Self {
        Self {
            timings,
            ..Default::default()
        }
    }

    pub fn fields(&self) -> &ContactFields {
        &self.fields
    }

    pub fn errors(&self) -> &FieldErrors {
        &self.errors
    }

    pub fn status(&self) -> SubmissionStatus {
        self.status
    }

    pub fn is_submitting(&self) -> bool {
        self.status == SubmissionStatus::Submitting
    }

    pub fn is_success(&self) -> bool {
        self.status == SubmissionStatus::Success
    }

    /// Stores user input. Clears the error of the edited field only.
    pub fn edit(&mut self, field: Field, value: impl Into<String>, timers: &mut impl Timers) {
        *self.fields.get_mut(field) = value.into();
        if self.errors.clear(field) {
            self.errors_changed(timers);
        }
    }

    pub fn submit(&mut self, timers: &mut impl Timers) -> SubmitOutcome {
        if self.status == SubmissionStatus::Submitting {
            return SubmitOutcome::Busy;
        }
        if self.status == SubmissionStatus::Success {
            timers.cancel(TimerKind::SuccessDismiss);
            self.set_status(SubmissionStatus::Idle);
        }

        let errors = validate(&self.fields);
        let changed = errors != self.errors;
        self.errors = errors;
        if changed || !self.errors.is_empty() {
            // a fresh rejection restarts the dismiss window
            self.errors_changed(timers);
        }

        if !self.errors.is_empty() {
            log::info!("contact form rejected: {:?}", self.errors);
            return SubmitOutcome::Rejected;
        }

        self.set_status(SubmissionStatus::Submitting);
        self.arm(TimerKind::SubmitDelay, timers);
        SubmitOutcome::Accepted
    }

    /// Applies an elapsed timer. Timers that no longer match the current
    /// state are ignored.
    pub fn on_timer(&mut self, kind: TimerKind, timers: &mut impl Timers) {
        match kind {
            TimerKind::SubmitDelay if self.status == SubmissionStatus::Submitting => {
                self.fields = ContactFields::default();
                self.set_status(SubmissionStatus::Success);
                self.arm(TimerKind::SuccessDismiss, timers);
            }
            TimerKind::SuccessDismiss if self.status == SubmissionStatus::Success => {
                self.set_status(SubmissionStatus::Idle);
            }
            TimerKind::ErrorDismiss => {
                if !self.errors.is_empty() {
                    log::debug!("contact form errors dismissed");
                }
                self.errors = FieldErrors::default();
            }
            kind => log::debug!("ignoring stale {kind:?} timer in {:?}", self.status),
        }
    }

    /// Cancels all pending timers; the form must not change after this.
    pub fn dispose(&self, timers: &mut impl Timers) {
        for kind in [
            TimerKind::SubmitDelay,
            TimerKind::ErrorDismiss,
            TimerKind::SuccessDismiss,
        ] {
            timers.cancel(kind);
        }
    }

    fn errors_changed(&mut self, timers: &mut impl Timers) {
        if self.errors.is_empty() {
            timers.cancel(TimerKind::ErrorDismiss);
        } else {
            self.arm(TimerKind::ErrorDismiss, timers);
        }
    }

    fn arm(&self, kind: TimerKind, timers: &mut impl Timers) {
        timers.start(kind, self.timings.delay(kind));
    }

    fn set_status(&mut self, status: SubmissionStatus) {
        log::debug!("contact form {:?} -> {:?}", self.status, status);
        self.status = status;
    }
}
