//! # Contact Form
//!
//! Field state, per-field validators and the aggregate check.
//!
//! Validators are pure predicates; [`ContactForm`] stores their verdicts as
//! field-local errors so the view can mark each field. Nothing here raises
//! toasts or touches timers: submission flow lives on `App`.

use std::fmt;

pub const MAX_MESSAGE_LEN: usize = 500;
/// The character counter turns amber above this.
pub const MESSAGE_WARN_LEN: usize = 480;
/// Simulated transmission time.
pub const SUBMIT_DELAY_MS: u64 = 2_000;
/// How long the "sent" state lingers before the form resets.
pub const RESET_DELAY_MS: u64 = 3_500;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Field {
    Name,
    Email,
    Subject,
    Message,
    Consent,
}

impl Field {
    pub const ALL: [Field; 5] = [
        Field::Name,
        Field::Email,
        Field::Subject,
        Field::Message,
        Field::Consent,
    ];

    fn index(self) -> usize {
        self as usize
    }

    pub fn next(self) -> Field {
        Self::ALL[(self.index() + 1) % Self::ALL.len()]
    }

    pub fn previous(self) -> Field {
        Self::ALL[(self.index() + Self::ALL.len() - 1) % Self::ALL.len()]
    }

    pub fn label(self) -> &'static str {
        match self {
            Field::Name => "Name",
            Field::Email => "Email",
            Field::Subject => "Subject",
            Field::Message => "Message",
            Field::Consent => "Consent",
        }
    }

    /// Text fields accept typed characters.
    pub fn is_text(self) -> bool {
        matches!(self, Field::Name | Field::Email | Field::Message)
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Subject {
    JobOpportunity,
    Collaboration,
    Consulting,
    Other,
}

impl Subject {
    pub const ALL: [Subject; 4] = [
        Subject::JobOpportunity,
        Subject::Collaboration,
        Subject::Consulting,
        Subject::Other,
    ];

    pub fn label(self) -> &'static str {
        match self {
            Subject::JobOpportunity => "Job Opportunity",
            Subject::Collaboration => "Collaboration",
            Subject::Consulting => "Security Consulting",
            Subject::Other => "Other",
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum FieldError {
    MissingRequired(Field),
    InvalidEmail,
    MissingSelection,
    UncheckedConsent,
}

impl fmt::Display for FieldError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let text = match self {
            FieldError::MissingRequired(Field::Email) => "Email is required",
            FieldError::MissingRequired(Field::Message) => "Message cannot be empty",
            FieldError::MissingRequired(_) => "Name is required",
            FieldError::InvalidEmail => "Enter a valid email address",
            FieldError::MissingSelection => "Please select a subject",
            FieldError::UncheckedConsent => "You must consent to proceed",
        };
        f.write_str(text)
    }
}

impl std::error::Error for FieldError {}

// ============================================================================
// Predicates
// ============================================================================

pub fn validate_required(field: Field, value: &str) -> Result<(), FieldError> {
    if value.trim().is_empty() {
        Err(FieldError::MissingRequired(field))
    } else {
        Ok(())
    }
}

/// `local@domain.tld`: no whitespace, exactly one `@`, non-empty local part,
/// and a dot in the domain with at least one character on each side.
pub fn is_valid_email(value: &str) -> bool {
    if value.chars().any(char::is_whitespace) {
        return false;
    }
    let Some((local, domain)) = value.split_once('@') else {
        return false;
    };
    if local.is_empty() || domain.contains('@') {
        return false;
    }
    domain
        .char_indices()
        .any(|(i, c)| c == '.' && i > 0 && i + 1 < domain.len())
}

pub fn validate_email(value: &str) -> Result<(), FieldError> {
    validate_required(Field::Email, value)?;
    if is_valid_email(value) {
        Ok(())
    } else {
        Err(FieldError::InvalidEmail)
    }
}

pub fn validate_subject(subject: Option<Subject>) -> Result<(), FieldError> {
    subject.map(|_| ()).ok_or(FieldError::MissingSelection)
}

pub fn validate_consent(consent: bool) -> Result<(), FieldError> {
    if consent {
        Ok(())
    } else {
        Err(FieldError::UncheckedConsent)
    }
}

// ============================================================================
// Form State
// ============================================================================

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum SubmitStatus {
    #[default]
    Idle,
    Submitting,
    Sent,
}

#[derive(Debug, Clone, Default)]
pub struct ContactForm {
    pub name: String,
    pub email: String,
    pub subject: Option<Subject>,
    pub message: String,
    pub consent: bool,
    pub status: SubmitStatus,
    /// Whether keystrokes go to the form.
    pub editing: bool,
    focus: Option<Field>,
    /// Highlighted option while the subject dropdown is open.
    dropdown: Option<usize>,
    errors: [Option<FieldError>; 5],
}

impl ContactForm {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn focus(&self) -> Field {
        self.focus.unwrap_or(Field::Name)
    }

    pub fn error(&self, field: Field) -> Option<FieldError> {
        self.errors[field.index()]
    }

    pub fn has_errors(&self) -> bool {
        self.errors.iter().any(Option::is_some)
    }

    pub fn clear_error(&mut self, field: Field) {
        self.errors[field.index()] = None;
    }

    fn check(&self, field: Field) -> Result<(), FieldError> {
        match field {
            Field::Name => validate_required(Field::Name, &self.name),
            Field::Email => validate_email(&self.email),
            Field::Subject => validate_subject(self.subject),
            Field::Message => validate_required(Field::Message, &self.message),
            Field::Consent => validate_consent(self.consent),
        }
    }

    /// Validate one field and record the verdict on it.
    pub fn validate_field(&mut self, field: Field) -> bool {
        let result = self.check(field);
        self.errors[field.index()] = result.err();
        result.is_ok()
    }

    /// Validate every field (no short-circuit, so every field is annotated).
    pub fn validate_all(&mut self) -> bool {
        Field::ALL
            .into_iter()
            .map(|field| self.validate_field(field))
            .fold(true, |all, ok| all && ok)
    }

    // --- Editing -----------------------------------------------------------

    pub fn begin_editing(&mut self) {
        self.editing = true;
        self.focus.get_or_insert(Field::Name);
    }

    /// Stop editing; the focused field loses focus and is validated.
    pub fn end_editing(&mut self) {
        self.dropdown = None;
        self.blur();
        self.editing = false;
    }

    /// Blur validation only covers the free-text fields.
    fn blur(&mut self) {
        let field = self.focus();
        if field.is_text() {
            self.validate_field(field);
        }
    }

    pub fn focus_next(&mut self) {
        self.blur();
        self.dropdown = None;
        self.focus = Some(self.focus().next());
    }

    pub fn focus_previous(&mut self) {
        self.blur();
        self.dropdown = None;
        self.focus = Some(self.focus().previous());
    }

    pub fn input_char(&mut self, c: char) {
        match self.focus() {
            Field::Name => self.name.push(c),
            Field::Email => self.email.push(c),
            Field::Message => {
                if self.message.chars().count() < MAX_MESSAGE_LEN {
                    self.message.push(c);
                }
            }
            Field::Consent if c == ' ' => self.toggle_consent(),
            Field::Subject | Field::Consent => {}
        }
    }

    pub fn backspace(&mut self) {
        match self.focus() {
            Field::Name => {
                self.name.pop();
            }
            Field::Email => {
                self.email.pop();
            }
            Field::Message => {
                self.message.pop();
            }
            Field::Subject | Field::Consent => {}
        }
    }

    /// Replace the message, truncated to [`MAX_MESSAGE_LEN`] characters.
    pub fn set_message(&mut self, text: &str) {
        self.message = text.chars().take(MAX_MESSAGE_LEN).collect();
    }

    pub fn char_count(&self) -> usize {
        self.message.chars().count()
    }

    pub fn near_limit(&self) -> bool {
        self.char_count() > MESSAGE_WARN_LEN
    }

    pub fn toggle_consent(&mut self) {
        self.consent = !self.consent;
        if self.consent {
            self.clear_error(Field::Consent);
        }
    }

    // --- Subject dropdown --------------------------------------------------

    pub fn dropdown(&self) -> Option<usize> {
        self.dropdown
    }

    pub fn toggle_dropdown(&mut self) {
        self.dropdown = match self.dropdown {
            Some(_) => None,
            None => Some(
                self.subject
                    .and_then(|s| Subject::ALL.iter().position(|&o| o == s))
                    .unwrap_or(0),
            ),
        };
    }

    pub fn close_dropdown(&mut self) {
        self.dropdown = None;
    }

    pub fn move_dropdown(&mut self, delta: isize) {
        if let Some(index) = self.dropdown {
            let len = Subject::ALL.len() as isize;
            self.dropdown = Some((index as isize + delta).rem_euclid(len) as usize);
        }
    }

    /// Pick the highlighted option and close the dropdown.
    pub fn choose_highlighted(&mut self) {
        if let Some(index) = self.dropdown.take() {
            self.subject = Subject::ALL.get(index).copied();
            self.clear_error(Field::Subject);
        }
    }

    /// Back to a blank form.
    pub fn reset(&mut self) {
        *self = Self::default();
    }
}
