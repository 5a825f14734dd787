use crate::constants::{
    CHAR_COUNT_DANGER_ABOVE, CHAR_COUNT_WARN_ABOVE, MESSAGE_MAX_CHARS, MESSAGE_MIN_CHARS,
    NAME_MIN_CHARS, SUBJECT_MIN_CHARS,
};
use smallvec::SmallVec;
use thiserror::Error;

#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum Field {
    Name,
    Email,
    Subject,
    Message,
}

impl Field {
    pub const ALL: [Field; 4] = [Field::Name, Field::Email, Field::Subject, Field::Message];

    /// Element id of the input.
    pub fn id(self) -> &'static str {
        match self {
            Field::Name => "name",
            Field::Email => "email",
            Field::Subject => "subject",
            Field::Message => "message",
        }
    }

    /// Element id of the inline error slot next to the input.
    pub fn error_id(self) -> &'static str {
        match self {
            Field::Name => "name-error",
            Field::Email => "email-error",
            Field::Subject => "subject-error",
            Field::Message => "message-error",
        }
    }

    pub fn label(self) -> &'static str {
        match self {
            Field::Name => "Name",
            Field::Email => "Email",
            Field::Subject => "Subject",
            Field::Message => "Message",
        }
    }
}

/// A single field's validation failure; `Display` is the inline message.
#[derive(Clone, Debug, PartialEq, Eq, Error)]
pub enum FieldError {
    #[error("{} is required", .0.label())]
    Required(Field),
    #[error("{} must be at least {min} characters", .field.label())]
    TooShort { field: Field, min: usize },
    #[error("{} must be less than {max} characters", .field.label())]
    TooLong { field: Field, max: usize },
    #[error("Please enter a valid email address")]
    InvalidEmail,
}

impl FieldError {
    pub fn field(&self) -> Field {
        match self {
            FieldError::Required(f) => *f,
            FieldError::TooShort { field, .. } | FieldError::TooLong { field, .. } => *field,
            FieldError::InvalidEmail => Field::Email,
        }
    }
}

pub type FieldErrors = SmallVec<[FieldError; 4]>;

/// The failure reported for `field`, if any.
pub fn error_for(errors: &[FieldError], field: Field) -> Option<&FieldError> {
    errors.iter().find(|e| e.field() == field)
}

/// Validate one raw input value. Limits apply to the trimmed text and count
/// characters, not bytes.
pub fn validate_field(field: Field, raw: &str) -> Result<(), FieldError> {
    let value = raw.trim();
    if value.is_empty() {
        return Err(FieldError::Required(field));
    }
    let len = value.chars().count();
    match field {
        Field::Name if len < NAME_MIN_CHARS => Err(FieldError::TooShort {
            field,
            min: NAME_MIN_CHARS,
        }),
        Field::Email if !is_valid_email(value) => Err(FieldError::InvalidEmail),
        Field::Subject if len < SUBJECT_MIN_CHARS => Err(FieldError::TooShort {
            field,
            min: SUBJECT_MIN_CHARS,
        }),
        Field::Message if len < MESSAGE_MIN_CHARS => Err(FieldError::TooShort {
            field,
            min: MESSAGE_MIN_CHARS,
        }),
        Field::Message if len > MESSAGE_MAX_CHARS => Err(FieldError::TooLong {
            field,
            max: MESSAGE_MAX_CHARS,
        }),
        _ => Ok(()),
    }
}

/// `local@domain` with no whitespace, exactly one `@`, and a dot inside the
/// domain that has text on both sides.
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

#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct ContactForm {
    pub name: String,
    pub email: String,
    pub subject: String,
    pub message: String,
}

impl ContactForm {
    pub fn value(&self, field: Field) -> &str {
        match field {
            Field::Name => &self.name,
            Field::Email => &self.email,
            Field::Subject => &self.subject,
            Field::Message => &self.message,
        }
    }

    pub fn trimmed(&self) -> ContactForm {
        ContactForm {
            name: self.name.trim().to_string(),
            email: self.email.trim().to_string(),
            subject: self.subject.trim().to_string(),
            message: self.message.trim().to_string(),
        }
    }

    /// Validate every field, collecting all failures.
    pub fn validate(&self) -> Result<(), FieldErrors> {
        let errors: FieldErrors = Field::ALL
            .iter()
            .filter_map(|&f| validate_field(f, self.value(f)).err())
            .collect();
        if errors.is_empty() {
            Ok(())
        } else {
            Err(errors)
        }
    }
}

/// Colour band of the live message character counter.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum CharCountLevel {
    Normal,
    Warning,
    Danger,
}

impl CharCountLevel {
    pub fn for_len(len: usize) -> Self {
        if len > CHAR_COUNT_DANGER_ABOVE {
            CharCountLevel::Danger
        } else if len > CHAR_COUNT_WARN_ABOVE {
            CharCountLevel::Warning
        } else {
            CharCountLevel::Normal
        }
    }

    pub fn color(self) -> &'static str {
        match self {
            CharCountLevel::Normal => "#00d4ff",
            CharCountLevel::Warning => "#ffbd2e",
            CharCountLevel::Danger => "#ff5f56",
        }
    }
}
