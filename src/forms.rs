//! Field validation for login and password-reset forms.
//!
//! Only "required" and "email format" checks exist; everything else is the
//! API's job. Validation failures and submission failures are the only
//! errors a page shows to the user, inline next to the form.

use std::fmt;

use crate::i18n::Translator;

/// A field that failed validation.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum FieldError {
    /// The field is empty or whitespace
    Required {
        /// Translation key of the field label
        field: String,
    },
    /// The field is not an email address
    InvalidEmail {
        /// Translation key of the field label
        field: String,
    },
}

impl FieldError {
    /// Translation key of the offending field's label.
    pub fn field(&self) -> &str {
        match self {
            FieldError::Required { field } | FieldError::InvalidEmail { field } => field,
        }
    }

    /// Inline message in the translator's language.
    pub fn message(&self, translator: &Translator) -> String {
        match self {
            FieldError::Required { field } => {
                let label = translator.t(field);
                translator.t_with("forms.required", &[("field", &label)])
            }
            FieldError::InvalidEmail { .. } => translator.t("forms.invalidEmail"),
        }
    }
}

impl fmt::Display for FieldError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            FieldError::Required { field } => write!(f, "{} is required", field),
            FieldError::InvalidEmail { field } => write!(f, "{} is not a valid email", field),
        }
    }
}

impl std::error::Error for FieldError {}

/// Check that a field has a non-blank value.
pub fn validate_required(field: &str, value: &str) -> Result<(), FieldError> {
    if value.trim().is_empty() {
        return Err(FieldError::Required {
            field: field.to_string(),
        });
    }
    Ok(())
}

/// Check that a field is present and looks like an email address.
pub fn validate_email(field: &str, value: &str) -> Result<(), FieldError> {
    validate_required(field, value)?;
    if !is_email(value.trim()) {
        return Err(FieldError::InvalidEmail {
            field: field.to_string(),
        });
    }
    Ok(())
}

/// Exactly one `@`, a non-empty local part, a dotted domain, no whitespace.
fn is_email(value: &str) -> bool {
    if value.chars().any(char::is_whitespace) {
        return false;
    }
    let Some((local, domain)) = value.split_once('@') else {
        return false;
    };
    if local.is_empty() || domain.contains('@') {
        return false;
    }
    match domain.rsplit_once('.') {
        Some((name, tld)) => !name.is_empty() && !tld.is_empty() && !domain.starts_with('.'),
        None => false,
    }
}

/// Validate the login form, returning every failing field.
pub fn validate_login(email: &str, password: &str) -> Vec<FieldError> {
    [
        validate_email("auth.login.email", email),
        validate_required("auth.login.password", password),
    ]
    .into_iter()
    .filter_map(Result::err)
    .collect()
}

/// Validate the password-reset request form.
pub fn validate_password_reset(email: &str) -> Vec<FieldError> {
    validate_email("auth.login.email", email).err().into_iter().collect()
}
