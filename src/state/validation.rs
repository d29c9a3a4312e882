//! Field-level validation for the login and set-password forms.
//!
//! DESIGN
//! ======
//! Rules are declared with `validator` derives on the form input structs and
//! flattened into `FieldErrors`, one message per field. Nothing here touches
//! the DOM or the network; pages render whatever the map contains.

#[cfg(test)]
#[path = "validation_test.rs"]
mod validation_test;

use std::collections::BTreeMap;

use serde::Serialize;
use validator::{Validate, ValidationError, ValidationErrors};

/// Form fields that can carry a validation message.
#[derive(Clone, Copy, Debug, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub enum Field {
    Email,
    Password,
    NewPassword,
    ConfirmPassword,
}

impl Field {
    /// Name used by the form markup (`name=` / `id=` attributes).
    pub fn as_str(self) -> &'static str {
        match self {
            Self::Email => "email",
            Self::Password => "password",
            Self::NewPassword => "newPassword",
            Self::ConfirmPassword => "confirmPassword",
        }
    }

    fn from_struct_field(name: &str) -> Option<Self> {
        match name {
            "email" => Some(Self::Email),
            "password" => Some(Self::Password),
            "new_password" => Some(Self::NewPassword),
            "confirm_password" => Some(Self::ConfirmPassword),
            _ => None,
        }
    }
}

/// Validation messages keyed by field. Empty means the form may be submitted.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct FieldErrors(BTreeMap<Field, String>);

impl FieldErrors {
    pub fn get(&self, field: Field) -> Option<&str> {
        self.0.get(&field).map(String::as_str)
    }

    pub fn contains(&self, field: Field) -> bool {
        self.0.contains_key(&field)
    }

    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }

    pub fn len(&self) -> usize {
        self.0.len()
    }

    pub fn fields(&self) -> impl Iterator<Item = Field> + '_ {
        self.0.keys().copied()
    }

    fn from_result(result: Result<(), ValidationErrors>) -> Self {
        let Err(errors) = result else {
            return Self::default();
        };
        let mut map = BTreeMap::new();
        for (name, errs) in errors.field_errors() {
            let Some(field) = Field::from_struct_field(&name) else {
                continue;
            };
            // A too-short value is reported before a mismatch.
            if let Some(err) = errs.iter().min_by_key(|e| rule_rank(e)) {
                map.insert(field, message_of(err));
            }
        }
        Self(map)
    }
}

fn rule_rank(err: &ValidationError) -> u8 {
    match err.code.as_ref() {
        "length" | "email" => 0,
        _ => 1,
    }
}

fn message_of(err: &ValidationError) -> String {
    err.message.as_ref().map_or_else(|| err.code.to_string(), ToString::to_string)
}

/// Login form input; also the JSON body of `POST /api/login`.
#[derive(Clone, Debug, Default, PartialEq, Eq, Serialize, Validate)]
pub struct LoginCredentials {
    #[validate(email(message = "Invalid email address"))]
    pub email: String,
    #[validate(length(min = 6, message = "Password must be at least 6 characters"))]
    pub password: String,
}

/// Set-password form input.
#[derive(Clone, Debug, Default, PartialEq, Eq, Validate)]
pub struct PasswordResetInput {
    #[validate(length(min = 6, message = "Password must be at least 6 characters."))]
    pub new_password: String,
    #[validate(length(min = 6, message = "Password must be at least 6 characters."))]
    #[validate(must_match(other = "new_password", message = "Passwords do not match."))]
    pub confirm_password: String,
}

/// Flags `email` unless it is `local@domain` shaped and `password` when
/// shorter than 6 characters.
pub fn validate_login(input: &LoginCredentials) -> FieldErrors {
    FieldErrors::from_result(input.validate())
}

/// Flags `newPassword` when shorter than 6 characters and `confirmPassword`
/// when shorter than 6 characters or different from `newPassword`.
pub fn validate_password_reset(input: &PasswordResetInput) -> FieldErrors {
    FieldErrors::from_result(input.validate())
}
