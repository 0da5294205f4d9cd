//! Field validation for the registration form.
//!
//! Every rule is checked independently, so a single call reports all problems
//! with a draft at once. Only emptiness is checked for plain fields: a value
//! made of spaces counts as filled in.
//!
//! # Rules
//! - `name`, `password`, `gender`, `address`, `city`: must be non-empty
//! - `email`: must be non-empty and look like `local@domain.tld`
//!
//! # Examples
//! ```
//! use regbookapp::model::{Draft, Field};
//! use regbookapp::validation::validate;
//!
//! let errors = validate(&Draft::new().with(Field::Email, "bad"));
//! assert_eq!(errors.get(Field::Email), Some("Please enter a valid email address"));
//! assert_eq!(errors.get(Field::Name), Some("Name is required"));
//! ```

use crate::model::{Draft, Field};
use once_cell::sync::Lazy;
use regex::Regex;
use serde::Serialize;
use std::collections::BTreeMap;

static EMAIL_PATTERN: Lazy<Regex> =
    Lazy::new(|| Regex::new(r"^[^\s@]+@[^\s@]+\.[^\s@]+$").expect("email pattern compiles"));

pub const INVALID_EMAIL: &str = "Please enter a valid email address";

/// Field-level error messages, keyed and ordered by [`Field`].
///
/// Empty means the draft is acceptable.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
#[serde(transparent)]
pub struct FieldErrors(BTreeMap<Field, String>);

impl FieldErrors {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }

    pub fn len(&self) -> usize {
        self.0.len()
    }

    pub fn get(&self, field: Field) -> Option<&str> {
        self.0.get(&field).map(String::as_str)
    }

    pub fn contains(&self, field: Field) -> bool {
        self.0.contains_key(&field)
    }

    pub fn fields(&self) -> impl Iterator<Item = Field> + '_ {
        self.0.keys().copied()
    }

    pub fn iter(&self) -> impl Iterator<Item = (Field, &str)> {
        self.0.iter().map(|(f, m)| (*f, m.as_str()))
    }

    pub fn clear(&mut self) {
        self.0.clear();
    }

    fn insert(&mut self, field: Field, message: impl Into<String>) {
        self.0.insert(field, message.into());
    }
}

/// Message reported when a field is left empty.
pub fn required_message(field: Field) -> &'static str {
    match field {
        Field::Name => "Name is required",
        Field::Email => "Email is required",
        Field::Password => "Password is required",
        Field::Gender => "Gender is required",
        Field::Address => "Address is required",
        Field::City => "City is required",
    }
}

pub fn is_valid_email(email: &str) -> bool {
    EMAIL_PATTERN.is_match(email)
}

/// Validates a candidate record, returning every field that fails.
pub fn validate(candidate: &Draft) -> FieldErrors {
    let mut errors = FieldErrors::new();

    for field in Field::ALL {
        let value = candidate.get(field);
        if value.is_empty() {
            errors.insert(field, required_message(field));
        } else if field == Field::Email && !is_valid_email(value) {
            errors.insert(field, INVALID_EMAIL);
        }
    }

    errors
}
