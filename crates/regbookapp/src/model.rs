//! Core data types: the six form [`Field`]s, the accepted [`Record`], and the
//! in-progress [`Draft`].
//!
//! `Record` and `Draft` share a shape on purpose. A `Draft` only becomes a
//! `Record` through [`Draft::to_record`], which the form controller calls
//! after validation passes.

use crate::error::RegbookError;
use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Field {
    Name,
    Email,
    Password,
    Gender,
    Address,
    City,
}

impl Field {
    /// All fields, in form order.
    pub const ALL: [Field; 6] = [
        Field::Name,
        Field::Email,
        Field::Password,
        Field::Gender,
        Field::Address,
        Field::City,
    ];

    pub fn as_str(self) -> &'static str {
        match self {
            Field::Name => "name",
            Field::Email => "email",
            Field::Password => "password",
            Field::Gender => "gender",
            Field::Address => "address",
            Field::City => "city",
        }
    }
}

impl fmt::Display for Field {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for Field {
    type Err = RegbookError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Field::ALL
            .into_iter()
            .find(|field| field.as_str() == s)
            .ok_or_else(|| RegbookError::UnknownField(s.to_string()))
    }
}

/// A record that passed validation when it entered the list.
///
/// The serialized form is the persisted wire format: an object with exactly
/// these six string keys.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct Record {
    pub name: String,
    pub email: String,
    pub password: String,
    pub gender: String,
    pub address: String,
    pub city: String,
}

impl Record {
    pub fn get(&self, field: Field) -> &str {
        match field {
            Field::Name => &self.name,
            Field::Email => &self.email,
            Field::Password => &self.password,
            Field::Gender => &self.gender,
            Field::Address => &self.address,
            Field::City => &self.city,
        }
    }
}

/// Mutable working copy of a record while the form is being filled in.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct Draft {
    pub name: String,
    pub email: String,
    pub password: String,
    pub gender: String,
    pub address: String,
    pub city: String,
}

impl Draft {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn get(&self, field: Field) -> &str {
        match field {
            Field::Name => &self.name,
            Field::Email => &self.email,
            Field::Password => &self.password,
            Field::Gender => &self.gender,
            Field::Address => &self.address,
            Field::City => &self.city,
        }
    }

    pub fn set(&mut self, field: Field, value: impl Into<String>) {
        let slot = match field {
            Field::Name => &mut self.name,
            Field::Email => &mut self.email,
            Field::Password => &mut self.password,
            Field::Gender => &mut self.gender,
            Field::Address => &mut self.address,
            Field::City => &mut self.city,
        };
        *slot = value.into();
    }

    pub fn with(mut self, field: Field, value: impl Into<String>) -> Self {
        self.set(field, value);
        self
    }

    pub fn is_blank(&self) -> bool {
        Field::ALL.iter().all(|f| self.get(*f).is_empty())
    }

    /// Copy the draft into a record. Does not validate.
    pub fn to_record(&self) -> Record {
        Record {
            name: self.name.clone(),
            email: self.email.clone(),
            password: self.password.clone(),
            gender: self.gender.clone(),
            address: self.address.clone(),
            city: self.city.clone(),
        }
    }
}

impl From<&Record> for Draft {
    fn from(record: &Record) -> Self {
        Self {
            name: record.name.clone(),
            email: record.email.clone(),
            password: record.password.clone(),
            gender: record.gender.clone(),
            address: record.address.clone(),
            city: record.city.clone(),
        }
    }
}
