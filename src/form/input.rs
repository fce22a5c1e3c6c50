//! Form input record and field names

use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

use crate::error::SessionError;

/// One signup attempt as typed into the form.
///
/// Serialized with camelCase keys so the stored list reads
/// `{"id": .., "name": .., "email": .., "password": .., "passwordConfirm": ..}`.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct UserInput {
    pub id: String,
    pub name: String,
    pub email: String,
    pub password: String,
    pub password_confirm: String,
}

impl UserInput {
    /// Overwrites a single field, leaving the others untouched.
    pub fn set(&mut self, field: Field, value: String) {
        *self.field_mut(field) = value;
    }

    pub fn get(&self, field: Field) -> &str {
        match field {
            Field::Id => &self.id,
            Field::Name => &self.name,
            Field::Email => &self.email,
            Field::Password => &self.password,
            Field::PasswordConfirm => &self.password_confirm,
        }
    }

    fn field_mut(&mut self, field: Field) -> &mut String {
        match field {
            Field::Id => &mut self.id,
            Field::Name => &mut self.name,
            Field::Email => &mut self.email,
            Field::Password => &mut self.password,
            Field::PasswordConfirm => &mut self.password_confirm,
        }
    }
}

/// Input fields of the signup form, in display order.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Field {
    Id,
    Name,
    Email,
    Password,
    PasswordConfirm,
}

impl Field {
    pub const ALL: [Field; 5] = [
        Field::Id,
        Field::Name,
        Field::Email,
        Field::Password,
        Field::PasswordConfirm,
    ];

    /// Form attribute name of the field
    pub fn as_str(&self) -> &'static str {
        match self {
            Field::Id => "id",
            Field::Name => "name",
            Field::Email => "email",
            Field::Password => "password",
            Field::PasswordConfirm => "passwordConfirm",
        }
    }

    /// Whether the value must be hidden when echoed back
    pub fn is_secret(&self) -> bool {
        matches!(self, Field::Password | Field::PasswordConfirm)
    }
}

impl fmt::Display for Field {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for Field {
    type Err = SessionError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_ascii_lowercase().as_str() {
            "id" => Ok(Field::Id),
            "name" => Ok(Field::Name),
            "email" => Ok(Field::Email),
            "password" => Ok(Field::Password),
            "passwordconfirm" | "confirmpassword" => Ok(Field::PasswordConfirm),
            _ => Err(SessionError::UnknownField(s.to_string())),
        }
    }
}
