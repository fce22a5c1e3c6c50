//! Per-field validation messages

use serde::{Deserialize, Serialize};

use super::input::Field;

/// Message attached to a single field. Empty means no error.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct FieldError {
    pub msg: String,
}

impl FieldError {
    pub fn is_empty(&self) -> bool {
        self.msg.is_empty()
    }
}

/// Current message for every field of the form.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct FieldErrors {
    pub id: FieldError,
    pub name: FieldError,
    pub email: FieldError,
    pub password: FieldError,
    pub password_confirm: FieldError,
}

impl FieldErrors {
    pub fn get(&self, field: Field) -> &FieldError {
        match field {
            Field::Id => &self.id,
            Field::Name => &self.name,
            Field::Email => &self.email,
            Field::Password => &self.password,
            Field::PasswordConfirm => &self.password_confirm,
        }
    }

    /// Replaces the message of one field.
    pub fn set(&mut self, field: Field, msg: String) {
        let slot = match field {
            Field::Id => &mut self.id,
            Field::Name => &mut self.name,
            Field::Email => &mut self.email,
            Field::Password => &mut self.password,
            Field::PasswordConfirm => &mut self.password_confirm,
        };
        slot.msg = msg;
    }

    /// True when no field carries a message.
    pub fn is_clear(&self) -> bool {
        Field::ALL.iter().all(|field| self.get(*field).is_empty())
    }

    /// Fields with a message, in display order.
    pub fn iter(&self) -> impl Iterator<Item = (Field, &str)> {
        Field::ALL
            .into_iter()
            .map(|field| (field, self.get(field).msg.as_str()))
            .filter(|(_, msg)| !msg.is_empty())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_is_clear() {
        assert!(FieldErrors::default().is_clear());
        assert_eq!(FieldErrors::default().iter().count(), 0);
    }

    #[test]
    fn test_set_and_iterate() {
        let mut errors = FieldErrors::default();
        errors.set(Field::PasswordConfirm, "mismatch".into());
        errors.set(Field::Id, "short".into());

        assert!(!errors.is_clear());
        let collected: Vec<_> = errors.iter().collect();
        assert_eq!(
            collected,
            vec![(Field::Id, "short"), (Field::PasswordConfirm, "mismatch")]
        );

        errors.set(Field::Id, String::new());
        assert_eq!(errors.iter().count(), 1);
    }
}
