//! Validation pipeline
//!
//! Every field is checked on its own; within a field the first rule that
//! fails decides the message. A field therefore carries at most one message.

use super::messages::ErrorMessage;
use super::rules::{ValidationRules, is_valid_email, is_valid_password};
use crate::form::{Field, FieldErrors, UserInput};

/// Runs every field check and collects the messages.
pub fn validate(input: &UserInput, rules: &ValidationRules) -> FieldErrors {
    let mut errors = FieldErrors::default();

    let checks = [
        (Field::Id, check_id(&input.id, rules)),
        (Field::Name, check_name(&input.name)),
        (Field::Email, check_email(&input.email)),
        (Field::Password, check_password(&input.password, rules)),
        (
            Field::PasswordConfirm,
            check_password_confirm(&input.password, &input.password_confirm, rules),
        ),
    ];

    for (field, message) in checks {
        if let Some(message) = message {
            errors.set(field, message.to_string());
        }
    }

    errors
}

fn check_id(id: &str, rules: &ValidationRules) -> Option<ErrorMessage> {
    let length = id.trim().chars().count();

    if length == 0 {
        Some(ErrorMessage::Required)
    } else if length < rules.id_min_length {
        Some(ErrorMessage::IdTooShort(rules.id_min_length))
    } else if length > rules.id_max_length {
        Some(ErrorMessage::IdTooLong(rules.id_max_length))
    } else {
        None
    }
}

fn check_name(name: &str) -> Option<ErrorMessage> {
    name.trim().is_empty().then_some(ErrorMessage::Required)
}

/// Email is optional; only a non-empty value is checked.
fn check_email(email: &str) -> Option<ErrorMessage> {
    let email = email.trim();
    (!email.is_empty() && !is_valid_email(email)).then_some(ErrorMessage::InvalidEmail)
}

fn check_password_confirm(
    password: &str,
    confirm: &str,
    rules: &ValidationRules,
) -> Option<ErrorMessage> {
    if confirm.is_empty() {
        Some(ErrorMessage::Required)
    } else if confirm != password {
        Some(ErrorMessage::PasswordMismatch)
    } else {
        check_password(confirm, rules)
    }
}

/// presence, min length, max length, then character set
fn check_password(password: &str, rules: &ValidationRules) -> Option<ErrorMessage> {
    let length = password.chars().count();

    if length == 0 {
        Some(ErrorMessage::Required)
    } else if length < rules.password_min_length {
        Some(ErrorMessage::PasswordTooShort(rules.password_min_length))
    } else if length > rules.password_max_length {
        Some(ErrorMessage::PasswordTooLong(rules.password_max_length))
    } else if !is_valid_password(password) {
        Some(ErrorMessage::InvalidPassword)
    } else {
        None
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn valid_input() -> UserInput {
        UserInput {
            id: "alice01".into(),
            name: "Alice".into(),
            email: "alice@example.com".into(),
            password: "Abcd1234".into(),
            password_confirm: "Abcd1234".into(),
        }
    }

    fn message(input: &UserInput, field: Field) -> String {
        validate(input, &ValidationRules::default()).get(field).msg.clone()
    }

    #[test]
    fn test_valid_input_has_no_errors() {
        let errors = validate(&valid_input(), &ValidationRules::default());
        assert!(errors.is_clear());
    }

    #[test]
    fn test_id_rules_in_order() {
        let mut input = valid_input();

        input.id = String::new();
        assert_eq!(message(&input, Field::Id), "값을 입력해주세요.");

        input.id = "   ".into();
        assert_eq!(message(&input, Field::Id), "값을 입력해주세요.");

        input.id = "ab".into();
        assert_eq!(message(&input, Field::Id), "최소 5자 이상 입력해주세요.");

        input.id = "a".repeat(15);
        assert_eq!(message(&input, Field::Id), "");

        input.id = "a".repeat(16);
        assert_eq!(message(&input, Field::Id), "최대 15자 이하로 입력해주세요.");

        input.id = "  abcde  ".into();
        assert_eq!(message(&input, Field::Id), "");
    }

    #[test]
    fn test_id_length_counts_characters() {
        let mut input = valid_input();
        input.id = "가나다라마".into();
        assert_eq!(message(&input, Field::Id), "");
    }

    #[test]
    fn test_name_required() {
        let mut input = valid_input();
        input.name = " ".into();
        assert_eq!(message(&input, Field::Name), "값을 입력해주세요.");
    }

    #[test]
    fn test_email_optional_but_checked() {
        let mut input = valid_input();

        input.email = String::new();
        assert_eq!(message(&input, Field::Email), "");

        input.email = "not-an-email".into();
        assert_eq!(message(&input, Field::Email), "이메일 형식에 맞게 입력해주세요.");

        input.email = "  bob@example.com ".into();
        assert_eq!(message(&input, Field::Email), "");
    }

    #[test]
    fn test_password_rules_in_order() {
        let mut input = valid_input();

        input.password = String::new();
        assert_eq!(message(&input, Field::Password), "값을 입력해주세요.");

        input.password = "abc".into();
        assert_eq!(message(&input, Field::Password), "최소 8자 이상 입력해주세요.");

        input.password = "a".repeat(21);
        assert_eq!(message(&input, Field::Password), "최대 20자 이하로 입력해주세요.");

        input.password = "abcd!1234".into();
        assert_eq!(message(&input, Field::Password), "영문과 숫자만 입력해주세요.");
    }

    #[test]
    fn test_length_limits_are_inclusive() {
        let mut input = valid_input();
        input.id = "a".repeat(5);
        input.password = "A1".repeat(4);
        input.password_confirm = "A1".repeat(4);
        assert!(validate(&input, &ValidationRules::default()).is_clear());

        input.id = "b".repeat(15);
        input.password = "A1".repeat(10);
        input.password_confirm = "A1".repeat(10);
        assert!(validate(&input, &ValidationRules::default()).is_clear());

        input.password = "A1".repeat(10) + "x";
        input.password_confirm = input.password.clone();
        assert_eq!(message(&input, Field::Password), "최대 20자 이하로 입력해주세요.");
        assert_eq!(message(&input, Field::PasswordConfirm), "최대 20자 이하로 입력해주세요.");
    }

    #[test]
    fn test_password_charset_checked_last() {
        let mut input = valid_input();

        input.password = "ab!".into();
        assert_eq!(message(&input, Field::Password), "최소 8자 이상 입력해주세요.");

        input.password = "!".repeat(21);
        assert_eq!(message(&input, Field::Password), "최대 20자 이하로 입력해주세요.");
    }

    #[test]
    fn test_confirm_mismatch() {
        let mut input = valid_input();
        input.password_confirm = "Abcd1235".into();
        assert_eq!(message(&input, Field::PasswordConfirm), "비밀번호가 일치하지 않습니다.");
        assert_eq!(message(&input, Field::Password), "");
    }

    #[test]
    fn test_confirm_required_before_mismatch() {
        let mut input = valid_input();
        input.password_confirm = String::new();
        assert_eq!(message(&input, Field::PasswordConfirm), "값을 입력해주세요.");
    }

    #[test]
    fn test_confirm_repeats_shape_rules_when_matching() {
        let mut input = valid_input();
        input.password = "abc".into();
        input.password_confirm = "abc".into();
        assert_eq!(message(&input, Field::PasswordConfirm), "최소 8자 이상 입력해주세요.");
    }

    #[test]
    fn test_all_fields_reported_independently() {
        let input = UserInput::default();
        let errors = validate(&input, &ValidationRules::default());

        for field in Field::ALL {
            let expected = if field == Field::Email { "" } else { "값을 입력해주세요." };
            assert_eq!(errors.get(field).msg, expected, "field {}", field);
        }
    }

    #[test]
    fn test_custom_limits() {
        let rules = ValidationRules {
            id_min_length: 2,
            id_max_length: 4,
            password_min_length: 4,
            password_max_length: 6,
        };
        let input = UserInput {
            id: "abc".into(),
            name: "n".into(),
            email: String::new(),
            password: "abcd".into(),
            password_confirm: "abcd".into(),
        };
        assert!(validate(&input, &rules).is_clear());

        let long = UserInput {
            id: "abcde".into(),
            ..input
        };
        assert_eq!(validate(&long, &rules).get(Field::Id).msg, "최대 4자 이하로 입력해주세요.");
    }
}
