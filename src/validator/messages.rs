//! User-facing validation messages

use std::fmt;

/// A validation message attached to one field.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ErrorMessage {
    Required,
    IdTooShort(usize),
    IdTooLong(usize),
    PasswordTooShort(usize),
    PasswordTooLong(usize),
    InvalidEmail,
    PasswordMismatch,
    InvalidPassword,
}

impl fmt::Display for ErrorMessage {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            ErrorMessage::Required => write!(f, "값을 입력해주세요."),
            ErrorMessage::IdTooShort(min) | ErrorMessage::PasswordTooShort(min) => {
                write!(f, "최소 {}자 이상 입력해주세요.", min)
            }
            ErrorMessage::IdTooLong(max) | ErrorMessage::PasswordTooLong(max) => {
                write!(f, "최대 {}자 이하로 입력해주세요.", max)
            }
            ErrorMessage::InvalidEmail => write!(f, "이메일 형식에 맞게 입력해주세요."),
            ErrorMessage::PasswordMismatch => write!(f, "비밀번호가 일치하지 않습니다."),
            ErrorMessage::InvalidPassword => write!(f, "영문과 숫자만 입력해주세요."),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_message_text() {
        assert_eq!(ErrorMessage::Required.to_string(), "값을 입력해주세요.");
        assert_eq!(ErrorMessage::IdTooShort(5).to_string(), "최소 5자 이상 입력해주세요.");
        assert_eq!(ErrorMessage::IdTooLong(15).to_string(), "최대 15자 이하로 입력해주세요.");
        assert_eq!(
            ErrorMessage::PasswordTooLong(20).to_string(),
            "최대 20자 이하로 입력해주세요."
        );
    }
}
