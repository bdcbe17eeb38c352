use std::borrow::Cow;
use std::num::ParseIntError;

/// Why a parser rejected its input.
///
/// Errors carry no position: a failed [`ParseResult`](crate::ParseResult)
/// always reports the input it was given as its remaining slice, which is
/// all the location information the engine tracks.
#[derive(Debug, thiserror::Error)]
pub enum ParseError {
    /// A byte was required but the input was exhausted
    #[error("empty input")]
    EmptyInput,

    /// The next byte was not the one expected
    #[error("char mismatch: expected '{}' got '{}'", escaped(.expected), escaped(.found))]
    CharMismatch { expected: u8, found: u8 },

    /// Every alternative of an `or` failed
    #[error("no alternative matched")]
    NoAlternative,

    /// Produced by `none()` and by a required repetition that matched nothing
    #[error("none")]
    None,

    /// A repeated parser succeeded without consuming input
    #[error("repetition made no progress: the repeated parser accepts empty input")]
    NoProgress,

    /// Grammar-specific message attached by a caller
    #[error("{0}")]
    Message(Cow<'static, str>),

    /// Grammar-specific error value raised by a caller's transform
    #[error("{0}")]
    Custom(#[source] Box<dyn std::error::Error + Send + Sync + 'static>),
}

impl ParseError {
    pub fn message(message: impl Into<Cow<'static, str>>) -> Self {
        ParseError::Message(message.into())
    }

    pub fn custom(error: impl std::error::Error + Send + Sync + 'static) -> Self {
        ParseError::Custom(Box::new(error))
    }
}

impl From<&'static str> for ParseError {
    fn from(message: &'static str) -> Self {
        ParseError::Message(Cow::Borrowed(message))
    }
}

impl From<String> for ParseError {
    fn from(message: String) -> Self {
        ParseError::Message(Cow::Owned(message))
    }
}

impl From<ParseIntError> for ParseError {
    fn from(error: ParseIntError) -> Self {
        ParseError::custom(error)
    }
}

/// Spells a byte the way a byte literal would
fn escaped(byte: &u8) -> std::ascii::EscapeDefault {
    byte.escape_ascii()
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::error::Error;

    #[test]
    fn test_taxonomy_messages() {
        assert_eq!(ParseError::EmptyInput.to_string(), "empty input");
        assert_eq!(ParseError::NoAlternative.to_string(), "no alternative matched");
        assert_eq!(ParseError::None.to_string(), "none");
    }

    #[test]
    fn test_char_mismatch_message() {
        let error = ParseError::CharMismatch {
            expected: b'a',
            found: b'b',
        };
        assert_eq!(error.to_string(), "char mismatch: expected 'a' got 'b'");
    }

    #[test]
    fn test_char_mismatch_escapes_non_printable() {
        let error = ParseError::CharMismatch {
            expected: b'\n',
            found: 0xFF,
        };
        assert_eq!(error.to_string(), r"char mismatch: expected '\n' got '\xff'");
    }

    #[test]
    fn test_message_conversions() {
        let borrowed: ParseError = "bad key".into();
        let owned: ParseError = format!("bad key {}", 7).into();
        assert_eq!(borrowed.to_string(), "bad key");
        assert_eq!(owned.to_string(), "bad key 7");
        assert!(matches!(ParseError::message("x"), ParseError::Message(_)));
    }

    #[test]
    fn test_custom_displays_and_chains_inner_error() {
        let int_error = "99999999999999999999".parse::<i64>().unwrap_err();
        let expected = int_error.to_string();
        let error = ParseError::from(int_error);

        assert_eq!(error.to_string(), expected);
        let source = error.source().unwrap();
        assert!(source.downcast_ref::<ParseIntError>().is_some());
    }
}
