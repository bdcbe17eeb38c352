//! Literal and integer helpers assembled purely from the core combinators.

use crate::and::{And, and};
use crate::byte::{IsByteParser, is_byte};
use crate::many_or_one::ManyOrOneExt;
use crate::map::{Map, MapExt};
use crate::optional::OptionalExt;
use crate::or::{Or, or};
use crate::parser::Parser;
use crate::ParseResult;

/// Parser that matches an exact byte string and returns the matched text
#[derive(Debug, Clone)]
pub struct LiteralParser {
    parser: Map<And<IsByteParser>, fn(Vec<u8>) -> String>,
}

impl LiteralParser {
    pub fn new(pattern: &str) -> Self {
        let to_text: fn(Vec<u8>) -> String = into_text;
        LiteralParser {
            parser: and(pattern.bytes().map(is_byte)).map(to_text),
        }
    }
}

impl Parser for LiteralParser {
    type Output = String;

    fn parse<'code>(&self, input: &'code [u8]) -> ParseResult<'code, Self::Output> {
        self.parser.parse(input)
    }
}

/// Convenience function to create a LiteralParser
pub fn literal(pattern: &str) -> LiteralParser {
    LiteralParser::new(pattern)
}

fn into_text(bytes: Vec<u8>) -> String {
    // only ever fed bytes that came from a &str
    String::from_utf8_lossy(&bytes).into_owned()
}

/// Parser that matches one ASCII digit
pub fn digit() -> Or<IsByteParser> {
    or((b'0'..=b'9').map(is_byte))
}

/// Parser that matches one or more ASCII digits and returns them as text,
/// leading zeros included
pub fn integer() -> impl Parser<Output = String> {
    digit().many_or_one().map(into_text)
}

/// Parser that matches an optionally signed integer and returns it as text
///
/// A `-` sign is kept, a `+` sign is dropped: `"-12"` gives `"-12"` and
/// `"+12"` gives `"12"`.
pub fn signed_integer() -> impl Parser<Output = String> {
    let sign = or([is_byte(b'+'), is_byte(b'-')])
        .optional()
        .map(|sign| match sign {
            b'-' => String::from("-"),
            _ => String::new(),
        });

    crate::and![sign, integer()].map(|parts| parts.concat())
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::ParseError;

    #[test]
    fn test_literal_prefix() {
        let result = literal("for").parse(b"forever");
        assert_eq!(result.value().map(String::as_str), Some("for"));
        assert_eq!(result.remaining(), b"ever");
    }

    #[test]
    fn test_literal_keywords() {
        for (input, keyword, rest) in [
            (&b"anyn,mn,am"[..], "any", &b"n,mn,am"[..]),
            (&b"forafsln"[..], "for", &b"afsln"[..]),
            (&b"struct_lkasfn"[..], "struct", &b"_lkasfn"[..]),
        ] {
            let result = literal(keyword).parse(input);
            assert_eq!(result.remaining(), rest);
            assert_eq!(result.into_value().as_deref(), Some(keyword));
        }
    }

    #[test]
    fn test_literal_mismatch_backtracks() {
        let result = literal("for").parse(b"fox");
        assert!(result.is_failure());
        assert_eq!(result.remaining(), b"fox");
        assert!(matches!(
            result.error(),
            Some(ParseError::CharMismatch {
                expected: b'r',
                found: b'x'
            })
        ));
    }

    #[test]
    fn test_literal_truncated_input() {
        let result = literal("struct").parse(b"str");
        assert!(matches!(result.error(), Some(ParseError::EmptyInput)));
        assert_eq!(result.remaining(), b"str");
    }

    #[test]
    fn test_literal_empty_pattern() {
        let result = literal("").parse(b"abc");
        assert_eq!(result.value().map(String::as_str), Some(""));
        assert_eq!(result.remaining(), b"abc");
    }

    #[test]
    fn test_literal_utf8_pattern() {
        let result = literal("é!").parse("é!x".as_bytes());
        assert_eq!(result.value().map(String::as_str), Some("é!"));
        assert_eq!(result.remaining(), b"x");
    }

    #[test]
    fn test_digit() {
        assert_eq!(digit().parse(b"7a").value(), Some(&b'7'));
        assert!(digit().parse(b"a7").is_failure());
    }

    #[test]
    fn test_integer() {
        for (input, expected) in [
            ("0", "0"),
            ("12", "12"),
            ("1344", "1344"),
            ("012301984", "012301984"),
        ] {
            let result = integer().parse(input.as_bytes());
            assert_eq!(result.into_value().as_deref(), Some(expected), "input {input:?}");
        }
    }

    #[test]
    fn test_integer_stops_at_non_digit() {
        let result = integer().parse(b"42.5");
        assert_eq!(result.value().map(String::as_str), Some("42"));
        assert_eq!(result.remaining(), b".5");
    }

    #[test]
    fn test_integer_requires_a_digit() {
        let result = integer().parse(b"abc");
        assert!(matches!(result.error(), Some(ParseError::None)));
        assert_eq!(result.remaining(), b"abc");
    }

    #[test]
    fn test_signed_integer() {
        for (input, expected) in [
            ("0", "0"),
            ("12", "12"),
            ("1344", "1344"),
            ("012301984", "012301984"),
            ("-0", "-0"),
            ("-12", "-12"),
            ("-1344", "-1344"),
            ("-012301984", "-012301984"),
            ("+0", "0"),
            ("+12", "12"),
            ("+1344", "1344"),
            ("+012301984", "012301984"),
        ] {
            let result = signed_integer().parse(input.as_bytes());
            assert_eq!(result.into_value().as_deref(), Some(expected), "input {input:?}");
        }
    }

    #[test]
    fn test_signed_integer_sign_only_backtracks() {
        let result = signed_integer().parse(b"-abc");
        assert!(result.is_failure());
        assert_eq!(result.remaining(), b"-abc");
    }
}
