use super::parser::Parser;
use crate::{ParseError, ParseResult};

/// Parser that matches a specific byte
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct IsByteParser {
    expected: u8,
}

impl IsByteParser {
    pub fn new(expected: u8) -> Self {
        IsByteParser { expected }
    }

    pub fn expected(&self) -> u8 {
        self.expected
    }
}

impl Parser for IsByteParser {
    type Output = u8;

    fn parse<'code>(&self, input: &'code [u8]) -> ParseResult<'code, Self::Output> {
        match input.split_first() {
            Some((&byte, rest)) if byte == self.expected => ParseResult::success(byte, rest),
            Some((&byte, _)) => ParseResult::failure(
                ParseError::CharMismatch {
                    expected: self.expected,
                    found: byte,
                },
                input,
            ),
            None => ParseResult::failure(ParseError::EmptyInput, input),
        }
    }
}

/// Convenience function to create an IsByteParser
pub fn is_byte(expected: u8) -> IsByteParser {
    IsByteParser::new(expected)
}
