use super::parser::Parser;
use crate::{ParseError, ParseResult};
use std::fmt;
use std::marker::PhantomData;

/// Parser that always fails without consuming input
pub struct NoneParser<T> {
    _phantom: PhantomData<fn() -> T>,
}

impl<T> NoneParser<T> {
    pub fn new() -> Self {
        NoneParser {
            _phantom: PhantomData,
        }
    }
}

impl<T> Default for NoneParser<T> {
    fn default() -> Self {
        Self::new()
    }
}

impl<T> fmt::Debug for NoneParser<T> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("NoneParser").finish()
    }
}

impl<T> Parser for NoneParser<T> {
    type Output = T;

    fn parse<'code>(&self, input: &'code [u8]) -> ParseResult<'code, Self::Output> {
        ParseResult::failure(ParseError::None, input)
    }
}

/// Convenience function to create a NoneParser
pub fn none<T>() -> NoneParser<T> {
    NoneParser::new()
}
