use super::parser::Parser;
use crate::{ParseError, ParseResult};
use std::fmt;

/// Parser combinator that replaces the error of a failed parse
///
/// Successes pass through untouched. On failure the callback receives the
/// failed result and returns the error to report instead; the remaining input
/// is still the input this parser was given. Grammars use this to put their
/// own vocabulary on top of low-level byte mismatches.
#[derive(Clone)]
pub struct MapErr<P, F> {
    parser: P,
    mapper: F,
}

impl<P, F> MapErr<P, F> {
    pub fn new(parser: P, mapper: F) -> Self {
        MapErr { parser, mapper }
    }
}

impl<P, F> fmt::Debug for MapErr<P, F>
where
    P: fmt::Debug,
{
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("MapErr")
            .field("parser", &self.parser)
            .field("mapper", &"<function>")
            .finish()
    }
}

impl<P, F> Parser for MapErr<P, F>
where
    P: Parser,
    F: for<'a> Fn(ParseResult<'a, P::Output>) -> ParseError,
{
    type Output = P::Output;

    fn parse<'code>(&self, input: &'code [u8]) -> ParseResult<'code, Self::Output> {
        let result = self.parser.parse(input);
        if result.is_success() {
            return result;
        }
        ParseResult::failure((self.mapper)(result), input)
    }
}

/// Extension trait to add .map_err() method support for parsers
pub trait MapErrExt: Parser + Sized {
    fn map_err<F>(self, mapper: F) -> MapErr<Self, F>
    where
        F: for<'a> Fn(ParseResult<'a, Self::Output>) -> ParseError,
    {
        MapErr::new(self, mapper)
    }
}

/// Implement MapErrExt for all parsers
impl<P> MapErrExt for P where P: Parser {}

/// Convenience function to create a MapErr parser
pub fn map_err<P, F>(parser: P, mapper: F) -> MapErr<P, F>
where
    P: Parser,
    F: for<'a> Fn(ParseResult<'a, P::Output>) -> ParseError,
{
    MapErr::new(parser, mapper)
}
