use super::parser::Parser;
use crate::{ParseError, ParseResult};
use std::fmt;

/// Parser combinator that transforms the output of a parser using a mapping function
#[derive(Clone)]
pub struct Map<P, F> {
    parser: P,
    mapper: F,
}

impl<P, F> Map<P, F> {
    pub fn new(parser: P, mapper: F) -> Self {
        Map { parser, mapper }
    }
}

impl<P, F> fmt::Debug for Map<P, F>
where
    P: fmt::Debug,
{
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Map")
            .field("parser", &self.parser)
            .field("mapper", &"<function>")
            .finish()
    }
}

impl<P, F, U> Parser for Map<P, F>
where
    P: Parser,
    F: Fn(P::Output) -> U,
{
    type Output = U;

    fn parse<'code>(&self, input: &'code [u8]) -> ParseResult<'code, Self::Output> {
        match self.parser.parse(input).into_result() {
            Ok((value, remaining)) => ParseResult::success((self.mapper)(value), remaining),
            Err(error) => ParseResult::failure(error, input),
        }
    }
}

/// Convenience function to create a Map parser
pub fn map<P, F, U>(parser: P, mapper: F) -> Map<P, F>
where
    P: Parser,
    F: Fn(P::Output) -> U,
{
    Map::new(parser, mapper)
}

/// Parser combinator that transforms the output of a parser with a function
/// that may itself reject the value
///
/// A rejected value fails the whole parser and backtracks to the input it was
/// given, discarding whatever the inner parser consumed, so from the outside
/// it is indistinguishable from a parser that never matched.
#[derive(Clone)]
pub struct TryMap<P, F> {
    parser: P,
    mapper: F,
}

impl<P, F> TryMap<P, F> {
    pub fn new(parser: P, mapper: F) -> Self {
        TryMap { parser, mapper }
    }
}

impl<P, F> fmt::Debug for TryMap<P, F>
where
    P: fmt::Debug,
{
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("TryMap")
            .field("parser", &self.parser)
            .field("mapper", &"<function>")
            .finish()
    }
}

impl<P, F, U, E> Parser for TryMap<P, F>
where
    P: Parser,
    F: Fn(P::Output) -> Result<U, E>,
    E: Into<ParseError>,
{
    type Output = U;

    fn parse<'code>(&self, input: &'code [u8]) -> ParseResult<'code, Self::Output> {
        let (value, remaining) = match self.parser.parse(input).into_result() {
            Ok(parsed) => parsed,
            Err(error) => return ParseResult::failure(error, input),
        };

        match (self.mapper)(value) {
            Ok(mapped) => ParseResult::success(mapped, remaining),
            Err(error) => {
                let error = error.into();
                log::trace!("transform rejected value, backtracking: {error}");
                ParseResult::failure(error, input)
            }
        }
    }
}

/// Convenience function to create a TryMap parser
pub fn try_map<P, F, U, E>(parser: P, mapper: F) -> TryMap<P, F>
where
    P: Parser,
    F: Fn(P::Output) -> Result<U, E>,
    E: Into<ParseError>,
{
    TryMap::new(parser, mapper)
}

/// Extension trait to add .map() and .try_map() method support for parsers
pub trait MapExt: Parser + Sized {
    fn map<F, U>(self, mapper: F) -> Map<Self, F>
    where
        F: Fn(Self::Output) -> U,
    {
        Map::new(self, mapper)
    }

    fn try_map<F, U, E>(self, mapper: F) -> TryMap<Self, F>
    where
        F: Fn(Self::Output) -> Result<U, E>,
        E: Into<ParseError>,
    {
        TryMap::new(self, mapper)
    }
}

/// Implement MapExt for all parsers
impl<P> MapExt for P where P: Parser {}
