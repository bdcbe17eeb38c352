use super::many::Many;
use super::parser::Parser;
use crate::{ParseError, ParseResult};

/// Parser combinator that matches one or more occurrences of the given parser
///
/// Same as [`Many`] but an empty repetition is a failure with
/// [`ParseError::None`].
#[derive(Debug, Clone)]
pub struct ManyOrOne<P> {
    many: Many<P>,
}

impl<P> ManyOrOne<P> {
    pub fn new(parser: P) -> Self {
        ManyOrOne {
            many: Many::new(parser),
        }
    }
}

impl<P> Parser for ManyOrOne<P>
where
    P: Parser,
{
    type Output = Vec<P::Output>;

    fn parse<'code>(&self, input: &'code [u8]) -> ParseResult<'code, Self::Output> {
        match self.many.parse(input).into_result() {
            Ok((values, _)) if values.is_empty() => ParseResult::failure(ParseError::None, input),
            Ok((values, remaining)) => ParseResult::success(values, remaining),
            Err(error) => ParseResult::failure(error, input),
        }
    }
}

/// Convenience function to create a ManyOrOne parser
pub fn many_or_one<P>(parser: P) -> ManyOrOne<P>
where
    P: Parser,
{
    ManyOrOne::new(parser)
}

/// Extension trait to add .many_or_one() method support for parsers
pub trait ManyOrOneExt: Parser + Sized {
    fn many_or_one(self) -> ManyOrOne<Self> {
        ManyOrOne::new(self)
    }
}

/// Implement ManyOrOneExt for all parsers
impl<P> ManyOrOneExt for P where P: Parser {}
