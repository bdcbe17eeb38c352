use super::parser::Parser;
use crate::ParseResult;

/// Parser combinator that makes a parser optional
///
/// Behaves as `or(parser, any())`: it never fails. When the wrapped parser
/// fails its error is discarded and the default value of the output is
/// returned without consuming input, so a grammar cannot tell "matched the
/// default value" apart from "did not match" through the value alone.
#[derive(Debug, Clone)]
pub struct Optional<P> {
    parser: P,
}

impl<P> Optional<P> {
    pub fn new(parser: P) -> Self {
        Optional { parser }
    }
}

impl<P> Parser for Optional<P>
where
    P: Parser,
    P::Output: Default,
{
    type Output = P::Output;

    fn parse<'code>(&self, input: &'code [u8]) -> ParseResult<'code, Self::Output> {
        let result = self.parser.parse(input);
        if let Some(error) = result.error() {
            log::trace!("optional parser skipped: {error}");
            return ParseResult::success(P::Output::default(), input);
        }
        result
    }
}

/// Convenience function to create an Optional parser
pub fn optional<P>(parser: P) -> Optional<P>
where
    P: Parser,
    P::Output: Default,
{
    Optional::new(parser)
}

/// Extension trait to add .optional() method support for parsers
pub trait OptionalExt: Parser + Sized {
    fn optional(self) -> Optional<Self>
    where
        Self::Output: Default,
    {
        Optional::new(self)
    }
}

/// Implement OptionalExt for all parsers
impl<P> OptionalExt for P where P: Parser {}
