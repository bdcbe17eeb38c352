use super::parser::Parser;
use crate::{ParseError, ParseResult};

/// Parser combinator that tries each parser in order against the same input
/// and returns the first success
///
/// This is ordered choice: when several alternatives could match, only the
/// first one listed is ever chosen. The errors of rejected alternatives are
/// discarded; if none match the result is [`ParseError::NoAlternative`].
#[derive(Debug, Clone)]
pub struct Or<P> {
    parsers: Vec<P>,
}

impl<P> Or<P> {
    pub fn new(parsers: Vec<P>) -> Self {
        Or { parsers }
    }
}

impl<P> Parser for Or<P>
where
    P: Parser,
{
    type Output = P::Output;

    fn parse<'code>(&self, input: &'code [u8]) -> ParseResult<'code, Self::Output> {
        for (index, parser) in self.parsers.iter().enumerate() {
            let result = parser.parse(input);
            if let Some(error) = result.error() {
                log::trace!("alternative {index} rejected: {error}");
                continue;
            }
            return result;
        }

        ParseResult::failure(ParseError::NoAlternative, input)
    }
}

/// Convenience function to create an Or parser
pub fn or<P, I>(parsers: I) -> Or<P>
where
    P: Parser,
    I: IntoIterator<Item = P>,
{
    Or::new(parsers.into_iter().collect())
}

/// Build an [`Or`] from parsers of different concrete types that share an
/// output type, boxing each one
#[macro_export]
macro_rules! or {
    ($($parser:expr),+ $(,)?) => {
        $crate::or::Or::new(::std::vec![$($crate::parser::BoxedExt::boxed($parser)),+])
    };
}
