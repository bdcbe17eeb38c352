use super::parser::Parser;
use crate::ParseResult;

/// Parser combinator that applies a list of parsers in order and collects
/// their outputs
///
/// Every parser in the list produces the same output type. Sequences of
/// differently-typed steps are built by mapping each step into a shared
/// enum first, or by boxing parsers of different concrete types with the
/// [`and!`](crate::and!) macro.
///
/// Either every parser succeeds and the output holds exactly one value per
/// parser, or the whole sequence fails with the first error and consumes
/// nothing.
///
/// Example:
/// ```
/// use bytecomb::and::and;
/// use bytecomb::byte::is_byte;
/// use bytecomb::parser::Parser;
///
/// let parser = and([is_byte(b'a'), is_byte(b'b')]);
///
/// let result = parser.parse(b"abc");
/// assert_eq!(result.value(), Some(&vec![b'a', b'b']));
/// assert_eq!(result.remaining(), b"c");
///
/// let result = parser.parse(b"ac");
/// assert!(result.is_failure());
/// assert_eq!(result.remaining(), b"ac");
/// ```
#[derive(Debug, Clone)]
pub struct And<P> {
    parsers: Vec<P>,
}

impl<P> And<P> {
    pub fn new(parsers: Vec<P>) -> Self {
        And { parsers }
    }
}

impl<P> Parser for And<P>
where
    P: Parser,
{
    type Output = Vec<P::Output>;

    fn parse<'code>(&self, input: &'code [u8]) -> ParseResult<'code, Self::Output> {
        let mut values = Vec::with_capacity(self.parsers.len());
        let mut remaining = input;

        for parser in &self.parsers {
            match parser.parse(remaining).into_result() {
                Ok((value, rest)) => {
                    values.push(value);
                    remaining = rest;
                }
                Err(error) => return ParseResult::failure(error, input),
            }
        }

        ParseResult::success(values, remaining)
    }
}

/// Convenience function to create an And parser
pub fn and<P, I>(parsers: I) -> And<P>
where
    P: Parser,
    I: IntoIterator<Item = P>,
{
    And::new(parsers.into_iter().collect())
}

/// Build an [`And`] from parsers of different concrete types that share an
/// output type, boxing each one
#[macro_export]
macro_rules! and {
    ($($parser:expr),+ $(,)?) => {
        $crate::and::And::new(::std::vec![$($crate::parser::BoxedExt::boxed($parser)),+])
    };
}
