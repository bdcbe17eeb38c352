use super::parser::Parser;
use crate::{ParseError, ParseResult};

/// Parser combinator that matches zero or more occurrences of the given parser
///
/// Repetition stops at the first failure of the inner parser; that failure is
/// not an error of `Many`. The inner parser must consume at least one byte
/// whenever it succeeds: an iteration that succeeds without consuming input
/// would repeat forever, so it aborts the whole repetition with
/// [`ParseError::NoProgress`] instead.
#[derive(Debug, Clone)]
pub struct Many<P> {
    parser: P,
}

impl<P> Many<P> {
    pub fn new(parser: P) -> Self {
        Many { parser }
    }
}

impl<P> Parser for Many<P>
where
    P: Parser,
{
    type Output = Vec<P::Output>;

    fn parse<'code>(&self, input: &'code [u8]) -> ParseResult<'code, Self::Output> {
        let mut results = Vec::new();
        let mut remaining = input;

        loop {
            match self.parser.parse(remaining).into_result() {
                Ok((_, rest)) if rest.len() == remaining.len() => {
                    log::debug!(
                        "repetition stalled after {} matches with {} bytes left",
                        results.len(),
                        remaining.len()
                    );
                    return ParseResult::failure(ParseError::NoProgress, input);
                }
                Ok((value, rest)) => {
                    results.push(value);
                    remaining = rest;
                }
                Err(error) => {
                    // Many matches zero or more, so error is not propagated
                    log::trace!("repetition stopped after {} matches: {error}", results.len());
                    break;
                }
            }
        }

        ParseResult::success(results, remaining)
    }
}

/// Convenience function to create a Many parser
pub fn many<P>(parser: P) -> Many<P>
where
    P: Parser,
{
    Many::new(parser)
}

/// Extension trait to add .many() method support for parsers
pub trait ManyExt: Parser + Sized {
    fn many(self) -> Many<Self> {
        Many::new(self)
    }
}

/// Implement ManyExt for all parsers
impl<P> ManyExt for P where P: Parser {}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::any::any;
    use crate::byte::is_byte;
    use crate::optional::OptionalExt;

    #[test]
    fn test_many_zero_matches() {
        let parser = many(is_byte(b'a'));

        let result = parser.parse(b"xyz");
        assert_eq!(result.value(), Some(&vec![]));
        assert_eq!(result.remaining(), b"xyz");
    }

    #[test]
    fn test_many_one_match() {
        let result = many(is_byte(b'a')).parse(b"abc");
        assert_eq!(result.value(), Some(&vec![b'a']));
        assert_eq!(result.remaining(), b"bc");
    }

    #[test]
    fn test_many_multiple_matches() {
        let result = is_byte(b'a').many().parse(b"aaab");
        assert_eq!(result.value(), Some(&vec![b'a', b'a', b'a']));
        assert_eq!(result.remaining(), b"b");
    }

    #[test]
    fn test_many_all_matches() {
        let result = many(is_byte(b'a')).parse(b"aaaa");
        assert_eq!(result.value(), Some(&vec![b'a'; 4]));
        assert!(result.remaining().is_empty());
    }

    #[test]
    fn test_many_empty_input() {
        let result = many(is_byte(b'a')).parse(b"");
        assert_eq!(result.value(), Some(&vec![]));
        assert!(result.remaining().is_empty());
    }

    #[test]
    fn test_many_rejects_non_consuming_parser() {
        let result = many(any::<u8>()).parse(b"abc");
        assert!(matches!(result.error(), Some(ParseError::NoProgress)));
        assert_eq!(result.remaining(), b"abc");
    }

    #[test]
    fn test_many_stalls_after_progress() {
        // consumes the 'a's, then the optional starts succeeding on nothing
        let result = many(is_byte(b'a').optional()).parse(b"aab");
        assert!(matches!(result.error(), Some(ParseError::NoProgress)));
        assert_eq!(result.remaining(), b"aab");
    }
}
