use crate::ParseResult;

/// Core parser trait for parser combinators
///
/// A parser is an immutable value: it is built once and may be applied to
/// any number of inputs, from any number of threads. Parsing is generic over
/// the input lifetime so the same grammar serves every buffer it is given.
///
/// Implementations must uphold the backtracking contract: a failed result
/// reports exactly `input` as its remaining slice, and a successful result
/// reports a suffix of `input`.
pub trait Parser {
    type Output;

    /// Apply the parser to `input`
    fn parse<'code>(&self, input: &'code [u8]) -> ParseResult<'code, Self::Output>;
}

/// Type-erased parser, used to put parsers of different concrete types but a
/// common output into one `and`/`or` list
pub type BoxedParser<T> = Box<dyn Parser<Output = T> + Send + Sync>;

impl<P> Parser for &P
where
    P: Parser + ?Sized,
{
    type Output = P::Output;

    fn parse<'code>(&self, input: &'code [u8]) -> ParseResult<'code, Self::Output> {
        (**self).parse(input)
    }
}

impl<P> Parser for Box<P>
where
    P: Parser + ?Sized,
{
    type Output = P::Output;

    fn parse<'code>(&self, input: &'code [u8]) -> ParseResult<'code, Self::Output> {
        (**self).parse(input)
    }
}

/// Extension trait to add .boxed() method support for parsers
pub trait BoxedExt: Parser + Sized {
    fn boxed(self) -> BoxedParser<Self::Output>
    where
        Self: Send + Sync + 'static,
    {
        Box::new(self)
    }
}

/// Implement BoxedExt for all parsers
impl<P> BoxedExt for P where P: Parser {}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::byte::is_byte;

    #[test]
    fn test_reference_parses_like_owner() {
        let parser = is_byte(b'a');
        let by_ref = &parser;

        let result = by_ref.parse(b"ab");
        assert_eq!(result.value(), Some(&b'a'));
        assert_eq!(result.remaining(), b"b");
    }

    #[test]
    fn test_boxed_parsers_share_a_type() {
        let parsers: Vec<BoxedParser<u8>> = vec![is_byte(b'a').boxed(), Box::new(is_byte(b'b'))];

        assert!(parsers[0].parse(b"a").is_success());
        assert!(parsers[1].parse(b"b").is_success());
        assert!(parsers[1].parse(b"a").is_failure());
    }

    #[test]
    fn test_parser_is_reusable_across_inputs() {
        let parser = is_byte(b'x');
        let first = b"xy".to_vec();
        let second = b"zz".to_vec();

        assert!(parser.parse(&first).is_success());
        assert!(parser.parse(&second).is_failure());
        assert!(parser.parse(&first).is_success());
    }
}
