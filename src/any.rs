use super::parser::Parser;
use crate::ParseResult;
use std::fmt;
use std::marker::PhantomData;

/// Parser that always succeeds without consuming input and returns the default value of T
pub struct AnyParser<T> {
    _phantom: PhantomData<fn() -> T>,
}

impl<T> AnyParser<T> {
    pub fn new() -> Self {
        AnyParser {
            _phantom: PhantomData,
        }
    }
}

impl<T> Default for AnyParser<T> {
    fn default() -> Self {
        Self::new()
    }
}

impl<T> fmt::Debug for AnyParser<T> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("AnyParser").finish()
    }
}

impl<T> Parser for AnyParser<T>
where
    T: Default,
{
    type Output = T;

    fn parse<'code>(&self, input: &'code [u8]) -> ParseResult<'code, Self::Output> {
        ParseResult::success(T::default(), input)
    }
}

/// Convenience function to create an AnyParser
pub fn any<T>() -> AnyParser<T>
where
    T: Default,
{
    AnyParser::new()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_any_string() {
        let parser = any::<String>();

        let result = parser.parse(b"hello");
        assert_eq!(result.value(), Some(&String::default()));
        // Should not consume any input
        assert_eq!(result.remaining(), b"hello");
    }

    #[test]
    fn test_any_byte() {
        let result = any::<u8>().parse(b"123");
        assert_eq!(result.value(), Some(&0));
        assert_eq!(result.remaining(), b"123");
    }

    #[test]
    fn test_any_empty_input() {
        let result = any::<Vec<u8>>().parse(b"");
        assert_eq!(result.value(), Some(&Vec::new()));
        assert!(result.remaining().is_empty());
    }
}
