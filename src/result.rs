use crate::ParseError;

/// Outcome of applying a parser to an input slice.
///
/// On success it holds the produced value and the unconsumed suffix of the
/// input. On failure it holds the error and the *entire* input the reporting
/// parser was given: a failure never exposes a partially consumed position.
#[derive(Debug)]
pub struct ParseResult<'code, T> {
    remaining: &'code [u8],
    outcome: Result<T, ParseError>,
}

impl<'code, T> ParseResult<'code, T> {
    /// A success that leaves `remaining` unconsumed
    pub fn success(value: T, remaining: &'code [u8]) -> Self {
        ParseResult {
            remaining,
            outcome: Ok(value),
        }
    }

    /// A failure that backtracks to `input`
    pub fn failure(error: ParseError, input: &'code [u8]) -> Self {
        ParseResult {
            remaining: input,
            outcome: Err(error),
        }
    }

    pub fn remaining(&self) -> &'code [u8] {
        self.remaining
    }

    pub fn is_success(&self) -> bool {
        self.outcome.is_ok()
    }

    pub fn is_failure(&self) -> bool {
        self.outcome.is_err()
    }

    pub fn value(&self) -> Option<&T> {
        self.outcome.as_ref().ok()
    }

    pub fn error(&self) -> Option<&ParseError> {
        self.outcome.as_ref().err()
    }

    /// Number of bytes of `input` this result consumed.
    ///
    /// `input` must be the slice the result was produced from.
    pub fn consumed(&self, input: &[u8]) -> usize {
        input.len() - self.remaining.len()
    }

    pub fn into_value(self) -> Option<T> {
        self.outcome.ok()
    }

    pub fn into_error(self) -> Option<ParseError> {
        self.outcome.err()
    }

    /// Split into the std result, pairing a success value with its remaining input
    pub fn into_result(self) -> Result<(T, &'code [u8]), ParseError> {
        let remaining = self.remaining;
        self.outcome.map(|value| (value, remaining))
    }
}
