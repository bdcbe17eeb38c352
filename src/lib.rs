//! # bytecomb - Backtracking Parser Combinators
//!
//! A small parser combinator engine over in-memory byte slices. Grammars are
//! assembled once from a handful of building blocks and then applied to any
//! number of inputs:
//!
//! - **Primitives**: [`any`](any::any), [`none`](none::none) and
//!   [`is_byte`](byte::is_byte)
//! - **Structure**: [`and`](and::and), [`or`](or::or),
//!   [`optional`](optional::optional), [`many`](many::many) and
//!   [`many_or_one`](many_or_one::many_or_one)
//! - **Transformation**: [`map`](map::map), [`try_map`](map::try_map) and
//!   [`map_err`](map_err::map_err)
//! - **Helpers**: [`literal`](text::literal) and the integer parsers in [`text`]
//!
//! Every parser either succeeds, consuming a prefix of its input, or fails
//! and consumes nothing: a failed [`ParseResult`] always reports the exact
//! input it was given as its remaining slice. Alternatives are tried in order
//! against that same input and the first success wins.
//!
//! There is no memoization, so `or` re-runs shared sub-grammars on every
//! attempt. Repeated parsers must consume input whenever they succeed; a
//! repetition that stops making progress fails with
//! [`ParseError::NoProgress`] instead of looping.
//!
//! ```
//! use bytecomb::Parser;
//! use bytecomb::byte::is_byte;
//! use bytecomb::many::ManyExt;
//!
//! let result = is_byte(b'a').many().parse(b"aaab");
//! assert_eq!(result.value(), Some(&vec![b'a', b'a', b'a']));
//! assert_eq!(result.remaining(), b"b");
//! ```

pub mod and;
pub mod any;
pub mod byte;
pub mod error;
pub mod lazy;
pub mod many;
pub mod many_or_one;
pub mod map;
pub mod map_err;
pub mod none;
pub mod optional;
pub mod or;
pub mod parser;
pub mod result;
pub mod text;

pub use and::and;
pub use any::any;
pub use byte::is_byte;
pub use error::ParseError;
pub use lazy::lazy;
pub use many::many;
pub use many_or_one::many_or_one;
pub use map::{map, try_map};
pub use map_err::map_err;
pub use none::none;
pub use optional::optional;
pub use or::or;
pub use parser::{BoxedParser, Parser};
pub use result::ParseResult;
pub use text::literal;

/// Extension traits for method-style composition
pub mod prelude {
    pub use crate::many::ManyExt;
    pub use crate::many_or_one::ManyOrOneExt;
    pub use crate::map::MapExt;
    pub use crate::map_err::MapErrExt;
    pub use crate::optional::OptionalExt;
    pub use crate::parser::{BoxedExt, Parser};
}
