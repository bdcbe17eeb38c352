//! A small JSON-like object grammar built only from the public combinators.
//!
//! ```text
//! object  = '{' ws? members? ws? '}'
//! members = (kv ws? ',')* kv
//! kv      = ws? string ws? ':' ws? value
//! value   = integer | string | object
//! string  = '"' [a-z0-9_ ]* '"'
//! integer = [0-9]+
//! ```
//!
//! Run with `cargo run --example json [FILE]`; `RUST_LOG=trace` shows every
//! backtracking decision.

use bytecomb::prelude::*;
use bytecomb::{BoxedParser, ParseError, is_byte, lazy, or, text};
use std::error::Error;
use std::fmt;

const SAMPLE: &str = "{
\t\"int\":43,
\t\"string\":\"hello world\"
}";

#[derive(Debug, Clone, PartialEq)]
enum Ast {
    Int(i64),
    Str(String),
    Dict(Vec<(String, Ast)>),
}

impl fmt::Display for Ast {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Ast::Int(i) => write!(f, "{i}"),
            Ast::Str(s) => write!(f, "\"{s}\""),
            Ast::Dict(entries) => {
                write!(f, "{{")?;
                for (index, (key, value)) in entries.iter().enumerate() {
                    if index > 0 {
                        write!(f, ", ")?;
                    }
                    write!(f, "\"{key}\":{value}")?;
                }
                write!(f, "}}")
            }
        }
    }
}

/// Shared step type so differently shaped steps can be sequenced with `and!`
#[derive(Debug, Default)]
enum Piece {
    #[default]
    Skip,
    Key(String),
    Value(Ast),
    Pair((String, Ast)),
    Members(Vec<(String, Ast)>),
}

fn pairs(pieces: Vec<Piece>) -> Vec<(String, Ast)> {
    let mut pairs = Vec::new();
    for piece in pieces {
        match piece {
            Piece::Pair(pair) => pairs.push(pair),
            Piece::Members(members) => pairs.extend(members),
            _ => {}
        }
    }
    pairs
}

fn token(byte: u8) -> impl Parser<Output = Piece> {
    is_byte(byte).map(|_| Piece::Skip)
}

fn whitespace() -> impl Parser<Output = Piece> {
    or([b' ', b'\n', b'\t', b'\r'].map(is_byte))
        .many_or_one()
        .map(|_| Piece::Skip)
        .optional()
}

fn string() -> impl Parser<Output = String> {
    let allowed = [b' ', b'_']
        .into_iter()
        .chain(b'0'..=b'9')
        .chain(b'a'..=b'z');
    let body = or(allowed.map(is_byte))
        .many()
        .map(|bytes| Piece::Key(String::from_utf8_lossy(&bytes).into_owned()));

    bytecomb::and![token(b'"'), body, token(b'"')].map(|pieces| {
        pieces
            .into_iter()
            .find_map(|piece| match piece {
                Piece::Key(key) => Some(key),
                _ => None,
            })
            .unwrap_or_default()
    })
}

fn integer() -> impl Parser<Output = Ast> {
    text::integer().try_map(|digits| digits.parse::<i64>().map(Ast::Int))
}

fn value() -> impl Parser<Output = Ast> {
    bytecomb::or![integer(), string().map(Ast::Str), lazy(object)]
}

fn kv() -> impl Parser<Output = (String, Ast)> {
    bytecomb::and![
        whitespace(),
        string().map(Piece::Key),
        whitespace(),
        token(b':'),
        whitespace(),
        value().map(Piece::Value),
    ]
    .try_map(|pieces| {
        let mut key = None;
        let mut value = None;
        for piece in pieces {
            match piece {
                Piece::Key(k) => key = Some(k),
                Piece::Value(v) => value = Some(v),
                _ => {}
            }
        }
        key.zip(value)
            .ok_or_else(|| ParseError::message("key-value pair is missing its key or value"))
    })
}

fn members() -> impl Parser<Output = Vec<(String, Ast)>> {
    let kv_then_comma =
        bytecomb::and![kv().map(Piece::Pair), whitespace(), token(b',')].map(pairs);

    bytecomb::and![
        kv_then_comma
            .many()
            .map(|lists| Piece::Members(lists.concat())),
        kv().map(Piece::Pair),
    ]
    .map(pairs)
}

fn object() -> BoxedParser<Ast> {
    bytecomb::and![
        token(b'{'),
        whitespace(),
        members().map(Piece::Members).optional(),
        whitespace(),
        token(b'}'),
    ]
    .map(|pieces| Ast::Dict(pairs(pieces)))
    .map_err(|failed| {
        ParseError::message(format!(
            "malformed object: {}",
            failed.error().map(ToString::to_string).unwrap_or_default()
        ))
    })
    .boxed()
}

fn document() -> impl Parser<Output = Ast> {
    bytecomb::and![
        whitespace(),
        object().map(Piece::Value),
        whitespace(),
    ]
    .try_map(|pieces| {
        pieces
            .into_iter()
            .find_map(|piece| match piece {
                Piece::Value(ast) => Some(ast),
                _ => None,
            })
            .ok_or_else(|| ParseError::message("document holds no object"))
    })
}

fn parse_document(input: &[u8]) -> Result<Ast, ParseError> {
    let (ast, remaining) = document().parse(input).into_result()?;
    if !remaining.is_empty() {
        return Err(ParseError::message(format!(
            "unexpected trailing input: {:?}",
            String::from_utf8_lossy(remaining)
        )));
    }
    Ok(ast)
}

fn main() -> Result<(), Box<dyn Error>> {
    env_logger::init();

    let input = match std::env::args().nth(1) {
        Some(path) => std::fs::read(&path)?,
        None => SAMPLE.as_bytes().to_vec(),
    };
    log::debug!("parsing {} bytes", input.len());

    let ast = parse_document(&input)?;
    println!("{ast}");
    Ok(())
}
