//! Purpose: One-shot decode entrypoints plus stable failure categories.
//! Exports: `from_str`, `from_str_with_options`, `ParseFailureCategory`,
//! `categorize_error`, `hint_for_error`.
//! Role: Convenience boundary over `Parser` for callers holding a whole document.
//! Invariants: Trailing text after the first value is ignored, matching `Parser::parse`.
//! Invariants: Category labels are stable strings; new categories are additive-only.
//! Notes: Hints carry category and caller context only, never input payload bytes.

use crate::core::error::{Error, ErrorKind};
use crate::core::parser::{ParseOptions, Parser};
use crate::core::value::Value;

pub fn from_str(input: &str) -> Result<Value, Error> {
    from_str_with_options(input, ParseOptions::default())
}

pub fn from_str_with_options(input: &str, options: ParseOptions) -> Result<Value, Error> {
    let mut parser = Parser::with_options(input, options);
    match parser.parse() {
        Ok(value) => {
            let trailing = parser.remaining().trim_start();
            if !trailing.is_empty() {
                tracing::debug!(
                    offset = parser.offset(),
                    trailing_bytes = trailing.len(),
                    "ignoring trailing input after value"
                );
            }
            Ok(value)
        }
        Err(err) => {
            tracing::debug!(kind = ?err.kind(), offset = ?err.offset(), "parse failed");
            Err(err)
        }
    }
}

#[derive(Clone, Copy, Debug, Eq, PartialEq)]
pub enum ParseFailureCategory {
    Syntax,
    String,
    Literal,
    Number,
    DepthLimit,
    Unknown,
}

impl ParseFailureCategory {
    pub fn label(self) -> &'static str {
        match self {
            ParseFailureCategory::Syntax => "syntax",
            ParseFailureCategory::String => "string",
            ParseFailureCategory::Literal => "literal",
            ParseFailureCategory::Number => "number",
            ParseFailureCategory::DepthLimit => "depth-limit",
            ParseFailureCategory::Unknown => "unknown",
        }
    }
}

pub fn categorize_error(err: &Error) -> ParseFailureCategory {
    match err.kind() {
        ErrorKind::UnexpectedEndOfInput
        | ErrorKind::UnexpectedCharacter
        | ErrorKind::ExpectedKey
        | ErrorKind::ExpectedColon
        | ErrorKind::ExpectedCommaOrClosingBrace
        | ErrorKind::ExpectedCommaOrClosingBracket => ParseFailureCategory::Syntax,
        ErrorKind::UnterminatedString => ParseFailureCategory::String,
        ErrorKind::InvalidBoolean | ErrorKind::InvalidNull => ParseFailureCategory::Literal,
        ErrorKind::InvalidNumber => ParseFailureCategory::Number,
        ErrorKind::DepthLimitExceeded => ParseFailureCategory::DepthLimit,
        ErrorKind::Internal | ErrorKind::Usage | ErrorKind::Io => ParseFailureCategory::Unknown,
    }
}

pub fn hint_for_error(err: &Error, context: &str) -> String {
    let category = categorize_error(err);
    let advice = match category {
        ParseFailureCategory::Syntax => "check brackets, braces, colons and commas",
        ParseFailureCategory::String => "every string needs a closing double quote",
        ParseFailureCategory::Literal => "literals are lowercase `true`, `false` and `null`",
        ParseFailureCategory::Number => "numbers must be finite decimal values like -1.5e3",
        ParseFailureCategory::DepthLimit => "raise --max-depth or flatten the document",
        ParseFailureCategory::Unknown => "see the error message",
    };
    format!(
        "parse category: {}; context: {context}; {advice}",
        category.label()
    )
}
