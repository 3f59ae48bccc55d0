//! Purpose: Define the stable public Rust API boundary for jsonparser.
//! Exports: Parser, value tree, error types and one-shot decode helpers.
//! Role: Public, additive-only surface used by the CLI and library callers.
//! Invariants: Callers reach parser internals only through this module.

mod parse;

pub use crate::core::error::{Error, ErrorKind, to_exit_code};
pub use crate::core::parser::{ParseOptions, Parser};
pub use crate::core::value::{Map, Value};
pub use parse::{
    ParseFailureCategory, categorize_error, from_str, from_str_with_options, hint_for_error,
};
