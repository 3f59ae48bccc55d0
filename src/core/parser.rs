// Recursive-descent JSON parser over an in-memory document.
//
// Scanning is byte-oriented: every structural character and every byte the
// facets classify is ASCII, so UTF-8 payloads inside strings pass through
// unchanged and slice boundaries always fall on char boundaries.
use crate::core::error::{Error, ErrorKind};
use crate::core::value::{Map, Value};

const TRUE_LITERAL: &[u8] = b"true";
const FALSE_LITERAL: &[u8] = b"false";
const NULL_LITERAL: &[u8] = b"null";

#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub struct ParseOptions {
    /// Maximum object/array nesting; `None` leaves depth bounded only by the stack.
    pub max_depth: Option<usize>,
}

impl ParseOptions {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_max_depth(mut self, max_depth: usize) -> Self {
        self.max_depth = Some(max_depth);
        self
    }
}

/// Cursor over one input document.
///
/// The cursor only moves forward. `parse` consumes exactly one value and leaves
/// anything after it untouched; see [`Parser::remaining`].
#[derive(Debug)]
pub struct Parser<'a> {
    input: &'a str,
    pos: usize,
    depth: usize,
    options: ParseOptions,
}

impl<'a> Parser<'a> {
    pub fn new(input: &'a str) -> Self {
        Self::with_options(input, ParseOptions::default())
    }

    pub fn with_options(input: &'a str, options: ParseOptions) -> Self {
        Self {
            input,
            pos: 0,
            depth: 0,
            options,
        }
    }

    /// Current cursor position as a byte offset into the input.
    pub fn offset(&self) -> usize {
        self.pos
    }

    /// Input not consumed so far.
    pub fn remaining(&self) -> &'a str {
        self.input.get(self.pos..).unwrap_or("")
    }

    /// Parses the next value, skipping leading whitespace.
    ///
    /// Object and array members recurse through here. Trailing text after the
    /// value is not inspected.
    pub fn parse(&mut self) -> Result<Value, Error> {
        self.skip_whitespace();
        let Some(byte) = self.peek() else {
            return Err(self.end_of_input("a value"));
        };

        match byte {
            b'{' => {
                self.enter()?;
                let object = self.parse_object();
                self.depth -= 1;
                object.map(Value::Object)
            }
            b'[' => {
                self.enter()?;
                let array = self.parse_array();
                self.depth -= 1;
                array.map(Value::Array)
            }
            b'"' => self.parse_string().map(Value::String),
            b't' | b'f' => self.parse_boolean().map(Value::Bool),
            b'n' => self.parse_null().map(|()| Value::Null),
            b'-' | b'0'..=b'9' => self.parse_number().map(Value::Number),
            _ => Err(self.unexpected_character()),
        }
    }

    fn parse_object(&mut self) -> Result<Map, Error> {
        let mut map = Map::new();
        self.pos += 1;

        loop {
            self.skip_whitespace();
            match self.peek() {
                None => return Err(self.end_of_input("an object member or '}'")),
                Some(b'}') => {
                    self.pos += 1;
                    return Ok(map);
                }
                Some(b'"') => {}
                Some(_) => {
                    return Err(self.syntax_error(
                        ErrorKind::ExpectedKey,
                        "expected a string key or '}' in object",
                    ));
                }
            }

            let key = self.parse_string()?;

            self.skip_whitespace();
            match self.peek() {
                None => return Err(self.end_of_input("':'")),
                Some(b':') => self.pos += 1,
                Some(_) => return Err(self.expected_colon(&key)),
            }

            let value = self.parse()?;
            // Repeated keys keep the last value.
            map.insert(key, value);

            self.skip_whitespace();
            match self.peek() {
                None => return Err(self.end_of_input("',' or '}'")),
                Some(b',') => self.pos += 1,
                Some(b'}') => {}
                Some(_) => {
                    return Err(self.syntax_error(
                        ErrorKind::ExpectedCommaOrClosingBrace,
                        "expected ',' or '}' after object member",
                    ));
                }
            }
        }
    }

    fn parse_array(&mut self) -> Result<Vec<Value>, Error> {
        let mut items = Vec::new();
        self.pos += 1;

        loop {
            self.skip_whitespace();
            match self.peek() {
                None => return Err(self.end_of_input("an array element or ']'")),
                Some(b']') => {
                    self.pos += 1;
                    return Ok(items);
                }
                Some(_) => {}
            }

            items.push(self.parse()?);

            self.skip_whitespace();
            match self.peek() {
                None => return Err(self.end_of_input("',' or ']'")),
                Some(b',') => self.pos += 1,
                Some(b']') => {}
                Some(_) => {
                    return Err(self.syntax_error(
                        ErrorKind::ExpectedCommaOrClosingBracket,
                        "expected ',' or ']' after array element",
                    ));
                }
            }
        }
    }

    /// Returns the raw text between the quotes. A backslash skips the byte after
    /// it, nothing is decoded.
    fn parse_string(&mut self) -> Result<String, Error> {
        let open = self.pos;
        let bytes = self.input.as_bytes();
        self.pos += 1;
        let start = self.pos;

        while self.pos < bytes.len() && bytes[self.pos] != b'"' {
            if bytes[self.pos] == b'\\' {
                self.pos += 1;
            }
            self.pos += 1;
        }

        if self.pos >= bytes.len() {
            self.pos = bytes.len();
            return Err(Error::new(ErrorKind::UnterminatedString)
                .with_message("string is missing its closing quote")
                .with_offset(open));
        }

        let raw = self.input[start..self.pos].to_string();
        self.pos += 1;
        Ok(raw)
    }

    /// Accepts any run of number-ish bytes and leaves validation to `f64` parsing.
    fn parse_number(&mut self) -> Result<f64, Error> {
        let start = self.pos;
        while self.peek().is_some_and(is_number_byte) {
            self.pos += 1;
        }

        let lexeme = &self.input[start..self.pos];
        let number: f64 = lexeme.parse().map_err(|err| {
            Error::new(ErrorKind::InvalidNumber)
                .with_message(format!("invalid number `{lexeme}`"))
                .with_offset(start)
                .with_source(err)
        })?;
        if !number.is_finite() {
            return Err(Error::new(ErrorKind::InvalidNumber)
                .with_message(format!("number `{lexeme}` is out of range"))
                .with_offset(start));
        }
        Ok(number)
    }

    fn parse_boolean(&mut self) -> Result<bool, Error> {
        if self.eat_literal(TRUE_LITERAL) {
            return Ok(true);
        }
        if self.eat_literal(FALSE_LITERAL) {
            return Ok(false);
        }
        Err(self.syntax_error(ErrorKind::InvalidBoolean, "expected `true` or `false`"))
    }

    fn parse_null(&mut self) -> Result<(), Error> {
        if self.eat_literal(NULL_LITERAL) {
            return Ok(());
        }
        Err(self.syntax_error(ErrorKind::InvalidNull, "expected `null`"))
    }

    fn skip_whitespace(&mut self) {
        while self.peek().is_some_and(is_whitespace) {
            self.pos += 1;
        }
    }

    fn enter(&mut self) -> Result<(), Error> {
        if let Some(max_depth) = self.options.max_depth {
            if self.depth >= max_depth {
                return Err(self.depth_exceeded(max_depth));
            }
        }
        self.depth += 1;
        Ok(())
    }

    fn eat_literal(&mut self, literal: &[u8]) -> bool {
        if self.input.as_bytes()[self.pos..].starts_with(literal) {
            self.pos += literal.len();
            return true;
        }
        false
    }

    fn peek(&self) -> Option<u8> {
        self.input.as_bytes().get(self.pos).copied()
    }

    // Error builders stay out of line so the recursive facets keep small frames.

    #[cold]
    #[inline(never)]
    fn syntax_error(&self, kind: ErrorKind, message: &'static str) -> Error {
        Error::new(kind).with_message(message).with_offset(self.pos)
    }

    #[cold]
    #[inline(never)]
    fn expected_colon(&self, key: &str) -> Error {
        Error::new(ErrorKind::ExpectedColon)
            .with_message(format!("expected ':' after object key \"{key}\""))
            .with_offset(self.pos)
    }

    #[cold]
    #[inline(never)]
    fn depth_exceeded(&self, max_depth: usize) -> Error {
        Error::new(ErrorKind::DepthLimitExceeded)
            .with_message(format!("nesting deeper than {max_depth} levels"))
            .with_offset(self.pos)
    }

    #[cold]
    #[inline(never)]
    fn end_of_input(&self, expected: &str) -> Error {
        Error::new(ErrorKind::UnexpectedEndOfInput)
            .with_message(format!("unexpected end of input, expected {expected}"))
            .with_offset(self.input.len())
    }

    #[cold]
    #[inline(never)]
    fn unexpected_character(&self) -> Error {
        let found = self.remaining().chars().next().unwrap_or('\u{fffd}');
        Error::new(ErrorKind::UnexpectedCharacter)
            .with_message(format!("unexpected character {found:?}"))
            .with_offset(self.pos)
    }
}

fn is_whitespace(byte: u8) -> bool {
    matches!(byte, b' ' | b'\t' | b'\n' | b'\r' | 0x0b | 0x0c)
}

fn is_number_byte(byte: u8) -> bool {
    byte.is_ascii_digit() || matches!(byte, b'.' | b'e' | b'E' | b'+' | b'-')
}
