use std::error::Error as StdError;
use std::fmt;
use std::path::{Path, PathBuf};

#[derive(Clone, Copy, Debug, Eq, PartialEq)]
pub enum ErrorKind {
    Internal,
    Usage,
    Io,
    UnexpectedEndOfInput,
    UnexpectedCharacter,
    ExpectedKey,
    ExpectedColon,
    ExpectedCommaOrClosingBrace,
    ExpectedCommaOrClosingBracket,
    UnterminatedString,
    InvalidBoolean,
    InvalidNull,
    InvalidNumber,
    DepthLimitExceeded,
}

impl ErrorKind {
    /// True for kinds raised by the parser itself rather than its callers.
    pub fn is_parse(self) -> bool {
        !matches!(self, ErrorKind::Internal | ErrorKind::Usage | ErrorKind::Io)
    }
}

/// Boxed so `Result<Value, Error>` stays pointer-sized on the recursive parse path.
#[derive(Debug)]
pub struct Error {
    inner: Box<ErrorInner>,
}

#[derive(Debug)]
struct ErrorInner {
    kind: ErrorKind,
    message: Option<String>,
    hint: Option<String>,
    path: Option<PathBuf>,
    offset: Option<usize>,
    source: Option<Box<dyn StdError + Send + Sync>>,
}

impl Error {
    pub fn new(kind: ErrorKind) -> Self {
        Self {
            inner: Box::new(ErrorInner {
                kind,
                message: None,
                hint: None,
                path: None,
                offset: None,
                source: None,
            }),
        }
    }

    pub fn kind(&self) -> ErrorKind {
        self.inner.kind
    }

    pub fn message(&self) -> Option<&str> {
        self.inner.message.as_deref()
    }

    pub fn hint(&self) -> Option<&str> {
        self.inner.hint.as_deref()
    }

    pub fn path(&self) -> Option<&Path> {
        self.inner.path.as_deref()
    }

    /// Byte offset into the input where the failing construct was detected.
    pub fn offset(&self) -> Option<usize> {
        self.inner.offset
    }

    pub fn with_message(mut self, message: impl Into<String>) -> Self {
        self.inner.message = Some(message.into());
        self
    }

    pub fn with_hint(mut self, hint: impl Into<String>) -> Self {
        self.inner.hint = Some(hint.into());
        self
    }

    pub fn with_path(mut self, path: impl Into<PathBuf>) -> Self {
        self.inner.path = Some(path.into());
        self
    }

    pub fn with_offset(mut self, offset: usize) -> Self {
        self.inner.offset = Some(offset);
        self
    }

    pub fn with_source(mut self, source: impl StdError + Send + Sync + 'static) -> Self {
        self.inner.source = Some(Box::new(source));
        self
    }
}

impl fmt::Display for Error {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{:?}", self.inner.kind)?;
        if let Some(message) = &self.inner.message {
            write!(f, ": {message}")?;
        }
        if let Some(path) = &self.inner.path {
            write!(f, " (path: {})", path.display())?;
        }
        if let Some(offset) = self.inner.offset {
            write!(f, " (offset: {offset})")?;
        }
        Ok(())
    }
}

impl StdError for Error {
    fn source(&self) -> Option<&(dyn StdError + 'static)> {
        self.inner
            .source
            .as_ref()
            .map(|source| source.as_ref() as &(dyn StdError + 'static))
    }
}

pub fn to_exit_code(kind: ErrorKind) -> i32 {
    match kind {
        ErrorKind::Internal => 1,
        ErrorKind::Usage => 2,
        ErrorKind::Io => 3,
        ErrorKind::UnexpectedEndOfInput
        | ErrorKind::UnexpectedCharacter
        | ErrorKind::ExpectedKey
        | ErrorKind::ExpectedColon
        | ErrorKind::ExpectedCommaOrClosingBrace
        | ErrorKind::ExpectedCommaOrClosingBracket
        | ErrorKind::UnterminatedString
        | ErrorKind::InvalidBoolean
        | ErrorKind::InvalidNull => 4,
        ErrorKind::InvalidNumber => 5,
        ErrorKind::DepthLimitExceeded => 6,
    }
}
