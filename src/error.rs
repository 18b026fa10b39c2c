//! Error types and result type for the warodai-edict crate.
//!
//! Every failure is fatal to a conversion run: a single malformed record means
//! the whole source file is not trusted. The structural variants carry the
//! offending header line so the message can point at the source.
//!
//! # Examples
//!
//! ```
//! use warodai_edict::{ConvertError, Result};
//!
//! fn parse_header(line: &str) -> Result<usize> {
//!     line.find('(')
//!         .ok_or_else(|| ConvertError::malformed_header("no kanakanji part", line))
//! }
//!
//! assert!(parse_header("ねこ").is_err());
//! ```
//!
//! # Error Variants
//!
//! - [`ConvertError::MalformedHeader`]: header line lacks the parenthesis or kana part
//! - [`ConvertError::NestingMismatch`]: alternative lists of incompatible lengths
//! - [`ConvertError::EmptyReading`]: no kana left after removing affix markers
//! - [`ConvertError::Io`]: I/O errors from file operations
//! - [`ConvertError::Decode`]: source bytes are not valid in the configured encoding
//! - [`ConvertError::Download`]: source archive could not be fetched
//! - [`ConvertError::Archive`]: source archive could not be extracted

use std::io;
use snafu::{Snafu, Backtrace};

use crate::builder::alignment::AlternativeLevel;

// Re-export snafu for context providers
pub use snafu;

/// Main error type for the warodai-edict crate.
///
/// All errors include automatic backtrace capture for debugging purposes.
#[derive(Debug, Snafu)]
#[snafu(visibility(pub))]
pub enum ConvertError {
    /// I/O error occurred during file operations.
    #[snafu(display("IO error: {source}"))]
    Io {
        source: io::Error,
        backtrace: Backtrace,
    },

    /// Header line does not follow the `kana【kanji】(annotation)` grammar.
    #[snafu(display("Malformed header ({reason}): {line}"))]
    MalformedHeader {
        reason: String,
        line: String,
        backtrace: Backtrace,
    },

    /// Kana and kanji alternative lists both have several entries of different counts.
    #[snafu(display("Nesting {level} error ({kana_count} kana vs {kanji_count} kanji): {line}"))]
    NestingMismatch {
        level: AlternativeLevel,
        kana_count: usize,
        kanji_count: usize,
        line: String,
        backtrace: Backtrace,
    },

    /// Reading became empty once the ellipsis markers were removed.
    #[snafu(display("No kana: [{kanji}]: {line}"))]
    EmptyReading {
        kanji: String,
        line: String,
        backtrace: Backtrace,
    },

    /// Source file contains byte sequences invalid in its encoding.
    #[snafu(display("Decoding error with: {encoding} ({path})"))]
    Decode {
        encoding: String,
        path: String,
        backtrace: Backtrace,
    },

    /// Server answered the archive request with a non-success status.
    #[snafu(display("Failed to download {url}. Status code: {status}"))]
    Download {
        url: String,
        status: u16,
        backtrace: Backtrace,
    },

    /// Transport-level HTTP failure.
    #[snafu(display("HTTP error: {source}"))]
    Http {
        source: Box<dyn std::error::Error + Send + Sync + 'static>,
        backtrace: Backtrace,
    },

    /// Zip archive could not be opened or extracted.
    #[snafu(display("Archive error: {source}"))]
    Archive {
        source: zip::result::ZipError,
        backtrace: Backtrace,
    },

    /// Error parsing the JSON configuration or the source URL.
    #[snafu(display("Parser error: {source}"))]
    ParserError {
        source: Box<dyn std::error::Error + Send + Sync + 'static>,
        backtrace: Backtrace,
    },

    /// Function was called with invalid parameters.
    #[snafu(display("Invalid parameter: {message}"))]
    InvalidParameter {
        message: String,
        backtrace: Backtrace,
    },

    /// Operation was interrupted by user.
    #[snafu(display("User interrupted"))]
    UserInterrupted {
        backtrace: Backtrace,
    },
}

impl From<io::Error> for ConvertError {
    fn from(source: io::Error) -> Self {
        Self::Io { source, backtrace: Backtrace::capture() }
    }
}

impl From<zip::result::ZipError> for ConvertError {
    fn from(source: zip::result::ZipError) -> Self {
        Self::Archive { source, backtrace: Backtrace::capture() }
    }
}

impl From<serde_json::Error> for ConvertError {
    fn from(source: serde_json::Error) -> Self {
        Self::ParserError {
            source: Box::new(source),
            backtrace: Backtrace::capture(),
        }
    }
}

impl From<url::ParseError> for ConvertError {
    fn from(source: url::ParseError) -> Self {
        Self::ParserError { source: Box::new(source), backtrace: Backtrace::capture() }
    }
}

#[cfg(feature = "download")]
impl From<reqwest::Error> for ConvertError {
    fn from(source: reqwest::Error) -> Self {
        Self::Http { source: Box::new(source), backtrace: Backtrace::capture() }
    }
}

/// Helper methods for creating errors without context providers.
impl ConvertError {
    /// Creates a `MalformedHeader` error for the given header line.
    ///
    /// # Examples
    ///
    /// ```
    /// use warodai_edict::ConvertError;
    ///
    /// let error = ConvertError::malformed_header("no kana part", "【猫】(нэко)");
    /// assert!(error.to_string().contains("【猫】(нэко)"));
    /// ```
    pub fn malformed_header<R: Into<String>, L: Into<String>>(reason: R, line: L) -> Self {
        Self::MalformedHeader {
            reason: reason.into(),
            line: line.into(),
            backtrace: Backtrace::capture(),
        }
    }

    /// Creates a `NestingMismatch` error for the given alternative level.
    pub fn nesting_mismatch<L: Into<String>>(level: AlternativeLevel, kana_count: usize, kanji_count: usize, line: L) -> Self {
        Self::NestingMismatch {
            level,
            kana_count,
            kanji_count,
            line: line.into(),
            backtrace: Backtrace::capture(),
        }
    }

    /// Creates an `EmptyReading` error.
    pub fn empty_reading<K: Into<String>, L: Into<String>>(kanji: K, line: L) -> Self {
        Self::EmptyReading {
            kanji: kanji.into(),
            line: line.into(),
            backtrace: Backtrace::capture(),
        }
    }

    /// Creates a `Decode` error for a source file that failed to decode.
    pub fn decode_failed<E: Into<String>, P: Into<String>>(encoding: E, path: P) -> Self {
        Self::Decode {
            encoding: encoding.into(),
            path: path.into(),
            backtrace: Backtrace::capture(),
        }
    }

    /// Creates a `Download` error for a non-success HTTP status.
    pub fn download_failed<S: Into<String>>(url: S, status: u16) -> Self {
        Self::Download {
            url: url.into(),
            status,
            backtrace: Backtrace::capture(),
        }
    }

    /// Creates an `InvalidParameter` error with the given message.
    pub fn invalid_parameter<S: Into<String>>(message: S) -> Self {
        Self::InvalidParameter {
            message: message.into(),
            backtrace: Backtrace::capture(),
        }
    }

    /// Creates a `UserInterrupted` error.
    pub fn user_interrupted() -> Self {
        Self::UserInterrupted {
            backtrace: Backtrace::capture(),
        }
    }

    /// Checks if this error comes from the structure of a record rather than I/O.
    pub fn is_structural(&self) -> bool {
        matches!(
            self,
            ConvertError::MalformedHeader { .. }
                | ConvertError::NestingMismatch { .. }
                | ConvertError::EmptyReading { .. }
        )
    }
}

/// A specialized `Result` type for conversion operations.
///
/// This is a convenience type alias that uses [`ConvertError`] as the error type.
pub type Result<T> = std::result::Result<T, ConvertError>;
