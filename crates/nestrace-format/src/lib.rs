//! Fixed-column CPU trace format.
//!
//! A trace is a text file with one executed instruction per line. Every
//! field lives at a fixed byte range (see [`TraceLayout::NESTEST`]), so a
//! line is decoded by slicing, never by tokenizing:
//!
//! ```text
//! C000  4C F5 C5  JMP $C5F5                       A:00 X:00 Y:00 P:24 SP:FD CYC:  7
//! ```

mod layout;
mod record;
mod stream;

pub use layout::*;
pub use record::*;
pub use stream::*;

use std::path::PathBuf;

use thiserror::Error;

/// Errors decoding a single line.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum ParseError {
    #[error("line is {len} bytes, layout needs at least {required}")]
    TooShort { len: usize, required: usize },
    #[error("{field} column does not fall on character boundaries")]
    NotCharBoundary { field: TraceField },
}

/// Trace loading and decoding errors.
#[derive(Error, Debug)]
pub enum FormatError {
    #[error("cannot open {}: {source}", path.display())]
    Io {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },
    #[error("{}:{line}: read failed: {source}", path.display())]
    Read {
        path: PathBuf,
        line: usize,
        #[source]
        source: std::io::Error,
    },
    #[error("{}:{line}: malformed trace line: {source}", path.display())]
    Malformed {
        path: PathBuf,
        line: usize,
        #[source]
        source: ParseError,
    },
    #[error("{}: index {index} out of range ({len} lines)", path.display())]
    IndexOutOfRange {
        path: PathBuf,
        index: usize,
        len: usize,
    },
}

pub type Result<T> = std::result::Result<T, FormatError>;
