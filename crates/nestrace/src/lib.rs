//! nestrace - CPU trace divergence detector
//!
//! Compares a candidate emulator's per-instruction trace against a trusted
//! reference trace and reports the first line where the decoded fields
//! disagree, together with the lines around it.
//!
//! # Example
//!
//! ```ignore
//! use nestrace::{ScanConfig, ScanOutcome, TracePair};
//!
//! let pair = TracePair::load("logs/CPU.log", "logs/accurate.log")?;
//! match pair.scan(&ScanConfig::default())? {
//!     ScanOutcome::DivergenceFound(divergence) => print!("{divergence}"),
//!     ScanOutcome::AllMatched(summary) => println!("{summary}"),
//! }
//! ```

// Re-export from sub-crates
pub use nestrace_dispatch::{DispatchError, HandlerTable};
pub use nestrace_format::{
    FieldRange, FormatError, ParseError, TraceField, TraceLayout, TraceRecord, TraceStream,
};

mod dispatch;
mod error;
mod pair;
pub mod report;
pub mod scan;

pub use dispatch::generate_dispatch;
pub use error::{Error, Result};
pub use pair::TracePair;
pub use scan::{
    ContextRow, ContextWindow, DEFAULT_CONTEXT, Divergence, MatchSummary, ScanConfig, ScanOutcome,
    ScanState, Scanner,
};
