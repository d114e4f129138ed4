use std::path::Path;

use nestrace_format::TraceStream;
use tracing::info;

use crate::Result;
use crate::scan::{ScanConfig, ScanOutcome, Scanner};

/// A candidate trace and the reference it is checked against.
#[derive(Debug, Clone)]
pub struct TracePair {
    pub candidate: TraceStream,
    pub reference: TraceStream,
}

impl TracePair {
    #[must_use]
    pub const fn new(candidate: TraceStream, reference: TraceStream) -> Self {
        Self {
            candidate,
            reference,
        }
    }

    /// Load both traces fully before any comparison starts.
    ///
    /// # Errors
    ///
    /// Fails if either file cannot be opened or read.
    pub fn load(candidate: impl AsRef<Path>, reference: impl AsRef<Path>) -> Result<Self> {
        let candidate = TraceStream::load(candidate)?;
        let reference = TraceStream::load(reference)?;
        info!(
            candidate = %candidate.source().display(),
            candidate_lines = candidate.len(),
            reference = %reference.source().display(),
            reference_lines = reference.len(),
            "traces loaded"
        );
        Ok(Self::new(candidate, reference))
    }

    /// Scan for the first divergence.
    ///
    /// # Errors
    ///
    /// Fails on the first line (within the compared prefix) that does not fit
    /// the configured layout.
    pub fn scan(&self, config: &ScanConfig) -> Result<ScanOutcome<'_>> {
        Scanner::new(&self.candidate, &self.reference, config.clone()).run()
    }
}
