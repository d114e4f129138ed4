//! Lockstep divergence scan over two traces.
//!
//! Lines are compared pairwise by index over the common prefix of the two
//! streams. The first index whose decoded fields differ ends the scan; lines
//! past the shorter stream are never compared.

mod window;

pub use window::{ContextRow, ContextWindow};

use nestrace_format::{TraceField, TraceLayout, TraceRecord, TraceStream};
use tracing::debug;

use crate::Result;

/// Default number of lines shown on each side of a divergence.
pub const DEFAULT_CONTEXT: usize = 5;

/// Scan configuration.
#[derive(Debug, Clone)]
pub struct ScanConfig {
    /// Column layout shared by both traces.
    pub layout: TraceLayout,
    /// Context radius around the divergent line.
    pub context: usize,
}

impl Default for ScanConfig {
    fn default() -> Self {
        Self {
            layout: TraceLayout::NESTEST,
            context: DEFAULT_CONTEXT,
        }
    }
}

/// Summary of a scan that found no divergence.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct MatchSummary {
    /// Number of line pairs compared (length of the shorter stream).
    pub compared: usize,
    pub candidate_len: usize,
    pub reference_len: usize,
}

impl MatchSummary {
    /// True if one stream had lines the scan never looked at.
    #[must_use]
    pub const fn length_mismatch(&self) -> bool {
        self.candidate_len != self.reference_len
    }
}

/// First point of disagreement between the two traces.
#[derive(Debug, Clone)]
pub struct Divergence<'a> {
    /// 0-based line index.
    pub index: usize,
    pub candidate: TraceRecord<'a>,
    pub reference: TraceRecord<'a>,
    pub candidate_line: &'a str,
    pub reference_line: &'a str,
    pub window: ContextWindow<'a>,
}

impl Divergence<'_> {
    /// Fields that differ at the divergent line, in comparison order.
    #[must_use]
    pub fn mismatched_fields(&self) -> Vec<TraceField> {
        self.candidate.mismatched_fields(&self.reference)
    }
}

/// Scanner state. `Scanning` is the only non-terminal state.
#[derive(Debug, Clone)]
pub enum ScanState<'a> {
    Scanning { index: usize },
    DivergenceFound(Divergence<'a>),
    AllMatched(MatchSummary),
}

impl ScanState<'_> {
    #[must_use]
    pub const fn is_terminal(&self) -> bool {
        !matches!(self, Self::Scanning { .. })
    }
}

/// Terminal result of a scan.
#[derive(Debug, Clone)]
pub enum ScanOutcome<'a> {
    AllMatched(MatchSummary),
    DivergenceFound(Divergence<'a>),
}

/// Lockstep scanner over a candidate and a reference trace.
///
/// Indices are visited once, in increasing order. Terminal states are
/// absorbing: further calls to [`Scanner::step`] leave them unchanged.
pub struct Scanner<'a> {
    candidate: &'a TraceStream,
    reference: &'a TraceStream,
    config: ScanConfig,
    limit: usize,
    state: ScanState<'a>,
}

impl<'a> Scanner<'a> {
    #[must_use]
    pub fn new(candidate: &'a TraceStream, reference: &'a TraceStream, config: ScanConfig) -> Self {
        let limit = candidate.len().min(reference.len());
        debug!(
            candidate = candidate.len(),
            reference = reference.len(),
            limit,
            "starting scan"
        );
        Self {
            candidate,
            reference,
            config,
            limit,
            state: ScanState::Scanning { index: 0 },
        }
    }

    #[must_use]
    pub const fn state(&self) -> &ScanState<'a> {
        &self.state
    }

    /// Number of line pairs that will be compared.
    #[must_use]
    pub const fn limit(&self) -> usize {
        self.limit
    }

    /// Compare the pair at the current index and advance.
    ///
    /// # Errors
    ///
    /// Fails if either line at the current index cannot be decoded. The
    /// state is left at that index.
    pub fn step(&mut self) -> Result<&ScanState<'a>> {
        let ScanState::Scanning { index } = self.state else {
            return Ok(&self.state);
        };

        if index >= self.limit {
            self.state = ScanState::AllMatched(MatchSummary {
                compared: self.limit,
                candidate_len: self.candidate.len(),
                reference_len: self.reference.len(),
            });
            return Ok(&self.state);
        }

        let (candidate_stream, reference_stream) = (self.candidate, self.reference);
        let layout = &self.config.layout;
        let candidate = candidate_stream.record(index, layout)?;
        let reference = reference_stream.record(index, layout)?;

        self.state = if candidate == reference {
            ScanState::Scanning { index: index + 1 }
        } else {
            let divergence = self.divergence_at(index, candidate, reference);
            debug!(
                index,
                fields = ?divergence.mismatched_fields(),
                "traces diverge"
            );
            ScanState::DivergenceFound(divergence)
        };
        Ok(&self.state)
    }

    /// Step until a terminal state is reached.
    ///
    /// # Errors
    ///
    /// Stops at the first line that cannot be decoded.
    pub fn run(mut self) -> Result<ScanOutcome<'a>> {
        loop {
            match self.step()? {
                ScanState::Scanning { .. } => {}
                ScanState::DivergenceFound(divergence) => {
                    return Ok(ScanOutcome::DivergenceFound(divergence.clone()));
                }
                ScanState::AllMatched(summary) => return Ok(ScanOutcome::AllMatched(*summary)),
            }
        }
    }

    fn divergence_at(
        &self,
        index: usize,
        candidate: TraceRecord<'a>,
        reference: TraceRecord<'a>,
    ) -> Divergence<'a> {
        let candidate_lines: &'a [String] = self.candidate.lines();
        let reference_lines: &'a [String] = self.reference.lines();
        Divergence {
            index,
            candidate,
            reference,
            candidate_line: candidate_lines[index].as_str(),
            reference_line: reference_lines[index].as_str(),
            window: ContextWindow::around(
                &candidate_lines[..self.limit],
                &reference_lines[..self.limit],
                index,
                self.config.context,
            ),
        }
    }
}

#[cfg(test)]
mod tests;
