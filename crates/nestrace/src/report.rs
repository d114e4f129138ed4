//! Plain-text rendering of scan results.
//!
//! The divergence report shows the raw lines only; the fixed-column layout
//! makes them readable without a per-field breakdown.

use std::fmt;

use crate::scan::{Divergence, MatchSummary};

/// Column heading over the candidate lines.
pub const CANDIDATE_LABEL: &str = "CANDIDATE";
/// Column heading over the reference lines.
pub const REFERENCE_LABEL: &str = "REFERENCE";

const MARKER: &str = " >> ";
const GUTTER: &str = "    ";
const SEPARATOR: &str = "   |   ";

impl fmt::Display for Divergence<'_> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        writeln!(f, "Disagreement on line {}", self.index + 1)?;
        writeln!(f)?;

        let rows = self.window.rows();
        let width = rows
            .iter()
            .map(|row| row.candidate.trim_end().chars().count())
            .chain(std::iter::once(CANDIDATE_LABEL.len()))
            .max()
            .unwrap_or(0);
        let header_gap = " ".repeat(SEPARATOR.len());

        writeln!(
            f,
            "{GUTTER}{CANDIDATE_LABEL:<width$}{header_gap}{REFERENCE_LABEL}"
        )?;
        for row in rows {
            let marker = if row.divergent { MARKER } else { GUTTER };
            writeln!(
                f,
                "{marker}{:<width$}{SEPARATOR}{}",
                row.candidate.trim_end(),
                row.reference.trim_end()
            )?;
        }

        writeln!(f)?;
        writeln!(f)?;
        writeln!(f, "Candidate: {}", self.candidate_line.trim_end())?;
        writeln!(f, "Reference: {}", self.reference_line.trim_end())
    }
}

impl fmt::Display for MatchSummary {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "All {} compared lines matched. CPU is likely correct.",
            self.compared
        )
    }
}
