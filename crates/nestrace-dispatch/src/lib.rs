//! Opcode dispatch routine generation.
//!
//! Takes an ordered list of 256 handler names (one per opcode, `0x00` first)
//! and emits a C++ `CPU::dispatch` switch that calls the matching handler.
//! The list is validated in full before anything is emitted.

use std::fmt;
use std::path::{Path, PathBuf};

use thiserror::Error;
use tracing::debug;

/// Number of opcodes (and therefore handler lines).
pub const OPCODE_COUNT: usize = 256;

/// Exact width of every handler identifier, in characters.
pub const HANDLER_WIDTH: usize = 6;

/// Handler list errors.
#[derive(Error, Debug)]
pub enum DispatchError {
    #[error("expected {} handler lines, found {found}", OPCODE_COUNT)]
    LineCount { found: usize },
    #[error(
        "handler for opcode {opcode:#04x} is {name:?} ({width} chars, expected {})",
        HANDLER_WIDTH
    )]
    HandlerWidth {
        opcode: usize,
        name: String,
        width: usize,
    },
    #[error("{}: {source}", path.display())]
    Io {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },
}

pub type Result<T> = std::result::Result<T, DispatchError>;

/// Validated opcode-ordered handler names.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct HandlerTable {
    handlers: Vec<String>,
}

impl HandlerTable {
    /// Parse a handler list. Trailing whitespace on each line is ignored.
    ///
    /// # Errors
    ///
    /// Fails if there are not exactly [`OPCODE_COUNT`] lines or any line is
    /// not exactly [`HANDLER_WIDTH`] characters.
    pub fn parse(text: &str) -> Result<Self> {
        let handlers: Vec<String> = text.lines().map(|l| l.trim_end().to_string()).collect();

        if handlers.len() != OPCODE_COUNT {
            return Err(DispatchError::LineCount {
                found: handlers.len(),
            });
        }

        if let Some((opcode, name)) = handlers
            .iter()
            .enumerate()
            .find(|(_, name)| name.chars().count() != HANDLER_WIDTH)
        {
            return Err(DispatchError::HandlerWidth {
                opcode,
                name: name.clone(),
                width: name.chars().count(),
            });
        }

        Ok(Self { handlers })
    }

    /// Read and parse a handler list file.
    ///
    /// # Errors
    ///
    /// Returns [`DispatchError::Io`] if the file cannot be read, otherwise
    /// the errors of [`HandlerTable::parse`].
    pub fn load(path: impl AsRef<Path>) -> Result<Self> {
        let path = path.as_ref();
        let text = std::fs::read_to_string(path).map_err(|e| DispatchError::Io {
            path: path.to_path_buf(),
            source: e,
        })?;
        Self::parse(&text)
    }

    /// Handler name for `opcode`.
    #[must_use]
    pub fn handler(&self, opcode: u8) -> &str {
        &self.handlers[usize::from(opcode)]
    }

    #[must_use]
    pub fn handlers(&self) -> &[String] {
        &self.handlers
    }

    /// The dispatch routine, formatted on demand.
    #[must_use]
    pub const fn dispatch(&self) -> DispatchRoutine<'_> {
        DispatchRoutine { table: self }
    }

    /// Render the dispatch routine as a single line of C++.
    #[must_use]
    pub fn render_dispatch(&self) -> String {
        self.dispatch().to_string()
    }

    /// Render the dispatch routine and write it to `path`.
    ///
    /// # Errors
    ///
    /// Returns [`DispatchError::Io`] if the file cannot be written.
    pub fn write_dispatch(&self, path: impl AsRef<Path>) -> Result<()> {
        let path = path.as_ref();
        std::fs::write(path, self.render_dispatch()).map_err(|e| DispatchError::Io {
            path: path.to_path_buf(),
            source: e,
        })?;
        debug!(path = %path.display(), "dispatch routine written");
        Ok(())
    }
}

/// `CPU::dispatch` switch over a [`HandlerTable`].
///
/// Case labels are ascending hex without padding (`0x0`, `0xa`, `0xff`).
#[derive(Debug, Clone, Copy)]
pub struct DispatchRoutine<'a> {
    table: &'a HandlerTable,
}

impl fmt::Display for DispatchRoutine<'_> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str("void CPU::dispatch(u8 opcode) { switch (opcode) { ")?;
        for (opcode, name) in self.table.handlers.iter().enumerate() {
            write!(f, "case {opcode:#x}: {name}(); break; ")?;
        }
        f.write_str("} }")
    }
}
