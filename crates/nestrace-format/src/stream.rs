use std::fs::File;
use std::io::{BufRead, BufReader};
use std::path::{Path, PathBuf};

use tracing::debug;

use super::{FormatError, Result, TraceLayout, TraceRecord};

/// All lines of one trace file, held in memory.
///
/// Lines are stored without their terminators and indexed from 0.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct TraceStream {
    source: PathBuf,
    lines: Vec<String>,
}

impl TraceStream {
    /// Build a stream from lines already in memory.
    #[must_use]
    pub fn from_lines<I, S>(source: impl Into<PathBuf>, lines: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        Self {
            source: source.into(),
            lines: lines.into_iter().map(Into::into).collect(),
        }
    }

    /// Read every line from `reader`. `source` is only used in errors.
    ///
    /// # Errors
    ///
    /// Returns [`FormatError::Read`] if a line cannot be read or is not UTF-8.
    pub fn from_reader<R: BufRead>(source: impl Into<PathBuf>, reader: R) -> Result<Self> {
        let source = source.into();
        let mut lines = Vec::new();

        for (idx, line) in reader.lines().enumerate() {
            let line = line.map_err(|e| FormatError::Read {
                path: source.clone(),
                line: idx + 1,
                source: e,
            })?;
            lines.push(line);
        }

        Ok(Self { source, lines })
    }

    /// Load a trace file. Paths ending in `.zst` are decompressed on the fly.
    ///
    /// # Errors
    ///
    /// Returns [`FormatError::Io`] if the file cannot be opened and
    /// [`FormatError::Read`] if its contents cannot be read.
    pub fn load(path: impl AsRef<Path>) -> Result<Self> {
        let path = path.as_ref();
        let io_err = |e| FormatError::Io {
            path: path.to_path_buf(),
            source: e,
        };

        let file = File::open(path).map_err(io_err)?;
        let stream = if is_zstd(path) {
            let decoder = zstd::stream::Decoder::new(file).map_err(io_err)?;
            Self::from_reader(path, BufReader::new(decoder))?
        } else {
            Self::from_reader(path, BufReader::new(file))?
        };

        debug!(path = %path.display(), lines = stream.len(), "trace loaded");
        Ok(stream)
    }

    #[must_use]
    pub fn source(&self) -> &Path {
        &self.source
    }

    #[must_use]
    pub const fn len(&self) -> usize {
        self.lines.len()
    }

    #[must_use]
    pub const fn is_empty(&self) -> bool {
        self.lines.is_empty()
    }

    #[must_use]
    pub fn lines(&self) -> &[String] {
        &self.lines
    }

    #[must_use]
    pub fn line(&self, index: usize) -> Option<&str> {
        self.lines.get(index).map(String::as_str)
    }

    /// Decode the line at `index`.
    ///
    /// # Errors
    ///
    /// Returns [`FormatError::IndexOutOfRange`] past the end of the stream
    /// and [`FormatError::Malformed`] (with a 1-based line number) if the
    /// line does not fit `layout`.
    pub fn record(&self, index: usize, layout: &TraceLayout) -> Result<TraceRecord<'_>> {
        let Some(line) = self.line(index) else {
            return Err(FormatError::IndexOutOfRange {
                path: self.source.clone(),
                index,
                len: self.lines.len(),
            });
        };
        TraceRecord::parse(line, layout).map_err(|e| FormatError::Malformed {
            path: self.source.clone(),
            line: index + 1,
            source: e,
        })
    }
}

fn is_zstd(path: &Path) -> bool {
    path.extension().is_some_and(|ext| ext == "zst")
}
