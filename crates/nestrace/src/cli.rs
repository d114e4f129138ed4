//! CLI definitions and argument types.

use std::path::PathBuf;

use clap::{Args, Parser, Subcommand};
use nestrace::DEFAULT_CONTEXT;

/// Exit code for success (traces agree, or dispatch routine written).
pub const EXIT_SUCCESS: i32 = 0;
/// Exit code when the traces diverge.
pub const EXIT_DIVERGENCE: i32 = 1;
/// Exit code when the tool itself fails (bad input, unreadable file).
pub const EXIT_ERROR: i32 = 2;

/// Default candidate trace, relative to the working directory.
pub const DEFAULT_CANDIDATE: &str = "logs/CPU.log";
/// Default reference trace, relative to the working directory.
pub const DEFAULT_REFERENCE: &str = "logs/accurate.log";
/// Default handler list for `gen-dispatch`.
pub const DEFAULT_HANDLER_LIST: &str = "instruction_list.txt";
/// Default output file for `gen-dispatch`.
pub const DEFAULT_DISPATCH_OUTPUT: &str = "output.txt";

#[derive(Parser)]
#[command(name = "nestrace")]
#[command(about = "Find the first line where two emulator CPU traces disagree")]
#[command(version)]
pub struct Cli {
    /// Enable debug logging
    #[arg(short, long, global = true)]
    pub verbose: bool,

    /// Only log errors
    #[arg(short, long, global = true, conflicts_with = "verbose")]
    pub silent: bool,

    // `None` runs `compare` with the default trace paths.
    #[command(subcommand)]
    pub command: Option<Commands>,
}

#[derive(Subcommand)]
pub enum Commands {
    /// Compare a candidate trace against a reference trace
    Compare(CompareArgs),
    /// Generate the opcode dispatch routine from a list of 256 handler names
    GenDispatch {
        /// Handler list, one 6-character name per line, opcode 0x00 first
        #[arg(value_name = "INPUT", default_value = DEFAULT_HANDLER_LIST)]
        input: PathBuf,

        /// Output file
        #[arg(short, long, default_value = DEFAULT_DISPATCH_OUTPUT)]
        output: PathBuf,
    },
}

/// Trace comparison arguments.
#[derive(Args, Debug, Clone)]
pub struct CompareArgs {
    /// Trace from the emulator under test (`.zst` is decompressed)
    #[arg(value_name = "CANDIDATE", default_value = DEFAULT_CANDIDATE)]
    pub candidate: PathBuf,

    /// Trace from the reference emulator (`.zst` is decompressed)
    #[arg(value_name = "REFERENCE", default_value = DEFAULT_REFERENCE)]
    pub reference: PathBuf,

    /// Lines of context shown on each side of the divergent line
    #[arg(short = 'C', long, default_value_t = DEFAULT_CONTEXT)]
    pub context: usize,

    /// Treat traces of different lengths as divergent
    #[arg(long)]
    pub strict_length: bool,
}

impl Default for CompareArgs {
    fn default() -> Self {
        Self {
            candidate: PathBuf::from(DEFAULT_CANDIDATE),
            reference: PathBuf::from(DEFAULT_REFERENCE),
            context: DEFAULT_CONTEXT,
            strict_length: false,
        }
    }
}
