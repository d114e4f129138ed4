//! Command implementations.
//!
//! Each submodule handles one CLI command and maps its result to an exit code.

mod compare;
mod gen_dispatch;

use crate::cli::{Cli, Commands, CompareArgs};

/// Dispatch CLI command to the appropriate handler.
pub fn run_command(cli: &Cli) -> i32 {
    match &cli.command {
        Some(Commands::Compare(args)) => compare::cmd_compare(args),
        Some(Commands::GenDispatch { input, output }) => {
            gen_dispatch::cmd_gen_dispatch(input, output)
        }
        None => compare::cmd_compare(&CompareArgs::default()),
    }
}
