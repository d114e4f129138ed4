use std::path::Path;

use crate::cli::{EXIT_ERROR, EXIT_SUCCESS};
use crate::terminal;

/// Generate the dispatch routine from a handler list.
pub fn cmd_gen_dispatch(input: &Path, output: &Path) -> i32 {
    match nestrace::generate_dispatch(input, output) {
        Ok(_) => {
            terminal::success("Dispatch routine generated");
            terminal::output_path("dispatch", output);
            EXIT_SUCCESS
        }
        Err(e) => {
            terminal::error(&format!("Cannot generate from {}: {e}", input.display()));
            EXIT_ERROR
        }
    }
}
