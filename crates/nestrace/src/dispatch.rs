use std::path::Path;

use nestrace_dispatch::HandlerTable;
use tracing::info;

use crate::Result;

/// Read a handler list from `input` and write the dispatch routine to
/// `output`.
///
/// The list is validated before `output` is opened, so a bad list leaves
/// no partial file behind.
///
/// # Errors
///
/// Returns [`crate::Error::Dispatch`] if the list cannot be read, has the
/// wrong shape, or the routine cannot be written.
pub fn generate_dispatch(input: &Path, output: &Path) -> Result<HandlerTable> {
    let table = HandlerTable::load(input)?;
    table.write_dispatch(output)?;
    info!(
        input = %input.display(),
        output = %output.display(),
        handlers = table.handlers().len(),
        "dispatch routine generated"
    );
    Ok(table)
}
