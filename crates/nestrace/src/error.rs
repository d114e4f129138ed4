use thiserror::Error;

/// nestrace errors.
#[derive(Error, Debug)]
pub enum Error {
    #[error(transparent)]
    Format(#[from] nestrace_format::FormatError),
    #[error(transparent)]
    Dispatch(#[from] nestrace_dispatch::DispatchError),
}

pub type Result<T> = std::result::Result<T, Error>;
