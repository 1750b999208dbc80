mod binding;
mod io;
mod suite;

pub use binding::BindingError;
pub use io::IoError;
pub use suite::SuiteError;

use thiserror::Error;

#[derive(Error, Debug)]
pub enum Error {
    #[error(transparent)]
    Io(#[from] IoError),

    #[error(transparent)]
    Binding(#[from] BindingError),

    #[error(transparent)]
    Suite(#[from] SuiteError),
}

pub type Result<T> = std::result::Result<T, Error>;
