use thiserror::Error;

#[derive(Error, Debug)]
pub enum TestError {
    #[error(transparent)]
    RosterError(#[from] roster::error::Error),
}
