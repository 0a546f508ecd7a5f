#[derive(Debug, thiserror::Error)]
pub enum Error {
    #[error("{0}")]
    Validate(#[from] validator::ValidationErrors),

    #[error("forbidden")]
    Forbidden,

    #[error("{0}")]
    Dispatch(anyhow::Error),
}

pub type Result<T> = std::result::Result<T, Error>;
