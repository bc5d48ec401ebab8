use thiserror::Error;

//------------------------------------------

#[derive(Error, Clone, Debug, PartialEq, Eq)]
pub enum SectorMetaError {
    #[error("invalid configuration: {0}")]
    InvalidConfiguration(String),

    #[error("Unrecognized unit: {0}")]
    UnrecognizedUnit(String),

    #[error("{0}")]
    MissingInput(String),
}

pub type Result<T> = std::result::Result<T, SectorMetaError>;

//------------------------------------------
