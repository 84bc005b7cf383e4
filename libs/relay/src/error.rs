use thiserror::Error;

#[derive(Error, Debug)]
pub enum Error {
    #[error("transport error: {0}")]
    Transport(#[from] std::io::Error),

    #[error("buffer growth failed: {0}")]
    Allocation(#[from] std::collections::TryReserveError),

    #[error("channel closed")]
    ChannelClosed,

    #[error("endpoint already closed")]
    EndpointClosed,

    #[error("record text contains a null byte: {0:?}")]
    InvalidRecord(String),

    #[error("{0}")]
    Custom(String),
}

pub type Result<T> = std::result::Result<T, Error>;
