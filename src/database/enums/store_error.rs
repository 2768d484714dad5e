use thiserror::Error;

#[derive(Error, Debug)]
pub enum StoreError {
    #[error("database error: {0}")]
    Database(#[from] sqlx::Error),

    #[error("corrupt record: {0}")]
    CorruptRecord(String),

    #[error("store unavailable: {0}")]
    Unavailable(String),
}
