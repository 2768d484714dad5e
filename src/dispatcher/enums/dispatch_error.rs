use thiserror::Error;

#[derive(Error, Debug, Clone, Copy, PartialEq, Eq)]
pub enum DispatchError {
    #[error("announce queue is full ({capacity} jobs)")]
    QueueFull { capacity: usize },

    #[error("announce queue is closed")]
    Closed,
}
