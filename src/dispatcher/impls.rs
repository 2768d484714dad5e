/// Non-blocking enqueue.
pub mod announce_dispatcher;

/// Job processing, retries and transfer crediting.
pub mod announce_worker;
