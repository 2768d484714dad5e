use serde::{Deserialize, Serialize};

#[derive(Serialize, Deserialize, Debug, Clone)]
pub struct DispatcherConfig {
    /// Jobs buffered between the HTTP workers and the announce worker.
    pub queue_capacity: usize,
    /// Attempts per job before it is given up.
    pub max_attempts: u32,
    /// Base delay between attempts, multiplied by the attempt number.
    pub retry_delay_ms: u64,
}
