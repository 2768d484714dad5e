use serde::{Deserialize, Serialize};

#[derive(Serialize, Deserialize, Debug, Clone)]
pub struct MinIntervalConfig {
    pub enabled: bool,
    pub interval: u64,
}
