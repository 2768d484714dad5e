use serde::{Deserialize, Serialize};

#[derive(Serialize, Deserialize, Debug, Clone)]
pub struct SlotsSystemConfig {
    pub enabled: bool,
}
