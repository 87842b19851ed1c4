use tufia_shared::{EnergyConfig, DEFAULT_FLOOR_SEED_PREFIX};

/// Contains config properties which will be used by a sync session
#[derive(Clone, Debug)]
pub struct SyncConfig {
    /// How energy regenerates between transactions
    pub energy: EnergyConfig,
    /// Prefix of the seed string each floor account is derived from
    pub floor_seed_prefix: String,
}

impl Default for SyncConfig {
    fn default() -> Self {
        Self {
            energy: EnergyConfig::default(),
            floor_seed_prefix: DEFAULT_FLOOR_SEED_PREFIX.to_string(),
        }
    }
}
