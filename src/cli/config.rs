//! Shared configuration types for CLI commands

use serde::{Deserialize, Serialize};

/// Common configuration gathered from the global flags
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct CommonConfig {
    /// Random seed for reproducibility
    pub seed: Option<u64>,

    /// Whether to show progress bars
    pub progress: bool,

    /// Verbose output
    pub verbose: bool,
}

impl CommonConfig {
    /// Seed shifted by `offset`, so each consumer gets its own stream
    pub fn derived_seed(&self, offset: u64) -> Option<u64> {
        self.seed.map(|seed| seed.wrapping_add(offset))
    }
}

impl Default for CommonConfig {
    fn default() -> Self {
        Self {
            seed: None,
            progress: true,
            verbose: false,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn derived_seed_follows_base() {
        let config = CommonConfig {
            seed: Some(u64::MAX),
            ..CommonConfig::default()
        };
        assert_eq!(config.derived_seed(1), Some(0));
        assert_eq!(CommonConfig::default().derived_seed(1), None);
    }
}
