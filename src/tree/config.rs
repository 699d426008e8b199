//! Configuration types for tree walkers

use super::filter::ExcludeSet;

/// Configuration for tree walking behavior.
#[derive(Debug, Clone, Default)]
pub struct WalkerConfig {
    /// Entry names hidden at every level
    pub exclude: ExcludeSet,
}

impl WalkerConfig {
    pub fn with_exclude(exclude: ExcludeSet) -> Self {
        Self { exclude }
    }
}
