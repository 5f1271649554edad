//! Config oracle implementation for runtime.

use std::sync::{PoisonError, RwLock};

use dog_content::ModConfig;
use dog_core::{ConfigOracle, DogBehaviorOption, DogConfig};
use tracing::info;

/// Runtime implementation of ConfigOracle that wraps a mutable ModConfig.
///
/// The host may change settings between frames; each dog update samples
/// the current values once.
#[derive(Debug, Default)]
pub struct LiveConfig {
    config: RwLock<ModConfig>,
}

impl LiveConfig {
    pub fn new(config: ModConfig) -> Self {
        Self {
            config: RwLock::new(config),
        }
    }

    /// Copy of the current settings.
    pub fn snapshot(&self) -> ModConfig {
        *self.config.read().unwrap_or_else(PoisonError::into_inner)
    }

    pub fn set_dog_behavior(&self, option: DogBehaviorOption) {
        let mut config = self.config.write().unwrap_or_else(PoisonError::into_inner);
        if config.dog_behavior != option {
            info!(
                target: "runtime::config",
                from = %config.dog_behavior,
                to = %option,
                "dog_behavior changed"
            );
            config.dog_behavior = option;
        }
    }

    /// Stores a raw setting value; unknown values read as unset.
    pub fn set_raw_dog_behavior(&self, raw: u32) {
        self.set_dog_behavior(DogBehaviorOption::from_raw(raw));
    }

    pub fn set_tuning(&self, tuning: DogConfig) {
        self.config
            .write()
            .unwrap_or_else(PoisonError::into_inner)
            .tuning = tuning;
    }

    /// Replaces every setting at once.
    pub fn replace(&self, config: ModConfig) {
        *self.config.write().unwrap_or_else(PoisonError::into_inner) = config;
    }
}

impl ConfigOracle for LiveConfig {
    fn dog_behavior(&self) -> DogBehaviorOption {
        self.snapshot().dog_behavior
    }

    fn tuning(&self) -> DogConfig {
        self.snapshot().tuning
    }

    fn settings(&self) -> (DogBehaviorOption, DogConfig) {
        let config = self.snapshot();
        (config.dog_behavior, config.tuning)
    }
}
