//! Mod configuration as stored on disk.

use dog_core::{ConfigOracle, DogBehaviorOption, DogConfig};

/// Settings exposed by the mod's configuration menu.
///
/// ```toml
/// dog_behavior = "goron"
///
/// [tuning]
/// form_override_radius = 300.0
/// ```
#[derive(Clone, Copy, Debug, Default, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(feature = "serde", serde(default))]
pub struct ModConfig {
    pub dog_behavior: DogBehaviorOption,
    pub tuning: DogConfig,
}

impl ModConfig {
    pub fn with_behavior(dog_behavior: DogBehaviorOption) -> Self {
        Self {
            dog_behavior,
            ..Self::default()
        }
    }
}

impl ConfigOracle for ModConfig {
    fn dog_behavior(&self) -> DogBehaviorOption {
        self.dog_behavior
    }

    fn tuning(&self) -> DogConfig {
        self.tuning
    }
}
