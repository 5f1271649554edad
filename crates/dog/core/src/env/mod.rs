//! Traits describing read-only world data.
//!
//! Oracles expose the configuration setting and the world around the dog.
//! The [`Env`] aggregate bundles them so the engine can access everything it
//! needs without hard coupling to concrete implementations.
mod config;
mod world;

pub use config::{ConfigOracle, DogBehaviorOption};
pub use world::{
    PlayerForm, PlayerSnapshot, PlayerStateFlags, SceneId, SelectedDogInfo, WorldOracle,
};

use crate::config::DogConfig;

/// Aggregates read-only oracles required by the engine.
///
/// The world oracle is mandatory. The configuration oracle is optional: an
/// unset configuration reads as [`DogBehaviorOption::None`] with default
/// tunables.
pub struct Env<'a, W, C>
where
    W: WorldOracle + ?Sized,
    C: ConfigOracle + ?Sized,
{
    world: &'a W,
    config: Option<&'a C>,
}

impl<W, C> Clone for Env<'_, W, C>
where
    W: WorldOracle + ?Sized,
    C: ConfigOracle + ?Sized,
{
    fn clone(&self) -> Self {
        *self
    }
}

impl<W, C> Copy for Env<'_, W, C>
where
    W: WorldOracle + ?Sized,
    C: ConfigOracle + ?Sized,
{
}

pub type DogEnv<'a> = Env<'a, dyn WorldOracle + 'a, dyn ConfigOracle + 'a>;

impl<'a, W, C> Env<'a, W, C>
where
    W: WorldOracle + ?Sized,
    C: ConfigOracle + ?Sized,
{
    pub fn new(world: &'a W, config: Option<&'a C>) -> Self {
        Self { world, config }
    }

    pub fn with_config(world: &'a W, config: &'a C) -> Self {
        Self::new(world, Some(config))
    }

    pub fn world(&self) -> &'a W {
        self.world
    }

    /// Reads the `dog_behavior` setting and the tunables in one pass.
    ///
    /// Without a configuration the setting reads as `None` with default
    /// tunables.
    pub fn settings(&self) -> (DogBehaviorOption, DogConfig) {
        match self.config {
            Some(config) => config.settings(),
            None => (DogBehaviorOption::None, DogConfig::default()),
        }
    }
}
