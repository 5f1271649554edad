//! Data-driven content definitions and loaders.
//!
//! This crate provides loaders for the mod's data files:
//! - Mod configuration: the `dog_behavior` option plus tunables (TOML)
//! - Dog spawn lists: packed parameters and positions (RON)
//!
//! Content is consumed by the runtime and never appears in dog state.

pub mod config;
pub mod spawn;

#[cfg(feature = "loaders")]
pub mod loaders;

pub use config::ModConfig;
pub use spawn::DogSpawnSpec;

#[cfg(feature = "loaders")]
pub use loaders::{ConfigLoader, LoadResult, SpawnLoader};
