//! Authoritative dog state representation.
//!
//! This module owns the data structures that describe a dog instance: its
//! behavior tag, flags, timers, skeleton slot, collider and physics body.
//! Hosts create instances with [`DogState::spawn`] and mutate them through
//! the engine and the external action routines.
mod actor;
mod behavior;
mod collider;
mod common;
mod flags;
mod params;
mod skeleton;

pub use actor::{ActorBody, DogState, DogTimers};
pub use behavior::{DogBehavior, GrabState};
pub use collider::ColliderCylinder;
pub use common::{ActorId, Vec3f, Vec3s};
pub use flags::{BgCheckFlags, DogFlags};
pub use params::{DogParams, PathCursor};
pub use skeleton::{DOG_LIMB_MAX, DogAnimation, SkelAnime};
