//! Deterministic per-frame behavior logic for the dog actor.
//!
//! `dog-core` decides which behavior governs a dog each frame, dispatches the
//! installed action routine, runs the post-action pickup hooks, and keeps the
//! collision volumes and floor tilt in sync. All state mutation flows through
//! [`engine::DogEngine`]; the host supplies the oracles in [`env`] and the
//! collaborators in [`host`].
pub mod action;
pub mod config;
pub mod engine;
pub mod env;
pub mod error;
pub mod host;
pub mod state;

#[cfg(any(test, feature = "testing"))]
pub mod testing;

pub use action::{ActionHandler, ActionTable, ActionTableBuilder, ActionTableError, DogAction};
pub use config::DogConfig;
pub use engine::{
    Decision, DogEngine, FrameInputs, FrameOutcome, HookContext, PickupHook, PostActionHook,
    ThrownPickupHook, default_hooks,
};
pub use env::{
    ConfigOracle, DogBehaviorOption, DogEnv, Env, PlayerForm, PlayerSnapshot, PlayerStateFlags,
    SceneId, SelectedDogInfo, WorldOracle,
};
pub use error::{DogError, ErrorSeverity};
pub use host::{Animator, DogHost, DogRoutines, GroundProbe, Physics, ProbeFlags};
pub use state::{
    ActorBody, ActorId, BgCheckFlags, ColliderCylinder, DogAnimation, DogBehavior, DogFlags,
    DogParams, DogState, DogTimers, GrabState, PathCursor, SkelAnime, Vec3f, Vec3s,
};
