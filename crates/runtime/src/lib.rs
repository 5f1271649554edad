//! Runtime orchestration for the dog behavior core.
//!
//! This crate wires the live configuration, the post-action hook registry and
//! the spawned dog instances into a frame loop. Hosts embed [`DogRuntime`],
//! supply their world oracle and collaborators each frame, and change the
//! `dog_behavior` setting through [`LiveConfig`].
//!
//! Modules are organized by responsibility:
//! - [`runtime`] hosts the orchestrator and builder
//! - [`hooks`] provides the post-action hook registry
//! - [`oracle`] provides the runtime configuration oracle
//! - [`logging`] installs the tracing subscriber
pub mod error;
pub mod hooks;
pub mod logging;
pub mod oracle;
pub mod runtime;

pub use error::{Result, RuntimeError};
pub use hooks::{HookContext, HookRegistry, PickupHook, PostActionHook, ThrownPickupHook};
pub use logging::LoggingConfig;
pub use oracle::LiveConfig;
pub use runtime::{DogRuntime, DogRuntimeBuilder, RuntimeConfig};
