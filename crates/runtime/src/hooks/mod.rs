//! Post-action hook wiring for the runtime.
//!
//! The hook trait and the stock pickup hooks live in `dog-core`; the runtime
//! owns the registry that hands them to every dog's engine and logs which
//! ones fired.
//!
//! # Execution Order
//!
//! Hooks are sorted by priority (lower values execute first). The stock
//! pickup hooks use priority 0, the thrown-pickup hook 10.

mod registry;

pub use dog_core::{HookContext, PickupHook, PostActionHook, ThrownPickupHook};
pub use registry::HookRegistry;
