//! Runtime implementations of the `dog-core` oracle traits.
//!
//! The world oracle is supplied by the host each frame; the runtime only
//! owns the configuration, which the host can change between frames.
mod config;

pub use config::LiveConfig;
