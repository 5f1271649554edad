//! Mutating collaborators supplied by the host engine.
//!
//! Unlike the read-only oracles in [`crate::env`], these traits drive
//! subsystems that live outside the behavior core: skeletal animation,
//! collision registration, and the stock dog routines. The engine receives
//! them bundled as a single [`DogHost`].

use crate::engine::FrameInputs;
use crate::state::{ActorBody, ColliderCylinder, DogAnimation, DogState, SkelAnime, Vec3f};

bitflags::bitflags! {
    /// Behaviors requested from the ground contact probe.
    #[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash)]
    pub struct ProbeFlags: u32 {
        /// Write the probe result back into the actor position.
        const APPLY_RESULT = 1 << 0;
        const CHECK_CEILING = 1 << 1;
        /// Start the probe from the position at the beginning of the frame.
        const USE_INITIAL_OFFSET = 1 << 2;
    }
}

/// Parameters of a ground/wall contact refresh.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct GroundProbe {
    pub wall_radius: f32,
    pub wall_height: f32,
    pub ceiling_height: f32,
    pub flags: ProbeFlags,
}

/// Skeletal animation system.
pub trait Animator {
    /// Switches the skeleton to `animation`, resetting playback.
    fn change_animation(&mut self, skel: &mut SkelAnime, animation: DogAnimation);

    /// Advances the pose by one frame.
    fn update_skeleton(&mut self, skel: &mut SkelAnime);
}

/// Collision and physics engine.
pub trait Physics {
    /// Refreshes the world placement of the cylinder from its dimension position.
    fn update_cylinder(&mut self, collider: &mut ColliderCylinder);

    /// Registers the cylinder as an attacking volume for this frame.
    fn register_attack(&mut self, collider: &ColliderCylinder);

    /// Clears the attacking state of the cylinder.
    fn reset_attack(&mut self, collider: &ColliderCylinder);

    /// Registers the cylinder for physical pushback against other actors.
    fn register_obstacle(&mut self, collider: &ColliderCylinder);

    fn reset_obstacle(&mut self, collider: &ColliderCylinder);

    /// Refreshes ground, wall and water contact flags of the body.
    fn update_ground_contact(&mut self, body: &mut ActorBody, probe: &GroundProbe);
}

/// Stock dog routines the core calls but never modifies.
pub trait DogRoutines {
    /// Installs the idle-move routine and its animation.
    fn setup_idle_move(&mut self, dog: &mut DogState, frame: &FrameInputs);

    /// Returns true when the player's current form warrants a reaction.
    fn should_react_to_form(&self, dog: &DogState, frame: &FrameInputs) -> bool;

    /// Picks the stock reaction to the player's form.
    fn choose_action_for_form(&mut self, dog: &mut DogState, frame: &FrameInputs);

    /// Attempts to move the dog into the held state; mutates the grab state itself.
    fn try_pick_up(&mut self, dog: &mut DogState, frame: &FrameInputs);

    /// Rotation matching the floor under the dog.
    fn floor_rotation(&self, dog: &DogState) -> Vec3f;
}

/// Everything the engine needs from the host beyond the oracles.
pub trait DogHost: Animator + Physics + DogRoutines {}

impl<T> DogHost for T where T: Animator + Physics + DogRoutines + ?Sized {}
