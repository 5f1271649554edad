//! Bit sets carried by the dog and its physics body.

bitflags::bitflags! {
    /// Per-dog state flags.
    #[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash)]
    #[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
    pub struct DogFlags: u16 {
        const HELD = 1 << 0;
        const JUMP_ATTACKING = 1 << 1;
        const SWIMMING = 1 << 2;
        const BOUNCED = 1 << 3;
        const THROWN = 1 << 4;
        /// Part of the bremen mask march; opaque to the behavior core.
        const FOLLOWING_BREMEN_MASK = 1 << 5;
    }
}

bitflags::bitflags! {
    /// Ground, wall and water contact reported by the physics collaborator.
    #[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash)]
    #[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
    pub struct BgCheckFlags: u16 {
        const GROUND = 1 << 0;
        const GROUND_TOUCH = 1 << 1;
        const GROUND_LEAVE = 1 << 2;
        const WALL = 1 << 3;
        const CEILING = 1 << 4;
        /// Submerged below the water surface.
        const WATER = 1 << 5;
        /// Crossed the water surface this frame.
        const WATER_TOUCH = 1 << 6;
    }
}
