use super::common::Vec3f;

/// Cylinder collision volume attached to the dog.
///
/// `attack_active` and `obstacle_active` mirror the last registration the
/// collision updater requested from the physics collaborator.
#[derive(Clone, Copy, Debug, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct ColliderCylinder {
    pub pos: Vec3f,
    pub radius: f32,
    pub height: f32,
    pub attack_active: bool,
    pub obstacle_active: bool,
}

impl ColliderCylinder {
    pub const DEFAULT_RADIUS: f32 = 13.0;
    pub const DEFAULT_HEIGHT: f32 = 19.0;

    pub fn new(radius: f32, height: f32) -> Self {
        Self {
            pos: Vec3f::ZERO,
            radius,
            height,
            attack_active: false,
            obstacle_active: false,
        }
    }
}

impl Default for ColliderCylinder {
    fn default() -> Self {
        Self::new(Self::DEFAULT_RADIUS, Self::DEFAULT_HEIGHT)
    }
}
