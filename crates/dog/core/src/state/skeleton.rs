//! Animation catalog and the skeleton slot owned by each dog.
//!
//! The skeletal animation system itself is external: the core only records
//! which animation was requested and hands the slot to the host's animator.

use super::common::Vec3s;

/// Number of limbs in the dog skeleton.
pub const DOG_LIMB_MAX: usize = 13;

/// Animations available to the dog skeleton.
#[derive(
    Clone,
    Copy,
    Debug,
    Default,
    PartialEq,
    Eq,
    Hash,
    strum::Display,
    strum::AsRefStr,
    strum::EnumCount,
    strum::EnumIter,
    strum::FromRepr,
)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[strum(serialize_all = "snake_case")]
#[repr(u8)]
pub enum DogAnimation {
    WalkAfterTalking = 0,
    #[default]
    Walk = 1,
    Run = 2,
    Bark = 3,
    SitDownOnce = 4,
    SitDown = 5,
    LyingDownStart1 = 6,
    LyingDownLoop = 7,
    LyingDownStart2 = 8,
    LyingDownStart3 = 9,
    LyingDownStart4 = 10,
    WalkBackwards = 11,
    Jump = 12,
    LongJump = 13,
    JumpAttack = 14,
    Swim = 15,
}

/// Skeleton slot: active animation, playback frame, and pose tables.
#[derive(Clone, Debug, PartialEq, Default)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct SkelAnime {
    pub animation: DogAnimation,
    pub cur_frame: f32,
    pub joint_table: [Vec3s; DOG_LIMB_MAX],
    pub morph_table: [Vec3s; DOG_LIMB_MAX],
}

impl SkelAnime {
    pub fn new(animation: DogAnimation) -> Self {
        Self {
            animation,
            ..Self::default()
        }
    }
}
