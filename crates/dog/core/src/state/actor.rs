//! The dog actor instance.

use crate::action::DogAction;
use crate::env::DogBehaviorOption;

use super::{
    ActorId, BgCheckFlags, ColliderCylinder, DogAnimation, DogBehavior, DogFlags, DogParams,
    GrabState, PathCursor, SkelAnime, Vec3f,
};

/// Physics-facing part of the actor shared with the host engine.
#[derive(Clone, Copy, Debug, PartialEq, Default)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct ActorBody {
    pub world_pos: Vec3f,
    pub speed: f32,
    /// Horizontal distance to the player, refreshed by the host each frame.
    pub xz_dist_to_player: f32,
    pub bg_check: BgCheckFlags,
    /// Actor this dog is attached to (set while carried).
    pub parent: Option<ActorId>,
}

impl ActorBody {
    #[inline]
    pub fn has_no_parent(&self) -> bool {
        self.parent.is_none()
    }

    #[inline]
    pub fn is_in_water(&self) -> bool {
        self.bg_check.contains(BgCheckFlags::WATER)
    }

    #[inline]
    pub fn is_touching_water(&self) -> bool {
        self.bg_check.contains(BgCheckFlags::WATER_TOUCH)
    }

    #[inline]
    pub fn is_on_ground(&self) -> bool {
        self.bg_check.contains(BgCheckFlags::GROUND)
    }
}

/// Frame counters decremented by the action routines.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Default)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct DogTimers {
    pub timer: i16,
    pub attack_timer: i16,
    pub swim_timer: i16,
    pub sit_after_throw_timer: i16,
    pub bremen_bark_timer: i16,
}

/// Complete state of one dog.
///
/// Exactly one action routine is installed at a time (`action`). The core
/// writes `behavior`, `action`, `flags` and the collider activation; every
/// other field belongs to the external routines and the host.
#[derive(Clone, Debug, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct DogState {
    pub id: ActorId,
    pub params: DogParams,
    pub body: ActorBody,
    pub action: DogAction,
    pub behavior: DogBehavior,
    pub skel: SkelAnime,
    pub collider: ColliderCylinder,
    pub path: Option<PathCursor>,
    pub flags: DogFlags,
    pub timers: DogTimers,
    pub index: i16,
    pub selected_dog_index: i16,
    pub grab_state: GrabState,
    pub cur_rot: Vec3f,
    /// Configuration value seen by the last override pass. Nothing reads it.
    pub last_option: DogBehaviorOption,
    /// Number of updates processed, including frozen ones.
    pub frames: u32,
}

impl DogState {
    /// Creates a freshly spawned dog idling on the spot.
    pub fn spawn(id: ActorId, params: DogParams, world_pos: Vec3f) -> Self {
        let path = params
            .has_path()
            .then(|| PathCursor::new(params.path_index()));

        Self {
            id,
            params,
            body: ActorBody {
                world_pos,
                ..ActorBody::default()
            },
            action: DogAction::IdleMove,
            behavior: DogBehavior::Initial,
            skel: SkelAnime::new(DogAnimation::Walk),
            collider: ColliderCylinder::default(),
            path,
            flags: DogFlags::empty(),
            timers: DogTimers::default(),
            index: params.index() as i16,
            selected_dog_index: 0,
            grab_state: GrabState::None,
            cur_rot: Vec3f::ZERO,
            last_option: DogBehaviorOption::None,
            frames: 0,
        }
    }

    #[inline]
    pub fn is_jump_attacking(&self) -> bool {
        self.flags.contains(DogFlags::JUMP_ATTACKING)
    }
}
