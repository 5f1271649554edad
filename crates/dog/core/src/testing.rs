//! Recording fakes for the host collaborators and oracles.
//!
//! Available to this crate's tests and, through the `testing` feature, to
//! downstream crates' tests.

use std::sync::Arc;

use crate::action::{ActionHandler, ActionTable, DogAction};
use crate::config::DogConfig;
use crate::engine::FrameInputs;
use crate::env::{
    ConfigOracle, DogBehaviorOption, PlayerForm, PlayerSnapshot, PlayerStateFlags, SceneId,
    SelectedDogInfo, WorldOracle,
};
use crate::host::{Animator, DogRoutines, GroundProbe, Physics};
use crate::state::{
    ActorBody, ActorId, BgCheckFlags, ColliderCylinder, DogAnimation, DogParams, DogState,
    GrabState, SkelAnime, Vec3f,
};

/// Collaborator call recorded by [`FakeHost`].
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum HostCall {
    ChangeAnimation(DogAnimation),
    UpdateSkeleton,
    UpdateCylinder,
    RegisterAttack,
    ResetAttack,
    RegisterObstacle,
    ResetObstacle,
    UpdateGroundContact,
    SetupIdleMove,
    ChooseActionForForm,
    TryPickUp,
}

/// Host that records every call and applies the minimal stock effects.
#[derive(Clone, Debug, Default)]
pub struct FakeHost {
    pub calls: Vec<HostCall>,
    /// Answer of `should_react_to_form`.
    pub react_to_form: bool,
    /// Routine installed by `choose_action_for_form`.
    pub form_reaction: DogAction,
    /// Floor rotation reported to the engine.
    pub floor: Vec3f,
    /// Contact flags written by `update_ground_contact`, when set.
    pub ground_result: Option<BgCheckFlags>,
    /// Whether `try_pick_up` succeeds.
    pub pickup_succeeds: bool,
    pub last_probe: Option<GroundProbe>,
}

impl FakeHost {
    pub fn count(&self, call: HostCall) -> usize {
        self.calls.iter().filter(|&&c| c == call).count()
    }
}

impl Animator for FakeHost {
    fn change_animation(&mut self, skel: &mut SkelAnime, animation: DogAnimation) {
        self.calls.push(HostCall::ChangeAnimation(animation));
        skel.animation = animation;
        skel.cur_frame = 0.0;
    }

    fn update_skeleton(&mut self, skel: &mut SkelAnime) {
        self.calls.push(HostCall::UpdateSkeleton);
        skel.cur_frame += 1.0;
    }
}

impl Physics for FakeHost {
    fn update_cylinder(&mut self, _collider: &mut ColliderCylinder) {
        self.calls.push(HostCall::UpdateCylinder);
    }

    fn register_attack(&mut self, _collider: &ColliderCylinder) {
        self.calls.push(HostCall::RegisterAttack);
    }

    fn reset_attack(&mut self, _collider: &ColliderCylinder) {
        self.calls.push(HostCall::ResetAttack);
    }

    fn register_obstacle(&mut self, _collider: &ColliderCylinder) {
        self.calls.push(HostCall::RegisterObstacle);
    }

    fn reset_obstacle(&mut self, _collider: &ColliderCylinder) {
        self.calls.push(HostCall::ResetObstacle);
    }

    fn update_ground_contact(&mut self, body: &mut ActorBody, probe: &GroundProbe) {
        self.calls.push(HostCall::UpdateGroundContact);
        self.last_probe = Some(*probe);
        if let Some(flags) = self.ground_result {
            body.bg_check = flags;
        }
    }
}

impl DogRoutines for FakeHost {
    fn setup_idle_move(&mut self, dog: &mut DogState, _frame: &FrameInputs) {
        self.calls.push(HostCall::SetupIdleMove);
        dog.action = DogAction::IdleMove;
        dog.skel.animation = DogAnimation::Walk;
    }

    fn should_react_to_form(&self, _dog: &DogState, _frame: &FrameInputs) -> bool {
        self.react_to_form
    }

    fn choose_action_for_form(&mut self, dog: &mut DogState, _frame: &FrameInputs) {
        self.calls.push(HostCall::ChooseActionForForm);
        dog.action = self.form_reaction;
    }

    fn try_pick_up(&mut self, dog: &mut DogState, _frame: &FrameInputs) {
        self.calls.push(HostCall::TryPickUp);
        if self.pickup_succeeds {
            dog.grab_state = GrabState::Held;
            dog.action = DogAction::Held;
        }
    }

    fn floor_rotation(&self, _dog: &DogState) -> Vec3f {
        self.floor
    }
}

/// Fixed world snapshot.
#[derive(Clone, Copy, Debug, Default)]
pub struct FakeWorld {
    pub player: PlayerSnapshot,
    pub scene: SceneId,
    pub selected: SelectedDogInfo,
}

impl FakeWorld {
    pub fn with_speed(speed: f32) -> Self {
        Self {
            player: PlayerSnapshot {
                speed,
                ..PlayerSnapshot::default()
            },
            ..Self::default()
        }
    }

    pub fn form(mut self, form: PlayerForm) -> Self {
        self.player.form = form;
        self
    }

    /// World in the clock tower cutscene that freezes dogs.
    pub fn locked_in_clock_tower() -> Self {
        Self {
            player: PlayerSnapshot {
                state_flags: PlayerStateFlags::LOCKED_ANIMATION,
                ..PlayerSnapshot::default()
            },
            scene: SceneId::ClockTower,
            ..Self::default()
        }
    }
}

impl WorldOracle for FakeWorld {
    fn player(&self) -> PlayerSnapshot {
        self.player
    }

    fn scene(&self) -> SceneId {
        self.scene
    }

    fn selected_dog(&self) -> SelectedDogInfo {
        self.selected
    }
}

/// Fixed configuration.
#[derive(Clone, Copy, Debug, Default)]
pub struct FakeConfig(pub DogBehaviorOption);

impl ConfigOracle for FakeConfig {
    fn dog_behavior(&self) -> DogBehaviorOption {
        self.0
    }
}

/// Unconfigured frame inputs with a stationary human player.
pub fn frame() -> FrameInputs {
    FrameInputs::default()
}

/// Frame inputs with the given option and player speed.
pub fn frame_with(option: DogBehaviorOption, speed: f32) -> FrameInputs {
    FrameInputs {
        option,
        tuning: DogConfig::default(),
        player: PlayerSnapshot {
            speed,
            ..PlayerSnapshot::default()
        },
        ..FrameInputs::default()
    }
}

/// Dog right next to the player, freshly spawned.
pub fn spawned_dog() -> DogState {
    DogState::spawn(
        ActorId(1),
        DogParams::new(DogParams::PATH_INDEX_NONE, 1),
        Vec3f::ZERO,
    )
}

/// Table where every routine leaves the dog untouched.
pub fn idle_table() -> ActionTable {
    fn stay(_dog: &mut DogState, _host: &mut dyn crate::host::DogHost, _frame: &FrameInputs) {}
    ActionTable::from_fn(|_| Arc::new(stay) as Arc<dyn ActionHandler>)
}
