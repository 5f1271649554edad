//! Per-frame update pipeline.
//!
//! The [`DogEngine`] is the replacement update entry point for one dog. Each
//! call samples the oracles once into [`FrameInputs`], selects the behavior,
//! runs the installed action routine and the post-action hooks, then updates
//! collision, floor tilt and the skeleton. The call reports what happened in
//! a [`FrameOutcome`] so hosts can log or assert on it.

pub mod collision;
mod hook;
pub mod motion;
pub mod selector;

pub use hook::{HookContext, PickupHook, PostActionHook, ThrownPickupHook, default_hooks};
pub use selector::Decision;

use std::sync::Arc;

use arrayvec::ArrayVec;

use crate::action::{ActionTable, DogAction};
use crate::config::DogConfig;
use crate::env::{
    DogBehaviorOption, DogEnv, PlayerSnapshot, PlayerStateFlags, SceneId, SelectedDogInfo,
};
use crate::host::DogHost;
use crate::state::{DogAnimation, DogBehavior, DogState};

/// Upper bound on hooks reported as fired in a single frame.
pub const MAX_FIRED_HOOKS: usize = 16;

/// Oracle values sampled once at the start of a frame.
///
/// Everything downstream of the sampling point reads these values instead
/// of querying the oracles again, so one frame sees one configuration.
#[derive(Clone, Copy, Debug, PartialEq, Default)]
pub struct FrameInputs {
    pub option: DogBehaviorOption,
    pub tuning: DogConfig,
    pub player: PlayerSnapshot,
    pub scene: SceneId,
    pub selected_dog: SelectedDogInfo,
}

impl FrameInputs {
    pub fn sample(env: &DogEnv<'_>) -> Self {
        let world = env.world();
        let (option, tuning) = env.settings();
        Self {
            option,
            tuning,
            player: world.player(),
            scene: world.scene(),
            selected_dog: world.selected_dog(),
        }
    }

    /// Returns true during the clock tower cutscene that freezes dogs in place.
    pub fn is_cutscene_locked(&self) -> bool {
        self.player
            .state_flags
            .contains(PlayerStateFlags::LOCKED_ANIMATION)
            && self.scene == SceneId::ClockTower
    }
}

/// Summary of one update call.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct FrameOutcome {
    pub decision: Decision,
    /// Swim setup replaced whatever the selector installed.
    pub entered_swim: bool,
    /// Routine that ran this frame, `None` when frozen.
    pub action_ran: Option<DogAction>,
    /// Routine installed when the frame ended.
    pub action_after: DogAction,
    pub behavior_after: DogBehavior,
    pub hooks_fired: ArrayVec<&'static str, MAX_FIRED_HOOKS>,
    pub attack_collision: bool,
    pub obstacle_collision: bool,
}

impl FrameOutcome {
    fn frozen(dog: &DogState) -> Self {
        Self {
            decision: Decision::Frozen,
            entered_swim: false,
            action_ran: None,
            action_after: dog.action,
            behavior_after: dog.behavior,
            hooks_fired: ArrayVec::new(),
            attack_collision: dog.collider.attack_active,
            obstacle_collision: dog.collider.obstacle_active,
        }
    }

    pub fn is_frozen(&self) -> bool {
        self.decision == Decision::Frozen
    }
}

/// Update pipeline bound to one dog for the duration of a frame.
pub struct DogEngine<'a> {
    state: &'a mut DogState,
    actions: &'a ActionTable,
    hooks: &'a [Arc<dyn PostActionHook>],
}

impl<'a> DogEngine<'a> {
    pub fn new(
        state: &'a mut DogState,
        actions: &'a ActionTable,
        hooks: &'a [Arc<dyn PostActionHook>],
    ) -> Self {
        Self {
            state,
            actions,
            hooks,
        }
    }

    /// Runs one simulated frame for the dog.
    pub fn update(&mut self, env: &DogEnv<'_>, host: &mut dyn DogHost) -> FrameOutcome {
        let frame = FrameInputs::sample(env);
        let dog = &mut *self.state;

        dog.selected_dog_index = frame.selected_dog.index;
        if dog.frames == 0 && dog.behavior.is_spawn_tag() {
            dog.behavior = DogBehavior::Default;
        }
        dog.frames = dog.frames.wrapping_add(1);

        if frame.is_cutscene_locked() {
            return FrameOutcome::frozen(dog);
        }

        let decision = selector::select(dog, host, &frame);

        let entered_swim = dog.body.is_touching_water() && dog.body.has_no_parent();
        if entered_swim {
            host.change_animation(&mut dog.skel, DogAnimation::Swim);
            dog.action = DogAction::SetupSwim;
        }

        let ran = dog.action;
        self.actions.run(ran, dog, host, &frame);
        let hooks_fired = run_hooks(self.hooks, ran, dog, host, &frame);

        collision::update_collision(dog, host, &frame);

        let floor_rot = host.floor_rotation(dog);
        motion::ease_floor_tilt(&mut dog.cur_rot, floor_rot);
        host.update_skeleton(&mut dog.skel);

        FrameOutcome {
            decision,
            entered_swim,
            action_ran: Some(ran),
            action_after: dog.action,
            behavior_after: dog.behavior,
            hooks_fired,
            attack_collision: dog.collider.attack_active,
            obstacle_collision: dog.collider.obstacle_active,
        }
    }
}

/// Evaluates the post-action hooks against the routine that just ran.
fn run_hooks(
    hooks: &[Arc<dyn PostActionHook>],
    ran: DogAction,
    dog: &mut DogState,
    host: &mut dyn DogHost,
    frame: &FrameInputs,
) -> ArrayVec<&'static str, MAX_FIRED_HOOKS> {
    let mut fired = ArrayVec::new();
    for hook in hooks {
        let ctx = HookContext {
            action: ran,
            state: dog,
            frame,
        };
        if hook.should_trigger(&ctx) {
            hook.apply(dog, host, frame);
            // Overflow only loses the report entry, the hook already ran.
            let _ = fired.try_push(hook.name());
        }
    }
    fired
}

#[cfg(test)]
mod tests;
