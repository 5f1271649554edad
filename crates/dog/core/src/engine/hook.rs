//! Post-action hooks that run after the frame's action routine returns.
//!
//! Hooks see which routine ran and the dog state it left behind, and can
//! conditionally call back into the host. The default set lets the player
//! pick the dog up from most routines whenever a forced behavior is
//! configured.

use std::sync::Arc;

use crate::action::DogAction;
use crate::host::DogHost;
use crate::state::DogState;

use super::FrameInputs;

/// Read-only view handed to [`PostActionHook::should_trigger`].
pub struct HookContext<'a> {
    /// Routine that ran this frame (not necessarily the one installed now).
    pub action: DogAction,
    pub state: &'a DogState,
    pub frame: &'a FrameInputs,
}

/// A hook that is applied after an action routine has run.
///
/// Hooks are executed in priority order (lower priority values execute first).
pub trait PostActionHook: Send + Sync {
    /// Returns a human-readable name for this hook (used in logging and debugging).
    fn name(&self) -> &'static str;

    /// Returns the priority of this hook. Lower values execute first.
    fn priority(&self) -> i32 {
        0
    }

    /// Determines whether this hook should be triggered for this frame.
    fn should_trigger(&self, ctx: &HookContext<'_>) -> bool;

    /// Applies the hook's effects.
    fn apply(&self, dog: &mut DogState, host: &mut dyn DogHost, frame: &FrameInputs);
}

/// Lets the player pick the dog up after `target` ran, when any forced
/// behavior is configured.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct PickupHook {
    name: &'static str,
    target: DogAction,
}

impl PickupHook {
    pub const fn new(name: &'static str, target: DogAction) -> Self {
        Self { name, target }
    }
}

impl PostActionHook for PickupHook {
    fn name(&self) -> &'static str {
        self.name
    }

    fn should_trigger(&self, ctx: &HookContext<'_>) -> bool {
        ctx.action == self.target && ctx.frame.option.is_enabled()
    }

    fn apply(&self, dog: &mut DogState, host: &mut dyn DogHost, frame: &FrameInputs) {
        host.try_pick_up(dog, frame);
    }
}

/// Pickup after the thrown routine; the dog has to land first.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub struct ThrownPickupHook;

impl PostActionHook for ThrownPickupHook {
    fn name(&self) -> &'static str {
        "allow_thrown_pickup"
    }

    fn priority(&self) -> i32 {
        10
    }

    fn should_trigger(&self, ctx: &HookContext<'_>) -> bool {
        ctx.action == DogAction::Thrown
            && ctx.state.body.is_on_ground()
            && ctx.frame.option.is_enabled()
    }

    fn apply(&self, dog: &mut DogState, host: &mut dyn DogHost, frame: &FrameInputs) {
        host.try_pick_up(dog, frame);
    }
}

/// Routines that accept a pickup attempt once they ran.
pub const PICKUP_TARGETS: [(&str, DogAction); 8] = [
    ("allow_idle_move_pickup", DogAction::IdleMove),
    ("allow_idle_bark_pickup", DogAction::IdleBark),
    ("allow_approach_pickup", DogAction::ApproachPlayer),
    ("allow_sit_pickup", DogAction::SitNextToPlayer),
    ("allow_back_away_pickup", DogAction::BackAwayFromGoron),
    ("allow_running_pickup", DogAction::RunAwayFromGoron),
    ("allow_attack_approach_pickup", DogAction::ApproachPlayerToAttack),
    ("allow_run_after_attacking_pickup", DogAction::RunAfterAttacking),
];

fn pickup_hook(name: &'static str, target: DogAction) -> Arc<dyn PostActionHook> {
    Arc::new(PickupHook::new(name, target))
}

/// Returns the default set of hooks that should be applied after every frame's routine.
/// Hooks are returned in an Arc for efficient sharing without cloning.
pub fn default_hooks() -> Arc<[Arc<dyn PostActionHook>]> {
    let mut hooks: Vec<Arc<dyn PostActionHook>> = PICKUP_TARGETS
        .iter()
        .map(|&(name, target)| pickup_hook(name, target))
        .collect();
    hooks.push(Arc::new(ThrownPickupHook));

    // Sort by priority (lower values first)
    hooks.sort_by_key(|h| h.priority());

    hooks.into()
}

#[cfg(test)]
mod tests {
    use strum::IntoEnumIterator;

    use super::*;
    use crate::env::DogBehaviorOption;
    use crate::state::BgCheckFlags;
    use crate::testing::{FakeHost, HostCall, frame_with, spawned_dog};

    fn triggered(
        hooks: &[Arc<dyn PostActionHook>],
        action: DogAction,
        dog: &DogState,
        frame: &FrameInputs,
    ) -> Vec<&'static str> {
        hooks
            .iter()
            .filter(|hook| {
                hook.should_trigger(&HookContext {
                    action,
                    state: dog,
                    frame,
                })
            })
            .map(|hook| hook.name())
            .collect()
    }

    #[test]
    fn default_set_covers_nine_routines() {
        let hooks = default_hooks();
        assert_eq!(hooks.len(), 9);
        assert_eq!(hooks.last().map(|h| h.name()), Some("allow_thrown_pickup"));
    }

    #[test]
    fn exactly_one_hook_per_target_when_enabled() {
        let hooks = default_hooks();
        let mut dog = spawned_dog();
        dog.body.bg_check = BgCheckFlags::GROUND;
        let frame = frame_with(DogBehaviorOption::Deku, 0.0);

        for action in DogAction::iter() {
            let fired = triggered(&hooks, action, &dog, &frame);
            let expected = PICKUP_TARGETS.iter().any(|&(_, target)| target == action)
                || action == DogAction::Thrown;
            assert_eq!(fired.len(), usize::from(expected), "{action}");
        }
    }

    #[test]
    fn no_hook_fires_without_configuration() {
        let hooks = default_hooks();
        let mut dog = spawned_dog();
        dog.body.bg_check = BgCheckFlags::GROUND;
        let frame = frame_with(DogBehaviorOption::None, 0.0);

        for action in DogAction::iter() {
            assert!(triggered(&hooks, action, &dog, &frame).is_empty());
        }
    }

    #[test]
    fn thrown_hook_waits_for_ground_contact() {
        let hook = ThrownPickupHook;
        let mut dog = spawned_dog();
        for option in DogBehaviorOption::iter() {
            let frame = frame_with(option, 0.0);
            let ctx = HookContext {
                action: DogAction::Thrown,
                state: &dog,
                frame: &frame,
            };
            assert!(!hook.should_trigger(&ctx));
        }

        dog.body.bg_check = BgCheckFlags::GROUND | BgCheckFlags::WALL;
        let frame = frame_with(DogBehaviorOption::Human, 0.0);
        let ctx = HookContext {
            action: DogAction::Thrown,
            state: &dog,
            frame: &frame,
        };
        assert!(hook.should_trigger(&ctx));
    }

    #[test]
    fn apply_delegates_to_try_pick_up() {
        let hook = PickupHook::new("allow_sit_pickup", DogAction::SitNextToPlayer);
        let mut dog = spawned_dog();
        let mut host = FakeHost::default();

        let frame = frame_with(DogBehaviorOption::Zora, 0.0);
        hook.apply(&mut dog, &mut host, &frame);

        assert_eq!(host.calls, vec![HostCall::TryPickUp]);
    }
}
