//! Behavior selection: which of the three decision paths governs the dog.
//!
//! Paths are tried in strict priority order:
//! 1. configuration override, when the forced form's proximity predicate holds
//! 2. the stock reaction to the player's transformed form
//! 3. falling back to the default idle behavior
//!
//! Every tag and routine write is guarded by an equality check, so running
//! the selector twice with unchanged inputs changes nothing the second time.

use crate::action::DogAction;
use crate::config::DogConfig;
use crate::env::DogBehaviorOption;
use crate::host::DogHost;
use crate::state::{DogAnimation, DogBehavior, DogFlags, DogState};

use super::FrameInputs;

/// Decision path taken by the selector in one frame.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, strum::Display, strum::AsRefStr)]
#[strum(serialize_all = "snake_case")]
pub enum Decision {
    /// Cutscene suppression; nothing ran.
    Frozen,
    /// Configuration override branch.
    Override(DogBehaviorOption),
    /// Stock reaction to the player's form.
    FormReaction,
    /// Tag was reset to default and idle setup ran.
    ReturnToDefault,
    /// Already default; nothing to do.
    Unchanged,
}

/// Returns true when the configured forced form applies at horizontal
/// distance `dist` from the player.
///
/// Human always applies, deku within the deku radius, goron and zora within
/// the form radius. `None` never applies.
pub fn should_override(option: DogBehaviorOption, dist: f32, tuning: &DogConfig) -> bool {
    match option {
        DogBehaviorOption::Human => true,
        DogBehaviorOption::Deku => dist < tuning.deku_override_radius,
        DogBehaviorOption::Goron | DogBehaviorOption::Zora => dist < tuning.form_override_radius,
        DogBehaviorOption::None => false,
    }
}

/// Runs the priority-ordered selection for one frame.
pub fn select(dog: &mut DogState, host: &mut dyn DogHost, frame: &FrameInputs) -> Decision {
    if should_override(frame.option, dog.body.xz_dist_to_player, &frame.tuning) {
        choose_action_for_option(dog, host, frame);
        Decision::Override(frame.option)
    } else if host.should_react_to_form(dog, frame) {
        host.choose_action_for_form(dog, frame);
        Decision::FormReaction
    } else if dog.behavior != DogBehavior::Default {
        dog.behavior = DogBehavior::Default;
        host.setup_idle_move(dog, frame);
        Decision::ReturnToDefault
    } else {
        Decision::Unchanged
    }
}

/// Forced-form routine and animation for the moving half of an override.
struct FormPlan {
    active: DogBehavior,
    wait: DogBehavior,
    animation: DogAnimation,
    action: DogAction,
    timer: Option<i16>,
}

impl FormPlan {
    fn for_option(option: DogBehaviorOption, tuning: &DogConfig) -> Option<Self> {
        let plan = match option {
            DogBehaviorOption::Zora => Self {
                active: DogBehavior::Zora,
                wait: DogBehavior::ZoraWait,
                animation: DogAnimation::Run,
                action: DogAction::ApproachPlayer,
                timer: None,
            },
            DogBehaviorOption::Goron => Self {
                active: DogBehavior::Goron,
                wait: DogBehavior::GoronWait,
                animation: DogAnimation::WalkBackwards,
                action: DogAction::BackAwayFromGoron,
                timer: Some(tuning.back_away_frames),
            },
            DogBehaviorOption::Deku => Self {
                active: DogBehavior::Deku,
                wait: DogBehavior::DekuWait,
                animation: DogAnimation::Run,
                action: DogAction::ApproachPlayerToAttack,
                timer: None,
            },
            DogBehaviorOption::Human | DogBehaviorOption::None => return None,
        };
        Some(plan)
    }
}

/// Override branch: installs the behavior the configuration forces.
///
/// Skipped entirely while the dog is in water. The configuration value is
/// recorded into `last_option` either way.
pub fn choose_action_for_option(dog: &mut DogState, host: &mut dyn DogHost, frame: &FrameInputs) {
    if !dog.body.is_in_water() {
        if frame.option == DogBehaviorOption::Human {
            apply_human(dog, host, frame);
        } else if let Some(plan) = FormPlan::for_option(frame.option, &frame.tuning) {
            apply_form_plan(dog, host, frame, &plan);
        }
    }
    dog.last_option = frame.option;
}

fn apply_human(dog: &mut DogState, host: &mut dyn DogHost, frame: &FrameInputs) {
    if dog.behavior != DogBehavior::Human {
        dog.behavior = DogBehavior::Human;
        dog.flags.remove(DogFlags::JUMP_ATTACKING);
        host.setup_idle_move(dog, frame);
    }
}

fn apply_form_plan(
    dog: &mut DogState,
    host: &mut dyn DogHost,
    frame: &FrameInputs,
    plan: &FormPlan,
) {
    dog.flags.remove(DogFlags::JUMP_ATTACKING);

    if dog.behavior != plan.active && frame.player.speed > frame.tuning.player_run_speed {
        dog.behavior = plan.active;
        host.change_animation(&mut dog.skel, plan.animation);
        if let Some(timer) = plan.timer {
            dog.timers.timer = timer;
        }
        dog.action = plan.action;
    }

    // Rechecked after the write above, so at most one of the two fires.
    if dog.behavior != plan.wait && dog.behavior != plan.active {
        dog.behavior = plan.wait;
        host.setup_idle_move(dog, frame);
    }
}
