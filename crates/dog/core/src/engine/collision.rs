//! Collision volume placement and attack/obstacle activation.

use crate::action::DogAction;
use crate::config::DogConfig;
use crate::env::{DogBehaviorOption, PlayerForm};
use crate::host::{DogHost, GroundProbe, ProbeFlags};
use crate::state::DogState;

use super::FrameInputs;

/// Probe used to refresh ground and wall contact every frame.
pub const GROUND_PROBE: GroundProbe = GroundProbe {
    wall_radius: DogConfig::GROUND_PROBE_RADIUS,
    wall_height: DogConfig::GROUND_PROBE_HEIGHT,
    ceiling_height: DogConfig::CEILING_PROBE_HEIGHT,
    flags: ProbeFlags::APPLY_RESULT.union(ProbeFlags::USE_INITIAL_OFFSET),
};

/// Returns true when the jump-attack hitbox should be live.
///
/// With a forced behavior only the goron option arms it. Without one, it
/// follows the player's actual form and arms only against deku players.
pub fn attack_collision_active(
    option: DogBehaviorOption,
    form: PlayerForm,
    action: DogAction,
) -> bool {
    if option.is_enabled() {
        option == DogBehaviorOption::Goron && action.is_jump_attack()
    } else {
        form == PlayerForm::Deku && action.is_jump_attack()
    }
}

/// Returns true when the body should push back other actors.
///
/// A held dog is positioned by its holder, and a jump-attacking dog passes
/// through the player it hits.
pub fn obstacle_collision_active(dog: &DogState) -> bool {
    !dog.grab_state.is_held() && !dog.is_jump_attacking()
}

/// Collision update entry point.
pub fn update_collision(dog: &mut DogState, host: &mut dyn DogHost, frame: &FrameInputs) {
    dog.collider.pos = dog.body.world_pos;
    host.update_cylinder(&mut dog.collider);

    dog.collider.attack_active =
        attack_collision_active(frame.option, frame.player.form, dog.action);
    if dog.collider.attack_active {
        host.register_attack(&dog.collider);
    } else {
        host.reset_attack(&dog.collider);
    }

    dog.collider.obstacle_active = obstacle_collision_active(dog);
    if dog.collider.obstacle_active {
        host.register_obstacle(&dog.collider);
    } else {
        host.reset_obstacle(&dog.collider);
    }

    host.update_ground_contact(&mut dog.body, &GROUND_PROBE);
}
