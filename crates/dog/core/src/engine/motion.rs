//! Floor tilt easing.

use crate::config::DogConfig;
use crate::state::Vec3f;

/// Moves `value` toward `target` by `scale` of the remaining distance,
/// clamped to at most `max_step` per call. Returns the new value.
pub fn approach_f(value: &mut f32, target: f32, scale: f32, max_step: f32) -> f32 {
    if *value != target {
        let step = (scale * (target - *value)).clamp(-max_step, max_step);
        *value += step;
    }
    *value
}

/// Eases the x and z tilt independently toward the floor rotation.
///
/// The y axis (heading) is owned by the action routines and left untouched.
pub fn ease_floor_tilt(cur_rot: &mut Vec3f, floor_rot: Vec3f) {
    approach_f(
        &mut cur_rot.x,
        floor_rot.x,
        DogConfig::TILT_APPROACH_SCALE,
        DogConfig::TILT_APPROACH_STEP,
    );
    approach_f(
        &mut cur_rot.z,
        floor_rot.z,
        DogConfig::TILT_APPROACH_SCALE,
        DogConfig::TILT_APPROACH_STEP,
    );
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn small_gaps_close_proportionally() {
        let mut value = 0.0;
        approach_f(&mut value, 0.25, 0.2, 0.1);
        assert!((value - 0.05).abs() < 1e-6);
    }

    #[test]
    fn large_gaps_are_step_bounded() {
        let mut value = 0.0;
        approach_f(&mut value, 10.0, 0.2, 0.1);
        assert!((value - 0.1).abs() < 1e-6);

        approach_f(&mut value, -10.0, 0.2, 0.1);
        assert!(value.abs() < 1e-6);
    }

    #[test]
    fn tilt_never_moves_more_than_step() {
        let mut rot = Vec3f::new(0.0, 1.5, 0.0);
        let floor = Vec3f::new(3.0, -7.0, -2.0);
        for _ in 0..100 {
            let before = rot;
            ease_floor_tilt(&mut rot, floor);
            assert!((rot.x - before.x).abs() <= 0.1 + 1e-6);
            assert!((rot.z - before.z).abs() <= 0.1 + 1e-6);
            assert_eq!(rot.y, 1.5);
        }
        assert!((rot.x - 3.0).abs() < 0.05);
        assert!((rot.z + 2.0).abs() < 0.05);
    }

    #[test]
    fn reached_target_is_stable() {
        let mut value = 4.0;
        assert_eq!(approach_f(&mut value, 4.0, 0.2, 0.1), 4.0);
    }
}
