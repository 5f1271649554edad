/// Behavior constants and tunable parameters.
#[derive(Clone, Copy, Debug, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(feature = "serde", serde(default))]
pub struct DogConfig {
    /// Horizontal distance under which a forced deku behavior engages.
    pub deku_override_radius: f32,
    /// Horizontal distance under which a forced goron or zora behavior engages.
    pub form_override_radius: f32,
    /// Player speed above which forced behaviors leave their wait state.
    pub player_run_speed: f32,
    /// Frames spent backing away from a goron player.
    pub back_away_frames: i16,
}

impl DogConfig {
    // ===== fixed collision probe =====
    pub const GROUND_PROBE_RADIUS: f32 = 26.0;
    pub const GROUND_PROBE_HEIGHT: f32 = 10.0;
    pub const CEILING_PROBE_HEIGHT: f32 = 0.0;

    // ===== floor tilt easing =====
    pub const TILT_APPROACH_SCALE: f32 = 0.2;
    pub const TILT_APPROACH_STEP: f32 = 0.1;

    // ===== runtime-tunable defaults =====
    pub const DEFAULT_DEKU_OVERRIDE_RADIUS: f32 = 250.0;
    pub const DEFAULT_FORM_OVERRIDE_RADIUS: f32 = 300.0;
    pub const DEFAULT_PLAYER_RUN_SPEED: f32 = 1.0;
    pub const DEFAULT_BACK_AWAY_FRAMES: i16 = 50;

    pub fn new() -> Self {
        Self {
            deku_override_radius: Self::DEFAULT_DEKU_OVERRIDE_RADIUS,
            form_override_radius: Self::DEFAULT_FORM_OVERRIDE_RADIUS,
            player_run_speed: Self::DEFAULT_PLAYER_RUN_SPEED,
            back_away_frames: Self::DEFAULT_BACK_AWAY_FRAMES,
        }
    }
}

impl Default for DogConfig {
    fn default() -> Self {
        Self::new()
    }
}
