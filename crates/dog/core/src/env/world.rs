//! World oracle: player snapshot, scene, and racetrack selection.

/// Transformation the player currently wears.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash, strum::Display, strum::AsRefStr)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[strum(serialize_all = "snake_case")]
pub enum PlayerForm {
    FierceDeity,
    Goron,
    Zora,
    Deku,
    #[default]
    Human,
}

bitflags::bitflags! {
    /// Subset of the player's primary state flags the core inspects.
    #[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash)]
    #[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
    pub struct PlayerStateFlags: u32 {
        /// Player is locked in a scripted animation.
        const LOCKED_ANIMATION = 1 << 5;
    }
}

/// Per-frame view of the player.
#[derive(Clone, Copy, Debug, PartialEq, Default)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct PlayerSnapshot {
    pub speed: f32,
    pub form: PlayerForm,
    pub state_flags: PlayerStateFlags,
}

/// Scene the actor is updated in.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Default)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum SceneId {
    /// Clock tower scene where dogs freeze during the locked player cutscene.
    ClockTower,
    #[default]
    Other,
}

/// Racetrack dog chosen by the minigame.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Default)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct SelectedDogInfo {
    /// Dog color, indexes the racetrack base speeds.
    pub color: i16,
    pub index: i16,
    /// Text shown when the dog is picked up.
    pub text_id: u16,
}

/// Provides read-only access to the world around the dog.
pub trait WorldOracle: Send + Sync {
    fn player(&self) -> PlayerSnapshot;

    fn scene(&self) -> SceneId;

    fn selected_dog(&self) -> SelectedDogInfo;
}
