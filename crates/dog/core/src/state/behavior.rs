//! High-level behavior tags and grab bookkeeping.

/// Enumerated high-level AI mode of a dog.
///
/// The wait variants pair with the idle routine family, the plain form
/// variants with the routine installed when the player moves fast.
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
    strum::EnumIter,
    strum::FromRepr,
)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[strum(serialize_all = "snake_case")]
#[repr(u8)]
pub enum DogBehavior {
    /// Assigned at spawn; replaced on the first update.
    #[default]
    Initial = 0,
    Human = 1,
    Goron = 2,
    GoronWait = 3,
    Zora = 4,
    ZoraWait = 5,
    Deku = 6,
    DekuWait = 7,
    Default = 8,
}

impl DogBehavior {
    /// Returns true for the tags the first update demotes to [`DogBehavior::Default`].
    pub const fn is_spawn_tag(self) -> bool {
        matches!(self, Self::Initial | Self::Human)
    }

    /// Returns true for the stationary wait tags.
    pub const fn is_wait(self) -> bool {
        matches!(self, Self::GoronWait | Self::ZoraWait | Self::DekuWait)
    }
}

/// Tracks the player-carry interaction.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash, strum::Display, strum::AsRefStr)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[strum(serialize_all = "snake_case")]
pub enum GrabState {
    #[default]
    None,
    /// Carried by the player; the holder drives the world position.
    Held,
    ThrownOrSittingAfterThrow,
}

impl GrabState {
    #[inline]
    pub const fn is_held(self) -> bool {
        matches!(self, Self::Held)
    }
}
