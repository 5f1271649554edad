//! Configuration oracle for exposing the behavior override setting.

use crate::config::DogConfig;

/// Forced behavior selected through the `dog_behavior` setting.
#[derive(
    Clone,
    Copy,
    Debug,
    Default,
    PartialEq,
    Eq,
    Hash,
    strum::Display,
    strum::EnumString,
    strum::AsRefStr,
    strum::EnumIter,
)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(feature = "serde", serde(rename_all = "snake_case"))]
#[strum(serialize_all = "snake_case", ascii_case_insensitive)]
#[repr(u32)]
pub enum DogBehaviorOption {
    #[default]
    None = 0,
    Human = 1,
    Deku = 2,
    Goron = 3,
    Zora = 4,
}

impl DogBehaviorOption {
    /// Decodes a raw stored value. Unrecognized values read as `None`.
    pub const fn from_raw(raw: u32) -> Self {
        match raw {
            1 => Self::Human,
            2 => Self::Deku,
            3 => Self::Goron,
            4 => Self::Zora,
            _ => Self::None,
        }
    }

    pub const fn as_raw(self) -> u32 {
        self as u32
    }

    /// Returns true when any forced behavior is selected.
    #[inline]
    pub const fn is_enabled(self) -> bool {
        !matches!(self, Self::None)
    }
}

/// Provides access to runtime configuration values.
///
/// Values may change between frames; the engine samples them once per
/// update and never caches them across frames.
pub trait ConfigOracle: Send + Sync {
    /// Returns the current `dog_behavior` setting.
    fn dog_behavior(&self) -> DogBehaviorOption;

    /// Returns the behavior tunables.
    fn tuning(&self) -> DogConfig {
        DogConfig::default()
    }

    /// Returns the setting and the tunables from a single read.
    ///
    /// Implementations backed by shared mutable storage override this so a
    /// frame never mixes an old setting with new tunables.
    fn settings(&self) -> (DogBehaviorOption, DogConfig) {
        (self.dog_behavior(), self.tuning())
    }
}
