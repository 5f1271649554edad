//! Dog spawn entries.

use dog_core::{DogParams, Vec3f};

/// One dog placed by a spawn list.
#[derive(Clone, Copy, Debug, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct DogSpawnSpec {
    pub position: Vec3f,
    /// Racetrack dog index (0..=31).
    pub index: u8,
    /// Path to follow; `None` leaves the dog off-path.
    #[cfg_attr(feature = "serde", serde(default))]
    pub path: Option<u8>,
}

impl DogSpawnSpec {
    pub const MAX_INDEX: u8 = 0x1F;

    /// Packs the entry into actor parameters.
    ///
    /// Returns `None` when the index or path does not fit its bit field.
    pub fn params(&self) -> Option<DogParams> {
        if self.index > Self::MAX_INDEX {
            return None;
        }
        let path = match self.path {
            Some(path) if path >= DogParams::PATH_INDEX_NONE => return None,
            Some(path) => path,
            None => DogParams::PATH_INDEX_NONE,
        };
        Some(DogParams::new(path, self.index))
    }
}
