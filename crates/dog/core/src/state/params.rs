//! Packed spawn parameters and path bookkeeping.

/// Spawn parameters packed into a single 16-bit word.
///
/// Layout: bits 5..=9 hold the racetrack dog index, bits 10..=15 the path
/// index. A path index of [`DogParams::PATH_INDEX_NONE`] means no path.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Default)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(feature = "serde", serde(transparent))]
pub struct DogParams(pub u16);

impl DogParams {
    pub const PATH_INDEX_NONE: u8 = 0x3F;

    const INDEX_MASK: u16 = 0x3E0;
    const INDEX_SHIFT: u16 = 5;
    const PATH_MASK: u16 = 0xFC00;
    const PATH_SHIFT: u16 = 10;

    pub const fn new(path: u8, index: u8) -> Self {
        let path = (path as u16) << Self::PATH_SHIFT;
        let index = (index as u16) << Self::INDEX_SHIFT;
        Self(path | index)
    }

    /// Racetrack dog index (0..=31).
    pub const fn index(self) -> u8 {
        ((self.0 & Self::INDEX_MASK) >> Self::INDEX_SHIFT) as u8
    }

    /// Path index (0..=63).
    pub const fn path_index(self) -> u8 {
        ((self.0 & Self::PATH_MASK) >> Self::PATH_SHIFT) as u8
    }

    pub const fn has_path(self) -> bool {
        self.path_index() != Self::PATH_INDEX_NONE
    }
}

/// Position along an external path.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Default)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct PathCursor {
    pub path_index: u8,
    pub current_point: i32,
}

impl PathCursor {
    pub const fn new(path_index: u8) -> Self {
        Self {
            path_index,
            current_point: 0,
        }
    }
}
