//! Action routine identifiers and their dispatch table.
//!
//! Each dog runs exactly one action routine per frame. Routines are
//! identified by [`DogAction`] and implemented by the host through
//! [`ActionHandler`]s collected in an [`ActionTable`]. A routine requests a
//! transition by writing a different `DogAction` into the dog state.
mod table;

pub use table::{ActionHandler, ActionTable, ActionTableBuilder, ActionTableError};

/// Identifier of a per-frame action routine.
#[derive(
    Clone,
    Copy,
    Debug,
    Default,
    PartialEq,
    Eq,
    Hash,
    PartialOrd,
    Ord,
    strum::Display,
    strum::AsRefStr,
    strum::IntoStaticStr,
    strum::EnumCount,
    strum::EnumIter,
)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[strum(serialize_all = "snake_case")]
pub enum DogAction {
    #[default]
    IdleMove,
    IdleBark,
    SitNextToPlayer,
    ApproachPlayer,
    BackAwayFromGoron,
    RunAwayFromGoron,
    BarkAtGoron,
    ApproachPlayerToAttack,
    JumpAttack,
    RunAfterAttacking,
    SetupSwim,
    Swim,
    JumpOutOfWater,
    Held,
    Thrown,
    Talk,
}

impl DogAction {
    /// Position of this action in dense per-action tables.
    #[inline]
    pub const fn as_index(self) -> usize {
        self as usize
    }

    /// Returns true for the routines that pass through the player on contact.
    pub const fn is_jump_attack(self) -> bool {
        matches!(self, Self::JumpAttack)
    }
}
