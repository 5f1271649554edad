//! Dense table mapping every [`DogAction`] to its handler.

use std::sync::Arc;

use strum::{EnumCount, IntoEnumIterator};

use crate::engine::FrameInputs;
use crate::error::{DogError, ErrorSeverity};
use crate::host::DogHost;
use crate::state::DogState;

use super::DogAction;

/// A single per-frame action routine.
pub trait ActionHandler: Send + Sync {
    /// Runs the routine body for one frame.
    fn run(&self, dog: &mut DogState, host: &mut dyn DogHost, frame: &FrameInputs);
}

impl<F> ActionHandler for F
where
    F: Fn(&mut DogState, &mut dyn DogHost, &FrameInputs) + Send + Sync,
{
    #[inline]
    fn run(&self, dog: &mut DogState, host: &mut dyn DogHost, frame: &FrameInputs) {
        self(dog, host, frame)
    }
}

/// Errors raised while assembling an [`ActionTable`].
#[derive(Clone, Debug, PartialEq, Eq, thiserror::Error)]
pub enum ActionTableError {
    #[error("no handler registered for action '{0}'")]
    MissingHandler(DogAction),
}

impl DogError for ActionTableError {
    fn severity(&self) -> ErrorSeverity {
        ErrorSeverity::Fatal
    }

    fn error_code(&self) -> &'static str {
        match self {
            Self::MissingHandler(_) => "ACTION_TABLE_MISSING_HANDLER",
        }
    }
}

/// Handler for every action routine, indexed by [`DogAction::as_index`].
///
/// Completeness is checked once at construction, so dispatch is infallible.
#[derive(Clone)]
pub struct ActionTable {
    handlers: Arc<[Arc<dyn ActionHandler>]>,
}

impl ActionTable {
    /// Builds a table by asking `f` for the handler of each action.
    pub fn from_fn(mut f: impl FnMut(DogAction) -> Arc<dyn ActionHandler>) -> Self {
        let handlers: Vec<_> = DogAction::iter().map(&mut f).collect();
        Self {
            handlers: handlers.into(),
        }
    }

    pub fn builder() -> ActionTableBuilder {
        ActionTableBuilder::default()
    }

    /// Runs the handler registered for `action`.
    #[inline]
    pub fn run(
        &self,
        action: DogAction,
        dog: &mut DogState,
        host: &mut dyn DogHost,
        frame: &FrameInputs,
    ) {
        self.handlers[action.as_index()].run(dog, host, frame);
    }

    pub fn handler(&self, action: DogAction) -> &Arc<dyn ActionHandler> {
        &self.handlers[action.as_index()]
    }
}

impl core::fmt::Debug for ActionTable {
    fn fmt(&self, f: &mut core::fmt::Formatter<'_>) -> core::fmt::Result {
        f.debug_struct("ActionTable")
            .field("handlers", &self.handlers.len())
            .finish()
    }
}

/// Builder for an [`ActionTable`] that requires every action to be covered.
#[derive(Default)]
pub struct ActionTableBuilder {
    slots: [Option<Arc<dyn ActionHandler>>; DogAction::COUNT],
}

impl ActionTableBuilder {
    /// Registers the handler for `action`, replacing any previous one.
    pub fn handler(mut self, action: DogAction, handler: impl ActionHandler + 'static) -> Self {
        self.slots[action.as_index()] = Some(Arc::new(handler));
        self
    }

    /// Registers `handler` for every action not registered yet.
    pub fn fallback(mut self, handler: Arc<dyn ActionHandler>) -> Self {
        for slot in self.slots.iter_mut().filter(|slot| slot.is_none()) {
            *slot = Some(Arc::clone(&handler));
        }
        self
    }

    /// Builds the table.
    ///
    /// # Errors
    ///
    /// Returns `ActionTableError::MissingHandler` for the first action
    /// without a handler.
    pub fn build(self) -> Result<ActionTable, ActionTableError> {
        let mut handlers = Vec::with_capacity(DogAction::COUNT);
        for (action, slot) in DogAction::iter().zip(self.slots) {
            handlers.push(slot.ok_or(ActionTableError::MissingHandler(action))?);
        }
        Ok(ActionTable {
            handlers: handlers.into(),
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::state::{ActorId, DogParams, Vec3f};
    use crate::testing::{FakeHost, frame};

    fn dog() -> DogState {
        DogState::spawn(ActorId(1), DogParams::default(), Vec3f::ZERO)
    }

    fn bump_timer(dog: &mut DogState, _host: &mut dyn DogHost, _frame: &FrameInputs) {
        dog.timers.timer += 1;
    }

    fn noop(_dog: &mut DogState, _host: &mut dyn DogHost, _frame: &FrameInputs) {}

    #[test]
    fn builder_rejects_missing_handler() {
        let err = ActionTable::builder()
            .handler(DogAction::IdleMove, bump_timer)
            .build()
            .unwrap_err();
        assert_eq!(err, ActionTableError::MissingHandler(DogAction::IdleBark));
        assert!(err.severity().is_fatal());
    }

    #[test]
    fn fallback_fills_remaining_slots() {
        let table = ActionTable::builder()
            .handler(DogAction::Swim, bump_timer)
            .fallback(Arc::new(noop))
            .build()
            .unwrap();

        let mut dog = dog();
        let mut host = FakeHost::default();
        table.run(DogAction::IdleMove, &mut dog, &mut host, &frame());
        assert_eq!(dog.timers.timer, 0);
        table.run(DogAction::Swim, &mut dog, &mut host, &frame());
        assert_eq!(dog.timers.timer, 1);
    }

    #[test]
    fn from_fn_dispatches_by_action() {
        let table = ActionTable::from_fn(|action| {
            if action == DogAction::Thrown {
                Arc::new(bump_timer) as Arc<dyn ActionHandler>
            } else {
                Arc::new(noop)
            }
        });

        let mut dog = dog();
        let mut host = FakeHost::default();
        table.run(DogAction::Thrown, &mut dog, &mut host, &frame());
        table.run(DogAction::Held, &mut dog, &mut host, &frame());
        assert_eq!(dog.timers.timer, 1);
    }
}
