//! Hook registry for managing the post-action hooks handed to the engine.

use std::collections::HashMap;
use std::sync::Arc;

use dog_core::{ActorId, FrameOutcome, PostActionHook, default_hooks};
use tracing::debug;

/// Registry that owns the post-action hooks shared by every dog.
///
/// Hooks are kept sorted by priority (lower values first) so the engine can
/// evaluate them in order. A name lookup table allows replacing or
/// inspecting individual hooks.
#[derive(Clone)]
pub struct HookRegistry {
    hooks: Arc<[Arc<dyn PostActionHook>]>,
    lookup_table: HashMap<&'static str, Arc<dyn PostActionHook>>,
}

impl HookRegistry {
    /// Creates a registry from `hooks`, sorted by priority.
    ///
    /// When two hooks share a name the later one wins the lookup entry,
    /// both stay in the evaluation order.
    pub fn new(mut hooks: Vec<Arc<dyn PostActionHook>>) -> Self {
        hooks.sort_by_key(|h| h.priority());

        let lookup_table = hooks
            .iter()
            .map(|h| (h.name(), Arc::clone(h)))
            .collect();

        Self {
            hooks: hooks.into(),
            lookup_table,
        }
    }

    /// Creates a registry with the stock pickup hooks.
    pub fn default_hooks() -> Self {
        Self::new(default_hooks().iter().cloned().collect())
    }

    /// Creates a registry without hooks; pickups are never attempted.
    pub fn empty() -> Self {
        Self::new(Vec::new())
    }

    /// Returns the default hooks plus `additional`, re-sorted.
    pub fn with_additional(additional: Vec<Arc<dyn PostActionHook>>) -> Self {
        let mut hooks: Vec<_> = default_hooks().iter().cloned().collect();
        hooks.extend(additional);
        Self::new(hooks)
    }

    /// Hooks in evaluation order.
    pub fn as_slice(&self) -> &[Arc<dyn PostActionHook>] {
        &self.hooks
    }

    /// Finds a hook by name.
    pub fn find(&self, name: &str) -> Option<&Arc<dyn PostActionHook>> {
        self.lookup_table.get(name)
    }

    pub fn len(&self) -> usize {
        self.hooks.len()
    }

    pub fn is_empty(&self) -> bool {
        self.hooks.is_empty()
    }

    /// Returns an iterator over hook names and priorities (for debugging).
    pub fn hooks(&self) -> impl Iterator<Item = (&'static str, i32)> + '_ {
        self.hooks.iter().map(|h| (h.name(), h.priority()))
    }

    /// Logs the hooks that fired for `actor` this frame.
    pub(crate) fn trace_fired(&self, actor: ActorId, outcome: &FrameOutcome) {
        for name in &outcome.hooks_fired {
            debug!(
                target: "runtime::hooks",
                actor = %actor,
                hook = *name,
                action = ?outcome.action_ran,
                "Hook fired"
            );
        }
    }
}

impl Default for HookRegistry {
    fn default() -> Self {
        Self::default_hooks()
    }
}

impl std::fmt::Debug for HookRegistry {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_list().entries(self.hooks()).finish()
    }
}
