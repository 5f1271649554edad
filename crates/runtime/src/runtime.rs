//! High-level runtime orchestrator.
//!
//! The runtime owns every spawned dog, the live configuration and the hook
//! registry, and drives one [`DogEngine`] update per dog per frame.

use std::collections::BTreeMap;
use std::path::Path;
use std::sync::Arc;

use dog_content::{ConfigLoader, DogSpawnSpec, ModConfig, SpawnLoader};
use dog_core::{
    ActionHandler, ActionTable, ActionTableBuilder, ActorId, DogAction, DogEngine, DogEnv,
    DogHost, DogParams, DogState, FrameOutcome, Vec3f, WorldOracle,
};
use tracing::{debug, info, trace};

use crate::error::{Result, RuntimeError};
use crate::hooks::HookRegistry;
use crate::oracle::LiveConfig;

/// Runtime configuration.
#[derive(Debug, Clone)]
pub struct RuntimeConfig {
    /// Settings the live configuration starts from.
    pub mod_config: ModConfig,
    /// First id handed out by [`DogRuntime::spawn`].
    pub first_actor_id: u32,
}

impl Default for RuntimeConfig {
    fn default() -> Self {
        Self {
            mod_config: ModConfig::default(),
            first_actor_id: 1,
        }
    }
}

/// Main runtime that owns the dogs and steps them frame by frame.
pub struct DogRuntime {
    config: Arc<LiveConfig>,
    actions: ActionTable,
    hooks: HookRegistry,
    dogs: BTreeMap<ActorId, DogState>,
    next_id: u32,
}

impl DogRuntime {
    /// Create a new runtime builder
    pub fn builder() -> DogRuntimeBuilder {
        DogRuntimeBuilder::new()
    }

    /// Shared handle to the live configuration.
    ///
    /// Hosts keep a clone to change `dog_behavior` from their settings menu.
    pub fn live_config(&self) -> &Arc<LiveConfig> {
        &self.config
    }

    pub fn hooks(&self) -> &HookRegistry {
        &self.hooks
    }

    /// Spawns a dog under the next free id.
    ///
    /// The player id is never handed out, also not after the counter wraps.
    pub fn spawn(&mut self, params: DogParams, position: Vec3f) -> ActorId {
        let mut id = ActorId(self.next_id);
        while id.is_player() || self.dogs.contains_key(&id) {
            id = ActorId(id.0.wrapping_add(1));
        }
        self.next_id = id.0.wrapping_add(1);
        self.insert(id, params, position);
        id
    }

    /// Spawns a dog under a host-chosen id.
    pub fn spawn_with_id(&mut self, id: ActorId, params: DogParams, position: Vec3f) -> Result<()> {
        if self.dogs.contains_key(&id) {
            return Err(RuntimeError::DuplicateActor(id));
        }
        self.insert(id, params, position);
        Ok(())
    }

    /// Spawns every entry of a spawn list, in order.
    pub fn spawn_all(&mut self, specs: &[DogSpawnSpec]) -> Result<Vec<ActorId>> {
        let mut params = Vec::with_capacity(specs.len());
        for (position, spec) in specs.iter().enumerate() {
            let packed = spec.params().ok_or_else(|| {
                anyhow::anyhow!(
                    "Spawn entry {} out of range: index {} path {:?}",
                    position,
                    spec.index,
                    spec.path
                )
            })?;
            params.push(packed);
        }

        Ok(specs
            .iter()
            .zip(params)
            .map(|(spec, params)| self.spawn(params, spec.position))
            .collect())
    }

    fn insert(&mut self, id: ActorId, params: DogParams, position: Vec3f) {
        info!(
            target: "runtime::spawn",
            actor = %id,
            index = params.index(),
            path = params.path_index(),
            "Dog spawned"
        );
        self.dogs.insert(id, DogState::spawn(id, params, position));
    }

    /// Removes a dog and returns its final state.
    pub fn despawn(&mut self, id: ActorId) -> Result<DogState> {
        let Some(dog) = self.dogs.remove(&id) else {
            return Err(RuntimeError::UnknownActor(id));
        };
        info!(target: "runtime::spawn", actor = %id, frames = dog.frames, "Dog despawned");
        Ok(dog)
    }

    pub fn dog(&self, id: ActorId) -> Option<&DogState> {
        self.dogs.get(&id)
    }

    /// Mutable access for the host's own routines and physics.
    pub fn dog_mut(&mut self, id: ActorId) -> Option<&mut DogState> {
        self.dogs.get_mut(&id)
    }

    /// Spawned ids in update order.
    pub fn ids(&self) -> impl Iterator<Item = ActorId> + '_ {
        self.dogs.keys().copied()
    }

    pub fn len(&self) -> usize {
        self.dogs.len()
    }

    pub fn is_empty(&self) -> bool {
        self.dogs.is_empty()
    }

    /// Runs one frame for a single dog.
    pub fn update(
        &mut self,
        id: ActorId,
        world: &dyn WorldOracle,
        host: &mut dyn DogHost,
    ) -> Result<FrameOutcome> {
        let Some(dog) = self.dogs.get_mut(&id) else {
            return Err(RuntimeError::UnknownActor(id));
        };
        let env = DogEnv::with_config(world, &*self.config);
        let mut engine = DogEngine::new(dog, &self.actions, self.hooks.as_slice());
        let outcome = engine.update(&env, host);
        self.trace_outcome(id, &outcome);
        Ok(outcome)
    }

    /// Runs one frame for every dog in ascending id order.
    pub fn step(
        &mut self,
        world: &dyn WorldOracle,
        host: &mut dyn DogHost,
    ) -> Vec<(ActorId, FrameOutcome)> {
        let env = DogEnv::with_config(world, &*self.config);
        let mut outcomes = Vec::with_capacity(self.dogs.len());

        for (&id, dog) in self.dogs.iter_mut() {
            let mut engine = DogEngine::new(dog, &self.actions, self.hooks.as_slice());
            outcomes.push((id, engine.update(&env, host)));
        }

        for (id, outcome) in &outcomes {
            self.trace_outcome(*id, outcome);
        }
        outcomes
    }

    fn trace_outcome(&self, id: ActorId, outcome: &FrameOutcome) {
        if outcome.is_frozen() {
            trace!(target: "runtime::frame", actor = %id, "Frozen by cutscene");
            return;
        }

        trace!(
            target: "runtime::frame",
            actor = %id,
            decision = %outcome.decision,
            action = ?outcome.action_ran,
            next_action = %outcome.action_after,
            behavior = %outcome.behavior_after,
            "Frame updated"
        );
        if outcome.entered_swim {
            debug!(target: "runtime::frame", actor = %id, "Entered water");
        }
        self.hooks.trace_fired(id, outcome);
    }
}

/// Builder for [`DogRuntime`].
pub struct DogRuntimeBuilder {
    config: RuntimeConfig,
    actions: Option<ActionTable>,
    action_builder: ActionTableBuilder,
    hooks: Option<HookRegistry>,
    spawns: Vec<DogSpawnSpec>,
}

impl DogRuntimeBuilder {
    fn new() -> Self {
        Self {
            config: RuntimeConfig::default(),
            actions: None,
            action_builder: ActionTable::builder(),
            hooks: None,
            spawns: Vec::new(),
        }
    }

    /// Override runtime configuration
    pub fn config(mut self, config: RuntimeConfig) -> Self {
        self.config = config;
        self
    }

    /// Loads the starting mod configuration from a TOML file.
    pub fn config_file(mut self, path: &Path) -> Result<Self> {
        self.config.mod_config = ConfigLoader::load(path)?;
        Ok(self)
    }

    /// Queues the dogs of a RON spawn list for spawning at build time.
    pub fn spawn_file(mut self, path: &Path) -> Result<Self> {
        self.spawns.extend(SpawnLoader::load(path)?);
        Ok(self)
    }

    /// Use a complete, prebuilt action table.
    ///
    /// Takes precedence over handlers registered with [`Self::handler`].
    pub fn actions(mut self, table: ActionTable) -> Self {
        self.actions = Some(table);
        self
    }

    /// Registers the routine for one action.
    pub fn handler(mut self, action: DogAction, handler: impl ActionHandler + 'static) -> Self {
        self.action_builder = self.action_builder.handler(action, handler);
        self
    }

    /// Registers `handler` for every action without one.
    pub fn fallback(mut self, handler: Arc<dyn ActionHandler>) -> Self {
        self.action_builder = self.action_builder.fallback(handler);
        self
    }

    /// Set custom post-action hooks.
    ///
    /// If not provided, the stock pickup hooks are used.
    pub fn with_hooks(mut self, hooks: HookRegistry) -> Self {
        self.hooks = Some(hooks);
        self
    }

    /// Build the runtime
    ///
    /// # Errors
    ///
    /// Fails when no prebuilt table was given and a routine has no handler,
    /// or a queued spawn entry does not fit the packed parameters.
    pub fn build(self) -> Result<DogRuntime> {
        let actions = match self.actions {
            Some(table) => table,
            None => self.action_builder.build()?,
        };

        // Use provided hooks or default registry
        let hooks = self.hooks.unwrap_or_default();
        debug!(target: "runtime::hooks", hooks = ?hooks, "Hook registry ready");

        let mut runtime = DogRuntime {
            config: Arc::new(LiveConfig::new(self.config.mod_config)),
            actions,
            hooks,
            dogs: BTreeMap::new(),
            next_id: self.config.first_actor_id,
        };
        runtime.spawn_all(&self.spawns)?;

        Ok(runtime)
    }
}
