//! The host-facing bridge around an opaque duel engine.
//!
//! `DuelBridge` is the one object a host embeds. It owns the handle
//! registry, the content catalogs, and the marshalling buffers, and it
//! wraps every engine operation so that:
//!
//! - the host only ever sees `DuelId`s, never raw engine handles;
//! - every id is resolved before the engine is reached, failing with
//!   `InvalidId` instead of passing a null handle through;
//! - every payload crosses the boundary through a capacity-checked
//!   buffer.
//!
//! The bridge is constructed explicitly and passed around by the host;
//! there is no ambient global instance. All state is process-lifetime,
//! in-memory, and single-threaded: operations take `&mut self` and run
//! to completion.

use log::debug;

use crate::catalog::{CardDefinition, Catalogs};
use crate::engine::{CardQuery, FieldQuery, NewCard, PlayerInfo, SimulationEngine};
use crate::error::{BridgeError, BridgeResult};
use crate::marshal::{ResponseBuffer, ScratchBuffer};
use crate::registry::{DuelHandle, DuelId, HandleRegistry};

/// One `process` tick as seen by the host.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct ProcessResult {
    /// Engine status flags for this tick.
    pub flags: u32,
    /// Engine messages, exactly as produced.
    pub data: Vec<u8>,
}

/// Boundary layer between a host and an opaque duel engine.
///
/// ## Example
///
/// ```no_run
/// use duel_bridge::bridge::DuelBridge;
/// use duel_bridge::catalog::CardDefinition;
/// use duel_bridge::engine::PlayerInfo;
/// # fn run(engine: impl duel_bridge::engine::SimulationEngine) -> duel_bridge::error::BridgeResult<()> {
///
/// let mut bridge = DuelBridge::new(engine);
/// bridge.register_card(CardDefinition::new(4031).with_stats(2500, 2000));
/// bridge.register_script("scripts/c4031.lua", b"-- Blue-Eyes");
///
/// let duel = bridge.create_duel(0x1234);
/// bridge.set_player_info(duel, PlayerInfo { player: 0, lp: 8000, start: 5, draw: 1 })?;
/// bridge.start_duel(duel, 0)?;
///
/// let tick = bridge.process(duel)?;
/// println!("flags {:#x}, {} message bytes", tick.flags, tick.data.len());
/// # Ok(())
/// # }
/// ```
#[derive(Debug)]
pub struct DuelBridge<E> {
    engine: E,
    duels: HandleRegistry,
    catalogs: Catalogs,
    response: ResponseBuffer,
    messages: ScratchBuffer,
    queries: ScratchBuffer,
}

impl<E: SimulationEngine> DuelBridge<E> {
    /// Wrap an engine in a fresh bridge with empty catalogs.
    #[must_use]
    pub fn new(engine: E) -> Self {
        Self {
            engine,
            duels: HandleRegistry::new(),
            catalogs: Catalogs::new(),
            response: ResponseBuffer::new(),
            messages: ScratchBuffer::message(),
            queries: ScratchBuffer::query(),
        }
    }

    /// Resolve an id or fail the operation.
    fn resolve(&self, id: DuelId) -> BridgeResult<DuelHandle> {
        self.duels.lookup(id).ok_or(BridgeError::InvalidId(id))
    }

    /// Register a card definition, replacing any prior one with the
    /// same code.
    pub fn register_card(&mut self, definition: CardDefinition) {
        self.catalogs.cards.register(definition);
    }

    /// Register a script under `name`, content stored verbatim.
    pub fn register_script(&mut self, name: impl Into<String>, content: &[u8]) {
        self.catalogs.scripts.register(name, content.to_vec());
    }

    /// Create a duel and return its id.
    pub fn create_duel(&mut self, seed: u32) -> DuelId {
        let handle = self.engine.create_duel(seed, &self.catalogs);
        let id = self.duels.register(handle);
        debug!("create_duel: seed {:#x} -> {}", seed, id);
        id
    }

    /// Start a duel with the given option flags.
    pub fn start_duel(&mut self, id: DuelId, options: u32) -> BridgeResult<()> {
        let handle = self.resolve(id)?;
        self.engine.start_duel(handle, options);
        Ok(())
    }

    /// Terminate a duel and retire its id.
    ///
    /// The id is recycled and must not be used again; doing so fails
    /// with `InvalidId`.
    pub fn end_duel(&mut self, id: DuelId) -> BridgeResult<()> {
        let handle = self.resolve(id)?;
        self.engine.end_duel(handle);
        self.duels.remove(id);
        debug!("end_duel: {}", id);
        Ok(())
    }

    /// Set a player's starting life points, hand count, and draw count.
    pub fn set_player_info(&mut self, id: DuelId, info: PlayerInfo) -> BridgeResult<()> {
        let handle = self.resolve(id)?;
        self.engine.set_player_info(handle, &info);
        Ok(())
    }

    /// Add a card to a running duel.
    pub fn new_card(&mut self, id: DuelId, card: NewCard) -> BridgeResult<()> {
        let handle = self.resolve(id)?;
        self.engine.new_card(handle, &card, &self.catalogs);
        Ok(())
    }

    /// Hand the host's response to the engine.
    ///
    /// Payloads over 64 bytes are rejected with `BufferOverflow` before
    /// any copy; the engine's previous response stays in effect.
    pub fn set_response(&mut self, id: DuelId, response: &[u8]) -> BridgeResult<()> {
        let handle = self.resolve(id)?;
        self.response.load(response)?;
        self.engine.set_response(handle, self.response.bytes());
        Ok(())
    }

    /// Advance the duel one tick.
    pub fn process(&mut self, id: DuelId) -> BridgeResult<ProcessResult> {
        let handle = self.resolve(id)?;

        let engine = &mut self.engine;
        let catalogs = &self.catalogs;
        let mut flags = 0;
        let data = self.messages.fill(|scratch| {
            let outcome = engine.process(handle, catalogs, scratch);
            flags = outcome.flags;
            outcome.len
        })?;

        Ok(ProcessResult { flags, data: data.to_vec() })
    }

    /// Query one card.
    pub fn query_card(&mut self, id: DuelId, query: CardQuery) -> BridgeResult<Vec<u8>> {
        let handle = self.resolve(id)?;

        let engine = &mut self.engine;
        let data = self
            .queries
            .fill(|scratch| engine.query_card(handle, &query, scratch))?;

        Ok(data.to_vec())
    }

    /// Query every card in a location.
    pub fn query_field_card(&mut self, id: DuelId, query: FieldQuery) -> BridgeResult<Vec<u8>> {
        let handle = self.resolve(id)?;

        let engine = &mut self.engine;
        let data = self
            .queries
            .fill(|scratch| engine.query_field_card(handle, &query, scratch))?;

        Ok(data.to_vec())
    }

    /// Count cards at a player's location.
    pub fn query_field_count(&mut self, id: DuelId, player: u8, location: u32) -> BridgeResult<u32> {
        let handle = self.resolve(id)?;
        Ok(self.engine.query_field_count(handle, player, location))
    }

    /// Number of live duels.
    #[must_use]
    pub fn live_duels(&self) -> usize {
        self.duels.len()
    }

    /// The catalogs this bridge serves to the engine.
    #[must_use]
    pub fn catalogs(&self) -> &Catalogs {
        &self.catalogs
    }

    /// The wrapped engine.
    #[must_use]
    pub fn engine(&self) -> &E {
        &self.engine
    }
}
