//! Contracts for the opaque simulation engine.
//!
//! The engine is externally owned and treated as a black box: it is
//! reached through exactly two narrow contracts. `SimulationEngine` is
//! what the bridge calls into (create/advance/query a duel), and
//! `ContentSource` is what the engine calls back into when it needs
//! static data it does not store itself.
//!
//! ## Implementation Notes
//!
//! - Every method takes the engine-owned `DuelHandle`, never a `DuelId`;
//!   id resolution happens in the bridge before the engine is reached.
//! - Calls that can pull static data (`create_duel`, `new_card`,
//!   `process`) receive a `&dyn ContentSource`.
//! - Producer methods write into a caller-supplied scratch slice and
//!   return the produced byte count; the marshaller bounds-checks it.

use serde::{Deserialize, Serialize};

use crate::catalog::CardDefinition;
use crate::registry::DuelHandle;

/// Read-through callbacks the engine uses to pull static content.
///
/// Served by `Catalogs`. Both calls are synchronous and infallible at
/// this boundary: a miss is a status (`None` / empty slice), decided on
/// by the engine.
pub trait ContentSource {
    /// Fetch a card definition by code.
    ///
    /// `None` means the code is unknown; a definition is never
    /// fabricated, so an all-zero definition is distinguishable from a
    /// miss.
    fn read_card(&self, code: u32) -> Option<CardDefinition>;

    /// Fetch script content by name, with fallback resolution applied.
    ///
    /// An empty slice means "script unavailable"; the engine treats
    /// that as recoverable, not fatal.
    fn read_script(&self, name: &str) -> &[u8];
}

/// Initial state for one player in a duel.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct PlayerInfo {
    /// Player index.
    pub player: u8,
    /// Starting life points.
    pub lp: u32,
    /// Initial hand count.
    pub start: u32,
    /// Cards drawn each turn.
    pub draw: u32,
}

/// A card added to a running duel.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct NewCard {
    /// Card code; the engine pulls the definition through `read_card`.
    pub code: u32,
    /// Owning player.
    pub owner: u8,
    /// Controlling player.
    pub player: u8,
    /// Location bitmask (deck, hand, field, ...).
    pub location: u32,
    /// Sequence within the location.
    pub sequence: u32,
    /// Position bitmask (face-up attack, face-down defense, ...).
    pub position: u32,
}

/// Options for querying a single card.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct CardQuery {
    /// Player whose side is queried.
    pub player: u8,
    /// Location bitmask.
    pub location: u32,
    /// Sequence within the location.
    pub sequence: u32,
    /// Bitmask of fields to include.
    pub flags: u32,
    /// Use the engine's cached values rather than recomputing.
    pub use_cache: bool,
}

/// Options for querying every card in a location.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct FieldQuery {
    /// Player whose side is queried.
    pub player: u8,
    /// Location bitmask.
    pub location: u32,
    /// Bitmask of fields to include.
    pub flags: u32,
    /// Use the engine's cached values rather than recomputing.
    pub use_cache: bool,
}

/// What one `process` tick produced.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct ProcessOutcome {
    /// Engine status flags for this tick.
    pub flags: u32,
    /// Bytes written into the message scratch.
    pub len: usize,
}

/// The opaque duel engine.
///
/// Implementations wrap the real simulation core; tests substitute a
/// recording mock. The bridge never inspects a handle's value, and the
/// engine owns every object a handle refers to.
pub trait SimulationEngine {
    /// Create a duel with the given seed.
    fn create_duel(&mut self, seed: u32, source: &dyn ContentSource) -> DuelHandle;

    /// Start a created duel with the given option flags.
    fn start_duel(&mut self, duel: DuelHandle, options: u32);

    /// Terminate a duel and release its engine-side resources.
    fn end_duel(&mut self, duel: DuelHandle);

    /// Set a player's starting life points, hand count, and draw count.
    fn set_player_info(&mut self, duel: DuelHandle, info: &PlayerInfo);

    /// Add a card to the duel.
    fn new_card(&mut self, duel: DuelHandle, card: &NewCard, source: &dyn ContentSource);

    /// Hand the host's response payload to the engine.
    ///
    /// Called only after the bridge has bounds-checked the payload.
    fn set_response(&mut self, duel: DuelHandle, response: &[u8]);

    /// Advance the duel, writing messages into `messages`.
    ///
    /// Returns the status flags and how many bytes were produced.
    fn process(
        &mut self,
        duel: DuelHandle,
        source: &dyn ContentSource,
        messages: &mut [u8],
    ) -> ProcessOutcome;

    /// Query one card, writing the result into `out`.
    ///
    /// Returns the produced byte count.
    fn query_card(&mut self, duel: DuelHandle, query: &CardQuery, out: &mut [u8]) -> usize;

    /// Query every card in a location, writing the result into `out`.
    ///
    /// Returns the produced byte count.
    fn query_field_card(&mut self, duel: DuelHandle, query: &FieldQuery, out: &mut [u8])
        -> usize;

    /// Count cards at a player's location.
    fn query_field_count(&mut self, duel: DuelHandle, player: u8, location: u32) -> u32;
}
