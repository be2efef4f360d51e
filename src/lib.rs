//! # duel-bridge
//!
//! A boundary layer between an embedding host and an opaque, externally
//! owned duel simulation engine.
//!
//! ## Design Principles
//!
//! 1. **Handles Stay Opaque**: The engine's pointer-sized handles never
//!    reach the host. Hosts hold small positive `DuelId`s; the registry
//!    maps between the two.
//!
//! 2. **Read-Through Content**: Card definitions and script sources are
//!    registered up front and pulled by the engine on demand through
//!    the `ContentSource` callbacks. Misses are statuses, never
//!    fabricated data.
//!
//! 3. **Bounded Marshalling**: Every payload crosses the boundary
//!    through a fixed-capacity buffer. Oversized payloads are rejected
//!    before any copy, and only exactly-produced bytes are ever
//!    exposed.
//!
//! 4. **No Ambient State**: The bridge is an explicit object the host
//!    constructs and passes around. Single logical thread of control:
//!    operations are synchronous, `&mut self`, and run to completion.
//!
//! ## Modules
//!
//! - `registry`: `DuelId`/`DuelHandle` newtypes, id pool, handle registry
//! - `catalog`: card and script catalogs, suffix-fallback resolution
//! - `marshal`: bounded response/message/query buffers
//! - `engine`: `SimulationEngine` and `ContentSource` contracts
//! - `bridge`: `DuelBridge`, the host-facing operation surface
//! - `error`: `BridgeError` taxonomy

pub mod bridge;
pub mod catalog;
pub mod engine;
pub mod error;
pub mod marshal;
pub mod registry;

// Re-export commonly used types
pub use crate::bridge::{DuelBridge, ProcessResult};

pub use crate::catalog::{
    CardCatalog, CardDefinition, Catalogs, ResolveAttempts, ScriptCatalog,
};

pub use crate::engine::{
    CardQuery, ContentSource, FieldQuery, NewCard, PlayerInfo, ProcessOutcome,
    SimulationEngine,
};

pub use crate::error::{BridgeError, BridgeResult};

pub use crate::marshal::{
    ResponseBuffer, ScratchBuffer, MESSAGE_CAPACITY, QUERY_CAPACITY, RESPONSE_CAPACITY,
};

pub use crate::registry::{DuelHandle, DuelId, HandleRegistry, IdPool};
