//! Content catalogs: static data the engine pulls on demand.
//!
//! Cards and scripts are registered by the host up front and read back
//! by the engine through its read-through callbacks. Catalog entries
//! live for the life of the catalog; there is no individual deletion.
//!
//! ## Key Types
//!
//! - `CardDefinition`: static card data, keyed by code
//! - `CardCatalog`: code -> definition table, upsert semantics
//! - `ScriptCatalog`: name -> bytes table with suffix-fallback lookup
//! - `Catalogs`: both tables together, serving `ContentSource`

pub mod cards;
pub mod scripts;

pub use cards::{CardCatalog, CardDefinition};
pub use scripts::{ResolveAttempts, ScriptCatalog};

use log::warn;

use crate::engine::ContentSource;

/// The combined static-content store consulted by the engine.
#[derive(Clone, Debug, Default)]
pub struct Catalogs {
    /// Card definitions by code.
    pub cards: CardCatalog,
    /// Script sources by name.
    pub scripts: ScriptCatalog,
}

impl Catalogs {
    /// Create empty catalogs.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }
}

impl ContentSource for Catalogs {
    fn read_card(&self, code: u32) -> Option<CardDefinition> {
        let found = self.cards.get(code).copied();
        if found.is_none() {
            warn!("read_card: card {} not found", code);
        }
        found
    }

    fn read_script(&self, name: &str) -> &[u8] {
        // Not-found means "script unavailable", reported as zero-length
        // content rather than an error.
        self.scripts.resolve(name).unwrap_or(&[])
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_read_card_status_distinct_from_zero_definition() {
        let mut catalogs = Catalogs::new();
        catalogs.cards.register(CardDefinition::new(0));

        // A registered all-zero definition is a hit; an unknown code is
        // a miss, never a fabricated definition.
        assert!(catalogs.read_card(0).is_some());
        assert!(catalogs.read_card(1).is_none());
    }

    #[test]
    fn test_read_script_miss_is_empty() {
        let mut catalogs = Catalogs::new();
        catalogs.scripts.register("c1.lua", b"x".to_vec());

        assert_eq!(catalogs.read_script("path/to/c1.lua"), b"x");
        assert_eq!(catalogs.read_script("missing.lua"), b"");
    }
}
