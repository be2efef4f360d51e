//! Static card definitions and the code-keyed catalog.

use log::debug;
use rustc_hash::FxHashMap;
use serde::{Deserialize, Serialize};

/// Static data for one card, keyed by `code`.
///
/// Field layout matches what the engine pulls through its card reader.
/// This layer performs no range validation; the engine rejects
/// semantically invalid definitions itself.
///
/// ## Example
///
/// ```
/// use duel_bridge::catalog::CardDefinition;
///
/// let dragon = CardDefinition::new(4031)
///     .with_stats(2500, 2000)
///     .with_level(8);
///
/// assert_eq!(dragon.attack, 2500);
/// ```
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct CardDefinition {
    /// Unique card code, the catalog key.
    pub code: u32,
    /// Code of the card this one is treated as, or 0.
    pub alias: u32,
    /// Archetype set codes, packed four per 64 bits.
    pub setcode: u64,
    /// Card type bitmask (monster/spell/trap and subtypes).
    pub card_type: u32,
    /// Level or rank.
    pub level: u32,
    /// Attribute bitmask.
    pub attribute: u32,
    /// Race bitmask.
    pub race: u32,
    /// Attack points. Negative encodes "?" stats.
    pub attack: i32,
    /// Defense points. Negative encodes "?" stats.
    pub defense: i32,
    /// Left pendulum scale.
    pub lscale: u32,
    /// Right pendulum scale.
    pub rscale: u32,
    /// Link marker bitmask.
    pub link_marker: u32,
}

impl CardDefinition {
    /// Create a definition with the given code and all other fields zero.
    #[must_use]
    pub fn new(code: u32) -> Self {
        Self { code, ..Self::default() }
    }

    /// Set attack and defense (builder pattern).
    #[must_use]
    pub const fn with_stats(mut self, attack: i32, defense: i32) -> Self {
        self.attack = attack;
        self.defense = defense;
        self
    }

    /// Set level or rank (builder pattern).
    #[must_use]
    pub const fn with_level(mut self, level: u32) -> Self {
        self.level = level;
        self
    }

    /// Set the type bitmask (builder pattern).
    #[must_use]
    pub const fn with_type(mut self, card_type: u32) -> Self {
        self.card_type = card_type;
        self
    }
}

/// Catalog of card definitions, keyed by code.
///
/// Registration is an upsert: a later definition with the same code
/// replaces the earlier one. Entries live for the life of the catalog
/// and are never individually deleted.
#[derive(Clone, Debug, Default)]
pub struct CardCatalog {
    cards: FxHashMap<u32, CardDefinition>,
}

impl CardCatalog {
    /// Create an empty catalog.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Register a definition, replacing any prior one with the same code.
    pub fn register(&mut self, definition: CardDefinition) {
        debug!("register_card: {}", definition.code);
        self.cards.insert(definition.code, definition);
    }

    /// Get a definition by code.
    #[must_use]
    pub fn get(&self, code: u32) -> Option<&CardDefinition> {
        self.cards.get(&code)
    }

    /// Check whether a code is registered.
    #[must_use]
    pub fn contains(&self, code: u32) -> bool {
        self.cards.contains_key(&code)
    }

    /// Number of registered definitions.
    #[must_use]
    pub fn len(&self) -> usize {
        self.cards.len()
    }

    /// Check if the catalog is empty.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.cards.is_empty()
    }

    /// Iterate over all definitions.
    pub fn iter(&self) -> impl Iterator<Item = &CardDefinition> {
        self.cards.values()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_register_and_get() {
        let mut catalog = CardCatalog::new();
        catalog.register(CardDefinition::new(4031).with_stats(2500, 2000));

        let found = catalog.get(4031);
        assert!(found.is_some());
        assert_eq!(found.unwrap().attack, 2500);

        assert!(catalog.get(9999).is_none());
    }

    #[test]
    fn test_upsert_last_write_wins() {
        let mut catalog = CardCatalog::new();

        catalog.register(CardDefinition::new(100).with_stats(1000, 500));
        catalog.register(CardDefinition::new(100).with_stats(2000, 500));

        assert_eq!(catalog.len(), 1);
        assert_eq!(catalog.get(100).unwrap().attack, 2000);
    }

    #[test]
    fn test_no_field_validation() {
        let mut catalog = CardCatalog::new();

        // Negative stats and a zero type pass through untouched.
        catalog.register(CardDefinition::new(1).with_stats(-2, -2));
        assert_eq!(catalog.get(1).unwrap().defense, -2);
    }

    #[test]
    fn test_definition_serialization() {
        let def = CardDefinition::new(4031).with_level(8).with_type(0x21);

        let json = serde_json::to_string(&def).unwrap();
        let back: CardDefinition = serde_json::from_str(&json).unwrap();

        assert_eq!(def, back);
    }
}
