//! Coin style catalog.
//!
//! Coin styles are cosmetic skins unlocked by cumulative flip count. The
//! catalog is static and immutable for the whole session; the only mutable
//! piece is which style the user has selected, held by the session itself.
//!
//! A style with unlock threshold 0 is always selectable. A locked style
//! becomes selectable the instant the session's total flip count reaches
//! its threshold.

use serde::{Deserialize, Serialize};

/// Unique identifier for a coin style.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct CoinStyleId(pub u32);

impl CoinStyleId {
    /// Create a new style ID.
    #[must_use]
    pub const fn new(id: u32) -> Self {
        Self(id)
    }

    /// Get the raw ID value.
    #[must_use]
    pub const fn raw(self) -> u32 {
        self.0
    }
}

impl std::fmt::Display for CoinStyleId {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "Style({})", self.0)
    }
}

/// IDs of the standard style catalog.
pub const CLASSIC: CoinStyleId = CoinStyleId::new(0);
pub const QUANTUM: CoinStyleId = CoinStyleId::new(1);
pub const GALAXY: CoinStyleId = CoinStyleId::new(2);
pub const CRYPTO: CoinStyleId = CoinStyleId::new(3);
pub const ELEMENTAL: CoinStyleId = CoinStyleId::new(4);
pub const MATRIX: CoinStyleId = CoinStyleId::new(5);
pub const RAINBOW: CoinStyleId = CoinStyleId::new(6);
pub const NEON: CoinStyleId = CoinStyleId::new(7);
pub const CUSTOM: CoinStyleId = CoinStyleId::new(8);

/// Static coin style definition.
///
/// Gradient and animation data stay in the presentation layer; the engine
/// only needs identity, display text, and the unlock threshold.
#[derive(Clone, Debug, Serialize, Deserialize)]
pub struct CoinStyleDef {
    /// Unique identifier.
    pub id: CoinStyleId,

    /// Display name.
    pub name: String,

    /// Display description.
    pub description: String,

    /// Total flips required to unlock. Zero means always unlocked.
    pub unlock_threshold: u32,
}

impl CoinStyleDef {
    /// Create a new style definition.
    pub fn new(
        id: CoinStyleId,
        name: impl Into<String>,
        description: impl Into<String>,
        unlock_threshold: u32,
    ) -> Self {
        Self {
            id,
            name: name.into(),
            description: description.into(),
            unlock_threshold,
        }
    }

    /// Whether this style is unlocked at the given flip count.
    #[must_use]
    pub fn is_unlocked(&self, total_flips: u32) -> bool {
        total_flips >= self.unlock_threshold
    }
}

/// Registry of coin styles with threshold queries.
#[derive(Clone, Debug, Serialize, Deserialize)]
pub struct StyleCatalog {
    styles: Vec<CoinStyleDef>,
}

impl StyleCatalog {
    /// Build a catalog from definitions.
    ///
    /// Panics if two definitions share an ID.
    #[must_use]
    pub fn new(styles: Vec<CoinStyleDef>) -> Self {
        for (i, a) in styles.iter().enumerate() {
            for b in &styles[i + 1..] {
                assert!(a.id != b.id, "Duplicate style ID {}", a.id);
            }
        }
        Self { styles }
    }

    /// The style catalog of the original widget.
    #[must_use]
    pub fn standard() -> Self {
        Self::new(vec![
            CoinStyleDef::new(CLASSIC, "Classic", "The traditional coin style", 0),
            CoinStyleDef::new(
                QUANTUM,
                "Quantum",
                "A futuristic quantum style with mesmerizing effects",
                0,
            ),
            CoinStyleDef::new(GALAXY, "Galaxy", "A cosmic-themed style", 5),
            CoinStyleDef::new(CRYPTO, "Crypto", "A digital currency style", 10),
            CoinStyleDef::new(ELEMENTAL, "Elemental", "A nature-inspired style", 15),
            CoinStyleDef::new(MATRIX, "Matrix", "A digital matrix style", 20),
            CoinStyleDef::new(RAINBOW, "Rainbow", "A colorful rainbow style", 25),
            CoinStyleDef::new(NEON, "Neon", "A bright neon style", 30),
            CoinStyleDef::new(CUSTOM, "Custom", "Your custom coin style", 0),
        ])
    }

    /// Get a style definition by ID.
    #[must_use]
    pub fn get(&self, id: CoinStyleId) -> Option<&CoinStyleDef> {
        self.styles.iter().find(|s| s.id == id)
    }

    /// Check if a style ID exists in the catalog.
    #[must_use]
    pub fn contains(&self, id: CoinStyleId) -> bool {
        self.get(id).is_some()
    }

    /// Number of styles in the catalog.
    #[must_use]
    pub fn len(&self) -> usize {
        self.styles.len()
    }

    /// Check if the catalog is empty.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.styles.is_empty()
    }

    /// Iterate over all style definitions.
    pub fn iter(&self) -> impl Iterator<Item = &CoinStyleDef> {
        self.styles.iter()
    }

    /// Number of styles unlocked at the given flip count.
    #[must_use]
    pub fn unlocked_count(&self, total_flips: u32) -> u32 {
        self.styles
            .iter()
            .filter(|s| s.is_unlocked(total_flips))
            .count() as u32
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_standard_catalog() {
        let catalog = StyleCatalog::standard();
        assert_eq!(catalog.len(), 9);
        assert!(catalog.contains(CLASSIC));
        assert!(catalog.contains(CUSTOM));
        assert!(!catalog.contains(CoinStyleId::new(99)));
    }

    #[test]
    fn test_unlock_threshold_boundary() {
        let catalog = StyleCatalog::standard();
        let galaxy = catalog.get(GALAXY).unwrap();

        assert!(!galaxy.is_unlocked(4));
        // Selectable the instant the count reaches the threshold
        assert!(galaxy.is_unlocked(5));
    }

    #[test]
    fn test_unlocked_count_progression() {
        let catalog = StyleCatalog::standard();

        // classic, quantum, custom have threshold 0
        assert_eq!(catalog.unlocked_count(0), 3);
        assert_eq!(catalog.unlocked_count(5), 4);
        assert_eq!(catalog.unlocked_count(10), 5);
        assert_eq!(catalog.unlocked_count(30), 9);
        assert_eq!(catalog.unlocked_count(1_000), 9);
    }

    #[test]
    #[should_panic(expected = "Duplicate style ID")]
    fn test_duplicate_id_panics() {
        let _ = StyleCatalog::new(vec![
            CoinStyleDef::new(CoinStyleId::new(1), "A", "", 0),
            CoinStyleDef::new(CoinStyleId::new(1), "B", "", 0),
        ]);
    }
}
