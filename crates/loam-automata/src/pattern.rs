//! Neighborhood keys and wildcard patterns.
//!
//! A cell's context is its 3×3 Moore window, read row-major:
//! NW, N, NE, W, SELF, E, SW, S, SE (index 4 is the cell itself). Rules
//! match that window against a nine-slot pattern where each slot is either
//! a concrete symbol or a wildcard.

use crate::error::GridError;
use crate::symbol::Symbol;

#[cfg(feature = "serde")]
use serde::{Deserialize, Serialize};

/// Number of positions in a neighborhood key or pattern.
pub const NEIGHBORHOOD_LEN: usize = 9;

/// The 9 observed symbols of a 3×3 Moore window, row-major.
#[derive(Debug, Clone, Default, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub struct Neighborhood([Symbol; NEIGHBORHOOD_LEN]);

impl Neighborhood {
    /// Index of the center (SELF) position.
    pub const CENTER: usize = 4;

    /// Creates a neighborhood from 9 symbols in row-major order.
    pub fn new(symbols: [Symbol; NEIGHBORHOOD_LEN]) -> Self {
        Self(symbols)
    }

    /// The observed symbols in row-major order.
    pub fn symbols(&self) -> &[Symbol; NEIGHBORHOOD_LEN] {
        &self.0
    }

    /// The cell's own state within the window.
    pub fn center(&self) -> &Symbol {
        &self.0[Self::CENTER]
    }
}

/// One position of a [`Pattern`]: a concrete symbol or a wildcard.
///
/// The wildcard is tagged rather than encoded as a sentinel symbol, so an
/// empty symbol in a pattern still means "match the empty symbol exactly".
#[derive(Debug, Clone, Default, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub enum Slot {
    /// Matches any observed symbol.
    #[default]
    Any,
    /// Matches exactly this symbol.
    Is(Symbol),
}

impl Slot {
    /// Returns true if the slot is the wildcard.
    pub fn is_any(&self) -> bool {
        matches!(self, Slot::Any)
    }
}

impl From<Symbol> for Slot {
    fn from(value: Symbol) -> Self {
        Slot::Is(value)
    }
}

impl From<&str> for Slot {
    fn from(value: &str) -> Self {
        Slot::Is(Symbol::from(value))
    }
}

/// A nine-slot rule pattern, laid out like a [`Neighborhood`].
#[derive(Debug, Clone, Default, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub struct Pattern([Slot; NEIGHBORHOOD_LEN]);

impl Pattern {
    /// A pattern of nine wildcards.
    pub fn any() -> Self {
        Self::default()
    }

    /// A pattern matching the given key and nothing else.
    pub fn exact(key: &Neighborhood) -> Self {
        Self(key.symbols().clone().map(Slot::Is))
    }

    /// Creates a pattern from 9 slots in row-major order.
    pub fn new(slots: [Slot; NEIGHBORHOOD_LEN]) -> Self {
        Self(slots)
    }

    /// Replaces one slot, builder-style.
    ///
    /// # Panics
    ///
    /// Panics if `index >= 9`.
    pub fn with(mut self, index: usize, slot: impl Into<Slot>) -> Self {
        self.0[index] = slot.into();
        self
    }

    /// The pattern slots in row-major order.
    pub fn slots(&self) -> &[Slot; NEIGHBORHOOD_LEN] {
        &self.0
    }

    /// Wildcard-tolerant comparison against an observed key.
    pub fn matches(&self, key: &Neighborhood) -> WildMatch {
        match_positions(key.symbols(), &self.0)
    }

    /// Returns true if this pattern is the key, verbatim.
    ///
    /// Every concrete slot must equal the observed symbol and every
    /// wildcard slot must observe the empty symbol. This is the
    /// tagged-slot equivalent of a literal rule-table key hit, and it is
    /// what gives exact entries priority over fuzzy matching.
    pub fn is_exact_for(&self, key: &Neighborhood) -> bool {
        self.0
            .iter()
            .zip(key.symbols())
            .all(|(slot, observed)| match slot {
                Slot::Any => observed.is_empty(),
                Slot::Is(symbol) => symbol == observed,
            })
    }
}

/// Outcome of a wildcard comparison.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct WildMatch {
    /// True when no concrete slot disagreed with the observation.
    pub matched: bool,
    /// Per position: true when a wildcard slot absorbed a symbol that
    /// differs from the empty symbol. Stays false where the observation
    /// is itself empty, and always for concrete slots.
    pub wildcard_hits: [bool; NEIGHBORHOOD_LEN],
}

/// Compares an observed neighborhood against a pattern, slice form.
///
/// Both slices must have length 9. All positions are evaluated even after
/// a mismatch, so `wildcard_hits` is always fully populated.
pub fn wild_match(observed: &[Symbol], pattern: &[Slot]) -> Result<WildMatch, GridError> {
    if observed.len() != NEIGHBORHOOD_LEN {
        return Err(GridError::NeighborhoodLen(observed.len()));
    }
    if pattern.len() != NEIGHBORHOOD_LEN {
        return Err(GridError::PatternLen(pattern.len()));
    }
    Ok(match_positions(observed, pattern))
}

/// Position-by-position comparison. Callers guarantee equal lengths.
fn match_positions(observed: &[Symbol], pattern: &[Slot]) -> WildMatch {
    let mut matched = true;
    let mut wildcard_hits = [false; NEIGHBORHOOD_LEN];

    for (i, (slot, symbol)) in pattern.iter().zip(observed).enumerate() {
        match slot {
            Slot::Is(expected) => {
                if symbol != expected {
                    matched = false;
                }
            }
            Slot::Any => {
                if !symbol.is_empty() {
                    wildcard_hits[i] = true;
                }
            }
        }
    }

    WildMatch {
        matched,
        wildcard_hits,
    }
}
