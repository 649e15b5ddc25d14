//! Growth rules: directions, result vectors, and ordered rule tables.

use crate::error::GridError;
use crate::pattern::{Neighborhood, Pattern};
use crate::symbol::Symbol;

#[cfg(feature = "serde")]
use serde::{Deserialize, Serialize};

/// Where a rule places a new cell relative to the matched cell.
///
/// `Center` replaces the matched cell's state in place; the four compass
/// directions insert a fresh cell next to it, shifting the rest of the row
/// or column one step toward the far boundary.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub enum Direction {
    /// Insert above, shifting rows above the target up.
    North,
    /// Insert to the left, shifting columns left of the target left.
    West,
    /// Replace the target cell's state in place.
    Center,
    /// Insert to the right, shifting columns right of the target right.
    East,
    /// Insert below, shifting rows below the target down.
    South,
}

impl Direction {
    /// All directions in result-vector order.
    pub const ALL: [Direction; 5] = [
        Direction::North,
        Direction::West,
        Direction::Center,
        Direction::East,
        Direction::South,
    ];

    /// The direction's result-vector index (0..=4).
    pub fn index(self) -> usize {
        match self {
            Direction::North => 0,
            Direction::West => 1,
            Direction::Center => 2,
            Direction::East => 3,
            Direction::South => 4,
        }
    }

    /// Converts a raw result-vector index.
    ///
    /// Indices outside `0..=4` fail with [`GridError::InvalidDirection`].
    pub fn from_index(index: usize) -> Result<Self, GridError> {
        Self::ALL
            .get(index)
            .copied()
            .ok_or(GridError::InvalidDirection(index))
    }
}

/// A rule's result vector: up to five insertions, one per direction.
///
/// A present entry at a direction triggers one insertion there; an absent
/// entry means no action in that direction.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub struct Growth([Option<Symbol>; 5]);

impl Growth {
    /// A result vector with no insertions.
    pub fn none() -> Self {
        Self::default()
    }

    /// A result vector that only replaces the matched cell's state.
    pub fn replace(state: impl Into<Symbol>) -> Self {
        Self::none().with(Direction::Center, state)
    }

    /// Sets the insertion for one direction, builder-style.
    pub fn with(mut self, direction: Direction, state: impl Into<Symbol>) -> Self {
        self.0[direction.index()] = Some(state.into());
        self
    }

    /// The insertion planned for a direction, if any.
    pub fn get(&self, direction: Direction) -> Option<&Symbol> {
        self.0[direction.index()].as_ref()
    }

    /// True when no direction has an insertion.
    pub fn is_empty(&self) -> bool {
        self.0.iter().all(Option::is_none)
    }

    /// Present insertions in result-vector order (north, west, center,
    /// east, south).
    pub fn iter(&self) -> impl Iterator<Item = (Direction, &Symbol)> {
        Direction::ALL
            .into_iter()
            .zip(&self.0)
            .filter_map(|(direction, state)| state.as_ref().map(|s| (direction, s)))
    }
}

/// An insertion-ordered mapping from [`Pattern`] to [`Growth`].
///
/// Iteration order is insertion order, and that order is the sole
/// tie-break between fuzzy-matching rules. Re-inserting an existing
/// pattern overwrites its result in place, keeping its position.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub struct RuleTable {
    entries: Vec<(Pattern, Growth)>,
}

impl RuleTable {
    /// Creates an empty rule table.
    pub fn new() -> Self {
        Self::default()
    }

    /// Adds or overwrites one rule, preserving the order of other entries.
    pub fn insert(&mut self, pattern: Pattern, growth: Growth) {
        match self.entries.iter_mut().find(|(p, _)| *p == pattern) {
            Some(entry) => entry.1 = growth,
            None => self.entries.push((pattern, growth)),
        }
    }

    /// Number of rules in the table.
    pub fn len(&self) -> usize {
        self.entries.len()
    }

    /// True when the table has no rules.
    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    /// The rules in insertion order.
    pub fn entries(&self) -> impl Iterator<Item = (&Pattern, &Growth)> {
        self.entries.iter().map(|(p, g)| (p, g))
    }

    /// Resolves an observed neighborhood to a result vector.
    ///
    /// An exact (verbatim) entry always wins. Otherwise the first entry,
    /// by insertion order, whose pattern fuzzy-matches the key is used.
    pub fn resolve(&self, key: &Neighborhood) -> Option<&Growth> {
        if let Some((_, growth)) = self.entries.iter().find(|(p, _)| p.is_exact_for(key)) {
            return Some(growth);
        }
        self.entries
            .iter()
            .find(|(p, _)| p.matches(key).matched)
            .map(|(_, growth)| growth)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn key(symbols: [&str; 9]) -> Neighborhood {
        Neighborhood::new(symbols.map(Symbol::from))
    }

    #[test]
    fn test_direction_indices_round_trip() {
        for direction in Direction::ALL {
            assert_eq!(Direction::from_index(direction.index()), Ok(direction));
        }
    }

    #[test]
    fn test_direction_rejects_bad_index() {
        assert_eq!(
            Direction::from_index(5),
            Err(GridError::InvalidDirection(5))
        );
    }

    #[test]
    fn test_growth_builder() {
        let growth = Growth::none()
            .with(Direction::North, "n")
            .with(Direction::South, "s");

        assert_eq!(growth.get(Direction::North), Some(&Symbol::new("n")));
        assert_eq!(growth.get(Direction::Center), None);
        assert!(!growth.is_empty());
        assert!(Growth::none().is_empty());

        let order: Vec<Direction> = growth.iter().map(|(d, _)| d).collect();
        assert_eq!(order, vec![Direction::North, Direction::South]);
    }

    #[test]
    fn test_exact_beats_fuzzy() {
        let k = key(["", "", "", "", "A", "", "", "", ""]);

        let mut table = RuleTable::new();
        // Inserted first, fuzzy-matches everything.
        table.insert(Pattern::any().with(4, "A"), Growth::replace("fuzzy"));
        // Inserted later, but verbatim for the key.
        table.insert(Pattern::exact(&k), Growth::replace("exact"));

        // The first rule is also exact for this key (wildcards over empty
        // observations), so it still wins the exact pass.
        let busy = key(["x", "", "", "", "A", "", "", "", ""]);
        let mut table2 = RuleTable::new();
        table2.insert(
            Pattern::any().with(0, "other").with(4, "A"),
            Growth::replace("miss"),
        );
        table2.insert(
            Pattern::any().with(4, "A"),
            Growth::replace("fuzzy"),
        );
        table2.insert(Pattern::exact(&busy), Growth::replace("exact"));

        assert_eq!(table2.resolve(&busy), Some(&Growth::replace("exact")));
        assert_eq!(table.resolve(&k), Some(&Growth::replace("fuzzy")));
    }

    #[test]
    fn test_first_fuzzy_match_wins() {
        let k = key(["x", "", "", "", "A", "", "", "", ""]);

        let mut table = RuleTable::new();
        table.insert(Pattern::any().with(4, "A"), Growth::replace("first"));
        table.insert(Pattern::any().with(0, "x"), Growth::replace("second"));

        assert_eq!(table.resolve(&k), Some(&Growth::replace("first")));
    }

    #[test]
    fn test_insert_overwrites_in_place() {
        let pattern_a = Pattern::any().with(4, "A");
        let pattern_b = Pattern::any().with(4, "B");

        let mut table = RuleTable::new();
        table.insert(pattern_a.clone(), Growth::replace("old"));
        table.insert(pattern_b, Growth::replace("b"));
        table.insert(pattern_a.clone(), Growth::replace("new"));

        assert_eq!(table.len(), 2);
        let (first_pattern, first_growth) = table.entries().next().unwrap();
        assert_eq!(first_pattern, &pattern_a);
        assert_eq!(first_growth, &Growth::replace("new"));
    }

    #[test]
    fn test_empty_table_never_matches() {
        let table = RuleTable::new();
        assert_eq!(table.resolve(&Neighborhood::default()), None);
    }

    #[test]
    fn test_no_rule_applies() {
        let mut table = RuleTable::new();
        table.insert(Pattern::any().with(4, "A"), Growth::replace("a"));

        let k = key(["", "", "", "", "B", "", "", "", ""]);
        assert_eq!(table.resolve(&k), None);
    }
}
