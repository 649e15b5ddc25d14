//! Context-sensitive growth automaton over a fixed-size 2D grid.
//!
//! Each cell carries a state [`Symbol`] and a table of rules keyed by its
//! 3×3 Moore neighborhood. An update pass matches every rule-bearing
//! cell's neighborhood against its table (exact entries first, then
//! wildcard-tolerant ones in insertion order), and the winning rule's
//! [`Growth`] plants up to five new cells: one in-place replacement and
//! one insertion per compass direction. A directional insertion shifts
//! part of the row or column one step toward the grid boundary and
//! discards the boundary-most cell, so the grid never changes size.
//!
//! Cells spawned by insertion share their origin cell's rule table, which
//! is how behavior propagates through a growing structure.
//!
//! # Example
//!
//! ```
//! use loam_automata::{Direction, Grid, Growth, Pattern};
//!
//! let mut grid = Grid::new(3, 3);
//! grid.set_state(1, 1, "seed")?;
//! grid.add_rule(
//!     1,
//!     1,
//!     Pattern::any().with(4, "seed"),
//!     Growth::replace("stem").with(Direction::North, "bud"),
//! )?;
//!
//! grid.update_region(0, 0, 3, 3);
//!
//! assert_eq!(grid.state(1, 1)?.as_str(), "stem");
//! assert_eq!(grid.state(1, 0)?.as_str(), "bud");
//! # Ok::<(), loam_automata::GridError>(())
//! ```

mod cell;
mod error;
mod grid;
mod pattern;
mod rule;
mod symbol;

pub use cell::{Cell, RuleHandle};
pub use error::GridError;
pub use grid::Grid;
pub use pattern::{wild_match, Neighborhood, Pattern, Slot, WildMatch, NEIGHBORHOOD_LEN};
pub use rule::{Direction, Growth, RuleTable};
pub use symbol::Symbol;
