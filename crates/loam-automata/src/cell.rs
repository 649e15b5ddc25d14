//! Grid cells: a state symbol plus a shared rule table.

use std::cell::{Ref, RefCell};
use std::rc::Rc;

use crate::pattern::Pattern;
use crate::rule::{Growth, RuleTable};
use crate::symbol::Symbol;

/// Shared-ownership handle to a cell's rule table.
///
/// Cells spawned by insertion hold the *same* table as their origin cell,
/// so adding a rule through any of them is visible to all of them.
pub type RuleHandle = Rc<RefCell<RuleTable>>;

/// The smallest unit of grid state: a symbol and its rule table.
#[derive(Debug, Clone)]
pub struct Cell {
    state: Symbol,
    rules: RuleHandle,
}

impl Cell {
    /// Creates a cell with its own private rule table.
    pub fn new(state: impl Into<Symbol>, rules: RuleTable) -> Self {
        Self {
            state: state.into(),
            rules: Rc::new(RefCell::new(rules)),
        }
    }

    /// Creates a cell sharing an existing rule table.
    pub fn with_shared_rules(state: impl Into<Symbol>, rules: RuleHandle) -> Self {
        Self {
            state: state.into(),
            rules,
        }
    }

    /// The cell's current state.
    pub fn state(&self) -> &Symbol {
        &self.state
    }

    /// Sets the cell's state.
    pub fn set_state(&mut self, state: impl Into<Symbol>) {
        self.state = state.into();
    }

    /// Read access to the cell's rule table.
    pub fn rules(&self) -> Ref<'_, RuleTable> {
        self.rules.borrow()
    }

    /// A shared handle to the cell's rule table.
    pub fn rules_handle(&self) -> RuleHandle {
        Rc::clone(&self.rules)
    }

    /// Replaces the cell's rules with a fresh private table.
    ///
    /// Cells that shared the previous table keep it; this cell detaches.
    pub fn set_rules(&mut self, rules: RuleTable) {
        self.rules = Rc::new(RefCell::new(rules));
    }

    /// Rebinds the cell to an existing shared table.
    pub fn set_rules_shared(&mut self, rules: RuleHandle) {
        self.rules = rules;
    }

    /// Adds or overwrites one rule in the cell's table.
    ///
    /// The change is visible to every cell sharing the table.
    pub fn add_rule(&mut self, pattern: Pattern, growth: Growth) {
        self.rules.borrow_mut().insert(pattern, growth);
    }
}

impl Default for Cell {
    /// An empty-state cell with its own empty rule table.
    fn default() -> Self {
        Self::new(Symbol::empty(), RuleTable::new())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_cell() {
        let cell = Cell::default();
        assert!(cell.state().is_empty());
        assert!(cell.rules().is_empty());
    }

    #[test]
    fn test_set_state() {
        let mut cell = Cell::default();
        cell.set_state("A");
        assert_eq!(cell.state(), &Symbol::new("A"));
    }

    #[test]
    fn test_shared_rules_see_additions() {
        let mut origin = Cell::new("A", RuleTable::new());
        let spawned = Cell::with_shared_rules("B", origin.rules_handle());

        origin.add_rule(Pattern::any(), Growth::replace("C"));

        assert_eq!(spawned.rules().len(), 1);
        assert!(Rc::ptr_eq(&origin.rules_handle(), &spawned.rules_handle()));
    }

    #[test]
    fn test_set_rules_detaches() {
        let mut origin = Cell::new("A", RuleTable::new());
        let mut spawned = Cell::with_shared_rules("B", origin.rules_handle());

        spawned.set_rules(RuleTable::new());
        origin.add_rule(Pattern::any(), Growth::replace("C"));

        assert!(spawned.rules().is_empty());
        assert!(!Rc::ptr_eq(&origin.rules_handle(), &spawned.rules_handle()));
    }

    #[test]
    fn test_clone_shares_rules() {
        let mut cell = Cell::default();
        let copy = cell.clone();

        cell.add_rule(Pattern::any(), Growth::none());
        assert_eq!(copy.rules().len(), 1);
    }
}
