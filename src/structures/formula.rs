//! Formulas, aka. collections of clauses, interpreted as the conjunction of those clauses.
//!
//! The canonical representation of a formula is a vector of clauses, in which clauses may repeat and order is preserved.
//!
//! ```rust
//! # use tseytin::structures::formula::{Cnf, Formula};
//! # use tseytin::structures::literal::{CLiteral, Literal};
//! let formula: Formula = vec![
//!     vec![CLiteral::new("x3", true)],
//!     vec![CLiteral::new("x3", false), CLiteral::new("x1", true)],
//! ];
//!
//! assert_eq!(formula.clause_count(), 2);
//! assert_eq!(formula.as_dimacs(), "x3 0\n-x3 x1 0");
//! ```
//!
//! The empty formula is always true, and is rendered as the empty string.

use std::ops::Deref;

use crate::structures::{
    clause::{CClause, Clause},
    valuation::Valuation,
};

/// The representation of a formula as a vector of clauses.
pub type Formula = Vec<CClause>;

/// The formula trait, implemented for anything which dereferences to a slice of clauses.
pub trait Cnf {
    /// A string representation of the formula, one clause per line with literals joined by the disjunction glyph.
    fn as_string(&self) -> String;

    /// The formula as DIMACS-like lines, one clause per line, each terminated by `0`.
    fn as_dimacs(&self) -> String;

    /// The number of clauses in the formula.
    fn clause_count(&self) -> usize;

    /// The value of the formula on the given valuation, so far as the valuation determines a value.
    ///
    /// - `Some(true)`, if every clause of the formula has a matching value.
    /// - `Some(false)`, if some clause of the formula has a conflicting value.
    /// - `None`, otherwise.
    fn value_on(&self, valuation: &impl Valuation) -> Option<bool>;
}

impl<T: Deref<Target = [CClause]>> Cnf for T {
    fn as_string(&self) -> String {
        let mut the_string = String::default();
        for clause in self.deref() {
            the_string.push_str(clause.as_string().as_str());
            the_string.push('\n');
        }
        the_string.pop();
        the_string
    }

    fn as_dimacs(&self) -> String {
        let mut the_string = String::default();
        for clause in self.deref() {
            the_string.push_str(clause.as_dimacs(true).as_str());
            the_string.push('\n');
        }
        the_string.pop();
        the_string
    }

    fn clause_count(&self) -> usize {
        self.len()
    }

    fn value_on(&self, valuation: &impl Valuation) -> Option<bool> {
        let mut the_value = Some(true);
        for clause in self.deref() {
            match clause.value_on(valuation) {
                Some(true) => continue,
                Some(false) => return Some(false),
                None => the_value = None,
            }
        }
        the_value
    }
}
