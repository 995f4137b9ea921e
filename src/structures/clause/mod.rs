//! Clauses, aka. collections of literals, interpreted as the disjunction of those literals.
//!
//! The canonical representation of a clause is a vector of literals, in which literals may repeat and order is preserved.
//!
//! ```rust
//! # use tseytin::structures::clause::Clause;
//! # use tseytin::structures::literal::{CLiteral, Literal};
//! let clause = vec![CLiteral::new("x3", false), CLiteral::new("x1", true)];
//!
//! assert_eq!(clause.size(), 2);
//! assert_eq!(clause.as_string(), "¬x3 ∨ x1");
//! assert_eq!(clause.as_dimacs(true), "-x3 x1 0");
//! ```
//!
//! The empty clause is always false.

mod v_clause;

use crate::structures::{literal::CLiteral, valuation::Valuation};

/// The clause trait.
pub trait Clause {
    /// A string representation of the clause, with literals joined by the disjunction glyph.
    fn as_string(&self) -> String;

    /// The clause as a DIMACS-like line, with the terminating `0` as optional.
    ///
    /// The rendering is DIMACS-*like*: variable names are written as they stand rather than being mapped to integers, with a `-` prefix under negation.
    fn as_dimacs(&self, zero: bool) -> String;

    /// The value of the clause on the given valuation, so far as the valuation determines a value.
    ///
    /// - `Some(true)`, if some literal of the clause has a matching value.
    /// - `Some(false)`, if every literal of the clause has a conflicting value.
    /// - `None`, otherwise.
    fn value_on(&self, valuation: &impl Valuation) -> Option<bool>;

    /// An iterator over the literals of the clause, in clause order.
    fn literals(&self) -> impl Iterator<Item = &CLiteral>;

    /// The number of literals in the clause.
    fn size(&self) -> usize;

    /// An iterator over the variables of the clause, in clause order.
    fn variables(&self) -> impl Iterator<Item = &str>;

    /// The clause in its canonical representation.
    fn canonical(self) -> CClause;
}

/// The representation of a clause as a vector of literals.
pub type VClause = Vec<CLiteral>;

/// The canonical representation of a clause.
pub type CClause = VClause;
