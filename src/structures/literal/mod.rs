//! Literals, aka. variables paired with a (boolean) polarity.
//!
//! The canonical representation of a literal pairs a [Variable] with a [bool], with `true` read as the variable and `false` as its negation.
//!
//! ```rust
//! # use tseytin::structures::literal::{CLiteral, Literal};
//! let literal = CLiteral::new("x1", true);
//!
//! assert!(literal.polarity());
//! assert_eq!(literal.variable(), "x1");
//!
//! assert_eq!(literal.to_string(), "x1");
//! assert_eq!(literal.negate().to_string(), "¬x1");
//! ```
//!
//! [Display](std::fmt::Display) uses the negation glyph of the equation listings, while DIMACS-like renderings mark polarity with a `-` prefix (see [Clause](crate::structures::clause::Clause)).

mod vb_literal;

use crate::structures::variable::Variable;

/// Methods for accessing the variable and polarity of a literal, etc.
pub trait Literal: std::cmp::Ord + std::hash::Hash {
    /// A fresh literal, pairing a variable with a polarity.
    fn new(variable: impl Into<Variable>, polarity: bool) -> Self;

    /// The negation of the literal.
    fn negate(&self) -> Self;

    /// The variable of the literal.
    fn variable(&self) -> &str;

    /// The polarity of the literal.
    fn polarity(&self) -> bool;

    /// The literal in its canonical representation.
    fn canonical(&self) -> CLiteral;
}

/// The representation of a literal as a variable paired with a boolean.
#[derive(Clone, Debug)]
pub struct VBLiteral {
    /// The variable of the literal.
    variable: Variable,

    /// The polarity of the literal.
    polarity: bool,
}

/// The canonical representation of a literal.
pub type CLiteral = VBLiteral;
