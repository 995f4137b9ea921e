//! Implementation of the clause trait for a vector of literals.

use crate::structures::{
    clause::{CClause, Clause, VClause},
    literal::{CLiteral, Literal},
    valuation::Valuation,
};

impl Clause for VClause {
    fn as_string(&self) -> String {
        let mut the_string = String::default();
        for literal in self {
            the_string.push_str(format!("{literal} ∨ ").as_str());
        }
        the_string.pop();
        the_string.pop();
        the_string.pop();
        the_string
    }

    fn as_dimacs(&self, zero: bool) -> String {
        let mut the_string = String::new();
        for literal in self {
            let the_representation = match literal.polarity() {
                true => format!("{} ", literal.variable()),
                false => format!("-{} ", literal.variable()),
            };
            the_string.push_str(the_representation.as_str());
        }
        if zero {
            the_string += "0";
            the_string
        } else {
            the_string.pop();
            the_string
        }
    }

    fn value_on(&self, valuation: &impl Valuation) -> Option<bool> {
        let mut the_value = Some(false);
        for literal in self {
            match valuation.value_of(literal.variable()) {
                Some(value) if value == literal.polarity() => return Some(true),
                Some(_) => continue,
                None => the_value = None,
            }
        }
        the_value
    }

    fn literals(&self) -> impl Iterator<Item = &CLiteral> {
        self.iter()
    }

    fn size(&self) -> usize {
        self.len()
    }

    fn variables(&self) -> impl Iterator<Item = &str> {
        self.iter().map(|literal| literal.variable())
    }

    fn canonical(self) -> CClause {
        self
    }
}
