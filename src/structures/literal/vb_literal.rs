//! Implementation of the literal trait for the [VBLiteral] structure.

use std::hash::Hash;

use crate::structures::{
    literal::{CLiteral, Literal, VBLiteral},
    variable::Variable,
};

impl Literal for VBLiteral {
    fn new(variable: impl Into<Variable>, polarity: bool) -> Self {
        Self {
            variable: variable.into(),
            polarity,
        }
    }

    fn negate(&self) -> Self {
        Self {
            variable: self.variable.clone(),
            polarity: !self.polarity,
        }
    }

    fn variable(&self) -> &str {
        &self.variable
    }

    fn polarity(&self) -> bool {
        self.polarity
    }

    fn canonical(&self) -> CLiteral {
        self.clone()
    }
}

impl PartialOrd for VBLiteral {
    fn partial_cmp(&self, other: &Self) -> Option<std::cmp::Ordering> {
        Some(self.cmp(other))
    }
}

/// Literals are ordered by variable, and then by polarity, with negative first.
impl Ord for VBLiteral {
    fn cmp(&self, other: &Self) -> std::cmp::Ordering {
        match self.variable.cmp(&other.variable) {
            std::cmp::Ordering::Equal => self.polarity.cmp(&other.polarity),
            ordering => ordering,
        }
    }
}

impl PartialEq for VBLiteral {
    fn eq(&self, other: &Self) -> bool {
        self.polarity == other.polarity && self.variable == other.variable
    }
}

impl Eq for VBLiteral {}

impl Hash for VBLiteral {
    fn hash<H: std::hash::Hasher>(&self, state: &mut H) {
        self.variable.hash(state);
        self.polarity.hash(state);
    }
}

impl std::fmt::Display for VBLiteral {
    fn fmt(&self, f: &mut std::fmt::Formatter) -> std::fmt::Result {
        match self.polarity {
            true => write!(f, "{}", self.variable),
            false => write!(f, "¬{}", self.variable),
        }
    }
}
