/*!
Gates, aka. equations fixing the value of an output variable against up to two input variables.

A gate is an equation `output ↔ f(inputs)` for some boolean function f named by a [GateKind].
Variants carry exactly the inputs their kind takes: a negation holds one input, the constant true none, and every other kind two.

Gates display the way the equation reads:

```rust
# use tseytin::structures::gate::Gate;
assert_eq!(Gate::and("x3", "x1", "x2").to_string(), "x3 ↔ x1 ∧ x2");
assert_eq!(Gate::not("y", "x1").to_string(), "y ↔ ¬x1");
assert_eq!(Gate::truth("t").to_string(), "t ↔ true");
```

Gates place no constraint on where their variables come from.
In particular, the output of one gate may be an input of another, a variable may repeat across the slots of a single gate, and nothing rules out a collection of gates whose equations cannot be jointly satisfied.
*/

mod kind;
pub use kind::GateKind;

use crate::{
    structures::{
        valuation::Valuation,
        variable::{self, Variable},
    },
    types::err,
};

/// A gate equation, `output ↔ f(inputs)`.
#[derive(Clone, Debug, Eq, PartialEq)]
pub enum Gate {
    /// `output ↔ left ∧ right`
    And {
        output: Variable,
        left: Variable,
        right: Variable,
    },

    /// `output ↔ left ∨ right`
    Or {
        output: Variable,
        left: Variable,
        right: Variable,
    },

    /// `output ↔ ¬input`
    Not { output: Variable, input: Variable },

    /// `output ↔ left ⊕ right`
    Xor {
        output: Variable,
        left: Variable,
        right: Variable,
    },

    /// `output ↔ (left ↔ right)`
    Xnor {
        output: Variable,
        left: Variable,
        right: Variable,
    },

    /// `output ↔ left ↓ right`
    Nor {
        output: Variable,
        left: Variable,
        right: Variable,
    },

    /// `output ↔ (left → right)`
    Implication {
        output: Variable,
        left: Variable,
        right: Variable,
    },

    /// `output ↔ ⊤`
    True { output: Variable },
}

impl Gate {
    /// An `output ↔ left ∧ right` gate.
    pub fn and(
        output: impl Into<Variable>,
        left: impl Into<Variable>,
        right: impl Into<Variable>,
    ) -> Self {
        Self::And {
            output: output.into(),
            left: left.into(),
            right: right.into(),
        }
    }

    /// An `output ↔ left ∨ right` gate.
    pub fn or(
        output: impl Into<Variable>,
        left: impl Into<Variable>,
        right: impl Into<Variable>,
    ) -> Self {
        Self::Or {
            output: output.into(),
            left: left.into(),
            right: right.into(),
        }
    }

    /// An `output ↔ ¬input` gate.
    pub fn not(output: impl Into<Variable>, input: impl Into<Variable>) -> Self {
        Self::Not {
            output: output.into(),
            input: input.into(),
        }
    }

    /// An `output ↔ left ⊕ right` gate.
    pub fn xor(
        output: impl Into<Variable>,
        left: impl Into<Variable>,
        right: impl Into<Variable>,
    ) -> Self {
        Self::Xor {
            output: output.into(),
            left: left.into(),
            right: right.into(),
        }
    }

    /// An `output ↔ (left ↔ right)` gate.
    pub fn xnor(
        output: impl Into<Variable>,
        left: impl Into<Variable>,
        right: impl Into<Variable>,
    ) -> Self {
        Self::Xnor {
            output: output.into(),
            left: left.into(),
            right: right.into(),
        }
    }

    /// An `output ↔ left ↓ right` gate.
    pub fn nor(
        output: impl Into<Variable>,
        left: impl Into<Variable>,
        right: impl Into<Variable>,
    ) -> Self {
        Self::Nor {
            output: output.into(),
            left: left.into(),
            right: right.into(),
        }
    }

    /// An `output ↔ (left → right)` gate.
    pub fn implication(
        output: impl Into<Variable>,
        left: impl Into<Variable>,
        right: impl Into<Variable>,
    ) -> Self {
        Self::Implication {
            output: output.into(),
            left: left.into(),
            right: right.into(),
        }
    }

    /// An `output ↔ ⊤` gate.
    pub fn truth(output: impl Into<Variable>) -> Self {
        Self::True {
            output: output.into(),
        }
    }

    /// The kind of the gate.
    pub fn kind(&self) -> GateKind {
        match self {
            Self::And { .. } => GateKind::And,
            Self::Or { .. } => GateKind::Or,
            Self::Not { .. } => GateKind::Not,
            Self::Xor { .. } => GateKind::Xor,
            Self::Xnor { .. } => GateKind::Xnor,
            Self::Nor { .. } => GateKind::Nor,
            Self::Implication { .. } => GateKind::Implication,
            Self::True { .. } => GateKind::True,
        }
    }

    /// The output variable of the gate.
    pub fn output(&self) -> &str {
        match self {
            Self::And { output, .. }
            | Self::Or { output, .. }
            | Self::Not { output, .. }
            | Self::Xor { output, .. }
            | Self::Xnor { output, .. }
            | Self::Nor { output, .. }
            | Self::Implication { output, .. }
            | Self::True { output } => output,
        }
    }

    /// An iterator over the input variables of the gate, in slot order.
    pub fn inputs(&self) -> impl Iterator<Item = &str> {
        let the_inputs = match self {
            Self::True { .. } => vec![],

            Self::Not { input, .. } => vec![input.as_str()],

            Self::And { left, right, .. }
            | Self::Or { left, right, .. }
            | Self::Xor { left, right, .. }
            | Self::Xnor { left, right, .. }
            | Self::Nor { left, right, .. }
            | Self::Implication { left, right, .. } => vec![left.as_str(), right.as_str()],
        };
        the_inputs.into_iter()
    }

    /// Verification that every variable of the gate is [writable](crate::structures::variable::writable), with the first failure reported.
    ///
    /// Checks are made before any clauses are generated, so a malformed gate fails a transformation with no clauses emitted.
    pub fn check(&self) -> Result<(), err::MalformedGate> {
        if !variable::writable(self.output()) {
            return Err(match self.output().is_empty() {
                true => err::MalformedGate::EmptyOutput,
                false => err::MalformedGate::UnwritableVariable(self.output().to_owned()),
            });
        }

        for input in self.inputs() {
            if !variable::writable(input) {
                return Err(match input.is_empty() {
                    true => err::MalformedGate::EmptyInput,
                    false => err::MalformedGate::UnwritableVariable(input.to_owned()),
                });
            }
        }

        Ok(())
    }

    /// Whether the equation of the gate holds on the given valuation, so far as the valuation determines this.
    ///
    /// `None`, if some variable of the gate lacks a value.
    pub fn holds_on(&self, valuation: &impl Valuation) -> Option<bool> {
        let output_value = valuation.value_of(self.output())?;

        let function_value = match self {
            Self::And { left, right, .. } => {
                valuation.value_of(left)? && valuation.value_of(right)?
            }

            Self::Or { left, right, .. } => valuation.value_of(left)? || valuation.value_of(right)?,

            Self::Not { input, .. } => !valuation.value_of(input)?,

            Self::Xor { left, right, .. } => {
                valuation.value_of(left)? != valuation.value_of(right)?
            }

            Self::Xnor { left, right, .. } => {
                valuation.value_of(left)? == valuation.value_of(right)?
            }

            Self::Nor { left, right, .. } => {
                !(valuation.value_of(left)? || valuation.value_of(right)?)
            }

            Self::Implication { left, right, .. } => {
                !valuation.value_of(left)? || valuation.value_of(right)?
            }

            Self::True { .. } => true,
        };

        Some(output_value == function_value)
    }
}

impl std::fmt::Display for Gate {
    fn fmt(&self, f: &mut std::fmt::Formatter) -> std::fmt::Result {
        match self {
            Self::Not { output, input } => write!(f, "{output} ↔ ¬{input}"),

            Self::True { output } => write!(f, "{output} ↔ true"),

            Self::And { output, left, right }
            | Self::Or { output, left, right }
            | Self::Xor { output, left, right }
            | Self::Xnor { output, left, right }
            | Self::Nor { output, left, right }
            | Self::Implication { output, left, right } => {
                write!(f, "{output} ↔ {left} {} {right}", self.kind().symbol())
            }
        }
    }
}
