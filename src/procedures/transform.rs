/*!
The transformation of gates to clauses, due to Tseytin.

# Overview

Each gate is an equation `output ↔ f(inputs)`, and for each gate a fixed handful of clauses is emitted whose conjunction holds on a valuation exactly when the equation holds on that valuation.
As the clauses for a gate mention only the variables of that gate, the clauses for a collection of gates are satisfiable together exactly when the equations are, and likewise for each subcollection.

The clauses per kind, with `A` the output and `B`, `C` the inputs (`C` alone for a negation):

| Kind | Clauses |
|------|---------|
| And | ¬A ∨ B, ¬A ∨ C, A ∨ ¬B ∨ ¬C |
| Or | A ∨ ¬B, A ∨ ¬C, ¬A ∨ B ∨ C |
| Not | ¬A ∨ ¬C, A ∨ C |
| Xor | ¬A ∨ B ∨ C, ¬A ∨ ¬B ∨ ¬C, A ∨ ¬B ∨ C, A ∨ B ∨ ¬C |
| Xnor | ¬A ∨ ¬B ∨ C, ¬A ∨ B ∨ ¬C, A ∨ ¬B ∨ ¬C, A ∨ B ∨ C |
| Nor | ¬A ∨ ¬B, ¬A ∨ ¬C, A ∨ B ∨ C |
| Implication | ¬A ∨ ¬B ∨ C, A ∨ B, A ∨ ¬C |
| True | A |

Each row may be read off the truth table of its kind: every assignment on which the equation fails falsifies some clause of the row, and every assignment on which the equation holds satisfies each clause.

No analysis accompanies the emission.
Clauses are not deduplicated, a variable repeated across the slots of a gate is kept as it stands, and clauses appear in the order given above, gate by gate in the order gates were given.

# Example

```rust
# use tseytin::procedures::transform;
# use tseytin::structures::clause::Clause;
# use tseytin::structures::formula::Cnf;
# use tseytin::structures::gate::Gate;
let gates = vec![Gate::and("x3", "x1", "x2"), Gate::not("y", "x3")];

let formula = transform(&gates).unwrap();

assert_eq!(formula.clause_count(), 5);
assert_eq!(formula[0].as_dimacs(true), "-x3 x1 0");
assert_eq!(formula[3].as_dimacs(true), "-y -x3 0");
```
*/

use crate::{
    misc::log::targets::{self},
    structures::{
        clause::CClause,
        formula::Formula,
        gate::Gate,
        literal::{CLiteral, Literal},
    },
    types::err,
};

/// The clauses which tie the output of the given gate to the value of its function over the inputs.
///
/// Clauses are emitted by the table of the [module documentation](self), in table order.
///
/// # Errors
/// Of a gate which fails [check](Gate::check), with no clauses emitted.
pub fn gate_clauses(gate: &Gate) -> Result<Vec<CClause>, err::ErrorKind> {
    gate.check()?;

    let the_clauses = match gate {
        Gate::And {
            output,
            left,
            right,
        } => vec![
            vec![CLiteral::new(output, false), CLiteral::new(left, true)],
            vec![CLiteral::new(output, false), CLiteral::new(right, true)],
            vec![
                CLiteral::new(output, true),
                CLiteral::new(left, false),
                CLiteral::new(right, false),
            ],
        ],

        Gate::Or {
            output,
            left,
            right,
        } => vec![
            vec![CLiteral::new(output, true), CLiteral::new(left, false)],
            vec![CLiteral::new(output, true), CLiteral::new(right, false)],
            vec![
                CLiteral::new(output, false),
                CLiteral::new(left, true),
                CLiteral::new(right, true),
            ],
        ],

        Gate::Not { output, input } => vec![
            vec![CLiteral::new(output, false), CLiteral::new(input, false)],
            vec![CLiteral::new(output, true), CLiteral::new(input, true)],
        ],

        Gate::Xor {
            output,
            left,
            right,
        } => vec![
            vec![
                CLiteral::new(output, false),
                CLiteral::new(left, true),
                CLiteral::new(right, true),
            ],
            vec![
                CLiteral::new(output, false),
                CLiteral::new(left, false),
                CLiteral::new(right, false),
            ],
            vec![
                CLiteral::new(output, true),
                CLiteral::new(left, false),
                CLiteral::new(right, true),
            ],
            vec![
                CLiteral::new(output, true),
                CLiteral::new(left, true),
                CLiteral::new(right, false),
            ],
        ],

        Gate::Xnor {
            output,
            left,
            right,
        } => vec![
            vec![
                CLiteral::new(output, false),
                CLiteral::new(left, false),
                CLiteral::new(right, true),
            ],
            vec![
                CLiteral::new(output, false),
                CLiteral::new(left, true),
                CLiteral::new(right, false),
            ],
            vec![
                CLiteral::new(output, true),
                CLiteral::new(left, false),
                CLiteral::new(right, false),
            ],
            vec![
                CLiteral::new(output, true),
                CLiteral::new(left, true),
                CLiteral::new(right, true),
            ],
        ],

        Gate::Nor {
            output,
            left,
            right,
        } => vec![
            vec![CLiteral::new(output, false), CLiteral::new(left, false)],
            vec![CLiteral::new(output, false), CLiteral::new(right, false)],
            vec![
                CLiteral::new(output, true),
                CLiteral::new(left, true),
                CLiteral::new(right, true),
            ],
        ],

        Gate::Implication {
            output,
            left,
            right,
        } => vec![
            vec![
                CLiteral::new(output, false),
                CLiteral::new(left, false),
                CLiteral::new(right, true),
            ],
            vec![CLiteral::new(output, true), CLiteral::new(left, true)],
            vec![CLiteral::new(output, true), CLiteral::new(right, false)],
        ],

        Gate::True { output } => vec![vec![CLiteral::new(output, true)]],
    };

    log::trace!(target: targets::TRANSFORM, "{} clauses from {gate}", the_clauses.len());

    Ok(the_clauses)
}

/// The transformation of a collection of gates to a formula, clauses in gate order.
///
/// # Errors
/// Of the first gate to fail [check](Gate::check), in which case no formula is returned for any gate of the collection.
pub fn transform(gates: &[Gate]) -> Result<Formula, err::ErrorKind> {
    let mut the_formula = Formula::default();

    for gate in gates {
        the_formula.extend(gate_clauses(gate)?);
    }

    log::info!(target: targets::TRANSFORM, "Transformed {} gates to {} clauses", gates.len(), the_formula.len());

    Ok(the_formula)
}
