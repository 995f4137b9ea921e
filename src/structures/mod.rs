/*!
The basic structures of the library: variables, literals, clauses, formulas, valuations, and gates.

Literals, clauses, formulas, and valuations are defined first as traits, with canonical representations (the `C`-prefixed aliases) used whenever there is no good reason to do otherwise.
Gates are concrete, as the shape of a gate is fixed by its kind.
*/

pub mod clause;
pub mod formula;
pub mod gate;
pub mod literal;
pub mod valuation;
pub mod variable;
