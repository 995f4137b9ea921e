/*!
Procedures over collections of gates.

For the moment, the [transformation of gates to clauses](transform()).
*/

mod transform;
pub use transform::{gate_clauses, transform};
