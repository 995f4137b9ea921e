/*!
Tools for building gate lists from text.

# The gate list format

A gate list is read line by line:
- A line whose first token is `c` is a comment.
- A blank line is skipped.
- Every other line is a single gate equation, written:

```text
output <eq> KIND [input [input]]
```

Here, `<eq>` is one of `=`, `<->`, or `↔`, `KIND` names a [GateKind](crate::structures::gate::GateKind) without regard to case, and the number of inputs is the arity of the kind --- two, in general, with one for `NOT` and none for `TRUE`.
Tokens are separated by (any amount of) whitespace.

For example:

```text
c a half adder over a and b
s     = XOR a b
c_out = AND a b
```

# Example

```rust
# use std::io::Write;
# use tseytin::builder;
let mut the_text = vec![];
let _ = the_text.write(b"
c a half adder over a and b
s     = XOR a b
c_out = AND a b
");

let gates = builder::read_gates(the_text.as_slice()).unwrap();

assert_eq!(gates.len(), 2);
assert_eq!(gates[0].to_string(), "s ↔ a ⊕ b");
assert_eq!(gates[1].to_string(), "c_out ↔ a ∧ b");
```
*/

mod gates;
pub use gates::{gate_from_string, read_gates};
