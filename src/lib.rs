//! A library for transforming systems of boolean gate equations into equisatisfiable collections of CNF clauses.
//!
//! tseytin is a library for transforming systems of boolean gate equations --- `output ↔ f(inputs)`, for functions such as conjunction, exclusive disjunction, and so on --- into collections of clauses in conjunctive normal form, using the transformation due to Tseytin.
//! Clauses are kept over the variable *names* of the gates they came from, and render in a DIMACS-like form in which names stand where a DIMACS file would hold integers.
//!
//! The library is intended as a front end for satisfiability tooling: the clauses of a system of gates are satisfiable together exactly when the equations of the system are.
//!
//! # Orientation
//!
//! Gates are built either [programmatically](crate::structures::gate::Gate) or by [reading a gate list](crate::builder) written in a small text format.
//! The [transformation](crate::procedures::transform()) maps a collection of gates to a [formula](crate::structures::formula), clause order following gate order, and the formula (or any clause of it) renders through [as_dimacs](crate::structures::formula::Cnf::as_dimacs) and friends.
//!
//! Useful starting points, then, may be:
//! - The [gate structure](crate::structures::gate) for what an equation is, and which kinds of gate exist.
//! - The [transformation procedure](crate::procedures::transform()) for the clauses emitted per kind.
//! - The [builder](crate::builder) for the text format of gate lists.
//! - The [errors](crate::types::err) for the ways building or transforming may fail.
//!
//! # Examples
//!
//! + Transform a half adder built in code.
//!
//! ```rust
//! # use tseytin::procedures::transform;
//! # use tseytin::structures::formula::Cnf;
//! use tseytin::structures::gate::Gate;
//!
//! let gates = vec![
//!     Gate::xor("s", "a", "b"),
//!     Gate::and("c_out", "a", "b"),
//! ];
//!
//! let formula = transform(&gates).unwrap();
//!
//! assert_eq!(formula.clause_count(), 7);
//! assert!(formula.as_dimacs().lines().all(|line| line.ends_with(" 0")));
//! ```
//!
//! + Read and transform a gate list.
//!
//! ```rust
//! # use std::io::Write;
//! # use tseytin::builder;
//! # use tseytin::procedures::transform;
//! # use tseytin::structures::formula::Cnf;
//! let mut the_text = vec![];
//! let _ = the_text.write(b"
//! c an inverter chain
//! x1 = NOT x0
//! x2 = NOT x1
//! ");
//!
//! let gates = builder::read_gates(the_text.as_slice()).unwrap();
//! let formula = transform(&gates).unwrap();
//!
//! assert_eq!(formula.as_dimacs(), "-x1 -x0 0\nx1 x0 0\n-x2 -x1 0\nx2 x1 0");
//! ```
//!
//! # Logs
//!
//! Calls to [log!](log) are made when building gate lists and when transforming gates, with targets defined in [misc::log] to help narrow output to relevant parts of the library.
//! No implementation is bundled with the library, though the cli initialises [env_logger](https://docs.rs/env_logger/latest/env_logger/) when built with the `log` feature, after which, for example, logs of the transformation alone can be had with `RUST_LOG=transform …`.

pub mod builder;
pub mod procedures;

pub mod structures;
pub mod types;

pub mod misc;
