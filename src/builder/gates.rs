//! Reading gates, one per line, from text.

use std::io::BufRead;

use crate::{
    misc::log::targets::{self},
    structures::gate::{Gate, GateKind},
    types::err::{self, ErrorKind},
};

/// The tokens accepted between the output and the kind of an equation.
const EQUIVALENCE_TOKENS: [&str; 3] = ["=", "<->", "↔"];

/// The gate written on a line, with errors reported against the given line number.
fn gate_from_line(line: &str, line_counter: usize) -> Result<Gate, ErrorKind> {
    let mut tokens = line.split_whitespace();

    let output = match tokens.next() {
        Some(token) => token,
        None => return Err(ErrorKind::from(err::ParseError::Incomplete(line_counter))),
    };

    match tokens.next() {
        Some(token) if EQUIVALENCE_TOKENS.contains(&token) => {}
        Some(_) => return Err(ErrorKind::from(err::ParseError::Equivalence(line_counter))),
        None => return Err(ErrorKind::from(err::ParseError::Incomplete(line_counter))),
    };

    let kind = match tokens.next() {
        Some(token) => match GateKind::from_keyword(token) {
            Some(kind) => kind,
            None => return Err(ErrorKind::from(err::ParseError::UnknownKind(line_counter))),
        },
        None => return Err(ErrorKind::from(err::ParseError::Incomplete(line_counter))),
    };

    let inputs: Vec<&str> = tokens.collect();
    if inputs.len() != kind.arity() {
        return Err(ErrorKind::from(err::ParseError::Arity(line_counter)));
    }

    let the_gate = match kind {
        GateKind::And => Gate::and(output, inputs[0], inputs[1]),
        GateKind::Or => Gate::or(output, inputs[0], inputs[1]),
        GateKind::Not => Gate::not(output, inputs[0]),
        GateKind::Xor => Gate::xor(output, inputs[0], inputs[1]),
        GateKind::Xnor => Gate::xnor(output, inputs[0], inputs[1]),
        GateKind::Nor => Gate::nor(output, inputs[0], inputs[1]),
        GateKind::Implication => Gate::implication(output, inputs[0], inputs[1]),
        GateKind::True => Gate::truth(output),
    };

    the_gate.check()?;

    log::trace!(target: targets::BUILD, "Line {line_counter}: {the_gate}");

    Ok(the_gate)
}

/// The gate written in the given string, with errors reported against line 1.
///
/// ```rust
/// # use tseytin::builder::gate_from_string;
/// let gate = gate_from_string("x3 = AND x1 x2").unwrap();
///
/// assert_eq!(gate.to_string(), "x3 ↔ x1 ∧ x2");
/// ```
pub fn gate_from_string(string: &str) -> Result<Gate, ErrorKind> {
    gate_from_line(string, 1)
}

/// Reads a gate list from the given source, in the [format of the module documentation](super).
///
/// Reading stops at the first problem line, with no gates returned.
///
/// ```rust,ignore
/// let gates = read_gates(BufReader::new(&file))?;
/// ```
pub fn read_gates(mut reader: impl BufRead) -> Result<Vec<Gate>, ErrorKind> {
    let mut buffer = String::with_capacity(1024);
    let mut the_gates = Vec::default();

    let mut line_counter = 0;

    loop {
        match reader.read_line(&mut buffer) {
            Ok(0) => break,
            Ok(_) => line_counter += 1,
            // The line which failed to read is the one after those counted.
            Err(_) => return Err(ErrorKind::from(err::ParseError::Line(line_counter + 1))),
        }

        match buffer.split_whitespace().next() {
            None => {}

            Some("c") => {}

            Some(_) => the_gates.push(gate_from_line(&buffer, line_counter)?),
        }

        buffer.clear();
    }

    log::info!(target: targets::BUILD, "Read {} gates from {} lines", the_gates.len(), line_counter);

    Ok(the_gates)
}
