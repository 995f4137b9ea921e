//! Errors, arranged by the part of the library they occur in.

use crate::structures::variable::Variable;

/// The general error type of the library.
#[derive(Clone, Debug, Eq, PartialEq)]
pub enum ErrorKind {
    /// A gate which fails the checks made before clause generation.
    MalformedGate(MalformedGate),

    /// An error from parsing a gate list.
    Parse(ParseError),
}

/// Ways a gate may fail the checks made before clause generation.
///
/// A malformed gate fails the call it was passed to as a whole, with no clauses emitted for any gate of the call.
#[derive(Clone, Debug, Eq, PartialEq)]
pub enum MalformedGate {
    /// The output of the gate is the empty string.
    EmptyOutput,

    /// An input of the gate is the empty string.
    EmptyInput,

    /// A variable of the gate which cannot appear in a clause rendering, e.g. `-x`, `a b`, or `0`.
    UnwritableVariable(Variable),
}

impl From<MalformedGate> for ErrorKind {
    fn from(e: MalformedGate) -> Self {
        ErrorKind::MalformedGate(e)
    }
}

/// Errors from parsing a gate list, each carrying the 1-based number of the offending line.
#[derive(Clone, Copy, Debug, Eq, PartialEq)]
pub enum ParseError {
    /// A line which could not be read from the source.
    Line(usize),

    /// An equation cut short before the inputs of its kind.
    Incomplete(usize),

    /// The token between the output and the kind is not an equivalence sign.
    Equivalence(usize),

    /// A keyword which does not name a kind of gate.
    UnknownKind(usize),

    /// A number of inputs which does not match the arity of the kind.
    Arity(usize),
}

impl From<ParseError> for ErrorKind {
    fn from(e: ParseError) -> Self {
        ErrorKind::Parse(e)
    }
}
