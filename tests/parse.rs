use std::io::Write;

use tseytin::{
    builder::{gate_from_string, read_gates},
    structures::gate::Gate,
    types::err::{ErrorKind, MalformedGate, ParseError},
};

mod wellformed {
    use super::*;

    #[test]
    fn half_adder() {
        let mut the_text = vec![];
        let _ = the_text.write(
            b"
c a half adder over a and b
s     = XOR a b
c_out = AND a b
",
        );

        let gates = read_gates(the_text.as_slice()).unwrap();

        assert_eq!(
            gates,
            vec![Gate::xor("s", "a", "b"), Gate::and("c_out", "a", "b")]
        );
    }

    #[test]
    fn equivalence_tokens() {
        let ascii_equals = gate_from_string("y = NOT x1").unwrap();
        let ascii_arrow = gate_from_string("y <-> NOT x1").unwrap();
        let glyph = gate_from_string("y ↔ NOT x1").unwrap();

        assert_eq!(ascii_equals, Gate::not("y", "x1"));
        assert_eq!(ascii_equals, ascii_arrow);
        assert_eq!(ascii_equals, glyph);
    }

    #[test]
    fn keyword_case() {
        assert_eq!(
            gate_from_string("x3 = and x1 x2").unwrap(),
            gate_from_string("x3 = AND x1 x2").unwrap()
        );

        assert_eq!(
            gate_from_string("e = Xnor a b").unwrap(),
            Gate::xnor("e", "a", "b")
        );
    }

    #[test]
    fn each_arity() {
        let the_text = "
t  = TRUE
n  = NOT t
x3 = IMPLICATION t n
";

        let gates = read_gates(the_text.as_bytes()).unwrap();

        assert_eq!(
            gates,
            vec![
                Gate::truth("t"),
                Gate::not("n", "t"),
                Gate::implication("x3", "t", "n"),
            ]
        );
    }

    // A comment is a line whose first token is the single letter, so c_out is an output like any other.
    #[test]
    fn comment_is_a_token() {
        let the_text = "
c comments may mention AND, OR, and so on
c
c_out = OR a b
";

        let gates = read_gates(the_text.as_bytes()).unwrap();

        assert_eq!(gates, vec![Gate::or("c_out", "a", "b")]);
    }

    #[test]
    fn whitespace_runs() {
        let gates = read_gates("   x3   =   AND   x1  x2  ".as_bytes()).unwrap();

        assert_eq!(gates, vec![Gate::and("x3", "x1", "x2")]);
    }

    #[test]
    fn empty_source() {
        assert_eq!(read_gates("".as_bytes()), Ok(vec![]));
        assert_eq!(read_gates("\n\nc nothing here\n".as_bytes()), Ok(vec![]));
    }
}

mod malformed {
    use super::*;

    #[test]
    fn incomplete_equations() {
        assert_eq!(
            gate_from_string("x3"),
            Err(ErrorKind::from(ParseError::Incomplete(1)))
        );

        assert_eq!(
            gate_from_string("x3 ="),
            Err(ErrorKind::from(ParseError::Incomplete(1)))
        );

        assert_eq!(
            gate_from_string(""),
            Err(ErrorKind::from(ParseError::Incomplete(1)))
        );
    }

    #[test]
    fn missing_equivalence() {
        assert_eq!(
            gate_from_string("x3 == AND x1 x2"),
            Err(ErrorKind::from(ParseError::Equivalence(1)))
        );

        assert_eq!(
            gate_from_string("x3 AND x1 x2"),
            Err(ErrorKind::from(ParseError::Equivalence(1)))
        );
    }

    #[test]
    fn unknown_kinds() {
        assert_eq!(
            gate_from_string("x3 = NAND x1 x2"),
            Err(ErrorKind::from(ParseError::UnknownKind(1)))
        );

        assert_eq!(
            gate_from_string("x3 = ⊕ x1 x2"),
            Err(ErrorKind::from(ParseError::UnknownKind(1)))
        );
    }

    #[test]
    fn arity_mismatches() {
        assert_eq!(
            gate_from_string("x3 = AND x1"),
            Err(ErrorKind::from(ParseError::Arity(1)))
        );

        assert_eq!(
            gate_from_string("y = NOT x1 x2"),
            Err(ErrorKind::from(ParseError::Arity(1)))
        );

        assert_eq!(
            gate_from_string("t = TRUE t"),
            Err(ErrorKind::from(ParseError::Arity(1)))
        );
    }

    #[test]
    fn unwritable_names() {
        assert_eq!(
            gate_from_string("y = NOT -x1"),
            Err(ErrorKind::from(MalformedGate::UnwritableVariable(
                "-x1".to_string()
            )))
        );

        assert_eq!(
            gate_from_string("0 = TRUE"),
            Err(ErrorKind::from(MalformedGate::UnwritableVariable(
                "0".to_string()
            )))
        );
    }

    // Line numbers are 1-based, with comment and blank lines counted.
    #[test]
    fn lines_reported_as_written() {
        let the_text = "
c the fifth line is short an input
s     = XOR a b
c_out = AND a b
oops  = NOR a
";

        assert_eq!(
            read_gates(the_text.as_bytes()),
            Err(ErrorKind::from(ParseError::Arity(5)))
        );
    }

    // Bytes which fail to read as a line are attributed to the line they would have been.
    #[test]
    fn unreadable_bytes() {
        assert_eq!(
            read_gates([0xFF, b'\n'].as_slice()),
            Err(ErrorKind::from(ParseError::Line(1)))
        );

        assert_eq!(
            read_gates(b"t = TRUE\n\xFF\n".as_slice()),
            Err(ErrorKind::from(ParseError::Line(2)))
        );
    }

    #[test]
    fn no_gates_on_failure() {
        let the_text = "
x1 = NOT x0
x2 = BUFFER x1
";

        assert_eq!(
            read_gates(the_text.as_bytes()),
            Err(ErrorKind::from(ParseError::UnknownKind(3)))
        );
    }
}
