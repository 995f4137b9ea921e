use tseytin::{
    procedures::transform,
    structures::{
        clause::{CClause, Clause},
        formula::{Cnf, Formula},
        gate::{Gate, GateKind},
        literal::{CLiteral, Literal},
    },
};

mod dimacs {
    use super::*;

    #[test]
    fn negation_marks() {
        let the_clause = vec![CLiteral::new("x3", false), CLiteral::new("x1", true)];

        assert_eq!(the_clause.as_dimacs(true), "-x3 x1 0");
        assert_eq!(the_clause.as_dimacs(false), "-x3 x1");
    }

    #[test]
    fn unit_clause() {
        let the_clause = vec![CLiteral::new("t", true)];

        assert_eq!(the_clause.as_dimacs(true), "t 0");
    }

    #[test]
    fn names_stand_as_given() {
        let gates = [Gate::and("carry", "bit_a", "bit_b")];

        let the_formula = transform(&gates).unwrap();

        assert_eq!(
            the_formula.as_dimacs(),
            "-carry bit_a 0\n-carry bit_b 0\ncarry -bit_a -bit_b 0"
        );
    }

    #[test]
    fn line_per_clause() {
        let gates = [Gate::xor("s", "a", "b"), Gate::and("c_out", "a", "b")];

        let the_formula = transform(&gates).unwrap();
        let the_rendering = the_formula.as_dimacs();

        assert_eq!(the_rendering.lines().count(), the_formula.clause_count());

        for (line, clause) in the_rendering.lines().zip(&the_formula) {
            assert_eq!(line, clause.as_dimacs(true));
            assert_eq!(line.split_whitespace().last(), Some("0"));
        }
    }

    #[test]
    fn empty_formula() {
        let the_formula = Formula::default();

        assert_eq!(the_formula.as_dimacs(), "");
        assert_eq!(the_formula.as_string(), "");
    }
}

mod pretty {
    use super::*;

    #[test]
    fn literal_display() {
        let literal = CLiteral::new("x1", true);

        assert_eq!(literal.to_string(), "x1");
        assert_eq!(literal.negate().to_string(), "¬x1");
    }

    #[test]
    fn clause_disjunction() {
        let the_clause = vec![CLiteral::new("x3", false), CLiteral::new("x1", true)];

        assert_eq!(the_clause.as_string(), "¬x3 ∨ x1");
        assert_eq!(CClause::default().as_string(), "");
    }

    #[test]
    fn formula_lines() {
        let the_formula = transform(&[Gate::not("y", "x1")]).unwrap();

        assert_eq!(the_formula.as_string(), "¬y ∨ ¬x1\ny ∨ x1");
    }

    #[test]
    fn gate_equations() {
        assert_eq!(Gate::and("x3", "x1", "x2").to_string(), "x3 ↔ x1 ∧ x2");
        assert_eq!(Gate::or("x3", "x1", "x2").to_string(), "x3 ↔ x1 ∨ x2");
        assert_eq!(Gate::not("y", "x1").to_string(), "y ↔ ¬x1");
        assert_eq!(Gate::xor("s", "a", "b").to_string(), "s ↔ a ⊕ b");
        assert_eq!(Gate::xnor("e", "a", "b").to_string(), "e ↔ a ↔ b");
        assert_eq!(Gate::nor("n", "a", "b").to_string(), "n ↔ a ↓ b");
        assert_eq!(Gate::implication("i", "a", "b").to_string(), "i ↔ a → b");
        assert_eq!(Gate::truth("t").to_string(), "t ↔ true");
    }

    #[test]
    fn kind_symbols() {
        assert_eq!(GateKind::And.symbol(), '∧');
        assert_eq!(GateKind::Or.symbol(), '∨');
        assert_eq!(GateKind::Not.symbol(), '¬');
        assert_eq!(GateKind::Xor.symbol(), '⊕');
        assert_eq!(GateKind::Xnor.symbol(), '↔');
        assert_eq!(GateKind::Nor.symbol(), '↓');
        assert_eq!(GateKind::Implication.symbol(), '→');
        assert_eq!(GateKind::True.symbol(), '⊤');
    }

    #[test]
    fn kind_arities() {
        assert_eq!(GateKind::True.arity(), 0);
        assert_eq!(GateKind::Not.arity(), 1);
        assert_eq!(GateKind::And.arity(), 2);
        assert_eq!(GateKind::Implication.arity(), 2);
    }
}
