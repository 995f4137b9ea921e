use tseytin::{
    procedures::{gate_clauses, transform},
    structures::{clause::Clause, formula::Cnf, gate::Gate, valuation::CValuation},
};

fn main() {
    // A full adder: sum and carry out over a, b, and carry in.
    let gates = vec![
        Gate::xor("t", "a", "b"),
        Gate::xor("sum", "t", "c_in"),
        Gate::and("u", "a", "b"),
        Gate::and("v", "t", "c_in"),
        Gate::or("c_out", "u", "v"),
    ];

    for gate in &gates {
        println!("The clauses of {gate} are:");
        for clause in gate_clauses(gate).unwrap() {
            println!("  C {}", clause.as_string());
        }
    }
    println!();

    let the_formula = transform(&gates).unwrap();

    println!(
        "And together, the transformation of the adder is ({} clauses):",
        the_formula.clause_count()
    );
    println!("{}", the_formula.as_dimacs());
    println!();

    // 1 + 1 + 1: every wire of the adder is high.
    let all_high: CValuation = the_formula
        .iter()
        .flat_map(|clause| clause.variables())
        .map(|variable| (variable.to_string(), true))
        .collect();

    assert_eq!(the_formula.value_on(&all_high), Some(false));

    let mut carry_twice = all_high.clone();
    carry_twice.insert("t".to_string(), false);
    carry_twice.insert("u".to_string(), true);
    carry_twice.insert("v".to_string(), false);

    assert_eq!(the_formula.value_on(&carry_twice), Some(true));

    println!("On 1 + 1 + 1 the adder settles with sum and carry high.");

    // A single literal flip breaks some clause.
    let mut dropped_sum = carry_twice.clone();
    dropped_sum.insert("sum".to_string(), false);

    assert_eq!(the_formula.value_on(&dropped_sum), Some(false));

    let broken = the_formula
        .iter()
        .find(|clause| clause.value_on(&dropped_sum) == Some(false))
        .unwrap();

    println!("Dropping sum breaks, for example: {}", broken.as_string());
}
