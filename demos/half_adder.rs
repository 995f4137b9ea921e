use tseytin::{builder, procedures::transform, structures::formula::Cnf};

fn main() {
    let the_list = "
c a half adder over a and b
s     ↔ XOR a b
c_out ↔ AND a b
";

    let gates = builder::read_gates(the_list.as_bytes()).unwrap();

    for gate in &gates {
        println!("c {gate}");
    }

    let the_formula = transform(&gates).unwrap();

    println!("{}", the_formula.as_dimacs());
}
