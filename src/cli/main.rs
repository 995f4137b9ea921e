use std::path::PathBuf;

use tseytin::{
    procedures::transform,
    structures::{clause::Clause, formula::Cnf, gate::Gate},
};

mod misc;
mod parse;

/// Options for the cli, fixed after parsing arguments.
#[derive(Default)]
struct CliOptions {
    gates: bool,
    pretty: bool,
}

fn main() {
    #[cfg(feature = "log")]
    env_logger::init();

    let matches = parse::cli().get_matches();

    let mut cli_options = CliOptions::default();

    if let Ok(Some(true)) = matches.try_get_one::<bool>("gates") {
        cli_options.gates = true;
    };

    if let Ok(Some(true)) = matches.try_get_one::<bool>("pretty") {
        cli_options.pretty = true;
    };

    let mut the_paths: Vec<PathBuf> = Vec::default();
    if let Ok(Some(paths)) = matches.try_get_many::<PathBuf>("paths") {
        the_paths = paths.cloned().collect();
    };

    let mut the_gates: Vec<Gate> = Vec::default();

    for path in &the_paths {
        println!("c Reading gate list from {path:?}");

        match misc::load_gates(path) {
            Ok(mut gates) => the_gates.append(&mut gates),

            Err(e) => {
                println!("c Parse error: {e:?}");
                std::process::exit(1);
            }
        }
    }

    if cli_options.gates {
        for gate in &the_gates {
            println!("c {gate}");
        }
    }

    let the_formula = match transform(&the_gates) {
        Ok(formula) => formula,

        Err(e) => {
            println!("c Transformation error: {e:?}");
            std::process::exit(2);
        }
    };

    println!(
        "c Transformed {} gates to {} clauses",
        the_gates.len(),
        the_formula.clause_count()
    );

    for clause in &the_formula {
        match cli_options.pretty {
            true => println!("{}", clause.as_string()),
            false => println!("{}", clause.as_dimacs(true)),
        }
    }
}
