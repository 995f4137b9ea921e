//! The command of the cli.

use std::path::PathBuf;

use clap::{value_parser, Arg, ArgAction, Command};

pub fn cli() -> Command {
    Command::new("tseytin")
        .about("Transforms a system of gate equations into an equisatisfiable collection of CNF clauses")
        .version(env!("CARGO_PKG_VERSION"))

        .arg(Arg::new("paths")
            .required(true)
            .trailing_var_arg(true)
            .num_args(1..)
            .value_parser(value_parser!(PathBuf))
            .help("The gate list files to transform (as a single system)."))

        .arg(Arg::new("gates")
            .short('g')
            .long("show-gates")
            .action(ArgAction::SetTrue)
            .help("Echo each gate equation as a comment line before the clauses."))

        .arg(Arg::new("pretty")
            .short('p')
            .long("pretty")
            .action(ArgAction::SetTrue)
            .help("Display clauses as disjunctions of literals rather than DIMACS-like lines."))
}
