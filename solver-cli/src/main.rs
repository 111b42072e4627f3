mod config;

use clap::{App, Arg};
use config::Config;
use dz3::{dpll::DEFAULT_PROGRESS_INTERVAL, LogProgress, SatisfactionSolver, CNF};
use itertools::Itertools;
use std::path::PathBuf;

fn validate_interval(value: String) -> Result<(), String> {
    value.parse::<usize>()
        .map(|_| ())
        .map_err(|err| format!("expected a non-negative number of iterations, got {:?}: {}", value, err))
}

fn make_config() -> Result<Config, Box<dyn std::error::Error>> {
    let default_interval = DEFAULT_PROGRESS_INTERVAL.to_string();
    let matches = App::new("dz3")
        .version("1.0")
        .author("Alex&Korbi&Radek inc.")
        .about("Decides satisfiability of a CNF formula with DPLL")
        .arg(
            Arg::with_name("INPUT")
                .required(true)
                .index(1)
                .help("Input file in DIMACS CNF format"),
        )
        .arg(
            Arg::with_name("output")
                .short("o")
                .long("output")
                .takes_value(true)
                .help("File name for output in DIMACS format"),
        )
        .arg(
            Arg::with_name("tree")
                .long("tree")
                .takes_value(false)
                .help("Prints the final decision tree"),
        )
        .arg(
            Arg::with_name("progress")
                .long("progress")
                .value_name("N")
                .takes_value(true)
                .default_value(&default_interval)
                .validator(validate_interval)
                .help("Logs the node count every N iterations, 0 turns it off"),
        )
        .arg(
            Arg::with_name("verbose")
                .short("v")
                .long("verbose")
                .takes_value(false)
                .help("Logs the progress of the search"),
        )
        .get_matches();

    let progress_interval = matches.value_of("progress")
        .unwrap_or(&default_interval)
        .parse::<usize>()?;

    Ok(Config {
        input: PathBuf::from(matches.value_of("INPUT").unwrap_or_default()),
        output: matches.value_of("output").map(PathBuf::from),
        print_tree: matches.is_present("tree"),
        progress_interval,
        verbose: matches.is_present("verbose"),
    })
}

fn init_logger(verbose: bool) {
    let default_filter = if verbose { "info" } else { "warn" };
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or(default_filter))
        .init();
}

fn main() -> Result<(), Box<dyn std::error::Error>> {
    let config = make_config()?;
    init_logger(config.verbose);

    let formula = CNF::from_file(&config.input)?;
    log::info!("variables: {}, clauses: {}", formula.num_variables, formula.len());

    let solver = SatisfactionSolver::new()
        .with_progress(config.progress_interval, LogProgress);
    let tree = solver.search(&formula);

    if config.print_tree {
        print!("{}", tree);
    }

    let solution = tree.solution();
    log::info!("result: {}", solution.model()
        .map(|model| model.literals().map(|literal| literal.to_i32()).join(", "))
        .unwrap_or_else(|| "conflict".to_string()));

    match config.output {
        Some(path) => std::fs::write(path, solution.to_dimacs())?,
        None => print!("{}", solution.to_dimacs()),
    }

    Ok(())
}
