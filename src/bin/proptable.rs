//! proptable - Command Line Interface
//!
//! Prints the truth table of a propositional expression.

use clap::Parser;
use proptable::{Expression, TableConfig, TruthTable};
use simplelog::{ColorChoice, ConfigBuilder, LevelFilter, TermLogger, TerminalMode};
use std::fs;
use std::io::{self, Read};
use std::path::PathBuf;
use std::process;

#[derive(Parser, Debug)]
#[command(name = "proptable")]
#[command(about = "Print the truth table of a propositional logic expression", long_about = None)]
#[command(version)]
struct Args {
    /// Expression to tabulate, e.g. "~(a and b) -> c" (read from stdin if omitted)
    #[arg(value_name = "EXPRESSION")]
    expression: Option<String>,

    /// Refuse expressions with more distinct variables than this
    #[arg(long = "max-vars", default_value_t = TableConfig::default().max_variables)]
    max_variables: usize,

    /// Output file (writes to stdout if not specified)
    #[arg(short = 'O', long = "out-file")]
    output_file: Option<PathBuf>,

    /// Print a summary of the table to stderr
    #[arg(short = 's', long = "summary")]
    summary: bool,

    /// Increase log verbosity (-v for debug, -vv for trace)
    #[arg(short = 'v', long = "verbose", action = clap::ArgAction::Count)]
    verbose: u8,
}

fn init_logging(verbose: u8) {
    let level = match verbose {
        0 => LevelFilter::Warn,
        1 => LevelFilter::Debug,
        _ => LevelFilter::Trace,
    };
    let config = ConfigBuilder::new().set_time_level(LevelFilter::Off).build();
    // A logger may already be installed when embedded; keep going without ours
    let _ = TermLogger::init(level, config, TerminalMode::Stderr, ColorChoice::Auto);
}

fn read_expression(args: &Args) -> io::Result<String> {
    match &args.expression {
        Some(expression) => Ok(expression.clone()),
        None => {
            let mut input = String::new();
            io::stdin().read_to_string(&mut input)?;
            Ok(input)
        }
    }
}

fn print_summary(expression: &Expression, table: &TruthTable) {
    eprintln!("Expression:  {}", expression);
    eprintln!("Variables:   {}", table.variables().len());
    eprintln!("Rows:        {}", table.num_rows());
    eprintln!("Columns:     {}", table.columns().len());
    let verdict = if table.is_tautology() {
        "tautology"
    } else if table.is_contradiction() {
        "contradiction"
    } else {
        "contingent"
    };
    eprintln!("Verdict:     {}", verdict);
}

fn main() {
    let args = Args::parse();
    init_logging(args.verbose);

    let input = match read_expression(&args) {
        Ok(input) => input,
        Err(e) => {
            eprintln!("Error reading expression: {}", e);
            process::exit(1);
        }
    };

    let expression = match Expression::parse(&input) {
        Ok(expression) => expression,
        Err(e) => {
            eprintln!("Error parsing '{}': {}", input.trim(), e);
            process::exit(1);
        }
    };

    let config = TableConfig {
        max_variables: args.max_variables,
    };
    let table = match expression.build_truth_table_with(&config) {
        Ok(table) => table,
        Err(e) => {
            eprintln!("Error: {}", e);
            process::exit(1);
        }
    };

    if args.summary {
        print_summary(&expression, &table);
    }

    let rendered = format!("{}\n", table);
    match &args.output_file {
        Some(path) => {
            if let Err(e) = fs::write(path, rendered) {
                eprintln!("Error writing output file '{}': {}", path.display(), e);
                process::exit(1);
            }
        }
        None => print!("{}", rendered),
    }
}
