//! Command line entry point.
//!
//! Prints the error rate of the nearby tickets, then the product of the own
//! ticket values at the target fields.

use std::path::PathBuf;

use anyhow::{Context, Result};
use clap::Parser;
use fieldforge::{parse_notes, scan, solve_scanned, SolveConfig};

#[derive(Parser, Debug)]
#[command(name = "fieldforge", version, about)]
struct Args {
    /// Notes file to read
    #[arg(default_value = "input.txt")]
    input: PathBuf,

    /// Solve configuration file (TOML, or YAML by extension)
    #[arg(long)]
    config: Option<PathBuf>,

    /// Override the target field prefix
    #[arg(long)]
    prefix: Option<String>,

    /// Resolve fields from nearby tickets only
    #[arg(long, default_value_t = false)]
    exclude_own_ticket: bool,

    /// Print the resolved field of every position
    #[arg(long, default_value_t = false)]
    show_mapping: bool,

    /// Log progress to stderr (repeat for per-position detail)
    #[arg(short, long, action = clap::ArgAction::Count)]
    verbose: u8,
}

fn main() -> Result<()> {
    let args = Args::parse();

    match args.verbose {
        0 => {}
        1 => fieldforge::console::init(),
        _ => fieldforge::console::init_with_default("debug"),
    }

    let mut config = match &args.config {
        Some(path) => SolveConfig::from_file(path)
            .with_context(|| format!("loading config {}", path.display()))?,
        None => SolveConfig::default(),
    };
    if let Some(prefix) = args.prefix {
        config = config.with_target_prefix(prefix);
    }
    if args.exclude_own_ticket {
        config = config.with_own_ticket(false);
    }

    let text = std::fs::read_to_string(&args.input)
        .with_context(|| format!("unable to open input file {}", args.input.display()))?;
    let notes = parse_notes(&text).context("parsing notes")?;

    let scan = scan(&notes);
    let error_rate = scan.error_rate().context("summing invalid values")?;
    println!("{error_rate}");

    let solution = solve_scanned(&notes, scan, &config).context("solving notes")?;
    println!("{}", solution.target_product);

    if args.show_mapping {
        for (position, name) in solution.mapping.iter() {
            println!("{position}\t{name}");
        }
    }

    Ok(())
}
