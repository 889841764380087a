use anyhow::{Context, Result};
use clap::Parser;
use log::{info, LevelFilter};
use simplelog::{ColorChoice, Config as LogConfig, TermLogger, TerminalMode, WriteLogger};
use std::{fs, path::PathBuf};
use unique_permutations::serialization::{serialize_report, PermutationReport};
use unique_permutations::unique_string_permutations;

/// Command-line arguments for the application
#[derive(Parser, Debug)]
#[command(author, version, about = "Enumerates all unique permutations of a string", long_about = None)]
struct Args {
    /// String whose unique permutations are enumerated
    input: String,

    /// Keep the input's case instead of uppercasing it
    #[arg(short, long)]
    keep_case: bool,

    /// Print a JSON report instead of the plain listing
    #[arg(short, long)]
    json: bool,

    /// Print only the number of unique permutations
    #[arg(short, long, conflicts_with = "json")]
    count_only: bool,

    /// Raise log verbosity (-v: info, -vv: debug)
    #[arg(short, long, action = clap::ArgAction::Count)]
    verbose: u8,

    /// Write logs to this file instead of the terminal
    #[arg(short, long)]
    log_file: Option<PathBuf>,
}

fn main() -> Result<()> {
    let args = Args::parse();
    init_logging(&args)?;

    let input = normalize_input(&args.input, args.keep_case);
    info!("Enumerating unique permutations of {:?}", input);

    let permutations =
        unique_string_permutations(&input).context("Failed to enumerate permutations")?;
    info!("Found {} unique permutations", permutations.len());

    if args.count_only {
        println!("{}", permutations.len());
    } else if args.json {
        let report = PermutationReport::new(input, permutations);
        println!("{}", serialize_report(&report));
    } else {
        println!("Found permutations:");
        for permutation in &permutations {
            println!("{}", permutation);
        }
        println!("Total unique permutations: {}", permutations.len());
    }

    Ok(())
}

/// For simplicity the input is uppercased unless the caller opts out.
fn normalize_input(input: &str, keep_case: bool) -> String {
    if keep_case {
        input.to_owned()
    } else {
        input.to_uppercase()
    }
}

fn init_logging(args: &Args) -> Result<()> {
    let level = match args.verbose {
        0 => LevelFilter::Warn,
        1 => LevelFilter::Info,
        _ => LevelFilter::Debug,
    };

    match &args.log_file {
        Some(path) => {
            let file = fs::File::create(path)
                .with_context(|| format!("Failed to create log file {:?}", path))?;
            WriteLogger::init(level, LogConfig::default(), file)?;
        }
        None => {
            TermLogger::init(
                level,
                LogConfig::default(),
                TerminalMode::Stderr,
                ColorChoice::Auto,
            )?;
        }
    }
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::normalize_input;

    #[test]
    fn uppercases_by_default() {
        assert_eq!(normalize_input("banana", false), "BANANA");
        assert_eq!(normalize_input("banana", true), "banana");
    }
}
