//! Line bucket-sort benchmarking harness
//!
//! Thin CLI shell: parses arguments into a job configuration and hands off
//! to the run coordinator.

use clap::{Arg, Command};
use env_logger::Env;
use std::path::Path;
use std::process;

use linesort::{
    config::JobConfigBuilder,
    error::SortResult,
    runner, IngestStrategy, SortMode, EXIT_SUCCESS,
};

fn main() {
    env_logger::Builder::from_env(Env::default().default_filter_or("info")).init();

    match run() {
        Ok(exit_code) => process::exit(exit_code),
        Err(e) => {
            eprintln!("linesort: {e}");
            process::exit(e.exit_code());
        }
    }
}

fn run() -> SortResult<i32> {
    let matches = build_cli().get_matches();

    let input_dir = Path::new(
        matches
            .get_one::<String>("input-dir")
            .map(String::as_str)
            .unwrap_or_default(),
    );
    let output_dir = Path::new(
        matches
            .get_one::<String>("output-dir")
            .map(String::as_str)
            .unwrap_or("."),
    );
    let verify = matches.get_flag("check");

    if matches.get_flag("bench") {
        runner::run_benchmark(input_dir, output_dir, verify)?;
        return Ok(EXIT_SUCCESS);
    }

    let mode: SortMode = matches
        .get_one::<String>("mode")
        .map(String::as_str)
        .unwrap_or("ascending")
        .parse()?;
    let strategy: IngestStrategy = matches
        .get_one::<String>("strategy")
        .map(String::as_str)
        .unwrap_or("sequential")
        .parse()?;

    let mut builder = JobConfigBuilder::new(input_dir)
        .output_dir(output_dir)
        .mode(mode)
        .strategy(strategy)
        .verify(verify);
    if let Some(name) = matches.get_one::<String>("name") {
        builder = builder.output_name(name);
    }

    runner::run_job(&builder.build()?)?;
    Ok(EXIT_SUCCESS)
}

fn build_cli() -> Command {
    Command::new("linesort")
        .version(env!("CARGO_PKG_VERSION"))
        .about("Sort the merged lines of a directory of text files with a bucket (radix) sort")
        .long_about(
            "Reads every file in INPUT_DIR, merges their lines into one collection, \
             sorts it under the selected ordering, and writes the result to a file \
             in the output directory along with a timing report.\n\nThe threaded \
             strategy reads one source per worker thread; the sort stage itself is \
             always single-threaded.",
        )
        .arg(
            Arg::new("input-dir")
                .help("Directory whose files supply the input lines")
                .value_name("INPUT_DIR")
                .required(true),
        )
        .arg(
            Arg::new("output-dir")
                .short('o')
                .long("output-dir")
                .help("Directory receiving the output file")
                .value_name("DIR")
                .default_value("."),
        )
        .arg(
            Arg::new("mode")
                .short('m')
                .long("mode")
                .help("Ordering to sort under")
                .value_name("MODE")
                .value_parser(["ascending", "descending", "last-letter"])
                .default_value("ascending"),
        )
        .arg(
            Arg::new("strategy")
                .short('s')
                .long("strategy")
                .help("Ingestion strategy")
                .value_name("STRATEGY")
                .value_parser(["sequential", "threaded"])
                .default_value("sequential"),
        )
        .arg(
            Arg::new("name")
                .short('n')
                .long("name")
                .help("Output file stem (default derived from strategy and mode)")
                .value_name("NAME"),
        )
        .arg(
            Arg::new("bench")
                .long("bench")
                .help("Run the full matrix: every mode under both strategies")
                .action(clap::ArgAction::SetTrue),
        )
        .arg(
            Arg::new("check")
                .long("check")
                .help("Verify the produced ordering after sorting")
                .action(clap::ArgAction::SetTrue),
        )
}
