/* 3rd party libraries */
use clap::{value_parser, Arg, ArgMatches, Command};
use log::info;
use std::path::PathBuf;

/* Custom libraries */
use control::RunPaths;

/* Modules */
mod allocator;
mod calls;
mod config;
mod control;
mod shared;

fn cli() -> Command<'static> {
    Command::new("offline-allocator")
        .version(env!("CARGO_PKG_VERSION"))
        .about("Allocates elevator calls to elevators in proportion to their speed")
        .arg(
            Arg::new("BUILDING")
                .help("Building description (.json, or .toml)")
                .required(true)
                .index(1)
                .value_parser(value_parser!(PathBuf)),
        )
        .arg(
            Arg::new("CALLS_IN")
                .help("Call records to allocate")
                .required(true)
                .index(2)
                .value_parser(value_parser!(PathBuf)),
        )
        .arg(
            Arg::new("CALLS_OUT")
                .help("Where to write the allocated call records")
                .required(true)
                .index(3)
                .value_parser(value_parser!(PathBuf)),
        )
}

fn path_arg(matches: &ArgMatches, name: &str) -> PathBuf {
    matches
        .get_one::<PathBuf>(name)
        .cloned()
        .expect("clap enforces required positional arguments")
}

/* Main */
fn main() {
    // Logging defaults to info, RUST_LOG overrides it
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or("info")).init();

    let matches = cli().get_matches();
    let paths = RunPaths {
        building: path_arg(&matches, "BUILDING"),
        calls_in: path_arg(&matches, "CALLS_IN"),
        calls_out: path_arg(&matches, "CALLS_OUT"),
    };

    let report = unwrap_or_exit!(control::run_offline(&paths));
    info!(
        "Done: {} calls allocated across {} elevators",
        report.shares.iter().map(|share| share.assigned).sum::<usize>() + report.fallback_assigned,
        report.shares.len()
    );
}
