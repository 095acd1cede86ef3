use std::path::PathBuf;

use anyhow::Result;
use clap::{Arg, ArgAction, ArgMatches, Command, ValueHint};
use log::LevelFilter;

use mathbox_cli::bench::{load_bench_config, run_bench, BenchConfig};

fn main() -> Result<()> {
    env_logger::Builder::default()
        .filter_level(LevelFilter::Info)
        .parse_env(env_logger::Env::default().filter_or("MATHBOX_LOG", "info"))
        .init();

    let matches = Command::new("mathbox")
        .version(clap::crate_version!())
        .about("Dense-matrix playground: build random matrices and time their product")
        .subcommand_required(true)
        .arg_required_else_help(true)
        .subcommand(
            Command::new("bench")
                .about("Construct two random matrices and time their multiplication")
                .arg(
                    Arg::new("config")
                        .long("config")
                        .help("Path to a JSON bench configuration file")
                        .value_parser(clap::value_parser!(PathBuf))
                        .value_hint(ValueHint::FilePath),
                )
                .arg(
                    Arg::new("rows")
                        .long("rows")
                        .help("Rows of the left matrix. Overrides the configuration file.")
                        .value_parser(clap::value_parser!(usize)),
                )
                .arg(
                    Arg::new("inner")
                        .long("inner")
                        .help(
                            "Columns of the left matrix and rows of the right one. \
                             Overrides the configuration file.",
                        )
                        .value_parser(clap::value_parser!(usize)),
                )
                .arg(
                    Arg::new("cols")
                        .long("cols")
                        .help("Columns of the right matrix. Overrides the configuration file.")
                        .value_parser(clap::value_parser!(usize)),
                )
                .arg(
                    Arg::new("seed")
                        .long("seed")
                        .help("Seed for reproducible matrices")
                        .value_parser(clap::value_parser!(u64)),
                )
                .arg(
                    Arg::new("show")
                        .long("show")
                        .help("Print the matrices and their product")
                        .action(ArgAction::SetTrue),
                ),
        )
        .help_template(
            "{usage-heading} {usage}\n\n\
             {about-with-newline}\n\
             Version {version}\n\n\
             {all-args}{after-help}",
        )
        .get_matches();

    match matches.subcommand() {
        Some(("bench", sub_m)) => handle_bench(sub_m),
        _ => unreachable!("Subcommand is required by CLI configuration"),
    }
}

fn handle_bench(matches: &ArgMatches) -> Result<()> {
    let mut config = if let Some(config_path) = matches.get_one::<PathBuf>("config") {
        log::info!("[mathbox::bench] Using config: {:?}", config_path);
        load_bench_config(config_path)?
    } else {
        log::info!("[mathbox::bench] No config provided; using defaults.");
        BenchConfig::default()
    };

    if let Some(rows) = matches.get_one::<usize>("rows") {
        config.left_rows = *rows;
    }
    if let Some(inner) = matches.get_one::<usize>("inner") {
        config.inner = *inner;
    }
    if let Some(cols) = matches.get_one::<usize>("cols") {
        config.right_cols = *cols;
    }
    if let Some(seed) = matches.get_one::<u64>("seed") {
        config.seed = Some(*seed);
    }
    if matches.get_flag("show") {
        config.show_matrices = true;
    }

    let report = run_bench(&config)?;
    println!(
        "multiplied {}x{} by {}x{} into {}x{} in {:?}",
        report.left_shape.0,
        report.left_shape.1,
        report.right_shape.0,
        report.right_shape.1,
        report.product_shape.0,
        report.product_shape.1,
        report.elapsed
    );
    Ok(())
}
