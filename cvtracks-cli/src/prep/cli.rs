use clap::{Arg, ArgAction, Command, value_parser};

use cvtracks_prep::DEFAULT_SEED;

pub const PREP_CMD: &str = "prep";

pub fn create_prep_cli() -> Command {
    Command::new(PREP_CMD)
        .about("Convert a ClinVar VCF into an interval file and a density multivec file.")
        .arg(
            Arg::new("input-variants")
                .long("input-variants")
                .required(true)
                .help("Path to the ClinVar VCF (plain, .gz or .bgz)"),
        )
        .arg(
            Arg::new("output-intervals")
                .long("output-intervals")
                .required(true)
                .help("Path of the 14 column interval file to write (.gz to compress)"),
        )
        .arg(
            Arg::new("output-density")
                .long("output-density")
                .required(true)
                .help("Path of the HDF5 density file to write"),
        )
        .arg(
            Arg::new("input-chromosome-sizes")
                .long("input-chromosome-sizes")
                .required(true)
                .help("Path to a two column chrom sizes file"),
        )
        .arg(
            Arg::new("seed")
                .long("seed")
                .value_parser(value_parser!(u64))
                .help(format!("Seed of the importance jitter [default: {}]", DEFAULT_SEED)),
        )
        .arg(
            Arg::new("no-progress")
                .long("no-progress")
                .action(ArgAction::SetTrue)
                .help("Do not draw progress bars"),
        )
}
