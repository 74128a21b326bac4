mod prep;
mod progress;

use std::process::ExitCode;

use clap::Command;
use log::error;

pub mod consts {
    pub const VERSION: &str = env!("CARGO_PKG_VERSION");
    pub const BIN_NAME: &str = "cvtracks";
}

fn build_parser() -> Command {
    Command::new(consts::BIN_NAME)
        .bin_name(consts::BIN_NAME)
        .version(consts::VERSION)
        .about("Prepare ClinVar variants for genome browser interval and density tracks.")
        .subcommand_required(true)
        .subcommand(prep::cli::create_prep_cli())
}

fn main() -> ExitCode {
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or("info")).init();

    let app = build_parser();
    let matches = app.get_matches();

    let result = match matches.subcommand() {
        //
        // PREP
        //
        Some((prep::cli::PREP_CMD, matches)) => prep::handlers::run_prep_cmd(matches),

        _ => unreachable!("Subcommand not found"),
    };

    match result {
        Ok(()) => ExitCode::SUCCESS,
        Err(e) => {
            error!("{:#}", e);
            ExitCode::FAILURE
        }
    }
}
