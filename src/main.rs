//! skim-request-machine CLI entrypoint.
//!
//! Thin wrapper over the `cli` module: parse args, hand off to the runner.
//! For programmatic use, prefer the library API (`skim_request_machine::api`).

mod cli;

fn main() -> Result<(), Box<dyn std::error::Error>> {
    let args = cli::CliArgs::parse_normalized();
    cli::run(args)
}
