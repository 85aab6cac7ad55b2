use clap::Parser;
use ebookscale::config::Config;
use ebookscale::core::RescaleError;
use ebookscale::core::constants::{exit_codes, messages};
use ebookscale::reporting::ConsoleReporter;
use ebookscale::reporting::logging;
use ebookscale::run_batch;
use ebookscale::ui::{Cli, cli_to_config};

fn main() {
    let cli = Cli::parse();

    match run_resize_logic(&cli) {
        Ok(()) => std::process::exit(exit_codes::SUCCESS),
        Err(e @ RescaleError::TooManyDirectories(_)) => {
            println!("{} {e}", messages::ERROR_PREFIX);
            std::process::exit(e.exit_code());
        }
        Err(e) => {
            logging::log_error("Rescaling failed", Some(&e));
            eprintln!("Error: {e}");
            std::process::exit(e.exit_code());
        }
    }
}

/// Resolve the configuration and rescale every matching file
pub fn run_resize_logic(cli: &Cli) -> Result<(), RescaleError> {
    let cli_config = cli_to_config(cli)?;
    let config = Config::from_cli(&cli_config)?;

    logging::init_logger(config.verbosity, config.debug);

    let mut reporter = ConsoleReporter::stdout(&config);
    run_batch(&config, &mut reporter)?;
    Ok(())
}
