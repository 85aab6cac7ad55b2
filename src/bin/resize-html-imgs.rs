use clap::Parser;
use ebookscale::core::constants::{defaults, exit_codes};
use ebookscale::reporting::logging;
use ebookscale::{Verbosity, rescale_dimensions};

use std::io::{self, Read, Write};

/// Rescale width/height attributes of the HTML read from stdin.
///
/// htlatex has no good way to rescale all images of a book page, so every
/// decimal `width="..."` and `height="..."` value is multiplied by a fixed
/// factor and the page is written to stdout.
#[derive(Parser, Debug)]
#[command(name = "resize-html-imgs", version)]
struct Cli {}

fn main() {
    let _cli = Cli::parse();
    logging::init_logger(Verbosity::NORMAL, false);

    if let Err(e) = rescale_stdin() {
        logging::log_error("Could not rescale stdin", Some(&e));
        eprintln!("Error: {e}");
        std::process::exit(exit_codes::FAILURE);
    }
}

fn rescale_stdin() -> io::Result<()> {
    let mut source = String::new();
    io::stdin().lock().read_to_string(&mut source)?;

    let rescaled = rescale_dimensions(&source, defaults::HTML_FACTOR);

    let mut stdout = io::stdout().lock();
    stdout.write_all(rescaled.as_bytes())?;
    stdout.flush()
}
