use clap::Parser;

use twconst::logging::init_logging;
use twconst::Cli;

fn main() {
    let cli = Cli::parse();
    init_logging(cli.verbose);

    if let Err(err) = twconst::run(cli) {
        eprintln!("error: {err:#}");
        std::process::exit(1);
    }
}
