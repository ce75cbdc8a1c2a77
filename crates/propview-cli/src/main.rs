use clap::Parser;
use propview::{Cli, init_logging, run};

fn main() {
    let cli = Cli::parse();
    init_logging(cli.log_level);

    if let Err(e) = run(cli) {
        eprintln!("Error: {:#}", e);
        std::process::exit(1);
    }
}
