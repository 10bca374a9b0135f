use std::{io, process};

mod args;
mod base;

use args::Args;

fn main() {
    if let Err(e) = run(&Args::parse()) {
        eprintln!("{e}");
        process::exit(1);
    }
}

fn run(args: &Args) -> io::Result<()> {
    let config = args.as_run_config();
    let stdout = io::stdout().lock();
    base::write_basenames(args.paths(), &config, stdout)
}
