mod error;
mod scan;
mod util;

use argh::FromArgs;
use core::error::Error;
use std::io;

#[derive(FromArgs, Debug)]
/// Finds TGA files that have a zero alpha channel with color information
struct TopLevel {
    /// glob patterns of the files to check (at least one is required), `**` recurses
    #[argh(positional)]
    paths: Vec<String>,
}

fn main() -> Result<(), Box<dyn Error>> {
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or("warn")).init();

    let cli: TopLevel = argh::from_env();
    if cli.paths.is_empty() {
        eprintln!("Required positional arguments not provided:\n    paths");
        std::process::exit(1);
    }

    let mut stdout = io::stdout().lock();
    scan::run(&cli.paths, &mut stdout)?;

    Ok(())
}
