//! CLI entry point for identicon generation

use clap::Parser;
use identicon::GenerationResult;
use identicon::io::cli::{BatchProcessor, Cli};
use identicon::io::logging;
use std::io::Write;

fn main() -> identicon::Result<()> {
    let cli = Cli::parse();
    logging::init(cli.verbose, cli.quiet);

    let processor = BatchProcessor::new(cli);
    let results = processor.process()?;

    let mut stdout = std::io::stdout().lock();
    for bytes in results.iter().filter_map(GenerationResult::bytes) {
        stdout.write_all(bytes)?;
    }
    stdout.flush()?;
    Ok(())
}
