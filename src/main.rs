//! FrameSleuth — lists directories as file sequences.
//!
//! Thin binary entry point. All logic lives in the `framesleuth-core`
//! and `framesleuth-cli` crates.

use clap::Parser;

fn main() -> anyhow::Result<()> {
    let args = framesleuth_cli::Args::parse();

    // Initialise structured logging on stderr so stdout stays parseable.
    let level = if args.debug {
        tracing::Level::DEBUG
    } else {
        tracing::Level::INFO
    };
    tracing_subscriber::fmt()
        .with_max_level(level)
        .with_writer(std::io::stderr)
        .init();

    tracing::debug!("lss starting");

    let stdout = std::io::stdout();
    let exit_code = framesleuth_cli::run(&args, &mut stdout.lock())?;
    if exit_code != 0 {
        std::process::exit(exit_code);
    }
    Ok(())
}
