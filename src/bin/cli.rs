// src/bin/cli.rs
use aeo_audit::cli;

fn main() -> color_eyre::Result<()> {
    cli::run()
}
