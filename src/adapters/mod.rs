#[cfg(feature = "cli")]
pub mod cli;
pub mod teos10;

#[cfg(feature = "cli")]
use clap::Parser;

#[cfg(feature = "cli")]
pub fn run() -> Result<(), crate::error::AppError> {
    use crate::adapters::cli::{Args, parse_request};
    use crate::conversion::calculator::process_request;

    let args = Args::parse();
    let req = parse_request(&args)?;

    let out = process_request(&req)?;

    crate::adapters::cli::print_output(&out, &args)?;

    Ok(())
}
