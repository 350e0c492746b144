//! Legacy single-shot calculator
//!
//! Runs the historical non-validating intake flow: each field is read once,
//! a bad weight ends the session with no result, and invalid input to any
//! later field aborts with an error.

use tracing_subscriber::EnvFilter;

use pcc::build_info;
use pcc::energy::Equation;

fn main() -> Result<(), Box<dyn std::error::Error>> {
    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::from_default_env().add_directive("pcc=info".parse()?))
        .with_writer(std::io::stderr)
        .init();

    build_info::print_startup_banner();
    eprintln!("Legacy single-shot mode: input is not range-checked.");
    eprintln!("Equation: {}", Equation::DEFAULT.display_name());

    let stdin = std::io::stdin();
    let stdout = std::io::stdout();
    let mut input = stdin.lock();
    let mut output = stdout.lock();

    match pcc::session::run_single_shot(&mut input, &mut output, Equation::DEFAULT)? {
        Some(_) => {}
        None => eprintln!("No weight value provided; nothing to calculate."),
    }

    Ok(())
}
