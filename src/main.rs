//! Protein & Calorie Calculator (PCC)
//!
//! Interactive calculator for basal metabolic rate, total daily energy
//! expenditure and daily protein intake.

use tracing_subscriber::EnvFilter;

use pcc::build_info;
use pcc::energy::Equation;

fn main() -> Result<(), Box<dyn std::error::Error>> {
    // Log to stderr so stdout stays a clean interactive transcript
    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::from_default_env().add_directive("pcc=info".parse()?))
        .with_writer(std::io::stderr)
        .init();

    build_info::print_startup_banner();
    eprintln!("Equation: {}", Equation::DEFAULT.display_name());

    let stdin = std::io::stdin();
    let stdout = std::io::stdout();
    let mut input = stdin.lock();
    let mut output = stdout.lock();

    pcc::session::run(&mut input, &mut output, Equation::DEFAULT)?;

    Ok(())
}
