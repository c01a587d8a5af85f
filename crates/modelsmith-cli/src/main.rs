//! Modelsmith CLI - Convert PlantUML-style diagrams into a JSON domain model

mod cli;

use clap::Parser;

fn main() {
    let cli_args = cli::Cli::parse();

    // Logging is initialized inside run() from flags and environment
    let mut app = cli::ModelsmithApp::new();

    if let Err(e) = app.run(cli_args) {
        eprintln!("Error: {}", e);
        std::process::exit(1);
    }
}
