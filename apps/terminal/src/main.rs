//! Mortar POS terminal entry point.

use std::process::ExitCode;

#[tokio::main]
async fn main() -> ExitCode {
    if let Err(e) = mortar_terminal::run().await {
        eprintln!("fatal: {}", e);
        return ExitCode::FAILURE;
    }
    ExitCode::SUCCESS
}
