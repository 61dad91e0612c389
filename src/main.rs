//! QPS-Simulator CLI
//!
//! Function-calling demo harness with a realistic synthetic QPS generator.

use clap::Parser;

use qps_simulator::cli::{execute, Cli};

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    let cli = Cli::parse();
    execute(cli).await
}
