//! CLI Command Implementations

use std::io::{self, Read};

use anyhow::{bail, Context, Result};

use crate::functions::{function_schemas, FunctionOutput, FunctionRouter};
use crate::telemetry::init_telemetry;
use crate::types::SeriesResponse;
use crate::{SimulatorConfig, VERSION};

use super::{CallCommand, Cli, Commands, ConfigAction, ConfigCommand, OutputFormat, QpsCommand, ServeCommand};

/// Execute the CLI command
pub async fn execute(cli: Cli) -> Result<()> {
    let mut config = if let Some(path) = &cli.config {
        SimulatorConfig::from_file(path)
            .with_context(|| format!("Failed to load config from {}", path.display()))?
    } else {
        SimulatorConfig::from_env()?
    };

    if let Some(level) = &cli.log_level {
        config.telemetry.log_level = level.clone();
    }
    if cli.json_logs {
        config.telemetry.json_logs = true;
    }

    match cli.command {
        Commands::Serve(cmd) => execute_serve(cmd, config, cli.quiet).await,
        Commands::Qps(cmd) => {
            init_telemetry(&config.telemetry)?;
            execute_qps(cmd, config)
        }
        Commands::Call(cmd) => {
            init_telemetry(&config.telemetry)?;
            execute_call(cmd, config)
        }
        Commands::Functions => {
            println!("{}", serde_json::to_string_pretty(&function_schemas())?);
            Ok(())
        }
        Commands::Config(cmd) => execute_config(cmd, config),
        Commands::Version => execute_version(),
    }
}

/// Execute the serve command
async fn execute_serve(cmd: ServeCommand, mut config: SimulatorConfig, quiet: bool) -> Result<()> {
    if let Some(port) = cmd.port {
        config.server.port = port;
    }
    if let Some(host) = cmd.host {
        config.server.host = host;
    }
    if let Some(seed) = cmd.seed {
        config.seed = Some(seed);
    }
    config.validate().context("Configuration validation failed")?;

    if !quiet {
        print_banner(&config);
    }

    crate::run_server(config).await
}

/// Execute the qps command
fn execute_qps(cmd: QpsCommand, mut config: SimulatorConfig) -> Result<()> {
    if let Some(seed) = cmd.seed {
        config.seed = Some(seed);
    }

    let router = FunctionRouter::new(&config);
    let series = router.calculate_qps(cmd.window, cmd.points)?;

    match cmd.format {
        OutputFormat::Json => println!("{}", serde_json::to_string_pretty(&series)?),
        OutputFormat::Text => print_series(&series),
    }
    Ok(())
}

/// Execute the call command
fn execute_call(cmd: CallCommand, mut config: SimulatorConfig) -> Result<()> {
    if let Some(seed) = cmd.seed {
        config.seed = Some(seed);
    }

    let text = if cmd.input == "-" {
        let mut buf = String::new();
        io::stdin()
            .read_to_string(&mut buf)
            .context("Failed to read stdin")?;
        buf
    } else {
        cmd.input
    };

    let router = FunctionRouter::new(&config);
    let Some(output) = router.dispatch_text(&text)? else {
        bail!(
            "No function call found in input. Example: \
             '{{\"function\": \"calculate_qps\", \"parameters\": {{\"time_window_minutes\": 5}}}}'"
        );
    };

    match cmd.format {
        OutputFormat::Json => println!("{}", serde_json::to_string_pretty(&output)?),
        OutputFormat::Text => print_output(&output),
    }
    Ok(())
}

/// Execute the config command
fn execute_config(cmd: ConfigCommand, config: SimulatorConfig) -> Result<()> {
    match cmd.action {
        ConfigAction::Show { format } => {
            println!("{}", config.render(&format)?);
        }
        ConfigAction::Validate { file } => {
            SimulatorConfig::from_file(&file)
                .with_context(|| format!("{} is not a valid configuration", file.display()))?;
            println!("{}: OK", file.display());
        }
    }
    Ok(())
}

fn execute_version() -> Result<()> {
    println!("qps-simulator {}", VERSION);
    println!("rust-version {}", env!("CARGO_PKG_RUST_VERSION"));
    Ok(())
}

fn print_banner(config: &SimulatorConfig) {
    println!("QPS Simulator v{}", VERSION);
    println!("  listening on {}:{}", config.server.host, config.server.port);
    match config.seed {
        Some(seed) => println!("  seed: {}", seed),
        None => println!("  seed: random"),
    }
    println!();
}

fn print_series(series: &SeriesResponse) {
    println!("QPS statistics:");
    println!("Status: {}", series.status);
    println!("Message: {}", series.message);
    println!();
    for point in &series.data {
        println!("{}", point);
    }
    if let Some(summary) = series.summary() {
        println!();
        println!(
            "min {:.2}  max {:.2}  mean {:.2}",
            summary.min, summary.max, summary.mean
        );
    }
}

fn print_output(output: &FunctionOutput) {
    match output {
        FunctionOutput::GetCurrentWeather(w) => {
            println!("Location: {}", w.location);
            println!("Temperature: {} ({})", w.temperature, w.unit);
            println!("Forecast: {}", w.forecast.join(", "));
        }
        FunctionOutput::Calculator(c) => {
            println!("{} {} {} = {}", c.x, c.operation, c.y, c.result);
        }
        FunctionOutput::GetRecentOrders(o) => {
            println!("Orders for {} ({})", o.user_id, o.period);
            println!("Total orders: {}", o.total_orders);
            println!("{}", "-".repeat(80));
            println!(
                "{:<10} {:<20} {:<12} {:>8} {:>10} {:>10} {:<10}",
                "Order", "Date", "Product", "Qty", "Price", "Total", "Status"
            );
            println!("{}", "-".repeat(80));
            for order in &o.orders {
                println!(
                    "{:<10} {:<20} {:<12} {:>8} {:>10.1} {:>10.1} {:<10}",
                    order.order_id,
                    order.date,
                    order.product,
                    order.quantity,
                    order.price,
                    order.total,
                    order.status
                );
            }
            println!("{}", "-".repeat(80));
        }
        FunctionOutput::CreateCustomPackage(p) => {
            println!("Package created: {}", p.package.name);
            println!("ID: {}", p.package.id);
            println!("Duration: {} months", p.package.duration);
            println!("Price: {:.2}", p.package.price);
            println!("Features:");
            for feature in &p.package.features {
                println!("- {}", feature);
            }
            println!("Payment link: {}", p.payment_url);
        }
        FunctionOutput::CalculateQps(series) => print_series(series),
    }
}

