//! Checkout Simulator - Console entry point
//! Reads the queue length and customer count, runs the supermarket, prints a report

mod input;
mod logging;
mod report;

use anyhow::{Context, Result};
use checkout_core::application::{SimulationConfig, Supermarket};
use checkout_core::port::RandomChoiceProvider;
use clap::{Parser, ValueEnum};
use std::io::{self, BufRead, Write};
use std::sync::Arc;
use std::time::Duration;
use tracing::{info, warn};

/// Upper bound on how long `--drain` waits for customers still shopping
const DRAIN_TIMEOUT: Duration = Duration::from_secs(30);

#[derive(Parser)]
#[command(name = "checkout")]
#[command(about = "Two-lane supermarket checkout simulator", long_about = None)]
#[command(version)]
struct Cli {
    /// Maximum queue length per lane (prompted for when omitted)
    #[arg(short, long, env = "CHECKOUT_CAPACITY", allow_negative_numbers = true)]
    capacity: Option<i64>,

    /// Total number of customers (prompted for when omitted)
    #[arg(short = 'n', long, env = "CHECKOUT_CUSTOMERS", allow_negative_numbers = true)]
    customers: Option<i64>,

    /// Time to serve one customer
    #[arg(long, env = "CHECKOUT_SERVICE_MS")]
    service_ms: Option<u64>,

    /// Idle time after which a cashier closes the lane
    #[arg(long, env = "CHECKOUT_IDLE_THRESHOLD_MS")]
    idle_threshold_ms: Option<u64>,

    /// How long one dequeue waits for a customer
    #[arg(long, env = "CHECKOUT_DEQUEUE_TIMEOUT_MS")]
    dequeue_timeout_ms: Option<u64>,

    /// Pause after an empty dequeue that did not close the lane
    #[arg(long, env = "CHECKOUT_IDLE_BACKOFF_MS")]
    idle_backoff_ms: Option<u64>,

    /// Exclusive upper bound of the random shopping time
    #[arg(long, env = "CHECKOUT_MAX_SHOPPING_MS")]
    max_shopping_ms: Option<u64>,

    /// Wait for every customer to finish before printing the report
    #[arg(long)]
    drain: bool,

    /// Report format
    #[arg(short, long, value_enum, default_value_t = OutputFormat::Table)]
    output: OutputFormat,

    /// Log format
    #[arg(long, env = "CHECKOUT_LOG_FORMAT", default_value = "pretty")]
    log_format: String,
}

#[derive(Clone, Copy, ValueEnum)]
enum OutputFormat {
    Table,
    Json,
}

impl Cli {
    /// Fill in missing counts interactively and validate everything
    fn simulation_config<R: BufRead, W: Write>(
        &self,
        stdin: &mut R,
        stdout: &mut W,
    ) -> Result<SimulationConfig> {
        let capacity = match self.capacity {
            Some(value) => value,
            None => input::parse_number(
                "Maximum queue length",
                &input::prompt(stdin, stdout, "Enter the maximum queue length: ")?,
            )?,
        };
        let capacity = input::queue_capacity(capacity)?;

        let customers = match self.customers {
            Some(value) => value,
            None => input::parse_number(
                "Number of customers",
                &input::prompt(stdin, stdout, "Enter the total number of customers: ")?,
            )?,
        };
        let customers = input::customer_count(customers)?;

        let mut config = SimulationConfig::new(capacity, customers);
        if let Some(ms) = self.service_ms {
            config = config.with_service_duration(Duration::from_millis(ms));
        }
        if let Some(ms) = self.idle_threshold_ms {
            config = config.with_idle_threshold(Duration::from_millis(ms));
        }
        if let Some(ms) = self.dequeue_timeout_ms {
            config = config.with_dequeue_timeout(Duration::from_millis(ms));
        }
        if let Some(ms) = self.idle_backoff_ms {
            config = config.with_idle_backoff(Duration::from_millis(ms));
        }
        if let Some(ms) = self.max_shopping_ms {
            config = config.with_max_shopping_delay(Duration::from_millis(ms));
        }
        Ok(config)
    }
}

#[tokio::main]
async fn main() -> Result<()> {
    let cli = Cli::parse();
    logging::init(&cli.log_format)?;

    let config = {
        let stdin = io::stdin();
        let mut stdin = stdin.lock();
        let mut stdout = io::stdout();
        cli.simulation_config(&mut stdin, &mut stdout)?
    };

    info!("Checkout simulator v{} starting...", checkout_core::VERSION);

    let customer_count = config.customer_count;
    let supermarket = Supermarket::new(config, Arc::new(RandomChoiceProvider))
        .context("Invalid simulation parameters")?;
    let stats = supermarket.stats();

    let mut outcome = supermarket.run().await.context("Simulation failed")?;

    if cli.drain {
        match tokio::time::timeout(DRAIN_TIMEOUT, stats.wait_for_customers(customer_count)).await {
            Ok(()) => outcome.stats = stats.snapshot(),
            Err(_) => warn!(
                finished = stats.customers_finished(),
                expected = customer_count,
                "Gave up waiting for customers still shopping"
            ),
        }
    }

    match cli.output {
        OutputFormat::Table => println!("{}", report::render_table(&outcome)),
        OutputFormat::Json => println!("{}", report::render_json(&outcome)?),
    }

    Ok(())
}
