//! FX CLI
//!
//! Command-line front end for the exchange rate client and the calculator.

use std::time::Duration;

use anyhow::Result;
use clap::{Parser, Subcommand, ValueEnum};

use exchange_rates_client::{ClientConfig, DEFAULT_ENDPOINT, FetchError, RateQuote, RatesClient};

#[derive(Parser)]
#[command(name = "fx")]
#[command(author, version, about = "Exchange rate quotes and basic arithmetic", long_about = None)]
struct Cli {
    /// Exchange API endpoint
    #[arg(long, env = "FX_API_URL", default_value = DEFAULT_ENDPOINT)]
    endpoint: String,

    /// Request timeout in seconds (client default when unset)
    #[arg(long, env = "FX_TIMEOUT_SECS")]
    timeout: Option<f64>,

    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Fetch the rate between two currencies
    Rate {
        /// Base currency code (e.g. USD)
        base: String,
        /// Target currency code (e.g. EUR)
        target: String,
    },
    /// Convert an amount at the current rate
    Convert {
        amount: f64,
        base: String,
        target: String,
    },
    /// Run an arithmetic operation
    Calc {
        #[arg(value_enum)]
        op: Op,
        #[arg(allow_negative_numbers = true)]
        a: f64,
        #[arg(allow_negative_numbers = true)]
        b: f64,
    },
}

#[derive(Clone, Copy, ValueEnum)]
enum Op {
    Add,
    Sub,
    Mul,
    Div,
    Pow,
    Mod,
}

fn parse_timeout(secs: f64) -> Result<Duration> {
    Duration::try_from_secs_f64(secs)
        .ok()
        .filter(|d| !d.is_zero())
        .ok_or_else(|| anyhow::anyhow!("Invalid timeout: {}. Must be a positive number of seconds", secs))
}

fn calc(op: Op, a: f64, b: f64) -> Result<f64, calculator::CalcError> {
    Ok(match op {
        Op::Add => calculator::add(a, b),
        Op::Sub => calculator::subtract(a, b),
        Op::Mul => calculator::multiply(a, b),
        Op::Div => calculator::divide(a, b)?,
        Op::Pow => calculator::power(a, b),
        Op::Mod => calculator::modulo(a, b)?,
    })
}

fn client_config(endpoint: String, timeout: Option<f64>) -> Result<ClientConfig> {
    let config = ClientConfig::default().with_endpoint(endpoint);
    match timeout {
        Some(secs) => Ok(config.with_timeout(parse_timeout(secs)?)),
        None => Ok(config),
    }
}

async fn fetch_quote(client: &RatesClient, base: &str, target: &str) -> Result<RateQuote> {
    client.fetch_rate(base, target).await.map_err(|e| match e {
        FetchError::Transport(e) => anyhow::anyhow!("Network error: {}", e),
        FetchError::Rate(e) => anyhow::anyhow!("Exchange API error: {}", e),
    })
}

#[tokio::main]
async fn main() -> Result<()> {
    dotenvy::dotenv().ok();

    tracing_subscriber::fmt()
        .with_env_filter(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| "warn,exchange_rates_client=info".into()),
        )
        .with_writer(std::io::stderr)
        .init();

    let cli = Cli::parse();

    let client = RatesClient::with_config(client_config(cli.endpoint, cli.timeout)?);

    match cli.command {
        Commands::Rate { base, target } => {
            let quote = fetch_quote(&client, &base, &target).await?;
            println!("{}", serde_json::to_string_pretty(&quote)?);
        }
        Commands::Convert {
            amount,
            base,
            target,
        } => {
            let quote = fetch_quote(&client, &base, &target).await?;
            let converted = quote.convert(amount)?;
            println!("{} {} = {} {}", amount, quote.base(), converted, quote.target());
        }
        Commands::Calc { op, a, b } => {
            println!("{}", calc(op, a, b)?);
        }
    }

    Ok(())
}
