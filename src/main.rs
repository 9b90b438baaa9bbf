use chrono::Utc;
use clap::{Parser, Subcommand};
use miette::{IntoDiagnostic, Result};
use payments_service::application::processor::PaymentProcessor;
use payments_service::config::{
    DEFAULT_GATEWAY_TIMEOUT_MS, FeeSchedule, GatewayKind, GatewaySettings,
};
use payments_service::domain::fees::FeeTable;
use payments_service::interfaces::csv::outcome_writer::OutcomeWriter;
use payments_service::interfaces::csv::payment_reader::PaymentReader;
use payments_service::logging;
use payments_service::monitoring::alerts::AlertCatalog;
use payments_service::monitoring::metrics::{MetricsGenerator, MonitoredService};
use rust_decimal::Decimal;
use std::fs::File;
use std::io;
use std::path::PathBuf;
use std::time::Duration;
use tracing::{error, info};

#[derive(Parser)]
#[command(author, version, about, long_about = None)]
struct Cli {
    #[command(subcommand)]
    command: Command,
}

#[derive(Subcommand)]
enum Command {
    /// Validate, price and settle every payment in a CSV file
    Process {
        /// Input payments CSV file
        input: PathBuf,

        /// Settlement backend
        #[arg(long, value_enum, env = "PAYMENTS_GATEWAY", default_value = "sandbox")]
        gateway: GatewayKind,

        /// Base URL of the settlement service (http gateway only)
        #[arg(long, env = "PAYMENTS_GATEWAY_URL")]
        gateway_url: Option<String>,

        /// Settlement request timeout in milliseconds (http gateway only)
        #[arg(
            long,
            env = "PAYMENTS_GATEWAY_TIMEOUT_MS",
            default_value_t = DEFAULT_GATEWAY_TIMEOUT_MS
        )]
        gateway_timeout_ms: u64,

        /// Decline sandbox settlements whose total exceeds this amount
        #[arg(long, env = "PAYMENTS_SANDBOX_LIMIT")]
        sandbox_limit: Option<Decimal>,

        /// TOML file with fee rates. Defaults to the built-in table.
        #[arg(long, env = "PAYMENTS_FEE_SCHEDULE")]
        fee_schedule: Option<PathBuf>,
    },
    /// Print recently failed payments as CSV
    Failed,
    /// Print generated metrics for a service as JSON
    Metrics {
        #[arg(long, value_enum, default_value = "payments")]
        service: MonitoredService,

        #[arg(long, default_value = "1h")]
        time_range: String,
    },
    /// Print alerts as JSON, optionally for one service
    Alerts {
        /// Service name, matched case-insensitively
        #[arg(long)]
        service: Option<String>,
    },
}

#[tokio::main]
async fn main() -> Result<()> {
    dotenvy::dotenv().ok();
    logging::init();

    let cli = Cli::parse();

    match cli.command {
        Command::Process {
            input,
            gateway,
            gateway_url,
            gateway_timeout_ms,
            sandbox_limit,
            fee_schedule,
        } => {
            let fee_table = match fee_schedule {
                Some(path) => {
                    info!(path = %path.display(), "Loading fee schedule");
                    FeeSchedule::load(path)?.into_fee_table()?
                }
                None => FeeTable::standard(),
            };
            let settings = GatewaySettings {
                kind: gateway,
                url: gateway_url,
                timeout: Duration::from_millis(gateway_timeout_ms),
                sandbox_limit,
            };
            let processor = PaymentProcessor::with_fee_table(settings.build()?, fee_table);
            process_file(&processor, input).await
        }
        Command::Failed => {
            let processor = PaymentProcessor::new(None);
            let stdout = io::stdout();
            let mut writer = OutcomeWriter::new(stdout.lock());
            writer.write_payments(&processor.list_failed_payments())?;
            writer.flush()?;
            Ok(())
        }
        Command::Metrics {
            service,
            time_range,
        } => {
            let metrics = MetricsGenerator::from_entropy().snapshot(service, &time_range);
            println!("{}", serde_json::to_string_pretty(&metrics).into_diagnostic()?);
            Ok(())
        }
        Command::Alerts { service } => {
            let catalog = AlertCatalog::standard(Utc::now());
            let alerts = catalog.filter(service.as_deref());
            println!("{}", serde_json::to_string_pretty(&alerts).into_diagnostic()?);
            Ok(())
        }
    }
}

async fn process_file(processor: &PaymentProcessor, input: PathBuf) -> Result<()> {
    let file = File::open(input).into_diagnostic()?;
    let reader = PaymentReader::new(file);

    let stdout = io::stdout();
    let mut writer = OutcomeWriter::new(stdout.lock());
    writer.write_header()?;

    let (mut settled, mut failed) = (0usize, 0usize);
    for payment in reader.payments() {
        match payment {
            Ok(request) => match processor.settle(Some(&request)).await {
                Ok(outcome) => {
                    if outcome.settled {
                        settled += 1;
                    } else {
                        failed += 1;
                    }
                    writer.write_outcome(&request, &outcome)?;
                }
                // Already logged by the processor.
                Err(_) => failed += 1,
            },
            Err(e) => {
                error!("Error reading payment: {e}");
                failed += 1;
            }
        }
    }
    writer.flush()?;

    info!(settled, failed, "Finished processing payments");
    Ok(())
}
