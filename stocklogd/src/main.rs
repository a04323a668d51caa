use clap::Parser;
use stocklog_axum::config::AxumConfig;
use stocklog_core::validation::{DEFAULT_DATE_FORMAT, DEFAULT_MONTHLY_CAP};
use stocklog_sqlite::{Config, Database, Error};
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

#[tokio::main]
async fn main() -> Result<(), Error> {
    // The storage and API layers instrument their operations with `tracing`
    // events; subscribe so they land on stdio, filtered by RUST_LOG.
    tracing_subscriber::registry()
        .with(tracing_subscriber::EnvFilter::from_default_env())
        .with(tracing_subscriber::fmt::layer())
        .init();

    let args = Args::import();

    match args {
        Ok(args) => {
            // Open the database and reconcile its stored configuration with
            // the one given on the command line.
            let database = Database::open(
                args.database.as_ref(),
                Some(&Config {
                    date_format: args.date_format,
                    monthly_purchase_cap: args.monthly_cap,
                }),
            )?;

            let config = AxumConfig {
                bind_address: (std::net::Ipv4Addr::UNSPECIFIED, args.api_port).into(),
            };

            if let Err(error) = stocklog_axum::start_server(config, database).await {
                tracing::error!(?error, "server stopped");
            }
        }
        Err(e) => {
            let _ = e.print();
        }
    }

    Ok(())
}

#[derive(Parser, Debug)]
#[command(version, about, long_about = None)]
pub struct Args {
    /// The port to listen on
    #[arg(long, default_value_t = 8080, env = "API_PORT")]
    pub api_port: u16,

    /// The location of the inventory database (if omitted, use an in-memory db)
    #[arg(long, env = "DATABASE")]
    pub database: Option<std::path::PathBuf>,

    /// The strict format pattern incoming business dates must match
    #[arg(long, default_value = DEFAULT_DATE_FORMAT, env = "DATE_FORMAT")]
    pub date_format: String,

    /// The maximum amount a product may accumulate in purchases per calendar month
    #[arg(long, default_value_t = DEFAULT_MONTHLY_CAP, env = "MONTHLY_CAP")]
    pub monthly_cap: i64,
}

impl Args {
    pub fn import() -> Result<Self, clap::Error> {
        // Load a .env file when present; a missing one is not an error.
        let _ = dotenvy::dotenv();
        Self::try_parse()
    }
}
