use clap::{Parser, Subcommand};

mod commands;

use commands::PnlArgs;

#[derive(Parser)]
#[command(name = "options-desk")]
#[command(about = "Options PnL calculator and Tradier account viewer", long_about = None)]
struct Cli {
    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Calculate profit/loss for an options trade
    Pnl(PnlArgs),
    /// Fetch and print account balances
    Balances {
        /// Use the Tradier sandbox environment
        #[arg(long)]
        sandbox: bool,
    },
    /// Fetch and print open positions
    Positions {
        /// Use the Tradier sandbox environment
        #[arg(long)]
        sandbox: bool,
    },
    /// Start the balance viewer web server
    Server {
        /// Server address (host:port); overrides the config file
        #[arg(short, long)]
        addr: Option<String>,
    },
}

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    let cli = Cli::parse();

    tracing_subscriber::fmt()
        .with_env_filter(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| tracing_subscriber::EnvFilter::new("info")),
        )
        .init();

    match cli.command {
        Commands::Pnl(args) => {
            commands::run_pnl(&args)?;
        }
        Commands::Balances { sandbox } => {
            commands::run_balances(sandbox).await?;
        }
        Commands::Positions { sandbox } => {
            commands::run_positions(sandbox).await?;
        }
        Commands::Server { addr } => {
            run_server(addr.as_deref()).await?;
        }
    }

    Ok(())
}

async fn run_server(addr_override: Option<&str>) -> anyhow::Result<()> {
    use options_desk_tradier::{TradierClient, TradierClientConfig};
    use std::sync::Arc;

    let config = options_desk_core::ConfigLoader::load()?;

    let addr = addr_override.map_or_else(
        || format!("{}:{}", config.server.host, config.server.port),
        str::to_string,
    );

    let client_config =
        TradierClientConfig::default().with_base_url(config.tradier.api_url.clone());
    let client = Arc::new(TradierClient::new(client_config)?);

    let server = options_desk_web_api::ApiServer::new(client);
    server.serve(&addr).await?;

    Ok(())
}
