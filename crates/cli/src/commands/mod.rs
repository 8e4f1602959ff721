mod balances;
mod pnl;
mod positions;

pub use balances::run_balances;
pub use pnl::{run_pnl, PnlArgs};
pub use positions::run_positions;

use options_desk_tradier::{TradierClient, TradierClientConfig};

/// Builds a Tradier client for the chosen environment, reading
/// credentials from the environment variables.
pub(crate) fn build_client(sandbox: bool) -> anyhow::Result<TradierClient> {
    let config = if sandbox {
        TradierClientConfig::sandbox()
    } else {
        TradierClientConfig::production()
    };

    Ok(TradierClient::new(config)?)
}
