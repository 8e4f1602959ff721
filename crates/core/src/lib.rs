pub mod config;
pub mod config_loader;
pub mod pnl;
pub mod pnl_formatter;

pub use config::{AppConfig, ServerConfig, TradierApiConfig};
pub use config_loader::ConfigLoader;
pub use pnl::{calculate_pnl, PnlError, PnlResult, Trade, CONTRACT_MULTIPLIER};
pub use pnl_formatter::PnlFormatter;
