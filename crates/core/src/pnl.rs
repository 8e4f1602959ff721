//! Options trade PnL math.
//!
//! Options are quoted per share and one contract covers 100 underlying
//! shares, so both the dollar PnL and the cost basis scale by that
//! multiplier.

use rust_decimal::Decimal;
use rust_decimal_macros::dec;
use serde::{Deserialize, Serialize};
use thiserror::Error;

/// Shares covered by a single options contract.
pub const CONTRACT_MULTIPLIER: Decimal = dec!(100);

/// A single options trade, held only long enough to price it.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct Trade {
    /// Entry price per option unit.
    pub entry_price: Decimal,

    /// Exit price per option unit at close.
    pub exit_price: Decimal,

    /// Number of contracts traded.
    pub contracts: i64,
}

impl Trade {
    /// Creates a trade from its three inputs.
    #[must_use]
    pub const fn new(entry_price: Decimal, exit_price: Decimal, contracts: i64) -> Self {
        Self {
            entry_price,
            exit_price,
            contracts,
        }
    }

    /// Prices this trade.
    ///
    /// # Errors
    /// Returns [`PnlError::ZeroCost`] when the trade has no cost basis.
    pub fn pnl(&self) -> Result<PnlResult, PnlError> {
        calculate_pnl(self.entry_price, self.exit_price, self.contracts)
    }
}

/// Result of pricing a trade. Derived once, never mutated.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct PnlResult {
    /// Total profit or loss in dollars.
    pub total_pnl: Decimal,

    /// Profit or loss as a percentage of cost basis.
    pub pnl_percent: Decimal,
}

/// Errors from the PnL calculator.
#[derive(Debug, Error)]
pub enum PnlError {
    /// The trade has no cost basis, so a PnL percentage is undefined.
    #[error(
        "trade has zero cost basis (entry price {entry_price}, {contracts} contracts); \
         cannot compute a PnL percentage"
    )]
    ZeroCost {
        /// Entry price of the offending trade.
        entry_price: Decimal,
        /// Contract count of the offending trade.
        contracts: i64,
    },
}

/// Computes total PnL and PnL percentage for an options trade.
///
/// `total_pnl = (exit_price - entry_price) * 100 * contracts` and
/// `pnl_percent = total_pnl / (entry_price * 100 * contracts) * 100`.
/// No rounding is applied here; display layers format to two decimals.
///
/// No sign constraint is enforced on any input.
///
/// # Errors
/// Returns [`PnlError::ZeroCost`] when `entry_price` or `contracts` is
/// zero, since the percentage would divide by a zero cost basis.
pub fn calculate_pnl(
    entry_price: Decimal,
    exit_price: Decimal,
    contracts: i64,
) -> Result<PnlResult, PnlError> {
    let contracts_dec = Decimal::from(contracts);

    let total_cost = entry_price * CONTRACT_MULTIPLIER * contracts_dec;
    if total_cost.is_zero() {
        return Err(PnlError::ZeroCost {
            entry_price,
            contracts,
        });
    }

    let per_contract_pnl = (exit_price - entry_price) * CONTRACT_MULTIPLIER;
    let total_pnl = per_contract_pnl * contracts_dec;
    let pnl_percent = (total_pnl / total_cost) * Decimal::ONE_HUNDRED;

    Ok(PnlResult {
        total_pnl,
        pnl_percent,
    })
}
