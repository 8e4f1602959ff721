use crate::pnl::PnlResult;

/// Formats a [`PnlResult`] for terminal display, two decimal places.
pub struct PnlFormatter;

impl PnlFormatter {
    #[must_use]
    pub fn format(result: &PnlResult) -> String {
        let mut output = String::new();
        output.push_str(&format!("Total PnL: ${:.2}\n", result.total_pnl.round_dp(2)));
        output.push_str(&format!(
            "PnL Percentage: {:.2}%\n",
            result.pnl_percent.round_dp(2)
        ));
        output
    }
}
