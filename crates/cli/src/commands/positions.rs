//! Prints open positions as pretty JSON.

use super::build_client;

/// Fetches positions and prints them to stdout.
///
/// # Errors
/// Returns an error if credentials are missing or the API call fails.
pub async fn run_positions(sandbox: bool) -> anyhow::Result<()> {
    let client = build_client(sandbox)?;

    tracing::info!("Fetching open positions from {}", client.base_url());

    let positions = client.get_positions().await?;

    // Tradier reports an empty book as the literal string "null".
    if positions.is_null() || positions == "null" {
        println!("No open positions.");
    } else {
        println!("{}", serde_json::to_string_pretty(&positions)?);
    }

    Ok(())
}
