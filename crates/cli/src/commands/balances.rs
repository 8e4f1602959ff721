//! Prints account balances as pretty JSON.

use super::build_client;

/// Fetches balances and prints them to stdout.
///
/// # Errors
/// Returns an error if credentials are missing or the API call fails.
pub async fn run_balances(sandbox: bool) -> anyhow::Result<()> {
    let client = build_client(sandbox)?;

    tracing::info!("Fetching account balances from {}", client.base_url());

    let balances = client.get_balances().await?;

    if balances.is_empty() {
        println!("No balances returned.");
    } else {
        println!("{}", serde_json::to_string_pretty(&balances)?);
    }

    Ok(())
}
