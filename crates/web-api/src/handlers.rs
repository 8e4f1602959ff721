use crate::page;
use axum::{extract::State, response::Html};
use options_desk_tradier::TradierClient;
use std::sync::Arc;

/// Renders the account balances page.
///
/// Makes one outbound call to Tradier per request. The route always
/// answers HTTP 200 with HTML; an upstream failure is shown in-page as
/// an error string carrying the upstream status code and body.
pub async fn index(State(client): State<Arc<TradierClient>>) -> Html<String> {
    match client.get_balances().await {
        Ok(balances) => Html(page::render_balances(&balances)),
        Err(err) => {
            tracing::warn!("balance fetch failed: {err}");
            Html(page::render_error(&err.to_string()))
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use options_desk_tradier::{TradierAuth, TradierClientConfig};
    use serde_json::json;
    use wiremock::matchers::{method, path};
    use wiremock::{Mock, MockServer, ResponseTemplate};

    async fn client_against(mock_server: &MockServer) -> Arc<TradierClient> {
        let config = TradierClientConfig::default().with_base_url(mock_server.uri());
        let auth = TradierAuth::new("VA000001", "test-token").unwrap();
        Arc::new(TradierClient::with_auth(config, auth).unwrap())
    }

    #[tokio::test]
    async fn index_renders_balances_on_success() {
        let mock_server = MockServer::start().await;

        Mock::given(method("GET"))
            .and(path("/accounts/VA000001/balances"))
            .respond_with(ResponseTemplate::new(200).set_body_json(json!({
                "balances": { "cash": 1000 }
            })))
            .mount(&mock_server)
            .await;

        let client = client_against(&mock_server).await;
        let Html(html) = index(State(client)).await;

        assert!(html.contains("cash"));
        assert!(html.contains("1000"));
        assert!(!html.contains("class=\"error\""));
    }

    #[tokio::test]
    async fn index_renders_error_on_unauthorized() {
        let mock_server = MockServer::start().await;

        Mock::given(method("GET"))
            .and(path("/accounts/VA000001/balances"))
            .respond_with(ResponseTemplate::new(401).set_body_string("unauthorized"))
            .mount(&mock_server)
            .await;

        let client = client_against(&mock_server).await;
        let Html(html) = index(State(client)).await;

        assert!(html.contains("401"));
        assert!(html.contains("unauthorized"));
        // No balances mapping on the error path.
        assert!(!html.contains("<table>"));
    }

    #[tokio::test]
    async fn index_renders_error_when_upstream_is_unreachable() {
        // Connection refused: same in-page error path as an API failure.
        let config = TradierClientConfig::default()
            .with_base_url("http://127.0.0.1:1")
            .with_timeout_secs(1);
        let auth = TradierAuth::new("VA000001", "test-token").unwrap();
        let client = Arc::new(TradierClient::with_auth(config, auth).unwrap());

        let Html(html) = index(State(client)).await;

        assert!(html.contains("class=\"error\""));
        assert!(!html.contains("<table>"));
    }
}
