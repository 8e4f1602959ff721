use crate::handlers;
use axum::{routing::get, Router};
use options_desk_tradier::TradierClient;
use std::sync::Arc;
use tower_http::cors::{Any, CorsLayer};
use tower_http::trace::TraceLayer;

pub struct ApiServer {
    client: Arc<TradierClient>,
}

impl ApiServer {
    #[must_use]
    pub const fn new(client: Arc<TradierClient>) -> Self {
        Self { client }
    }

    pub fn router(&self) -> Router {
        let cors = CorsLayer::new()
            .allow_origin(Any)
            .allow_methods(Any)
            .allow_headers(Any);

        Router::new()
            .route("/", get(handlers::index))
            .layer(cors)
            .layer(TraceLayer::new_for_http())
            .with_state(self.client.clone())
    }

    /// Starts the web server listening on the specified address.
    ///
    /// # Errors
    /// Returns an error if the server fails to bind to the address or serve requests.
    pub async fn serve(self, addr: &str) -> anyhow::Result<()> {
        let listener = tokio::net::TcpListener::bind(addr).await?;
        tracing::info!("Balance viewer listening on {}", addr);

        axum::serve(listener, self.router()).await?;

        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use axum::body::{to_bytes, Body};
    use axum::http::{Request, StatusCode};
    use options_desk_tradier::{TradierAuth, TradierClientConfig};
    use serde_json::json;
    use tower::ServiceExt;
    use wiremock::matchers::{method, path};
    use wiremock::{Mock, MockServer, ResponseTemplate};

    fn server_against(base_url: &str) -> ApiServer {
        let config = TradierClientConfig::default().with_base_url(base_url);
        let auth = TradierAuth::new("VA000001", "test-token").unwrap();
        let client = Arc::new(TradierClient::with_auth(config, auth).unwrap());
        ApiServer::new(client)
    }

    async fn get_root(server: &ApiServer) -> (StatusCode, String) {
        let response = server
            .router()
            .oneshot(Request::builder().uri("/").body(Body::empty()).unwrap())
            .await
            .unwrap();

        let status = response.status();
        let bytes = to_bytes(response.into_body(), usize::MAX).await.unwrap();
        (status, String::from_utf8(bytes.to_vec()).unwrap())
    }

    #[tokio::test]
    async fn root_route_serves_balances_page() {
        let mock_server = MockServer::start().await;

        Mock::given(method("GET"))
            .and(path("/accounts/VA000001/balances"))
            .respond_with(ResponseTemplate::new(200).set_body_json(json!({
                "balances": { "total_cash": 1000 }
            })))
            .mount(&mock_server)
            .await;

        let server = server_against(&mock_server.uri());
        let (status, body) = get_root(&server).await;

        assert_eq!(status, StatusCode::OK);
        assert!(body.contains("total_cash"));
    }

    #[tokio::test]
    async fn upstream_failure_still_answers_200() {
        let mock_server = MockServer::start().await;

        Mock::given(method("GET"))
            .and(path("/accounts/VA000001/balances"))
            .respond_with(ResponseTemplate::new(401).set_body_string("unauthorized"))
            .mount(&mock_server)
            .await;

        let server = server_against(&mock_server.uri());
        let (status, body) = get_root(&server).await;

        // Failure is communicated in-page, not via HTTP status.
        assert_eq!(status, StatusCode::OK);
        assert!(body.contains("401"));
        assert!(body.contains("unauthorized"));
    }
}
