//! HTTP server for the rendered dashboard
//!
//! The page is rendered once and shared read-only by every request. `GET /`
//! returns it; any other path is a 404.

use std::future::Future;
use std::sync::Arc;
use std::time::Instant;

use axum::Router;
use axum::extract::{Request, State};
use axum::http::StatusCode;
use axum::middleware::{self, Next};
use axum::response::{Html, IntoResponse, Response};
use axum::routing::get;
use tokio::net::TcpListener;

use crate::core::constants::server::{DEFAULT_HOST, DEFAULT_PORT};
use crate::core::error::{DashError, Result};
use crate::reporting::logging;

/// Where and how to serve the dashboard
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ServerSettings {
    pub host: String,
    pub port: u16,
    /// Enables per-request logging
    pub debug: bool,
}

impl Default for ServerSettings {
    fn default() -> Self {
        Self {
            host: DEFAULT_HOST.to_string(),
            port: DEFAULT_PORT,
            debug: false,
        }
    }
}

impl ServerSettings {
    pub fn address(&self) -> String {
        if self.host.contains(':') && !self.host.starts_with('[') {
            format!("[{}]:{}", self.host, self.port)
        } else {
            format!("{}:{}", self.host, self.port)
        }
    }
}

/// Build the router serving `page` at `/`.
pub fn router(page: Arc<str>, debug: bool) -> Router {
    let router = Router::new()
        .route("/", get(index))
        .fallback(not_found)
        .with_state(page);

    if debug {
        router.layer(middleware::from_fn(log_requests))
    } else {
        router
    }
}

async fn index(State(page): State<Arc<str>>) -> Html<String> {
    Html(page.to_string())
}

async fn not_found() -> impl IntoResponse {
    (StatusCode::NOT_FOUND, "Not Found")
}

async fn log_requests(request: Request, next: Next) -> Response {
    let method = request.method().to_string();
    let path = request.uri().path().to_string();
    let start = Instant::now();

    let response = next.run(request).await;

    logging::log_request(
        &method,
        &path,
        response.status().as_u16(),
        start.elapsed().as_millis(),
    );
    response
}

/// Bind the listening socket. A port already in use is a [`DashError::Bind`].
pub async fn bind(settings: &ServerSettings) -> Result<TcpListener> {
    let addr = settings.address();
    TcpListener::bind(&addr)
        .await
        .map_err(|source| DashError::Bind { addr, source })
}

/// Serve until Ctrl-C.
pub async fn serve(listener: TcpListener, router: Router) -> Result<()> {
    serve_with_shutdown(listener, router, shutdown_signal()).await
}

/// Serve until `signal` resolves, then finish in-flight requests.
pub async fn serve_with_shutdown<F>(listener: TcpListener, router: Router, signal: F) -> Result<()>
where
    F: Future<Output = ()> + Send + 'static,
{
    if let Ok(addr) = listener.local_addr() {
        logging::log_server_start(&addr.to_string());
    }

    axum::serve(listener, router)
        .with_graceful_shutdown(signal)
        .await
        .map_err(DashError::Server)
}

async fn shutdown_signal() {
    if tokio::signal::ctrl_c().await.is_err() {
        logging::log_warning("Could not listen for Ctrl-C, stop the process to exit");
        std::future::pending::<()>().await;
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use tokio::sync::oneshot;

    const PAGE: &str = "<!DOCTYPE html><html><body><h1>Dashboard</h1></body></html>";

    fn local_settings() -> ServerSettings {
        ServerSettings {
            host: "127.0.0.1".to_string(),
            port: 0,
            debug: true,
        }
    }

    async fn spawn_server(debug: bool) -> (String, oneshot::Sender<()>) {
        let listener = bind(&local_settings()).await.unwrap();
        let addr = listener.local_addr().unwrap();
        let (tx, rx) = oneshot::channel::<()>();
        tokio::spawn(serve_with_shutdown(
            listener,
            router(Arc::from(PAGE), debug),
            async move {
                let _ = rx.await;
            },
        ));
        (format!("http://{addr}"), tx)
    }

    #[test]
    fn test_default_settings() {
        let settings = ServerSettings::default();
        assert_eq!(settings.address(), "127.0.0.1:8050");
        assert!(!settings.debug);
    }

    #[test]
    fn test_ipv6_address_is_bracketed() {
        let settings = ServerSettings {
            host: "::1".to_string(),
            port: 9000,
            debug: false,
        };
        assert_eq!(settings.address(), "[::1]:9000");
    }

    #[tokio::test]
    async fn test_serves_page_at_root() {
        let (base, shutdown) = spawn_server(false).await;

        let response = reqwest::get(format!("{base}/")).await.unwrap();
        assert_eq!(response.status().as_u16(), 200);
        let content_type = response.headers()["content-type"].to_str().unwrap().to_string();
        assert!(content_type.starts_with("text/html"));
        assert_eq!(response.text().await.unwrap(), PAGE);

        let _ = shutdown.send(());
    }

    #[tokio::test]
    async fn test_other_paths_are_not_found() {
        let (base, shutdown) = spawn_server(true).await;

        let response = reqwest::get(format!("{base}/data.csv")).await.unwrap();
        assert_eq!(response.status().as_u16(), 404);

        let _ = shutdown.send(());
    }

    #[tokio::test]
    async fn test_second_bind_on_same_port_fails() {
        let first = bind(&local_settings()).await.unwrap();
        let port = first.local_addr().unwrap().port();

        let settings = ServerSettings {
            port,
            ..local_settings()
        };
        match bind(&settings).await {
            Err(DashError::Bind { addr, .. }) => assert_eq!(addr, format!("127.0.0.1:{port}")),
            other => panic!("expected bind error, got {other:?}"),
        }
    }
}
