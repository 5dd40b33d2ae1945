//! Shared utilities for integration tests.

use std::net::SocketAddr;

use locale_edge::config::SiteConfig;
use locale_edge::http::{AppState, HttpServer};
use locale_edge::lifecycle::{bootstrap, Shutdown};
use tokio::net::TcpListener;

pub const BASE_URL: &str = "https://site";

/// Default config pointed at the bundled dictionaries and `https://site`.
pub fn test_config() -> SiteConfig {
    let mut config = SiteConfig::default();
    config.site.base_url = BASE_URL.to_string();
    config.listener.bind_address = "127.0.0.1:0".to_string();
    config.i18n.content_dir = concat!(env!("CARGO_MANIFEST_DIR"), "/content").to_string();
    config
}

#[allow(dead_code)]
pub fn test_state() -> AppState {
    bootstrap(test_config()).expect("test config bootstraps")
}

/// Running server on an ephemeral port. Dropping it leaves the server
/// running until the test runtime shuts down; call `stop` to drain early.
#[allow(dead_code)]
pub struct TestServer {
    pub addr: SocketAddr,
    shutdown: Shutdown,
}

#[allow(dead_code)]
impl TestServer {
    pub fn url(&self, path: &str) -> String {
        format!("http://{}{}", self.addr, path)
    }

    pub fn stop(&self) {
        self.shutdown.trigger();
    }
}

#[allow(dead_code)]
pub async fn spawn_server(config: SiteConfig) -> TestServer {
    let state = bootstrap(config).expect("test config bootstraps");
    let listener = TcpListener::bind("127.0.0.1:0").await.unwrap();
    let addr = listener.local_addr().unwrap();

    let shutdown = Shutdown::new();
    let rx = shutdown.subscribe();
    tokio::spawn(async move {
        HttpServer::new(state).run(listener, rx).await.unwrap();
    });

    TestServer { addr, shutdown }
}

/// Client that reports redirects instead of following them.
#[allow(dead_code)]
pub fn client() -> reqwest::Client {
    reqwest::Client::builder()
        .redirect(reqwest::redirect::Policy::none())
        .build()
        .unwrap()
}
