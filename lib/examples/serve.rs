//! Serves the navigation shell under `/jornal/` on port 8001.
//!
//! Try `curl -i localhost:8001/jornal/` to see the redirect to the login
//! view, or `curl localhost:8001/jornal/api/roles` for the role options.

use std::net::SocketAddr;

use jornal::Config;

#[tokio::main]
async fn main() -> jornal::Result<()> {
    let config = Config {
        address: SocketAddr::from(([127, 0, 0, 1], 8001)),
        base_url: "/jornal/".to_string(),
        ..Default::default()
    };

    jornal::axum::start(config).await
}
