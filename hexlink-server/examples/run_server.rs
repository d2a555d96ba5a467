//! Example to run the hexlink server standalone
//!
//! Run with: cargo run -p hexlink-server --example run_server

use hexlink_server::{run_server, ServerConfig};

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    // Initialize logging
    tracing_subscriber::fmt::init();

    let config = ServerConfig {
        port: 8000,
        static_dir: "frontend".to_string(),
    };

    println!("Starting hexlink server on port {}", config.port);
    println!("Static files from: {}", config.static_dir);
    println!("Open http://localhost:{}/index.html", config.port);

    run_server(config).await
}
