use log::{error, info};
use std::net::SocketAddr;
use std::sync::Arc;
use tokio::signal;
use tower_http::catch_panic::CatchPanicLayer;

use crate::pages::PageRepository;
use crate::server::app::create_app;
use crate::server::config::ServerConfig;
use crate::server::types::BoxResult;

/// Serve the page API until the server fails or Ctrl+C is received
pub async fn serve(server_config: &ServerConfig, repository: Arc<PageRepository>) -> BoxResult<()> {
    let root = repository.root().to_path_buf();
    let app = create_app(repository).layer(CatchPanicLayer::new());

    let addr: SocketAddr = server_config.address_string().parse()?;

    info!("Starting server at {}", server_config.url());
    info!("Serving pages from {}", root.display());

    let server = axum_server::bind(addr).serve(app.into_make_service());

    print_server_banner(server_config);

    tokio::select! {
        result = server => {
            if let Err(e) = result {
                error!("Server error: {}", e);
                return Err(e.into());
            }
            info!("Server stopped");
        },
        _ = signal::ctrl_c() => {
            info!("Shutting down server (received Ctrl+C)...");
        },
    }

    Ok(())
}

/// Print a banner with server information
fn print_server_banner(server_config: &ServerConfig) {
    println!("\n{}", "-".repeat(60));
    println!(" slugpages");
    println!(" - URL: {}", server_config.url());
    println!(" - Port: {}", server_config.port);
    println!(" - Press Ctrl+C to stop");
    println!("{}\n", "-".repeat(60));
}
