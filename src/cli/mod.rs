pub mod types;
pub mod logging;

use clap::Parser;
use log::error;
use std::sync::Arc;

use crate::config;
use crate::pages::PageRepository;
use crate::server;
use crate::server::config::ServerConfig;

/// Run the command-line interface
pub async fn run() {
    let cli = types::Cli::parse();

    // Initialize logging system
    logging::init_logging(cli.debug);

    // Configure backtrace
    logging::configure_backtrace(cli.trace);

    let config = match config::load_config(cli.config.as_deref(), cli.overrides()) {
        Ok(cfg) => cfg,
        Err(e) => {
            error!("Failed to load config: {}", e);
            std::process::exit(1);
        }
    };

    let repository = Arc::new(PageRepository::open(&config.root, config.index_path()));
    let server_config = ServerConfig::from(&config);

    if let Err(e) = server::serve(&server_config, repository).await {
        error!("Server error: {}", e);
        std::process::exit(1);
    }
}
