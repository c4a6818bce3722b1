// Module declarations
mod cli;
mod config;
mod pages;
mod server;
mod utils;

#[tokio::main]
async fn main() {
    // Run the CLI
    cli::run().await;
}
