mod api_doc;
mod error;
mod handlers;
mod notify;
mod services;
mod setup;
mod state;
mod telemetry;

use folio_core::Config;

// Use mimalloc as the global allocator for better performance and lower fragmentation,
// especially when running on musl-based systems inside containers.
#[global_allocator]
static GLOBAL: mimalloc::MiMalloc = mimalloc::MiMalloc;

#[tokio::main]
async fn main() -> Result<(), anyhow::Error> {
    // Load configuration
    let config = Config::from_env()?;

    // Initialize the application (database, services, routes)
    let (state, router) = crate::setup::initialize_app(config.clone()).await?;

    // Start the server
    crate::setup::server::start_server(&config, router).await?;

    // Stop accepting queued background work; in-flight cleanup is lost by design.
    state.dispatcher.shutdown().await;

    Ok(())
}
