use dotenvy::dotenv;
use shopshelf::config;
use shopshelf::errors::Result;
use shopshelf::shell;
use shopshelf::store::BlobStore;
use tracing::{error, info};
use tracing_subscriber::EnvFilter;

fn main() -> Result<()> {
    // 1. Initialize tracing (as early as possible)
    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info")),
        )
        .init();

    // 2. Load .env file (non-fatal, env vars can be set externally)
    dotenv().ok();
    info!("Attempted to load .env file.");

    // 3. Load the main application configuration
    let app_config = config::load_app_configuration()?;
    info!("Successfully processed application configuration.");

    // 4. Open the blob store
    let mut store = BlobStore::open(&app_config.data_dir)
        .inspect(|_| info!("Blob store opened successfully."))
        .inspect_err(|e| error!("Failed to open blob store: {e}"))?;

    // 5. Seed the catalog on first run
    let catalog = config::catalog::load_catalog(&app_config.catalog_path)
        .inspect_err(|e| error!("Failed to load seed catalog: {e}"))?;
    store
        .seed_products(catalog.products)
        .inspect_err(|e| error!("Failed to seed catalog: {e}"))?;

    // 6. Run the interactive shell
    shell::run_shell(&mut store, &app_config)?;

    Ok(())
}
