//! Ladrilleria API server binary.

use ladrilleria::server::{ApiServer, CliArgs};
use ladrilleria::storage::create_table_store;
use tracing_subscriber::EnvFilter;

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::from_default_env())
        .init();

    let args = CliArgs::parse_args();
    let config = args.to_config();

    let table = create_table_store(&config.storage).await?;
    ApiServer::new(config, table).serve().await?;
    Ok(())
}
