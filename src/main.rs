mod helpers;
mod services;

use anyhow::Result;
use helpers::config::LoaderConfig;
use helpers::profiling::get_rss_memory;
use services::database::{create_mongo_client, get_collection};
use services::loader::run;
use services::payload::read_payload;
use std::time::Instant;
use tracing::info;

#[tokio::main]
async fn main() -> Result<()> {
    helpers::logging::init();

    let start = Instant::now();
    let initial_memory = get_rss_memory();

    let outcome = run(LoaderConfig::from_env, read_payload, |config: &LoaderConfig| {
        let config = config.clone();
        async move {
            let mongo_client = create_mongo_client(&config).await?;
            Ok::<_, anyhow::Error>(get_collection(&mongo_client, &config))
        }
    })
    .await?;
    println!("Inserted records data into MongoDB.");

    let final_memory = get_rss_memory();
    info!(
        "Inserted {} documents in {:?}, memory used: {} KB",
        outcome.inserted,
        start.elapsed(),
        final_memory.saturating_sub(initial_memory)
    );
    Ok(())
}
