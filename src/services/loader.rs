use anyhow::{Result, bail};
use std::future::Future;
use std::path::Path;
use tracing::{debug, info};

use crate::helpers::config::LoaderConfig;
use crate::services::payload::{Record, RecordPayload};

/// Destination for parsed records. Implemented by the MongoDB collection.
#[allow(async_fn_in_trait)]
pub trait RecordSink {
    async fn insert_one(&self, record: Record) -> Result<()>;

    /// Inserts in the given order and returns how many documents were written.
    async fn insert_many(&self, records: Vec<Record>) -> Result<usize>;
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct LoadOutcome {
    pub inserted: usize,
}

/// Writes the payload with exactly one sink call.
///
/// Not idempotent: loading the same payload twice writes it twice, and a
/// failed bulk insert may leave a prefix of the batch behind.
pub async fn load<S: RecordSink>(payload: RecordPayload, sink: &S) -> Result<LoadOutcome> {
    let inserted = match payload {
        RecordPayload::Batch(records) if records.is_empty() => {
            bail!("Records file holds an empty array, no documents to insert")
        }
        RecordPayload::Batch(records) => {
            debug!("Bulk inserting {} records", records.len());
            sink.insert_many(records).await?
        }
        RecordPayload::Single(record) => {
            debug!("Inserting a single record");
            sink.insert_one(record).await?;
            1
        }
    };

    Ok(LoadOutcome { inserted })
}

/// Config, then file, then connection, then the write. Each step runs only
/// if the previous one succeeded.
pub async fn run<C, R, F, Fut, S>(load_config: C, read: R, connect: F) -> Result<LoadOutcome>
where
    C: FnOnce() -> Result<LoaderConfig>,
    R: FnOnce(&Path) -> Result<RecordPayload>,
    F: FnOnce(&LoaderConfig) -> Fut,
    Fut: Future<Output = Result<S>>,
    S: RecordSink,
{
    let config = load_config()?;
    info!(
        "Loading {} into {}.{}",
        config.input_path.display(),
        config.database,
        config.collection
    );

    let payload = read(&config.input_path)?;
    info!("Parsed {} records", payload.len());

    let sink = connect(&config).await?;
    load(payload, &sink).await
}
