use anyhow::{Context, Result};
use mongodb::{Client, Collection, options::ClientOptions, options::InsertManyOptions};

use crate::helpers::config::LoaderConfig;
use crate::services::loader::RecordSink;
use crate::services::payload::Record;

/// Builds the client. No round trip happens until the first write.
pub async fn create_mongo_client(config: &LoaderConfig) -> Result<Client> {
    let mut options = ClientOptions::parse(&config.mongodb_uri)
        .await
        .context("Invalid MONGODB_URI")?;
    options
        .app_name
        .get_or_insert_with(|| env!("CARGO_PKG_NAME").to_string());
    let client = Client::with_options(options).context("Failed to create MongoDB client")?;
    Ok(client)
}

pub fn get_collection(mongo_client: &Client, config: &LoaderConfig) -> Collection<Record> {
    let db = mongo_client.database(&config.database);
    db.collection::<Record>(&config.collection)
}

impl RecordSink for Collection<Record> {
    async fn insert_one(&self, record: Record) -> Result<()> {
        Collection::insert_one(self, record, None)
            .await
            .with_context(|| format!("Failed to insert into {}", self.namespace()))?;
        Ok(())
    }

    async fn insert_many(&self, records: Vec<Record>) -> Result<usize> {
        let options = InsertManyOptions::builder().ordered(true).build();
        let result = Collection::insert_many(self, records, options)
            .await
            .with_context(|| format!("Failed to bulk insert into {}", self.namespace()))?;
        Ok(result.inserted_ids.len())
    }
}
