use anyhow::{Context, Result, bail};
use serde_json::{Map, Value};
use std::fs;
use std::path::Path;

/// One document as read from the input file.
pub type Record = Map<String, Value>;

/// Shape of the input file, decided once when it is parsed.
#[derive(Debug, Clone, PartialEq)]
pub enum RecordPayload {
    /// Top-level JSON array; order is the insertion order.
    Batch(Vec<Record>),
    /// Top-level JSON object.
    Single(Record),
}

impl RecordPayload {
    pub fn len(&self) -> usize {
        match self {
            RecordPayload::Batch(records) => records.len(),
            RecordPayload::Single(_) => 1,
        }
    }
}

pub fn read_payload(path: &Path) -> Result<RecordPayload> {
    let text = fs::read_to_string(path)
        .with_context(|| format!("Failed to read records file {}", path.display()))?;
    parse_payload(&text).with_context(|| format!("Invalid records file {}", path.display()))
}

pub fn parse_payload(text: &str) -> Result<RecordPayload> {
    let value: Value = serde_json::from_str(text).context("Malformed JSON")?;

    match value {
        Value::Array(items) => {
            let mut records = Vec::with_capacity(items.len());
            for (index, item) in items.into_iter().enumerate() {
                match item {
                    Value::Object(record) => records.push(record),
                    other => bail!(
                        "Element {} is {}, expected an object",
                        index,
                        json_kind(&other)
                    ),
                }
            }
            Ok(RecordPayload::Batch(records))
        }
        Value::Object(record) => Ok(RecordPayload::Single(record)),
        other => bail!(
            "Top-level value is {}, expected an object or an array of objects",
            json_kind(&other)
        ),
    }
}

fn json_kind(value: &Value) -> &'static str {
    match value {
        Value::Null => "null",
        Value::Bool(_) => "a boolean",
        Value::Number(_) => "a number",
        Value::String(_) => "a string",
        Value::Array(_) => "an array",
        Value::Object(_) => "an object",
    }
}
