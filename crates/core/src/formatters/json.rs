use serde::Serialize;

use crate::Result;
use crate::job::JobRecord;
use crate::word::WordRecord;

/// Configuration for JSON output
#[derive(Debug, Clone, Default)]
pub struct JsonConfig {
    /// Pretty print JSON output
    pub pretty: bool,
}

/// Tagged JSON envelope for an extracted record.
///
/// `record` is `null` when nothing could be extracted.
#[derive(Debug, Clone, Serialize)]
#[serde(tag = "kind", content = "record", rename_all = "snake_case")]
pub enum JsonRecord<'a> {
    Word(Option<&'a WordRecord>),
    Job(Option<&'a JobRecord>),
}

/// Serializes an extracted record.
pub fn convert_to_json(record: &JsonRecord<'_>, config: &JsonConfig) -> Result<String> {
    let json = if config.pretty { serde_json::to_string_pretty(record)? } else { serde_json::to_string(record)? };
    Ok(json)
}
