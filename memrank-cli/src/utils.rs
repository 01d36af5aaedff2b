use crate::args::RankArgs;
use is_terminal::IsTerminal;
use memrank::MemrankError;
use serde_json::{Map, Value, json};
use std::io::Read;

/// Read a JSON document from a file, or from stdin when `source` is `None`
/// or `"-"`.
pub fn read_json_input(source: Option<&str>) -> memrank::Result<Value> {
    let text = match source {
        Some(path) if path != "-" => std::fs::read_to_string(path)
            .map_err(|e| MemrankError::Io(format!("Failed to read '{}': {}", path, e)))?,
        _ => {
            let mut stdin = std::io::stdin();
            if stdin.is_terminal() {
                return Err(MemrankError::Other(
                    "No records given. Pass --records FILE or pipe a JSON array on stdin"
                        .to_string(),
                ));
            }
            let mut text = String::new();
            stdin.read_to_string(&mut text)?;
            text
        }
    };

    parse_records(&text)
}

/// Parse the text of a records document.
pub fn parse_records(text: &str) -> memrank::Result<Value> {
    if text.trim().is_empty() {
        return Ok(json!([]));
    }
    Ok(serde_json::from_str(text)?)
}

/// Build the host-side query object from command-line flags.
///
/// Only flags that were given are set, so unset fields keep the ranker's
/// defaults.
pub fn build_query(args: &RankArgs) -> Value {
    let mut query = Map::new();
    if let Some(topic) = &args.topic {
        query.insert("topic".to_string(), json!(topic));
    }
    if let Some(importance_min) = args.importance_min {
        query.insert("importance_min".to_string(), json!(importance_min));
    }
    if let Some(limit) = args.limit {
        query.insert("limit".to_string(), json!(limit));
    }
    Value::Object(query)
}
