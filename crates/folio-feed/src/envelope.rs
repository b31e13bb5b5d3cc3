//! Visualization query response envelope.
//!
//! The query endpoint answers with JavaScript of the form
//! `google.visualization.Query.setResponse({...});`. The JSON payload holds a
//! table of labelled columns and rows of optional cells.

use std::sync::LazyLock;

use regex::Regex;
use serde::Deserialize;
use serde_json::Value;

use crate::FeedError;

static ENVELOPE_RE: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"(?s)setResponse\((.*?)\);\s*\z").unwrap());

#[derive(Debug, Default, Deserialize)]
struct Response {
    #[serde(default)]
    table: Option<Table>,
}

/// Tabular payload of a query response.
#[derive(Debug, Default, Clone, Deserialize)]
pub struct Table {
    #[serde(default)]
    pub cols: Vec<Column>,
    #[serde(default)]
    pub rows: Vec<Row>,
}

#[derive(Debug, Default, Clone, Deserialize)]
pub struct Column {
    #[serde(default)]
    pub label: Option<String>,
}

#[derive(Debug, Default, Clone, Deserialize)]
pub struct Row {
    #[serde(default)]
    pub c: Vec<Option<Cell>>,
}

/// Single cell: raw value `v` and formatted value `f`.
#[derive(Debug, Default, Clone, Deserialize)]
pub struct Cell {
    #[serde(default)]
    pub v: Option<Value>,
    #[serde(default)]
    pub f: Option<String>,
}

impl Table {
    /// Column labels, trimmed and lower-cased.
    #[must_use]
    pub fn labels(&self) -> Vec<String> {
        self.cols
            .iter()
            .map(|c| c.label.as_deref().unwrap_or_default().trim().to_lowercase())
            .collect()
    }
}

impl Row {
    /// Text of the cell at `index`.
    ///
    /// Uses the raw value when present, the formatted value otherwise, and
    /// an empty string when the column is absent or the cell is null.
    #[must_use]
    pub fn text(&self, index: Option<usize>) -> String {
        let Some(cell) = index.and_then(|i| self.c.get(i)).and_then(Option::as_ref) else {
            return String::new();
        };
        match &cell.v {
            Some(Value::Null) | None => cell.f.clone().unwrap_or_default(),
            Some(value) => value_text(value),
        }
    }
}

fn value_text(value: &Value) -> String {
    match value {
        Value::String(s) => s.clone(),
        Value::Number(n) => match n.as_i64() {
            Some(i) => i.to_string(),
            // f64 Display prints integral values without a fraction.
            None => n.as_f64().map_or_else(|| n.to_string(), |f| f.to_string()),
        },
        other => other.to_string(),
    }
}

/// Extract the table from a query response body.
///
/// A response without a table yields an empty one.
///
/// # Errors
///
/// Returns [`FeedError::Format`] if the envelope is missing and
/// [`FeedError::Payload`] if its payload is not valid JSON.
pub fn parse_envelope(body: &str) -> Result<Table, FeedError> {
    let captures = ENVELOPE_RE.captures(body).ok_or(FeedError::Format)?;
    let payload = captures.get(1).map_or("", |m| m.as_str());
    let response: Response = serde_json::from_str(payload)?;
    Ok(response.table.unwrap_or_default())
}
