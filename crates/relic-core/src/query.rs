//! Rich-query helpers
//!
//! Builds field-equality selectors for the ledger's query engine and folds
//! query results into a single JSON array response.

use serde_json::{json, Value};
use std::fmt;

/// A single `(key, value)` pair returned by a rich query
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct QueryRecord {
    /// Primary key of the stored document
    pub key: String,
    /// Raw stored document bytes
    pub value: Vec<u8>,
}

impl QueryRecord {
    pub fn new(key: impl Into<String>, value: impl Into<Vec<u8>>) -> Self {
        Self {
            key: key.into(),
            value: value.into(),
        }
    }
}

/// Cursor over rich-query results
///
/// Implementations hold backend resources until [`close`](Self::close) is
/// called. `close` must be idempotent, and iteration after close yields
/// nothing.
pub trait StateQueryIterator<E>: Iterator<Item = Result<QueryRecord, E>> + Send {
    /// Release the cursor
    fn close(&mut self);
}

/// Equality selector: match documents whose `field` equals `value`
///
/// The selector is kept structured. Its wire form is produced by a JSON
/// serializer, so a value containing quotes or braces stays a plain string
/// and cannot add clauses to the query.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct Selector {
    field: String,
    value: String,
}

impl Selector {
    /// Selector matching documents where `field == value`
    pub fn field_equals(field: impl Into<String>, value: impl Into<String>) -> Self {
        Self {
            field: field.into(),
            value: value.into(),
        }
    }

    pub fn field(&self) -> &str {
        &self.field
    }

    pub fn value(&self) -> &str {
        &self.value
    }

    /// CouchDB-style query document: `{"selector":{"<field>":"<value>"}}`
    pub fn to_query_document(&self) -> Value {
        let mut clause = serde_json::Map::new();
        clause.insert(self.field.clone(), Value::String(self.value.clone()));
        json!({ "selector": clause })
    }

    /// Check whether a stored JSON document satisfies this selector
    ///
    /// Documents that are not JSON objects never match.
    pub fn matches(&self, document: &[u8]) -> bool {
        match serde_json::from_slice::<Value>(document) {
            Ok(Value::Object(fields)) => fields
                .get(&self.field)
                .and_then(Value::as_str)
                .is_some_and(|v| v == self.value),
            _ => false,
        }
    }
}

impl fmt::Display for Selector {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.to_query_document())
    }
}

/// Fold query results into `[{"Key":"<key>", "Record":<document>}, ...]`
///
/// The iterator is drained and then closed on every exit path. Records are
/// embedded as-is, so each stored value must already be a JSON document. On
/// the first iteration error the partial buffer is dropped and the error is
/// returned.
pub fn assemble_results<E>(results: &mut dyn StateQueryIterator<E>) -> Result<Vec<u8>, E> {
    let assembled = write_results(results);
    results.close();
    assembled
}

fn write_results<E>(results: &mut dyn StateQueryIterator<E>) -> Result<Vec<u8>, E> {
    let mut buffer = Vec::new();
    buffer.push(b'[');

    let mut member_written = false;
    for item in &mut *results {
        let record = item?;

        if member_written {
            buffer.push(b',');
        }
        buffer.extend_from_slice(b"{\"Key\":");
        buffer.extend_from_slice(&quoted(&record.key));
        buffer.extend_from_slice(b", \"Record\":");
        buffer.extend_from_slice(&record.value);
        buffer.push(b'}');
        member_written = true;
    }

    buffer.push(b']');
    Ok(buffer)
}

fn quoted(key: &str) -> Vec<u8> {
    Value::String(key.to_owned()).to_string().into_bytes()
}
