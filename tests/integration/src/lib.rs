//! End-to-end tests for the localdyn store.
//!
//! Every test drives a fresh [`LocalDynamoDB`] through its public methods
//! only. Nothing needs a server, so all of them run under a plain
//! `cargo test -p localdyn-integration`. Set `RUST_LOG=debug` to see the
//! store's tracing output.

use std::collections::HashMap;
use std::sync::Once;

use localdyn_core::{FixedClock, LocalDynamoDB, SequentialRequestIds};
use localdyn_model::AttributeValue;
use localdyn_model::input::CreateTableInput;
use localdyn_model::types::{AttributeDefinition, Item, KeySchemaElement, ScalarAttributeType};

static INIT: Once = Once::new();

/// Creation time reported by stores built with [`store`].
pub const CREATED_AT_EPOCH_SECONDS: i64 = 1_700_000_000;

/// Initialize tracing (once).
fn init_tracing() {
    INIT.call_once(|| {
        tracing_subscriber::fmt()
            .with_env_filter(
                tracing_subscriber::EnvFilter::try_from_default_env()
                    .unwrap_or_else(|_| tracing_subscriber::EnvFilter::new("warn")),
            )
            .with_test_writer()
            .init();
    });
}

/// A fresh store with a frozen clock and sequential request ids.
#[must_use]
pub fn store() -> LocalDynamoDB {
    init_tracing();
    LocalDynamoDB::builder()
        .clock(FixedClock::at_epoch_seconds(CREATED_AT_EPOCH_SECONDS))
        .request_ids(SequentialRequestIds::new())
        .build()
}

/// Generate a unique table name for a test.
#[must_use]
pub fn test_table_name(prefix: &str) -> String {
    let id = uuid::Uuid::new_v4().to_string()[..8].to_owned();
    format!("test-{prefix}-{id}")
}

/// Request for a table keyed by a string hash key `pk`.
#[must_use]
pub fn simple_table(table_name: &str) -> CreateTableInput {
    CreateTableInput {
        table_name: table_name.to_owned(),
        key_schema: vec![KeySchemaElement::hash("pk")],
        attribute_definitions: vec![AttributeDefinition::new("pk", ScalarAttributeType::S)],
        ..Default::default()
    }
}

/// Request for a table keyed by string `pk` plus string sort key `sk`.
#[must_use]
pub fn composite_table(table_name: &str) -> CreateTableInput {
    CreateTableInput {
        table_name: table_name.to_owned(),
        key_schema: vec![KeySchemaElement::hash("pk"), KeySchemaElement::range("sk")],
        attribute_definitions: vec![
            AttributeDefinition::new("pk", ScalarAttributeType::S),
            AttributeDefinition::new("sk", ScalarAttributeType::S),
        ],
        ..Default::default()
    }
}

/// String attribute.
#[must_use]
pub fn s(v: &str) -> AttributeValue {
    AttributeValue::S(v.to_owned())
}

/// Number attribute.
#[must_use]
pub fn n(v: &str) -> AttributeValue {
    AttributeValue::N(v.to_owned())
}

/// Build an item (or key) from name/value pairs.
#[must_use]
pub fn item(pairs: &[(&str, AttributeValue)]) -> Item {
    pairs
        .iter()
        .map(|(k, v)| ((*k).to_owned(), v.clone()))
        .collect::<HashMap<_, _>>()
}

#[cfg(test)]
mod test_items;
#[cfg(test)]
mod test_shared;
#[cfg(test)]
mod test_tables;
#[cfg(test)]
mod test_unmodeled;
