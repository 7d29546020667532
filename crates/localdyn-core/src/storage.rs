//! Item storage: partitions and the immutable items they hold.
//!
//! ```text
//! Table ── HashMap<hash key, Partition>
//! Partition ── BTreeMap<SlotKey, TableItem>
//! ```
//!
//! A table without a sort key stores each partition's single item under
//! [`SlotKey::Sentinel`]. Items are deep copies taken at write time and are
//! only ever replaced, never edited in place.

use std::collections::BTreeMap;

use thiserror::Error;
use tracing::debug;

use localdyn_model::attribute_value::{MalformedAttributeValue, deep_copy_map};
use localdyn_model::types::Item;

use crate::projection::Projection;

// ---------------------------------------------------------------------------
// Errors
// ---------------------------------------------------------------------------

/// Validation failures raised while resolving keys or copying items.
///
/// Every variant surfaces to callers as a `ValidationException`.
#[derive(Debug, Error)]
pub enum StorageError {
    /// A key attribute named by the schema is absent.
    #[error("One of the required keys was not given a value")]
    MissingKeyAttribute {
        /// The name of the missing attribute.
        attr: String,
    },
    /// The key map does not have as many entries as the schema has keys.
    #[error("The number of conditions on the keys is invalid")]
    KeyConditionCount {
        expected: usize,
        actual: usize,
    },
    /// The key map is empty or absent.
    #[error("Cannot have null key for GetItem, DeleteItem, or UpdateItem")]
    NullKey,
    /// A key attribute holds a different type than declared.
    #[error(
        "The provided key element does not match the schema. \
         Expected type {expected} for key column {attr}, got type {actual}"
    )]
    InvalidKeyType {
        attr: String,
        expected: String,
        actual: String,
    },
    /// A key attribute was declared with a non-scalar type.
    #[error(
        "One or more parameter values were invalid: Member must satisfy enum value set: \
         [S, N, B], got '{attr_type}' for key attribute {attr}"
    )]
    UnsupportedKeyType { attr: String, attr_type: String },
    /// The key schema itself is malformed.
    #[error("{0}")]
    InvalidKeySchema(String),
    /// A key attribute has no attribute definition.
    #[error(
        "One or more parameter values were invalid: Some index key schema elements are not \
         valid. The following index key schema element does not have a matching \
         AttributeDefinition: {attr}"
    )]
    MissingAttributeDefinition { attr: String },
    /// A projection placeholder is not defined in `ExpressionAttributeNames`.
    #[error(
        "Invalid ProjectionExpression: An expression attribute name used in the document path \
         is not defined; attribute name: {placeholder}"
    )]
    UndefinedAttributeName { placeholder: String },
    /// A projection expression that names nothing, or has an empty element.
    #[error("Invalid ProjectionExpression: {0}")]
    InvalidProjection(String),
    /// A stored or supplied value has no usable payload.
    #[error(transparent)]
    MalformedValue(#[from] MalformedAttributeValue),
}

// ---------------------------------------------------------------------------
// Slot keys
// ---------------------------------------------------------------------------

/// Position of an item inside its partition.
#[derive(Debug, Clone, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub enum SlotKey {
    /// The only slot of a table without a sort key.
    Sentinel,
    /// Canonical sort-key value.
    Sort(String),
}

// ---------------------------------------------------------------------------
// TableItem
// ---------------------------------------------------------------------------

/// A stored item: an independent deep copy of the attributes that were put.
#[derive(Debug, Clone, PartialEq)]
pub struct TableItem {
    attributes: Item,
}

impl TableItem {
    /// Copies `attributes` into a new stored item.
    pub fn from_attributes(attributes: &Item) -> Result<Self, MalformedAttributeValue> {
        Ok(Self {
            attributes: deep_copy_map(attributes)?,
        })
    }

    /// Read-only view of the stored attributes.
    #[must_use]
    pub fn attributes(&self) -> &Item {
        &self.attributes
    }

    /// Gives up ownership of the attributes. Used once an item has been
    /// displaced from its slot.
    #[must_use]
    pub fn into_attributes(self) -> Item {
        self.attributes
    }

    /// Deep copy of every attribute, or only the projected ones when a
    /// projection is given. Names the item lacks are skipped.
    pub fn to_response(&self, projection: Option<&Projection>) -> Result<Item, StorageError> {
        let Some(projection) = projection else {
            return Ok(deep_copy_map(&self.attributes)?);
        };
        let mut out = Item::with_capacity(projection.len());
        for name in projection.names() {
            if let Some(value) = self.attributes.get(name) {
                out.insert(name.clone(), value.deep_copy()?);
            }
        }
        Ok(out)
    }
}

// ---------------------------------------------------------------------------
// Partition
// ---------------------------------------------------------------------------

/// All items sharing one hash-key value.
#[derive(Debug, Clone, Default)]
pub struct Partition {
    hash_key: String,
    items: BTreeMap<SlotKey, TableItem>,
}

impl Partition {
    #[must_use]
    pub fn new(hash_key: impl Into<String>) -> Self {
        Self {
            hash_key: hash_key.into(),
            items: BTreeMap::new(),
        }
    }

    /// The hash-key value this partition holds items for.
    #[must_use]
    pub fn hash_key(&self) -> &str {
        &self.hash_key
    }

    /// Number of occupied slots.
    #[must_use]
    pub fn item_count(&self) -> usize {
        self.items.len()
    }

    /// Stores a deep copy of `item` in `slot`, replacing whatever was there.
    ///
    /// The copy is taken before the slot is touched, so a malformed item
    /// leaves the partition unchanged. Returns the displaced item.
    pub fn put_item(
        &mut self,
        slot: SlotKey,
        item: &Item,
    ) -> Result<Option<TableItem>, StorageError> {
        let stored = TableItem::from_attributes(item)?;
        Ok(self.insert(slot, stored))
    }

    /// Places an already copied item in `slot`. Returns the displaced item.
    pub fn insert(&mut self, slot: SlotKey, stored: TableItem) -> Option<TableItem> {
        let old = self.items.insert(slot, stored);
        if old.is_some() {
            debug!(hash_key = %self.hash_key, "replaced existing item");
        } else {
            debug!(hash_key = %self.hash_key, "inserted new item");
        }
        old
    }

    /// Looks up `slot`. An empty slot is `Ok(None)`, not an error.
    pub fn get_item(
        &self,
        slot: &SlotKey,
        projection: Option<&Projection>,
    ) -> Result<Option<Item>, StorageError> {
        self.items
            .get(slot)
            .map(|item| item.to_response(projection))
            .transpose()
    }
}
