//! Key derivation from declared key schemas.
//!
//! A [`TableKey`] turns a key attribute into the canonical string used to
//! address partitions and slots. [`KeySchema`] combines the hash key with an
//! optional range key.

use localdyn_model::AttributeValue;
use localdyn_model::types::{AttributeDefinition, Item, KeySchemaElement, KeyType, ScalarAttributeType};

use crate::storage::{SlotKey, StorageError};

/// A key attribute: its name and declared scalar type.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct TableKey {
    name: String,
    key_type: ScalarAttributeType,
}

impl TableKey {
    /// Fails unless `key_type` is `S`, `N` or `B`.
    pub fn new(name: impl Into<String>, key_type: ScalarAttributeType) -> Result<Self, StorageError> {
        let name = name.into();
        if !key_type.is_valid_key_type() {
            return Err(StorageError::UnsupportedKeyType {
                attr: name,
                attr_type: key_type.as_str().to_owned(),
            });
        }
        Ok(Self { name, key_type })
    }

    #[must_use]
    pub fn name(&self) -> &str {
        &self.name
    }

    #[must_use]
    pub fn key_type(&self) -> &ScalarAttributeType {
        &self.key_type
    }

    /// Canonical string for `value`.
    ///
    /// Strings and numbers are used as written. Binary values are decoded
    /// as UTF-8 text, with invalid sequences replaced, so two different byte
    /// strings can map to the same key.
    pub fn key_value(&self, value: &AttributeValue) -> Result<String, StorageError> {
        match (&self.key_type, value) {
            (ScalarAttributeType::S, AttributeValue::S(s))
            | (ScalarAttributeType::N, AttributeValue::N(s)) => Ok(s.clone()),
            (ScalarAttributeType::B, AttributeValue::B(b)) => {
                Ok(String::from_utf8_lossy(b).into_owned())
            }
            _ => Err(StorageError::InvalidKeyType {
                attr: self.name.clone(),
                expected: self.key_type.as_str().to_owned(),
                actual: value.type_descriptor().to_owned(),
            }),
        }
    }

    /// Looks the attribute up in `item` and derives its key string.
    fn extract(&self, item: &Item) -> Result<String, StorageError> {
        let value = item
            .get(&self.name)
            .ok_or_else(|| StorageError::MissingKeyAttribute {
                attr: self.name.clone(),
            })?;
        self.key_value(value)
    }
}

/// Resolved location of an item: its partition and its slot.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct PrimaryKey {
    pub hash: String,
    pub slot: SlotKey,
}

/// Hash key plus optional range key of a table.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct KeySchema {
    hash: TableKey,
    range: Option<TableKey>,
}

impl KeySchema {
    /// Validates `elements` against `definitions`.
    ///
    /// Requires exactly one `HASH` element, at most one `RANGE` element, and
    /// a definition with a scalar type for every key attribute.
    pub fn from_definitions(
        elements: &[KeySchemaElement],
        definitions: &[AttributeDefinition],
    ) -> Result<Self, StorageError> {
        if elements.len() > 2 {
            return Err(StorageError::InvalidKeySchema(
                "Too many KeySchema elements; expected at most 2".to_owned(),
            ));
        }

        let mut hash = None;
        let mut range = None;
        for element in elements {
            let slot = match element.key_type {
                KeyType::Hash => &mut hash,
                KeyType::Range => &mut range,
            };
            if slot.is_some() {
                return Err(StorageError::InvalidKeySchema(format!(
                    "Invalid KeySchema: Some index key schema element is not valid. \
                     More than one {} key was provided",
                    element.key_type
                )));
            }
            *slot = Some(element.attribute_name.as_str());
        }

        let Some(hash) = hash else {
            return Err(StorageError::InvalidKeySchema(
                "Invalid KeySchema: Some index key schema element is not valid. \
                 No HASH key was provided"
                    .to_owned(),
            ));
        };
        if range == Some(hash) {
            return Err(StorageError::InvalidKeySchema(
                "Invalid KeySchema: The HASH and RANGE key must use different attributes"
                    .to_owned(),
            ));
        }

        Ok(Self {
            hash: table_key(hash, definitions)?,
            range: range.map(|name| table_key(name, definitions)).transpose()?,
        })
    }

    #[must_use]
    pub fn hash_key(&self) -> &TableKey {
        &self.hash
    }

    #[must_use]
    pub fn range_key(&self) -> Option<&TableKey> {
        self.range.as_ref()
    }

    /// Number of key attributes: 1, or 2 with a range key.
    #[must_use]
    pub fn key_count(&self) -> usize {
        1 + usize::from(self.range.is_some())
    }

    /// Resolves where `item` (or a key map) lives.
    ///
    /// Every key attribute must be present with its declared type; other
    /// attributes are ignored.
    pub fn primary_key(&self, item: &Item) -> Result<PrimaryKey, StorageError> {
        let hash = self.hash.extract(item)?;
        let slot = match &self.range {
            Some(range) => SlotKey::Sort(range.extract(item)?),
            None => SlotKey::Sentinel,
        };
        Ok(PrimaryKey { hash, slot })
    }
}

fn table_key(name: &str, definitions: &[AttributeDefinition]) -> Result<TableKey, StorageError> {
    let definition = definitions
        .iter()
        .find(|d| d.attribute_name == name)
        .ok_or_else(|| StorageError::MissingAttributeDefinition {
            attr: name.to_owned(),
        })?;
    TableKey::new(name, definition.attribute_type.clone())
}
