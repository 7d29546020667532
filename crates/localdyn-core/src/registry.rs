//! Table registry: every table of one store instance, keyed by name.

use std::collections::HashMap;

use tracing::info;

use localdyn_model::error::DynamoDBError;

use crate::table::Table;

/// Owned `name -> Table` map.
///
/// Lives exactly as long as the store that owns it. Tables are never
/// removed individually; [`TableRegistry::reset`] drops all of them.
#[derive(Debug, Default)]
pub struct TableRegistry {
    tables: HashMap<String, Table>,
}

impl TableRegistry {
    /// Create a new empty registry.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    #[must_use]
    pub fn get(&self, name: &str) -> Option<&Table> {
        self.tables.get(name)
    }

    pub fn get_mut(&mut self, name: &str) -> Option<&mut Table> {
        self.tables.get_mut(name)
    }

    /// Get a table or return `ResourceNotFoundException`.
    pub fn require(&self, name: &str) -> Result<&Table, DynamoDBError> {
        self.get(name).ok_or_else(not_found)
    }

    /// Mutable variant of [`TableRegistry::require`].
    pub fn require_mut(&mut self, name: &str) -> Result<&mut Table, DynamoDBError> {
        self.get_mut(name).ok_or_else(not_found)
    }

    /// Registers `table` under its name.
    ///
    /// An existing table of the same name is an error unless `overwrite` is
    /// set, in which case it is replaced along with all of its items.
    pub fn insert(&mut self, table: Table, overwrite: bool) -> Result<&Table, DynamoDBError> {
        let name = table.name().to_owned();
        if self.tables.contains_key(&name) {
            if !overwrite {
                return Err(DynamoDBError::resource_in_use(format!(
                    "Table already exists: {name}"
                )));
            }
            info!(table = %name, "replacing existing table");
        }
        self.tables.insert(name.clone(), table);
        self.require(&name)
    }

    #[must_use]
    pub fn len(&self) -> usize {
        self.tables.len()
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.tables.is_empty()
    }

    /// All table names, sorted.
    #[must_use]
    pub fn table_names(&self) -> Vec<String> {
        let mut names: Vec<String> = self.tables.keys().cloned().collect();
        names.sort();
        names
    }

    /// Drop every table.
    pub fn reset(&mut self) {
        self.tables.clear();
    }
}

fn not_found() -> DynamoDBError {
    DynamoDBError::resource_not_found("Cannot do operations on a non-existent table")
}
