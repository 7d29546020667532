//! The store facade: table and item operations over an owned registry.

use std::sync::Arc;

use tracing::debug;

use localdyn_model::error::DynamoDBError;
use localdyn_model::input::{CreateTableInput, DescribeTableInput, GetItemInput, PutItemInput};
use localdyn_model::output::{CreateTableOutput, DescribeTableOutput, GetItemOutput, PutItemOutput};
use localdyn_model::types::TableStatus;

use crate::clock::{Clock, SystemClock};
use crate::config::DynamoDBConfig;
use crate::registry::TableRegistry;
use crate::request_id::{RequestIdGenerator, UuidRequestIds};
use crate::response::{ResponseMetadata, ServiceResponse};
use crate::storage::StorageError;
use crate::table::Table;

/// Content length reported for table-level operations.
pub(crate) const TABLE_CONTENT_LENGTH: i64 = 500;

/// Content length reported for item-level and no-op operations.
pub(crate) const ITEM_CONTENT_LENGTH: i64 = 2;

/// A store shared between threads. Every call holds the lock for its whole
/// duration.
pub type SharedLocalDynamoDB = Arc<parking_lot::Mutex<LocalDynamoDB>>;

/// In-process store implementing `CreateTable`, `DescribeTable`, `PutItem`
/// and `GetItem`.
///
/// Each instance owns its tables; two stores never see each other's data.
/// Every other operation is accepted and answered with an empty default
/// response.
#[derive(Debug)]
pub struct LocalDynamoDB {
    registry: TableRegistry,
    config: Arc<DynamoDBConfig>,
    clock: Arc<dyn Clock>,
    request_ids: Arc<dyn RequestIdGenerator>,
}

impl LocalDynamoDB {
    /// Create a store using the system clock and random request ids.
    #[must_use]
    pub fn new(config: DynamoDBConfig) -> Self {
        Self::builder().config(config).build()
    }

    #[must_use]
    pub fn builder() -> LocalDynamoDBBuilder {
        LocalDynamoDBBuilder::default()
    }

    #[must_use]
    pub fn config(&self) -> &DynamoDBConfig {
        &self.config
    }

    /// Read-only view of the tables.
    #[must_use]
    pub fn registry(&self) -> &TableRegistry {
        &self.registry
    }

    /// Drop every table (for testing).
    pub fn reset(&mut self) {
        self.registry.reset();
    }

    /// Wrap this store for shared use.
    #[must_use]
    pub fn into_shared(self) -> SharedLocalDynamoDB {
        Arc::new(parking_lot::Mutex::new(self))
    }

    /// Stamps a fresh request id on the result of one call.
    pub(crate) fn respond<T>(
        &self,
        content_length: i64,
        result: Result<T, DynamoDBError>,
    ) -> Result<ServiceResponse<T>, DynamoDBError> {
        let request_id = self.request_ids.next_id();
        match result {
            Ok(output) => Ok(ServiceResponse::ok(
                output,
                ResponseMetadata::new(request_id),
                content_length,
            )),
            Err(e) => {
                debug!(code = %e.code, request_id = %request_id, "request failed: {}", e.message);
                Err(e.with_request_id(request_id))
            }
        }
    }
}

impl Default for LocalDynamoDB {
    fn default() -> Self {
        Self::new(DynamoDBConfig::default())
    }
}

// ---------------------------------------------------------------------------
// Table management
// ---------------------------------------------------------------------------

impl LocalDynamoDB {
    /// Handle `CreateTable`.
    ///
    /// The description in the response reports `CREATING`; every later
    /// description reports `ACTIVE`.
    pub fn create_table(
        &mut self,
        input: CreateTableInput,
    ) -> Result<ServiceResponse<CreateTableOutput>, DynamoDBError> {
        let result = self.create_table_inner(input);
        self.respond(TABLE_CONTENT_LENGTH, result)
    }

    fn create_table_inner(
        &mut self,
        input: CreateTableInput,
    ) -> Result<CreateTableOutput, DynamoDBError> {
        let table = Table::new(input, self.clock.now(), &self.config)?;
        debug!(table = %table.name(), "creating table");
        let table = self
            .registry
            .insert(table, self.config.overwrite_existing_tables)?;
        Ok(CreateTableOutput {
            table_description: Some(table.describe(TableStatus::Creating)),
        })
    }

    /// Handle `DescribeTable`.
    #[allow(clippy::needless_pass_by_value)]
    pub fn describe_table(
        &self,
        input: DescribeTableInput,
    ) -> Result<ServiceResponse<DescribeTableOutput>, DynamoDBError> {
        let result = self
            .registry
            .require(&input.table_name)
            .map(|table| DescribeTableOutput {
                table: Some(table.describe(TableStatus::Active)),
            });
        self.respond(TABLE_CONTENT_LENGTH, result)
    }
}

// ---------------------------------------------------------------------------
// Items
// ---------------------------------------------------------------------------

impl LocalDynamoDB {
    /// Handle `PutItem`.
    #[allow(clippy::needless_pass_by_value)]
    pub fn put_item(
        &mut self,
        input: PutItemInput,
    ) -> Result<ServiceResponse<PutItemOutput>, DynamoDBError> {
        let result = self
            .registry
            .require_mut(&input.table_name)
            .and_then(|table| table.put_item(&input));
        self.respond(ITEM_CONTENT_LENGTH, result)
    }

    /// Handle `GetItem`.
    ///
    /// An empty key is rejected before the table is looked up.
    #[allow(clippy::needless_pass_by_value)]
    pub fn get_item(
        &mut self,
        input: GetItemInput,
    ) -> Result<ServiceResponse<GetItemOutput>, DynamoDBError> {
        let result = if input.key.is_empty() {
            Err(StorageError::NullKey.into())
        } else {
            self.registry
                .require_mut(&input.table_name)
                .and_then(|table| table.get_item(&input))
        };
        self.respond(ITEM_CONTENT_LENGTH, result)
    }
}

// ---------------------------------------------------------------------------
// Builder
// ---------------------------------------------------------------------------

/// Builder for [`LocalDynamoDB`] with injectable capabilities.
#[derive(Debug, Default)]
pub struct LocalDynamoDBBuilder {
    config: Option<DynamoDBConfig>,
    clock: Option<Arc<dyn Clock>>,
    request_ids: Option<Arc<dyn RequestIdGenerator>>,
}

impl LocalDynamoDBBuilder {
    #[must_use]
    pub fn config(mut self, config: DynamoDBConfig) -> Self {
        self.config = Some(config);
        self
    }

    /// Time source for creation timestamps. Defaults to [`SystemClock`].
    #[must_use]
    pub fn clock(mut self, clock: impl Clock + 'static) -> Self {
        self.clock = Some(Arc::new(clock));
        self
    }

    /// Request id source. Defaults to [`UuidRequestIds`].
    #[must_use]
    pub fn request_ids(mut self, request_ids: impl RequestIdGenerator + 'static) -> Self {
        self.request_ids = Some(Arc::new(request_ids));
        self
    }

    #[must_use]
    pub fn build(self) -> LocalDynamoDB {
        let clock: Arc<dyn Clock> = match self.clock {
            Some(clock) => clock,
            None => Arc::new(SystemClock),
        };
        let request_ids: Arc<dyn RequestIdGenerator> = match self.request_ids {
            Some(ids) => ids,
            None => Arc::new(UuidRequestIds),
        };
        LocalDynamoDB {
            registry: TableRegistry::new(),
            config: Arc::new(self.config.unwrap_or_default()),
            clock,
            request_ids,
        }
    }
}
