//! A single table: its creation request, key schema and partitions.

use std::collections::HashMap;

use chrono::{DateTime, Utc};
use tracing::{debug, warn};

use localdyn_model::error::DynamoDBError;
use localdyn_model::input::{CreateTableInput, GetItemInput, PutItemInput};
use localdyn_model::output::{GetItemOutput, PutItemOutput};
use localdyn_model::types::{
    BillingMode, BillingModeSummary, ConsumedCapacity, GlobalSecondaryIndexDescription,
    IndexStatus, ItemCollectionMetrics, LocalSecondaryIndexDescription,
    ProvisionedThroughputDescription, ReturnValue, SSEDescription, SseStatus,
    StreamSpecification, TableClass, TableClassSummary, TableDescription, TableStatus,
};

use crate::clock::epoch_seconds;
use crate::config::DynamoDBConfig;
use crate::key::KeySchema;
use crate::projection::{Projection, attributes_to_get_expression};
use crate::storage::{Partition, StorageError, TableItem};

/// Size reported for tables and indexes. Nothing is actually measured.
const PLACEHOLDER_SIZE_BYTES: i64 = 1024;

/// Capacity reported for every item read or write.
const PLACEHOLDER_CAPACITY_UNITS: f64 = 0.5;

/// Dates the store never tracks are reported as the epoch.
const EPOCH: f64 = 0.0;

/// A table created by `CreateTable`.
#[derive(Debug)]
pub struct Table {
    definition: CreateTableInput,
    key_schema: KeySchema,
    arn: String,
    kms_key_arn: Option<String>,
    created_at: DateTime<Utc>,
    partitions: HashMap<String, Partition>,
}

impl Table {
    /// Validates `definition` and builds an empty table.
    pub fn new(
        definition: CreateTableInput,
        created_at: DateTime<Utc>,
        config: &DynamoDBConfig,
    ) -> Result<Self, DynamoDBError> {
        if definition.table_name.is_empty() {
            return Err(DynamoDBError::validation(
                "1 validation error detected: Value '' at 'tableName' failed to satisfy \
                 constraint: Member must have length greater than or equal to 1",
            ));
        }
        if let Some(BillingMode::Unknown(mode)) = &definition.billing_mode {
            return Err(DynamoDBError::validation(format!(
                "1 validation error detected: Value '{mode}' at 'billingMode' failed to satisfy \
                 constraint: Member must satisfy enum value set: [PROVISIONED, PAY_PER_REQUEST]"
            )));
        }

        let key_schema =
            KeySchema::from_definitions(&definition.key_schema, &definition.attribute_definitions)?;
        let arn = config.table_arn(&definition.table_name);
        let kms_key_arn = definition
            .sse_specification
            .as_ref()
            .and_then(|sse| sse.kms_master_key_id.as_deref())
            .map(|id| config.kms_key_arn(id));

        Ok(Self {
            definition,
            key_schema,
            arn,
            kms_key_arn,
            created_at,
            partitions: HashMap::new(),
        })
    }

    #[must_use]
    pub fn name(&self) -> &str {
        &self.definition.table_name
    }

    #[must_use]
    pub fn arn(&self) -> &str {
        &self.arn
    }

    #[must_use]
    pub fn key_schema(&self) -> &KeySchema {
        &self.key_schema
    }

    /// The request this table was created from.
    #[must_use]
    pub fn definition(&self) -> &CreateTableInput {
        &self.definition
    }

    #[must_use]
    pub fn created_at(&self) -> DateTime<Utc> {
        self.created_at
    }

    /// Number of partitions, including ones created by reads that found nothing.
    #[must_use]
    pub fn partition_count(&self) -> usize {
        self.partitions.len()
    }

    /// Items stored across all partitions.
    #[must_use]
    pub fn item_count(&self) -> usize {
        self.partitions.values().map(Partition::item_count).sum()
    }

    /// Stores a copy of `input.item`, replacing any item with the same key.
    pub fn put_item(&mut self, input: &PutItemInput) -> Result<PutItemOutput, DynamoDBError> {
        let return_old = match &input.return_values {
            None | Some(ReturnValue::None) => false,
            Some(ReturnValue::AllOld) => true,
            Some(other) => {
                return Err(DynamoDBError::validation(format!(
                    "Return values set to invalid value: {other}"
                )));
            }
        };
        if input.condition_expression.is_some() {
            warn!(table = %self.name(), "ignoring ConditionExpression on PutItem");
        }

        let key = self.key_schema.primary_key(&input.item)?;
        let stored = TableItem::from_attributes(&input.item).map_err(StorageError::from)?;
        let old = self
            .partitions
            .entry(key.hash.clone())
            .or_insert_with(|| Partition::new(key.hash))
            .insert(key.slot, stored);
        debug!(table = %self.definition.table_name, replaced = old.is_some(), "put item");

        let attributes = match old {
            Some(old) if return_old => old.into_attributes(),
            _ => HashMap::new(),
        };
        Ok(PutItemOutput {
            attributes,
            consumed_capacity: Some(ConsumedCapacity {
                table_name: Some(self.definition.table_name.clone()),
                capacity_units: Some(PLACEHOLDER_CAPACITY_UNITS),
                write_capacity_units: Some(PLACEHOLDER_CAPACITY_UNITS),
                ..Default::default()
            }),
            item_collection_metrics: Some(ItemCollectionMetrics::default()),
        })
    }

    /// Reads the item addressed by `input.key`.
    ///
    /// A key that matches nothing still creates its partition and yields an
    /// output without an item.
    pub fn get_item(&mut self, input: &GetItemInput) -> Result<GetItemOutput, DynamoDBError> {
        if input.key.is_empty() {
            return Err(StorageError::NullKey.into());
        }
        let expected = self.key_schema.key_count();
        if input.key.len() != expected {
            return Err(StorageError::KeyConditionCount {
                expected,
                actual: input.key.len(),
            }
            .into());
        }
        let key = self.key_schema.primary_key(&input.key)?;
        let projection = read_projection(input)?;

        let partition = self
            .partitions
            .entry(key.hash.clone())
            .or_insert_with(|| Partition::new(key.hash));
        let item = partition.get_item(&key.slot, projection.as_ref())?;
        debug!(table = %self.definition.table_name, found = item.is_some(), "get item");

        Ok(GetItemOutput {
            item,
            consumed_capacity: Some(ConsumedCapacity {
                table_name: Some(self.definition.table_name.clone()),
                capacity_units: Some(PLACEHOLDER_CAPACITY_UNITS),
                read_capacity_units: Some(PLACEHOLDER_CAPACITY_UNITS),
                ..Default::default()
            }),
        })
    }

    /// Build a `TableDescription` reporting `status`.
    #[must_use]
    pub fn describe(&self, status: TableStatus) -> TableDescription {
        let definition = &self.definition;
        TableDescription {
            table_name: Some(definition.table_name.clone()),
            table_status: Some(status),
            key_schema: definition.key_schema.clone(),
            attribute_definitions: definition.attribute_definitions.clone(),
            creation_date_time: Some(epoch_seconds(self.created_at)),
            item_count: Some(i64::try_from(self.item_count()).unwrap_or(i64::MAX)),
            table_size_bytes: Some(PLACEHOLDER_SIZE_BYTES),
            table_arn: Some(self.arn.clone()),
            table_id: Some(definition.table_name.clone()),
            billing_mode_summary: Some(BillingModeSummary {
                billing_mode: Some(definition.billing_mode.clone().unwrap_or(BillingMode::Provisioned)),
                last_update_to_pay_per_request_date_time: Some(EPOCH),
            }),
            provisioned_throughput: Some(ProvisionedThroughputDescription {
                read_capacity_units: definition
                    .provisioned_throughput
                    .as_ref()
                    .map_or(0, |pt| pt.read_capacity_units),
                write_capacity_units: definition
                    .provisioned_throughput
                    .as_ref()
                    .map_or(0, |pt| pt.write_capacity_units),
                number_of_decreases_today: Some(0),
                last_increase_date_time: Some(EPOCH),
                last_decrease_date_time: Some(EPOCH),
            }),
            table_class_summary: Some(TableClassSummary {
                table_class: definition.table_class.clone().unwrap_or(TableClass::Standard),
                last_update_date_time: Some(EPOCH),
            }),
            global_secondary_indexes: self.describe_global_indexes(),
            local_secondary_indexes: self.describe_local_indexes(),
            stream_specification: Some(StreamSpecification {
                stream_enabled: definition
                    .stream_specification
                    .as_ref()
                    .is_some_and(|s| s.stream_enabled),
                stream_view_type: definition
                    .stream_specification
                    .as_ref()
                    .and_then(|s| s.stream_view_type.clone()),
            }),
            sse_description: Some(self.describe_sse()),
            replicas: Vec::new(),
        }
    }

    fn describe_global_indexes(&self) -> Vec<GlobalSecondaryIndexDescription> {
        self.definition
            .global_secondary_indexes
            .iter()
            .map(|gsi| GlobalSecondaryIndexDescription {
                index_name: Some(gsi.index_name.clone()),
                key_schema: gsi.key_schema.clone(),
                projection: Some(gsi.projection.clone()),
                index_status: Some(IndexStatus::Active),
                backfilling: Some(false),
                provisioned_throughput: gsi.provisioned_throughput.as_ref().map(|pt| {
                    ProvisionedThroughputDescription {
                        read_capacity_units: pt.read_capacity_units,
                        write_capacity_units: pt.write_capacity_units,
                        ..Default::default()
                    }
                }),
                index_size_bytes: Some(PLACEHOLDER_SIZE_BYTES),
                item_count: Some(0),
                index_arn: Some(self.index_arn(&gsi.index_name)),
            })
            .collect()
    }

    fn describe_local_indexes(&self) -> Vec<LocalSecondaryIndexDescription> {
        self.definition
            .local_secondary_indexes
            .iter()
            .map(|lsi| LocalSecondaryIndexDescription {
                index_name: Some(lsi.index_name.clone()),
                key_schema: lsi.key_schema.clone(),
                projection: Some(lsi.projection.clone()),
                index_size_bytes: Some(PLACEHOLDER_SIZE_BYTES),
                item_count: Some(0),
                index_arn: Some(self.index_arn(&lsi.index_name)),
            })
            .collect()
    }

    fn describe_sse(&self) -> SSEDescription {
        let sse = self.definition.sse_specification.as_ref();
        let enabled = sse.and_then(|s| s.enabled).unwrap_or(false);
        SSEDescription {
            status: Some(if enabled {
                SseStatus::Enabled
            } else {
                SseStatus::Disabled
            }),
            sse_type: sse.and_then(|s| s.sse_type.clone()),
            kms_master_key_arn: self.kms_key_arn.clone(),
            inaccessible_encryption_date_time: Some(EPOCH),
        }
    }

    fn index_arn(&self, index_name: &str) -> String {
        format!("{}/index/{index_name}", self.arn)
    }
}

/// Projection requested by a read, if any.
///
/// A non-empty `ProjectionExpression` wins; otherwise a non-empty
/// `AttributesToGet` list is turned into an expression.
fn read_projection(input: &GetItemInput) -> Result<Option<Projection>, StorageError> {
    let expression = match &input.projection_expression {
        Some(expr) if !expr.is_empty() => expr.clone(),
        _ if !input.attributes_to_get.is_empty() => {
            attributes_to_get_expression(&input.attributes_to_get)
        }
        Some(expr) => expr.clone(),
        None => return Ok(None),
    };
    Projection::parse(&expression, &input.expression_attribute_names).map(Some)
}
