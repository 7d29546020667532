//! Operations the store accepts but does not implement.
//!
//! Each answers immediately with its default output. Inputs are not
//! validated, so even a request naming an unknown table succeeds.

use tracing::debug;

use localdyn_model::error::DynamoDBError;
use localdyn_model::input::{
    BatchGetItemInput, BatchWriteItemInput, DeleteItemInput, DeleteTableInput, ListTablesInput,
    QueryInput, ScanInput, UpdateItemInput, UpdateTableInput,
};
use localdyn_model::operations::DynamoDBOperation;
use localdyn_model::output::{
    BatchGetItemOutput, BatchWriteItemOutput, DeleteItemOutput, DeleteTableOutput, EmptyOutput,
    ListTablesOutput, QueryOutput, ScanOutput, UpdateItemOutput, UpdateTableOutput,
};

use crate::provider::{ITEM_CONTENT_LENGTH, LocalDynamoDB};
use crate::response::ServiceResponse;

macro_rules! default_operations {
    ($($(#[$meta:meta])* $op:ident => $method:ident($input:ty) -> $output:ty;)+) => {
        impl LocalDynamoDB {
            $(
                $(#[$meta])*
                #[allow(clippy::needless_pass_by_value)]
                pub fn $method(
                    &self,
                    _input: $input,
                ) -> Result<ServiceResponse<$output>, DynamoDBError> {
                    debug!(operation = %DynamoDBOperation::$op, "no-op, returning default response");
                    self.respond(ITEM_CONTENT_LENGTH, Ok(<$output>::default()))
                }
            )+
        }

        /// Default output of `op`, as JSON.
        pub(crate) fn default_output(
            op: DynamoDBOperation,
        ) -> Result<serde_json::Value, serde_json::Error> {
            match op {
                $(DynamoDBOperation::$op => serde_json::to_value(<$output>::default()),)+
                _ => serde_json::to_value(EmptyOutput::default()),
            }
        }
    };
}

default_operations! {
    /// `DeleteTable`. The table is kept.
    DeleteTable => delete_table(DeleteTableInput) -> DeleteTableOutput;
    /// `ListTables`. Always an empty list.
    ListTables => list_tables(ListTablesInput) -> ListTablesOutput;
    /// `UpdateTable`. Settings are unchanged.
    UpdateTable => update_table(UpdateTableInput) -> UpdateTableOutput;
    /// `UpdateItem`. The item is unchanged.
    UpdateItem => update_item(UpdateItemInput) -> UpdateItemOutput;
    /// `DeleteItem`. The item is kept.
    DeleteItem => delete_item(DeleteItemInput) -> DeleteItemOutput;
    /// `Query`. Never matches anything.
    Query => query(QueryInput) -> QueryOutput;
    /// `Scan`. Never returns anything.
    Scan => scan(ScanInput) -> ScanOutput;
    /// `BatchGetItem`. No responses and nothing unprocessed.
    BatchGetItem => batch_get_item(BatchGetItemInput) -> BatchGetItemOutput;
    /// `BatchWriteItem`. Nothing is written and nothing is unprocessed.
    BatchWriteItem => batch_write_item(BatchWriteItemInput) -> BatchWriteItemOutput;
}

impl LocalDynamoDB {
    /// Acknowledge any operation that is not backed by storage.
    ///
    /// Operations that are backed by storage need their typed method and are
    /// rejected here.
    pub fn acknowledge(
        &self,
        operation: DynamoDBOperation,
    ) -> Result<ServiceResponse<EmptyOutput>, DynamoDBError> {
        let result = if operation.is_modeled() {
            Err(DynamoDBError::validation(format!(
                "{operation} must be called with its request"
            )))
        } else {
            debug!(%operation, "no-op, returning default response");
            Ok(EmptyOutput::default())
        };
        self.respond(ITEM_CONTENT_LENGTH, result)
    }
}
