//! Name-addressed entry point: operation name plus JSON request body in,
//! JSON response out.

use serde::Serialize;
use serde::de::DeserializeOwned;
use tracing::debug;

use localdyn_model::error::DynamoDBError;
use localdyn_model::input::DescribeTableInput;
use localdyn_model::operations::DynamoDBOperation;

use crate::provider::{ITEM_CONTENT_LENGTH, LocalDynamoDB};
use crate::response::ServiceResponse;
use crate::unmodeled::default_output;

impl LocalDynamoDB {
    /// Run `operation` with a JSON request `body`.
    ///
    /// An empty body is read as `{}`. Unknown operation names fail with
    /// `UnrecognizedClientException` and undecodable bodies with
    /// `SerializationException`. Operations not backed by storage only
    /// require the body to be well-formed JSON.
    pub fn invoke(
        &mut self,
        operation: &str,
        body: &[u8],
    ) -> Result<ServiceResponse<serde_json::Value>, DynamoDBError> {
        let Some(op) = DynamoDBOperation::from_name(operation) else {
            return self.respond(
                ITEM_CONTENT_LENGTH,
                Err(DynamoDBError::unknown_operation(operation)),
            );
        };
        debug!(%op, body_len = body.len(), "dispatching operation");
        dispatch(self, op, body)
    }
}

/// Dispatch a DynamoDB operation to the appropriate handler method.
fn dispatch(
    store: &mut LocalDynamoDB,
    op: DynamoDBOperation,
    body: &[u8],
) -> Result<ServiceResponse<serde_json::Value>, DynamoDBError> {
    match op {
        DynamoDBOperation::CreateTable => call(store, body, LocalDynamoDB::create_table),
        DynamoDBOperation::DescribeTable => {
            call(store, body, |store, input: DescribeTableInput| {
                store.describe_table(input)
            })
        }
        DynamoDBOperation::PutItem => call(store, body, LocalDynamoDB::put_item),
        DynamoDBOperation::GetItem => call(store, body, LocalDynamoDB::get_item),
        _ => {
            if let Err(e) = deserialize::<serde_json::Value>(body) {
                return store.respond(ITEM_CONTENT_LENGTH, Err(e));
            }
            let response = store.acknowledge(op)?;
            let request_id = response.metadata.request_id.clone();
            response
                .try_map(|_| default_output(op).map_err(serialization_failed))
                .map_err(|e| e.with_request_id(request_id))
        }
    }
}

/// Decode `body`, run `handler`, and encode its output as JSON.
fn call<I, O>(
    store: &mut LocalDynamoDB,
    body: &[u8],
    handler: impl FnOnce(&mut LocalDynamoDB, I) -> Result<ServiceResponse<O>, DynamoDBError>,
) -> Result<ServiceResponse<serde_json::Value>, DynamoDBError>
where
    I: DeserializeOwned,
    O: Serialize,
{
    let input = match deserialize(body) {
        Ok(input) => input,
        Err(e) => return store.respond(ITEM_CONTENT_LENGTH, Err(e)),
    };
    let response = handler(store, input)?;
    let request_id = response.metadata.request_id.clone();
    response
        .try_map(|output| serde_json::to_value(output).map_err(serialization_failed))
        .map_err(|e| e.with_request_id(request_id))
}

/// Deserialize a JSON request body into the input type.
fn deserialize<T: DeserializeOwned>(body: &[u8]) -> Result<T, DynamoDBError> {
    let body = if body.is_empty() { b"{}".as_slice() } else { body };
    serde_json::from_slice(body).map_err(|e| {
        DynamoDBError::serialization_exception(format!("Failed to deserialize request body: {e}"))
    })
}

fn serialization_failed(e: serde_json::Error) -> DynamoDBError {
    DynamoDBError::internal_error(format!("Failed to serialize response: {e}")).with_source(e)
}
