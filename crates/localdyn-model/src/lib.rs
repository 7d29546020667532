//! DynamoDB-compatible model types for localdyn.
//!
//! These are the request, response and value types exchanged with the
//! in-process store. They keep the DynamoDB JSON shape (`PascalCase` fields,
//! single-key attribute value objects) so fixtures captured from a real
//! service deserialize unchanged.
// "DynamoDB" appears in virtually every doc comment in this crate.
#![allow(clippy::doc_markdown)]
#![allow(clippy::module_name_repetitions)]
#![allow(missing_docs)]

pub mod attribute_value;
pub mod error;
pub mod input;
pub mod operations;
pub mod output;
pub mod types;

pub use attribute_value::{AttributeValue, MalformedAttributeValue};
pub use error::{DynamoDBError, DynamoDBErrorCode};
pub use operations::DynamoDBOperation;
