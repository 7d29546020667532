//! In-process table storage and request facade for localdyn.
//!
//! [`LocalDynamoDB`] is the entry point: it owns a [`TableRegistry`],
//! validates requests, and wraps every answer in a [`ServiceResponse`].
//! Everything is synchronous and in memory. Mutating calls take `&mut self`,
//! so sharing one instance across threads goes through
//! [`SharedLocalDynamoDB`].
#![allow(missing_docs, clippy::doc_markdown, clippy::module_name_repetitions)]

pub mod clock;
pub mod config;
pub mod error;
pub mod handler;
pub mod key;
pub mod projection;
pub mod provider;
pub mod registry;
pub mod request_id;
pub mod response;
pub mod storage;
pub mod table;
mod unmodeled;

pub use clock::{Clock, FixedClock, SystemClock};
pub use config::DynamoDBConfig;
pub use provider::{LocalDynamoDB, LocalDynamoDBBuilder, SharedLocalDynamoDB};
pub use registry::TableRegistry;
pub use request_id::{RequestIdGenerator, SequentialRequestIds, UuidRequestIds};
pub use response::{ResponseMetadata, ServiceResponse};
