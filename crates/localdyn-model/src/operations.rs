//! Operation names of the emulated DynamoDB surface.

use std::fmt;

macro_rules! define_operations {
    ($($(#[$meta:meta])* $name:ident),+ $(,)?) => {
        /// Every operation the store answers to.
        ///
        /// Only `CreateTable`, `DescribeTable`, `PutItem` and `GetItem` are
        /// backed by storage; the rest acknowledge with an empty response.
        #[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
        pub enum DynamoDBOperation {
            $($(#[$meta])* $name,)+
        }

        impl DynamoDBOperation {
            /// All operations, in declaration order.
            pub const ALL: &'static [Self] = &[$(Self::$name),+];

            /// Returns the API operation name.
            #[must_use]
            pub fn as_str(&self) -> &'static str {
                match self {
                    $(Self::$name => stringify!($name),)+
                }
            }

            /// Parse an API operation name.
            #[must_use]
            pub fn from_name(name: &str) -> Option<Self> {
                match name {
                    $(stringify!($name) => Some(Self::$name),)+
                    _ => None,
                }
            }
        }
    };
}

define_operations! {
    // Backed by storage
    /// Create a new table.
    CreateTable,
    /// Describe a table.
    DescribeTable,
    /// Put (insert or replace) an item.
    PutItem,
    /// Get an item by primary key.
    GetItem,

    // Tables and items
    /// Delete a table.
    DeleteTable,
    /// List tables.
    ListTables,
    /// Update table settings.
    UpdateTable,
    /// Update an item.
    UpdateItem,
    /// Delete an item.
    DeleteItem,

    // Reads
    /// Query items by key condition.
    Query,
    /// Scan a table.
    Scan,
    /// Batch get items.
    BatchGetItem,
    /// Batch put/delete items.
    BatchWriteItem,

    // Transactions and PartiQL
    /// Transactional read.
    TransactGetItems,
    /// Transactional write.
    TransactWriteItems,
    /// Run one PartiQL statement.
    ExecuteStatement,
    /// Run a batch of PartiQL statements.
    BatchExecuteStatement,
    /// Run PartiQL statements in a transaction.
    ExecuteTransaction,

    // Backups
    /// Create an on-demand backup.
    CreateBackup,
    /// Delete a backup.
    DeleteBackup,
    /// Describe a backup.
    DescribeBackup,
    /// List backups.
    ListBackups,
    /// Restore a table from a backup.
    RestoreTableFromBackup,
    /// Restore a table to a point in time.
    RestoreTableToPointInTime,
    /// Describe continuous backups.
    DescribeContinuousBackups,
    /// Update continuous backups.
    UpdateContinuousBackups,

    // Global tables
    /// Create a global table.
    CreateGlobalTable,
    /// Describe a global table.
    DescribeGlobalTable,
    /// Describe global table settings.
    DescribeGlobalTableSettings,
    /// List global tables.
    ListGlobalTables,
    /// Update a global table.
    UpdateGlobalTable,
    /// Update global table settings.
    UpdateGlobalTableSettings,
    /// Describe replica auto scaling.
    DescribeTableReplicaAutoScaling,
    /// Update replica auto scaling.
    UpdateTableReplicaAutoScaling,

    // Time to live
    /// Describe time to live.
    DescribeTimeToLive,
    /// Update time to live.
    UpdateTimeToLive,

    // Contributor insights
    /// Describe contributor insights.
    DescribeContributorInsights,
    /// List contributor insights.
    ListContributorInsights,
    /// Update contributor insights.
    UpdateContributorInsights,

    // Kinesis streaming destinations
    /// Describe Kinesis streaming destinations.
    DescribeKinesisStreamingDestination,
    /// Enable a Kinesis streaming destination.
    EnableKinesisStreamingDestination,
    /// Disable a Kinesis streaming destination.
    DisableKinesisStreamingDestination,

    // Tagging
    /// Tag a resource.
    TagResource,
    /// Untag a resource.
    UntagResource,
    /// List tags of a resource.
    ListTagsOfResource,

    // Import and export
    /// Export a table to a point in time.
    ExportTableToPointInTime,
    /// Describe an export.
    DescribeExport,
    /// List exports.
    ListExports,
    /// Import a table.
    ImportTable,
    /// Describe an import.
    DescribeImport,
    /// List imports.
    ListImports,

    // Account
    /// Describe account limits.
    DescribeLimits,
    /// Describe service endpoints.
    DescribeEndpoints,
}

impl DynamoDBOperation {
    /// Returns `true` for operations backed by table storage.
    #[must_use]
    pub fn is_modeled(&self) -> bool {
        matches!(
            self,
            Self::CreateTable | Self::DescribeTable | Self::PutItem | Self::GetItem
        )
    }
}

impl fmt::Display for DynamoDBOperation {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}
