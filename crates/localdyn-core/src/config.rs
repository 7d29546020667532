//! Store configuration.

use std::env;

/// Settings shared by every table of one store instance.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct DynamoDBConfig {
    /// Region used in table and key ARNs.
    pub default_region: String,
    /// Account id used in table and key ARNs.
    pub account_id: String,
    /// Let `CreateTable` replace an existing table of the same name instead
    /// of failing with `ResourceInUseException`.
    pub overwrite_existing_tables: bool,
}

impl DynamoDBConfig {
    /// Create configuration from environment variables.
    #[must_use]
    pub fn from_env() -> Self {
        let defaults = Self::default();
        Self {
            default_region: env::var("DEFAULT_REGION").unwrap_or(defaults.default_region),
            account_id: env::var("DYNAMODB_ACCOUNT_ID").unwrap_or(defaults.account_id),
            overwrite_existing_tables: env_bool(
                "DYNAMODB_OVERWRITE_TABLES",
                defaults.overwrite_existing_tables,
            ),
        }
    }

    /// ARN of a table in this region and account.
    #[must_use]
    pub fn table_arn(&self, table_name: &str) -> String {
        format!(
            "arn:aws:dynamodb:{}:{}:table/{table_name}",
            self.default_region, self.account_id
        )
    }

    /// ARN of a KMS key in this region and account.
    #[must_use]
    pub fn kms_key_arn(&self, key_id: &str) -> String {
        format!(
            "arn:aws:kms:{}:{}:key/{key_id}",
            self.default_region, self.account_id
        )
    }
}

impl Default for DynamoDBConfig {
    fn default() -> Self {
        Self {
            default_region: "us-east-1".to_owned(),
            account_id: "000000000000".to_owned(),
            overwrite_existing_tables: false,
        }
    }
}

fn env_bool(key: &str, default: bool) -> bool {
    env::var(key).map_or(default, |v| {
        matches!(v.as_str(), "1" | "true" | "yes" | "TRUE" | "YES")
    })
}
