//! Table creation and description.

use localdyn_core::{DynamoDBConfig, LocalDynamoDB};
use localdyn_model::error::DynamoDBErrorCode;
use localdyn_model::input::{CreateTableInput, DescribeTableInput, PutItemInput};
use localdyn_model::types::{
    AttributeDefinition, BillingMode, GlobalSecondaryIndex, KeySchemaElement, Projection,
    ProjectionType, ProvisionedThroughput, ScalarAttributeType, StreamSpecification,
    StreamViewType, TableStatus,
};

use crate::{CREATED_AT_EPOCH_SECONDS, composite_table, item, s, simple_table, store, test_table_name};

#[test]
fn test_should_create_and_describe_table() -> anyhow::Result<()> {
    let mut store = store();
    let name = test_table_name("describe");
    let input = CreateTableInput {
        billing_mode: Some(BillingMode::PayPerRequest),
        ..composite_table(&name)
    };

    let created = store.create_table(input.clone())?;
    let creating = created
        .output
        .table_description
        .expect("create returns a description");
    assert_eq!(creating.table_status, Some(TableStatus::Creating));

    let described = store.describe_table(DescribeTableInput::new(&name))?;
    let table = described.output.table.expect("describe returns a table");
    assert_eq!(table.table_name.as_deref(), Some(name.as_str()));
    assert_eq!(table.table_status, Some(TableStatus::Active));
    assert_eq!(table.key_schema, input.key_schema);
    assert_eq!(table.attribute_definitions, input.attribute_definitions);
    assert_eq!(
        table.billing_mode_summary.and_then(|b| b.billing_mode),
        Some(BillingMode::PayPerRequest)
    );
    #[allow(clippy::cast_precision_loss)]
    let created_at = CREATED_AT_EPOCH_SECONDS as f64;
    assert_eq!(table.creation_date_time, Some(created_at));
    assert_eq!(described.content_length, 500);
    Ok(())
}

#[test]
fn test_should_fail_to_describe_unknown_table() {
    let store = store();
    let err = store
        .describe_table(DescribeTableInput::new("does-not-exist"))
        .unwrap_err();
    assert_eq!(err.code, DynamoDBErrorCode::ResourceNotFoundException);
    assert_eq!(err.message, "Cannot do operations on a non-existent table");
    assert!(err.request_id.is_some());
}

#[test]
fn test_should_reject_duplicate_table() {
    let mut store = store();
    let name = test_table_name("dup");
    store.create_table(simple_table(&name)).unwrap();

    let err = store.create_table(simple_table(&name)).unwrap_err();
    assert_eq!(err.code, DynamoDBErrorCode::ResourceInUseException);
    assert_eq!(store.registry().len(), 1);
}

#[test]
fn test_should_replace_duplicate_table_when_configured() -> anyhow::Result<()> {
    let mut store = LocalDynamoDB::builder()
        .config(DynamoDBConfig {
            overwrite_existing_tables: true,
            ..DynamoDBConfig::default()
        })
        .build();
    let name = test_table_name("overwrite");
    store.create_table(simple_table(&name))?;
    store.put_item(PutItemInput {
        table_name: name.clone(),
        item: item(&[("pk", s("a"))]),
        ..Default::default()
    })?;

    store.create_table(composite_table(&name))?;

    let table = store
        .describe_table(DescribeTableInput::new(&name))?
        .output
        .table
        .expect("table exists");
    assert_eq!(table.item_count, Some(0));
    assert_eq!(table.key_schema.len(), 2);
    Ok(())
}

#[test]
fn test_should_reject_invalid_key_schemas() {
    let mut store = store();

    let no_definition = CreateTableInput {
        attribute_definitions: vec![AttributeDefinition::new("other", ScalarAttributeType::S)],
        ..simple_table("t1")
    };
    let err = store.create_table(no_definition).unwrap_err();
    assert_eq!(err.code, DynamoDBErrorCode::ValidationException);

    let two_hash = CreateTableInput {
        key_schema: vec![KeySchemaElement::hash("pk"), KeySchemaElement::hash("sk")],
        ..composite_table("t2")
    };
    assert!(store.create_table(two_hash).is_err());

    let bool_key = CreateTableInput {
        attribute_definitions: vec![AttributeDefinition::new(
            "pk",
            ScalarAttributeType::Unknown("BOOL".to_owned()),
        )],
        ..simple_table("t3")
    };
    assert!(store.create_table(bool_key).is_err());

    assert!(store.registry().is_empty());
}

#[test]
fn test_should_template_arns_from_config() -> anyhow::Result<()> {
    let mut store = LocalDynamoDB::new(DynamoDBConfig {
        default_region: "eu-central-1".to_owned(),
        account_id: "111122223333".to_owned(),
        overwrite_existing_tables: false,
    });
    let input = CreateTableInput {
        global_secondary_indexes: vec![GlobalSecondaryIndex {
            index_name: "by-sk".to_owned(),
            key_schema: vec![KeySchemaElement::hash("sk")],
            projection: Projection {
                projection_type: Some(ProjectionType::KeysOnly),
                non_key_attributes: Vec::new(),
            },
            provisioned_throughput: Some(ProvisionedThroughput {
                read_capacity_units: 1,
                write_capacity_units: 1,
            }),
        }],
        ..composite_table("Orders")
    };
    store.create_table(input)?;

    let table = store
        .describe_table(DescribeTableInput::new("Orders"))?
        .output
        .table
        .expect("table exists");
    assert_eq!(
        table.table_arn.as_deref(),
        Some("arn:aws:dynamodb:eu-central-1:111122223333:table/Orders")
    );
    assert_eq!(
        table.global_secondary_indexes[0].index_arn.as_deref(),
        Some("arn:aws:dynamodb:eu-central-1:111122223333:table/Orders/index/by-sk")
    );
    Ok(())
}

#[test]
fn test_should_echo_stream_specification() -> anyhow::Result<()> {
    let mut store = store();
    let input = CreateTableInput {
        stream_specification: Some(StreamSpecification {
            stream_enabled: true,
            stream_view_type: Some(StreamViewType::NewImage),
        }),
        ..simple_table("streamed")
    };
    store.create_table(input)?;

    let table = store
        .describe_table(DescribeTableInput::new("streamed"))?
        .output
        .table
        .expect("table exists");
    let stream = table.stream_specification.expect("stream spec is reported");
    assert!(stream.stream_enabled);
    assert_eq!(stream.stream_view_type, Some(StreamViewType::NewImage));
    Ok(())
}
