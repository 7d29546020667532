//! Operations answered with default responses.

use localdyn_model::DynamoDBOperation;
use localdyn_model::error::DynamoDBErrorCode;
use localdyn_model::input::{
    BatchGetItemInput, BatchWriteItemInput, DeleteItemInput, DeleteTableInput,
    DescribeTableInput, QueryInput, UpdateItemInput,
};
use serde_json::json;

use crate::{item, s, simple_table, store};

#[test]
fn test_should_not_delete_anything() -> anyhow::Result<()> {
    let mut store = store();
    store.create_table(simple_table("T"))?;

    store.delete_item(DeleteItemInput {
        table_name: "T".to_owned(),
        key: item(&[("pk", s("a"))]),
        ..Default::default()
    })?;
    let deleted = store.delete_table(DeleteTableInput {
        table_name: "T".to_owned(),
    })?;
    assert!(deleted.output.table_description.is_none());
    assert!(store.describe_table(DescribeTableInput::new("T")).is_ok());
    Ok(())
}

#[test]
fn test_should_skip_validation_for_unmodeled_operations() -> anyhow::Result<()> {
    let store = store();

    let updated = store.update_item(UpdateItemInput {
        table_name: "missing".to_owned(),
        update_expression: Some("SET nonsense ===".to_owned()),
        ..Default::default()
    })?;
    assert!(updated.output.attributes.is_empty());

    let queried = store.query(QueryInput {
        table_name: "missing".to_owned(),
        ..Default::default()
    })?;
    assert_eq!(queried.output.count, 0);
    assert!(queried.output.items.is_empty());

    let batch_get = store.batch_get_item(BatchGetItemInput::default())?;
    assert!(batch_get.output.responses.is_empty());
    let batch_write = store.batch_write_item(BatchWriteItemInput::default())?;
    assert!(batch_write.output.unprocessed_items.is_empty());
    Ok(())
}

#[test]
fn test_should_invoke_every_operation_by_name() {
    let mut store = store();
    for op in DynamoDBOperation::ALL.iter().filter(|op| !op.is_modeled()) {
        let response = store
            .invoke(op.as_str(), b"{}")
            .unwrap_or_else(|e| panic!("{op} failed: {e}"));
        assert!(response.output.is_object(), "{op} should answer with an object");
        assert_eq!(response.content_length, 2);
    }
}

#[test]
fn test_should_drive_modeled_flow_through_invoke() {
    let mut store = store();
    let create = json!({
        "TableName": "T",
        "KeySchema": [{"AttributeName": "pk", "KeyType": "HASH"}],
        "AttributeDefinitions": [{"AttributeName": "pk", "AttributeType": "S"}],
        "BillingMode": "PAY_PER_REQUEST",
    });
    let created = store
        .invoke("CreateTable", create.to_string().as_bytes())
        .unwrap();
    assert_eq!(created.output["TableDescription"]["TableStatus"], "CREATING");
    assert_eq!(created.content_length, 500);

    let put = json!({"TableName": "T", "Item": {"pk": {"S": "a"}, "attr": {"S": "1"}}});
    store.invoke("PutItem", put.to_string().as_bytes()).unwrap();

    let get = json!({
        "TableName": "T",
        "Key": {"pk": {"S": "a"}},
        "ProjectionExpression": "pk, attr",
    });
    let got = store.invoke("GetItem", get.to_string().as_bytes()).unwrap();
    assert_eq!(
        got.output["Item"],
        json!({"pk": {"S": "a"}, "attr": {"S": "1"}})
    );
}

#[test]
fn test_should_reject_unknown_operation_name() {
    let mut store = store();
    let err = store.invoke("DescribeEverything", b"{}").unwrap_err();
    assert_eq!(err.code, DynamoDBErrorCode::UnrecognizedClientException);
}
