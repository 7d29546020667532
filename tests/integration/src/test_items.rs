//! Item writes and reads.

use std::collections::HashMap;

use bytes::Bytes;
use localdyn_core::LocalDynamoDB;
use localdyn_model::AttributeValue;
use localdyn_model::error::{DynamoDBError, DynamoDBErrorCode};
use localdyn_model::input::{CreateTableInput, DescribeTableInput, GetItemInput, PutItemInput};
use localdyn_model::types::{
    AttributeDefinition, Item, KeySchemaElement, ReturnValue, ScalarAttributeType,
};

use crate::{composite_table, item, n, s, simple_table, store, test_table_name};

fn put(store: &mut LocalDynamoDB, table: &str, item: Item) -> Result<(), DynamoDBError> {
    store
        .put_item(PutItemInput {
            table_name: table.to_owned(),
            item,
            ..Default::default()
        })
        .map(|_| ())
}

fn get(store: &mut LocalDynamoDB, table: &str, key: Item) -> Result<Option<Item>, DynamoDBError> {
    store
        .get_item(GetItemInput {
            table_name: table.to_owned(),
            key,
            ..Default::default()
        })
        .map(|r| r.output.item)
}

fn item_count(store: &LocalDynamoDB, table: &str) -> Option<i64> {
    store
        .describe_table(DescribeTableInput::new(table))
        .ok()
        .and_then(|r| r.output.table)
        .and_then(|t| t.item_count)
}

#[test]
fn test_should_put_and_get_projected_item() -> anyhow::Result<()> {
    let mut store = store();
    store.create_table(simple_table("T"))?;
    put(&mut store, "T", item(&[("pk", s("a")), ("attr", s("1"))]))?;

    let got = store.get_item(GetItemInput {
        table_name: "T".to_owned(),
        key: item(&[("pk", s("a"))]),
        attributes_to_get: vec!["pk".to_owned(), "attr".to_owned()],
        ..Default::default()
    })?;
    assert_eq!(got.output.item, Some(item(&[("pk", s("a")), ("attr", s("1"))])));
    assert_eq!(got.content_length, 2);
    Ok(())
}

#[test]
fn test_should_omit_unrequested_attributes() -> anyhow::Result<()> {
    let mut store = store();
    let table = test_table_name("project");
    store.create_table(simple_table(&table))?;
    put(
        &mut store,
        &table,
        item(&[("pk", s("a")), ("name", s("x")), ("secret", s("hidden"))]),
    )?;

    let got = store.get_item(GetItemInput {
        table_name: table.clone(),
        key: item(&[("pk", s("a"))]),
        projection_expression: Some("#n, missing".to_owned()),
        expression_attribute_names: HashMap::from([("#n".to_owned(), "name".to_owned())]),
        ..Default::default()
    })?;
    assert_eq!(got.output.item, Some(item(&[("name", s("x"))])));
    Ok(())
}

#[test]
fn test_should_reject_undefined_projection_placeholder() {
    let mut store = store();
    store.create_table(simple_table("T")).unwrap();
    let err = store
        .get_item(GetItemInput {
            table_name: "T".to_owned(),
            key: item(&[("pk", s("a"))]),
            projection_expression: Some("#nope".to_owned()),
            ..Default::default()
        })
        .unwrap_err();
    assert_eq!(err.code, DynamoDBErrorCode::ValidationException);
}

#[test]
fn test_should_return_empty_response_for_unknown_key() -> anyhow::Result<()> {
    let mut store = store();
    store.create_table(simple_table("T"))?;
    assert_eq!(get(&mut store, "T", item(&[("pk", s("never-put"))]))?, None);
    Ok(())
}

#[test]
fn test_should_overwrite_same_key() -> anyhow::Result<()> {
    let mut store = store();
    store.create_table(composite_table("T"))?;
    for round in 0..5 {
        put(
            &mut store,
            "T",
            item(&[("pk", s("a")), ("sk", s("b")), ("round", n(&round.to_string()))]),
        )?;
    }
    assert_eq!(item_count(&store, "T"), Some(1));

    let latest = get(&mut store, "T", item(&[("pk", s("a")), ("sk", s("b"))]))?;
    assert_eq!(latest.and_then(|i| i.get("round").cloned()), Some(n("4")));
    Ok(())
}

#[test]
fn test_should_count_items_across_partitions_and_slots() -> anyhow::Result<()> {
    let mut store = store();
    store.create_table(composite_table("T"))?;
    for (pk, sk) in [("a", "1"), ("a", "2"), ("b", "1")] {
        put(&mut store, "T", item(&[("pk", s(pk)), ("sk", s(sk))]))?;
    }
    assert_eq!(item_count(&store, "T"), Some(3));
    Ok(())
}

#[test]
fn test_should_tell_key_count_error_from_missing_key_error() {
    let mut store = store();
    store.create_table(composite_table("T")).unwrap();

    let count = get(&mut store, "T", item(&[("pk", s("x"))])).unwrap_err();
    let missing = get(&mut store, "T", item(&[("pk", s("x")), ("wrongname", s("y"))])).unwrap_err();

    assert_eq!(count.code, DynamoDBErrorCode::ValidationException);
    assert_eq!(missing.code, DynamoDBErrorCode::ValidationException);
    assert_eq!(count.message, "The number of conditions on the keys is invalid");
    assert_eq!(missing.message, "One of the required keys was not given a value");
}

#[test]
fn test_should_reject_empty_key() {
    let mut store = store();
    let err = get(&mut store, "whatever", HashMap::new()).unwrap_err();
    assert_eq!(
        err.message,
        "Cannot have null key for GetItem, DeleteItem, or UpdateItem"
    );
}

#[test]
fn test_should_reject_key_of_wrong_type() {
    let mut store = store();
    store.create_table(simple_table("T")).unwrap();
    let err = put(&mut store, "T", item(&[("pk", n("1"))])).unwrap_err();
    assert_eq!(err.code, DynamoDBErrorCode::ValidationException);
    assert!(err.message.contains("Expected type S"));
}

#[test]
fn test_should_reject_put_missing_hash_key() {
    let mut store = store();
    store.create_table(simple_table("T")).unwrap();
    let err = put(&mut store, "T", item(&[("other", s("a"))])).unwrap_err();
    assert_eq!(err.message, "One of the required keys was not given a value");
}

#[test]
fn test_should_reject_put_into_missing_table() {
    let mut store = store();
    let err = put(&mut store, "nope", item(&[("pk", s("a"))])).unwrap_err();
    assert_eq!(err.code, DynamoDBErrorCode::ResourceNotFoundException);
}

#[test]
fn test_should_reject_malformed_attribute_values() {
    let mut store = store();
    store.create_table(simple_table("T")).unwrap();

    let bad_null = item(&[("pk", s("a")), ("x", AttributeValue::Null(false))]);
    assert!(put(&mut store, "T", bad_null).is_err());

    let nested_empty_set = item(&[
        ("pk", s("a")),
        ("m", AttributeValue::M(item(&[("tags", AttributeValue::Ns(vec![]))]))),
    ]);
    let err = put(&mut store, "T", nested_empty_set).unwrap_err();
    assert!(err.message.contains("number set may not be empty"));

    assert_eq!(item_count(&store, "T"), Some(0));
}

#[test]
fn test_should_isolate_stored_items_from_callers() -> anyhow::Result<()> {
    let mut store = store();
    store.create_table(simple_table("T"))?;

    let mut original = item(&[
        ("pk", s("a")),
        ("blob", AttributeValue::B(Bytes::from_static(b"abc"))),
        ("list", AttributeValue::L(vec![s("x")])),
    ]);
    put(&mut store, "T", original.clone())?;

    original.insert("list".to_owned(), AttributeValue::L(vec![s("changed")]));
    let mut first = get(&mut store, "T", item(&[("pk", s("a"))]))?.expect("item stored");
    assert_eq!(first.get("list"), Some(&AttributeValue::L(vec![s("x")])));

    first.insert("blob".to_owned(), AttributeValue::B(Bytes::from_static(b"zzz")));
    let second = get(&mut store, "T", item(&[("pk", s("a"))]))?.expect("item stored");
    assert_eq!(
        second.get("blob"),
        Some(&AttributeValue::B(Bytes::from_static(b"abc")))
    );
    Ok(())
}

#[test]
fn test_should_return_displaced_item_with_all_old() -> anyhow::Result<()> {
    let mut store = store();
    store.create_table(simple_table("T"))?;

    let first = store.put_item(PutItemInput {
        table_name: "T".to_owned(),
        item: item(&[("pk", s("a")), ("v", s("1"))]),
        return_values: Some(ReturnValue::AllOld),
        ..Default::default()
    })?;
    assert!(first.output.attributes.is_empty());

    let second = store.put_item(PutItemInput {
        table_name: "T".to_owned(),
        item: item(&[("pk", s("a")), ("v", s("2"))]),
        return_values: Some(ReturnValue::AllOld),
        ..Default::default()
    })?;
    assert_eq!(second.output.attributes, item(&[("pk", s("a")), ("v", s("1"))]));
    Ok(())
}

#[test]
fn test_should_address_items_by_binary_and_number_keys() -> anyhow::Result<()> {
    let mut store = store();
    store.create_table(CreateTableInput {
        table_name: "Blobs".to_owned(),
        key_schema: vec![KeySchemaElement::hash("id"), KeySchemaElement::range("rev")],
        attribute_definitions: vec![
            AttributeDefinition::new("id", ScalarAttributeType::B),
            AttributeDefinition::new("rev", ScalarAttributeType::N),
        ],
        ..Default::default()
    })?;

    let id = AttributeValue::B(Bytes::from_static(b"blob-1"));
    put(
        &mut store,
        "Blobs",
        item(&[("id", id.clone()), ("rev", n("2")), ("body", s("v2"))]),
    )?;

    let got = get(&mut store, "Blobs", item(&[("id", id.clone()), ("rev", n("2"))]))?;
    assert_eq!(got.and_then(|i| i.get("body").cloned()), Some(s("v2")));
    assert_eq!(get(&mut store, "Blobs", item(&[("id", id), ("rev", n("1"))]))?, None);
    Ok(())
}
