//! Isolation between stores and shared access to one store.

use std::sync::Arc;
use std::thread;

use localdyn_model::input::{DescribeTableInput, GetItemInput, PutItemInput};

use crate::{item, s, simple_table, store};

#[test]
fn test_should_keep_stores_isolated() {
    let mut first = store();
    let second = store();
    first.create_table(simple_table("Only")).unwrap();

    assert!(first.describe_table(DescribeTableInput::new("Only")).is_ok());
    assert!(second.describe_table(DescribeTableInput::new("Only")).is_err());
}

#[test]
fn test_should_serialize_writers_through_shared_store() {
    let mut store = store();
    store.create_table(simple_table("T")).unwrap();
    let shared = store.into_shared();

    let writers: Vec<_> = (0..8)
        .map(|i| {
            let shared = Arc::clone(&shared);
            thread::spawn(move || {
                for j in 0..10 {
                    shared
                        .lock()
                        .put_item(PutItemInput {
                            table_name: "T".to_owned(),
                            item: item(&[("pk", s(&format!("{i}-{j}")))]),
                            ..Default::default()
                        })
                        .unwrap();
                }
            })
        })
        .collect();
    for writer in writers {
        writer.join().unwrap();
    }

    let mut store = shared.lock();
    let table = store
        .describe_table(DescribeTableInput::new("T"))
        .unwrap()
        .output
        .table
        .unwrap();
    assert_eq!(table.item_count, Some(80));

    let got = store
        .get_item(GetItemInput {
            table_name: "T".to_owned(),
            key: item(&[("pk", s("7-9"))]),
            ..Default::default()
        })
        .unwrap();
    assert!(got.output.item.is_some());
}

#[test]
fn test_should_issue_distinct_request_ids() {
    let mut store = store();
    let first = store.create_table(simple_table("A")).unwrap();
    let second = store.create_table(simple_table("B")).unwrap();
    assert_eq!(first.metadata.request_id, "req-000001");
    assert_eq!(second.metadata.request_id, "req-000002");
}
