//! Design documents, MapReduce view queries, and full-text search.

mod common;

use common::{client, drop_db, fresh_db};
use roudant::{SearchOptions, ViewOptions};

async fn seed_with_view(client: &roudant::Client, db: &str) {
    for (id, dept, salary) in [("a", "eng", 100), ("b", "eng", 120), ("c", "sales", 90)] {
        client
            .put_document(db, id, serde_json::json!({"dept": dept, "salary": salary}))
            .await
            .unwrap();
    }

    let ddoc = serde_json::json!({
        "views": {
            "by_dept": {
                "map": "function (doc) { emit(doc.dept, doc.salary); }",
                "reduce": "_sum"
            }
        }
    });
    client
        .put_design_document(db, "payroll", ddoc)
        .await
        .unwrap();
}

#[tokio::test]
#[ignore]
async fn view_basic_map() {
    let client = client();
    let db = fresh_db(&client, "view_map").await;
    seed_with_view(&client, &db).await;

    let result = client
        .view(
            &db,
            "payroll",
            "by_dept",
            &ViewOptions {
                reduce: Some(false),
                ..Default::default()
            },
        )
        .await
        .unwrap();

    assert_eq!(result.total_rows, Some(3));
    assert_eq!(result.rows[0].key, "eng");
    assert_eq!(result.rows[0].value, 100);

    drop_db(&client, &db).await;
}

#[tokio::test]
#[ignore]
async fn view_reduce_and_group() {
    let client = client();
    let db = fresh_db(&client, "view_reduce").await;
    seed_with_view(&client, &db).await;

    // Sum all salaries
    let result = client
        .view(
            &db,
            "payroll",
            "by_dept",
            &ViewOptions {
                reduce: Some(true),
                ..Default::default()
            },
        )
        .await
        .unwrap();
    assert_eq!(result.rows[0].value, 310);

    // Group by department
    let result = client
        .view(
            &db,
            "payroll",
            "by_dept",
            &ViewOptions {
                reduce: Some(true),
                group: true,
                ..Default::default()
            },
        )
        .await
        .unwrap();
    assert_eq!(result.rows.len(), 2);
    let eng = result.rows.iter().find(|r| r.key == "eng").unwrap();
    assert_eq!(eng.value, 220);

    drop_db(&client, &db).await;
}

#[tokio::test]
#[ignore]
async fn view_key_range() {
    let client = client();
    let db = fresh_db(&client, "view_range").await;

    for i in 0..10 {
        client
            .put_document(&db, &format!("d{}", i), serde_json::json!({"n": i}))
            .await
            .unwrap();
    }
    client
        .put_design_document(
            &db,
            "nums",
            serde_json::json!({
                "views": {"by_n": {"map": "function (doc) { emit(doc.n, 1); }"}}
            }),
        )
        .await
        .unwrap();

    let result = client
        .view(
            &db,
            "nums",
            "by_n",
            &ViewOptions {
                start_key: Some(serde_json::json!(3)),
                end_key: Some(serde_json::json!(7)),
                ..Default::default()
            },
        )
        .await
        .unwrap();

    assert_eq!(result.rows.len(), 5); // 3, 4, 5, 6, 7

    drop_db(&client, &db).await;
}

#[tokio::test]
#[ignore]
async fn design_document_roundtrip() {
    let client = client();
    let db = fresh_db(&client, "ddoc_crud").await;

    let put = client
        .put_design_document(
            &db,
            "meta",
            serde_json::json!({"views": {"all": {"map": "function (doc) { emit(doc._id, null); }"}}}),
        )
        .await
        .unwrap();
    assert!(put.ok);

    let ddoc = client.get_design_document(&db, "meta").await.unwrap();
    assert_eq!(ddoc.id, "_design/meta");
    let rev = ddoc.rev.unwrap().to_string();

    let deleted = client.delete_design_document(&db, "meta", &rev).await.unwrap();
    assert!(deleted.ok);

    drop_db(&client, &db).await;
}

// Requires a server with search enabled (Cloudant, or CouchDB with
// clouseau/nouveau); plain CouchDB returns an error here.
#[tokio::test]
#[ignore]
async fn search_by_indexed_field() {
    let client = client();
    let db = fresh_db(&client, "search_basic").await;

    for (id, name) in [("a", "Alice"), ("b", "Bob")] {
        client
            .put_document(&db, id, serde_json::json!({"name": name}))
            .await
            .unwrap();
    }
    client
        .put_design_document(
            &db,
            "finder",
            serde_json::json!({
                "indexes": {
                    "names": {
                        "index": "function (doc) { index(\"name\", doc.name, {\"store\": true}); }"
                    }
                }
            }),
        )
        .await
        .unwrap();

    let result = client
        .search(&db, "finder", "names", &SearchOptions::new("name:Alice"))
        .await
        .unwrap();

    assert_eq!(result.total_rows, 1);
    assert_eq!(result.rows[0].id, "a");

    drop_db(&client, &db).await;
}
