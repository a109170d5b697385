//! Bulk writes, bulk reads, and `_all_docs` listings.

mod common;

use common::{client, drop_db, fresh_db};
use roudant::{AllDocsOptions, BulkDocsOptions, BulkGetItem};

#[tokio::test]
#[ignore]
async fn bulk_docs_writes_all() {
    let client = client();
    let db = fresh_db(&client, "bulk_write").await;

    let docs = vec![
        serde_json::json!({"_id": "alice", "age": 30}),
        serde_json::json!({"_id": "bob", "age": 25}),
        serde_json::json!({"_id": "charlie", "age": 35}),
    ];
    let results = client
        .bulk_docs(&db, docs, BulkDocsOptions::new())
        .await
        .unwrap();

    assert_eq!(results.len(), 3);
    for result in &results {
        assert!(result.accepted(), "rejected: {:?}", result);
    }

    let info = client.database_info(&db).await.unwrap();
    assert_eq!(info.doc_count, 3);

    drop_db(&client, &db).await;
}

#[tokio::test]
#[ignore]
async fn bulk_docs_reports_conflicts_per_doc() {
    let client = client();
    let db = fresh_db(&client, "bulk_conflict").await;

    client
        .put_document(&db, "existing", serde_json::json!({"v": 1}))
        .await
        .unwrap();

    // One conflicting write (no _rev for an existing doc), one fresh
    let docs = vec![
        serde_json::json!({"_id": "existing", "v": 2}),
        serde_json::json!({"_id": "fresh", "v": 1}),
    ];
    let results = client
        .bulk_docs(&db, docs, BulkDocsOptions::new())
        .await
        .unwrap();

    let existing = results.iter().find(|r| r.id == "existing").unwrap();
    assert_eq!(existing.error.as_deref(), Some("conflict"));

    let fresh = results.iter().find(|r| r.id == "fresh").unwrap();
    assert!(fresh.accepted());

    drop_db(&client, &db).await;
}

#[tokio::test]
#[ignore]
async fn bulk_docs_new_edits_false_accepts_revs() {
    let client = client();
    let db = fresh_db(&client, "bulk_repl").await;

    // Replication-style write: the rev is taken as-is
    let docs = vec![serde_json::json!({
        "_id": "doc1",
        "_rev": "1-aaaaaaaaaaaaaaaaaaaaaaaaaaaaaaaa",
        "v": 1
    })];
    let results = client
        .bulk_docs(&db, docs, BulkDocsOptions::replication())
        .await
        .unwrap();
    assert!(results.is_empty() || results.iter().all(|r| r.error.is_none()));

    let doc = client
        .get_document(&db, "doc1", Default::default())
        .await
        .unwrap();
    assert_eq!(
        doc.rev.unwrap().to_string(),
        "1-aaaaaaaaaaaaaaaaaaaaaaaaaaaaaaaa"
    );

    drop_db(&client, &db).await;
}

#[tokio::test]
#[ignore]
async fn all_docs_lists_everything() {
    let client = client();
    let db = fresh_db(&client, "bulk_alldocs").await;

    for id in ["alice", "bob", "charlie"] {
        client
            .put_document(&db, id, serde_json::json!({"name": id}))
            .await
            .unwrap();
    }

    let result = client.all_docs(&db, AllDocsOptions::new()).await.unwrap();
    assert_eq!(result.total_rows, 3);
    assert_eq!(result.rows[0].id, "alice");

    drop_db(&client, &db).await;
}

#[tokio::test]
#[ignore]
async fn all_docs_with_keys_and_include_docs() {
    let client = client();
    let db = fresh_db(&client, "bulk_keys").await;

    for id in ["alice", "bob", "charlie"] {
        client
            .put_document(&db, id, serde_json::json!({"name": id}))
            .await
            .unwrap();
    }

    let result = client
        .all_docs(
            &db,
            AllDocsOptions {
                keys: Some(vec!["alice".into(), "charlie".into()]),
                include_docs: true,
                ..AllDocsOptions::new()
            },
        )
        .await
        .unwrap();

    assert_eq!(result.rows.len(), 2);
    assert_eq!(result.rows[0].doc.as_ref().unwrap()["name"], "alice");
    assert_eq!(result.rows[1].doc.as_ref().unwrap()["name"], "charlie");

    drop_db(&client, &db).await;
}

#[tokio::test]
#[ignore]
async fn all_docs_key_range() {
    let client = client();
    let db = fresh_db(&client, "bulk_range").await;

    for i in 0..10 {
        client
            .put_document(&db, &format!("doc{:02}", i), serde_json::json!({"i": i}))
            .await
            .unwrap();
    }

    let result = client
        .all_docs(
            &db,
            AllDocsOptions {
                start_key: Some("doc03".into()),
                end_key: Some("doc07".into()),
                ..AllDocsOptions::new()
            },
        )
        .await
        .unwrap();
    assert_eq!(result.rows.len(), 5); // doc03..doc07 inclusive

    drop_db(&client, &db).await;
}

#[tokio::test]
#[ignore]
async fn bulk_get_fetches_many() {
    let client = client();
    let db = fresh_db(&client, "bulk_get").await;

    client
        .put_document(&db, "a", serde_json::json!({"v": 1}))
        .await
        .unwrap();
    client
        .put_document(&db, "b", serde_json::json!({"v": 2}))
        .await
        .unwrap();

    let resp = client
        .bulk_get(
            &db,
            vec![
                BulkGetItem::latest("a"),
                BulkGetItem::latest("b"),
                BulkGetItem::latest("missing"),
            ],
        )
        .await
        .unwrap();

    assert_eq!(resp.results.len(), 3);
    let a = &resp.results[0];
    assert!(a.docs[0].ok.is_some());
    let missing = &resp.results[2];
    assert!(missing.docs[0].error.is_some());

    drop_db(&client, &db).await;
}
