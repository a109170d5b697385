//! Database create/exists/info/delete lifecycle.

mod common;

use common::{client, drop_db, fresh_db};
use roudant::Error;

#[tokio::test]
#[ignore]
async fn database_lifecycle() {
    let client = client();
    let db = fresh_db(&client, "db_lifecycle").await;

    assert!(client.database_exists(&db).await.unwrap());

    let info = client.database_info(&db).await.unwrap();
    assert_eq!(info.db_name, db);
    assert_eq!(info.doc_count, 0);

    let resp = client.delete_database(&db).await.unwrap();
    assert!(resp.ok);
    assert!(!client.database_exists(&db).await.unwrap());
}

#[tokio::test]
#[ignore]
async fn create_existing_database_fails() {
    let client = client();
    let db = fresh_db(&client, "db_dup").await;

    let result = client.create_database(&db, Default::default()).await;
    assert!(matches!(result, Err(Error::PreconditionFailed(_))));

    drop_db(&client, &db).await;
}

#[tokio::test]
#[ignore]
async fn database_info_counts_documents() {
    let client = client();
    let db = fresh_db(&client, "db_info").await;

    client
        .put_document(&db, "doc1", serde_json::json!({}))
        .await
        .unwrap();
    client
        .put_document(&db, "doc2", serde_json::json!({}))
        .await
        .unwrap();

    let info = client.database_info(&db).await.unwrap();
    assert_eq!(info.doc_count, 2);

    drop_db(&client, &db).await;
}

#[tokio::test]
#[ignore]
async fn info_on_missing_database_is_not_found() {
    let client = client();

    let result = client.database_info("roudant_does_not_exist").await;
    assert!(matches!(result, Err(Error::NotFound(_))));
}
