mod helpers;

use bytes::Bytes;
use docsum_api::{BatchAck, QueueConsumer};
use docsum_core::WorkItem;
use docsum_queue::WorkQueue;
use docsum_storage::Storage;
use helpers::fakes::{CountingQueue, StubSummarizer};
use helpers::{document_form, setup_test_app, test_app, BUCKET, QUEUE_URL, TABLE};
use serde_json::{json, Value};
use std::sync::Arc;
use std::time::Duration;

async fn enqueue(app: &helpers::TestApp, item: &WorkItem) {
    app.queue
        .send_message(QUEUE_URL, item.to_message_body().unwrap())
        .await
        .unwrap();
}

#[tokio::test]
async fn test_upload_then_consume_then_read() {
    let app = setup_test_app().await;

    let upload = app
        .client()
        .post("/upload")
        .multipart(document_form("report.pdf", b"%PDF-1.4"))
        .await;
    assert_eq!(upload.status_code(), 200);
    let document_id = upload.json::<Value>()["documentId"]
        .as_str()
        .unwrap()
        .to_string();

    let ack = app.consumer.poll_once().await.unwrap();
    assert_eq!(
        ack,
        BatchAck {
            deleted: 1,
            redelivered: 0
        }
    );
    assert_eq!(app.queue.pending_count(QUEUE_URL), 0);
    assert_eq!(app.summarizer.calls(), vec!["Hello".to_string()]);
    assert_eq!(
        app.translator.calls(),
        vec![("Hi".to_string(), "de".to_string())]
    );

    let summary = app
        .client()
        .get(&format!("/documents/{}/summary", document_id))
        .await;
    assert_eq!(summary.json::<Value>(), json!({ "summary": "Hi" }));

    let translation = app
        .client()
        .get(&format!("/documents/{}/translation/de", document_id))
        .await;
    assert_eq!(translation.json::<Value>(), json!({ "translation": "Hallo" }));
}

#[tokio::test]
async fn test_unsupported_file_type_is_dropped() {
    let app = setup_test_app().await;
    let item = WorkItem::new("doc-1", "doc-1-notes.txt");
    app.storage
        .put_object(BUCKET, &item.filename, Bytes::from_static(b"plain"))
        .await
        .unwrap();
    enqueue(&app, &item).await;

    let ack = app.consumer.poll_once().await.unwrap();

    assert_eq!(ack.deleted, 1);
    assert_eq!(app.queue.pending_count(QUEUE_URL), 0);
    assert!(app.summarizer.calls().is_empty());
    assert!(app.results.record(TABLE, "doc-1").is_none());
}

#[tokio::test]
async fn test_malformed_body_is_dropped() {
    let app = setup_test_app().await;
    app.queue
        .send_message(QUEUE_URL, "{\"documentId\":\"doc-1\"}".to_string())
        .await
        .unwrap();

    let ack = app.consumer.poll_once().await.unwrap();

    assert_eq!(ack.deleted, 1);
    assert_eq!(app.queue.pending_count(QUEUE_URL), 0);
}

#[tokio::test]
async fn test_failure_leaves_message_and_rest_of_batch_for_redelivery() {
    let app = test_app()
        .with_summarizer(StubSummarizer::failing())
        .build()
        .await;
    for id in ["doc-1", "doc-2"] {
        let item = WorkItem::new(id, format!("{}-a.pdf", id));
        app.storage
            .put_object(BUCKET, &item.filename, Bytes::from_static(b"%PDF"))
            .await
            .unwrap();
        enqueue(&app, &item).await;
    }

    let ack = app.consumer.poll_once().await.unwrap();

    assert_eq!(
        ack,
        BatchAck {
            deleted: 0,
            redelivered: 2
        }
    );
    assert_eq!(app.summarizer.calls().len(), 1);
    assert_eq!(app.queue.pending_count(QUEUE_URL), 2);
    assert!(app.results.is_empty());
}

#[tokio::test]
async fn test_missing_object_is_retried_after_visibility_timeout() {
    let app = test_app()
        .with_visibility_timeout(Duration::ZERO)
        .build()
        .await;
    let item = WorkItem::new("doc-1", "doc-1-late.pdf");
    enqueue(&app, &item).await;

    let first = app.consumer.poll_once().await.unwrap();
    assert_eq!(first.redelivered, 1);

    app.storage
        .put_object(BUCKET, &item.filename, Bytes::from_static(b"%PDF"))
        .await
        .unwrap();

    let second = app.consumer.poll_once().await.unwrap();
    assert_eq!(second.deleted, 1);
    assert_eq!(app.results.record(TABLE, "doc-1").unwrap()["summary"], "Hi");
}

#[tokio::test]
async fn test_empty_queue_poll_is_noop() {
    let app = setup_test_app().await;

    let ack = app.consumer.poll_once().await.unwrap();

    assert_eq!(ack, BatchAck::default());
}

#[tokio::test]
async fn test_spawned_consumer_drains_queue_and_shuts_down() {
    let app = setup_test_app().await;
    let item = WorkItem::new("doc-1", "doc-1-a.pdf");
    app.storage
        .put_object(BUCKET, &item.filename, Bytes::from_static(b"%PDF"))
        .await
        .unwrap();
    enqueue(&app, &item).await;

    let handle = app.long_polling_consumer().spawn();
    for _ in 0..100 {
        if app.results.record(TABLE, "doc-1").is_some() {
            break;
        }
        tokio::time::sleep(Duration::from_millis(10)).await;
    }
    handle.shutdown().await;

    assert!(app.results.record(TABLE, "doc-1").is_some());
}

#[tokio::test]
async fn test_zero_wait_consumer_pauses_on_empty_queue() {
    let app = setup_test_app().await;
    let queue = Arc::new(CountingQueue::default());
    let consumer = QueueConsumer::new(queue.clone(), app.event_router.clone(), QUEUE_URL, 10, 0);

    let handle = consumer.spawn();
    tokio::time::sleep(Duration::from_millis(200)).await;
    handle.shutdown().await;

    let receives = queue.receives();
    assert!(receives >= 1);
    assert!(receives <= 2, "polled {} times in 200ms", receives);
}
