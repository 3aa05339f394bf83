//! Collection-level behavior against a temp data directory, without the HTTP layer.

use serde_json::{json, Value};
use std::sync::Arc;
use survey_data_service::domain::JsonObject;
use survey_data_service::{DataError, DataService};

fn fields(v: Value) -> JsonObject {
    match v {
        Value::Object(map) => map,
        _ => panic!("fixture must be an object"),
    }
}

#[tokio::test]
async fn test_delete_removes_every_duplicate() -> Result<(), Box<dyn std::error::Error>> {
    let dir = tempfile::tempdir()?;
    std::fs::create_dir_all(dir.path().join("participant"))?;
    std::fs::write(
        dir.path().join("participant/participants.json"),
        serde_json::to_vec(&json!([
            { "participantID": "dup", "n": 1 },
            { "participantID": "keep" },
            { "participantID": "dup", "n": 2 }
        ]))?,
    )?;
    let service = DataService::new(dir.path());

    let before = service.participants.list().await?.len();
    let removed = service.participants.delete("dup").await?;
    assert_eq!(removed, 2);
    assert_eq!(service.participants.list().await?.len(), before - 2);
    assert!(matches!(
        service.participants.get("dup").await,
        Err(DataError::NotFound(_))
    ));
    assert_eq!(
        service.participants.get("keep").await?,
        json!({ "participantID": "keep" })
    );
    Ok(())
}

#[tokio::test]
async fn test_create_discards_supplied_id() -> Result<(), Box<dyn std::error::Error>> {
    let dir = tempfile::tempdir()?;
    let service = DataService::new(dir.path());

    let created = service
        .participants
        .create(fields(json!({ "participantID": "mine", "name": "Bo" })))
        .await?;
    let id = created["participantID"].as_str().unwrap();
    assert_ne!(id, "mine");
    assert_eq!(service.participants.get(id).await?, created);
    Ok(())
}

#[tokio::test]
async fn test_upsert_keeps_one_record_per_pair() -> Result<(), Box<dyn std::error::Error>> {
    let dir = tempfile::tempdir()?;
    let service = DataService::new(dir.path());

    let first = service
        .responses
        .upsert("p1", "s1", json!({ "answer": 1 }))
        .await?;
    let other = service
        .responses
        .upsert("p2", "s1", json!({ "answer": 9 }))
        .await?;
    let second = service
        .responses
        .upsert("p1", "s1", json!({ "answer": 2 }))
        .await?;
    assert_eq!(first, second);
    assert_ne!(first, other);

    let stored = service.responses.get("p1", "s1").await?;
    assert_eq!(
        stored,
        json!({
            "responseID": first,
            "participantID": "p1",
            "surveyID": "s1",
            "formData": { "answer": 2 }
        })
    );
    assert_eq!(
        service.responses.get("p2", "s1").await?["formData"],
        json!({ "answer": 9 })
    );
    Ok(())
}

#[tokio::test]
async fn test_bulk_delete_leaves_unlisted_records() -> Result<(), Box<dyn std::error::Error>> {
    let dir = tempfile::tempdir()?;
    let service = DataService::new(dir.path());

    let a = service.messages.create(fields(json!({ "t": "a" }))).await?;
    let b = service.messages.create(fields(json!({ "t": "b" }))).await?;
    let c = service.messages.create(fields(json!({ "t": "c" }))).await?;
    let id = |m: &Value| m["id"].as_str().unwrap().to_string();

    assert_eq!(service.messages.delete_many(&[]).await?, 0);
    assert_eq!(
        service
            .messages
            .delete_many(&["unknown".to_string()])
            .await?,
        0
    );
    assert_eq!(service.messages.delete_many(&[id(&a), id(&c)]).await?, 2);
    assert_eq!(service.messages.list().await?, vec![b.clone()]);
    assert_eq!(service.messages.get(&id(&b)).await?, b);
    Ok(())
}

#[tokio::test]
async fn test_legacy_events_document_never_reuses_ids() -> Result<(), Box<dyn std::error::Error>> {
    let dir = tempfile::tempdir()?;
    std::fs::create_dir_all(dir.path().join("events"))?;
    // Written before the counter existed: "1" was deleted, "2" survives.
    std::fs::write(
        dir.path().join("events/events.json"),
        r#"{ "events": [ { "id": "2", "title": "old" } ] }"#,
    )?;
    let service = DataService::new(dir.path());

    let event = service.events.create(fields(json!({ "title": "new" }))).await?;
    assert_eq!(event["id"], "3");
    let doc = service.events.document().await?;
    assert_eq!(doc["nextEventID"], 4);
    Ok(())
}

#[tokio::test(flavor = "multi_thread", worker_threads = 4)]
async fn test_concurrent_creates_are_not_lost() -> Result<(), Box<dyn std::error::Error>> {
    let dir = tempfile::tempdir()?;
    let service = Arc::new(DataService::new(dir.path()));

    let mut handles = Vec::new();
    for i in 0..20 {
        let service = service.clone();
        handles.push(tokio::spawn(async move {
            service.events.create(fields(json!({ "n": i }))).await
        }));
    }
    for h in handles {
        h.await??;
    }

    let events = service.events.list().await?;
    assert_eq!(events.len(), 20);
    let mut ids: Vec<&str> = events.iter().map(|e| e["id"].as_str().unwrap()).collect();
    ids.sort();
    ids.dedup();
    assert_eq!(ids.len(), 20);
    Ok(())
}

#[tokio::test]
async fn test_failed_save_reports_write_failure() -> Result<(), Box<dyn std::error::Error>> {
    let dir = tempfile::tempdir()?;
    std::fs::write(dir.path().join("messages"), "not a directory")?;
    let service = DataService::new(dir.path());

    let err = service
        .messages
        .create(fields(json!({ "t": "a" })))
        .await
        .unwrap_err();
    assert!(matches!(err, DataError::WriteFailure(_)));
    Ok(())
}
