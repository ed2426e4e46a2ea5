use std::fs;

use bullpen_core::{
    AthleteInfo, BullpenSession, EngineError, JsonFileStore, MemoryStore, ScriptItem,
    SessionStatus, SessionStore, Summary,
};
use chrono::Utc;

fn session(id: &str, assignment: Option<&str>) -> BullpenSession {
    BullpenSession {
        id: id.to_string(),
        organization_id: "org-1".to_string(),
        team_id: "team-1".to_string(),
        athlete: AthleteInfo {
            id: "ath-1".to_string(),
            name: "Sam Rivera".to_string(),
        },
        workout_assignment_id: assignment.map(str::to_string),
        calendar_event_id: None,
        status: SessionStatus::InProgress,
        pitches: Vec::new(),
        script: vec![ScriptItem {
            id: "s0".to_string(),
            pitch_type: "CT".to_string(),
            target_zone: "zone_3".to_string(),
        }],
        summary: Summary {
            total_pitch_prescribed: 1,
            ..Summary::default()
        },
        created_at: Utc::now(),
        revision: 0,
    }
}

#[test]
fn file_store_round_trips_a_session_document() {
    let dir = "tests/tmp_store_roundtrip";
    let store = JsonFileStore::new(dir);

    store.create(&session("s1", Some("wa-1"))).expect("create");
    let loaded = store.get("s1").expect("get").expect("exists");

    assert_eq!(loaded.id, "s1");
    assert_eq!(loaded.script.len(), 1);
    assert_eq!(loaded.script[0].target_zone, "zone_3");
    assert_eq!(loaded.status, SessionStatus::InProgress);
    assert_eq!(loaded.summary.total_pitch_prescribed, 1);

    fs::remove_dir_all(dir).ok();
}

#[test]
fn file_store_rejects_creating_the_same_session_twice() {
    let dir = "tests/tmp_store_dup";
    let store = JsonFileStore::new(dir);

    store.create(&session("s1", None)).expect("create");
    let err = store.create(&session("s1", None)).expect_err("duplicate");
    assert!(matches!(err, EngineError::Persistence(_)));

    fs::remove_dir_all(dir).ok();
}

#[test]
fn file_store_returns_none_for_unknown_ids() {
    let dir = "tests/tmp_store_missing";
    let store = JsonFileStore::new(dir);

    assert!(store.get("nope").expect("get").is_none());

    fs::remove_dir_all(dir).ok();
}

#[test]
fn file_store_queries_by_assignment() {
    let dir = "tests/tmp_store_query";
    let store = JsonFileStore::new(dir);

    store.create(&session("s1", Some("wa-1"))).expect("s1");
    store.create(&session("s2", Some("wa-2"))).expect("s2");
    store.create(&session("s3", None)).expect("s3");

    let found = store.query_by_assignment("wa-1").expect("query");
    assert_eq!(found.len(), 1);
    assert_eq!(found[0].id, "s1");

    fs::remove_dir_all(dir).ok();
}

#[test]
fn file_store_rejects_stale_revisions() {
    let dir = "tests/tmp_store_stale";
    let store = JsonFileStore::new(dir);

    let original = session("s1", None);
    store.create(&original).expect("create");

    let mut fresh = original.clone();
    fresh.revision = 1;
    store.update(&fresh).expect("fresh write");

    // second writer still holding revision 0 loses
    let mut stale = original;
    stale.revision = 1;
    let err = store.update(&stale).expect_err("stale write");
    assert!(matches!(err, EngineError::Persistence(_)));

    fs::remove_dir_all(dir).ok();
}

#[test]
fn file_store_reports_corrupt_documents() {
    let dir = "tests/tmp_store_corrupt";
    fs::create_dir_all(dir).expect("mkdir");
    fs::write(format!("{dir}/bad.json"), "{\"id\": 42}").expect("write");

    let store = JsonFileStore::new(dir);
    let err = store.get("bad").expect_err("corrupt");
    assert!(matches!(err, EngineError::Persistence(_)));

    fs::remove_dir_all(dir).ok();
}

#[test]
fn memory_store_rejects_stale_revisions() {
    let store = MemoryStore::new();
    let original = session("s1", None);
    store.create(&original).expect("create");

    let mut fresh = original.clone();
    fresh.revision = 1;
    store.update(&fresh).expect("fresh write");

    let mut stale = original;
    stale.revision = 1;
    assert!(matches!(
        store.update(&stale),
        Err(EngineError::Persistence(_))
    ));
}

#[test]
fn memory_store_clones_share_state() {
    let store = MemoryStore::new();
    let handle = store.clone();

    store.create(&session("s1", Some("wa-1"))).expect("create");

    assert!(handle.get("s1").expect("get").is_some());
    assert_eq!(handle.query_by_assignment("wa-1").expect("query").len(), 1);
}
