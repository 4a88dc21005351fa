use bin_rota::{
    KeyValueStore, LocalStore, MirroredStore, RotaDefaults, RotaEngine, SettingsRepository,
    Weekday,
};
use chrono::NaiveDate;
use httpmock::prelude::*;
use tempfile::TempDir;

fn local_in(temp_dir: &TempDir) -> LocalStore {
    LocalStore::new(temp_dir.path().to_str().unwrap().to_string())
}

#[tokio::test]
async fn test_set_commits_locally_and_mirrors_remotely() {
    let temp_dir = TempDir::new().unwrap();
    let server = MockServer::start();

    let put_mock = server.mock(|when, then| {
        when.method(PUT)
            .path("/appData/bin:weekday")
            .json_body(serde_json::json!({"value": 5}));
        then.status(200);
    });

    let store = MirroredStore::new(local_in(&temp_dir), server.url("/appData"));
    store.set("bin:weekday", serde_json::json!(5)).await.unwrap();

    put_mock.assert();
    // The local copy is the durable commit.
    let local = local_in(&temp_dir);
    assert_eq!(
        local.get("bin:weekday").await.unwrap(),
        Some(serde_json::json!(5))
    );
}

#[tokio::test]
async fn test_mirror_failure_never_propagates() {
    let temp_dir = TempDir::new().unwrap();
    let server = MockServer::start();

    let put_mock = server.mock(|when, then| {
        when.method(PUT).path("/appData/bin:weekday");
        then.status(500);
    });

    let store = MirroredStore::new(local_in(&temp_dir), server.url("/appData"));
    let result = store.set("bin:weekday", serde_json::json!(2)).await;

    put_mock.assert();
    assert!(result.is_ok());
    assert_eq!(
        local_in(&temp_dir).get("bin:weekday").await.unwrap(),
        Some(serde_json::json!(2))
    );
}

#[tokio::test]
async fn test_get_prefers_remote_and_caches_it_locally() {
    let temp_dir = TempDir::new().unwrap();
    let server = MockServer::start();

    let get_mock = server.mock(|when, then| {
        when.method(GET).path("/appData/bin:weekday");
        then.status(200)
            .header("Content-Type", "application/json")
            .json_body(serde_json::json!({"value": 6}));
    });

    // Local has a stale value; the remote one wins and replaces it.
    let local = local_in(&temp_dir);
    local.set("bin:weekday", serde_json::json!(1)).await.unwrap();

    let store = MirroredStore::new(local_in(&temp_dir), server.url("/appData"));
    let value = store.get("bin:weekday").await.unwrap();

    get_mock.assert();
    assert_eq!(value, Some(serde_json::json!(6)));
    assert_eq!(
        local_in(&temp_dir).get("bin:weekday").await.unwrap(),
        Some(serde_json::json!(6))
    );
}

#[tokio::test]
async fn test_get_falls_back_to_local_when_remote_errors() {
    let temp_dir = TempDir::new().unwrap();
    let server = MockServer::start();

    server.mock(|when, then| {
        when.method(GET).path("/appData/bin:weekday");
        then.status(500);
    });

    let local = local_in(&temp_dir);
    local.set("bin:weekday", serde_json::json!(4)).await.unwrap();

    let store = MirroredStore::new(local_in(&temp_dir), server.url("/appData"));
    assert_eq!(
        store.get("bin:weekday").await.unwrap(),
        Some(serde_json::json!(4))
    );
}

#[tokio::test]
async fn test_get_falls_back_to_local_when_remote_has_no_document() {
    let temp_dir = TempDir::new().unwrap();
    let server = MockServer::start();

    server.mock(|when, then| {
        when.method(GET).path("/appData/bin:pivot");
        then.status(404);
    });

    let local = local_in(&temp_dir);
    local
        .set("bin:pivot", serde_json::json!("2024-01-03"))
        .await
        .unwrap();

    let store = MirroredStore::new(local_in(&temp_dir), server.url("/appData"));
    assert_eq!(
        store.get("bin:pivot").await.unwrap(),
        Some(serde_json::json!("2024-01-03"))
    );
}

#[tokio::test]
async fn test_engine_reads_roster_through_the_mirror() {
    let temp_dir = TempDir::new().unwrap();
    let server = MockServer::start();

    // The remote document store already holds a roster from another device.
    server.mock(|when, then| {
        when.method(GET).path("/appData/bin:names");
        then.status(200)
            .header("Content-Type", "application/json")
            .json_body(serde_json::json!({"value": ["Dirgha", "Umesh"]}));
    });
    server.mock(|when, then| {
        when.method(GET).path("/appData/bin:weekday");
        then.status(200)
            .header("Content-Type", "application/json")
            .json_body(serde_json::json!({"value": 3}));
    });
    server.mock(|when, then| {
        when.method(GET).path("/appData/bin:pivot");
        then.status(200)
            .header("Content-Type", "application/json")
            .json_body(serde_json::json!({"value": "2024-01-03"}));
    });

    let store = MirroredStore::new(local_in(&temp_dir), server.url("/appData"));
    let defaults = RotaDefaults {
        names: vec!["Ignored".to_string()],
        weekday: Weekday::new(0).unwrap(),
        pivot: None,
    };
    let engine = RotaEngine::new(SettingsRepository::new(store, defaults));

    let report = engine
        .run(NaiveDate::from_ymd_opt(2024, 1, 17).unwrap())
        .await
        .unwrap();

    assert_eq!(report.settings.names, vec!["Dirgha", "Umesh"]);
    assert_eq!(report.state.current_index, Some(0));
    assert_eq!(report.state.forecast[0].name, "Dirgha");
}
