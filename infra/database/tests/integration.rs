use nucard_database::*;

#[tokio::test]
async fn connect_in_memory_and_health_check() {
    let db = Database::builder()
        .url("mem://")
        .session("test_ns", "test_db")
        .init()
        .await
        .expect("connect to mem://");

    db.health().await.expect("health check");
    assert_eq!(db.namespace(), "test_ns");
    assert_eq!(db.database(), "test_db");
}

#[tokio::test]
async fn clones_share_one_session() {
    let db = Database::builder()
        .url("mem://")
        .session("test_ns", "shared")
        .init()
        .await
        .expect("connect to mem://");
    let clone = db.clone();

    db.query("CREATE card:ragnaros SET name = 'Ragnaros'").await.expect("create");
    let mut response = clone.query("SELECT VALUE name FROM card").await.expect("select");
    let names: Vec<String> = response.take(0).expect("take names");

    assert_eq!(names, vec!["Ragnaros".to_owned()]);
}

#[tokio::test]
async fn missing_parameters_fail_validation() {
    let err = Database::builder().init().await.unwrap_err();
    assert!(matches!(err, DatabaseError::Validation { .. }));

    let err = Database::builder().url("mem://").init().await.unwrap_err();
    assert!(matches!(err, DatabaseError::Validation { .. }));
}
