use okada_logistics::domain::types::{DeliveryRecord, DeliveryStatus, Sentiment};
use okada_logistics::store::{LogStore, StoreError};

fn record(customer: &str, destination: &str) -> DeliveryRecord {
    DeliveryRecord {
        customer: customer.to_string(),
        destination: destination.to_string(),
        status: DeliveryStatus::Delivered,
        feedback: "smooth ride, thanks".to_string(),
        sentiment: Sentiment::Positive,
        rating: Some(4),
        date: "2026-08-31 14:30".to_string(),
        predicted_delivery_minutes: Some(38),
    }
}

#[test]
fn missing_file_reads_as_empty_log() {
    let dir = tempfile::tempdir().unwrap();
    let store = LogStore::new(dir.path().join("delivery_logs.json"));
    assert!(store.load().unwrap().is_empty());
}

#[test]
fn appended_record_reads_back_as_last_element() {
    let dir = tempfile::tempdir().unwrap();
    let store = LogStore::new(dir.path().join("delivery_logs.json"));

    store.append(record("Ada", "Ikeja")).unwrap();
    let tunde = record("Tunde", "Lekki Phase 1");
    store.append(tunde.clone()).unwrap();

    let logs = store.load().unwrap();
    assert_eq!(logs.len(), 2);
    assert_eq!(logs.last().unwrap(), &tunde);
}

#[test]
fn append_preserves_insertion_order() {
    let dir = tempfile::tempdir().unwrap();
    let store = LogStore::new(dir.path().join("delivery_logs.json"));

    for customer in ["first", "second", "third"] {
        store.append(record(customer, "Yaba")).unwrap();
    }

    let customers: Vec<String> = store
        .load()
        .unwrap()
        .into_iter()
        .map(|log| log.customer)
        .collect();
    assert_eq!(customers, vec!["first", "second", "third"]);
}

#[test]
fn corrupt_file_is_a_loud_error_not_an_empty_log() {
    let dir = tempfile::tempdir().unwrap();
    let path = dir.path().join("delivery_logs.json");
    std::fs::write(&path, "{ not json at all").unwrap();

    let store = LogStore::new(&path);
    match store.load() {
        Err(StoreError::Corrupt { .. }) => {}
        other => panic!("expected Corrupt error, got {:?}", other.map(|v| v.len())),
    }
}

#[test]
fn filter_matches_customer_and_date_case_insensitively() {
    let dir = tempfile::tempdir().unwrap();
    let store = LogStore::new(dir.path().join("delivery_logs.json"));

    store.append(record("Ada Obi", "Ikeja")).unwrap();
    let mut old = record("Tunde", "Lekki");
    old.date = "2025-01-02 09:00".to_string();
    store.append(old).unwrap();

    assert_eq!(store.filter("ada").unwrap().len(), 1);
    assert_eq!(store.filter("2025-01").unwrap().len(), 1);
    assert_eq!(store.filter("nobody").unwrap().len(), 0);
}
