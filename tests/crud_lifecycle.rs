//! Full lifecycle tests for the catalog API over the in-memory record store.
//!
//! These drive the action layer the way the HTTP routes do: one action per
//! request, store injected at construction.

use std::collections::HashSet;
use std::sync::Arc;
use std::thread;

use phonedb::api::{ApiError, CatalogApi, DeleteQuery, UpdateQuery};
use phonedb::entity::{Carrier, CarrierDraft, EntityKind, Phone, PhoneDraft};
use phonedb::store::MemoryStore;

fn catalog() -> CatalogApi {
    CatalogApi::new(Arc::new(MemoryStore::new()))
}

fn carrier_draft(name: &str) -> Option<CarrierDraft> {
    Some(CarrierDraft {
        name: Some(name.to_string()),
    })
}

fn update_query(id: &str, name: &str) -> UpdateQuery {
    UpdateQuery {
        id: Some(id.to_string()),
        name: Some(name.to_string()),
    }
}

fn delete_query(id: &str) -> DeleteQuery {
    DeleteQuery {
        id: Some(id.to_string()),
    }
}

#[test]
fn carrier_round_trip() {
    let api = catalog();

    // Create: the store assigns the id, the submitted name sticks
    let created = api.create(carrier_draft("X")).unwrap();
    let carrier: Carrier = serde_json::from_value(created).unwrap();
    assert!(!carrier.id.is_empty());
    assert_eq!(carrier.name, "X");

    // Read back
    let fetched = api.get_by_id(EntityKind::Carrier, &carrier.id).unwrap();
    assert_eq!(fetched["name"], "X");

    // Update, then read the new name
    let outcome = api
        .update(EntityKind::Carrier, update_query(&carrier.id, "Y"))
        .unwrap();
    assert_eq!(outcome.matched, 1);
    assert_eq!(outcome.modified, 1);

    let fetched = api.get_by_id(EntityKind::Carrier, &carrier.id).unwrap();
    assert_eq!(fetched["name"], "Y");

    // Delete, then the record is gone
    let ack = api
        .delete(EntityKind::Carrier, delete_query(&carrier.id))
        .unwrap();
    assert_eq!(ack.msg, "ok");

    let err = api.get_by_id(EntityKind::Carrier, &carrier.id).unwrap_err();
    assert!(matches!(err, ApiError::NotFound("carrier")));
}

#[test]
fn phone_create_persists_reference_fields() {
    let api = catalog();

    let draft = PhoneDraft {
        name: Some("One X".to_string()),
        manufacturer: Some("m-unchecked".to_string()),
        carriers: vec!["c-1".to_string(), "c-2".to_string()],
        status: Some("available".to_string()),
    };

    // Reference ids are persisted as given; nothing checks they exist
    let created = api.create(Some(draft)).unwrap();
    let phone: Phone = serde_json::from_value(created).unwrap();

    assert_eq!(phone.name, "One X");
    assert_eq!(phone.manufacturer.as_deref(), Some("m-unchecked"));
    assert_eq!(phone.carriers, ["c-1", "c-2"]);
    assert_eq!(phone.status.as_deref(), Some("available"));
}

#[test]
fn get_by_id_of_unknown_id_is_never_success() {
    let api = catalog();
    api.create(carrier_draft("X")).unwrap();

    let err = api.get_by_id(EntityKind::Carrier, "no-such-id").unwrap_err();
    assert_eq!(err.status_code().as_u16(), 404);
}

#[test]
fn delete_of_nonexistent_id_reports_ok() {
    let api = catalog();

    let ack = api
        .delete(EntityKind::Manufacturer, delete_query("no-such-id"))
        .unwrap();
    assert_eq!(ack.msg, "ok");
}

#[test]
fn update_checks_id_before_name() {
    let api = catalog();

    let err = api
        .update(EntityKind::Phone, UpdateQuery::default())
        .unwrap_err();
    assert_eq!(err.to_string(), "invalid phone id");

    let err = api
        .update(
            EntityKind::Phone,
            UpdateQuery {
                id: Some("p-1".to_string()),
                name: None,
            },
        )
        .unwrap_err();
    assert_eq!(err.to_string(), "invalid phone name");
}

#[test]
fn create_without_name_touches_no_entity() {
    let api = catalog();

    for body in [None, Some(CarrierDraft::default())] {
        let err = api.create(body).unwrap_err();
        assert_eq!(err.status_code().as_u16(), 400);
    }

    assert!(api.list(EntityKind::Carrier).unwrap().is_empty());
}

#[test]
fn list_returns_records_in_creation_order() {
    let api = catalog();

    for name in ["alpha", "beta", "gamma"] {
        api.create(carrier_draft(name)).unwrap();
    }

    let records = api.list(EntityKind::Carrier).unwrap();
    let names: Vec<&str> = records
        .iter()
        .map(|r| r["name"].as_str().unwrap())
        .collect();
    assert_eq!(names, ["alpha", "beta", "gamma"]);
}

#[test]
fn concurrent_creates_assign_distinct_ids() {
    let api = Arc::new(catalog());

    const THREADS: usize = 8;
    const PER_THREAD: usize = 16;

    let mut ids: HashSet<String> = HashSet::new();

    thread::scope(|scope| {
        let handles: Vec<_> = (0..THREADS)
            .map(|t| {
                let api = Arc::clone(&api);
                scope.spawn(move || {
                    (0..PER_THREAD)
                        .map(|i| {
                            let created =
                                api.create(carrier_draft(&format!("carrier-{t}-{i}"))).unwrap();
                            created["id"].as_str().unwrap().to_string()
                        })
                        .collect::<Vec<_>>()
                })
            })
            .collect();

        for handle in handles {
            ids.extend(handle.join().unwrap());
        }
    });

    assert_eq!(ids.len(), THREADS * PER_THREAD);
    assert_eq!(
        api.list(EntityKind::Carrier).unwrap().len(),
        THREADS * PER_THREAD
    );
}
