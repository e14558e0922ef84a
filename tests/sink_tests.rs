mod common;
use common::key;
use drilllog::config::Config;
use drilllog::core::autosave::AutoSave;
use drilllog::core::persistence::SectionSink;
use drilllog::core::store::{IntervalLogStore, StoreOptions};
use chrono::DateTime;
use drilllog::db::log::load_log;
use drilllog::db::migrate::applied_versions;
use drilllog::db::pool::DbPool;
use drilllog::db::sink::SqliteSink;
use drilllog::models::field::{FieldUpdate, TextField};
use drilllog::models::section::Section;
use drilllog::models::section_key::SectionKey;
use std::time::{Duration, Instant};

#[test]
fn migrations_are_recorded_once() {
    let pool = DbPool::in_memory().expect("db");
    let first = applied_versions(&pool.conn).unwrap();
    assert!(!first.is_empty());

    drilllog::db::initialize::init_db(&pool.conn).unwrap();
    assert_eq!(applied_versions(&pool.conn).unwrap(), first);
}

#[test]
fn migration_rows_use_the_audit_date_format() {
    let pool = DbPool::in_memory().expect("db");
    let lines = load_log(&pool.conn).unwrap();

    let migrations: Vec<_> = lines
        .iter()
        .filter(|l| l.operation == "migration_applied")
        .collect();
    assert!(!migrations.is_empty());

    for line in migrations {
        assert!(
            DateTime::parse_from_rfc3339(&line.date).is_ok(),
            "not RFC 3339: {}",
            line.date
        );
    }
}

#[test]
fn committed_section_round_trips_in_order() {
    let pool = DbPool::in_memory().expect("db");
    let k = key();

    let mut store = IntervalLogStore::new(SqliteSink::new(&pool.conn), StoreOptions::default());
    let a = store.add_entry(&k);
    store.add_entry(&k);
    store
        .update_field(&k, &a, FieldUpdate::Text(TextField::Lithology, "Granite".into()))
        .unwrap();
    store.save(&k).unwrap();
    let saved = store.list_entries(&k);

    let mut reopened = IntervalLogStore::new(SqliteSink::new(&pool.conn), StoreOptions::default());
    assert_eq!(reopened.activate(&k).unwrap(), 2);
    assert_eq!(reopened.list_entries(&k), saved);
}

#[test]
fn commit_replaces_previous_collection() {
    let pool = DbPool::in_memory().expect("db");
    let k = key();

    let mut store = IntervalLogStore::new(SqliteSink::new(&pool.conn), StoreOptions::default());
    let a = store.add_entry(&k);
    store.add_entry(&k);
    store.save(&k).unwrap();

    store.delete_entry(&k, &a);
    store.save(&k).unwrap();

    let mut sink = SqliteSink::new(&pool.conn);
    assert_eq!(sink.load(&k).unwrap().len(), 1);
}

#[test]
fn sections_are_stored_separately() {
    let pool = DbPool::in_memory().expect("db");
    let litho = key();
    let photos = SectionKey::new("P1", "IDD4074", Section::Photos);

    let mut store = IntervalLogStore::new(SqliteSink::new(&pool.conn), StoreOptions::default());
    store.add_entry(&litho);
    store.save(&litho).unwrap();

    let mut sink = SqliteSink::new(&pool.conn);
    assert_eq!(sink.load(&litho).unwrap().len(), 1);
    assert!(sink.load(&photos).unwrap().is_empty());
}

#[test]
fn unsaved_edits_are_lost_on_reactivate() {
    let pool = DbPool::in_memory().expect("db");
    let k = key();

    let mut store = IntervalLogStore::new(SqliteSink::new(&pool.conn), StoreOptions::default());
    store.add_entry(&k);
    store.save(&k).unwrap();
    store.add_entry(&k);

    assert_eq!(store.activate(&k).unwrap(), 1);
}

#[test]
fn autosave_ticks_only_when_due() {
    let pool = DbPool::in_memory().expect("db");
    let k = key();
    let t0 = Instant::now();

    let mut store = IntervalLogStore::new(SqliteSink::new(&pool.conn), StoreOptions::default());
    let mut auto = AutoSave::new(Config::default().autosave_interval(), t0);
    assert_eq!(auto.interval(), Duration::from_secs(3));
    store.add_entry(&k);

    assert!(!auto.tick(t0 + Duration::from_secs(1), &mut store, &k).unwrap());
    assert!(SqliteSink::new(&pool.conn).load(&k).unwrap().is_empty());

    assert!(auto.tick(t0 + Duration::from_secs(3), &mut store, &k).unwrap());
    assert_eq!(SqliteSink::new(&pool.conn).load(&k).unwrap().len(), 1);

    // re-armed from the last run
    assert!(!auto.tick(t0 + Duration::from_secs(5), &mut store, &k).unwrap());
    assert!(auto.is_due(t0 + Duration::from_secs(6)));
}

#[test]
fn autosave_on_inactive_section_is_skipped() {
    let pool = DbPool::in_memory().expect("db");
    let t0 = Instant::now();

    let mut store = IntervalLogStore::new(SqliteSink::new(&pool.conn), StoreOptions::default());
    let mut auto = AutoSave::new(Duration::from_secs(1), t0);

    assert!(auto.tick(t0 + Duration::from_secs(2), &mut store, &key()).unwrap());
    assert!(SqliteSink::new(&pool.conn).load(&key()).unwrap().is_empty());
}
