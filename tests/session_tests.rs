mod common;

use rsurvey::db::log::{load_entries, oplog};
use rsurvey::db::pool::DbPool;
use rsurvey::session::{Session, SessionStore};

#[test]
fn test_save_then_load_round_trips_session() {
    let mut pool = DbPool::in_memory().unwrap();
    let session = Session::new("abc", Some("42".into()), true);

    SessionStore::new(&mut pool).save(&session).unwrap();
    let loaded = SessionStore::new(&mut pool).load().unwrap();
    assert_eq!(loaded, Some(session));

    let store = SessionStore::new(&mut pool);
    assert_eq!(store.get("adm").unwrap().as_deref(), Some("true"));
    assert_eq!(store.get("userId").unwrap().as_deref(), Some("42"));
}

#[test]
fn test_save_overwrites_previous_session() {
    let mut pool = DbPool::in_memory().unwrap();
    let mut store = SessionStore::new(&mut pool);
    store.save(&Session::new("old", Some("1".into()), true)).unwrap();
    store.save(&Session::new("new", None, false)).unwrap();

    let loaded = store.load().unwrap().unwrap();
    assert_eq!(loaded.token, "new");
    assert_eq!(loaded.user_id, None);
    assert!(!loaded.is_admin);
}

#[test]
fn test_missing_admin_flag_means_not_admin() {
    let mut pool = DbPool::in_memory().unwrap();
    let mut store = SessionStore::new(&mut pool);
    store.set("token", "t0k").unwrap();
    store.set("adm", "yes").unwrap();
    assert!(!store.load().unwrap().unwrap().is_admin);

    store.clear().unwrap();
    store.set("token", "t0k").unwrap();
    let session = store.load().unwrap().unwrap();
    assert!(!session.is_admin);
    assert_eq!(session.attendant_id(), None);
}

#[test]
fn test_blank_token_is_no_session() {
    let mut pool = DbPool::in_memory().unwrap();
    let mut store = SessionStore::new(&mut pool);
    assert_eq!(store.load().unwrap(), None);

    store.set("token", "   ").unwrap();
    assert_eq!(store.load().unwrap(), None);
}

#[test]
fn test_clear_forgets_everything() {
    let mut pool = DbPool::in_memory().unwrap();
    let mut store = SessionStore::new(&mut pool);
    store.save(&Session::new("abc", Some("3".into()), false)).unwrap();
    store.clear().unwrap();
    assert_eq!(store.load().unwrap(), None);
    assert_eq!(store.get("userId").unwrap(), None);
}

#[test]
fn test_file_database_keeps_session_and_migration_log() {
    let db_path = common::setup_test_db("session_file");
    common::seed_session(&db_path, "persisted", Some("9"), false);

    let mut pool = DbPool::open_initialized(std::path::Path::new(&db_path)).unwrap();
    let session = SessionStore::new(&mut pool).load().unwrap().unwrap();
    assert_eq!(session.attendant_id(), Some(9));

    oplog(&pool.conn, "login", "ana@example.com", "Session stored").unwrap();
    let entries = load_entries(&pool.conn).unwrap();
    let migrations = entries
        .iter()
        .filter(|e| e.operation == "migration_applied")
        .count();
    assert_eq!(migrations, 1, "migration must be recorded exactly once");
    assert_eq!(entries.last().unwrap().operation, "login");
}
