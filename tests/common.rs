#![allow(dead_code)]
use assert_cmd::{Command, cargo_bin_cmd};
use rsurvey::db::pool::DbPool;
use rsurvey::models::ticket::parse_timestamp;
use rsurvey::models::{Attendant, QuestionAnswer, Rating, Ticket, User};
use rsurvey::session::{Session, SessionStore};
use std::env;
use std::fs;
use std::path::{Path, PathBuf};

/// Nothing listens on the discard port: requests fail fast with "connection refused".
pub const UNREACHABLE_API: &str = "http://127.0.0.1:9";

/// Binary under test, isolated from the user's home and colours.
pub fn rsv(name: &str) -> Command {
    let home = temp_home(name);
    let mut cmd = cargo_bin_cmd!("rsurvey");
    cmd.env("HOME", &home)
        .env("APPDATA", &home)
        .env("NO_COLOR", "1")
        .env_remove("RSURVEY_API_URL")
        .env_remove("RSURVEY_LOG");
    cmd
}

fn temp_home(name: &str) -> PathBuf {
    let mut path = env::temp_dir();
    path.push(format!("{name}_rsurvey_home"));
    fs::create_dir_all(&path).ok();
    path
}

/// Create a unique test DB path inside the system temp dir and remove any existing file
pub fn setup_test_db(name: &str) -> String {
    let mut path: PathBuf = env::temp_dir();
    path.push(format!("{}_rsurvey.sqlite", name));
    let db_path = path.to_string_lossy().to_string();
    fs::remove_file(&db_path).ok();
    db_path
}

/// Create a temporary output file path inside tempdir and ensure it's removed
pub fn temp_out(name: &str, ext: &str) -> String {
    let mut path: PathBuf = env::temp_dir();
    path.push(format!("{}_out.{}", name, ext));
    let p = path.to_string_lossy().to_string();
    fs::remove_file(&p).ok();
    p
}

/// Store a session directly through the library API.
pub fn seed_session(db_path: &str, token: &str, user_id: Option<&str>, admin: bool) {
    let mut pool = DbPool::open_initialized(Path::new(db_path)).expect("open db");
    SessionStore::new(&mut pool)
        .save(&Session::new(token, user_id.map(str::to_string), admin))
        .expect("save session");
}

pub fn admin() -> Session {
    Session::new("tok-admin", Some("1".into()), true)
}

pub fn attendant() -> Session {
    Session::new("tok-user", Some("7".into()), false)
}

pub fn ticket(id: i64, created_at: &str, id_attendant: i64) -> Ticket {
    Ticket {
        id,
        created_at: parse_timestamp(created_at).expect("valid timestamp"),
        id_attendant,
        kind: format!("type-{id}"),
        register: format!("REG-{id}"),
        rating: None,
        attendant: None,
    }
}

pub fn with_attendant(mut t: Ticket, name: &str, last_name: &str) -> Ticket {
    t.attendant = Some(Attendant {
        id: Some(t.id_attendant),
        name: name.to_string(),
        last_name: last_name.to_string(),
    });
    t
}

pub fn with_rating(mut t: Ticket, answers: &[(&str, &str)]) -> Ticket {
    t.rating = Some(Rating {
        id: t.id * 10,
        questions: answers
            .iter()
            .map(|(q, a)| QuestionAnswer {
                question: q.to_string(),
                answer: a.to_string(),
            })
            .collect(),
    });
    t
}

pub fn user(id: i64, name: &str, last_name: &str) -> User {
    User {
        id,
        name: name.to_string(),
        last_name: last_name.to_string(),
    }
}

/// Twelve tickets over January 2024, attendants 1/2/3 in rotation.
pub fn sample_tickets() -> Vec<Ticket> {
    (1..=12)
        .map(|i| {
            let day = i * 2;
            ticket(
                i as i64,
                &format!("2024-01-{day:02}T{:02}:30:00.000Z", (i * 3) % 24),
                ((i - 1) % 3 + 1) as i64,
            )
        })
        .collect()
}
