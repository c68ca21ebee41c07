use crate::db::log::{LogEntry, load_entries};
use crate::db::pool::DbPool;
use crate::errors::AppResult;
use ansi_term::Colour;
use regex::Regex;
use std::io::{self, IsTerminal};
use std::sync::LazyLock;

static ANSI: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"\x1B\[[0-9;]*[mK]").expect("valid ansi regex"));

const MAX_OP_WIDTH: usize = 60;

fn strip_ansi(s: &str) -> String {
    ANSI.replace_all(s, "").into_owned()
}

/// ANSI colour for an operation name
fn color_for_operation(op: &str) -> Colour {
    match op {
        "login" => Colour::Green,
        "logout" => Colour::Red,
        "ticket" => Colour::Cyan,
        "rating" => Colour::Yellow,
        "export" => Colour::Blue,
        "init" => Colour::RGB(255, 153, 51),
        "migration_applied" => Colour::Purple,
        _ => Colour::White,
    }
}

/// `operation (target)`, cut to the column width.
fn op_target_label(entry: &LogEntry) -> String {
    let label = if entry.target.is_empty() {
        entry.operation.clone()
    } else {
        format!("{} ({})", entry.operation, entry.target)
    };

    if label.chars().count() > MAX_OP_WIDTH {
        let mut s: String = label.chars().take(MAX_OP_WIDTH - 3).collect();
        s.push_str("...");
        s
    } else {
        label
    }
}

pub struct LogLogic;

impl LogLogic {
    /// Render the internal log; only the operation word is coloured.
    pub fn render(entries: &[LogEntry], colour: bool) -> String {
        if entries.is_empty() {
            return "Internal log is empty.\n".to_string();
        }

        let labels: Vec<String> = entries.iter().map(op_target_label).collect();
        let op_w = labels.iter().map(|l| l.chars().count()).max().unwrap_or(10);
        let id_w = entries
            .iter()
            .map(|e| e.id.to_string().len())
            .max()
            .unwrap_or(1);

        let mut out = String::new();
        for (entry, label) in entries.iter().zip(labels) {
            let date = chrono::DateTime::parse_from_rfc3339(&entry.date)
                .map(|dt| dt.format("%FT%T%:z").to_string())
                .unwrap_or_else(|_| entry.date.clone());

            let painted = if colour {
                let color = color_for_operation(&entry.operation);
                match label.split_once(' ') {
                    Some((op, rest)) => format!("{} {}", color.paint(op), rest),
                    None => color.paint(label.as_str()).to_string(),
                }
            } else {
                label
            };

            let padding = " ".repeat(op_w.saturating_sub(strip_ansi(&painted).chars().count()));

            out.push_str(&format!(
                "{:>id_w$}: {:<25} | {}{} => {}\n",
                entry.id, date, painted, padding, entry.message,
            ));
        }
        out
    }

    pub fn print_log(pool: &mut DbPool) -> AppResult<()> {
        let entries = load_entries(&pool.conn)?;
        println!("📜 Internal log:\n");
        print!("{}", Self::render(&entries, io::stdout().is_terminal()));
        Ok(())
    }
}
