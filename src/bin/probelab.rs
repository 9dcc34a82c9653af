//! Interactive probing hash table shell.
//!
//! Minimal line-oriented wrapper around a [`Session`]. Intended for teaching
//! demos and local experimentation, not production usage. Each mutating
//! command re-renders the slot array and the probe path it walked; errors
//! surface as one-line messages and leave the table unchanged.
//!
//! # Notes
//! - Input validation follows the strict policy (magnitude <= 126, no
//!   leading zeros) unless `--relaxed` is given.
//! - Transient display concerns (highlight expiry, message timeouts) belong
//!   to richer shells; this one just prints.
//!
//! # Exit codes
//! - `0`: clean exit (`quit` or end of input).
//! - `2`: invalid usage.

use std::env;
use std::io::{self, BufRead, Write};

use probelab::{InputPolicy, ProbeStrategy, Session, Slot, TableSnapshot};

/// Print usage and command summary to stderr.
fn print_usage(exe: &std::ffi::OsStr) {
    eprintln!(
        "usage: {} [--relaxed]

OPTIONS:
    --relaxed    Accept any i64 key/size instead of the strict teaching bounds

COMMANDS (read from stdin):
    init <n>                    Create a table with n empty slots
    strategy linear|quadratic   Choose collision resolution (clears the table)
    insert <k>                  Insert key k
    search <k>                  Find key k
    remove <k>                  Delete key k (leaves a tombstone)
    show                        Render the current table
    reset                       Discard the table
    help                        This summary
    quit                        Exit",
        exe.to_string_lossy()
    );
}

fn render(snapshot: &TableSnapshot) -> String {
    if !snapshot.ready {
        return "table: (uninitialized)".to_string();
    }
    let cells: Vec<String> = snapshot
        .slots
        .iter()
        .map(|slot| match slot {
            Slot::Empty => ".".to_string(),
            Slot::Occupied(key) => key.to_string(),
            Slot::Tombstone => "x".to_string(),
        })
        .collect();
    let strategy = match snapshot.strategy {
        Some(s) => s.to_string(),
        None => "unset".to_string(),
    };
    let mut out = format!(
        "table (size {}, strategy {}): [ {} ]",
        snapshot.size,
        strategy,
        cells.join(" | ")
    );
    if !snapshot.probe_path.is_empty() {
        let path: Vec<String> = snapshot.probe_path.iter().map(|i| i.to_string()).collect();
        out.push_str(&format!("\nprobe path: {}", path.join(" -> ")));
    }
    out
}

/// Handles one command line. Returns `false` when the shell should exit.
fn dispatch(session: &mut Session, line: &str) -> bool {
    let mut parts = line.split_whitespace();
    let Some(command) = parts.next() else {
        return true;
    };
    let arg = parts.next().unwrap_or("");

    match command {
        "init" => match session.initialize(arg) {
            Ok(size) => {
                println!("initialized table with {size} slots");
                println!("{}", render(&session.snapshot()));
            }
            Err(err) => println!("error: {err}"),
        },
        "strategy" => match arg.parse::<ProbeStrategy>() {
            Ok(strategy) => {
                session.set_strategy(strategy);
                println!("strategy set to {strategy} (table cleared)");
            }
            Err(err) => println!("error: {err}"),
        },
        "insert" => match session.insert(arg) {
            Ok(index) => {
                println!("inserted {} at index {index}", arg.trim());
                println!("{}", render(&session.snapshot()));
            }
            Err(err) => {
                println!("error: {err}");
                println!("{}", render(&session.snapshot()));
            }
        },
        "search" => match session.search(arg) {
            Ok(index) => {
                println!("found {} at index {index}", arg.trim());
                println!("{}", render(&session.snapshot()));
            }
            Err(err) => {
                println!("error: {err}");
                println!("{}", render(&session.snapshot()));
            }
        },
        "remove" => match session.remove(arg) {
            Ok(index) => {
                println!("removed {} from index {index} (tombstone)", arg.trim());
                println!("{}", render(&session.snapshot()));
            }
            Err(err) => {
                println!("error: {err}");
                println!("{}", render(&session.snapshot()));
            }
        },
        "show" => println!("{}", render(&session.snapshot())),
        "reset" => {
            session.reset();
            println!("table discarded");
        }
        "help" => print_usage(&env::args_os().next().unwrap_or_default()),
        "quit" | "exit" => return false,
        other => println!("error: unknown command '{other}' (try 'help')"),
    }
    true
}

fn main() {
    let exe = env::args_os().next().unwrap_or_default();
    let mut policy = InputPolicy::DEFAULT;
    for arg in env::args_os().skip(1) {
        match arg.to_str() {
            Some("--relaxed") => policy = InputPolicy::RELAXED,
            Some("--help") | Some("-h") => {
                print_usage(&exe);
                return;
            }
            _ => {
                print_usage(&exe);
                std::process::exit(2);
            }
        }
    }

    let mut session = Session::new(policy);
    println!("probelab: open-addressing playground (type 'help' for commands)");

    let stdin = io::stdin();
    for line in stdin.lock().lines() {
        let line = match line {
            Ok(line) => line,
            Err(_) => break,
        };
        if !dispatch(&mut session, &line) {
            break;
        }
        io::stdout().flush().ok();
    }
}
