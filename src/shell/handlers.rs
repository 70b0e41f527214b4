//! Shell Handlers
//!
//! Executes parsed commands against the shared cache and drives the
//! read-eval-print loop.

use std::fmt;

use serde_json::Value;
use tokio::io::{AsyncBufRead, AsyncBufReadExt, AsyncWrite, AsyncWriteExt};
use tracing::{debug, warn};

use crate::cache::SharedCache;
use crate::shell::commands::{parse, Command};

const HELP: &str = "commands: SET <key> <json> | ADD <key> <json> | GET <key> | DEL <key> | FLUSH | ALL | LEN | HELP";

/// Single-line reply to a command.
#[derive(Debug, Clone, PartialEq)]
pub enum Reply {
    Ok,
    Error(String),
    Nil,
    Value(Value),
    Values(Vec<Value>),
    Count(usize),
    Help,
}

impl fmt::Display for Reply {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Reply::Ok => f.write_str("OK"),
            Reply::Error(msg) => write!(f, "ERR {msg}"),
            Reply::Nil => f.write_str("(nil)"),
            Reply::Value(value) => write!(f, "{value}"),
            Reply::Values(values) => write!(f, "{}", Value::Array(values.clone())),
            Reply::Count(n) => write!(f, "{n}"),
            Reply::Help => f.write_str(HELP),
        }
    }
}

/// Runs one command.
pub async fn execute(cache: &SharedCache, command: Command) -> Reply {
    match command {
        Command::Set { key, value } => match cache.try_set(&key, value).await {
            Ok(()) => Reply::Ok,
            Err(err) => Reply::Error(err.to_string()),
        },
        Command::Add { key, value } => match cache.try_add(&key, value).await {
            Ok(()) => Reply::Ok,
            Err(err) => Reply::Error(err.to_string()),
        },
        Command::Get { key } => cache.get(&key).await.map_or(Reply::Nil, Reply::Value),
        Command::Del { key } => match cache.try_remove(&key).await {
            Ok(_) => Reply::Ok,
            Err(err) => Reply::Error(err.to_string()),
        },
        Command::Flush => {
            cache.flush().await;
            Reply::Ok
        }
        Command::All => cache.get_all().await.map_or(Reply::Nil, Reply::Values),
        Command::Len => Reply::Count(cache.len().await),
        Command::Help => Reply::Help,
    }
}

/// Reads commands line by line from `reader` and writes one reply per
/// non-blank line to `writer`, until end of input.
pub async fn run<R, W>(cache: SharedCache, reader: R, mut writer: W) -> std::io::Result<()>
where
    R: AsyncBufRead + Unpin,
    W: AsyncWrite + Unpin,
{
    let mut lines = reader.lines();

    while let Some(line) = lines.next_line().await? {
        if line.trim().is_empty() {
            continue;
        }

        let reply = match parse(&line) {
            Ok(command) => {
                debug!(?command, "executing command");
                execute(&cache, command).await
            }
            Err(err) => {
                warn!(%err, "bad command line");
                Reply::Error(err.to_string())
            }
        };

        writer.write_all(format!("{reply}\n").as_bytes()).await?;
        writer.flush().await?;
    }

    Ok(())
}
