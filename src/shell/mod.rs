//! Shell Module
//!
//! Line-oriented command shell over a [`SharedCache`](crate::cache::SharedCache).
//!
//! # Commands
//! - `SET <key> <json>` - Store a value, overwriting
//! - `ADD <key> <json>` - Store a value only if the key is new
//! - `GET <key>` - Retrieve a value
//! - `DEL <key>` - Remove a key
//! - `FLUSH` - Remove every key
//! - `ALL` - List every value
//! - `LEN` - Number of entries
//! - `HELP` - Show this list

pub mod commands;
pub mod config;
pub mod handlers;

pub use commands::{parse, Command, ParseError};
pub use config::ShellConfig;
pub use handlers::{execute, run, Reply};
