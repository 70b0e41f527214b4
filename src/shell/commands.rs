//! Shell command parsing
//!
//! Turns one input line into a [`Command`].

use serde_json::Value;
use thiserror::Error;

/// A parsed shell command.
#[derive(Debug, Clone, PartialEq)]
pub enum Command {
    Set { key: String, value: Value },
    Add { key: String, value: Value },
    Get { key: String },
    Del { key: String },
    Flush,
    All,
    Len,
    Help,
}

/// Why a line could not be parsed.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum ParseError {
    #[error("empty command")]
    Empty,

    #[error("unknown command '{0}'")]
    UnknownCommand(String),

    #[error("{command} requires a {argument}")]
    MissingArgument {
        command: &'static str,
        argument: &'static str,
    },

    #[error("{0} takes no arguments")]
    UnexpectedArgument(&'static str),
}

/// Parses a line such as `SET user:1 {"name":"ada"}`.
///
/// The verb is case-insensitive. Everything after the key is the value; it is
/// read as JSON, and text that is not valid JSON is kept as a JSON string.
pub fn parse(line: &str) -> Result<Command, ParseError> {
    let line = line.trim();
    let (verb, rest) = split_token(line);
    if verb.is_empty() {
        return Err(ParseError::Empty);
    }

    match verb.to_ascii_uppercase().as_str() {
        "SET" => {
            let (key, value) = key_and_value("SET", rest)?;
            Ok(Command::Set { key, value })
        }
        "ADD" => {
            let (key, value) = key_and_value("ADD", rest)?;
            Ok(Command::Add { key, value })
        }
        "GET" => Ok(Command::Get {
            key: single_key("GET", rest)?,
        }),
        "DEL" => Ok(Command::Del {
            key: single_key("DEL", rest)?,
        }),
        "FLUSH" => no_args("FLUSH", rest, Command::Flush),
        "ALL" => no_args("ALL", rest, Command::All),
        "LEN" => no_args("LEN", rest, Command::Len),
        "HELP" => no_args("HELP", rest, Command::Help),
        _ => Err(ParseError::UnknownCommand(verb.to_string())),
    }
}

fn split_token(input: &str) -> (&str, &str) {
    match input.split_once(char::is_whitespace) {
        Some((head, tail)) => (head, tail.trim_start()),
        None => (input, ""),
    }
}

fn single_key(command: &'static str, rest: &str) -> Result<String, ParseError> {
    let (key, tail) = split_token(rest);
    if key.is_empty() {
        return Err(ParseError::MissingArgument {
            command,
            argument: "key",
        });
    }
    if !tail.is_empty() {
        return Err(ParseError::UnexpectedArgument(command));
    }
    Ok(key.to_string())
}

fn key_and_value(command: &'static str, rest: &str) -> Result<(String, Value), ParseError> {
    let (key, raw) = split_token(rest);
    if key.is_empty() {
        return Err(ParseError::MissingArgument {
            command,
            argument: "key",
        });
    }
    let raw = raw.trim_end();
    if raw.is_empty() {
        return Err(ParseError::MissingArgument {
            command,
            argument: "value",
        });
    }

    let value = serde_json::from_str(raw).unwrap_or_else(|_| Value::String(raw.to_string()));
    Ok((key.to_string(), value))
}

fn no_args(command: &'static str, rest: &str, parsed: Command) -> Result<Command, ParseError> {
    if rest.is_empty() {
        Ok(parsed)
    } else {
        Err(ParseError::UnexpectedArgument(command))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn test_parse_set_json() {
        let cmd = parse(r#"SET user {"name": "ada", "age": 36}"#).unwrap();
        assert_eq!(
            cmd,
            Command::Set {
                key: "user".to_string(),
                value: json!({"name": "ada", "age": 36}),
            }
        );
    }

    #[test]
    fn test_parse_set_plain_text_becomes_string() {
        let cmd = parse("set greeting hello world").unwrap();
        assert_eq!(
            cmd,
            Command::Set {
                key: "greeting".to_string(),
                value: json!("hello world"),
            }
        );
    }

    #[test]
    fn test_parse_add_null() {
        let cmd = parse("ADD k null").unwrap();
        assert_eq!(
            cmd,
            Command::Add {
                key: "k".to_string(),
                value: Value::Null,
            }
        );
    }

    #[test]
    fn test_parse_key_commands() {
        assert_eq!(
            parse("get a").unwrap(),
            Command::Get {
                key: "a".to_string()
            }
        );
        assert_eq!(
            parse("  DEL   a  ").unwrap(),
            Command::Del {
                key: "a".to_string()
            }
        );
    }

    #[test]
    fn test_parse_bare_commands() {
        assert_eq!(parse("flush").unwrap(), Command::Flush);
        assert_eq!(parse("ALL").unwrap(), Command::All);
        assert_eq!(parse("Len").unwrap(), Command::Len);
        assert_eq!(parse("help").unwrap(), Command::Help);
    }

    #[test]
    fn test_parse_errors() {
        assert_eq!(parse("   "), Err(ParseError::Empty));
        assert_eq!(
            parse("PING"),
            Err(ParseError::UnknownCommand("PING".to_string()))
        );
        assert_eq!(
            parse("SET"),
            Err(ParseError::MissingArgument {
                command: "SET",
                argument: "key"
            })
        );
        assert_eq!(
            parse("ADD k"),
            Err(ParseError::MissingArgument {
                command: "ADD",
                argument: "value"
            })
        );
        assert_eq!(parse("GET a b"), Err(ParseError::UnexpectedArgument("GET")));
        assert_eq!(parse("FLUSH now"), Err(ParseError::UnexpectedArgument("FLUSH")));
    }
}
