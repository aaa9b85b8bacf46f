use std::io::Write;

use crate::command::{Command, CommandError, Flow};
use crate::session::Session;

/// `set NAME=VALUE ...` writes into the session environment; with no
/// arguments it lists the environment. The prompt template reads the same
/// mapping, so `set PROMPT='$USER> '` takes effect on the next prompt.
pub struct SetCommand;

fn parse_assignment(raw: &str) -> Result<(&str, &str), CommandError> {
    match raw.split_once('=') {
        Some((name, value)) if !name.is_empty() => Ok((name, value)),
        _ => Err(
            CommandError::usage(format!("expected NAME=VALUE, got '{}'", raw))
                .with_code("bad-assignment"),
        ),
    }
}

impl Command for SetCommand {
    fn summary(&self) -> &str {
        "assign session variables, or list them"
    }

    fn invoke(&self, session: &mut Session, args: &[String]) -> Result<Flow, CommandError> {
        if args.is_empty() {
            let listing: String = session
                .env_all()
                .iter()
                .map(|(key, value)| format!("{}={}\n", key, value))
                .collect();
            write!(session.stdout(), "{}", listing)?;
            return Ok(Flow::Continue);
        }

        for raw in args {
            let (name, value) = parse_assignment(raw)?;
            session.set_env(name, value);
        }
        Ok(Flow::Continue)
    }

    fn complete(&self, session: &Session, args: &[String]) -> Option<Vec<String>> {
        let prefix = args.last().map(String::as_str).unwrap_or("");
        Some(
            session
                .env_all()
                .keys()
                .filter(|key| key.starts_with(prefix))
                .map(|key| format!("{}=", key))
                .collect(),
        )
    }
}
