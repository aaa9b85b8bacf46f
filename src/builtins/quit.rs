use crate::command::{Command, CommandError, Flow};
use crate::session::Session;

pub struct QuitCommand;

impl Command for QuitCommand {
    fn summary(&self) -> &str {
        "leave the shell, optionally with an exit code"
    }

    fn invoke(&self, _session: &mut Session, args: &[String]) -> Result<Flow, CommandError> {
        match args.first() {
            None => Ok(Flow::Quit),
            Some(raw) => match raw.parse::<i32>() {
                Ok(code) => Ok(Flow::QuitWith(code)),
                Err(_) => Err(CommandError::usage(format!("not an exit code: {}", raw))
                    .with_code("bad-exit-code")),
            },
        }
    }
}
