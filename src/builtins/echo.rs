use std::io::Write;

use crate::command::{Command, CommandError, Flow};
use crate::session::Session;

pub struct EchoCommand;

impl Command for EchoCommand {
    fn summary(&self) -> &str {
        "print arguments to standard output"
    }

    fn invoke(&self, session: &mut Session, args: &[String]) -> Result<Flow, CommandError> {
        writeln!(session.stdout(), "{}", args.join(" "))?;
        Ok(Flow::Continue)
    }
}
