use std::fs;

use crate::command::{Command, CommandError, Flow};
use crate::dispatch::invoker;
use crate::session::Session;
use crate::tokens;

/// Replay a script file line-by-line through the dispatch pipeline.
/// Comments and blank lines pass through as no-ops; the first failing line
/// aborts the script and surfaces as this invocation's own error, so the
/// caller's handler table decides the recovery.
pub struct SourceCommand;

impl SourceCommand {
    fn run_line(session: &mut Session, line: &str) -> Result<Flow, CommandError> {
        let words = tokens::split(line)
            .map_err(|e| CommandError::usage(e.to_string()).with_code("unterminated-quote"))?;

        let (name, args) = match words.split_first() {
            Some(split) => split,
            None => return Ok(Flow::Continue),
        };
        if invoker::is_comment(name) {
            return Ok(Flow::Continue);
        }

        // Script lines get the same `--help` shortcut as interactive ones.
        if words.iter().any(|word| word == "--help") {
            return Self::run_command(session, "help", &[name.clone()]);
        }
        Self::run_command(session, name, args)
    }

    fn run_command(
        session: &mut Session,
        name: &str,
        args: &[String],
    ) -> Result<Flow, CommandError> {
        match session.command(name) {
            Some(command) => command.invoke(session, args),
            None => Err(CommandError::usage(format!("no such command: {}", name))
                .with_code("unknown-command")),
        }
    }
}

impl Command for SourceCommand {
    fn summary(&self) -> &str {
        "run commands from a script file"
    }

    fn invoke(&self, session: &mut Session, args: &[String]) -> Result<Flow, CommandError> {
        let path = match args.first() {
            Some(path) => path,
            None => return Err(CommandError::usage("usage: source <file>")),
        };

        let script = fs::read_to_string(path)?;
        for line in script.lines() {
            let flow = Self::run_line(session, line)?;
            if flow.is_quit() {
                return Ok(flow);
            }
        }
        Ok(Flow::Continue)
    }
}
