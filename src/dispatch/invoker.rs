//! Command invocation with fault isolation.
//!
//! The invoker never surfaces a command's failure to its own caller except
//! through the resolver's fatal unhandled path: an `Err` return and a panic
//! captured at the isolation boundary both funnel into the handler table.

use std::any::Any;
use std::io::Write;
use std::panic::{self, AssertUnwindSafe};

use crate::command::{Command, CommandError, Flow};
use crate::dispatch::resolver;
use crate::error::ShellError;
use crate::session::Session;

/// Comment convention: first non-space character is `#`. Lets replayed
/// command scripts carry notes through the loop.
pub fn is_comment(name: &str) -> bool {
    name.trim_start().starts_with('#')
}

/// Resolve `name`, run the command inside the isolation boundary, and route
/// any failure through the handler table.
///
/// An unknown name is not an error value: it writes one diagnostic line to
/// the session's error stream and delegates to the always-registered `help`
/// builtin, directed at the error stream.
pub fn invoke(session: &mut Session, name: &str, args: &[String]) -> Result<Flow, ShellError> {
    if is_comment(name) {
        return Ok(Flow::Continue);
    }

    let command = match session.command(name) {
        Some(command) => command,
        None => {
            let diagnostic = session
                .highlighter()
                .error(&format!("invalid command: {}", name));
            writeln!(session.stderr(), "{}", diagnostic)?;

            let help = session
                .command("help")
                .ok_or(ShellError::HelpNotRegistered)?;
            return run_isolated(session, &*help, &["--stderr".to_string()]);
        }
    };

    run_isolated(session, &*command, args)
}

/// The fault isolation boundary: brackets exactly the command's invocation.
/// A panic raised inside becomes a `Fault`-kind error for the resolver; it
/// never unwinds into the loop.
fn run_isolated(
    session: &mut Session,
    command: &dyn Command,
    args: &[String],
) -> Result<Flow, ShellError> {
    let outcome = panic::catch_unwind(AssertUnwindSafe(|| command.invoke(session, args)));
    match outcome {
        Ok(Ok(flow)) => Ok(flow),
        Ok(Err(error)) => resolver::handle(session, error),
        Err(payload) => resolver::handle(session, CommandError::fault(panic_message(&*payload))),
    }
}

fn panic_message(payload: &(dyn Any + Send)) -> String {
    if let Some(msg) = payload.downcast_ref::<&str>() {
        (*msg).to_string()
    } else if let Some(msg) = payload.downcast_ref::<String>() {
        msg.clone()
    } else {
        "opaque panic payload".to_string()
    }
}
