use std::cell::RefCell;
use std::io::Write;
use std::rc::Rc;

use regex::Regex;

mod echo;
mod help;
mod history;
mod quit;
mod set;
mod source;

pub use echo::EchoCommand;
pub use help::HelpCommand;
pub use history::HistoryCommand;
pub use quit::QuitCommand;
pub use set::SetCommand;
pub use source::SourceCommand;

use crate::command::{ErrorKind, Flow};
use crate::dispatch::resolver::HandlerGroup;
use crate::error::ShellError;
use crate::input::History;
use crate::session::Session;

/// Register the standard command set. `help` is mandatory for the dispatch
/// pipeline; everything else is the usual interactive furniture.
pub fn install(session: &mut Session, history: Rc<RefCell<History>>) {
    let registry = session.commands_mut();
    registry.register("help", Rc::new(HelpCommand));
    registry.register("echo", Rc::new(EchoCommand));
    registry.register("set", Rc::new(SetCommand));
    registry.register("source", Rc::new(SourceCommand));
    registry.register("history", Rc::new(HistoryCommand::new(history)));

    let quit = Rc::new(QuitCommand);
    registry.register("quit", quit.clone());
    registry.register("exit", quit);
}

/// The default handler table: broad per-kind recovery policies with a few
/// special-cased codes, all of which keep the loop running. Kinds outside
/// this table propagate fatally.
pub fn default_handlers() -> Result<Vec<HandlerGroup>, ShellError> {
    let usage = HandlerGroup::new(ErrorKind::Usage).or_else(|error, session| {
        report(session, error.message());
        Flow::Continue
    });

    let io = HandlerGroup::new(ErrorKind::Io)
        .on_code("NotFound", |error, session| {
            report(session, &format!("no such file: {}", error.message()));
            Flow::Continue
        })
        .on_pattern(Regex::new("^Permission")?, |error, session| {
            report(session, &format!("permission denied: {}", error.message()));
            Flow::Continue
        })
        .or_else(|error, session| {
            report(session, &format!("io error: {}", error.message()));
            Flow::Continue
        });

    let fault = HandlerGroup::new(ErrorKind::Fault).or_else(|error, session| {
        report(session, &format!("command panicked: {}", error.message()));
        Flow::Continue
    });

    Ok(vec![usage, io, fault])
}

/// Build a session wired with the default commands and handler table, plus
/// the shared history the driver appends to.
pub fn bootstrap() -> Result<(Session, Rc<RefCell<History>>), ShellError> {
    let mut session = Session::new();
    session.set_handlers(default_handlers()?);
    let history = Rc::new(RefCell::new(History::new(1000)));
    install(&mut session, history.clone());
    Ok((session, history))
}

fn report(session: &mut Session, message: &str) {
    let diagnostic = session.highlighter().error(message);
    let _ = writeln!(session.stderr(), "{}", diagnostic);
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::command::CommandError;
    use crate::dispatch::resolver;
    use crate::session::CaptureWriter;

    fn handled_session() -> (Session, CaptureWriter) {
        let err = CaptureWriter::new();
        let mut session =
            Session::with_streams(Box::new(CaptureWriter::new()), Box::new(err.clone()));
        session.set_handlers(default_handlers().unwrap());
        (session, err)
    }

    #[test]
    fn test_bootstrap_registers_mandatory_help() {
        let (session, _history) = bootstrap().unwrap();
        assert!(session.commands().contains("help"));
        assert!(session.commands().contains("quit"));
        assert!(session.commands().contains("exit"));
    }

    #[test]
    fn test_io_not_found_gets_special_message() {
        let (mut session, err) = handled_session();
        let error = CommandError::from(std::io::Error::new(
            std::io::ErrorKind::NotFound,
            "script.tsh",
        ));
        let flow = resolver::handle(&mut session, error).unwrap();
        assert_eq!(flow, Flow::Continue);
        assert!(err.contents().contains("no such file"));
    }

    #[test]
    fn test_permission_pattern_rule() {
        let (mut session, err) = handled_session();
        let error = CommandError::new(ErrorKind::Io, "locked").with_code("PermissionDenied");
        resolver::handle(&mut session, error).unwrap();
        assert!(err.contents().contains("permission denied"));
    }

    #[test]
    fn test_io_fallback_for_other_codes() {
        let (mut session, err) = handled_session();
        let error = CommandError::new(ErrorKind::Io, "pipe closed").with_code("BrokenPipe");
        resolver::handle(&mut session, error).unwrap();
        assert!(err.contents().contains("io error: pipe closed"));
    }

    #[test]
    fn test_fault_reported_and_loop_continues() {
        let (mut session, err) = handled_session();
        let flow = resolver::handle(&mut session, CommandError::fault("boom")).unwrap();
        assert_eq!(flow, Flow::Continue);
        assert!(err.contents().contains("command panicked: boom"));
    }
}
