pub mod invoker;
pub mod resolver;

pub use invoker::invoke;
pub use resolver::{handle, resolve, Handler, HandlerGroup};

use std::io::Write;

use crate::command::Flow;
use crate::error::ShellError;
use crate::session::Session;
use crate::tokens;

/// Parse one raw input line and dispatch it: tokenize, handle the `--help`
/// shortcut, then hand the command name and arguments to the invoker.
///
/// Empty lines and tokenizer failures never dispatch; the latter print a
/// diagnostic and let the loop re-prompt.
pub fn dispatch_line(session: &mut Session, line: &str) -> Result<Flow, ShellError> {
    let words = match tokens::split(line) {
        Ok(words) => words,
        Err(error) => {
            let diagnostic = session.highlighter().error(&error.to_string());
            writeln!(session.stderr(), "{}", diagnostic)?;
            return Ok(Flow::Continue);
        }
    };

    let (name, args) = match words.split_first() {
        Some(split) => split,
        None => return Ok(Flow::Continue),
    };

    if !invoker::is_comment(name) && words.iter().any(|word| word == "--help") {
        return invoker::invoke(session, "help", &[name.clone()]);
    }

    invoker::invoke(session, name, args)
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::cell::RefCell;
    use std::rc::Rc;

    use crate::command::{Command, CommandError};
    use crate::session::CaptureWriter;

    type Calls = Rc<RefCell<Vec<(String, Vec<String>)>>>;

    struct Recorder {
        name: &'static str,
        flow: Flow,
        calls: Calls,
    }

    impl Command for Recorder {
        fn summary(&self) -> &str {
            "records invocations"
        }

        fn invoke(&self, _session: &mut Session, args: &[String]) -> Result<Flow, CommandError> {
            self.calls
                .borrow_mut()
                .push((self.name.to_string(), args.to_vec()));
            Ok(self.flow)
        }
    }

    fn recording_session() -> (Session, Calls, CaptureWriter, CaptureWriter) {
        let out = CaptureWriter::new();
        let err = CaptureWriter::new();
        let mut session = Session::with_streams(Box::new(out.clone()), Box::new(err.clone()));
        let calls: Calls = Rc::new(RefCell::new(Vec::new()));
        for (name, flow) in [
            ("help", Flow::Continue),
            ("echo", Flow::Continue),
            ("quit", Flow::Quit),
        ] {
            session.commands_mut().register(
                name,
                Rc::new(Recorder {
                    name,
                    flow,
                    calls: calls.clone(),
                }),
            );
        }
        (session, calls, out, err)
    }

    #[test]
    fn test_whitespace_only_line_never_dispatches() {
        let (mut session, calls, _out, _err) = recording_session();
        for line in ["", "   ", "\t \t"] {
            let flow = dispatch_line(&mut session, line).unwrap();
            assert_eq!(flow, Flow::Continue);
        }
        assert!(calls.borrow().is_empty());
    }

    #[test]
    fn test_help_flag_substitutes_help_invocation() {
        let (mut session, calls, _out, _err) = recording_session();
        dispatch_line(&mut session, "echo --help").unwrap();
        assert_eq!(
            *calls.borrow(),
            vec![("help".to_string(), vec!["echo".to_string()])]
        );
    }

    #[test]
    fn test_help_flag_anywhere_in_arguments() {
        let (mut session, calls, _out, _err) = recording_session();
        dispatch_line(&mut session, "echo one --help two").unwrap();
        assert_eq!(
            *calls.borrow(),
            vec![("help".to_string(), vec!["echo".to_string()])]
        );
    }

    #[test]
    fn test_plain_dispatch_splits_name_and_args() {
        let (mut session, calls, _out, _err) = recording_session();
        dispatch_line(&mut session, "echo hello 'big world'").unwrap();
        assert_eq!(
            *calls.borrow(),
            vec![(
                "echo".to_string(),
                vec!["hello".to_string(), "big world".to_string()]
            )]
        );
    }

    #[test]
    fn test_comment_then_quit_scenario() {
        let (mut session, calls, out, err) = recording_session();

        let flow = dispatch_line(&mut session, "  # this is a note").unwrap();
        assert_eq!(flow, Flow::Continue);
        assert!(out.contents().is_empty());
        assert!(err.contents().is_empty());
        assert!(calls.borrow().is_empty());

        let flow = dispatch_line(&mut session, "quit").unwrap();
        assert_eq!(flow, Flow::Quit);
    }

    #[test]
    fn test_unterminated_quote_reports_and_continues() {
        let (mut session, calls, _out, err) = recording_session();
        let flow = dispatch_line(&mut session, "echo 'oops").unwrap();
        assert_eq!(flow, Flow::Continue);
        assert!(calls.borrow().is_empty());
        assert!(err.contents().contains("unterminated quote"));
    }
}
