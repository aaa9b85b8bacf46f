use std::io::Write;

use crate::command::{Command, CommandError, Flow};
use crate::session::Session;

/// The always-registered `help` command. The dispatch pipeline invokes it
/// implicitly for `--help` flags and for unresolvable command names; passing
/// `--stderr` as its sole argument directs the listing to the error stream.
pub struct HelpCommand;

impl HelpCommand {
    fn listing(session: &Session) -> String {
        let mut text = String::from("Available commands:\n");
        for (name, command) in session.commands().iter() {
            text.push_str(&format!("  {:<10} {}\n", name, command.summary()));
        }
        text
    }
}

impl Command for HelpCommand {
    fn summary(&self) -> &str {
        "list commands, or describe one command"
    }

    fn invoke(&self, session: &mut Session, args: &[String]) -> Result<Flow, CommandError> {
        let to_stderr = args.first().map(String::as_str) == Some("--stderr");

        let text = match args.first().map(String::as_str) {
            Some(name) if !to_stderr => match session.command(name) {
                Some(command) => format!("{} - {}\n", name, command.summary()),
                None => Self::listing(session),
            },
            _ => Self::listing(session),
        };

        if to_stderr {
            write!(session.stderr(), "{}", text)?;
        } else {
            write!(session.stdout(), "{}", text)?;
        }
        Ok(Flow::Continue)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::rc::Rc;

    use crate::session::CaptureWriter;

    fn session_with_help() -> (Session, CaptureWriter, CaptureWriter) {
        let out = CaptureWriter::new();
        let err = CaptureWriter::new();
        let mut session = Session::with_streams(Box::new(out.clone()), Box::new(err.clone()));
        session.commands_mut().register("help", Rc::new(HelpCommand));
        (session, out, err)
    }

    #[test]
    fn test_listing_goes_to_stdout() {
        let (mut session, out, err) = session_with_help();
        HelpCommand.invoke(&mut session, &[]).unwrap();
        assert!(out.contents().contains("Available commands:"));
        assert!(out.contents().contains("help"));
        assert!(err.contents().is_empty());
    }

    #[test]
    fn test_stderr_argument_redirects_listing() {
        let (mut session, out, err) = session_with_help();
        HelpCommand
            .invoke(&mut session, &["--stderr".to_string()])
            .unwrap();
        assert!(out.contents().is_empty());
        assert!(err.contents().contains("Available commands:"));
    }

    #[test]
    fn test_named_command_summary() {
        let (mut session, out, _err) = session_with_help();
        HelpCommand
            .invoke(&mut session, &["help".to_string()])
            .unwrap();
        assert!(out.contents().starts_with("help - "));
    }

    #[test]
    fn test_unknown_name_falls_back_to_listing() {
        let (mut session, out, _err) = session_with_help();
        HelpCommand
            .invoke(&mut session, &["--help".to_string()])
            .unwrap();
        assert!(out.contents().contains("Available commands:"));
    }
}
