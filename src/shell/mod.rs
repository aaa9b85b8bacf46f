use std::cell::RefCell;
use std::rc::Rc;

use rustyline::{config::Configurer, error::ReadlineError, history::FileHistory, Editor};

use crate::builtins;
use crate::dispatch;
use crate::error::ShellError;
use crate::flags::Flags;
use crate::input::{History, ShellCompleter};
use crate::prompt;
use crate::session::Session;

/// The command loop driver: prompt, read one line, dispatch it, inspect the
/// resulting flow, repeat.
///
/// One line is fully dispatched before the next read; the interrupt during
/// the read is the only cancellation path and never touches an in-flight
/// command.
pub struct Shell {
    editor: Editor<ShellCompleter, FileHistory>,
    session: Rc<RefCell<Session>>,
    history: Rc<RefCell<History>>,
    flags: Flags,
}

impl Shell {
    pub fn new(flags: Flags) -> Result<Self, ShellError> {
        let (session, history) = builtins::bootstrap()?;
        let session = Rc::new(RefCell::new(session));

        let mut editor = Editor::<ShellCompleter, FileHistory>::new()?;
        editor.set_helper(Some(ShellCompleter::new(session.clone())));
        editor.set_auto_add_history(true);

        // Interrupts while a command runs stay observable; they do not kill
        // the process or the command.
        ctrlc::set_handler(move || {
            println!("\nUse 'quit' to leave the shell");
        })?;

        Ok(Shell {
            editor,
            session,
            history,
            flags,
        })
    }

    /// Run until a quit flow, end of input, or a fatal read error. Returns
    /// the exit code exactly once, when the loop terminates.
    pub fn run(&mut self) -> Result<i32, ShellError> {
        loop {
            let prompt = self.render_prompt();
            match self.editor.readline(&prompt) {
                Ok(line) => {
                    self.history.borrow_mut().add(&line);
                    let flow = dispatch::dispatch_line(&mut self.session.borrow_mut(), &line)?;
                    if flow.is_quit() {
                        return Ok(flow.exit_code());
                    }
                }
                Err(ReadlineError::Interrupted) => {
                    if !self.flags.is_set("quiet") {
                        println!("^C");
                    }
                    continue;
                }
                Err(ReadlineError::Eof) => return Ok(0),
                Err(e) => return Err(e.into()),
            }
        }
    }

    fn render_prompt(&self) -> String {
        let session = self.session.borrow();
        let template = session.env("PROMPT").unwrap_or("> ").to_string();
        prompt::render(session.env_all(), &template)
    }
}
