use std::cell::RefCell;
use std::collections::BTreeMap;
use std::io::{self, Write};
use std::rc::Rc;

use crate::command::{Command, CommandRegistry};
use crate::dispatch::resolver::HandlerGroup;
use crate::highlight::SyntaxHighlighter;

/// Everything a dispatch can see: the environment mapping, the command
/// registry, the ordered error-handler groups, and the output streams.
///
/// Single-owner by design. Only the currently dispatching command or the
/// loop itself touches it; the line editor's helper holds a shared reference
/// but only reads while no dispatch is in flight.
pub struct Session {
    env: BTreeMap<String, String>,
    commands: CommandRegistry,
    handlers: Rc<Vec<HandlerGroup>>,
    stdout: Box<dyn Write>,
    stderr: Box<dyn Write>,
    highlighter: SyntaxHighlighter,
}

impl Session {
    pub fn new() -> Self {
        Session::with_streams(Box::new(io::stdout()), Box::new(io::stderr()))
    }

    pub fn with_streams(stdout: Box<dyn Write>, stderr: Box<dyn Write>) -> Self {
        let mut env = BTreeMap::new();
        env.insert("PROMPT".to_string(), "tiller> ".to_string());

        Session {
            env,
            commands: CommandRegistry::new(),
            handlers: Rc::new(Vec::new()),
            stdout,
            stderr,
            highlighter: SyntaxHighlighter::new(),
        }
    }

    pub fn env(&self, key: &str) -> Option<&str> {
        self.env.get(key).map(String::as_str)
    }

    pub fn env_all(&self) -> &BTreeMap<String, String> {
        &self.env
    }

    pub fn set_env(&mut self, key: impl Into<String>, value: impl Into<String>) {
        self.env.insert(key.into(), value.into());
    }

    pub fn command(&self, name: &str) -> Option<Rc<dyn Command>> {
        self.commands.get(name)
    }

    pub fn commands(&self) -> &CommandRegistry {
        &self.commands
    }

    pub fn commands_mut(&mut self) -> &mut CommandRegistry {
        &mut self.commands
    }

    pub fn error_handlers(&self) -> Rc<Vec<HandlerGroup>> {
        self.handlers.clone()
    }

    pub fn set_handlers(&mut self, groups: Vec<HandlerGroup>) {
        self.handlers = Rc::new(groups);
    }

    pub fn stdout(&mut self) -> &mut dyn Write {
        &mut *self.stdout
    }

    pub fn stderr(&mut self) -> &mut dyn Write {
        &mut *self.stderr
    }

    pub fn highlighter(&self) -> SyntaxHighlighter {
        self.highlighter
    }
}

impl Default for Session {
    fn default() -> Self {
        Session::new()
    }
}

/// Memory-backed writer usable as a session stream, so tests and embedders
/// can inspect what a dispatch wrote.
#[derive(Clone, Default)]
pub struct CaptureWriter {
    buf: Rc<RefCell<Vec<u8>>>,
}

impl CaptureWriter {
    pub fn new() -> Self {
        CaptureWriter::default()
    }

    /// Handle onto the collected bytes, valid after the writer was moved
    /// into a session.
    pub fn handle(&self) -> Rc<RefCell<Vec<u8>>> {
        self.buf.clone()
    }

    pub fn contents(&self) -> String {
        String::from_utf8_lossy(&self.buf.borrow()).into_owned()
    }
}

impl Write for CaptureWriter {
    fn write(&mut self, data: &[u8]) -> io::Result<usize> {
        self.buf.borrow_mut().extend_from_slice(data);
        Ok(data.len())
    }

    fn flush(&mut self) -> io::Result<()> {
        Ok(())
    }
}
