use std::collections::BTreeMap;
use std::rc::Rc;

use crate::session::Session;

/// What the loop should do after an invocation completes.
///
/// Commands end the loop by returning a quit variant instead of mutating
/// shared session state; the driver reads the value once per dispatch.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Flow {
    Continue,
    Quit,
    QuitWith(i32),
}

impl Flow {
    pub fn is_quit(&self) -> bool {
        !matches!(self, Flow::Continue)
    }

    pub fn exit_code(&self) -> i32 {
        match self {
            Flow::Continue | Flow::Quit => 0,
            Flow::QuitWith(code) => *code,
        }
    }
}

/// Error classes the handler table groups on.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ErrorKind {
    Usage,
    Io,
    Fault,
}

impl std::fmt::Display for ErrorKind {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            ErrorKind::Usage => write!(f, "usage"),
            ErrorKind::Io => write!(f, "io"),
            ErrorKind::Fault => write!(f, "fault"),
        }
    }
}

/// A recoverable command failure: a kind for group matching, an optional
/// string code for the per-rule tiers, and a human-readable message.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CommandError {
    kind: ErrorKind,
    code: Option<String>,
    message: String,
}

impl CommandError {
    pub fn new(kind: ErrorKind, message: impl Into<String>) -> Self {
        CommandError {
            kind,
            code: None,
            message: message.into(),
        }
    }

    pub fn usage(message: impl Into<String>) -> Self {
        CommandError::new(ErrorKind::Usage, message)
    }

    /// A failure captured at the isolation boundary rather than reported
    /// through the command's own return value.
    pub fn fault(message: impl Into<String>) -> Self {
        CommandError::new(ErrorKind::Fault, message)
    }

    pub fn with_code(mut self, code: impl Into<String>) -> Self {
        self.code = Some(code.into());
        self
    }

    pub fn kind(&self) -> ErrorKind {
        self.kind
    }

    pub fn code(&self) -> Option<&str> {
        self.code.as_deref()
    }

    pub fn message(&self) -> &str {
        &self.message
    }
}

impl std::fmt::Display for CommandError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match &self.code {
            Some(code) => write!(f, "{} error [{}]: {}", self.kind, code, self.message),
            None => write!(f, "{} error: {}", self.kind, self.message),
        }
    }
}

impl From<std::io::Error> for CommandError {
    fn from(err: std::io::Error) -> Self {
        CommandError::new(ErrorKind::Io, err.to_string()).with_code(format!("{:?}", err.kind()))
    }
}

impl std::error::Error for CommandError {}

/// A named, registered unit of work invocable from the loop.
pub trait Command {
    /// One-line description shown by the `help` listing.
    fn summary(&self) -> &str;

    fn invoke(&self, session: &mut Session, args: &[String]) -> Result<Flow, CommandError>;

    /// Optional completion capability. `None` means the command offers no
    /// candidates beyond the base set; `Some` results are returned verbatim,
    /// including empty.
    fn complete(&self, _session: &Session, _args: &[String]) -> Option<Vec<String>> {
        None
    }
}

#[derive(Clone, Default)]
pub struct CommandRegistry {
    commands: BTreeMap<String, Rc<dyn Command>>,
}

impl CommandRegistry {
    pub fn new() -> Self {
        CommandRegistry {
            commands: BTreeMap::new(),
        }
    }

    pub fn register(&mut self, name: impl Into<String>, command: Rc<dyn Command>) {
        self.commands.insert(name.into(), command);
    }

    pub fn get(&self, name: &str) -> Option<Rc<dyn Command>> {
        self.commands.get(name).cloned()
    }

    pub fn contains(&self, name: &str) -> bool {
        self.commands.contains_key(name)
    }

    pub fn names(&self) -> impl Iterator<Item = &str> {
        self.commands.keys().map(String::as_str)
    }

    pub fn iter(&self) -> impl Iterator<Item = (&str, &Rc<dyn Command>)> {
        self.commands.iter().map(|(name, cmd)| (name.as_str(), cmd))
    }

    pub fn len(&self) -> usize {
        self.commands.len()
    }

    pub fn is_empty(&self) -> bool {
        self.commands.is_empty()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    struct Nop;

    impl Command for Nop {
        fn summary(&self) -> &str {
            "does nothing"
        }

        fn invoke(&self, _session: &mut Session, _args: &[String]) -> Result<Flow, CommandError> {
            Ok(Flow::Continue)
        }
    }

    #[test]
    fn test_flow_exit_codes() {
        assert_eq!(Flow::Continue.exit_code(), 0);
        assert_eq!(Flow::Quit.exit_code(), 0);
        assert_eq!(Flow::QuitWith(3).exit_code(), 3);
        assert!(Flow::Quit.is_quit());
        assert!(Flow::QuitWith(1).is_quit());
        assert!(!Flow::Continue.is_quit());
    }

    #[test]
    fn test_error_from_io() {
        let io = std::io::Error::new(std::io::ErrorKind::NotFound, "missing");
        let err = CommandError::from(io);
        assert_eq!(err.kind(), ErrorKind::Io);
        assert_eq!(err.code(), Some("NotFound"));
        assert!(err.message().contains("missing"));
    }

    #[test]
    fn test_error_code_builder() {
        let err = CommandError::usage("bad args").with_code("bad-assignment");
        assert_eq!(err.kind(), ErrorKind::Usage);
        assert_eq!(err.code(), Some("bad-assignment"));
    }

    #[test]
    fn test_registry_lookup_and_names() {
        let mut registry = CommandRegistry::new();
        assert!(registry.is_empty());
        registry.register("nop", Rc::new(Nop));
        assert!(registry.contains("nop"));
        assert!(registry.get("nop").is_some());
        assert!(registry.get("other").is_none());
        assert_eq!(registry.names().collect::<Vec<_>>(), vec!["nop"]);
        assert_eq!(registry.len(), 1);
    }
}
