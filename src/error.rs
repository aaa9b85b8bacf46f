use crate::command::CommandError;

#[derive(Debug)]
pub enum ShellError {
    Readline(rustyline::error::ReadlineError),
    Io(std::io::Error),
    Regex(regex::Error),
    FlagError(String),
    CtrlC(String),
    /// A command error reached the resolver and no handler group claimed it.
    /// Deliberately fatal: a gap in the handler table is a configuration
    /// defect, not a runtime condition to recover from.
    Unhandled(CommandError),
    HelpNotRegistered,
}

impl From<rustyline::error::ReadlineError> for ShellError {
    fn from(err: rustyline::error::ReadlineError) -> Self {
        ShellError::Readline(err)
    }
}

impl From<std::io::Error> for ShellError {
    fn from(err: std::io::Error) -> Self {
        ShellError::Io(err)
    }
}

impl From<regex::Error> for ShellError {
    fn from(err: regex::Error) -> Self {
        ShellError::Regex(err)
    }
}

impl From<ctrlc::Error> for ShellError {
    fn from(err: ctrlc::Error) -> Self {
        ShellError::CtrlC(err.to_string())
    }
}

impl std::fmt::Display for ShellError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            ShellError::Readline(e) => write!(f, "Readline error: {}", e),
            ShellError::Io(e) => write!(f, "IO error: {}", e),
            ShellError::Regex(e) => write!(f, "Regex error: {}", e),
            ShellError::FlagError(msg) => write!(f, "Flag error: {}", msg),
            ShellError::CtrlC(msg) => write!(f, "Ctrl-C error: {}", msg),
            ShellError::Unhandled(e) => write!(f, "unhandled command error: {}", e),
            ShellError::HelpNotRegistered => write!(f, "the 'help' command is not registered"),
        }
    }
}

impl std::error::Error for ShellError {}
