pub mod builtins;
pub mod command;
pub mod dispatch;
pub mod error;
pub mod flags;
pub mod highlight;
pub mod input;
pub mod prompt;
pub mod session;
pub mod shell;
pub mod tokens;
