//! Completion routing: registry names for the command position, delegation
//! to the command's own completion capability afterwards. Prefix match only,
//! no fuzzy matching, no ranking.

use std::cell::RefCell;
use std::rc::Rc;

use rustyline::{
    completion::{Completer, Pair},
    highlight::{CmdKind, Highlighter},
    hint::Hinter,
    validate::{ValidationContext, ValidationResult, Validator},
    Context, Helper,
};

use crate::highlight::SyntaxHighlighter;
use crate::session::Session;
use crate::tokens;

/// Route partial input tokens to completion candidates. A trailing delimiter
/// must already be normalized into a trailing empty token by the caller.
///
/// Zero tokens: every registered command name. One token: names with that
/// prefix. More: the first token is a resolved command name; its optional
/// completion capability gets the remaining tokens and its result is
/// returned verbatim (including empty), or the empty list when the command
/// is unknown or offers no completion.
pub fn candidates(session: &Session, words: &[String]) -> Vec<String> {
    match words.split_first() {
        None => session.commands().names().map(String::from).collect(),
        Some((first, rest)) if rest.is_empty() => session
            .commands()
            .names()
            .filter(|name| name.starts_with(first.as_str()))
            .map(String::from)
            .collect(),
        Some((first, rest)) => session
            .command(first)
            .and_then(|command| command.complete(session, rest))
            .unwrap_or_default(),
    }
}

/// rustyline helper wired to the live session: completion through
/// [`candidates`], syntax coloring, and multi-line validation for
/// unterminated quotes.
#[derive(Clone)]
pub struct ShellCompleter {
    session: Rc<RefCell<Session>>,
    highlighter: SyntaxHighlighter,
}

impl ShellCompleter {
    pub fn new(session: Rc<RefCell<Session>>) -> Self {
        ShellCompleter {
            session,
            highlighter: SyntaxHighlighter::new(),
        }
    }
}

impl Helper for ShellCompleter {}

impl Highlighter for ShellCompleter {
    fn highlight<'l>(&self, line: &'l str, _pos: usize) -> std::borrow::Cow<'l, str> {
        std::borrow::Cow::Owned(self.highlighter.command_line(line))
    }

    fn highlight_char(&self, _line: &str, _pos: usize, _kind: CmdKind) -> bool {
        true
    }

    fn highlight_hint<'h>(&self, hint: &'h str) -> std::borrow::Cow<'h, str> {
        std::borrow::Cow::Owned(self.highlighter.hint(hint))
    }
}

impl Hinter for ShellCompleter {
    type Hint = String;
}

impl Validator for ShellCompleter {
    fn validate(&self, ctx: &mut ValidationContext<'_>) -> rustyline::Result<ValidationResult> {
        if tokens::is_complete(ctx.input()) {
            Ok(ValidationResult::Valid(None))
        } else {
            Ok(ValidationResult::Incomplete)
        }
    }
}

impl Completer for ShellCompleter {
    type Candidate = Pair;

    fn complete(
        &self,
        line: &str,
        pos: usize,
        _ctx: &Context<'_>,
    ) -> rustyline::Result<(usize, Vec<Pair>)> {
        let line_up_to_cursor = &line[..pos];
        let mut words: Vec<String> = line_up_to_cursor
            .split_whitespace()
            .map(String::from)
            .collect();

        if line_up_to_cursor.ends_with(' ') {
            words.push(String::new());
        }

        let start = match words.last() {
            Some(word) if !word.is_empty() => line_up_to_cursor.rfind(word.as_str()).unwrap_or(pos),
            _ => pos,
        };

        let session = self.session.borrow();
        let matches = candidates(&session, &words)
            .into_iter()
            .map(|candidate| Pair {
                display: candidate.clone(),
                replacement: candidate,
            })
            .collect();

        Ok((start, matches))
    }
}
