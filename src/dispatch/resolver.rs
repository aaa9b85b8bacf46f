//! Tiered error-handler resolution.
//!
//! The handler table is data, not code: an ordered sequence of groups, each
//! scoped to one [`ErrorKind`] and holding ordered per-tier rule lists. One
//! resolution function enforces the precedence contract, so it can be tested
//! in isolation from any command or I/O.

use regex::Regex;

use crate::command::{CommandError, ErrorKind, Flow};
use crate::error::ShellError;
use crate::session::Session;

/// Recovery policy for one error. The returned [`Flow`] decides whether the
/// loop resumes; the resolver never second-guesses it.
pub type Handler = Box<dyn Fn(&CommandError, &mut Session) -> Flow>;

type Predicate = Box<dyn Fn(Option<&str>) -> bool>;

/// Error-recovery rules scoped to one error kind, tried as a whole before
/// other groups. Within a group the tiers run in fixed order: exact code,
/// code pattern, predicate, fallback.
pub struct HandlerGroup {
    kind: ErrorKind,
    exact: Vec<(String, Handler)>,
    patterns: Vec<(Regex, Handler)>,
    predicates: Vec<(Predicate, Handler)>,
    fallback: Option<Handler>,
}

impl HandlerGroup {
    pub fn new(kind: ErrorKind) -> Self {
        HandlerGroup {
            kind,
            exact: Vec::new(),
            patterns: Vec::new(),
            predicates: Vec::new(),
            fallback: None,
        }
    }

    pub fn kind(&self) -> ErrorKind {
        self.kind
    }

    pub fn on_code(
        mut self,
        code: impl Into<String>,
        handler: impl Fn(&CommandError, &mut Session) -> Flow + 'static,
    ) -> Self {
        self.exact.push((code.into(), Box::new(handler)));
        self
    }

    pub fn on_pattern(
        mut self,
        pattern: Regex,
        handler: impl Fn(&CommandError, &mut Session) -> Flow + 'static,
    ) -> Self {
        self.patterns.push((pattern, Box::new(handler)));
        self
    }

    pub fn when(
        mut self,
        predicate: impl Fn(Option<&str>) -> bool + 'static,
        handler: impl Fn(&CommandError, &mut Session) -> Flow + 'static,
    ) -> Self {
        self.predicates.push((Box::new(predicate), Box::new(handler)));
        self
    }

    /// Catch-all for this group; always wins at its tier regardless of code.
    pub fn or_else(
        mut self,
        handler: impl Fn(&CommandError, &mut Session) -> Flow + 'static,
    ) -> Self {
        self.fallback = Some(Box::new(handler));
        self
    }

    fn select(&self, code: Option<&str>) -> Option<&Handler> {
        if let Some(code) = code {
            for (rule_code, handler) in &self.exact {
                if rule_code == code {
                    return Some(handler);
                }
            }
            for (pattern, handler) in &self.patterns {
                if pattern.is_match(code) {
                    return Some(handler);
                }
            }
        }
        for (predicate, handler) in &self.predicates {
            if predicate(code) {
                return Some(handler);
            }
        }
        self.fallback.as_ref()
    }
}

/// Pick the single applicable handler, or `None` for "no handler".
///
/// The first group whose kind matches the error wins (first match, not best
/// match; group order is caller-defined priority). A matched group with no
/// applicable tier does not fall through to later groups.
pub fn resolve<'a>(groups: &'a [HandlerGroup], error: &CommandError) -> Option<&'a Handler> {
    let group = groups.iter().find(|g| g.kind == error.kind())?;
    group.select(error.code())
}

/// Resolve and invoke. An unresolvable error propagates as
/// [`ShellError::Unhandled`]; surfacing handler-table gaps loudly is
/// intentional.
pub fn handle(session: &mut Session, error: CommandError) -> Result<Flow, ShellError> {
    let groups = session.error_handlers();
    match resolve(&groups, &error) {
        Some(handler) => Ok(handler(&error, session)),
        None => Err(ShellError::Unhandled(error)),
    }
}
