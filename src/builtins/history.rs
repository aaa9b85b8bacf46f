use std::cell::RefCell;
use std::io::Write;
use std::rc::Rc;

use crate::command::{Command, CommandError, Flow};
use crate::input::History;
use crate::session::Session;

pub struct HistoryCommand {
    history: Rc<RefCell<History>>,
}

impl HistoryCommand {
    pub fn new(history: Rc<RefCell<History>>) -> Self {
        HistoryCommand { history }
    }
}

impl Command for HistoryCommand {
    fn summary(&self) -> &str {
        "show the lines entered this session"
    }

    fn invoke(&self, session: &mut Session, _args: &[String]) -> Result<Flow, CommandError> {
        let listing: String = self
            .history
            .borrow()
            .entries()
            .iter()
            .enumerate()
            .map(|(index, entry)| format!("{:>4}  {}\n", index + 1, entry))
            .collect();
        write!(session.stdout(), "{}", listing)?;
        Ok(Flow::Continue)
    }
}
