/// Ordered in-memory record of past input lines. Appended by the loop
/// driver, read by the `history` builtin. Not persisted across runs.
pub struct History {
    entries: Vec<String>,
    max_entries: usize,
}

impl History {
    pub fn new(max_entries: usize) -> Self {
        History {
            entries: Vec::new(),
            max_entries,
        }
    }

    pub fn add(&mut self, entry: &str) {
        if entry.trim().is_empty() {
            return;
        }
        self.entries.push(entry.to_string());
        if self.entries.len() > self.max_entries {
            let excess = self.entries.len() - self.max_entries;
            self.entries.drain(..excess);
        }
    }

    pub fn entries(&self) -> &[String] {
        &self.entries
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_add_preserves_order() {
        let mut history = History::new(10);
        history.add("first");
        history.add("second");
        history.add("first");
        assert_eq!(history.entries(), ["first", "second", "first"]);
    }

    #[test]
    fn test_blank_entries_skipped() {
        let mut history = History::new(10);
        history.add("");
        history.add("   ");
        assert!(history.is_empty());
    }

    #[test]
    fn test_oldest_entries_trimmed() {
        let mut history = History::new(2);
        history.add("one");
        history.add("two");
        history.add("three");
        assert_eq!(history.entries(), ["two", "three"]);
        assert_eq!(history.len(), 2);
    }
}
