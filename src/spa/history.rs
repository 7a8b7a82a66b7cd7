/**
 * Host History
 *
 * The part of the browser a shell talks to: the address bar, the session
 * history stack and full document loads.
 *
 * # Back/Forward
 *
 * The host moves the address first and tells the shell afterwards. A shell
 * that rejects the move must push the previous route back itself; see
 * `Navigator::handle_pop_state`.
 */

/// Session history as seen by a shell
pub trait HistoryHost {
    /// Current address path
    fn location(&self) -> String;

    /// Add a history entry and show `path` without reloading
    fn push_state(&mut self, path: &str);

    /// Replace the current entry with `path` without reloading
    fn replace_state(&mut self, path: &str);

    /// Leave the shell and load `path` as a new document
    fn assign(&mut self, path: &str);
}

/// In-memory history stack
///
/// Behaves like a browser tab: `push_state` drops forward entries,
/// `back`/`forward` move the cursor and change the address before any
/// shell gets a say.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct MemoryHistory {
    entries: Vec<String>,
    cursor: usize,
    document_loads: Vec<String>,
}

impl MemoryHistory {
    /// A tab opened at `initial`
    pub fn new(initial: impl Into<String>) -> Self {
        Self {
            entries: vec![initial.into()],
            cursor: 0,
            document_loads: Vec::new(),
        }
    }

    /// Move one entry back; returns the new address, or `None` at the start
    pub fn back(&mut self) -> Option<String> {
        if self.cursor == 0 {
            return None;
        }
        self.cursor -= 1;
        Some(self.entries[self.cursor].clone())
    }

    /// Move one entry forward; returns the new address, or `None` at the end
    pub fn forward(&mut self) -> Option<String> {
        if self.cursor + 1 >= self.entries.len() {
            return None;
        }
        self.cursor += 1;
        Some(self.entries[self.cursor].clone())
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

    /// Documents loaded through [`HistoryHost::assign`], oldest first
    pub fn document_loads(&self) -> &[String] {
        &self.document_loads
    }
}

impl Default for MemoryHistory {
    fn default() -> Self {
        Self::new("/")
    }
}

impl HistoryHost for MemoryHistory {
    fn location(&self) -> String {
        self.entries[self.cursor].clone()
    }

    fn push_state(&mut self, path: &str) {
        self.entries.truncate(self.cursor + 1);
        self.entries.push(path.to_string());
        self.cursor = self.entries.len() - 1;
    }

    fn replace_state(&mut self, path: &str) {
        self.entries[self.cursor] = path.to_string();
    }

    fn assign(&mut self, path: &str) {
        self.document_loads.push(path.to_string());
        self.push_state(path);
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_push_and_back_forward() {
        let mut history = MemoryHistory::new("/a");
        history.push_state("/b");
        history.push_state("/c");
        assert_eq!(history.location(), "/c");

        assert_eq!(history.back().as_deref(), Some("/b"));
        assert_eq!(history.back().as_deref(), Some("/a"));
        assert_eq!(history.back(), None);
        assert_eq!(history.forward().as_deref(), Some("/b"));
        assert_eq!(history.location(), "/b");
    }

    #[test]
    fn test_push_drops_forward_entries() {
        let mut history = MemoryHistory::new("/a");
        history.push_state("/b");
        history.back();
        history.push_state("/c");
        assert_eq!(history.entries(), ["/a", "/c"]);
        assert_eq!(history.forward(), None);
    }

    #[test]
    fn test_replace_and_assign() {
        let mut history = MemoryHistory::new("/a");
        history.replace_state("/b");
        assert_eq!(history.entries(), ["/b"]);

        history.assign("/");
        assert_eq!(history.location(), "/");
        assert_eq!(history.document_loads(), ["/"]);
        assert_eq!(history.len(), 2);
    }
}
