//! Browser history abstraction and an in-memory stand-in.

use crate::error::HistoryError;

/// The slice of the browser history API the controller needs.
pub trait History {
    /// Current location path (may include query/fragment).
    fn current_path(&self) -> String;

    /// Add a new back-navigable entry.
    ///
    /// # Errors
    ///
    /// Returns an error when the host refuses the update.
    fn push(&mut self, path: &str) -> Result<(), HistoryError>;

    /// Overwrite the current entry so it is no longer reachable via back.
    ///
    /// # Errors
    ///
    /// Returns an error when the host refuses the update.
    fn replace(&mut self, path: &str) -> Result<(), HistoryError>;

    fn scroll_to_top(&mut self) {}
}

/// Entry stack with a cursor, mirroring how a browser tab keeps history.
#[derive(Debug, Clone)]
pub struct MemoryHistory {
    entries: Vec<String>,
    cursor: usize,
    reject_writes: bool,
    scrolls: usize,
}

impl Default for MemoryHistory {
    fn default() -> Self {
        Self::at("/")
    }
}

impl MemoryHistory {
    #[must_use]
    pub fn at(path: &str) -> Self {
        Self {
            entries: vec![path.to_string()],
            cursor: 0,
            reject_writes: false,
            scrolls: 0,
        }
    }

    /// Make every subsequent push/replace fail.
    pub const fn set_reject_writes(&mut self, reject: bool) {
        self.reject_writes = reject;
    }

    /// Simulate the browser back button. Returns the new path, if it moved.
    pub fn back(&mut self) -> Option<&str> {
        if self.cursor == 0 {
            return None;
        }
        self.cursor -= 1;
        Some(self.entries[self.cursor].as_str())
    }

    /// Simulate the browser forward button.
    pub fn forward(&mut self) -> Option<&str> {
        if self.cursor + 1 >= self.entries.len() {
            return None;
        }
        self.cursor += 1;
        Some(self.entries[self.cursor].as_str())
    }

    /// Simulate the user typing a URL: a new entry, like a push.
    pub fn visit(&mut self, path: &str) {
        self.entries.truncate(self.cursor + 1);
        self.entries.push(path.to_string());
        self.cursor = self.entries.len() - 1;
    }

    #[must_use]
    pub fn entries(&self) -> &[String] {
        &self.entries
    }

    /// Number of entries up to and including the cursor.
    #[must_use]
    pub const fn depth(&self) -> usize {
        self.cursor + 1
    }

    #[must_use]
    pub const fn scroll_count(&self) -> usize {
        self.scrolls
    }

    fn check_writable(&self, path: &str) -> Result<(), HistoryError> {
        if self.reject_writes {
            return Err(HistoryError::Rejected {
                path: path.to_string(),
                reason: "history writes disabled".to_string(),
            });
        }
        Ok(())
    }
}

impl History for MemoryHistory {
    fn current_path(&self) -> String {
        self.entries[self.cursor].clone()
    }

    fn push(&mut self, path: &str) -> Result<(), HistoryError> {
        self.check_writable(path)?;
        self.visit(path);
        Ok(())
    }

    fn replace(&mut self, path: &str) -> Result<(), HistoryError> {
        self.check_writable(path)?;
        self.entries[self.cursor] = path.to_string();
        Ok(())
    }

    fn scroll_to_top(&mut self) {
        self.scrolls += 1;
    }
}
