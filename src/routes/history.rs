//! Navigation history and the navigator driving it.

use anyhow::Result;

use super::router::{Resolution, Router};
use super::table::PageId;

/// Session history the navigator records locations into.
///
/// Mirrors the browser history model: `push` discards forward entries,
/// `replace` overwrites the current entry.
pub trait History {
    /// Current location, `None` before the first navigation.
    fn location(&self) -> Option<&str>;

    fn push(&mut self, path: &str);

    fn replace(&mut self, path: &str);

    /// Moves one entry back. Returns the new location, or `None` at the start.
    fn back(&mut self) -> Option<&str>;

    /// Moves one entry forward. Returns the new location, or `None` at the end.
    fn forward(&mut self) -> Option<&str>;

    fn len(&self) -> usize;

    fn is_empty(&self) -> bool {
        self.len() == 0
    }
}

/// In-memory history stack.
#[derive(Debug, Clone, Default)]
pub struct MemoryHistory {
    entries: Vec<String>,
    position: usize,
}

impl MemoryHistory {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn entries(&self) -> &[String] {
        &self.entries
    }
}

impl History for MemoryHistory {
    fn location(&self) -> Option<&str> {
        self.entries.get(self.position).map(String::as_str)
    }

    fn push(&mut self, path: &str) {
        if !self.entries.is_empty() {
            self.entries.truncate(self.position + 1);
            self.position += 1;
        }
        self.entries.push(path.to_string());
    }

    fn replace(&mut self, path: &str) {
        match self.entries.get_mut(self.position) {
            Some(entry) => *entry = path.to_string(),
            None => self.entries.push(path.to_string()),
        }
    }

    fn back(&mut self) -> Option<&str> {
        if self.position == 0 {
            return None;
        }
        self.position -= 1;
        self.location()
    }

    fn forward(&mut self) -> Option<&str> {
        if self.position + 1 >= self.entries.len() {
            return None;
        }
        self.position += 1;
        self.location()
    }

    fn len(&self) -> usize {
        self.entries.len()
    }
}

/// Resolves locations and records matched ones into a history.
#[derive(Debug, Clone)]
pub struct Navigator<H: History> {
    router: Router,
    history: H,
}

impl<H: History> Navigator<H> {
    pub fn new(router: Router, history: H) -> Self {
        Self { router, history }
    }

    pub fn history(&self) -> &H {
        &self.history
    }

    /// Navigates to a location.
    ///
    /// A matched location pushes the path of the route that rendered it, so
    /// a redirect only ever leaves its final path in history. An unmatched
    /// location is logged and history is left unchanged, as is navigating
    /// to the location already shown.
    ///
    /// # Errors
    ///
    /// Returns error if the route table contains a redirect cycle
    pub fn navigate(&mut self, location: &str) -> Result<Resolution> {
        let resolution = self.router.resolve(location)?;

        match &resolution {
            Resolution::Page { path, .. } => {
                if self.history.location() != Some(*path) {
                    self.history.push(path);
                }
            }
            Resolution::NotFound { path } => {
                tracing::warn!("No route matches {}, keeping current view", path);
            }
        }

        Ok(resolution)
    }

    /// Page displayed at the current history entry.
    pub fn current_page(&self) -> Option<PageId> {
        let location = self.history.location()?;
        self.router.resolve(location).ok()?.page()
    }

    /// Goes back one entry and returns the page now displayed.
    pub fn back(&mut self) -> Option<PageId> {
        self.history.back()?;
        self.current_page()
    }
}

impl Navigator<MemoryHistory> {
    /// Navigator over the application routes with in-memory history.
    pub fn in_memory() -> Self {
        Self::new(Router::default(), MemoryHistory::new())
    }
}
