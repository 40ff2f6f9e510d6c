//! Liked-video tracking and the logged-in user.

use crate::console::Console;

/// Ordered, append-only list of liked video titles. Lives in memory only.
#[derive(Debug, Default, Clone)]
pub struct LikedVideos {
    titles: Vec<String>,
}

impl LikedVideos {
    pub fn new() -> Self {
        Self::default()
    }

    /// Appends `title` and writes a log line naming it. Duplicates are kept.
    pub fn add(&mut self, title: &str, console: &mut dyn Console) {
        self.titles.push(title.to_string());
        console.line(&format!("LOG: Added {title} to liked videos."));
        tracing::info!(title, total = self.titles.len(), "liked video added");
    }

    pub fn titles(&self) -> &[String] {
        &self.titles
    }

    pub fn len(&self) -> usize {
        self.titles.len()
    }

    pub fn is_empty(&self) -> bool {
        self.titles.is_empty()
    }
}

/// A signed-in user. The username is fixed at construction.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct User {
    username: String,
}

impl User {
    pub fn new(username: impl Into<String>) -> Self {
        Self {
            username: username.into(),
        }
    }

    pub fn username(&self) -> &str {
        &self.username
    }
}
