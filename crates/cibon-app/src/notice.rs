//! Modal notices (update conflicts and request failures)

/// Kind of notice, decides title and colour
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum NoticeKind {
    /// The server refused an update because the local copy is stale
    Conflict,
    /// Any other failed request
    Error,
}

/// A dismissable message shown over the collection view
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Notice {
    pub kind: NoticeKind,
    pub message: String,
}

impl Notice {
    /// Notice for an update rejected with 412
    pub fn conflict(href: &str) -> Self {
        Self {
            kind: NoticeKind::Conflict,
            message: format!("DENIED: Unable to update {}. Your copy is stale.", href),
        }
    }

    pub fn error(operation: &str, error: impl std::fmt::Display) -> Self {
        Self {
            kind: NoticeKind::Error,
            message: format!("{} failed: {}", operation, error),
        }
    }

    pub fn title(&self) -> &'static str {
        match self.kind {
            NoticeKind::Conflict => "Conflict",
            NoticeKind::Error => "Error",
        }
    }
}
