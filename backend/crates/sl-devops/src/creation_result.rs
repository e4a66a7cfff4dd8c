use std::fmt;

/// What the remote service assigned to a newly created story.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CreationResult {
    pub item_id: u64,
    /// Browser URL of the item (`_links.html.href`)
    pub item_url: String,
    /// Title as stored remotely, or as submitted if the response omitted it
    pub title: String,
}

impl CreationResult {
    /// Human-readable confirmation shown by every front-end.
    pub fn confirmation(&self) -> String {
        self.to_string()
    }
}

impl fmt::Display for CreationResult {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "Created Azure DevOps story #{} ({}). View it at: {}",
            self.item_id, self.title, self.item_url
        )
    }
}
