use serde::{Deserialize, Serialize};
use uuid::Uuid;

/// A single entry extracted from an RSS feed
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct FeedItem {
    /// Synthetic identity for stable list rendering; not derived from content
    pub id: Uuid,
    pub title: String,
    pub description: String,
}

impl FeedItem {
    /// Create an item with empty fields, ready to accumulate character data
    pub fn new() -> Self {
        Self {
            id: Uuid::new_v4(),
            title: String::new(),
            description: String::new(),
        }
    }

    /// Get a preview of the description (first N characters)
    pub fn description_preview(&self, max_len: usize) -> String {
        if max_len == 0 {
            return String::new();
        }

        let text = self.description.as_str();
        if text.len() <= max_len {
            return text.to_string();
        }

        let mut end = 0;
        for (idx, ch) in text.char_indices() {
            let next = idx + ch.len_utf8();
            if next > max_len {
                break;
            }
            end = next;
        }
        format!("{}...", &text[..end])
    }
}

impl Default for FeedItem {
    fn default() -> Self {
        Self::new()
    }
}
