use crate::editor::Focus;
use std::sync::atomic::{AtomicU64, Ordering};

static VERSION_COUNTER: AtomicU64 = AtomicU64::new(1);

pub fn next_version() -> u64 {
    VERSION_COUNTER.fetch_add(1, Ordering::Relaxed)
}

/// Immutable snapshot of everything the UI draws.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RenderState {
    pub version: u64,
    pub tags: Vec<String>,
    pub pending: String,
    pub advisory: Option<String>,
    pub focus: Focus,
    pub max_tags: Option<usize>,
    /// Entry surface is withdrawn while this is set.
    pub limit_reached: bool,
    /// Separator labels for the tip line, e.g. `["Enter", "Comma"]`.
    pub separators: Vec<String>,
    /// Committed list as JSON.
    pub output: String,
}

impl RenderState {
    /// `"<count> / <max> tags used"` when a maximum is configured.
    pub fn usage_label(&self) -> Option<String> {
        self.max_tags
            .map(|max| format!("{} / {} tags used", self.tags.len(), max))
    }

    /// Tip line naming the separators, e.g. `Press Enter or Comma to add a tag`.
    pub fn tip(&self) -> String {
        match self.separators.as_slice() {
            [] => "No separators configured".to_string(),
            [only] => format!("Tip: Press {only} to add a tag"),
            [init @ .., last] => {
                format!("Tip: Press {} or {last} to add a tag", init.join(", "))
            }
        }
    }
}

impl Default for RenderState {
    fn default() -> Self {
        Self {
            version: 0,
            tags: Vec::new(),
            pending: String::new(),
            advisory: None,
            focus: Focus::Entry,
            max_tags: None,
            limit_reached: false,
            separators: Vec::new(),
            output: "[]".to_string(),
        }
    }
}
