//! Model for the TEA pattern.
//!
//! The committed tag list and the editor's transient state are separate
//! slots: `tags` is only ever replaced with a list the editor reports through
//! its change callback.

use crate::editor::{EditorConfig, TagInput, TagInputProps};
use crate::render::{next_version, RenderState};

/// Pure application state - the single source of truth.
#[derive(Debug)]
pub struct Model {
    /// Committed tags, owned by the host.
    pub tags: Vec<String>,
    /// Pending text, advisory and focus, owned by the editor.
    pub editor: TagInput,

    // Config (immutable after init)
    pub config: EditorConfig,

    // Dirty flag - set when state changes and render is needed
    pub dirty: bool,
}

impl Model {
    pub fn new(tags: Vec<String>, config: EditorConfig) -> Self {
        Self {
            tags,
            editor: TagInput::new(),
            config,
            dirty: true,
        }
    }

    pub fn props(&self) -> TagInputProps<'_> {
        TagInputProps::new(&self.tags, &self.config)
    }

    /// Create an immutable snapshot for the render thread.
    pub fn snapshot(&self) -> RenderState {
        let props = self.props();
        RenderState {
            version: next_version(),
            tags: self.tags.clone(),
            pending: self.editor.pending().to_string(),
            advisory: self.editor.advisory().map(|a| a.message.clone()),
            focus: self.editor.focus(props),
            max_tags: self.config.max_tags,
            limit_reached: props.limit_reached(),
            separators: self.config.separators.labels(),
            output: serde_json::to_string(&self.tags).unwrap_or_default(),
        }
    }
}
