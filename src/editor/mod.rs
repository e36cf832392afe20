//! The tag input editor.
//!
//! `TagInput` owns only transient state: the pending text, the advisory
//! message and which element has keyboard focus. The committed tag list
//! belongs to the caller and is passed in by reference on every call through
//! `TagInputProps`. Accepted mutations are reported through an `on_change`
//! callback carrying the complete replacement list; the editor never keeps a
//! copy of committed tags.
//!
//! Every operation calls `on_change` at most once, and never for rejected or
//! no-op actions.

pub mod advisory;
pub mod separator;

use crossterm::event::{KeyCode, KeyEvent, KeyModifiers};

pub use advisory::{Advisory, ADVISORY_TTL};
pub use separator::{SeparatorSet, TriggerKey};

use crate::{hlog_debug, hlog_trace};

/// Host-supplied configuration, fixed for the lifetime of the editor.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct EditorConfig {
    /// Maximum number of tags. `None` means unlimited, `Some(0)` means the
    /// limit is reached immediately.
    pub max_tags: Option<usize>,
    pub separators: SeparatorSet,
}

impl EditorConfig {
    pub fn limit_reached(&self, count: usize) -> bool {
        self.max_tags.is_some_and(|max| count >= max)
    }
}

/// What the editor gets to see on each call.
#[derive(Debug, Clone, Copy)]
pub struct TagInputProps<'a> {
    pub value: &'a [String],
    pub config: &'a EditorConfig,
}

impl<'a> TagInputProps<'a> {
    pub fn new(value: &'a [String], config: &'a EditorConfig) -> Self {
        Self { value, config }
    }

    /// While true the entry surface is withdrawn.
    pub fn limit_reached(&self) -> bool {
        self.config.limit_reached(self.value.len())
    }
}

/// Which element has keyboard focus.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum Focus {
    /// The free-text entry surface.
    #[default]
    Entry,
    /// A committed tag chip, by index.
    Chip(usize),
}

/// Result of feeding a key to the editor.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum KeyOutcome {
    /// Not handled; the caller may use the key.
    Ignored,
    /// Handled, including keys whose default effect was suppressed.
    Consumed,
    /// A duplicate was rejected and a new advisory was set. The caller must
    /// schedule its expiry after `ADVISORY_TTL`.
    Rejected { generation: u64 },
}

#[derive(Debug, Default)]
pub struct TagInput {
    pending: String,
    advisory: Option<Advisory>,
    generation: u64,
    focus: Focus,
}

impl TagInput {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn pending(&self) -> &str {
        &self.pending
    }

    pub fn advisory(&self) -> Option<&Advisory> {
        self.advisory.as_ref()
    }

    /// Focus clamped against the current list.
    pub fn focus(&self, props: TagInputProps<'_>) -> Focus {
        match self.focus {
            Focus::Chip(i) if i < props.value.len() => Focus::Chip(i),
            _ => Focus::Entry,
        }
    }

    /// Route one key event.
    pub fn handle_key<F>(
        &mut self,
        props: TagInputProps<'_>,
        key: KeyEvent,
        on_change: F,
    ) -> KeyOutcome
    where
        F: FnOnce(Vec<String>),
    {
        hlog_trace!("TagInput::handle_key {:?}", key);

        if let Focus::Chip(index) = self.focus(props) {
            return self.handle_chip_key(props, index, key, on_change);
        }
        self.focus = Focus::Entry;

        if props.limit_reached() {
            // Entry surface is withdrawn: no typing, no commits.
            return match key.code {
                KeyCode::Backspace if self.pending.is_empty() => {
                    self.remove_last(props, on_change);
                    KeyOutcome::Consumed
                }
                KeyCode::Left => self.focus_last_chip(props),
                _ => KeyOutcome::Ignored,
            };
        }

        if props.config.separators.matches(&key) {
            return self.commit(props, on_change);
        }

        match key.code {
            KeyCode::Backspace => {
                if self.pending.is_empty() {
                    self.remove_last(props, on_change);
                } else {
                    self.pending.pop();
                }
                KeyOutcome::Consumed
            }
            KeyCode::Left if self.pending.is_empty() => self.focus_last_chip(props),
            KeyCode::Char(c) if !has_command_modifier(&key) => {
                self.pending.push(c);
                KeyOutcome::Consumed
            }
            _ => KeyOutcome::Ignored,
        }
    }

    fn handle_chip_key<F>(
        &mut self,
        props: TagInputProps<'_>,
        index: usize,
        key: KeyEvent,
        on_change: F,
    ) -> KeyOutcome
    where
        F: FnOnce(Vec<String>),
    {
        match key.code {
            KeyCode::Left => {
                self.focus = Focus::Chip(index.saturating_sub(1));
                KeyOutcome::Consumed
            }
            KeyCode::Right => {
                if index + 1 < props.value.len() {
                    self.focus = Focus::Chip(index + 1);
                } else if !props.limit_reached() {
                    self.focus = Focus::Entry;
                }
                KeyOutcome::Consumed
            }
            KeyCode::Delete | KeyCode::Backspace => {
                self.remove_at(props, index, on_change);
                KeyOutcome::Consumed
            }
            // With the entry withdrawn there is nowhere to return to.
            KeyCode::Esc if props.limit_reached() => KeyOutcome::Ignored,
            KeyCode::Esc => {
                self.focus = Focus::Entry;
                KeyOutcome::Consumed
            }
            _ if !props.limit_reached() && TriggerKey::from_event(&key).is_some() => {
                // Typing while a chip is focused goes to the entry.
                self.focus = Focus::Entry;
                self.handle_key(props, key, on_change)
            }
            _ => KeyOutcome::Ignored,
        }
    }

    fn focus_last_chip(&mut self, props: TagInputProps<'_>) -> KeyOutcome {
        match props.value.len() {
            0 => KeyOutcome::Ignored,
            n => {
                self.focus = Focus::Chip(n - 1);
                KeyOutcome::Consumed
            }
        }
    }

    /// Commit the pending text as a tag.
    ///
    /// Whitespace-only input is swallowed without effect. A duplicate clears
    /// the pending text and sets an advisory instead of calling `on_change`.
    pub fn commit<F>(&mut self, props: TagInputProps<'_>, on_change: F) -> KeyOutcome
    where
        F: FnOnce(Vec<String>),
    {
        if props.limit_reached() {
            return KeyOutcome::Ignored;
        }

        let trimmed = self.pending.trim();
        if trimmed.is_empty() {
            return KeyOutcome::Consumed;
        }
        let tag = trimmed.to_string();
        self.pending.clear();

        if props.value.contains(&tag) {
            self.generation += 1;
            let advisory = Advisory::duplicate(&tag, self.generation);
            hlog_debug!(
                "TagInput: rejected duplicate tag={:?} generation={}",
                tag,
                advisory.generation
            );
            self.advisory = Some(advisory);
            return KeyOutcome::Rejected {
                generation: self.generation,
            };
        }

        hlog_debug!("TagInput: commit tag={:?}", tag);
        let mut next = Vec::with_capacity(props.value.len() + 1);
        next.extend_from_slice(props.value);
        next.push(tag);
        on_change(next);
        KeyOutcome::Consumed
    }

    /// Remove the last tag. Returns false (and stays silent) on an empty list.
    pub fn remove_last<F>(&mut self, props: TagInputProps<'_>, on_change: F) -> bool
    where
        F: FnOnce(Vec<String>),
    {
        match props.value.len() {
            0 => false,
            n => self.remove_at(props, n - 1, on_change),
        }
    }

    /// Remove the tag at `index`, keeping the order of the rest.
    /// Out-of-range indices are ignored.
    pub fn remove_at<F>(
        &mut self,
        props: TagInputProps<'_>,
        index: usize,
        on_change: F,
    ) -> bool
    where
        F: FnOnce(Vec<String>),
    {
        if index >= props.value.len() {
            return false;
        }

        let next: Vec<String> = props
            .value
            .iter()
            .enumerate()
            .filter(|(i, _)| *i != index)
            .map(|(_, tag)| tag.clone())
            .collect();

        if let Focus::Chip(focused) = self.focus {
            let focused = if index < focused { focused - 1 } else { focused };
            self.focus = match next.len() {
                0 => Focus::Entry,
                n => Focus::Chip(focused.min(n - 1)),
            };
        }

        hlog_debug!("TagInput: remove index={} remaining={}", index, next.len());
        on_change(next);
        true
    }

    /// Clear the advisory if it still belongs to `generation`.
    /// Returns false for a stale or already-cleared generation.
    pub fn expire_advisory(&mut self, generation: u64) -> bool {
        match &self.advisory {
            Some(advisory) if advisory.generation == generation => {
                self.advisory = None;
                true
            }
            _ => false,
        }
    }
}

fn has_command_modifier(key: &KeyEvent) -> bool {
    key.modifiers
        .intersects(KeyModifiers::CONTROL | KeyModifiers::ALT)
}
