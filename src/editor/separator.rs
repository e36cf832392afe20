//! Separator keys: the keystrokes that commit pending input as a tag.

use std::collections::HashSet;
use std::fmt;
use std::str::FromStr;

use crossterm::event::{KeyCode, KeyEvent, KeyModifiers};
use serde::{Deserialize, Deserializer};

use crate::Error;

/// A key that can be configured as a separator.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum TriggerKey {
    Enter,
    Tab,
    Char(char),
}

impl TriggerKey {
    /// Map a terminal key event to a trigger key.
    ///
    /// Ctrl/Alt chords never count as separators, so Ctrl+, stays free for
    /// the host.
    pub fn from_event(key: &KeyEvent) -> Option<Self> {
        if key
            .modifiers
            .intersects(KeyModifiers::CONTROL | KeyModifiers::ALT)
        {
            return None;
        }
        match key.code {
            KeyCode::Enter => Some(TriggerKey::Enter),
            KeyCode::Tab => Some(TriggerKey::Tab),
            KeyCode::Char(c) => Some(TriggerKey::Char(c)),
            _ => None,
        }
    }

    /// Human readable name used in the tip line.
    pub fn label(&self) -> String {
        match self {
            TriggerKey::Enter => "Enter".to_string(),
            TriggerKey::Tab => "Tab".to_string(),
            TriggerKey::Char(' ') => "Space".to_string(),
            TriggerKey::Char(',') => "Comma".to_string(),
            TriggerKey::Char(c) => format!("'{c}'"),
        }
    }
}

impl FromStr for TriggerKey {
    type Err = Error;

    /// Accepts `Enter`, `Tab`, `Space` (case-insensitive) or exactly one character.
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_ascii_lowercase().as_str() {
            "enter" | "return" => return Ok(TriggerKey::Enter),
            "tab" => return Ok(TriggerKey::Tab),
            "space" => return Ok(TriggerKey::Char(' ')),
            _ => {}
        }
        let mut chars = s.chars();
        match (chars.next(), chars.next()) {
            (Some(c), None) => Ok(TriggerKey::Char(c)),
            _ => Err(Error::InvalidSeparator(s.to_string())),
        }
    }
}

impl fmt::Display for TriggerKey {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.label())
    }
}

impl<'de> Deserialize<'de> for TriggerKey {
    fn deserialize<D: Deserializer<'de>>(deserializer: D) -> Result<Self, D::Error> {
        let s = String::deserialize(deserializer)?;
        s.parse().map_err(serde::de::Error::custom)
    }
}

/// The set of configured separators. Order carries no meaning.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SeparatorSet(HashSet<TriggerKey>);

impl SeparatorSet {
    pub fn new(keys: impl IntoIterator<Item = TriggerKey>) -> Self {
        Self(keys.into_iter().collect())
    }

    /// Parse a list of separator identifiers such as `["Enter", ","]`.
    pub fn parse<S: AsRef<str>>(names: &[S]) -> crate::Result<Self> {
        names
            .iter()
            .map(|n| n.as_ref().parse())
            .collect::<crate::Result<HashSet<_>>>()
            .map(Self)
    }

    pub fn contains(&self, key: TriggerKey) -> bool {
        self.0.contains(&key)
    }

    pub fn matches(&self, key: &KeyEvent) -> bool {
        TriggerKey::from_event(key).is_some_and(|k| self.contains(k))
    }

    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }

    /// Labels in a stable order (Enter, Tab, then characters) for display.
    pub fn labels(&self) -> Vec<String> {
        let mut keys: Vec<_> = self.0.iter().copied().collect();
        keys.sort_by_key(|k| match k {
            TriggerKey::Enter => (0, '\0'),
            TriggerKey::Tab => (1, '\0'),
            TriggerKey::Char(c) => (2, *c),
        });
        keys.iter().map(TriggerKey::label).collect()
    }
}

impl Default for SeparatorSet {
    fn default() -> Self {
        Self::new([TriggerKey::Enter, TriggerKey::Char(',')])
    }
}
