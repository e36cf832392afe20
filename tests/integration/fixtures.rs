//! Test fixtures for integration tests.

use crossterm::event::{KeyCode, KeyEvent, KeyModifiers};
use ratatui::{backend::TestBackend, Terminal};

use hashtag::tea::{update, Command, Message, Model};
use hashtag::{ui, EditorConfig, SeparatorSet};

pub fn key(code: KeyCode) -> Message {
    Message::Key(KeyEvent::new(code, KeyModifiers::empty()))
}

pub fn tags(items: &[&str]) -> Vec<String> {
    items.iter().map(|s| s.to_string()).collect()
}

pub fn config(max_tags: Option<usize>, separators: &[&str]) -> EditorConfig {
    EditorConfig {
        max_tags,
        separators: SeparatorSet::parse(separators).expect("valid separators"),
    }
}

/// A host model plus a log of every list the editor reported.
pub struct Harness {
    pub model: Model,
    pub changes: Vec<Vec<String>>,
    pub commands: Vec<Command>,
}

impl Harness {
    pub fn new(value: &[&str]) -> Self {
        Self::with_config(value, EditorConfig::default())
    }

    pub fn with_config(value: &[&str], config: EditorConfig) -> Self {
        Self {
            model: Model::new(tags(value), config),
            changes: Vec::new(),
            commands: Vec::new(),
        }
    }

    pub fn send(&mut self, msg: Message) {
        let before = self.model.tags.clone();
        let cmds = update(&mut self.model, msg);
        if self.model.tags != before {
            self.changes.push(self.model.tags.clone());
        }
        self.commands.extend(cmds);
    }

    pub fn press(&mut self, code: KeyCode) {
        self.send(key(code));
    }

    pub fn type_text(&mut self, text: &str) {
        for c in text.chars() {
            self.press(KeyCode::Char(c));
        }
    }

    pub fn advisory(&self) -> Option<String> {
        self.model.snapshot().advisory
    }

    /// Draw the current snapshot into an in-memory terminal and return the
    /// text of every row.
    pub fn screen(&self) -> Vec<String> {
        let state = self.model.snapshot();
        let mut terminal = Terminal::new(TestBackend::new(64, 14)).expect("test terminal");
        terminal.draw(|f| ui::draw(f, &state)).expect("draw");
        let buffer = terminal.backend().buffer();
        (0..buffer.area.height)
            .map(|y| {
                (0..buffer.area.width)
                    .map(|x| buffer[(x, y)].symbol())
                    .collect::<String>()
            })
            .collect()
    }

    pub fn screen_text(&self) -> String {
        self.screen().join("\n")
    }
}
