//! Messages are inputs to the update function: keyboard events from the
//! terminal and completions from background actors.

use crossterm::event::KeyEvent;

/// Input messages to the update function.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Message {
    // Keyboard/terminal events
    Key(KeyEvent),
    Resize(u16, u16),

    // From background actors
    /// The advisory expiry timer for `generation` elapsed.
    AdvisoryExpired { generation: u64 },
}
