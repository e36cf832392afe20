//! Update function for the TEA pattern.
//!
//! Keys go to the editor first. Whatever it reports through its change
//! callback replaces `model.tags`; keys it ignores may end the app.

use crossterm::event::{KeyCode, KeyEvent, KeyModifiers};

use crate::editor::{KeyOutcome, TagInputProps};
use crate::{hlog, hlog_debug};

use super::command::Command;
use super::message::Message;
use super::model::Model;

/// Model + Message → Commands
///
/// All I/O happens via the returned commands.
pub fn update(model: &mut Model, msg: Message) -> Vec<Command> {
    let mut cmds = Vec::new();

    match msg {
        Message::Key(key) => {
            model.dirty = true; // Keyboard input always triggers render

            if is_interrupt(&key) {
                cmds.push(Command::Quit);
                return cmds;
            }

            // `props` borrows `tags` while the editor is borrowed mutably, so the
            // replacement list is parked in `next` and applied afterwards.
            let mut next = None;
            let props = TagInputProps::new(&model.tags, &model.config);
            let outcome = model
                .editor
                .handle_key(props, key, |list| next = Some(list));

            if let Some(list) = next {
                hlog!("Tags changed: {:?}", list);
                model.tags = list;
            }

            match outcome {
                KeyOutcome::Rejected { generation } => {
                    cmds.push(Command::ScheduleAdvisoryExpiry { generation });
                }
                KeyOutcome::Ignored if key.code == KeyCode::Esc => {
                    cmds.push(Command::Quit);
                }
                KeyOutcome::Ignored | KeyOutcome::Consumed => {}
            }
        }

        Message::Resize(_, _) => {
            model.dirty = true; // Resize triggers re-render
        }

        Message::AdvisoryExpired { generation } => {
            if model.editor.expire_advisory(generation) {
                hlog_debug!("Message::AdvisoryExpired generation={}", generation);
                model.dirty = true;
            } else {
                hlog_debug!("Message::AdvisoryExpired stale generation={}", generation);
            }
        }
    }

    cmds
}

fn is_interrupt(key: &KeyEvent) -> bool {
    key.modifiers.contains(KeyModifiers::CONTROL) && key.code == KeyCode::Char('c')
}
