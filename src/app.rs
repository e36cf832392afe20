use std::sync::atomic::{AtomicBool, Ordering};
use std::sync::Arc;
use std::time::Duration;

use crossbeam_channel::Sender;
use crossterm::event::{self, Event, KeyEventKind};
use tokio::runtime::Builder;
use tokio::sync::mpsc;

use crate::actors::AdvisoryTimer;
use crate::editor::EditorConfig;
use crate::render::RenderState;
use crate::tea::{update, Command, Message, Model};
use crate::{hlog, hlog_debug, hlog_trace, Result};

const MAX_BG_MESSAGES: usize = 50;

pub struct LogicThread;

impl LogicThread {
    /// Run the logic loop until quit or `shutdown`. Returns the final tag list.
    pub fn run(
        tags: Vec<String>,
        config: EditorConfig,
        state_tx: Sender<RenderState>,
        shutdown: Arc<AtomicBool>,
    ) -> Result<Vec<String>> {
        Builder::new_current_thread()
            .enable_time()
            .build()?
            .block_on(Self::run_async(tags, config, state_tx, shutdown))
    }

    async fn run_async(
        tags: Vec<String>,
        config: EditorConfig,
        state_tx: Sender<RenderState>,
        shutdown: Arc<AtomicBool>,
    ) -> Result<Vec<String>> {
        hlog_debug!(
            "LogicThread::run_async tags={} max_tags={:?}",
            tags.len(),
            config.max_tags
        );
        let mut model = Model::new(tags, config);
        let (msg_tx, mut msg_rx) = mpsc::unbounded_channel::<Message>();
        // Dropped on every return path, which cancels a pending expiry.
        let mut timer = AdvisoryTimer::new(msg_tx);

        if send_state(&state_tx, &model) {
            model.dirty = false;
        }

        loop {
            if shutdown.load(Ordering::Relaxed) {
                break;
            }

            // Keyboard input (priority)
            while event::poll(Duration::ZERO)? {
                let msg = match event::read()? {
                    Event::Key(key) if key.kind != KeyEventKind::Release => {
                        hlog_trace!("key {:?}", key);
                        Message::Key(key)
                    }
                    Event::Resize(w, h) => Message::Resize(w, h),
                    _ => continue,
                };
                if dispatch(&mut model, msg, &mut timer) {
                    shutdown.store(true, Ordering::Relaxed);
                    return Ok(model.tags);
                }
            }

            // Background messages (bounded)
            for _ in 0..MAX_BG_MESSAGES {
                let Ok(msg) = msg_rx.try_recv() else { break };
                if dispatch(&mut model, msg, &mut timer) {
                    shutdown.store(true, Ordering::Relaxed);
                    return Ok(model.tags);
                }
            }

            if model.dirty && send_state(&state_tx, &model) {
                model.dirty = false;
            }

            tokio::time::sleep(Duration::from_millis(1)).await;
        }

        Ok(model.tags)
    }
}

/// Apply one message and run its commands. Returns true on quit.
pub fn dispatch(model: &mut Model, msg: Message, timer: &mut AdvisoryTimer) -> bool {
    for cmd in update(model, msg) {
        if execute_command(cmd, timer) {
            return true;
        }
    }
    false
}

fn execute_command(cmd: Command, timer: &mut AdvisoryTimer) -> bool {
    match cmd {
        Command::ScheduleAdvisoryExpiry { generation } => {
            hlog_debug!("Command::ScheduleAdvisoryExpiry generation={}", generation);
            timer.schedule(generation);
        }

        Command::Quit => {
            hlog!("Command::Quit");
            timer.cancel();
            return true;
        }
    }

    false
}

/// Publish a snapshot without blocking. A full channel leaves the model
/// dirty so the next loop iteration retries with a fresher snapshot.
fn send_state(state_tx: &Sender<RenderState>, model: &Model) -> bool {
    state_tx.try_send(model.snapshot()).is_ok()
}
