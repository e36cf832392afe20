//! Commands are outputs from the update function: side effects to be
//! executed by the runtime.

/// Output commands from the update function.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Command {
    /// Start (or restart) the advisory expiry timer for `generation`.
    ScheduleAdvisoryExpiry { generation: u64 },

    /// Leave the app.
    Quit,
}
