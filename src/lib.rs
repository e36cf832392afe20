pub mod config;
pub mod editor;
pub mod error;
pub mod log;

// Decoupled game loop: logic thread + render thread
pub mod actors;
pub mod app;
pub mod render;
pub mod tea;
pub mod ui;

pub use editor::{
    EditorConfig, KeyOutcome, SeparatorSet, TagInput, TagInputProps, TriggerKey,
};
pub use error::{Error, Result};
