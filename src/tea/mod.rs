//! The Elm Architecture (TEA) host for the tag input.
//!
//! - `Model`: the committed tag list plus the editor's transient state
//! - `Message`: inputs to the update function
//! - `Command`: side effects requested by the update function
//! - `update`: transforms the model, returns commands

pub mod command;
pub mod message;
pub mod model;
pub mod update;

pub use command::Command;
pub use message::Message;
pub use model::Model;
pub use update::update;
