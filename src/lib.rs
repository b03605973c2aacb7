//! Per-channel tracking of chat participants and their metadata for the
//! Glimt chat client.

pub mod channel;
pub mod chatters;
pub mod color;
pub mod config;
pub mod consts;
mod error;
pub mod message;
pub mod pronouns;

pub use channel::Channel;
pub use chatters::{ChannelChatters, ChatterSet};
pub use color::Color;
pub use config::Config;
pub use error::Error;
pub use message::{Message, MessageFlags};
