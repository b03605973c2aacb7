//! A chat channel and the participant state that hangs off it.

use std::time::Duration;

use tokio::sync::mpsc;
use tracing::debug;

use crate::chatters::ChannelChatters;
use crate::config::ChattersConfig;
use crate::consts;
use crate::message::Message;

/// A single chat channel.
///
/// The channel owns the sending half of its message backlog and the
/// participant tracker that posts into it; whoever renders the channel
/// holds the receiving half.
pub struct Channel {
    /// The channel name.
    name: String,
    /// Sender half of the channel's message backlog.
    messages: mpsc::UnboundedSender<Message>,
    /// Participant and metadata tracking.
    chatters: ChannelChatters,
}

impl Channel {
    /// Creates a new channel together with the receiving half of its
    /// message backlog.
    #[must_use]
    pub fn new(name: impl Into<String>) -> (Channel, mpsc::UnboundedReceiver<Message>) {
        Channel::with_flush_delay(name, consts::DEFAULT_FLUSH_DELAY)
    }

    /// Creates a new channel using the tracker settings from `config`.
    #[must_use]
    pub fn with_config(
        name: impl Into<String>,
        config: &ChattersConfig,
    ) -> (Channel, mpsc::UnboundedReceiver<Message>) {
        Channel::with_flush_delay(name, config.flush_delay)
    }

    /// Creates a new channel with a custom join/part flush delay.
    #[must_use]
    pub fn with_flush_delay(
        name: impl Into<String>,
        flush_delay: Duration,
    ) -> (Channel, mpsc::UnboundedReceiver<Message>) {
        let (tx, rx) = mpsc::unbounded_channel();
        let chatters = ChannelChatters::new(tx.clone(), flush_delay);

        let channel = Channel {
            name: name.into(),
            messages: tx,
            chatters,
        };

        (channel, rx)
    }

    /// Returns the name of the channel.
    #[must_use]
    pub fn name(&self) -> &str {
        &self.name
    }

    /// Returns the channel's participant tracker.
    #[must_use]
    pub fn chatters(&self) -> &ChannelChatters {
        &self.chatters
    }

    /// Posts a message to the channel's backlog.
    ///
    /// A closed backlog means the surrounding application is tearing the
    /// channel down, in which case the message is discarded.
    pub fn add_message(&self, message: Message) {
        if self.messages.send(message).is_err() {
            debug!(channel = %self.name, "backlog closed, dropping message");
        }
    }
}
