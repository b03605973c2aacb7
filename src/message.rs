//! Messages as they appear in a channel's backlog.

use bitflags::bitflags;

bitflags! {
    /// Display flags attached to a message.
    #[derive(Debug, Clone, Copy, PartialEq, Eq)]
    pub struct MessageFlags: u8 {
        /// The message was generated by the client rather than sent by a user.
        const SYSTEM = 1 << 0;
        /// The message is rendered collapsed until the user expands it.
        const COLLAPSED = 1 << 1;
    }
}

/// A single line in a channel's backlog.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Message {
    /// The display text.
    text: String,
    /// Display flags.
    flags: MessageFlags,
}

impl Message {
    /// Creates a system message with the given display text.
    #[must_use]
    pub fn system(text: impl Into<String>) -> Message {
        Message {
            text: text.into(),
            flags: MessageFlags::SYSTEM,
        }
    }

    /// Creates the collapsed system message that summarizes a batch of
    /// users, e.g. `Users joined: alice, bob`.
    #[must_use]
    pub fn user_list(label: &str, users: &[String]) -> Message {
        let mut message = Message::system(format!("{label} {}", users.join(", ")));
        message.flags |= MessageFlags::COLLAPSED;

        message
    }

    /// Returns the display text.
    #[must_use]
    pub fn text(&self) -> &str {
        &self.text
    }

    /// Returns the display flags.
    #[must_use]
    pub const fn flags(&self) -> MessageFlags {
        self.flags
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn system_messages_are_flagged() {
        let message = Message::system("connected");

        assert_eq!(message.text(), "connected");
        assert_eq!(message.flags(), MessageFlags::SYSTEM);
    }

    #[test]
    fn user_list_joins_names_with_commas() {
        let users = vec!["alice".to_string(), "bob".to_string()];
        let message = Message::user_list("Users joined:", &users);

        assert_eq!(message.text(), "Users joined: alice, bob");
        assert_eq!(
            message.flags(),
            MessageFlags::SYSTEM | MessageFlags::COLLAPSED
        );
    }
}
