//! Per-channel tracking of chat participants and their metadata.

use std::collections::{hash_set, HashMap, HashSet};
use std::sync::{Arc, Mutex, RwLock, RwLockReadGuard, Weak};
use std::time::Duration;

use tokio::sync::mpsc;
use tokio::task::AbortHandle;
use tracing::debug;

use crate::color::Color;
use crate::message::Message;
use crate::pronouns;

/// The set of users believed to be present in a channel.
///
/// Usernames keep the case they were received with and are deduplicated
/// by exact string.
#[derive(Debug, Clone, Default)]
pub struct ChatterSet {
    users: HashSet<String>,
}

impl ChatterSet {
    /// Creates an empty chatter set.
    #[must_use]
    pub fn new() -> ChatterSet {
        ChatterSet::default()
    }

    /// Inserts a single username. Inserting the same name again is a no-op.
    pub fn insert(&mut self, user: impl Into<String>) {
        self.users.insert(user.into());
    }

    /// Returns whether the exact username is present.
    #[must_use]
    pub fn contains(&self, user: &str) -> bool {
        self.users.contains(user)
    }

    /// Returns the number of known chatters.
    #[must_use]
    pub fn len(&self) -> usize {
        self.users.len()
    }

    /// Returns whether no chatters are known.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.users.is_empty()
    }

    /// Iterates over the usernames in arbitrary order.
    pub fn iter(&self) -> hash_set::Iter<'_, String> {
        self.users.iter()
    }
}

impl Extend<String> for ChatterSet {
    fn extend<I: IntoIterator<Item = String>>(&mut self, users: I) {
        self.users.extend(users);
    }
}

impl<'a> IntoIterator for &'a ChatterSet {
    type Item = &'a String;
    type IntoIter = hash_set::Iter<'a, String>;

    fn into_iter(self) -> Self::IntoIter {
        self.iter()
    }
}

/// Which pending list a flush drains.
#[derive(Debug, Clone, Copy)]
enum Batch {
    Joined,
    Parted,
}

impl Batch {
    /// Returns the label that prefixes the coalesced user list.
    const fn label(self) -> &'static str {
        match self {
            Batch::Joined => "Users joined:",
            Batch::Parted => "Users parted:",
        }
    }
}

/// Users queued for the next flush in one direction.
#[derive(Debug, Default)]
struct PendingUsers {
    /// Usernames queued since the last flush.
    users: Vec<String>,
    /// Whether a flush task is already scheduled.
    flush_queued: bool,
    /// Handle for aborting the scheduled flush at teardown.
    flush_task: Option<AbortHandle>,
}

/// Tracks chat participants and per-user metadata for a single channel.
///
/// Join and part events are held back for the configured flush delay and
/// posted to the channel as a single collapsed system message per
/// direction, so a mass join produces one line instead of hundreds.
/// Color and pronoun lookups are case-insensitive and last-write-wins.
///
/// All methods may be called from any thread; each table is guarded
/// independently and no method holds more than one guard at a time.
/// Scheduling a flush requires an ambient tokio runtime.
pub struct ChannelChatters {
    state: Arc<State>,
}

/// State shared with the deferred flush tasks.
struct State {
    /// Sink for coalesced join/part system messages.
    sink: mpsc::UnboundedSender<Message>,
    /// How long join/part events are held back before flushing.
    flush_delay: Duration,
    /// Users seen chatting.
    chatters: RwLock<ChatterSet>,
    /// Lowercased username to display color.
    colors: RwLock<HashMap<String, Color>>,
    /// Lowercased username to pronoun code.
    pronouns: RwLock<HashMap<String, String>>,
    /// Joins queued for the next flush.
    joined: Mutex<PendingUsers>,
    /// Parts queued for the next flush.
    parted: Mutex<PendingUsers>,
}

impl ChannelChatters {
    /// Creates a tracker that posts its system messages into `sink`.
    #[must_use]
    pub fn new(sink: mpsc::UnboundedSender<Message>, flush_delay: Duration) -> ChannelChatters {
        ChannelChatters {
            state: Arc::new(State {
                sink,
                flush_delay,
                chatters: RwLock::default(),
                colors: RwLock::default(),
                pronouns: RwLock::default(),
                joined: Mutex::default(),
                parted: Mutex::default(),
            }),
        }
    }

    /// Returns a read-only view of the chatter set.
    ///
    /// The set is locked for writers until the guard is dropped.
    #[must_use]
    pub fn chatters(&self) -> RwLockReadGuard<'_, ChatterSet> {
        self.state.chatters.read().unwrap()
    }

    /// Records that `user` was seen chatting.
    pub fn add_recent_chatter(&self, user: impl Into<String>) {
        self.state.chatters.write().unwrap().insert(user.into());
    }

    /// Merges a bulk roster of usernames into the chatter set.
    ///
    /// This is a union: existing entries are never removed.
    pub fn update_chatters<I>(&self, users: I)
    where
        I: IntoIterator<Item = String>,
    {
        self.state.chatters.write().unwrap().extend(users);
    }

    /// Queues `user` for the next "Users joined:" summary message.
    pub fn add_joined_user(&self, user: impl Into<String>) {
        let user = user.into();
        debug!(%user, "user joined");

        self.queue_user(Batch::Joined, user);
    }

    /// Queues `user` for the next "Users parted:" summary message.
    pub fn add_parted_user(&self, user: impl Into<String>) {
        let user = user.into();
        debug!(%user, "user parted");

        self.queue_user(Batch::Parted, user);
    }

    /// Returns the display color for `user`, if one is known.
    ///
    /// The lookup is case-insensitive. `None` means the caller should keep
    /// its default text color.
    #[must_use]
    pub fn user_color(&self, user: &str) -> Option<Color> {
        self.state
            .colors
            .read()
            .unwrap()
            .get(&user.to_lowercase())
            .copied()
    }

    /// Stores the display color for `user`, replacing any previous one.
    pub fn set_user_color(&self, user: &str, color: Color) {
        self.state
            .colors
            .write()
            .unwrap()
            .insert(user.to_lowercase(), color);
    }

    /// Returns the number of users with a stored color.
    #[must_use]
    pub fn color_count(&self) -> usize {
        self.state.colors.read().unwrap().len()
    }

    /// Returns the pronoun display text for `user`, if a known pronoun
    /// code is stored.
    ///
    /// The lookup is case-insensitive. Codes outside the translation table
    /// yield `None`.
    #[must_use]
    pub fn user_pronouns(&self, user: &str) -> Option<&'static str> {
        self.state
            .pronouns
            .read()
            .unwrap()
            .get(&user.to_lowercase())
            .and_then(|code| pronouns::display(code))
    }

    /// Stores the pronoun code for `user`, replacing any previous one.
    pub fn set_user_pronouns(&self, user: &str, code: impl Into<String>) {
        self.state
            .pronouns
            .write()
            .unwrap()
            .insert(user.to_lowercase(), code.into());
    }

    /// Appends `user` to the pending list for `batch` and schedules a
    /// flush unless one is already queued for that direction.
    fn queue_user(&self, batch: Batch, user: String) {
        let mut pending = self.state.pending(batch).lock().unwrap();
        pending.users.push(user);

        if !pending.flush_queued {
            pending.flush_queued = true;

            let state = Arc::downgrade(&self.state);
            let delay = self.state.flush_delay;
            let task = tokio::spawn(async move {
                tokio::time::sleep(delay).await;
                flush(&state, batch);
            });

            pending.flush_task = Some(task.abort_handle());
        }
    }
}

impl Drop for ChannelChatters {
    fn drop(&mut self) {
        // A scheduled flush must not outlive the tracker.
        for pending in [&self.state.joined, &self.state.parted] {
            if let Some(task) = pending.lock().unwrap().flush_task.take() {
                task.abort();
            }
        }
    }
}

impl State {
    /// Returns the pending list for the given direction.
    fn pending(&self, batch: Batch) -> &Mutex<PendingUsers> {
        match batch {
            Batch::Joined => &self.joined,
            Batch::Parted => &self.parted,
        }
    }
}

/// Drains one pending list and posts the coalesced summary message.
///
/// The tracker may have been dropped while the timer was running, in
/// which case there is nothing to do.
fn flush(state: &Weak<State>, batch: Batch) {
    let Some(state) = state.upgrade() else {
        return;
    };

    let mut users = {
        let mut pending = state.pending(batch).lock().unwrap();
        pending.flush_queued = false;
        pending.flush_task = None;

        std::mem::take(&mut pending.users)
    };

    if users.is_empty() {
        return;
    }

    users.sort_unstable();

    debug!(label = batch.label(), count = users.len(), "flushing user batch");

    if state.sink.send(Message::user_list(batch.label(), &users)).is_err() {
        debug!("backlog closed, dropping user batch");
    }
}
