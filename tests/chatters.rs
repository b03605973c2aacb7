use std::time::Duration;

use tokio::sync::mpsc;
use tokio::sync::mpsc::error::TryRecvError;

use glimt::{Channel, ChannelChatters, Message, MessageFlags};

/// The flush delay used throughout these tests.
const FLUSH_DELAY: Duration = Duration::from_millis(500);

/// Creates a channel with the test flush delay and its backlog receiver.
fn channel() -> (Channel, mpsc::UnboundedReceiver<Message>) {
    Channel::with_flush_delay("#glimt", FLUSH_DELAY)
}

/// Waits until any pending flush for the current window has fired.
async fn advance_past_flush() {
    tokio::time::sleep(FLUSH_DELAY + Duration::from_millis(50)).await;
}

#[tokio::test(start_paused = true)]
async fn it_should_coalesce_joins_into_one_message() {
    let (channel, mut backlog) = channel();

    channel.chatters().add_joined_user("bob");
    channel.chatters().add_joined_user("alice");

    advance_past_flush().await;

    let message = backlog.try_recv().unwrap();
    assert_eq!(message.text(), "Users joined: alice, bob");
    assert_eq!(
        message.flags(),
        MessageFlags::SYSTEM | MessageFlags::COLLAPSED
    );

    // Both joins landed in the same window, so there is no second message.
    assert!(backlog.try_recv().is_err());
}

#[tokio::test(start_paused = true)]
async fn it_should_coalesce_parts_into_one_message() {
    let (channel, mut backlog) = channel();

    channel.chatters().add_parted_user("bob");
    channel.chatters().add_parted_user("alice");

    advance_past_flush().await;

    let message = backlog.try_recv().unwrap();
    assert_eq!(message.text(), "Users parted: alice, bob");
    assert!(backlog.try_recv().is_err());
}

#[tokio::test(start_paused = true)]
async fn it_should_keep_join_and_part_batches_independent() {
    let (channel, mut backlog) = channel();

    channel.chatters().add_joined_user("alice");
    channel.chatters().add_parted_user("bob");

    advance_past_flush().await;

    let first = backlog.try_recv().unwrap();
    let second = backlog.try_recv().unwrap();
    assert_eq!(first.text(), "Users joined: alice");
    assert_eq!(second.text(), "Users parted: bob");
    assert!(backlog.try_recv().is_err());
}

#[tokio::test(start_paused = true)]
async fn it_should_open_a_new_window_after_each_flush() {
    let (channel, mut backlog) = channel();

    channel.chatters().add_joined_user("alice");
    advance_past_flush().await;

    channel.chatters().add_joined_user("bob");
    advance_past_flush().await;

    assert_eq!(backlog.try_recv().unwrap().text(), "Users joined: alice");
    assert_eq!(backlog.try_recv().unwrap().text(), "Users joined: bob");
    assert!(backlog.try_recv().is_err());
}

#[tokio::test(start_paused = true)]
async fn it_should_not_flush_before_the_delay_elapses() {
    let (channel, mut backlog) = channel();

    channel.chatters().add_joined_user("alice");

    tokio::time::sleep(FLUSH_DELAY / 2).await;

    assert!(backlog.try_recv().is_err());
}

#[tokio::test(start_paused = true)]
async fn it_should_drop_pending_batches_at_teardown() {
    let (tx, mut backlog) = mpsc::unbounded_channel();
    let chatters = ChannelChatters::new(tx, FLUSH_DELAY);

    chatters.add_joined_user("alice");
    drop(chatters);

    advance_past_flush().await;

    // No message was posted and the sender side is gone.
    assert!(matches!(
        backlog.try_recv(),
        Err(TryRecvError::Disconnected)
    ));
}

#[tokio::test(start_paused = true)]
async fn it_should_track_chatters_alongside_batching() {
    let (channel, mut backlog) = channel();

    channel.chatters().add_joined_user("alice");
    channel.chatters().add_recent_chatter("alice");

    advance_past_flush().await;

    assert!(channel.chatters().chatters().contains("alice"));
    assert_eq!(backlog.try_recv().unwrap().text(), "Users joined: alice");
}
