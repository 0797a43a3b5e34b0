//! Messages a [`User`](crate::User) understands.

use chatter_concurrency::{request_messages, send_messages, tasks::Recipient};

use crate::{event::ChatEvent, room::UserId, user::UserSnapshot};

send_messages! {
    /// A peer is online and can be reached through `inbox`.
    Presence { id: UserId, inbox: Recipient<Chat> };
    /// A room was created, got a message, or was closed.
    Chat { event: ChatEvent };
    /// Time for the next autonomous decision.
    #[derive(Clone)]
    Tick
}

request_messages! {
    /// What the user believes right now. Outside of the chat protocol.
    Snapshot -> UserSnapshot
}
