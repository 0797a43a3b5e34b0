//! Fire-and-forget delivery of chat events.
//!
//! Mailboxes are unbounded, so a send never waits on a slow recipient: the
//! sender and the other recipients move on. Nothing reports back whether the
//! event was handled. Events from one sender reach a recipient in the order
//! they were sent.

use chatter_concurrency::tasks::Recipient;

use crate::{event::ChatEvent, messages::Chat};

pub fn deliver(recipient: &Recipient<Chat>, event: ChatEvent) {
    if let Err(error) = recipient.send(Chat { event }) {
        tracing::debug!(%error, "Dropping chat event");
    }
}

/// Delivers a copy of `event` to each recipient.
pub fn broadcast<'a>(
    recipients: impl IntoIterator<Item = &'a Recipient<Chat>>,
    event: &ChatEvent,
) {
    for recipient in recipients {
        deliver(recipient, event.clone());
    }
}
