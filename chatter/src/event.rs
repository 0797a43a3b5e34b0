//! Chat events exchanged between users.

use chrono::{DateTime, Utc};

use crate::room::{ChatRoom, RoomId, UserId};

#[derive(Clone, Debug, PartialEq, Eq)]
pub enum ChatEventKind {
    /// A room was created. Only its members join it.
    New,
    /// A message was posted to a room.
    Message { text: String },
    /// A room was closed. Every recipient forgets it.
    Close,
}

#[derive(Clone, Debug, PartialEq, Eq)]
pub struct ChatEvent {
    /// User that triggered the event.
    pub from: UserId,
    /// Copy of the room as the sender saw it.
    pub room: ChatRoom,
    pub kind: ChatEventKind,
    pub timestamp: DateTime<Utc>,
}

impl ChatEvent {
    pub fn at(timestamp: DateTime<Utc>, from: UserId, room: ChatRoom, kind: ChatEventKind) -> Self {
        Self {
            from,
            room,
            kind,
            timestamp,
        }
    }

    pub fn new_chat(from: UserId, room: ChatRoom) -> Self {
        Self::at(Utc::now(), from, room, ChatEventKind::New)
    }

    pub fn message(from: UserId, room: ChatRoom, text: impl Into<String>) -> Self {
        Self::at(
            Utc::now(),
            from,
            room,
            ChatEventKind::Message { text: text.into() },
        )
    }

    pub fn close(from: UserId, room: ChatRoom) -> Self {
        Self::at(Utc::now(), from, room, ChatEventKind::Close)
    }

    pub fn room_id(&self) -> &RoomId {
        self.room.id()
    }

    /// Message payload, present on `Message` events only.
    pub fn text(&self) -> Option<&str> {
        match &self.kind {
            ChatEventKind::Message { text } => Some(text),
            ChatEventKind::New | ChatEventKind::Close => None,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn only_message_events_carry_text() {
        let room = ChatRoom::new([UserId::from("A"), UserId::from("B")]);
        let from = UserId::from("A");

        let new = ChatEvent::new_chat(from.clone(), room.clone());
        let message = ChatEvent::message(from.clone(), room.clone(), "hi");
        let close = ChatEvent::close(from, room);

        assert_eq!(new.text(), None);
        assert_eq!(message.text(), Some("hi"));
        assert_eq!(close.text(), None);
        assert_eq!(close.room_id().as_str(), "A_B");
    }
}
