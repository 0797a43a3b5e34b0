use chatter_concurrency::error::ActorError;

use crate::room::{RoomId, UserId};

/// Failures local to a single user. None of them stops the user's loop.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum ChatError {
    #[error("no chats available")]
    NoChatsAvailable,
    #[error("duplicated chat id: {0}")]
    DuplicateChatId(RoomId),
    #[error("no peers to chat with")]
    NoPeers,
    #[error("'{0}' is not a known peer")]
    UnknownPeer(UserId),
    #[error(transparent)]
    Actor(#[from] ActorError),
    #[error(transparent)]
    Config(#[from] ConfigError),
}

#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum ConfigError {
    #[error("at least 2 users are required, got {0}")]
    TooFewUsers(usize),
    #[error("tick interval must be greater than zero")]
    ZeroTick,
    #[error("action odds add up to {total} out of {out_of}")]
    InvalidOdds { total: u32, out_of: u32 },
}
