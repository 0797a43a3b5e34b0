//! # chatter
//!
//! A population of simulated chat users, each one an independent actor.
//!
//! There is no server and no shared state. Every [`User`] is an actor on its
//! own task and keeps its own view of who is online and which rooms it is
//! in. Users talk to each other only through their mailboxes:
//!
//! - **presence**: "this peer exists", delivered once per pair at bootstrap,
//! - **chat**: [`ChatEvent`]s announcing a new room, a message or a close.
//!
//! On every tick a user may start a room with random peers, say hello in one
//! of its rooms, or close one of them. Room ids are derived from the sorted
//! member ids, so the same group of users always lands in the same room id.
//!
//! ## Quick Start
//!
//! ```ignore
//! use chatter::{populate, SimConfig};
//! use chatter_rt::tasks as rt;
//!
//! rt::run(async {
//!     let users = populate(&SimConfig::default())?;
//!     rt::wait_for_shutdown().await;
//!     Ok::<_, chatter::ChatError>(())
//! });
//! ```
//!
//! ## Delivery
//!
//! Events are fire-and-forget: one unbounded send per recipient, no
//! acknowledgment. A mailbox keeps the order of a single sender, nothing
//! more. See [`fanout`].

pub mod action;
pub mod config;
pub mod error;
pub mod event;
pub mod fanout;
pub mod messages;
mod population;
pub mod room;
mod user;


pub use action::{Action, ActionOdds};
pub use config::SimConfig;
pub use error::{ChatError, ConfigError};
pub use event::{ChatEvent, ChatEventKind};
pub use population::populate;
pub use room::{derive_room_id, ChatRoom, RoomId, UserId};
pub use user::{Reaction, User, UserApi, UserSnapshot};
