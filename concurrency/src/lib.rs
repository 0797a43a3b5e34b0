//! # chatter-concurrency
//!
//! Small actor toolkit the chat users are built on.
//!
//! - **[`tasks::Actor`]**: state owned by a single task, with `started` and
//!   `stopped` hooks.
//! - **[`tasks::Handler`]**: one implementation per message type the actor
//!   understands.
//! - **[`tasks::ActorRef`]** and **[`tasks::Recipient`]**: ways to reach a
//!   running actor, either knowing its concrete type or only one of the
//!   messages it accepts.
//! - **[`tasks::send_interval`]**: periodic messages, e.g. a tick.
//!
//! ## Quick Start
//!
//! ```ignore
//! use chatter_concurrency::tasks::{Actor, ActorStart as _, Context, Handler};
//!
//! chatter_concurrency::send_messages! { Bump }
//! chatter_concurrency::request_messages! { Count -> u64 }
//!
//! struct Counter(u64);
//!
//! impl Actor for Counter {}
//!
//! impl Handler<Bump> for Counter {
//!     async fn handle(&mut self, _msg: Bump, _ctx: &Context<Self>) {
//!         self.0 += 1;
//!     }
//! }
//!
//! impl Handler<Count> for Counter {
//!     async fn handle(&mut self, _msg: Count, _ctx: &Context<Self>) -> u64 {
//!         self.0
//!     }
//! }
//!
//! let counter = Counter(0).start();
//! counter.send(Bump)?;
//! assert_eq!(counter.request(Count).await?, 1);
//! ```
//!
//! Mailboxes are unbounded: `send` never waits, and messages from one sender
//! are handled in the order they were sent.

pub mod error;
pub mod message;
pub mod tasks;
