//! Runtime tasks-based traits and structs to implement concurrent code à-la-Erlang.

mod actor;
mod time;

#[cfg(test)]
mod timer_tests;

pub use actor::{
    request, Actor, ActorRef, ActorStart, Context, Handler, Receiver, Recipient,
};
pub use time::{send_interval, TimerHandle};
