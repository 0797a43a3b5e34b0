//! Tokio.rs reexports to prevent tokio dependencies within external code

pub use tokio::sync::mpsc::{unbounded_channel, UnboundedReceiver, UnboundedSender};
