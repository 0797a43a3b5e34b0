//! Tokio.rs reexports to prevent tokio dependencies within external code
pub mod mpsc;
pub mod oneshot;

pub use tokio::{
    runtime::Runtime,
    select,
    task::{spawn, JoinHandle},
    time::{sleep, timeout},
};
pub use tokio_util::sync::CancellationToken;
