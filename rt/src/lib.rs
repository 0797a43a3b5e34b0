//! Runtime wrapper to keep tokio out of the simulation code. The chatter
//! crates only see what is reexported here, so swapping the executor means
//! touching this crate alone.
//!
//! Only the small subset of tokio the simulation needs is reexported. We may
//! want to extend it as needed.

pub mod tasks;
mod tracing;
