//! Chat simulation: a handful of users chatting with each other at random.
//!
//! Every user is an independent actor. The bootstrap starts them, introduces
//! every pair, then gets out of the way until Ctrl+C.
//!
//! ```text
//! chatter-sim --users 6 --tick-ms 500 --seed 42
//! RUST_LOG=debug chatter-sim
//! ```

use std::time::Duration;

use anyhow::Result;
use chatter::{populate, SimConfig};
use chatter_rt::tasks as rt;
use clap::Parser;

#[derive(Parser)]
#[command(name = "chatter-sim")]
#[command(version)]
#[command(about = "Simulate concurrent chat users")]
struct Cli {
    /// Number of concurrent chat users (minimum of 2)
    #[arg(short, long, default_value_t = chatter::config::DEFAULT_USERS)]
    users: usize,

    /// Milliseconds between two decisions of a user
    #[arg(long, default_value_t = 1000)]
    tick_ms: u64,

    /// Seed for reproducible choices
    #[arg(long)]
    seed: Option<u64>,
}

impl Cli {
    fn config(&self) -> SimConfig {
        SimConfig {
            users: self.users,
            tick: Duration::from_millis(self.tick_ms),
            seed: self.seed,
            ..SimConfig::default()
        }
    }
}

fn main() -> Result<()> {
    let cli = Cli::parse();
    let config = cli.config();
    config.validate()?;

    rt::run(async move {
        tracing::info!("Starting a chat sim with {} users", config.users);
        let users = populate(&config)?;
        rt::wait_for_shutdown().await;
        tracing::info!("Shutting down {} users", users.len());
        for user in &users {
            user.stop();
        }
        Ok::<_, anyhow::Error>(())
    })
}
